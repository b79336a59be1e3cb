use crate::graph_projection::domain::SourceLocation;
use crate::shared::error::GraphError;
use crate::shared::Result;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Compiler binary used when none is configured
pub const DEFAULT_DTC: &str = "dtc";

/// DtcCompiler adapter compiling device tree source into a blob
///
/// The source is written to a temporary file and handed to
/// `dtc -I dts -O dtb -q`; the blob is read back from stdout. For local
/// sources the source's directory is added as an include path so that
/// `/include/` directives resolve next to the file.
pub struct DtcCompiler {
    binary: PathBuf,
}

impl DtcCompiler {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    pub fn compile(&self, source: &[u8], origin: &SourceLocation) -> Result<Vec<u8>> {
        let compiler_error = |details: String, hint: String| GraphError::CompilerError {
            origin: origin.to_string(),
            details,
            hint,
        };

        let mut source_file = tempfile::Builder::new()
            .prefix("dtgraph-")
            .suffix(".dts")
            .tempfile()
            .map_err(|e| {
                compiler_error(
                    format!("Failed to create temporary file: {}", e),
                    "Please verify that the temporary directory is writable".to_string(),
                )
            })?;
        source_file
            .write_all(source)
            .and_then(|_| source_file.flush())
            .map_err(|e| {
                compiler_error(
                    format!("Failed to write temporary file: {}", e),
                    "Please verify that the temporary directory is writable".to_string(),
                )
            })?;

        let mut command = Command::new(&self.binary);
        command.args(["-I", "dts", "-O", "dtb", "-q"]);
        if let Some(include_dir) = Self::include_dir(origin) {
            command.arg("-i").arg(include_dir);
        }
        command.arg(source_file.path());

        let output = command.output().map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                compiler_error(
                    format!("Device tree compiler not found: {}", self.binary.display()),
                    "Install dtc (package `device-tree-compiler`) or point --dtc or the `dtc` config key at it".to_string(),
                )
            } else {
                compiler_error(
                    format!("Failed to run {}: {}", self.binary.display(), e),
                    "Please verify that the compiler is executable".to_string(),
                )
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let details = if stderr.is_empty() {
                format!("{} exited with {}", self.binary.display(), output.status)
            } else {
                stderr
            };
            return Err(compiler_error(
                details,
                "Fix the reported error in the device tree source".to_string(),
            )
            .into());
        }

        Ok(output.stdout)
    }

    fn include_dir(origin: &SourceLocation) -> Option<&Path> {
        match origin {
            SourceLocation::File(path) => path.parent().filter(|dir| !dir.as_os_str().is_empty()),
            SourceLocation::Remote(_) => None,
        }
    }
}

impl Default for DtcCompiler {
    fn default() -> Self {
        Self::new(DEFAULT_DTC)
    }
}
