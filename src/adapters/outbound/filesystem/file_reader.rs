use crate::graph_projection::domain::SourceLocation;
use crate::ports::outbound::SourceReader;
use crate::shared::error::GraphError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading local input files
///
/// Every read goes through the same checks:
/// - the path must exist and be a regular file
/// - symbolic links are rejected
/// - the size must stay within `MAX_FILE_SIZE`
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a whole file after the security checks
    pub fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        let metadata = validate_regular_file(path)?;
        validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

        fs::read(path).map_err(|e| {
            GraphError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceReader for FileSystemReader {
    fn read_source(&self, location: &SourceLocation) -> Result<Vec<u8>> {
        match location {
            SourceLocation::File(path) => self.read_file(path),
            SourceLocation::Remote(url) => anyhow::bail!(
                "FileSystemReader cannot read remote location {}",
                url
            ),
        }
    }
}
