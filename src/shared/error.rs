use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Scripts can tell a bad input apart from a broken environment
/// (missing `dtc`, unreachable URL, unwritable output).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The graph was generated and presented
    Success = 0,
    /// The device tree input was rejected (unsupported extension, missing file)
    InvalidInput = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (decode failure, compiler failure, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Classifies an application error into an exit code
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<GraphError>() {
            Some(
                GraphError::UnsupportedFormat { .. }
                | GraphError::SourceNotFound { .. }
                | GraphError::InvalidSourcePath { .. },
            ) => ExitCode::InvalidInput,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidInput => write!(f, "Invalid Input (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for device tree graph generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Unsupported device tree file: {location}\n\n💡 Hint: The file must be a .dts, .dtsi, .dtb or .dtbo file")]
    UnsupportedFormat { location: String },

    #[error("Input file not found: {path}\n\n💡 Hint: Please verify the path passed with --file or --style")]
    SourceNotFound { path: PathBuf },

    #[error("Invalid input path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a regular file")]
    InvalidSourcePath { path: PathBuf, reason: String },

    #[error("Failed to decode device tree blob: {origin}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a valid flattened device tree (.dtb)")]
    DecodeError { origin: String, details: String },

    #[error("Failed to compile device tree source: {origin}\nDetails: {details}\n\n💡 Hint: {hint}")]
    CompilerError {
        origin: String,
        details: String,
        hint: String,
    },

    #[error("Failed to fetch {url}\nDetails: {details}\n\n💡 Hint: Please verify the URL and your network connection")]
    FetchError { url: String, details: String },

    #[error("Failed to load stylesheet: {location}\nDetails: {details}\n\n💡 Hint: The stylesheet must be a JSON document")]
    StylesheetError { location: String, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for requests and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidInput.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::InvalidInput), "Invalid Input (1)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_exit_code_for_unsupported_format() {
        let error: anyhow::Error = GraphError::UnsupportedFormat {
            location: "board.txt".to_string(),
        }
        .into();
        assert_eq!(ExitCode::for_error(&error), ExitCode::InvalidInput);
    }

    #[test]
    fn test_exit_code_for_missing_source_through_context() {
        let result: std::result::Result<(), GraphError> = Err(GraphError::SourceNotFound {
            path: PathBuf::from("/missing.dtb"),
        });
        let error = result.context("while loading").unwrap_err();
        assert_eq!(ExitCode::for_error(&error), ExitCode::InvalidInput);
    }

    #[test]
    fn test_exit_code_for_other_errors() {
        let error: anyhow::Error = GraphError::DecodeError {
            origin: "board.dtb".to_string(),
            details: "BadMagic".to_string(),
        }
        .into();
        assert_eq!(ExitCode::for_error(&error), ExitCode::ApplicationError);

        let plain = anyhow::anyhow!("something else");
        assert_eq!(ExitCode::for_error(&plain), ExitCode::ApplicationError);
    }

    #[test]
    fn test_unsupported_format_display() {
        let error = GraphError::UnsupportedFormat {
            location: "notes.txt".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Unsupported device tree file"));
        assert!(display.contains("notes.txt"));
        assert!(display.contains(".dtb"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_decode_error_display() {
        let error = GraphError::DecodeError {
            origin: "/boot/board.dtb".to_string(),
            details: "BadMagic".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to decode device tree blob"));
        assert!(display.contains("/boot/board.dtb"));
        assert!(display.contains("BadMagic"));
    }

    #[test]
    fn test_compiler_error_display() {
        let error = GraphError::CompilerError {
            origin: "board.dts".to_string(),
            details: "syntax error".to_string(),
            hint: "Fix the source".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to compile device tree source"));
        assert!(display.contains("syntax error"));
        assert!(display.contains("Fix the source"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = GraphError::FileWriteError {
            path: PathBuf::from("/test/graph.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/graph.json"));
        assert!(display.contains("Permission denied"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_security_error_display() {
        let error = GraphError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("/test/symlink"));
        assert!(display.contains("Use a regular file instead"));
    }
}
