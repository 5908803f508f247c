//! Shared error types for the application

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for porttrack operations
#[derive(Debug, Error)]
pub enum Error {
    /// A required input file or directory does not exist
    #[error("{} not found", path.display())]
    MissingInputFile { path: PathBuf },

    /// Source text is not valid UTF-8
    #[error("{} is not valid UTF-8 text", path.display())]
    Encoding { path: PathBuf },

    /// File system errors other than a missing file
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be used
    #[error("Configuration error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// A lexical pattern failed to compile
    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

impl Error {
    /// Create a missing-input error for the given path
    pub fn missing(path: impl Into<PathBuf>) -> Self {
        Self::MissingInputFile { path: path.into() }
    }

    /// Classify an I/O failure on `path`, mapping `NotFound` to `MissingInputFile`
    pub fn from_io(path: &Path, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::missing(path),
            std::io::ErrorKind::InvalidData => Self::Encoding {
                path: path.to_path_buf(),
            },
            _ => Self::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    /// Create a configuration error with path context
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// True for the error kinds that mean "the input was never there"
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingInputFile { .. })
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
