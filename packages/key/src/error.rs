//! Error handling for key generation, export and import

use std::path::PathBuf;
use thiserror::Error;

/// Key-specific errors
#[derive(Debug, Error)]
pub enum KeyError {
    /// Secure randomness or curve parameter failure
    #[error("Key generation error: {0}")]
    Generation(String),

    /// Malformed key material on export or import, or wrong key type
    #[error("Key serialization error: {0}")]
    Serialization(String),

    /// Key file could not be read or written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Key file does not exist (export step skipped)
    #[error("Key file not found: {}", path.display())]
    NotFound {
        /// Missing file
        path: PathBuf,
    },

    /// A re-imported key does not match the key it was exported from
    #[error("Round-trip mismatch: key read from {} differs from the original", source_file.display())]
    RoundTripMismatch {
        /// File whose contents did not match
        source_file: PathBuf,
    },
}

impl KeyError {
    /// Create a serialization error
    #[inline]
    #[must_use]
    pub fn serialization(msg: &str) -> Self {
        KeyError::Serialization(msg.to_string())
    }

    /// Classify an I/O error for `path`, mapping missing files to `NotFound`
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            KeyError::NotFound { path }
        } else {
            KeyError::Io { path, source }
        }
    }
}

/// Result type for key operations
pub type Result<T> = std::result::Result<T, KeyError>;
