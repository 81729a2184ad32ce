//! Errors surfaced by the eckit binary

use eckit_jwt::JwtError;
use eckit_key::KeyError;

/// Pipeline failure, wrapping the library errors unchanged
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Config file unreadable or not valid JSON
    #[error("Configuration error: {0}")]
    Config(String),
    /// Key generation, export or import failed
    #[error(transparent)]
    Key(#[from] KeyError),
    /// Signing or self-verification failed
    #[error(transparent)]
    Jwt(#[from] JwtError),
    /// Writing to stdout failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type for the binary
pub type Result<T> = std::result::Result<T, CliError>;
