//! JWS error types

use std::fmt;

/// JWS operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// JWS error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JwtError {
    /// Key does not fit the declared algorithm, or the signer failed
    Signing(String),
    /// Claims or header could not be serialized
    Serialization(String),
    /// Token is not three base64url segments of JSON
    InvalidFormat(String),
    /// Signature does not verify
    InvalidSignature,
    /// Header names an algorithm other than ES256
    UnsupportedAlgorithm(String),
    /// Token has expired
    TokenExpired,
    /// Token not yet valid
    TokenNotYetValid,
}

impl fmt::Display for JwtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JwtError::Signing(msg) => write!(f, "Signing error: {msg}"),
            JwtError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            JwtError::InvalidFormat(msg) => write!(f, "Invalid JWS format: {msg}"),
            JwtError::InvalidSignature => write!(f, "Invalid JWS signature"),
            JwtError::UnsupportedAlgorithm(alg) => write!(f, "Unsupported algorithm: {alg}"),
            JwtError::TokenExpired => write!(f, "JWT token has expired"),
            JwtError::TokenNotYetValid => write!(f, "JWT token not yet valid"),
        }
    }
}

impl std::error::Error for JwtError {}

impl JwtError {
    /// Create a serialization error
    #[inline]
    #[must_use]
    pub fn serialization(msg: &str) -> Self {
        JwtError::Serialization(msg.to_string())
    }

    /// Create an invalid format error
    #[inline]
    #[must_use]
    pub fn invalid_format(msg: &str) -> Self {
        JwtError::InvalidFormat(msg.to_string())
    }

    /// Create an unsupported algorithm error
    #[inline]
    #[must_use]
    pub fn unsupported_algorithm(alg: &str) -> Self {
        JwtError::UnsupportedAlgorithm(alg.to_string())
    }
}
