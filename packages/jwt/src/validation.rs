//! Time-claim validation, kept apart from signature verification.

use crate::error::{JwtError, JwtResult};
use serde_json::Value;

/// Options for [`validate_time_claims`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Leeway for time-based claims, in seconds.
    pub leeway_secs: i64,
    /// Validate expiry.
    pub validate_exp: bool,
    /// Validate not-before.
    pub validate_nbf: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            leeway_secs: 60,
            validate_exp: true,
            validate_nbf: true,
        }
    }
}

impl ValidationOptions {
    /// Strict validation with no leeway.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            leeway_secs: 0,
            ..Self::default()
        }
    }
}

/// Check `exp` and `nbf` against `now` (unix seconds).
///
/// Missing or non-integer time claims are not an error.
///
/// # Errors
/// Returns `JwtError::TokenExpired` or `JwtError::TokenNotYetValid`
pub fn validate_time_claims(claims: &Value, now: i64, options: &ValidationOptions) -> JwtResult<()> {
    if options.validate_exp {
        if let Some(exp) = claims.get("exp").and_then(Value::as_i64) {
            if now >= exp.saturating_add(options.leeway_secs) {
                return Err(JwtError::TokenExpired);
            }
        }
    }

    if options.validate_nbf {
        if let Some(nbf) = claims.get("nbf").and_then(Value::as_i64) {
            if now < nbf.saturating_sub(options.leeway_secs) {
                return Err(JwtError::TokenNotYetValid);
            }
        }
    }

    Ok(())
}
