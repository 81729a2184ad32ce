//! P-256 key generation from the operating system's secure random source

use crate::error::{KeyError, Result};
use crate::keypair::EcKeyPair;
use eckit_common::LoggingTransformer;
use p256::SecretKey;
use rand::TryRngCore;
use rand::rngs::OsRng;
use zeroize::Zeroizing;

/// Size of a P-256 private scalar in bytes
pub const SCALAR_LEN: usize = 32;

/// Candidate scalars drawn before giving up.
///
/// A uniformly random 32-byte string is rejected (zero or >= n) with
/// probability below 2^-32, so hitting this limit means the source is broken.
pub const MAX_GENERATION_ATTEMPTS: usize = 8;

/// Generate a fresh P-256 key pair from the OS random source
///
/// # Errors
/// Returns `KeyError::Generation` if the OS random source is unavailable
pub fn generate_key() -> Result<EcKeyPair> {
    generate_key_with(&mut OsRng)
}

/// Generate a P-256 key pair from a caller-supplied random source
///
/// The source must be cryptographically secure; this is a seam for callers
/// that manage their own RNG.
///
/// # Errors
/// Returns `KeyError::Generation` if the source fails or keeps producing
/// bytes that are not a valid scalar
pub fn generate_key_with<R>(rng: &mut R) -> Result<EcKeyPair>
where
    R: TryRngCore + ?Sized,
{
    for attempt in 1..=MAX_GENERATION_ATTEMPTS {
        let mut candidate = Zeroizing::new([0u8; SCALAR_LEN]);
        rng.try_fill_bytes(&mut candidate[..]).map_err(|e| {
            let err = KeyError::Generation(format!("Secure random source unavailable: {e}"));
            LoggingTransformer::log_key_error("key_generation", &err.to_string());
            err
        })?;

        match SecretKey::from_slice(&candidate[..]) {
            Ok(secret) => {
                let keypair = EcKeyPair::from_secret_key(secret);
                LoggingTransformer::log_key_operation("generate", &keypair.thumbprint(), true);
                return Ok(keypair);
            }
            Err(_) => log::debug!("Rejected out-of-range scalar candidate (attempt {attempt})"),
        }
    }

    let err = KeyError::Generation(format!(
        "No valid P-256 scalar after {MAX_GENERATION_ATTEMPTS} attempts"
    ));
    LoggingTransformer::log_key_error("key_generation", &err.to_string());
    Err(err)
}
