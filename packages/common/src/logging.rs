//! Structured logging infrastructure
//!
//! Provides env_logger-based logging with secure handling of key identifiers
//! and proper integration with the standard log crate.

use log::{debug, error, info, warn};
use sha2::{Digest, Sha256};
use std::path::Path;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Default filter when `RUST_LOG` is unset; keeps stdout output unpolluted.
const DEFAULT_FILTER: &str = "warn";

/// Logging infrastructure using `env_logger`
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (should be called once at application startup)
    ///
    /// Configure logging levels via `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - Enable all debug logs
    /// - `RUST_LOG=info` - Enable info and above
    /// - `RUST_LOG=eckit_key=debug,eckit_jwt=info` - Module-specific levels
    ///
    /// Log lines go to stderr so the pipeline output on stdout stays intact.
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(DEFAULT_FILTER),
            )
            .format_timestamp_micros()
            .init();

            debug!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Use this in test modules to avoid initialization conflicts
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log key lifecycle operations
    ///
    /// The key identifier (normally a JWK thumbprint) is hashed before logging
    pub fn log_key_operation(operation: &str, key_id: &str, success: bool) {
        let key_hash = Self::secure_hash_key(key_id);
        if success {
            info!("Key operation succeeded: {operation} (key_hash: {key_hash})");
        } else {
            warn!("Key operation failed: {operation} (key_hash: {key_hash})");
        }
    }

    /// Log file writes and reads of key material, without the contents
    pub fn log_file_operation(operation: &str, path: &Path, bytes: usize) {
        debug!("File: {operation} {} ({bytes} bytes)", path.display());
    }

    /// Log key handling errors
    pub fn log_key_error(operation: &str, error_msg: &str) {
        error!("Key operation failed: {operation} ({error_msg})");
    }

    /// Log JWT/JWS errors with the algorithm that was in use
    pub fn log_jwt_error(operation: &str, algorithm: &str, error_msg: &str) {
        error!("JWT operation failed: {operation} (alg: {algorithm}, error: {error_msg})");
    }

    /// Cryptographically secure key hashing for logging
    ///
    /// Returns `#` followed by the first 12 hex characters of the SHA-256 hash.
    fn secure_hash_key(key: &str) -> String {
        let hash = Sha256::digest(key.as_bytes());
        let hex_hash = format!("{hash:x}");
        format!("#{}", &hex_hash[..12])
    }
}
