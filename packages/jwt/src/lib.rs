//! JSON Web Signature (JWS) compact serialization with ES256
//!
//! This crate provides:
//! - ES256 signing over P-256 keys from `eckit_key`
//! - Signature verification with decoded header and claims
//! - Standard claims handling
//! - Optional `exp`/`nbf` validation

pub mod api;
pub mod claims;
pub mod crypto;
mod error;
mod types;
pub mod validation;

pub use api::{Es256Builder, Jws};
pub use claims::Claims;
pub use error::*;
pub use types::*;
pub use validation::{ValidationOptions, validate_time_claims};
