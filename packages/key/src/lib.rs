//! # eckit key management
//!
//! P-256 key generation with PEM and JWK export and import.
//!
//! ## Features
//!
//! - **Key Generation**: P-256 scalars drawn from the OS random source
//! - **PEM**: PKCS#8 private keys (SEC1 accepted on import), SPKI public keys
//! - **JWK**: RFC 7517 EC keys and RFC 7638 thumbprints
//! - **Key Files**: export to and import from a key directory, with an
//!   explicit round-trip check
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use eckit_key::{generate_key, store::{KeyExporter, KeyImporter}};
//!
//! # fn main() -> Result<(), eckit_key::KeyError> {
//! let key = generate_key()?;
//! KeyExporter::at("./keys").export(&key)?;
//! let imported = KeyImporter::at("./keys").import()?;
//! imported.verify_against(&key)?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod error;
mod generation;
mod keypair;
pub mod store;

pub use error::{KeyError, Result};
pub use generation::{MAX_GENERATION_ATTEMPTS, SCALAR_LEN, generate_key, generate_key_with};
pub use keypair::{
    CURVE_NAME, EcKeyPair, KEY_TYPE, jwk_thumbprint, public_key_from_pem, public_key_to_pem,
};

// Re-export the key types that appear in this crate's API
pub use p256::elliptic_curve::JwkEcKey;
pub use p256::{PublicKey, SecretKey};
