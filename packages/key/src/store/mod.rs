//! File-based export and import of key material
//!
//! A key directory holds three files: the private key PEM, the public key PEM
//! and the private JWK. Exports overwrite whatever is there.

mod export;
mod files;
mod import;

pub use export::{ExportedKeys, KeyExporter};
pub use files::{JWK_FILE, KeyFiles, PRIVATE_KEY_FILE, PUBLIC_KEY_FILE};
pub use import::{ImportedKeys, KeyImporter};
