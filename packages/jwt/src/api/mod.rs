//! Builder API

pub mod es256_builder;

pub use es256_builder::{Es256Builder, Es256WithClaims, Es256WithPrivateKey, Es256WithPublicKey};

/// Direct builder entry point
pub struct Jws;

impl Jws {
    /// ES256 builder
    #[must_use]
    pub fn es256() -> Es256Builder {
        Es256Builder::new()
    }
}
