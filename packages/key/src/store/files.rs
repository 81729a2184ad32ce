//! Key file locations

use std::path::{Path, PathBuf};

/// Default private key PEM file name
pub const PRIVATE_KEY_FILE: &str = "private_key.pem";
/// Default public key PEM file name
pub const PUBLIC_KEY_FILE: &str = "public_key.pem";
/// Default JWK file name (JSON text despite the extension)
pub const JWK_FILE: &str = "jwk.key";

/// Paths of the three files making up an exported key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFiles {
    /// Private key PEM
    pub private_pem: PathBuf,
    /// Public key PEM
    pub public_pem: PathBuf,
    /// Private JWK JSON
    pub jwk: PathBuf,
}

impl KeyFiles {
    /// Default file names inside `dir`
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self::with_names(dir, PRIVATE_KEY_FILE, PUBLIC_KEY_FILE, JWK_FILE)
    }

    /// Custom file names inside `dir`
    pub fn with_names<P: AsRef<Path>>(dir: P, private_pem: &str, public_pem: &str, jwk: &str) -> Self {
        let dir = dir.as_ref();
        Self {
            private_pem: dir.join(private_pem),
            public_pem: dir.join(public_pem),
            jwk: dir.join(jwk),
        }
    }

    /// Directories that must exist before writing
    pub(super) fn parent_dirs(&self) -> impl Iterator<Item = &Path> {
        [&self.private_pem, &self.public_pem, &self.jwk]
            .into_iter()
            .filter_map(|path| path.parent())
            .filter(|dir| !dir.as_os_str().is_empty())
    }
}
