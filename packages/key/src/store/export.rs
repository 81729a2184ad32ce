//! Key Exporter: writes PEM and JWK files

use super::files::KeyFiles;
use crate::error::{KeyError, Result};
use crate::keypair::EcKeyPair;
use eckit_common::LoggingTransformer;
use std::fs;
use std::io::Write;
use std::path::Path;
use zeroize::Zeroizing;

/// Serialized forms written by [`KeyExporter::export`]
pub struct ExportedKeys {
    /// PKCS#8 private key PEM
    pub private_pem: Zeroizing<String>,
    /// SubjectPublicKeyInfo PEM
    pub public_pem: String,
    /// Private JWK JSON
    pub jwk: Zeroizing<String>,
}

impl ExportedKeys {
    /// Serialize a key pair without touching the filesystem
    ///
    /// # Errors
    /// Returns `KeyError::Serialization` if a PEM encoder fails
    pub fn from_keypair(keypair: &EcKeyPair) -> Result<Self> {
        Ok(Self {
            private_pem: keypair.to_private_pem()?,
            public_pem: keypair.to_public_pem()?,
            jwk: keypair.to_jwk_string(),
        })
    }
}

impl std::fmt::Debug for ExportedKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportedKeys")
            .field("private_pem", &"[REDACTED]")
            .field("public_pem", &self.public_pem)
            .field("jwk", &"[REDACTED]")
            .finish()
    }
}

/// Writes a key pair to a [`KeyFiles`] set, overwriting existing files
pub struct KeyExporter {
    files: KeyFiles,
}

impl KeyExporter {
    /// Exporter targeting `files`
    #[must_use]
    pub fn new(files: KeyFiles) -> Self {
        Self { files }
    }

    /// Exporter using the default file names inside `dir`
    pub fn at<P: AsRef<Path>>(dir: P) -> Self {
        Self::new(KeyFiles::in_dir(dir))
    }

    /// Target files
    #[must_use]
    pub fn files(&self) -> &KeyFiles {
        &self.files
    }

    /// Serialize `keypair` and write all three files
    ///
    /// Missing parent directories are created. Existing files are replaced
    /// without backup. The private PEM and the JWK are owner-only on unix.
    ///
    /// # Errors
    /// Returns `KeyError::Io` if a directory or file cannot be written and
    /// `KeyError::Serialization` if encoding fails
    pub fn export(&self, keypair: &EcKeyPair) -> Result<ExportedKeys> {
        let exported = ExportedKeys::from_keypair(keypair)?;

        for dir in self.files.parent_dirs() {
            fs::create_dir_all(dir).map_err(|e| KeyError::io(dir, e))?;
        }

        write_secret_file(&self.files.private_pem, exported.private_pem.as_bytes())?;
        write_public_file(&self.files.public_pem, exported.public_pem.as_bytes())?;
        write_secret_file(&self.files.jwk, exported.jwk.as_bytes())?;

        LoggingTransformer::log_key_operation("export", &keypair.thumbprint(), true);
        Ok(exported)
    }
}

fn write_public_file(path: &Path, contents: &[u8]) -> Result<()> {
    fs::write(path, contents).map_err(|e| KeyError::io(path, e))?;
    LoggingTransformer::log_file_operation("write", path, contents.len());
    Ok(())
}

/// Write a file holding private key material, truncating any previous content
fn write_secret_file(path: &Path, contents: &[u8]) -> Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path).map_err(|e| KeyError::io(path, e))?;

    // `mode` only applies on creation; tighten files that already existed
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))
            .map_err(|e| KeyError::io(path, e))?;
    }

    file.write_all(contents).map_err(|e| KeyError::io(path, e))?;
    file.flush().map_err(|e| KeyError::io(path, e))?;

    LoggingTransformer::log_file_operation("write", path, contents.len());
    Ok(())
}
