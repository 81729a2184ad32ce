//! Key Importer: reads the exported files back into key objects

use super::export::ExportedKeys;
use super::files::KeyFiles;
use crate::error::{KeyError, Result};
use crate::keypair::{EcKeyPair, public_key_from_pem, public_key_to_pem};
use eckit_common::LoggingTransformer;
use p256::PublicKey;
use std::fs;
use std::path::Path;
use zeroize::Zeroizing;

/// Keys reconstructed from a key directory
#[derive(Debug, Clone)]
pub struct ImportedKeys {
    /// Key parsed from the private PEM
    pub private_key: EcKeyPair,
    /// Key parsed from the public PEM
    pub public_key: PublicKey,
    /// Key parsed from the JWK
    pub jwk_key: EcKeyPair,
    files: KeyFiles,
}

impl ImportedKeys {
    /// Re-serialize the imported keys for display
    ///
    /// # Errors
    /// Returns `KeyError::Serialization` if a PEM encoder fails
    pub fn reserialize(&self) -> Result<ExportedKeys> {
        Ok(ExportedKeys {
            private_pem: self.private_key.to_private_pem()?,
            public_pem: public_key_to_pem(&self.public_key)?,
            jwk: self.jwk_key.to_jwk_string(),
        })
    }

    /// Check every imported key against the key that was exported
    ///
    /// # Errors
    /// Returns `KeyError::RoundTripMismatch` naming the first file whose key
    /// differs from `original`
    pub fn verify_against(&self, original: &EcKeyPair) -> Result<()> {
        let checks = [
            (self.private_key == *original, &self.files.private_pem),
            (self.public_key == original.public_key(), &self.files.public_pem),
            (self.jwk_key == *original, &self.files.jwk),
        ];

        for (matches, path) in checks {
            if !matches {
                LoggingTransformer::log_key_operation("round_trip", &original.thumbprint(), false);
                return Err(KeyError::RoundTripMismatch {
                    source_file: path.clone(),
                });
            }
        }

        LoggingTransformer::log_key_operation("round_trip", &original.thumbprint(), true);
        Ok(())
    }
}

/// Reads a [`KeyFiles`] set written by the exporter
pub struct KeyImporter {
    files: KeyFiles,
}

impl KeyImporter {
    /// Importer reading `files`
    #[must_use]
    pub fn new(files: KeyFiles) -> Self {
        Self { files }
    }

    /// Importer using the default file names inside `dir`
    pub fn at<P: AsRef<Path>>(dir: P) -> Self {
        Self::new(KeyFiles::in_dir(dir))
    }

    /// Read and parse all three files
    ///
    /// # Errors
    /// Returns `KeyError::NotFound` if a file is missing,
    /// `KeyError::Serialization` if its content is not a P-256 key in the
    /// expected format, and `KeyError::Io` for other read failures
    pub fn import(&self) -> Result<ImportedKeys> {
        let private_pem = read_secret_file(&self.files.private_pem)?;
        let private_key = EcKeyPair::from_private_pem(&private_pem)
            .map_err(|e| annotate(e, &self.files.private_pem))?;

        let public_pem = read_file(&self.files.public_pem)?;
        let public_key =
            public_key_from_pem(&public_pem).map_err(|e| annotate(e, &self.files.public_pem))?;

        let jwk_json = read_secret_file(&self.files.jwk)?;
        let jwk_key =
            EcKeyPair::from_jwk_str(&jwk_json).map_err(|e| annotate(e, &self.files.jwk))?;

        LoggingTransformer::log_key_operation("import", &private_key.thumbprint(), true);

        Ok(ImportedKeys {
            private_key,
            public_key,
            jwk_key,
            files: self.files.clone(),
        })
    }
}

fn read_file(path: &Path) -> Result<String> {
    let contents = fs::read_to_string(path).map_err(|e| {
        let err = KeyError::io(path, e);
        LoggingTransformer::log_key_error("import", &err.to_string());
        err
    })?;
    LoggingTransformer::log_file_operation("read", path, contents.len());
    Ok(contents)
}

fn read_secret_file(path: &Path) -> Result<Zeroizing<String>> {
    read_file(path).map(Zeroizing::new)
}

/// Prefix parse errors with the file they came from
fn annotate(err: KeyError, path: &Path) -> KeyError {
    let err = match err {
        KeyError::Serialization(msg) => {
            KeyError::Serialization(format!("{}: {msg}", path.display()))
        }
        other => other,
    };
    LoggingTransformer::log_key_error("import", &err.to_string());
    err
}
