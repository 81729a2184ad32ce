//! JSON configuration with per-field defaults

use crate::error::{CliError, Result};
use eckit_jwt::Claims;
use eckit_key::store::{JWK_FILE, KeyFiles, PRIVATE_KEY_FILE, PUBLIC_KEY_FILE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default `aud` of the signed payload
pub const DEFAULT_AUDIENCE: &str = "https://push.services.mozilla.com";
/// Default `exp` of the signed payload
pub const DEFAULT_EXPIRY: i64 = 1_464_269_795;
/// Default `sub` of the signed payload
pub const DEFAULT_SUBJECT: &str = "https://example.com";

/// Runtime settings for the pipeline
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EckitConfig {
    /// Directory holding the three key files
    #[serde(default = "default_key_dir")]
    pub key_dir: PathBuf,
    /// Private key PEM file name
    #[serde(default = "default_private_key_file")]
    pub private_key_file: String,
    /// Public key PEM file name
    #[serde(default = "default_public_key_file")]
    pub public_key_file: String,
    /// JWK output (JSON text despite the `.key` extension)
    #[serde(default = "default_jwk_file")]
    pub jwk_file: String,
    /// Payload of the signed JWS
    #[serde(default = "default_claims")]
    pub claims: Claims,
}

fn default_key_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_private_key_file() -> String {
    PRIVATE_KEY_FILE.to_string()
}

fn default_public_key_file() -> String {
    PUBLIC_KEY_FILE.to_string()
}

fn default_jwk_file() -> String {
    JWK_FILE.to_string()
}

fn default_claims() -> Claims {
    Claims::new()
        .audience(DEFAULT_AUDIENCE)
        .expires_at(DEFAULT_EXPIRY)
        .subject(DEFAULT_SUBJECT)
}

impl Default for EckitConfig {
    fn default() -> Self {
        Self {
            key_dir: default_key_dir(),
            private_key_file: default_private_key_file(),
            public_key_file: default_public_key_file(),
            jwk_file: default_jwk_file(),
            claims: default_claims(),
        }
    }
}

impl EckitConfig {
    /// Load a JSON configuration file; absent fields take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("cannot read {}: {e}", path.display())))?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| CliError::Config(format!("invalid config {}: {e}", path.display())))?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// The three key file paths under `key_dir`
    pub fn key_files(&self) -> KeyFiles {
        KeyFiles::with_names(
            &self.key_dir,
            &self.private_key_file,
            &self.public_key_file,
            &self.jwk_file,
        )
    }
}
