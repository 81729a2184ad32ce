//! eckit command line: P-256 key generation, PEM/JWK round-trip and ES256 signing

pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;

use clap::Parser;
use std::path::PathBuf;

pub use config::EckitConfig;
pub use error::{CliError, Result};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "eckit")]
#[command(about = "Generate a P-256 key, round-trip it through PEM and JWK files, and sign an ES256 JWS")]
pub struct Cli {
    /// Directory for private_key.pem, public_key.pem and jwk.key (default: current directory)
    ///
    /// Existing key files in this directory are overwritten.
    #[arg(long, short = 'd')]
    pub key_dir: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Defaults, then the config file, then command-line overrides
    pub fn resolve_config(&self) -> Result<EckitConfig> {
        let mut config = match &self.config {
            Some(path) => EckitConfig::load(path)?,
            None => EckitConfig::default(),
        };
        if let Some(dir) = &self.key_dir {
            config.key_dir = dir.clone();
        }
        Ok(config)
    }
}
