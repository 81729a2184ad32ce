//! generate -> export -> import -> sign

use crate::config::EckitConfig;
use crate::error::Result;
use crate::output::{self, GENERATE_TITLE, IMPORT_TITLE};
use eckit_jwt::{Jws, JwsToken};
use eckit_key::store::{ExportedKeys, KeyExporter, KeyImporter};
use eckit_key::{EcKeyPair, generate_key};
use std::io::Write;

/// Everything the pipeline produced, for callers that inspect it
#[derive(Debug)]
pub struct PipelineReport {
    /// Generated key pair
    pub key: EcKeyPair,
    /// Text written to the key files
    pub exported: ExportedKeys,
    /// Imported keys serialized again
    pub reimported: ExportedKeys,
    /// Signed token
    pub jws: JwsToken,
}

/// Run the whole pipeline, writing the three blocks to `out`
///
/// The key directory is overwritten. Re-imported keys must match the
/// generated one, and the token must verify under the re-imported public key.
pub fn run<W: Write>(config: &EckitConfig, out: &mut W) -> Result<PipelineReport> {
    let files = config.key_files();

    let key = generate_key()?;
    let exported = KeyExporter::new(files.clone()).export(&key)?;
    output::write_key_block(out, GENERATE_TITLE, &exported)?;

    let imported = KeyImporter::new(files).import()?;
    imported.verify_against(&key)?;
    let reimported = imported.reserialize()?;
    output::write_key_block(out, IMPORT_TITLE, &reimported)?;

    let jws = Jws::es256().with_key(&key).with_claims(&config.claims)?.sign()?;
    Jws::es256().with_public_key(&imported.public_key).verify(&jws)?;
    output::write_signature_block(out, &jws)?;

    log::info!("Pipeline complete in {}", config.key_dir.display());
    Ok(PipelineReport {
        key,
        exported,
        reimported,
        jws,
    })
}
