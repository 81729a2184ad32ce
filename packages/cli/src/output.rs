//! Human-readable stdout blocks

use eckit_jwt::JwsToken;
use eckit_key::store::ExportedKeys;
use std::io::{self, Write};

/// Title of the block showing the generated key
pub const GENERATE_TITLE: &str = "Generate Key";
/// Title of the block showing the re-imported key
pub const IMPORT_TITLE: &str = "Import  Key";
/// Title of the block showing the signed token
pub const SIGNATURE_TITLE: &str = "Signature Key";

const RULE_WIDTH: usize = 72;

/// `----- <title> ` followed by a fixed run of dashes
pub fn separator(title: &str) -> String {
    format!("----- {title} {}", "-".repeat(RULE_WIDTH))
}

/// Private PEM, public PEM and JWK between two separators
pub fn write_key_block<W: Write>(out: &mut W, title: &str, keys: &ExportedKeys) -> io::Result<()> {
    writeln!(out, "{}", separator(title))?;
    writeln!(out, "private key\n{}", keys.private_pem.as_str())?;
    writeln!(out, "public  key\n{}", keys.public_pem)?;
    writeln!(out, "jwk\n{}", keys.jwk.as_str())?;
    close_block(out, title)
}

/// The compact JWS between two separators
pub fn write_signature_block<W: Write>(out: &mut W, jws: &JwsToken) -> io::Result<()> {
    writeln!(out, "{}", separator(SIGNATURE_TITLE))?;
    writeln!(out, "JWS")?;
    writeln!(out, "{jws}")?;
    close_block(out, SIGNATURE_TITLE)
}

fn close_block<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{}\n\n", separator(title))?;
    out.flush()
}
