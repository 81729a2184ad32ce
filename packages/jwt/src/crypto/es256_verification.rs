//! ES256 verification with ECDSA P-256

use crate::{
    error::{JwtError, JwtResult},
    types::{ES256, JwsHeader, JwsParts},
};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use p256::ecdsa::{Signature, VerifyingKey, signature::Verifier};

/// Verify a compact JWS and decode its header and claims
///
/// Only the signature is checked here; time claims are left to
/// [`crate::validation::validate_time_claims`].
///
/// # Errors
/// Returns `JwtError::InvalidFormat` for malformed segments,
/// `JwtError::UnsupportedAlgorithm` for a non-ES256 header and
/// `JwtError::InvalidSignature` if the signature does not verify
pub fn es256_verify(verifying_key: &VerifyingKey, token: &str) -> JwtResult<JwsParts> {
    let parts: Vec<&str> = token.split('.').collect();
    let [header_b64, claims_b64, signature_b64] = parts[..] else {
        return Err(JwtError::InvalidFormat(format!(
            "expected 3 segments, found {}",
            parts.len()
        )));
    };

    let header_json = URL_SAFE_NO_PAD
        .decode(header_b64)
        .map_err(|_| JwtError::invalid_format("header is not base64url"))?;
    let header: JwsHeader = serde_json::from_slice(&header_json)
        .map_err(|e| JwtError::InvalidFormat(format!("header is not a JOSE header: {e}")))?;
    if header.alg != ES256 {
        return Err(JwtError::unsupported_algorithm(&header.alg));
    }

    let signature_bytes = URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| JwtError::InvalidSignature)?;
    let signature = Signature::from_slice(&signature_bytes).map_err(|_| JwtError::InvalidSignature)?;

    let signing_input_len = header_b64.len() + 1 + claims_b64.len();
    verifying_key
        .verify(token[..signing_input_len].as_bytes(), &signature)
        .map_err(|_| JwtError::InvalidSignature)?;

    // Only decode claims after signature verification succeeds
    let claims_json = URL_SAFE_NO_PAD
        .decode(claims_b64)
        .map_err(|_| JwtError::invalid_format("payload is not base64url"))?;
    let claims: serde_json::Value = serde_json::from_slice(&claims_json)
        .map_err(|e| JwtError::InvalidFormat(format!("payload is not JSON: {e}")))?;

    Ok(JwsParts { header, claims })
}
