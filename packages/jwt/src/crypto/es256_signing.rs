//! ES256 signing with ECDSA P-256

use crate::{
    error::{JwtError, JwtResult},
    types::{ES256, JwsHeader},
};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use p256::ecdsa::{Signature, SigningKey, signature::Signer};

/// Produce a compact JWS over an already-serialized JSON payload
///
/// The payload bytes are embedded as-is, so the signed text is exactly the
/// caller's serialization. Signatures use RFC 6979 nonces and the 64-byte
/// `r || s` encoding of RFC 7518 §3.4.
///
/// # Errors
/// Returns `JwtError::UnsupportedAlgorithm` if the header is not ES256 and
/// `JwtError::Signing` if the signer fails
pub fn es256_sign(signing_key: &SigningKey, header: &JwsHeader, payload: &[u8]) -> JwtResult<String> {
    if header.alg != ES256 {
        return Err(JwtError::unsupported_algorithm(&header.alg));
    }

    let header_json =
        serde_json::to_vec(header).map_err(|e| JwtError::serialization(&e.to_string()))?;
    let header_b64 = URL_SAFE_NO_PAD.encode(&header_json);
    let payload_b64 = URL_SAFE_NO_PAD.encode(payload);

    let mut signing_input = String::with_capacity(header_b64.len() + 1 + payload_b64.len());
    signing_input.push_str(&header_b64);
    signing_input.push('.');
    signing_input.push_str(&payload_b64);

    let signature: Signature = signing_key
        .try_sign(signing_input.as_bytes())
        .map_err(|e| JwtError::Signing(format!("ECDSA P-256 signing failed: {e}")))?;
    let signature_b64 = URL_SAFE_NO_PAD.encode(signature.to_bytes());

    let mut jws = String::with_capacity(signing_input.len() + 1 + signature_b64.len());
    jws.push_str(&signing_input);
    jws.push('.');
    jws.push_str(&signature_b64);

    Ok(jws)
}
