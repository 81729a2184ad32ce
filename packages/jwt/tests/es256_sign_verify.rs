//! ES256 compact JWS signing and verification

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use eckit_jwt::{Claims, JwsHeader, JwsToken, JwtError, Jws, ValidationOptions};
use eckit_key::{EcKeyPair, generate_key};
use proptest::prelude::*;

fn push_claims() -> Claims {
    Claims::new()
        .audience("https://push.services.mozilla.com")
        .expires_at(1_464_269_795)
        .subject("https://example.com")
}

fn sign(key: &EcKeyPair, claims: &Claims) -> String {
    Jws::es256()
        .with_key(key)
        .with_claims(claims)
        .unwrap()
        .sign()
        .unwrap()
        .into_string()
}

fn decode_segment(segment: &str) -> String {
    String::from_utf8(URL_SAFE_NO_PAD.decode(segment).unwrap()).unwrap()
}

#[test]
fn test_push_service_scenario() {
    let key = generate_key().unwrap();
    let token = sign(&key, &push_claims());

    assert_eq!(token.matches('.').count(), 2);

    let segments: Vec<&str> = token.split('.').collect();
    assert_eq!(decode_segment(segments[0]), r#"{"typ":"JWT","alg":"ES256"}"#);
    assert_eq!(
        decode_segment(segments[1]),
        r#"{"aud":"https://push.services.mozilla.com","exp":1464269795,"sub":"https://example.com"}"#
    );

    // Fixed-width r || s
    assert_eq!(URL_SAFE_NO_PAD.decode(segments[2]).unwrap().len(), 64);
}

#[test]
fn test_signed_payload_is_the_serialized_claims() {
    let key = generate_key().unwrap();
    let claims = Claims::new().audience("a").claim("aud", "b");

    let builder = Jws::es256().with_key(&key).with_claims(&claims).unwrap();
    assert_eq!(builder.payload(), br#"{"aud":"b"}"#);
    let expected_payload = builder.payload().to_vec();
    let token = builder.sign().unwrap();

    let segments = token.segments();
    assert_eq!(segments.len(), 3);
    assert_eq!(URL_SAFE_NO_PAD.decode(segments[1]).unwrap(), expected_payload);

    let reparsed = JwsToken::from(token.to_string());
    assert_eq!(reparsed, token);
    let parts = Jws::es256()
        .with_public_key(&key.public_key())
        .verify(reparsed)
        .unwrap();
    assert_eq!(parts.claims, serde_json::json!({ "aud": "b" }));
}

#[test]
fn test_signature_verifies_with_original_public_key() {
    let key = generate_key().unwrap();
    let token = sign(&key, &push_claims());

    let parts = Jws::es256()
        .with_public_key(&key.public_key())
        .verify(&token)
        .unwrap();

    assert_eq!(parts.header, JwsHeader::es256());
    assert_eq!(parts.claims["sub"], "https://example.com");
    assert_eq!(parts.claims["exp"], 1_464_269_795);
}

#[test]
fn test_signature_from_reimported_key_verifies_under_original() {
    let key = generate_key().unwrap();
    let reimported = EcKeyPair::from_private_pem(&key.to_private_pem().unwrap()).unwrap();
    let token = sign(&reimported, &push_claims());

    Jws::es256()
        .with_public_key(&key.public_key())
        .verify(&token)
        .unwrap();
}

#[test]
fn test_signing_is_deterministic() {
    let key = generate_key().unwrap();
    assert_eq!(sign(&key, &push_claims()), sign(&key, &push_claims()));
}

#[test]
fn test_wrong_public_key_is_rejected() {
    let key = generate_key().unwrap();
    let other = generate_key().unwrap();
    let token = sign(&key, &push_claims());

    let err = Jws::es256()
        .with_public_key(&other.public_key())
        .verify(&token)
        .unwrap_err();
    assert_eq!(err, JwtError::InvalidSignature);
}

#[test]
fn test_tampered_payload_is_rejected() {
    let key = generate_key().unwrap();
    let token = sign(&key, &push_claims());
    let segments: Vec<&str> = token.split('.').collect();

    let forged_claims = push_claims().subject("https://attacker.example");
    let forged_payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&forged_claims).unwrap());
    let forged = format!("{}.{}.{}", segments[0], forged_payload, segments[2]);

    let err = Jws::es256()
        .with_public_key(&key.public_key())
        .verify(&forged)
        .unwrap_err();
    assert_eq!(err, JwtError::InvalidSignature);
}

#[test]
fn test_malformed_tokens_are_rejected() {
    let key = generate_key().unwrap();
    let verifier = || Jws::es256().with_public_key(&key.public_key());

    assert!(matches!(verifier().verify("a.b"), Err(JwtError::InvalidFormat(_))));
    assert!(matches!(verifier().verify("a.b.c.d"), Err(JwtError::InvalidFormat(_))));
    assert!(matches!(verifier().verify("!!.e30.AA"), Err(JwtError::InvalidFormat(_))));

    let token = sign(&key, &push_claims());
    let truncated = &token[..token.len() - 4];
    assert_eq!(verifier().verify(truncated).unwrap_err(), JwtError::InvalidSignature);
}

#[test]
fn test_non_es256_header_is_rejected() {
    let key = generate_key().unwrap();

    let err = Jws::es256()
        .with_header(JwsHeader::new("HS256"))
        .with_key(&key)
        .with_claims(push_claims())
        .unwrap()
        .sign()
        .unwrap_err();
    assert_eq!(err, JwtError::UnsupportedAlgorithm("HS256".to_string()));

    let header = URL_SAFE_NO_PAD.encode(br#"{"typ":"JWT","alg":"none"}"#);
    let token = format!("{header}.e30.");
    let err = Jws::es256()
        .with_public_key(&key.public_key())
        .verify(&token)
        .unwrap_err();
    assert_eq!(err, JwtError::UnsupportedAlgorithm("none".to_string()));
}

#[test]
fn test_signing_with_jwk() {
    let key = generate_key().unwrap();
    let token = Jws::es256()
        .with_jwk(&key.to_jwk())
        .unwrap()
        .with_claims(push_claims())
        .unwrap()
        .sign()
        .unwrap();

    assert_eq!(token.into_string(), sign(&key, &push_claims()));
}

#[test]
fn test_public_only_jwk_cannot_sign() {
    let key = generate_key().unwrap();
    let result = Jws::es256().with_jwk(&key.to_public_jwk());
    assert!(matches!(result, Err(JwtError::Signing(_))));
}

#[test]
fn test_key_id_appears_in_header() {
    let key = generate_key().unwrap();
    let token = Jws::es256()
        .with_key_id(key.thumbprint())
        .with_key(&key)
        .with_claims(push_claims())
        .unwrap()
        .sign()
        .unwrap();

    let parts = Jws::es256()
        .with_public_key(&key.public_key())
        .verify(&token)
        .unwrap();
    assert_eq!(parts.header.kid, Some(key.thumbprint()));
    assert_eq!(parts.header.typ.as_deref(), Some("JWT"));
}

#[test]
fn test_time_validation_is_opt_in() {
    let key = generate_key().unwrap();
    let token = sign(&key, &push_claims());

    // The push-service payload expired in 2016; plain verification ignores that
    Jws::es256()
        .with_public_key(&key.public_key())
        .verify(&token)
        .unwrap();

    let err = Jws::es256()
        .with_public_key(&key.public_key())
        .with_validation(ValidationOptions::default())
        .verify(&token)
        .unwrap_err();
    assert_eq!(err, JwtError::TokenExpired);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_any_claims_verify_and_any_signature_flip_fails(
        sub in "[a-zA-Z0-9:/._-]{0,40}",
        exp in any::<i64>(),
        extra in any::<u32>(),
        flip_index in 0usize..64,
        flip_bit in 0u8..8,
    ) {
        let key = generate_key().unwrap();
        let claims = Claims::new().subject(sub.clone()).expires_at(exp).claim("n", extra);
        let token = sign(&key, &claims);

        let parts = Jws::es256().with_public_key(&key.public_key()).verify(&token).unwrap();
        prop_assert_eq!(parts.claims["sub"].as_str(), Some(sub.as_str()));
        prop_assert_eq!(parts.claims["exp"].as_i64(), Some(exp));

        let segments: Vec<&str> = token.split('.').collect();
        let mut signature = URL_SAFE_NO_PAD.decode(segments[2]).unwrap();
        signature[flip_index] ^= 1 << flip_bit;
        let forged = format!("{}.{}.{}", segments[0], segments[1], URL_SAFE_NO_PAD.encode(&signature));

        let result = Jws::es256().with_public_key(&key.public_key()).verify(&forged);
        prop_assert!(result.is_err());
    }
}
