//! Claims serialization and time-claim validation

use eckit_jwt::{Claims, JwsHeader, JwtError, ValidationOptions, validate_time_claims};
use serde_json::json;

#[test]
fn test_header_serializes_typ_before_alg() {
    let header = serde_json::to_string(&JwsHeader::es256()).unwrap();
    assert_eq!(header, r#"{"typ":"JWT","alg":"ES256"}"#);

    let with_kid = serde_json::to_string(&JwsHeader::es256().with_key_id("k1".into())).unwrap();
    assert_eq!(with_kid, r#"{"typ":"JWT","alg":"ES256","kid":"k1"}"#);
}

#[test]
fn test_header_without_typ_parses() {
    let header: JwsHeader = serde_json::from_str(r#"{"alg":"ES256"}"#).unwrap();
    assert_eq!(header.typ, None);
    assert_eq!(header.alg, "ES256");
}

#[test]
fn test_claims_skip_absent_members() {
    let claims = Claims::new().subject("user");
    assert_eq!(serde_json::to_string(&claims).unwrap(), r#"{"sub":"user"}"#);
    assert_eq!(serde_json::to_string(&Claims::new()).unwrap(), "{}");
}

#[test]
fn test_custom_claims_are_flattened() {
    let claims = Claims::new()
        .audience("api")
        .issuer("eckit")
        .issued_at(10)
        .not_before(5)
        .jwt_id("id-1")
        .claim("scope", "read")
        .claim("level", 3);

    let value = serde_json::to_value(&claims).unwrap();
    assert_eq!(
        value,
        json!({
            "aud": "api",
            "iss": "eckit",
            "iat": 10,
            "nbf": 5,
            "jti": "id-1",
            "scope": "read",
            "level": 3
        })
    );

    let parsed: Claims = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, claims);
}

#[test]
fn test_registered_names_are_never_duplicated() {
    let claims = Claims::new().audience("a").claim("aud", "b");
    assert_eq!(claims.aud.as_deref(), Some("b"));
    assert!(claims.custom.is_empty());
    assert_eq!(serde_json::to_string(&claims).unwrap(), r#"{"aud":"b"}"#);

    let claims = Claims::new().claim("exp", 7).expires_at(9);
    assert_eq!(serde_json::to_string(&claims).unwrap(), r#"{"exp":9}"#);
}

#[test]
fn test_registered_name_with_wrong_type_replaces_typed_field() {
    let claims = Claims::new()
        .audience("a")
        .claim("aud", json!(["a", "b"]))
        .expires_at(1)
        .claim("exp", "soon");

    assert_eq!(claims.aud, None);
    assert_eq!(claims.exp, None);
    assert_eq!(
        serde_json::to_string(&claims).unwrap(),
        r#"{"aud":["a","b"],"exp":"soon"}"#
    );

    let claims = claims.audience("c");
    assert_eq!(serde_json::to_string(&claims).unwrap(), r#"{"aud":"c","exp":"soon"}"#);
}

#[test]
fn test_expired_token_is_rejected() {
    let claims = json!({ "exp": 1_464_269_795 });
    let err = validate_time_claims(&claims, 1_700_000_000, &ValidationOptions::default()).unwrap_err();
    assert_eq!(err, JwtError::TokenExpired);
}

#[test]
fn test_leeway_applies_to_expiry() {
    let claims = json!({ "exp": 1_000 });
    let options = ValidationOptions::default();

    assert!(validate_time_claims(&claims, 1_030, &options).is_ok());
    assert!(validate_time_claims(&claims, 1_030, &ValidationOptions::strict()).is_err());
}

#[test]
fn test_not_before_is_enforced() {
    let claims = json!({ "nbf": 2_000 });
    let err = validate_time_claims(&claims, 1_000, &ValidationOptions::strict()).unwrap_err();
    assert_eq!(err, JwtError::TokenNotYetValid);
    assert!(validate_time_claims(&claims, 2_000, &ValidationOptions::strict()).is_ok());
}

#[test]
fn test_disabled_checks_and_missing_claims_pass() {
    let options = ValidationOptions {
        leeway_secs: 0,
        validate_exp: false,
        validate_nbf: false,
    };
    let claims = json!({ "exp": 0, "nbf": i64::MAX });
    assert!(validate_time_claims(&claims, 1_000, &options).is_ok());
    assert!(validate_time_claims(&json!({}), 1_000, &ValidationOptions::strict()).is_ok());
}
