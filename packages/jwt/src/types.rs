//! JWS type definitions

use serde::{Deserialize, Serialize};

/// The only algorithm this crate signs and verifies
pub const ES256: &str = "ES256";

/// JOSE header
///
/// Serialized member order is `typ`, `alg`, `kid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwsHeader {
    /// Media type, `JWT` unless cleared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    /// Signature algorithm
    pub alg: String,
    /// Key identifier, typically a JWK thumbprint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
}

impl JwsHeader {
    /// Header with `typ` set to `JWT`
    #[must_use]
    pub fn new(alg: &str) -> Self {
        Self {
            typ: Some("JWT".to_string()),
            alg: alg.to_string(),
            kid: None,
        }
    }

    /// `{"typ":"JWT","alg":"ES256"}`
    #[must_use]
    pub fn es256() -> Self {
        Self::new(ES256)
    }

    /// Add a `kid` member
    #[must_use]
    pub fn with_key_id(mut self, kid: String) -> Self {
        self.kid = Some(kid);
        self
    }
}

impl Default for JwsHeader {
    fn default() -> Self {
        Self::es256()
    }
}

/// Compact JWS string wrapper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JwsToken(pub String);

impl JwsToken {
    /// Header, payload and signature segments, still base64url encoded
    #[must_use]
    pub fn segments(&self) -> Vec<&str> {
        self.0.split('.').collect()
    }

    /// Unwrap the token text
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for JwsToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl AsRef<str> for JwsToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JwsToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decoded content of a verified token
#[derive(Debug, Clone)]
pub struct JwsParts {
    /// Protected header
    pub header: JwsHeader,
    /// Payload as parsed JSON
    pub claims: serde_json::Value,
}
