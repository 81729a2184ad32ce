//! JWT claims carried in the JWS payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JWT claims.
///
/// Members serialize in declaration order and absent members are skipped,
/// so `aud`, `exp`, `sub` come out exactly as a push-service payload expects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Audience.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    /// Expiry (unix seconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Subject.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Issuer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    /// Issued-at (unix seconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Not before (unix seconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
    /// JWT ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    /// Custom claims, flattened into the root object.
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

impl Claims {
    /// Empty claims set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the audience (aud) claim.
    #[must_use]
    pub fn audience(mut self, aud: impl Into<String>) -> Self {
        self.custom.remove("aud");
        self.aud = Some(aud.into());
        self
    }

    /// Set the expiry (exp) claim.
    #[must_use]
    pub fn expires_at(mut self, exp: i64) -> Self {
        self.custom.remove("exp");
        self.exp = Some(exp);
        self
    }

    /// Set the subject (sub) claim.
    #[must_use]
    pub fn subject(mut self, sub: impl Into<String>) -> Self {
        self.custom.remove("sub");
        self.sub = Some(sub.into());
        self
    }

    /// Set the issuer (iss) claim.
    #[must_use]
    pub fn issuer(mut self, iss: impl Into<String>) -> Self {
        self.custom.remove("iss");
        self.iss = Some(iss.into());
        self
    }

    /// Set the issued-at (iat) claim.
    #[must_use]
    pub fn issued_at(mut self, iat: i64) -> Self {
        self.custom.remove("iat");
        self.iat = Some(iat);
        self
    }

    /// Set the not-before (nbf) claim.
    #[must_use]
    pub fn not_before(mut self, nbf: i64) -> Self {
        self.custom.remove("nbf");
        self.nbf = Some(nbf);
        self
    }

    /// Set the JWT ID (jti) claim.
    #[must_use]
    pub fn jwt_id(mut self, jti: impl Into<String>) -> Self {
        self.custom.remove("jti");
        self.jti = Some(jti.into());
        self
    }

    /// Add a claim by name.
    ///
    /// Registered names go to their typed field, replacing any earlier value.
    /// A registered name with a value of the wrong JSON type clears the typed
    /// field and is kept as given, so each name appears once in the payload.
    #[must_use]
    pub fn claim(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let value = value.into();

        let routed = match name.as_str() {
            "aud" => set_string(&mut self.aud, &value),
            "sub" => set_string(&mut self.sub, &value),
            "iss" => set_string(&mut self.iss, &value),
            "jti" => set_string(&mut self.jti, &value),
            "exp" => set_number(&mut self.exp, &value),
            "iat" => set_number(&mut self.iat, &value),
            "nbf" => set_number(&mut self.nbf, &value),
            _ => false,
        };

        if routed {
            self.custom.remove(&name);
        } else {
            self.custom.insert(name, value);
        }
        self
    }
}

fn set_string(field: &mut Option<String>, value: &Value) -> bool {
    *field = value.as_str().map(str::to_string);
    field.is_some()
}

fn set_number(field: &mut Option<i64>, value: &Value) -> bool {
    *field = value.as_i64();
    field.is_some()
}
