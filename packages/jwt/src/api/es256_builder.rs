//! ES256 JWS builder

use crate::{
    crypto,
    error::{JwtError, JwtResult},
    types::{JwsHeader, JwsParts, JwsToken},
    validation::{ValidationOptions, validate_time_claims},
};
use eckit_common::LoggingTransformer;
use eckit_key::{EcKeyPair, JwkEcKey, PublicKey};
use p256::ecdsa::{SigningKey, VerifyingKey};
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// ES256 JWS builder - initial state
pub struct Es256Builder {
    header: JwsHeader,
}

impl Es256Builder {
    /// Builder with the `{"typ":"JWT","alg":"ES256"}` header
    #[must_use]
    pub fn new() -> Self {
        Self {
            header: JwsHeader::es256(),
        }
    }

    /// Replace the protected header
    #[must_use]
    pub fn with_header(mut self, header: JwsHeader) -> Self {
        self.header = header;
        self
    }

    /// Add a `kid` member to the header
    #[must_use]
    pub fn with_key_id(mut self, kid: impl Into<String>) -> Self {
        self.header.kid = Some(kid.into());
        self
    }

    /// Set private key for signing
    #[must_use]
    pub fn with_key(self, keypair: &EcKeyPair) -> Es256WithPrivateKey {
        Es256WithPrivateKey {
            signing_key: SigningKey::from(keypair.secret_key()),
            header: self.header,
        }
    }

    /// Set a private JWK for signing
    ///
    /// # Errors
    /// Returns `JwtError::Signing` if the JWK is not a P-256 private key
    pub fn with_jwk(self, jwk: &JwkEcKey) -> JwtResult<Es256WithPrivateKey> {
        let keypair = EcKeyPair::from_jwk(jwk).map_err(|e| {
            let err = JwtError::Signing(format!("Key is not usable for ES256: {e}"));
            LoggingTransformer::log_jwt_error("jws_signing", &self.header.alg, &err.to_string());
            err
        })?;
        Ok(self.with_key(&keypair))
    }

    /// Set public key for verification
    #[must_use]
    pub fn with_public_key(self, public_key: &PublicKey) -> Es256WithPublicKey {
        Es256WithPublicKey {
            verifying_key: VerifyingKey::from(public_key),
            validation: None,
        }
    }
}

impl Default for Es256Builder {
    fn default() -> Self {
        Self::new()
    }
}

/// ES256 builder with private key configured
pub struct Es256WithPrivateKey {
    signing_key: SigningKey,
    header: JwsHeader,
}

impl Es256WithPrivateKey {
    /// Serialize the claims once, compactly; the same bytes get signed
    ///
    /// # Errors
    /// Returns `JwtError::Serialization` if the claims do not serialize
    pub fn with_claims<T: Serialize>(self, claims: T) -> JwtResult<Es256WithClaims> {
        let payload = serde_json::to_vec(&claims)
            .map_err(|e| JwtError::Serialization(format!("Failed to serialize claims: {e}")))?;

        Ok(Es256WithClaims {
            signing_key: self.signing_key,
            header: self.header,
            payload,
        })
    }
}

/// ES256 builder with claims configured
pub struct Es256WithClaims {
    signing_key: SigningKey,
    header: JwsHeader,
    payload: Vec<u8>,
}

impl Es256WithClaims {
    /// JSON text that will be signed
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Sign - action method
    ///
    /// # Errors
    /// Returns `JwtError::UnsupportedAlgorithm` if the header is not ES256 and
    /// `JwtError::Signing` if the signer fails
    pub fn sign(self) -> JwtResult<JwsToken> {
        match crypto::es256_sign(&self.signing_key, &self.header, &self.payload) {
            Ok(jws) => Ok(JwsToken(jws)),
            Err(e) => {
                LoggingTransformer::log_jwt_error("jws_signing", &self.header.alg, &e.to_string());
                Err(e)
            }
        }
    }
}

/// ES256 builder with public key configured
pub struct Es256WithPublicKey {
    verifying_key: VerifyingKey,
    validation: Option<ValidationOptions>,
}

impl Es256WithPublicKey {
    /// Also enforce `exp`/`nbf` against the system clock
    #[must_use]
    pub fn with_validation(mut self, options: ValidationOptions) -> Self {
        self.validation = Some(options);
        self
    }

    /// Verify - action method
    ///
    /// # Errors
    /// Returns the verification error, or a time-claim error when validation
    /// options are set
    pub fn verify<T>(self, token: T) -> JwtResult<JwsParts>
    where
        T: AsRef<str>,
    {
        let result = crypto::es256_verify(&self.verifying_key, token.as_ref()).and_then(|parts| {
            if let Some(options) = &self.validation {
                validate_time_claims(&parts.claims, unix_now(), options)?;
            }
            Ok(parts)
        });

        if let Err(e) = &result {
            LoggingTransformer::log_jwt_error("jws_verification", crate::types::ES256, &e.to_string());
        }
        result
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
}
