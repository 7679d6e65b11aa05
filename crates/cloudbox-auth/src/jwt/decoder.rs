//! Session token verification against the identity provider's signing key.

use async_trait::async_trait;
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use cloudbox_core::config::{AuthConfig, TokenAlgorithm};
use cloudbox_core::error::{AppError, ErrorKind};
use cloudbox_core::result::AppResult;
use cloudbox_core::traits::{Identity, IdentityVerifier};

use super::claims::Claims;

/// Verifies session tokens and turns them into caller identities.
#[derive(Clone)]
pub struct JwtIdentityVerifier {
    /// Key matching the provider's signing algorithm.
    decoding_key: DecodingKey,
    /// Algorithm, leeway, and issuer checks.
    validation: Validation,
}

impl std::fmt::Debug for JwtIdentityVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtIdentityVerifier")
            .field("algorithms", &self.validation.algorithms)
            .field("leeway", &self.validation.leeway)
            .finish()
    }
}

impl JwtIdentityVerifier {
    /// Creates a verifier from auth configuration.
    ///
    /// Fails with a configuration error when the RS256 public key is
    /// missing or not valid PEM.
    pub fn new(config: &AuthConfig) -> AppResult<Self> {
        let (algorithm, decoding_key) = match config.algorithm {
            TokenAlgorithm::Hs256 => (
                Algorithm::HS256,
                DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            ),
            TokenAlgorithm::Rs256 => {
                if config.public_key_pem.trim().is_empty() {
                    return Err(AppError::configuration(
                        "auth.public_key_pem is required for rs256",
                    ));
                }
                let key = DecodingKey::from_rsa_pem(config.public_key_pem.as_bytes())
                    .map_err(|e| {
                        AppError::with_source(
                            ErrorKind::Configuration,
                            "auth.public_key_pem is not a valid RSA public key",
                            e,
                        )
                    })?;
                (Algorithm::RS256, key)
            }
        };

        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;
        validation.validate_aud = false;
        validation.leeway = config.leeway_seconds;
        validation.set_required_spec_claims(&["exp", "sub"]);
        if let Some(issuer) = config.issuer.as_deref().filter(|i| !i.is_empty()) {
            validation.set_issuer(&[issuer]);
        }

        Ok(Self {
            decoding_key,
            validation,
        })
    }

    /// Decodes and validates a token string into its claims.
    pub fn decode_claims(&self, token: &str) -> AppResult<Claims> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                JwtErrorKind::ExpiredSignature => AppError::unauthorized("Token has expired"),
                JwtErrorKind::InvalidSignature => {
                    AppError::unauthorized("Invalid token signature")
                }
                JwtErrorKind::InvalidIssuer => AppError::unauthorized("Unexpected token issuer"),
                _ => AppError::unauthorized("Invalid session token"),
            }
        })?;

        if data.claims.sub.trim().is_empty() {
            return Err(AppError::unauthorized("Token has no subject"));
        }
        Ok(data.claims)
    }
}

#[async_trait]
impl IdentityVerifier for JwtIdentityVerifier {
    async fn verify(&self, token: &str) -> AppResult<Identity> {
        let token = token.trim();
        if token.is_empty() {
            return Err(AppError::unauthorized("Missing session token"));
        }

        let claims = self.decode_claims(token)?;
        debug!(owner_id = %claims.sub, "Session token verified");
        Ok(claims.into_identity())
    }
}
