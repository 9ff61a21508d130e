//! Token issue and verification (HS256).
//!
//! Two independent validators exist per process, one per [`TokenKind`],
//! each bound to its own secret. Verification trusts only signature and
//! expiry, never client state.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::claims::{Claims, TokenKind};
use crate::config::{ACCESS_SECRET_VAR, AuthConfig, REFRESH_SECRET_VAR};
use crate::error::{AuthError, ConfigError, IssueError};
use crate::principal::Principal;
use crate::roles::Role;

/// An access/refresh pair as returned by login and refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Verifies bearer tokens of a single kind against a single secret.
pub struct JwtValidator {
    kind: TokenKind,
    key: DecodingKey,
    validation: Validation,
}

impl core::fmt::Debug for JwtValidator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("JwtValidator")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl JwtValidator {
    /// Build a validator bound to `secret`.
    ///
    /// Fails closed on an empty secret: a validator that cannot verify
    /// anything must never be constructed, let alone serve requests.
    pub fn new(kind: TokenKind, secret: &str) -> Result<Self, ConfigError> {
        if secret.trim().is_empty() {
            return Err(ConfigError::MissingSecret(match kind {
                TokenKind::Access => ACCESS_SECRET_VAR,
                TokenKind::Refresh => REFRESH_SECRET_VAR,
            }));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Ok(Self {
            kind,
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Verify signature and expiry, then reconstruct the principal.
    ///
    /// Per request this is a one-way gate: extracted token goes to either
    /// verified or rejected, with no partial trust in between. A wrong-kind
    /// token and an unknown role claim are both rejections.
    pub fn verify(&self, token: &str) -> Result<Principal, AuthError> {
        let data =
            jsonwebtoken::decode::<Claims>(token, &self.key, &self.validation).map_err(|err| {
                match err.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
                    _ => AuthError::InvalidToken,
                }
            })?;

        let claims = data.claims;
        if claims.kind != self.kind {
            return Err(AuthError::WrongTokenKind {
                expected: self.kind,
                got: claims.kind,
            });
        }

        let role =
            Role::parse(&claims.role).ok_or_else(|| AuthError::InvalidRole(claims.role.clone()))?;

        Ok(Principal {
            id: claims.sub,
            email: claims.email,
            role,
        })
    }
}

/// Mints signed access/refresh pairs for an authenticated principal.
pub struct TokenIssuer {
    access_key: EncodingKey,
    refresh_key: EncodingKey,
    access_ttl: chrono::Duration,
    refresh_ttl: chrono::Duration,
}

impl TokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            access_key: EncodingKey::from_secret(config.access_secret.as_bytes()),
            refresh_key: EncodingKey::from_secret(config.refresh_secret.as_bytes()),
            access_ttl: config.access_ttl,
            refresh_ttl: config.refresh_ttl,
        }
    }

    /// Issue a fresh pair for `principal`.
    ///
    /// Refresh is stateless re-issue: a previously issued refresh token
    /// stays valid until its own expiry. There is no revocation list and no
    /// server-side session store.
    pub fn issue_pair(&self, principal: &Principal) -> Result<TokenPair, IssueError> {
        Ok(TokenPair {
            access_token: self.issue(principal, TokenKind::Access)?,
            refresh_token: self.issue(principal, TokenKind::Refresh)?,
        })
    }

    fn issue(&self, principal: &Principal, kind: TokenKind) -> Result<String, IssueError> {
        let now = Utc::now();
        let (key, ttl) = match kind {
            TokenKind::Access => (&self.access_key, self.access_ttl),
            TokenKind::Refresh => (&self.refresh_key, self.refresh_ttl),
        };

        let claims = Claims {
            sub: principal.id,
            email: principal.email.clone(),
            role: principal.role.as_str().to_string(),
            kind,
            iat: now,
            exp: now + ttl,
        };

        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            key,
        )?)
    }
}

/// Decode claims WITHOUT verifying signature or expiry.
///
/// Client-side use only: lets the portal show who is tentatively signed in
/// before the server has re-verified anything. The result is advisory and
/// must never feed a trust decision; the real boundary is [`JwtValidator`].
pub fn decode_unverified(token: &str) -> Option<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    jsonwebtoken::decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .ok()
}
