use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which of the two token families a credential belongs to.
///
/// Each kind is bound to its own signing secret. The `kind` claim is a
/// second line of defense: even with identical secrets, a refresh token is
/// never accepted where an access token is expected, and vice versa.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

impl core::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JWT claims carried by both token kinds.
///
/// `role` stays a raw string here; conversion to [`crate::Role`] happens
/// during verification so unknown values are rejected at the decode
/// boundary, not deep in handler logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject / principal identifier.
    pub sub: Uuid,

    pub email: String,

    /// Raw role claim, validated against the closed set on verify.
    pub role: String,

    pub kind: TokenKind,

    /// Issued-at, seconds since epoch on the wire.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub iat: DateTime<Utc>,

    /// Expiry, seconds since epoch on the wire.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub exp: DateTime<Utc>,
}
