//! Auth error taxonomy.
//!
//! Three tiers: configuration problems are fatal at startup, authorization
//! failures reject a single request, and issue failures are internal.

use thiserror::Error;

use crate::TokenKind;

/// Fatal configuration problem detected at startup.
///
/// A process that cannot verify tokens must not start.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required signing secret: {0}")]
    MissingSecret(&'static str),

    #[error("invalid value for {0}")]
    InvalidValue(&'static str),
}

/// Per-request authorization failure.
///
/// Always means "reject this request"; never crashes the process and never
/// grants partial trust.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("no bearer token presented")]
    MissingToken,

    #[error("token is malformed or its signature is invalid")]
    InvalidToken,

    #[error("token has expired")]
    Expired,

    #[error("wrong token kind: expected {expected}, got {got}")]
    WrongTokenKind { expected: TokenKind, got: TokenKind },

    #[error("'{0}' is not a recognized role")]
    InvalidRole(String),
}

/// Failure while minting a token.
///
/// Does not occur with a well-formed principal and a configured secret, but
/// is propagated rather than panicking per the no-unwrap rule.
#[derive(Debug, Error)]
#[error("failed to encode token: {0}")]
pub struct IssueError(#[from] jsonwebtoken::errors::Error);
