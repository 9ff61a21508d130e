//! `campuserp-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: the closed
//! role set, the claims model, and token issue/verify live here. Transport
//! wiring lives in `campuserp-api`; client session state in
//! `campuserp-session`.

pub mod claims;
pub mod config;
pub mod error;
pub mod principal;
pub mod roles;
pub mod token;

pub use claims::{Claims, TokenKind};
pub use config::AuthConfig;
pub use error::{AuthError, ConfigError, IssueError};
pub use principal::Principal;
pub use roles::{LOGIN_ROUTE, Role, dashboard_for, has_role, is_valid_role};
pub use token::{JwtValidator, TokenIssuer, TokenPair, decode_unverified};
