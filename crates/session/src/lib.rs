//! `campuserp-session` — client-side session state and route guards.
//!
//! Everything in this crate is advisory UX state: it decides what the
//! portal renders and where it navigates, nothing more. The server
//! re-verifies every request independently (see `campuserp-auth` and
//! `campuserp-api`); the two trust decisions are never collapsed into one.

pub mod guards;
pub mod provider;
pub mod store;

pub use guards::{GuardOutcome, Navigator, RoleGuard, guard_route, presence_guard};
pub use provider::{AuthApi, Credentials, SessionError, SessionProvider, SessionState};
pub use store::{MemoryTokenStore, TokenStore};
