//! Server-side role checks at the handler boundary.
//!
//! Mirrors the client-side role guard semantics: plain set membership over
//! the closed role set, no hierarchy, no implicit superuser bypass. The
//! client check is a UX affordance; this one is the real decision.

use thiserror::Error;

use campuserp_auth::Role;

use crate::context::PrincipalContext;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("role {role} is not permitted here")]
pub struct RoleDenied {
    pub role: Role,
}

/// Check that the verified principal's role is in `allowed`.
pub fn require_role(principal: &PrincipalContext, allowed: &[Role]) -> Result<(), RoleDenied> {
    if allowed.contains(&principal.role()) {
        Ok(())
    } else {
        Err(RoleDenied {
            role: principal.role(),
        })
    }
}
