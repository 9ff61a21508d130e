use uuid::Uuid;

use campuserp_auth::{Principal, Role};

/// Principal context for a request (verified identity + role).
///
/// Inserted by the auth middleware after token verification; immutable and
/// present for all protected routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    principal: Principal,
}

impl PrincipalContext {
    pub fn new(principal: Principal) -> Self {
        Self { principal }
    }

    pub fn id(&self) -> Uuid {
        self.principal.id
    }

    pub fn email(&self) -> &str {
        &self.principal.email
    }

    pub fn role(&self) -> Role {
        self.principal.role
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }
}
