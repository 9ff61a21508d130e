//! User lookup behind the login endpoint.
//!
//! Credential storage and hashing belong to the user/resource service;
//! this trait is the seam the auth routes call through.

use uuid::Uuid;

use campuserp_auth::{Principal, Role};

/// Verifies a login attempt and yields the matching principal.
pub trait UserDirectory: Send + Sync {
    fn verify(&self, email: &str, password: &str) -> Option<Principal>;
}

/// In-memory directory for development bootstrap and tests.
///
/// Stores passwords in the clear; never a production credential store.
#[derive(Default)]
pub struct InMemoryDirectory {
    users: Vec<DirectoryUser>,
}

struct DirectoryUser {
    principal: Principal,
    password: String,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, email: &str, password: &str, role: Role) -> Self {
        self.users.push(DirectoryUser {
            principal: Principal::new(Uuid::now_v7(), email, role),
            password: password.to_string(),
        });
        self
    }
}

impl UserDirectory for InMemoryDirectory {
    fn verify(&self, email: &str, password: &str) -> Option<Principal> {
        self.users
            .iter()
            .find(|user| {
                user.principal.email.eq_ignore_ascii_case(email) && user.password == password
            })
            .map(|user| user.principal.clone())
    }
}
