use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Role;

/// The authenticated identity attached to a request or session.
///
/// Produced only by decoding a token (verified server-side, advisory
/// client-side); immutable for the lifetime of the request or session it
/// belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}

impl Principal {
    pub fn new(id: Uuid, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            email: email.into(),
            role,
        }
    }
}

impl core::fmt::Display for Principal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.email, self.role)
    }
}
