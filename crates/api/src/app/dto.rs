//! Request/response DTOs for the auth surface.

use serde::{Deserialize, Serialize};

use campuserp_auth::{Principal, TokenPair};

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body returned by both login and refresh.
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub role: String,
    /// Where the portal should land this user after login.
    pub dashboard: String,
}

impl TokenResponse {
    pub fn new(pair: TokenPair, principal: &Principal) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            user: UserDto {
                id: principal.id.to_string(),
                email: principal.email.clone(),
                role: principal.role.as_str().to_string(),
                dashboard: principal.role.dashboard().to_string(),
            },
        }
    }
}
