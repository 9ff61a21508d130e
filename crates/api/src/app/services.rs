//! Shared wiring for handlers: token issuing/validation and user lookup.

use std::sync::Arc;

use campuserp_auth::{AuthConfig, ConfigError, JwtValidator, TokenIssuer, TokenKind};

use crate::directory::UserDirectory;

/// Services shared by handlers via request extensions.
pub struct AppServices {
    pub directory: Arc<dyn UserDirectory>,
    pub issuer: TokenIssuer,

    /// Bound to the access secret; applied by the auth middleware on every
    /// protected request.
    pub access_validator: Arc<JwtValidator>,

    /// Bound to the refresh secret; consulted only by `/auth/refresh`. The
    /// two are independent on purpose: a refresh token must never pass
    /// where an access token is expected, and vice versa.
    pub refresh_validator: JwtValidator,
}

impl AppServices {
    pub fn new(
        config: &AuthConfig,
        directory: Arc<dyn UserDirectory>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            directory,
            issuer: TokenIssuer::new(config),
            access_validator: Arc::new(JwtValidator::new(
                TokenKind::Access,
                &config.access_secret,
            )?),
            refresh_validator: JwtValidator::new(TokenKind::Refresh, &config.refresh_secret)?,
        })
    }
}
