use chrono::Duration;

use crate::error::ConfigError;

pub const ACCESS_SECRET_VAR: &str = "ACCESS_TOKEN_SECRET";
pub const REFRESH_SECRET_VAR: &str = "REFRESH_TOKEN_SECRET";
pub const ACCESS_TTL_VAR: &str = "ACCESS_TOKEN_TTL_MINUTES";
pub const REFRESH_TTL_VAR: &str = "REFRESH_TOKEN_TTL_DAYS";

const DEFAULT_ACCESS_TTL_MINUTES: i64 = 15;
const DEFAULT_REFRESH_TTL_DAYS: i64 = 7;

/// Auth configuration sourced from the process environment.
///
/// Fails closed: a missing or empty signing secret is a fatal startup
/// error, never something to default around. Token lifetimes have defaults.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    pub access_ttl: Duration,
    pub refresh_ttl: Duration,
}

impl AuthConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AuthConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            access_secret: require_secret(&lookup, ACCESS_SECRET_VAR)?,
            refresh_secret: require_secret(&lookup, REFRESH_SECRET_VAR)?,
            access_ttl: Duration::minutes(parse_ttl(
                &lookup,
                ACCESS_TTL_VAR,
                DEFAULT_ACCESS_TTL_MINUTES,
            )?),
            refresh_ttl: Duration::days(parse_ttl(
                &lookup,
                REFRESH_TTL_VAR,
                DEFAULT_REFRESH_TTL_DAYS,
            )?),
        })
    }
}

fn require_secret<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingSecret(key)),
    }
}

fn parse_ttl<F>(lookup: &F, key: &'static str, default: i64) -> Result<i64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => match raw.parse::<i64>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(ConfigError::InvalidValue(key)),
        },
    }
}
