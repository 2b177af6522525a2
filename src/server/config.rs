use std::{net::SocketAddr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_TOKEN_TTL_MINUTES: i64 = 60;
const DEFAULT_CACHE_TTL_SECONDS: u64 = 60;

/// Credentials used to bootstrap the first admin account.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminBootstrap {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub bind_address: SocketAddr,

    pub token_ttl: chrono::Duration,
    pub cache_ttl: Duration,

    /// Set only when both `ADMIN_USERNAME` and `ADMIN_PASSWORD` are present.
    pub admin: Option<AdminBootstrap>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address
            .parse::<SocketAddr>()
            .map_err(|e| invalid("BIND_ADDRESS", &bind_address, e))?;

        let token_ttl_minutes = parse_or(&lookup, "TOKEN_TTL_MINUTES", DEFAULT_TOKEN_TTL_MINUTES)?;
        if token_ttl_minutes <= 0 {
            return Err(invalid(
                "TOKEN_TTL_MINUTES",
                &token_ttl_minutes.to_string(),
                "must be positive",
            )
            .into());
        }
        let cache_ttl_seconds = parse_or(&lookup, "CACHE_TTL_SECONDS", DEFAULT_CACHE_TTL_SECONDS)?;

        let admin = match (lookup("ADMIN_USERNAME"), lookup("ADMIN_PASSWORD")) {
            (Some(username), Some(password)) => Some(AdminBootstrap { username, password }),
            _ => None,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            bind_address,
            token_ttl: chrono::Duration::minutes(token_ttl_minutes),
            cache_ttl: Duration::from_secs(cache_ttl_seconds),
            admin,
        })
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(value) => value.parse::<T>().map_err(|e| invalid(name, &value, e)),
        None => Ok(default),
    }
}

fn invalid(name: &str, value: &str, reason: impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
