use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_JWT_EXPIRATION_MINUTES: i64 = 1440;
const DEFAULT_APP_URL: &str = "http://localhost:8000";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

/// Application configuration loaded from environment variables.
pub struct Config {
    pub database_url: String,

    pub jwt_secret_key: String,
    /// Lifetime of issued access tokens in minutes.
    pub jwt_expiration_minutes: i64,

    /// Public base URL used to build action links, without a trailing slash.
    pub app_url: String,
    pub bind_address: SocketAddr,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// `DATABASE_URL` and `JWT_SECRET_KEY` are required. `JWT_EXPIRATION_MINUTES`,
    /// `APP_URL` and `BIND_ADDRESS` fall back to defaults.
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables present and valid
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - A required variable is unset
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - A variable could not be parsed
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let jwt_expiration_minutes = match lookup("JWT_EXPIRATION_MINUTES") {
            Some(value) => parse_positive_minutes("JWT_EXPIRATION_MINUTES", value)?,
            None => DEFAULT_JWT_EXPIRATION_MINUTES,
        };

        let bind_address = lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BIND_ADDRESS".to_string(),
                value: bind_address.clone(),
                reason: e.to_string(),
            })?;

        let app_url = lookup("APP_URL").unwrap_or_else(|| DEFAULT_APP_URL.to_string());

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret_key: required("JWT_SECRET_KEY")?,
            jwt_expiration_minutes,
            app_url: app_url.trim_end_matches('/').to_string(),
            bind_address,
        })
    }
}

fn parse_positive_minutes(name: &str, value: String) -> Result<i64, ConfigError> {
    match value.trim().parse::<i64>() {
        Ok(minutes) if minutes > 0 => Ok(minutes),
        Ok(_) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            reason: "must be greater than zero".to_string(),
        }),
        Err(e) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
            value,
        }),
    }
}
