use crate::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Credentials used to seed the first SUPER_ADMIN account when the user
    /// table is empty of race-direction staff.
    pub super_admin_email: String,
    pub super_admin_password: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            super_admin_email: std::env::var("SUPER_ADMIN_EMAIL")
                .map_err(|_| ConfigError::MissingEnvVar("SUPER_ADMIN_EMAIL".to_string()))?,
            super_admin_password: std::env::var("SUPER_ADMIN_PASSWORD")
                .map_err(|_| ConfigError::MissingEnvVar("SUPER_ADMIN_PASSWORD".to_string()))?,
        })
    }
}
