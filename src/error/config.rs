use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Password hashing failed during account seeding or registration.
    ///
    /// Argon2 errors do not implement `std::error::Error`, so the message is
    /// carried as a string.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),
}
