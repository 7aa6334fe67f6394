use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// An entry in `ALLOWED_ORIGINS` is not a valid header value.
    #[error("Invalid origin in ALLOWED_ORIGINS: {0}")]
    InvalidOrigin(String),
}
