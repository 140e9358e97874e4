use thiserror::Error;

/// Validation errors for core domain values.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid coordinates ({latitude}, {longitude}): {reason}")]
    InvalidCoordinates {
        latitude: f64,
        longitude: f64,
        reason: &'static str,
    },

    #[error("unknown filter \"{0}\": expected one of all, doctors, nurses, ambulances")]
    UnknownFilter(String),
}

/// Errors raised while loading [`crate::AppConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
