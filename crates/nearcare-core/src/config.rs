use crate::aggregator::DEFAULT_RADIUS_KM;
use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Builds the config from an env-var lookup function, so tests can pass a
/// plain map instead of touching the process environment.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_radius = |var: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, &DEFAULT_RADIUS_KM.to_string());
        let radius = raw
            .parse::<f64>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if !radius.is_finite() || radius <= 0.0 {
            let reason = format!("radius must be a positive number, got {raw}");
            return Err(invalid(var, reason));
        }
        Ok(radius)
    };

    let directory_url = require("NEARCARE_DIRECTORY_URL")?;
    if directory_url.trim().is_empty() {
        return Err(invalid(
            "NEARCARE_DIRECTORY_URL",
            "must not be empty".to_string(),
        ));
    }

    let env = parse_environment(&or_default("NEARCARE_ENV", "development"))?;
    let log_level = or_default("NEARCARE_LOG_LEVEL", "info");
    let api_token = lookup("NEARCARE_API_TOKEN")
        .ok()
        .filter(|t| !t.trim().is_empty());

    let search_radius_km = parse_radius("NEARCARE_SEARCH_RADIUS_KM")?;
    let request_timeout_secs = parse_u64("NEARCARE_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "NEARCARE_REQUEST_TIMEOUT_SECS",
            "must be at least 1".to_string(),
        ));
    }
    let user_agent = or_default("NEARCARE_USER_AGENT", "nearcare/0.1 (nearby-care)");

    Ok(AppConfig {
        env,
        log_level,
        directory_url,
        api_token,
        search_radius_km,
        request_timeout_secs,
        user_agent,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "NEARCARE_ENV".to_string(),
            reason: format!("expected development, test, or production; got {other}"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
