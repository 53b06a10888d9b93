use crate::app_config::{AppConfig, DEFAULT_PLACES_BASE_URL, DEFAULT_SITE_USER_AGENT};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if `GOOGLE_API_KEY` is missing or a value is invalid.
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
/// Returns `ConfigError` if `GOOGLE_API_KEY` is missing or a value is invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        let value = raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })?;
        if value == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(value)
    };

    let google_api_key = require("GOOGLE_API_KEY")?;

    let log_level = or_default("CUBOLEADS_LOG_LEVEL", "info");
    let places_base_url = or_default("CUBOLEADS_PLACES_BASE_URL", DEFAULT_PLACES_BASE_URL);
    let places_timeout_secs = parse_u64("CUBOLEADS_PLACES_TIMEOUT_SECS", "30")?;
    let site_timeout_secs = parse_u64("CUBOLEADS_SITE_TIMEOUT_SECS", "10")?;
    let site_user_agent = or_default("CUBOLEADS_SITE_USER_AGENT", DEFAULT_SITE_USER_AGENT);

    Ok(AppConfig {
        google_api_key,
        log_level,
        places_base_url,
        places_timeout_secs,
        site_timeout_secs,
        site_user_agent,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
