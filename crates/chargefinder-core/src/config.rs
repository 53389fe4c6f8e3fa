use std::path::PathBuf;

use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable holds an invalid value.
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
/// Returns `ConfigError` if a variable holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let env = parse_environment(&or_default("CHARGEFINDER_ENV", "development"))?;
    let log_level = or_default("CHARGEFINDER_LOG_LEVEL", "info");
    if log_level.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "CHARGEFINDER_LOG_LEVEL".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let sites_path = PathBuf::from(or_default(
        "CHARGEFINDER_SITES_PATH",
        "./config/sites.geojson",
    ));
    let zipcodes_path = PathBuf::from(or_default(
        "CHARGEFINDER_ZIPCODES_PATH",
        "./config/zipcodes.json",
    ));

    Ok(AppConfig {
        env,
        log_level,
        sites_path,
        zipcodes_path,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "CHARGEFINDER_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
