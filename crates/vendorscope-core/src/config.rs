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

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let feed_url = require("VENDORSCOPE_FEED_URL")?;
    let feed_token = require("VENDORSCOPE_FEED_TOKEN")?;

    let env = parse_environment(&or_default("VENDORSCOPE_ENV", "development"))?;
    let log_level = or_default("VENDORSCOPE_LOG_LEVEL", "info");
    let channels_path = PathBuf::from(or_default(
        "VENDORSCOPE_CHANNELS_PATH",
        "./config/channels.yaml",
    ));

    let sample_limit = parse_u32("VENDORSCOPE_SAMPLE_LIMIT", "500")?;
    let collect_limit = parse_u32("VENDORSCOPE_COLLECT_LIMIT", "10")?;
    if sample_limit == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "VENDORSCOPE_SAMPLE_LIMIT".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    if collect_limit == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "VENDORSCOPE_COLLECT_LIMIT".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let data_dir = PathBuf::from(or_default("VENDORSCOPE_DATA_DIR", "./data"));
    let media_dir = PathBuf::from(or_default("VENDORSCOPE_MEDIA_DIR", "./media"));
    let output_path = PathBuf::from(or_default(
        "VENDORSCOPE_OUTPUT_PATH",
        "./vendor_analytics.csv",
    ));
    let records_path = PathBuf::from(or_default(
        "VENDORSCOPE_RECORDS_PATH",
        "./processed_posts.csv",
    ));

    let request_timeout_secs = parse_u64("VENDORSCOPE_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default(
        "VENDORSCOPE_USER_AGENT",
        "vendorscope/0.1 (channel-analytics)",
    );

    Ok(AppConfig {
        feed_url,
        feed_token,
        env,
        log_level,
        channels_path,
        sample_limit,
        collect_limit,
        data_dir,
        media_dir,
        output_path,
        records_path,
        request_timeout_secs,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "VENDORSCOPE_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
