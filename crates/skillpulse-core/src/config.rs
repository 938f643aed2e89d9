use crate::app_config::{AppConfig, Endpoints};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files; useful in tests
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable
/// config. Blank `GITHUB_TOKEN` values are treated as unset.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let base_url = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        let trimmed = raw.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected an http(s) URL, got '{raw}'"),
            });
        }
        Ok(trimmed.to_string())
    };

    let log_level = or_default("SKILLPULSE_LOG_LEVEL", "info");
    let profiles_path = PathBuf::from(or_default(
        "SKILLPULSE_PROFILES_PATH",
        "./config/profiles.yaml",
    ));

    let request_timeout_secs = parse_u64("SKILLPULSE_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SKILLPULSE_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "timeout must be greater than zero".to_string(),
        });
    }
    let user_agent = or_default(
        "SKILLPULSE_USER_AGENT",
        "skillpulse/0.1 (developer-profile-sync)",
    );
    let github_token = lookup("GITHUB_TOKEN")
        .ok()
        .filter(|t| !t.trim().is_empty());

    let defaults = Endpoints::default();
    let endpoints = Endpoints {
        github: base_url("SKILLPULSE_GITHUB_API_URL", &defaults.github)?,
        leetcode: base_url("SKILLPULSE_LEETCODE_API_URL", &defaults.leetcode)?,
        codeforces: base_url("SKILLPULSE_CODEFORCES_API_URL", &defaults.codeforces)?,
        gfg: base_url("SKILLPULSE_GFG_API_URL", &defaults.gfg)?,
    };

    Ok(AppConfig {
        log_level,
        profiles_path,
        request_timeout_secs,
        user_agent,
        github_token,
        endpoints,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
