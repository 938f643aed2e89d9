use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("empty env should be valid");

    assert_eq!(cfg.log_level, "info");
    assert_eq!(
        cfg.profiles_path,
        std::path::PathBuf::from("./config/profiles.yaml")
    );
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "skillpulse/0.1 (developer-profile-sync)");
    assert!(cfg.github_token.is_none());
    assert_eq!(cfg.endpoints, Endpoints::default());
}

#[test]
fn build_app_config_reads_github_token() {
    let mut map = HashMap::new();
    map.insert("GITHUB_TOKEN", "ghp_secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.github_token.as_deref(), Some("ghp_secret"));
}

#[test]
fn blank_github_token_is_treated_as_unset() {
    let mut map = HashMap::new();
    map.insert("GITHUB_TOKEN", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.github_token.is_none());
}

#[test]
fn debug_output_redacts_github_token() {
    let mut map = HashMap::new();
    map.insert("GITHUB_TOKEN", "ghp_secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("ghp_secret"));
    assert!(rendered.contains("[redacted]"));
}

#[test]
fn request_timeout_override() {
    let mut map = HashMap::new();
    map.insert("SKILLPULSE_REQUEST_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 5);
}

#[test]
fn request_timeout_invalid() {
    let mut map = HashMap::new();
    map.insert("SKILLPULSE_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SKILLPULSE_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(SKILLPULSE_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn request_timeout_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("SKILLPULSE_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
}

#[test]
fn endpoint_override_strips_trailing_slash() {
    let mut map = HashMap::new();
    map.insert("SKILLPULSE_CODEFORCES_API_URL", "http://127.0.0.1:9000/");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.endpoints.codeforces, "http://127.0.0.1:9000");
    assert_eq!(cfg.endpoints.github, "https://api.github.com");
}

#[test]
fn endpoint_override_requires_http_scheme() {
    let mut map = HashMap::new();
    map.insert("SKILLPULSE_GFG_API_URL", "ftp://example.com");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SKILLPULSE_GFG_API_URL"),
        "expected InvalidEnvVar(SKILLPULSE_GFG_API_URL), got: {result:?}"
    );
}

#[test]
fn user_agent_override() {
    let mut map = HashMap::new();
    map.insert("SKILLPULSE_USER_AGENT", "custom-agent/2.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
}

#[test]
fn unrelated_variables_are_ignored() {
    let mut map = HashMap::new();
    map.insert("SKILLPULSE_ENV", "staging");
    map.insert("SKILLPULSE_LOG_LEVEL", "debug");
    let cfg = build_app_config(lookup_from_map(&map)).expect("unknown variables are not parsed");
    assert_eq!(cfg.log_level, "debug");
}
