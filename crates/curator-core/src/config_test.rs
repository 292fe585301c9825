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
fn parse_environment_known_values() {
    assert_eq!(parse_environment("development"), Environment::Development);
    assert_eq!(parse_environment("test"), Environment::Test);
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_uses_defaults_when_env_is_empty() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults are valid");

    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.analysis_url, "http://localhost:8000");
    assert_eq!(cfg.analysis_timeout_secs, 120);
    assert_eq!(cfg.submit_delay_ms, 1500);
    assert_eq!(cfg.processing_delay_ms, 3000);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:8000");
    assert!(cfg.perplexity_api_key.is_none());
    assert_eq!(cfg.perplexity_base_url, "https://api.perplexity.ai");
    assert_eq!(cfg.perplexity_model, "sonar");
    assert_eq!(cfg.perplexity_timeout_secs, 300);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("CURATOR_ANALYSIS_URL", "http://analysis.internal:9000");
    map.insert("CURATOR_SUBMIT_DELAY_MS", "0");
    map.insert("CURATOR_PROCESSING_DELAY_MS", "10");
    map.insert("CURATOR_BIND_ADDR", "127.0.0.1:8080");
    map.insert("PERPLEXITY_API_KEY", "pplx-test");
    map.insert("PERPLEXITY_MODEL", "sonar-pro");
    let cfg = build_app_config(lookup_from_map(&map)).expect("valid overrides");

    assert_eq!(cfg.analysis_url, "http://analysis.internal:9000");
    assert_eq!(cfg.submit_delay_ms, 0);
    assert_eq!(cfg.processing_delay_ms, 10);
    assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.perplexity_api_key.as_deref(), Some("pplx-test"));
    assert_eq!(cfg.perplexity_model, "sonar-pro");
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("CURATOR_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CURATOR_BIND_ADDR"),
        "expected InvalidEnvVar(CURATOR_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_invalid_delay() {
    let mut map = HashMap::new();
    map.insert("CURATOR_PROCESSING_DELAY_MS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CURATOR_PROCESSING_DELAY_MS"),
        "expected InvalidEnvVar(CURATOR_PROCESSING_DELAY_MS), got: {result:?}"
    );
}

#[test]
fn blank_perplexity_key_counts_as_missing() {
    let mut map = HashMap::new();
    map.insert("PERPLEXITY_API_KEY", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).expect("valid config");
    let err = cfg.require_perplexity_api_key().unwrap_err();
    assert!(matches!(err, ConfigError::MissingEnvVar(ref v) if v == "PERPLEXITY_API_KEY"));
}

#[test]
fn debug_redacts_perplexity_key() {
    let mut map = HashMap::new();
    map.insert("PERPLEXITY_API_KEY", "pplx-secret");
    let cfg = build_app_config(lookup_from_map(&map)).expect("valid config");
    let debug = format!("{cfg:?}");
    assert!(!debug.contains("pplx-secret"));
    assert!(debug.contains("[redacted]"));
}

#[test]
fn load_app_config_from_env_reads_process_environment() {
    std::env::set_var("CURATOR_PROCESSING_DELAY_MS", "4321");
    let config = load_app_config_from_env().expect("process env is valid");
    std::env::remove_var("CURATOR_PROCESSING_DELAY_MS");

    assert_eq!(config.processing_delay_ms, 4321);
}
