use crate::app_config::{AppConfig, Environment};
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
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it from a map.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
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

    let env = parse_environment(&or_default("CURATOR_ENV", "development"));
    let log_level = or_default("CURATOR_LOG_LEVEL", "info");

    let analysis_url = or_default("CURATOR_ANALYSIS_URL", "http://localhost:8000");
    let analysis_timeout_secs = parse_u64("CURATOR_ANALYSIS_TIMEOUT_SECS", "120")?;
    let submit_delay_ms = parse_u64("CURATOR_SUBMIT_DELAY_MS", "1500")?;
    let processing_delay_ms = parse_u64("CURATOR_PROCESSING_DELAY_MS", "3000")?;

    let bind_addr = parse_addr("CURATOR_BIND_ADDR", "0.0.0.0:8000")?;
    let perplexity_api_key = lookup("PERPLEXITY_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty());
    let perplexity_base_url = or_default("PERPLEXITY_BASE_URL", "https://api.perplexity.ai");
    let perplexity_model = or_default("PERPLEXITY_MODEL", "sonar");
    let perplexity_timeout_secs = parse_u64("PERPLEXITY_TIMEOUT_SECS", "300")?;

    Ok(AppConfig {
        env,
        log_level,
        analysis_url,
        analysis_timeout_secs,
        submit_delay_ms,
        processing_delay_ms,
        bind_addr,
        perplexity_api_key,
        perplexity_base_url,
        perplexity_model,
        perplexity_timeout_secs,
    })
}

impl AppConfig {
    /// The Perplexity API key, required by the analysis service.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if `PERPLEXITY_API_KEY` was not set.
    pub fn require_perplexity_api_key(&self) -> Result<&str, ConfigError> {
        self.perplexity_api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("PERPLEXITY_API_KEY".to_string()))
    }
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
