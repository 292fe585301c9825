use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub analysis_url: String,
    pub analysis_timeout_secs: u64,
    pub submit_delay_ms: u64,
    pub processing_delay_ms: u64,
    pub bind_addr: SocketAddr,
    pub perplexity_api_key: Option<String>,
    pub perplexity_base_url: String,
    pub perplexity_model: String,
    pub perplexity_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("analysis_url", &self.analysis_url)
            .field("analysis_timeout_secs", &self.analysis_timeout_secs)
            .field("submit_delay_ms", &self.submit_delay_ms)
            .field("processing_delay_ms", &self.processing_delay_ms)
            .field("bind_addr", &self.bind_addr)
            .field(
                "perplexity_api_key",
                &self.perplexity_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("perplexity_base_url", &self.perplexity_base_url)
            .field("perplexity_model", &self.perplexity_model)
            .field("perplexity_timeout_secs", &self.perplexity_timeout_secs)
            .finish()
    }
}
