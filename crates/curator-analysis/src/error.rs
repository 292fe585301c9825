use thiserror::Error;

/// Errors returned by the analysis service client.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body was not the expected JSON shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid analysis base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
