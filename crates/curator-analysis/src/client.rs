//! HTTP client for the curator analysis service.
//!
//! Uploads a curator-list CSV as a multipart file and returns the report text
//! from the `{"analysis": "..."}` JSON envelope.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::AnalysisError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Multipart field the CSV is attached to.
pub const UPLOAD_FIELD: &str = "file";
pub const UPLOAD_FILE_NAME: &str = "curatorlist.csv";
pub const UPLOAD_MIME: &str = "text/csv";

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    analysis: String,
}

/// Client for the `POST /analyze` endpoint.
///
/// Use [`AnalysisClient::new`] for the default local service or
/// [`AnalysisClient::with_base_url`] to point at another host (or a mock
/// server in tests).
pub struct AnalysisClient {
    client: Client,
    analyze_url: Url,
}

impl AnalysisClient {
    /// Creates a client pointed at the default local analysis service.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, AnalysisError> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout_secs)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`AnalysisError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self, AnalysisError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("curator/0.1 (brand-monitoring)")
            .build()?;

        Ok(Self {
            client,
            analyze_url: Self::analyze_url(base_url)?,
        })
    }

    /// The resolved endpoint this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.analyze_url
    }

    /// Uploads `csv` and returns the generated report text.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::Http`] on network failure.
    /// - [`AnalysisError::UnexpectedStatus`] on any non-2xx status.
    /// - [`AnalysisError::Deserialize`] if the body lacks a string `analysis`.
    pub async fn analyze(&self, csv: &str) -> Result<String, AnalysisError> {
        let part = Part::text(csv.to_owned())
            .file_name(UPLOAD_FILE_NAME)
            .mime_str(UPLOAD_MIME)?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        tracing::debug!(url = %self.analyze_url, bytes = csv.len(), "uploading curator list");

        let response = self
            .client
            .post(self.analyze_url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.analyze_url.to_string(),
            });
        }

        let body = response.text().await?;
        let parsed: AnalyzeResponse =
            serde_json::from_str(&body).map_err(|e| AnalysisError::Deserialize {
                context: self.analyze_url.to_string(),
                source: e,
            })?;

        Ok(parsed.analysis)
    }

    /// Resolves `{base_url}/analyze`, keeping any path prefix on the base.
    fn analyze_url(base_url: &str) -> Result<Url, AnalysisError> {
        let invalid = |reason: String| AnalysisError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason,
        };

        // A trailing slash makes `join` append rather than replace the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("not a hierarchical URL".to_string()));
        }
        base.join("analyze").map_err(|e| invalid(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_url_appends_endpoint() {
        let url = AnalysisClient::analyze_url("http://localhost:8000").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/analyze");
    }

    #[test]
    fn analyze_url_strips_trailing_slash() {
        let url = AnalysisClient::analyze_url("http://localhost:8000/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/analyze");
    }

    #[test]
    fn analyze_url_keeps_path_prefix() {
        let url = AnalysisClient::analyze_url("https://intel.example.com/api/v1").unwrap();
        assert_eq!(url.as_str(), "https://intel.example.com/api/v1/analyze");
    }

    #[test]
    fn analyze_url_rejects_garbage() {
        let err = AnalysisClient::analyze_url("not a url").unwrap_err();
        assert!(
            matches!(err, AnalysisError::InvalidBaseUrl { .. }),
            "expected InvalidBaseUrl, got: {err:?}"
        );
    }
}
