//! Perplexity chat-completions client.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const TEMPERATURE: f64 = 0.1;

#[derive(Debug, Error)]
pub enum PerplexityError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Perplexity returned status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Perplexity response parse error: {0}")]
    Deserialize(#[source] serde_json::Error),

    #[error("Perplexity response contained no choices")]
    EmptyResponse,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

pub struct PerplexityClient {
    client: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
}

impl PerplexityClient {
    /// # Errors
    ///
    /// Returns [`PerplexityError::Http`] if the HTTP client cannot be built.
    pub fn with_base_url(
        base_url: &str,
        api_key: &str,
        model: &str,
        timeout_secs: u64,
    ) -> Result<Self, PerplexityError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            url: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            api_key: api_key.to_owned(),
            model: model.to_owned(),
        })
    }

    /// Send one system + user exchange and return the first choice's text.
    ///
    /// # Errors
    ///
    /// Returns [`PerplexityError`] on network failure, a non-2xx status, an
    /// unparseable body, or a response with no choices.
    pub async fn complete(&self, system: &str, prompt: &str) -> Result<String, PerplexityError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
        };

        tracing::debug!(model = %self.model, prompt_chars = prompt.len(), "requesting completion");

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(PerplexityError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(PerplexityError::Deserialize)?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(PerplexityError::EmptyResponse)
    }
}
