//! Collaborators the session depends on: where submissions are stored, what
//! happens while a report is prepared, and where reports are fetched from.

use std::future::Future;
use std::time::Duration;

use curator_analysis::{AnalysisClient, AnalysisError};
use curator_core::CuratorList;
use thiserror::Error;

/// Opaque identifier of one stored submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnalysisId(String);

impl AnalysisId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AnalysisId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("submission backend rejected the curator list: {0}")]
    Rejected(String),

    #[error("submission backend unavailable: {0}")]
    Unavailable(String),
}

/// Stores a validated curator list and names it.
pub trait SubmissionBackend {
    fn submit(
        &self,
        list: &CuratorList,
    ) -> impl Future<Output = Result<AnalysisId, SubmissionError>> + Send;
}

/// Resolves once AI processing for a submission has finished.
pub trait ProcessingTrigger {
    fn process(&self, analysis_id: &AnalysisId) -> impl Future<Output = ()> + Send;
}

/// Turns a curator-list CSV into report text.
pub trait ReportFetcher {
    fn fetch_report(&self, csv: &str)
        -> impl Future<Output = Result<String, AnalysisError>> + Send;
}

impl ReportFetcher for AnalysisClient {
    async fn fetch_report(&self, csv: &str) -> Result<String, AnalysisError> {
        self.analyze(csv).await
    }
}

/// Stand-in storage backend: waits `delay`, then accepts every list under a
/// fresh `analysis_<uuid>` id.
#[derive(Debug, Clone)]
pub struct MockSubmissionBackend {
    delay: Duration,
}

impl MockSubmissionBackend {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockSubmissionBackend {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

impl SubmissionBackend for MockSubmissionBackend {
    async fn submit(&self, list: &CuratorList) -> Result<AnalysisId, SubmissionError> {
        tokio::time::sleep(self.delay).await;
        let id = AnalysisId::new(format!("analysis_{}", uuid::Uuid::new_v4().simple()));
        tracing::debug!(
            analysis_id = %id,
            brand = %list.brand_name,
            influencers = list.influencers.len(),
            competitors = list.competitors.len(),
            use_ai = %list.use_ai,
            "curator list stored"
        );
        Ok(id)
    }
}

/// Stand-in AI processing: completes after a fixed delay.
#[derive(Debug, Clone)]
pub struct DelayedProcessing {
    delay: Duration,
}

impl DelayedProcessing {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for DelayedProcessing {
    fn default() -> Self {
        Self::new(Duration::from_millis(3000))
    }
}

impl ProcessingTrigger for DelayedProcessing {
    async fn process(&self, analysis_id: &AnalysisId) {
        tracing::info!(analysis_id = %analysis_id, "triggering AI model processing");
        tokio::time::sleep(self.delay).await;
    }
}
