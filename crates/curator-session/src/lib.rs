//! Submission and analysis lifecycle for a curator form.
//!
//! A [`Session`] owns the form being edited, the last validation result and
//! the state of the current submission. Storage, AI processing and report
//! fetching are injected through the traits in [`backend`].

pub mod backend;
pub mod notify;
pub mod session;

pub use backend::{
    AnalysisId, DelayedProcessing, MockSubmissionBackend, ProcessingTrigger, ReportFetcher,
    SubmissionBackend, SubmissionError,
};
pub use notify::{Notification, Notifier, RecordingNotifier, Severity, TracingNotifier};
pub use session::{
    AnalysisOutcome, AnalysisRequest, Lifecycle, RenderedReport, Session, SubmitOutcome,
    SubmitRejected,
};
