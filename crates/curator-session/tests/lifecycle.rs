//! End-to-end lifecycle tests driving `Session` through stub collaborators.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use curator_analysis::AnalysisError;
use curator_core::{CuratorList, Platform, UseAi};
use curator_session::{
    AnalysisId, AnalysisOutcome, DelayedProcessing, Lifecycle, MockSubmissionBackend,
    ProcessingTrigger, RecordingNotifier, ReportFetcher, Session, SubmissionBackend,
    SubmissionError, SubmitOutcome,
};

const SCENARIO_CSV: &str =
    "brand,type,name,youtube,instagram,reddit,twitter,linkedin\nAcme,Influencer,Jane,yt.co/jane,,,,\n";

#[derive(Default)]
struct FixedBackend {
    calls: AtomicUsize,
}

impl SubmissionBackend for FixedBackend {
    async fn submit(&self, _list: &CuratorList) -> Result<AnalysisId, SubmissionError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(AnalysisId::new(format!("analysis_{n}")))
    }
}

struct FailingBackend;

impl SubmissionBackend for FailingBackend {
    async fn submit(&self, _list: &CuratorList) -> Result<AnalysisId, SubmissionError> {
        Err(SubmissionError::Unavailable("storage offline".to_string()))
    }
}

struct InstantProcessing;

impl ProcessingTrigger for InstantProcessing {
    async fn process(&self, _analysis_id: &AnalysisId) {}
}

#[derive(Default)]
struct CapturingFetcher {
    uploads: Mutex<Vec<String>>,
}

impl ReportFetcher for CapturingFetcher {
    async fn fetch_report(&self, csv: &str) -> Result<String, AnalysisError> {
        self.uploads
            .lock()
            .expect("uploads lock poisoned")
            .push(csv.to_string());
        Ok("Acme <b>rules</b>".to_string())
    }
}

struct FailingFetcher;

impl ReportFetcher for FailingFetcher {
    async fn fetch_report(&self, _csv: &str) -> Result<String, AnalysisError> {
        Err(AnalysisError::UnexpectedStatus {
            status: 500,
            url: "http://localhost:8000/analyze".to_string(),
        })
    }
}

fn scenario_session(use_ai: UseAi) -> Session<RecordingNotifier> {
    let mut session = Session::new(RecordingNotifier::default());
    let form = session.form_mut();
    form.brand_name = "Acme".to_string();
    form.use_ai = use_ai;
    let jane = form.influencers.add();
    form.influencers.set_name(jane, "Jane");
    form.influencers.set_link(jane, Platform::Youtube, "yt.co/jane");
    session
}

#[tokio::test]
async fn submit_with_ai_enters_processing_then_ready() {
    let mut session = scenario_session(UseAi::Yes);
    let backend = FixedBackend::default();

    let outcome = session.submit(&backend).await;

    let id = AnalysisId::new("analysis_1");
    assert_eq!(outcome, SubmitOutcome::Processing(id.clone()));
    assert_eq!(session.analysis_id(), Some(&id));
    assert!(!session.is_analysis_ready());

    assert!(session.await_processing(&InstantProcessing).await);
    assert_eq!(session.lifecycle(), &Lifecycle::Ready { analysis_id: id });
    assert_eq!(
        session.notifier().titles(),
        vec!["Submission Successful", "Analysis Complete"]
    );
}

#[tokio::test]
async fn submit_without_ai_is_ready_immediately() {
    let mut session = scenario_session(UseAi::No);

    let outcome = session.submit(&FixedBackend::default()).await;

    assert_eq!(outcome, SubmitOutcome::Ready(AnalysisId::new("analysis_1")));
    assert!(session.is_analysis_ready());
    assert_eq!(session.notifier().titles(), vec!["Submission Successful"]);
}

#[tokio::test]
async fn show_analysis_uploads_the_form_csv_and_renders() {
    let mut session = scenario_session(UseAi::No);
    session.submit(&FixedBackend::default()).await;
    let fetcher = CapturingFetcher::default();

    let outcome = session.show_analysis(&fetcher).await;

    let AnalysisOutcome::Rendered(report) = outcome else {
        panic!("expected a rendered report, got {outcome:?}");
    };
    assert_eq!(report.title, "Brand Monitoring Analysis - Acme");
    assert!(report.html.contains("Acme &lt;b&gt;rules&lt;/b&gt;"));
    assert_eq!(session.analysis_result(), Some("Acme <b>rules</b>"));
    assert!(!session.is_analysis_loading());

    let uploads = fetcher.uploads.lock().expect("uploads lock poisoned");
    assert_eq!(uploads.as_slice(), [SCENARIO_CSV.to_string()]);
}

#[tokio::test]
async fn blank_brand_never_reaches_the_backend() {
    let mut session = scenario_session(UseAi::Yes);
    session.form_mut().brand_name = "   ".to_string();
    let backend = FixedBackend::default();

    let outcome = session.submit(&backend).await;

    assert!(matches!(outcome, SubmitOutcome::Invalid(ref e) if e.get("brandName") == Some("Brand name is required")));
    assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    assert!(session.analysis_id().is_none());
    assert_eq!(session.notifier().titles(), vec!["Validation Error"]);
}

#[tokio::test]
async fn invalid_resubmit_discards_previous_analysis() {
    let mut session = scenario_session(UseAi::No);
    session.submit(&FixedBackend::default()).await;
    assert!(session.is_analysis_ready());

    session.form_mut().brand_name.clear();
    session.submit(&FixedBackend::default()).await;

    assert!(session.analysis_id().is_none());
    assert!(!session.is_analysis_ready());
}

#[tokio::test]
async fn failed_submission_leaves_no_analysis() {
    let mut session = scenario_session(UseAi::Yes);

    let outcome = session.submit(&FailingBackend).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(session.lifecycle(), &Lifecycle::Idle);
    assert_eq!(session.notifier().titles(), vec!["Submission Failed"]);
    assert_eq!(session.form().influencers.len(), 1);
}

#[tokio::test]
async fn fetch_failure_keeps_id_and_readiness() {
    let mut session = scenario_session(UseAi::No);
    session.submit(&FixedBackend::default()).await;

    let outcome = session.show_analysis(&FailingFetcher).await;

    assert_eq!(outcome, AnalysisOutcome::Failed);
    assert_eq!(session.analysis_id(), Some(&AnalysisId::new("analysis_1")));
    assert!(session.is_analysis_ready());
    assert!(session.analysis_result().is_none());
    assert!(!session.is_analysis_loading());
    assert_eq!(
        session.notifier().titles(),
        vec!["Submission Successful", "Analysis Failed"]
    );

    // A retry is allowed and succeeds once the service recovers.
    let retry = session.show_analysis(&CapturingFetcher::default()).await;
    assert!(matches!(retry, AnalysisOutcome::Rendered(_)));
}

#[tokio::test]
async fn show_analysis_before_submit_is_ignored() {
    let mut session = scenario_session(UseAi::Yes);
    let fetcher = CapturingFetcher::default();

    assert_eq!(session.show_analysis(&fetcher).await, AnalysisOutcome::Ignored);
    assert!(fetcher.uploads.lock().expect("uploads lock poisoned").is_empty());
}

#[tokio::test]
async fn analysis_is_not_fetched_while_still_processing() {
    let mut session = scenario_session(UseAi::Yes);
    session.submit(&FixedBackend::default()).await;
    assert!(!session.is_analysis_ready());
    let fetcher = CapturingFetcher::default();

    assert_eq!(session.show_analysis(&fetcher).await, AnalysisOutcome::Ignored);
    assert!(fetcher.uploads.lock().expect("uploads lock poisoned").is_empty());

    session.await_processing(&InstantProcessing).await;
    let outcome = session.show_analysis(&fetcher).await;
    assert!(matches!(outcome, AnalysisOutcome::Rendered(_)));
}

#[tokio::test]
async fn resubmit_issues_a_fresh_id() {
    let mut session = scenario_session(UseAi::Yes);
    let backend = FixedBackend::default();

    session.submit(&backend).await;
    session.submit(&backend).await;

    assert_eq!(session.analysis_id(), Some(&AnalysisId::new("analysis_2")));
    assert_eq!(backend.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn default_collaborators_follow_their_delays() {
    let mut session = scenario_session(UseAi::Yes);
    let started = tokio::time::Instant::now();

    let outcome = session.submit(&MockSubmissionBackend::default()).await;
    assert!(matches!(outcome, SubmitOutcome::Processing(_)));
    assert!(started.elapsed() >= Duration::from_millis(1500));

    assert!(session.await_processing(&DelayedProcessing::default()).await);
    assert!(started.elapsed() >= Duration::from_millis(4500));
}
