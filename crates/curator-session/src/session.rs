//! The curator session: form state plus the submit → process → fetch lifecycle.
//!
//! Each asynchronous step is split into a `begin_*` call that checks and sets
//! the busy state and a `complete_*` call that applies the result. Hosts with
//! their own event loop drive the two halves directly; everything else uses
//! the `submit` / `await_processing` / `show_analysis` wrappers.

use curator_analysis::{render_report_html, report_title, AnalysisError};
use curator_core::{serialize_form, validate, BrandForm, CuratorList, FieldErrors, UseAi};

use crate::backend::{
    AnalysisId, ProcessingTrigger, ReportFetcher, SubmissionBackend, SubmissionError,
};
use crate::notify::{Notification, Notifier};

/// Where the session is in the submission cycle.
///
/// Readiness is only representable together with the id it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Idle,
    Submitting,
    Processing { analysis_id: AnalysisId },
    Ready { analysis_id: AnalysisId },
}

impl Lifecycle {
    #[must_use]
    pub fn analysis_id(&self) -> Option<&AnalysisId> {
        match self {
            Lifecycle::Processing { analysis_id } | Lifecycle::Ready { analysis_id } => {
                Some(analysis_id)
            }
            Lifecycle::Idle | Lifecycle::Submitting => None,
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Lifecycle::Ready { .. })
    }
}

/// Why `begin_submit` did not start a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    /// A submission or report fetch is already in flight.
    Busy,
    /// The form failed validation; the errors are also stored on the session.
    Invalid(FieldErrors),
}

/// Result of a full submit round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Busy,
    Invalid(FieldErrors),
    Failed,
    Processing(AnalysisId),
    Ready(AnalysisId),
}

/// A report fetch that has been started and awaits its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub analysis_id: AnalysisId,
    pub brand_name: String,
    pub csv: String,
}

/// A fetched report rendered as a standalone HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    pub title: String,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// The analysis is not ready yet, or a fetch is already in flight.
    Ignored,
    Failed,
    Rendered(RenderedReport),
}

pub struct Session<N: Notifier> {
    form: BrandForm,
    errors: FieldErrors,
    lifecycle: Lifecycle,
    pending_use_ai: UseAi,
    analysis_result: Option<String>,
    analysis_loading: bool,
    notifier: N,
}

impl<N: Notifier> Session<N> {
    pub fn new(notifier: N) -> Self {
        Self::with_form(BrandForm::default(), notifier)
    }

    pub fn with_form(form: BrandForm, notifier: N) -> Self {
        Self {
            form,
            errors: FieldErrors::default(),
            lifecycle: Lifecycle::Idle,
            pending_use_ai: UseAi::default(),
            analysis_result: None,
            analysis_loading: false,
            notifier,
        }
    }

    pub fn form(&self) -> &BrandForm {
        &self.form
    }

    /// Edits are allowed at any time, including while a submission or fetch
    /// is in flight.
    pub fn form_mut(&mut self) -> &mut BrandForm {
        &mut self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub fn analysis_id(&self) -> Option<&AnalysisId> {
        self.lifecycle.analysis_id()
    }

    pub fn is_analysis_ready(&self) -> bool {
        self.lifecycle.is_ready()
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Submitting)
    }

    pub fn analysis_result(&self) -> Option<&str> {
        self.analysis_result.as_deref()
    }

    pub fn is_analysis_loading(&self) -> bool {
        self.analysis_loading
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Validate and, if valid, move to `Submitting`.
    ///
    /// Resets any previous analysis id, readiness and result first. Returns the
    /// trimmed, filtered payload to hand to the submission backend.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitRejected::Busy`] while a submission or report fetch is
    /// in flight (state is left untouched), or [`SubmitRejected::Invalid`]
    /// after raising the validation notification.
    pub fn begin_submit(&mut self) -> Result<CuratorList, SubmitRejected> {
        if self.is_submitting() || self.analysis_loading {
            return Err(SubmitRejected::Busy);
        }

        self.lifecycle = Lifecycle::Idle;
        self.analysis_result = None;

        self.errors = validate(&self.form);
        if !self.errors.is_empty() {
            tracing::debug!(fields = self.errors.len(), "curator list failed validation");
            self.notifier.notify(Notification::VALIDATION_ERROR);
            return Err(SubmitRejected::Invalid(self.errors.clone()));
        }

        let list = self.form.curator_list();
        self.pending_use_ai = list.use_ai;
        self.lifecycle = Lifecycle::Submitting;
        Ok(list)
    }

    /// Apply the backend's answer to an in-flight submission.
    ///
    /// On success the session moves straight to `Ready` when AI was not
    /// requested, otherwise to `Processing`.
    pub fn complete_submit(
        &mut self,
        result: Result<AnalysisId, SubmissionError>,
    ) -> SubmitOutcome {
        match result {
            Ok(analysis_id) => {
                tracing::info!(analysis_id = %analysis_id, "curator list submitted");
                self.notifier.notify(Notification::SUBMISSION_SUCCESSFUL);
                if self.pending_use_ai.is_yes() {
                    self.lifecycle = Lifecycle::Processing {
                        analysis_id: analysis_id.clone(),
                    };
                    SubmitOutcome::Processing(analysis_id)
                } else {
                    self.lifecycle = Lifecycle::Ready {
                        analysis_id: analysis_id.clone(),
                    };
                    SubmitOutcome::Ready(analysis_id)
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "curator list submission failed");
                self.lifecycle = Lifecycle::Idle;
                self.notifier.notify(Notification::SUBMISSION_FAILED);
                SubmitOutcome::Failed
            }
        }
    }

    /// Mark processing for `analysis_id` as finished.
    ///
    /// Returns `false` and changes nothing if `analysis_id` is not the
    /// submission currently being processed (for example after a resubmit).
    pub fn complete_processing(&mut self, analysis_id: &AnalysisId) -> bool {
        let is_current = matches!(
            &self.lifecycle,
            Lifecycle::Processing { analysis_id: current } if current == analysis_id
        );
        if !is_current {
            tracing::debug!(analysis_id = %analysis_id, "ignoring stale processing completion");
            return false;
        }

        self.lifecycle = Lifecycle::Ready {
            analysis_id: analysis_id.clone(),
        };
        self.notifier.notify(Notification::ANALYSIS_COMPLETE);
        true
    }

    /// Validate, submit through `backend`, and record the outcome.
    pub async fn submit<B: SubmissionBackend>(&mut self, backend: &B) -> SubmitOutcome {
        let list = match self.begin_submit() {
            Ok(list) => list,
            Err(SubmitRejected::Busy) => return SubmitOutcome::Busy,
            Err(SubmitRejected::Invalid(errors)) => return SubmitOutcome::Invalid(errors),
        };
        let result = backend.submit(&list).await;
        self.complete_submit(result)
    }

    /// If processing, wait for `trigger` and mark the session ready.
    ///
    /// Returns whether the session is ready afterwards.
    pub async fn await_processing<P: ProcessingTrigger>(&mut self, trigger: &P) -> bool {
        let Lifecycle::Processing { analysis_id } = &self.lifecycle else {
            return self.is_analysis_ready();
        };
        let analysis_id = analysis_id.clone();
        trigger.process(&analysis_id).await;
        self.complete_processing(&analysis_id);
        self.is_analysis_ready()
    }

    /// Start a report fetch for the current form state.
    ///
    /// Returns `None` unless the session is `Ready` with no fetch in flight.
    /// Otherwise clears the previous result and marks loading.
    pub fn begin_analysis(&mut self) -> Option<AnalysisRequest> {
        if self.analysis_loading {
            return None;
        }
        let Lifecycle::Ready { analysis_id } = &self.lifecycle else {
            return None;
        };
        let analysis_id = analysis_id.clone();

        self.analysis_loading = true;
        self.analysis_result = None;

        Some(AnalysisRequest {
            analysis_id,
            brand_name: self.form.brand_name.trim().to_string(),
            csv: serialize_form(&self.form),
        })
    }

    /// Apply the result of a report fetch started by [`Session::begin_analysis`].
    ///
    /// Failures leave the analysis id and readiness untouched so the fetch
    /// can be retried.
    pub fn complete_analysis(
        &mut self,
        request: &AnalysisRequest,
        result: Result<String, AnalysisError>,
    ) -> AnalysisOutcome {
        self.analysis_loading = false;
        match result {
            Ok(analysis) => {
                tracing::info!(
                    analysis_id = %request.analysis_id,
                    chars = analysis.len(),
                    "analysis report received"
                );
                let report = RenderedReport {
                    title: report_title(&request.brand_name),
                    html: render_report_html(&request.brand_name, &analysis),
                };
                self.analysis_result = Some(analysis);
                AnalysisOutcome::Rendered(report)
            }
            Err(e) => {
                tracing::warn!(
                    analysis_id = %request.analysis_id,
                    error = %e,
                    "analysis fetch failed"
                );
                self.notifier.notify(Notification::ANALYSIS_FAILED);
                AnalysisOutcome::Failed
            }
        }
    }

    /// Fetch the report through `fetcher` and render it.
    pub async fn show_analysis<F: ReportFetcher>(&mut self, fetcher: &F) -> AnalysisOutcome {
        let Some(request) = self.begin_analysis() else {
            return AnalysisOutcome::Ignored;
        };
        let result = fetcher.fetch_report(&request.csv).await;
        self.complete_analysis(&request, result)
    }
}
