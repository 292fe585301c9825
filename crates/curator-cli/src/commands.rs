//! Command handlers for the CLI.
//!
//! Each handler loads its form file itself so that parse errors surface with
//! the file path attached.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use curator_analysis::AnalysisClient;
use curator_core::{brand_file_stem, load_form, validate, AppConfig, CsvExport};
use curator_session::{
    AnalysisOutcome, DelayedProcessing, MockSubmissionBackend, Session, SubmitOutcome,
};

use crate::console::{status_lines, ConsoleNotifier};

/// Validate a form file, printing each field error.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or the form has field errors.
pub(crate) fn run_validate(form_path: &Path) -> anyhow::Result<()> {
    let form = load_form(form_path)?;
    let errors = validate(&form);
    if errors.is_empty() {
        println!("{}: ok", form_path.display());
        return Ok(());
    }
    for (field, message) in errors.iter() {
        println!("{field}: {message}");
    }
    anyhow::bail!("{} has {} field error(s)", form_path.display(), errors.len())
}

/// Write the curator list CSV for a form file into `out_dir`.
///
/// Returns the path written.
///
/// # Errors
///
/// Returns an error if the form cannot be loaded, has no brand name, or the
/// file cannot be written.
pub(crate) fn run_export(form_path: &Path, out_dir: &Path) -> anyhow::Result<PathBuf> {
    let form = load_form(form_path)?;
    let export = CsvExport::from_form(&form)
        .ok_or_else(|| anyhow::anyhow!("brand name is empty; nothing to export"))?;

    let out = out_dir.join(&export.file_name);
    std::fs::write(&out, &export.content)
        .with_context(|| format!("failed to write {}", out.display()))?;

    tracing::info!(path = %out.display(), "curator list exported");
    println!("wrote {}", out.display());
    Ok(out)
}

/// Default file name for a rendered report, stemmed like the CSV export.
pub(crate) fn report_file_name(brand_name: &str) -> String {
    format!("{}_analysis.html", brand_file_stem(brand_name))
}

/// Submit a form file through the mock backend, wait for processing and
/// optionally fetch the analysis report.
///
/// # Errors
///
/// Returns an error if the form cannot be loaded, the submission is rejected
/// or fails, or the requested analysis cannot be fetched or written.
pub(crate) async fn run_submit(
    config: &AppConfig,
    form_path: &Path,
    show_analysis: bool,
    report_out: Option<&Path>,
) -> anyhow::Result<()> {
    let form = load_form(form_path)?;
    let mut session = Session::with_form(form, ConsoleNotifier::default());

    let backend = MockSubmissionBackend::new(Duration::from_millis(config.submit_delay_ms));
    match session.submit(&backend).await {
        SubmitOutcome::Processing(_) | SubmitOutcome::Ready(_) => {}
        SubmitOutcome::Invalid(errors) => {
            for (field, message) in errors.iter() {
                println!("{field}: {message}");
            }
            anyhow::bail!("submission rejected: form has field errors");
        }
        SubmitOutcome::Failed => anyhow::bail!("submission failed"),
        SubmitOutcome::Busy => anyhow::bail!("a submission is already in progress"),
    }

    print_status(&session);
    if let Some(id) = session.analysis_id() {
        println!("Analysis ID: {id}");
    }

    let trigger = DelayedProcessing::new(Duration::from_millis(config.processing_delay_ms));
    if !session.is_analysis_ready() && session.await_processing(&trigger).await {
        print_status(&session);
    }

    if !show_analysis {
        return Ok(());
    }

    let client = AnalysisClient::with_base_url(&config.analysis_url, config.analysis_timeout_secs)?;
    match session.show_analysis(&client).await {
        AnalysisOutcome::Rendered(report) => {
            let out = report_out.map_or_else(
                || PathBuf::from(report_file_name(&session.form().brand_name)),
                Path::to_path_buf,
            );
            std::fs::write(&out, &report.html)
                .with_context(|| format!("failed to write {}", out.display()))?;

            println!("\n{}\n", report.title);
            if let Some(text) = session.analysis_result() {
                println!("{text}");
            }
            println!("\nreport written to {}", out.display());
            Ok(())
        }
        AnalysisOutcome::Failed => anyhow::bail!("analysis failed"),
        AnalysisOutcome::Ignored => anyhow::bail!("no analysis available for this submission"),
    }
}

fn print_status(session: &Session<ConsoleNotifier>) {
    for line in status_lines(session.lifecycle()) {
        println!("{line}");
    }
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;
