//! Terminal rendering of notifications and the analysis status line.

use curator_session::{Lifecycle, Notification, Notifier, Severity, TracingNotifier};

pub(crate) const PROCESSING_HINT: &str = "AI analysis in progress, this may take a few minutes";

/// Prints each notification and forwards it to the log.
#[derive(Debug, Default)]
pub(crate) struct ConsoleNotifier {
    log: TracingNotifier,
}

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, notification: Notification) {
        let line = format_notification(&notification);
        match notification.severity {
            Severity::Normal => println!("{line}"),
            Severity::Destructive => eprintln!("{line}"),
        }
        self.log.notify(notification);
    }
}

pub(crate) fn format_notification(notification: &Notification) -> String {
    let marker = match notification.severity {
        Severity::Normal => "✓",
        Severity::Destructive => "✗",
    };
    format!(
        "{marker} {}: {}",
        notification.title, notification.description
    )
}

/// Status lines for the current lifecycle. Empty until an analysis id exists.
pub(crate) fn status_lines(lifecycle: &Lifecycle) -> Vec<&'static str> {
    match lifecycle {
        Lifecycle::Idle | Lifecycle::Submitting => Vec::new(),
        Lifecycle::Processing { .. } => {
            vec!["Analysis Status: Processing...", PROCESSING_HINT]
        }
        Lifecycle::Ready { .. } => vec!["Analysis Status: Ready"],
    }
}
