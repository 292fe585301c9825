//! User-facing notifications raised by the session.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Normal,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: &'static str,
    pub description: &'static str,
    pub severity: Severity,
}

impl Notification {
    pub const VALIDATION_ERROR: Notification = Notification {
        title: "Validation Error",
        description: "Please fix the errors before submitting.",
        severity: Severity::Destructive,
    };

    pub const SUBMISSION_SUCCESSFUL: Notification = Notification {
        title: "Submission Successful",
        description: "Your curator list has been saved successfully.",
        severity: Severity::Normal,
    };

    pub const SUBMISSION_FAILED: Notification = Notification {
        title: "Submission Failed",
        description: "There was an error saving your curator list. Please try again.",
        severity: Severity::Destructive,
    };

    pub const ANALYSIS_COMPLETE: Notification = Notification {
        title: "Analysis Complete",
        description: "Your brand monitoring analysis is ready to view.",
        severity: Severity::Normal,
    };

    pub const ANALYSIS_FAILED: Notification = Notification {
        title: "Analysis Failed",
        description: "There was an error running the analysis. Please try again.",
        severity: Severity::Destructive,
    };
}

/// Sink for notifications. The session owns exactly one.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Logs notifications: `info` for normal, `warn` for destructive.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, notification: Notification) {
        match notification.severity {
            Severity::Normal => tracing::info!(
                title = notification.title,
                "{}",
                notification.description
            ),
            Severity::Destructive => tracing::warn!(
                title = notification.title,
                "{}",
                notification.description
            ),
        }
    }
}

/// Keeps every notification in order. Useful for hosts that render them later.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    pub notifications: Vec<Notification>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn titles(&self) -> Vec<&'static str> {
        self.notifications.iter().map(|n| n.title).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}
