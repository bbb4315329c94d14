//! Maps remote failures to user-facing messages and recovery affordances.
//!
//! ERROR HANDLING
//! ==============
//! Classification is pure and total: any failure (or the absence of one)
//! yields a message plus an optional recovery action, never a panic or a
//! raw stack trace. The only side effects live in [`perform`], which runs
//! when the user explicitly picks the suggested action.

#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;

use crate::net::error::ApiError;

/// Recovery affordance attached to an error surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecoveryAction {
    /// Reload the current view and retry whatever failed.
    Retry,
    /// Navigate to the login view.
    GoToLogin,
    /// Navigate back to the role dashboard.
    GoHome,
}

/// A recovery action together with its button label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Recovery {
    pub action: RecoveryAction,
    pub label: &'static str,
}

/// User-facing classification of a failure. Created fresh per failure,
/// never cached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorNotice {
    pub message: String,
    /// Suggested recovery, or `None` when the surrounding form is the
    /// recovery surface (bad credentials, validation detail).
    pub recovery: Option<Recovery>,
}

impl ErrorNotice {
    fn plain(message: impl Into<String>) -> Self {
        Self { message: message.into(), recovery: None }
    }

    fn retry(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            recovery: Some(Recovery { action: RecoveryAction::Retry, label: "Try again" }),
        }
    }

    fn with(message: impl Into<String>, action: RecoveryAction, label: &'static str) -> Self {
        Self {
            message: message.into(),
            recovery: Some(Recovery { action, label }),
        }
    }
}

/// Classify a failure for display; first match wins, unknown shapes fall
/// through to a generic retry affordance.
#[must_use]
pub fn classify(error: Option<&ApiError>) -> ErrorNotice {
    let Some(error) = error else {
        return ErrorNotice::retry("An unknown error occurred. Please try again.");
    };
    match error {
        ApiError::Unauthorized => ErrorNotice::plain("Invalid username or password."),
        ApiError::Forbidden => ErrorNotice::with(
            "You do not have permission to view this. If you registered recently, your account may still be awaiting approval.",
            RecoveryAction::GoHome,
            "Go to dashboard",
        ),
        ApiError::NotFound => ErrorNotice::with(
            "The requested resource was not found.",
            RecoveryAction::GoHome,
            "Go to dashboard",
        ),
        ApiError::Timeout => ErrorNotice::retry("The request timed out. Check your connection and try again."),
        ApiError::NetworkUnreachable => {
            ErrorNotice::retry("Cannot reach the server. Check your connection and try again.")
        }
        ApiError::Server(_) => ErrorNotice::retry("Something went wrong on the server. Please try again later."),
        ApiError::Validation(detail) => ErrorNotice::plain(detail.clone()),
        ApiError::Other(message) => classify_opaque(message),
    }
}

/// Content sniffing for failures that arrive as bare text.
fn classify_opaque(message: &str) -> ErrorNotice {
    let lowered = message.to_ascii_lowercase();
    if lowered.contains("network") || lowered.contains("failed to fetch") {
        ErrorNotice::retry("Cannot reach the server. Check your connection and try again.")
    } else if lowered.contains("timeout") || lowered.contains("timed out") {
        ErrorNotice::retry("The request timed out. Check your connection and try again.")
    } else {
        ErrorNotice::retry(message)
    }
}

/// Run a recovery action. Only ever invoked from an explicit user click.
pub fn perform(action: RecoveryAction) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let _ = match action {
            RecoveryAction::Retry => location.reload(),
            RecoveryAction::GoToLogin => location.set_href("/login"),
            RecoveryAction::GoHome => location.set_href("/"),
        };
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = action;
    }
}
