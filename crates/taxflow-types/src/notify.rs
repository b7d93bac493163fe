//! Notification seam
//!
//! User-visible, non-blocking notifications (toasts in the UI). Services
//! receive a [`Notifier`] trait object so the presentation layer stays
//! swappable and tests can record what was shown.

/// Severity of a user-visible notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeLevel {
    /// Neutral information
    Info,
    /// Operation completed
    Success,
    /// Something the user should look at
    Warning,
    /// Operation failed
    Error,
}

/// Sink for user-visible notifications
///
/// Every error surfaced to the user goes through this trait; nothing in the
/// core ever panics or blocks on a failed operation.
pub trait Notifier: Send + Sync {
    /// Show a notification to the user
    fn notify(&self, level: NoticeLevel, message: &str);

    /// Convenience: success notification
    fn success(&self, message: &str) {
        self.notify(NoticeLevel::Success, message);
    }

    /// Convenience: error notification
    fn error(&self, message: &str) {
        self.notify(NoticeLevel::Error, message);
    }
}

/// Notifier that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _level: NoticeLevel, _message: &str) {}
}
