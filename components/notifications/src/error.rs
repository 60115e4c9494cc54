//! Notification display failures

use thiserror::Error;

/// Errors surfaced when displaying a notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    /// The host refused display because permission is not granted.
    #[error("notification permission denied")]
    PermissionDenied,
}
