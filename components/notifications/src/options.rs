//! Presentation contract for displayed notifications

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Identifier of the action button that opens the target URL.
pub const ACTION_OPEN: &str = "open";
/// Identifier of the action button that dismisses the notification.
pub const ACTION_CLOSE: &str = "close";

/// An action button on a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationAction {
    pub action: String,
    pub title: String,
}

impl NotificationAction {
    pub fn new(action: impl Into<String>, title: impl Into<String>) -> Self {
        NotificationAction {
            action: action.into(),
            title: title.into(),
        }
    }
}

/// The two buttons every notification carries, in display order.
pub fn default_actions() -> Vec<NotificationAction> {
    vec![
        NotificationAction::new(ACTION_OPEN, "View Now"),
        NotificationAction::new(ACTION_CLOSE, "Close"),
    ]
}

/// Data attached at display time and read back when a click is routed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationData {
    /// Navigation target for a click.
    pub url: String,
    /// Epoch milliseconds at display time.
    pub timestamp: u64,
}

impl NotificationData {
    /// Captures the target URL with the current timestamp.
    pub fn new(url: impl Into<String>) -> Self {
        NotificationData {
            url: url.into(),
            timestamp: now_ms(),
        }
    }
}

/// Everything but the title of a displayed notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationOptions {
    pub body: String,
    pub icon: String,
    pub badge: String,
    /// Vibration pattern in milliseconds.
    pub vibrate: Vec<u32>,
    pub data: NotificationData,
    pub actions: Vec<NotificationAction>,
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
