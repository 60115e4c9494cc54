//! Events the host dispatches to the worker

use notifications::NotificationRecord;

use crate::clients::ClientId;

/// Bytes delivered with a push message.
#[derive(Debug, Clone)]
pub struct PushData {
    bytes: Vec<u8>,
}

impl PushData {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        PushData {
            bytes: bytes.into(),
        }
    }

    /// The payload decoded as UTF-8 text, lossily.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// A push message, possibly without a payload.
#[derive(Debug, Clone, Default)]
pub struct PushEvent {
    pub data: Option<PushData>,
}

impl PushEvent {
    /// A push with no payload at all.
    pub fn empty() -> Self {
        PushEvent::default()
    }

    /// A push carrying the given text.
    pub fn with_text(text: &str) -> Self {
        PushEvent {
            data: Some(PushData::new(text)),
        }
    }
}

/// A click on a displayed notification.
#[derive(Debug, Clone)]
pub struct NotificationClickEvent {
    pub notification: NotificationRecord,
    /// The clicked action button, or `None` for a click on the
    /// notification body.
    pub action: Option<String>,
}

impl NotificationClickEvent {
    /// A click on the notification body.
    pub fn body_click(notification: NotificationRecord) -> Self {
        NotificationClickEvent {
            notification,
            action: None,
        }
    }

    /// A click on the named action button.
    pub fn with_action(notification: NotificationRecord, action: impl Into<String>) -> Self {
        NotificationClickEvent {
            notification,
            action: Some(action.into()),
        }
    }
}

/// Where a notification click ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The close action was chosen; nothing was focused or opened.
    Dismissed,
    /// An existing window matched the stored URL and was focused.
    Focused(ClientId),
    /// No window matched; a new one was opened.
    Opened(ClientId),
}
