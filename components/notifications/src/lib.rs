//! Notification pipeline pieces for the offline worker
//!
//! Covers the push payload wire format, the presentation contract for
//! displayed notifications (https://notifications.spec.whatwg.org/), and
//! an in-memory display surface standing in for the host notification UI.

pub mod center;
pub mod error;
pub mod options;
pub mod payload;

// Re-export main types
pub use center::{NotificationCenter, NotificationId, NotificationRecord};
pub use error::NotificationError;
pub use options::{
    default_actions, NotificationAction, NotificationData, NotificationOptions, ACTION_CLOSE,
    ACTION_OPEN,
};
pub use payload::PushPayload;
