//! In-memory display surface

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::NotificationError;
use crate::options::NotificationOptions;

static NEXT_NOTIFICATION_ID: AtomicU64 = AtomicU64::new(1);

/// Identifier for a displayed notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(pub u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notification#{}", self.0)
    }
}

/// A notification as the center displayed it.
#[derive(Debug, Clone)]
pub struct NotificationRecord {
    pub id: NotificationId,
    pub title: String,
    pub options: NotificationOptions,
}

struct Entry {
    record: NotificationRecord,
    closed: bool,
}

/// Stands in for the host notification UI
///
/// Keeps every displayed notification so tests can assert on exactly
/// what was shown and what was closed. Permission is granted by default
/// and can be revoked to exercise the display-failure path.
pub struct NotificationCenter {
    granted: RwLock<bool>,
    entries: RwLock<Vec<Entry>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        NotificationCenter {
            granted: RwLock::new(true),
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Grants or revokes display permission.
    pub fn set_permission(&self, granted: bool) {
        *self.granted.write() = granted;
    }

    /// Displays a notification and returns its record.
    pub fn show(
        &self,
        title: impl Into<String>,
        options: NotificationOptions,
    ) -> Result<NotificationRecord, NotificationError> {
        if !*self.granted.read() {
            return Err(NotificationError::PermissionDenied);
        }
        let record = NotificationRecord {
            id: NotificationId(NEXT_NOTIFICATION_ID.fetch_add(1, Ordering::SeqCst)),
            title: title.into(),
            options,
        };
        log::debug!("displaying {}: {}", record.id, record.title);
        self.entries.write().push(Entry {
            record: record.clone(),
            closed: false,
        });
        Ok(record)
    }

    /// Marks a notification closed. Returns false for unknown ids.
    pub fn close(&self, id: NotificationId) -> bool {
        let mut entries = self.entries.write();
        match entries.iter_mut().find(|e| e.record.id == id) {
            Some(entry) => {
                entry.closed = true;
                true
            }
            None => false,
        }
    }

    /// Whether the id is known and closed.
    pub fn is_closed(&self, id: NotificationId) -> bool {
        self.entries
            .read()
            .iter()
            .any(|e| e.record.id == id && e.closed)
    }

    /// Records still on screen, in display order.
    pub fn displayed(&self) -> Vec<NotificationRecord> {
        self.entries
            .read()
            .iter()
            .filter(|e| !e.closed)
            .map(|e| e.record.clone())
            .collect()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        NotificationCenter::new()
    }
}
