//! The event interface between host and worker

use async_trait::async_trait;
use thiserror::Error;

use fetch_types::{FetchRequest, FetchResponse};
use notifications::NotificationRecord;

use crate::error::{WorkerError, WorkerResult};
use crate::events::{ClickOutcome, NotificationClickEvent, PushEvent};

/// A precache batch failure carried as a warning instead of an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("precache of {url} failed: {source}")]
pub struct PrecacheWarning {
    /// The asset whose fetch or store broke the batch.
    pub url: String,
    pub source: WorkerError,
}

/// What install accomplished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    /// Assets the manifest asked for.
    pub requested: usize,
    /// Assets actually cached. The batch is atomic, so this is all of
    /// them or none.
    pub precached: usize,
    /// The swallowed batch failure, if the precache could not complete.
    pub warning: Option<PrecacheWarning>,
    /// Whether immediate activation was requested.
    pub skip_waiting: bool,
}

impl InstallReport {
    /// True when every requested asset was cached.
    pub fn complete(&self) -> bool {
        self.warning.is_none()
    }
}

/// What activation accomplished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivateReport {
    /// Stale bucket names that were deleted.
    pub purged: Vec<String>,
    /// Windows now controlled by this worker.
    pub claimed: usize,
}

/// One async method per event kind
///
/// The host awaits each returned future to completion before treating
/// the event as released, so pending work rides on the future itself
/// rather than on a side channel.
#[async_trait]
pub trait WorkerEventHandler: Send + Sync {
    /// Install-time setup. Precache failure is reported as a warning,
    /// not an error.
    async fn on_install(&self) -> WorkerResult<InstallReport>;

    /// Activation-time cleanup and takeover.
    async fn on_activate(&self) -> WorkerResult<ActivateReport>;

    /// Serves one intercepted request.
    async fn on_fetch(&self, request: FetchRequest) -> WorkerResult<FetchResponse>;

    /// Displays the notification for one push message.
    async fn on_push(&self, event: PushEvent) -> WorkerResult<NotificationRecord>;

    /// Routes one notification click.
    async fn on_notification_click(
        &self,
        event: NotificationClickEvent,
    ) -> WorkerResult<ClickOutcome>;
}
