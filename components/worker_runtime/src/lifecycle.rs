//! Worker lifecycle and event dispatch
//!
//! States and transitions follow the service worker lifecycle
//! (https://w3c.github.io/ServiceWorker/#service-worker-lifetime): one
//! generation moves forward through install and activation, and a
//! replaced or failed generation goes redundant and never runs again.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use fetch_types::{FetchRequest, FetchResponse};
use notifications::NotificationRecord;

use crate::error::{WorkerError, WorkerResult};
use crate::events::{ClickOutcome, NotificationClickEvent, PushEvent};
use crate::handler::{ActivateReport, InstallReport, WorkerEventHandler};

/// Lifecycle states of one worker generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkerState {
    /// Script evaluated, nothing run yet.
    Parsed,
    Installing,
    /// Install settled, waiting to activate.
    Installed,
    Activating,
    /// Controlling pages and handling events.
    Activated,
    /// Replaced or failed. Terminal.
    Redundant,
}

impl WorkerState {
    /// Whether fetch, push and click events may be dispatched.
    pub fn can_handle_events(&self) -> bool {
        matches!(self, WorkerState::Activated)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, WorkerState::Redundant)
    }

    /// Valid state machine steps. Any non-terminal state may go
    /// redundant.
    pub fn can_transition_to(&self, next: WorkerState) -> bool {
        if self.is_terminal() {
            return false;
        }
        if next == WorkerState::Redundant {
            return true;
        }
        matches!(
            (*self, next),
            (WorkerState::Parsed, WorkerState::Installing)
                | (WorkerState::Installing, WorkerState::Installed)
                | (WorkerState::Installed, WorkerState::Activating)
                | (WorkerState::Activating, WorkerState::Activated)
        )
    }
}

impl fmt::Display for WorkerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WorkerState::Parsed => "parsed",
            WorkerState::Installing => "installing",
            WorkerState::Installed => "installed",
            WorkerState::Activating => "activating",
            WorkerState::Activated => "activated",
            WorkerState::Redundant => "redundant",
        };
        write!(f, "{name}")
    }
}

/// Drives one worker generation and dispatches events to it
///
/// Each dispatch awaits the handler's future to completion before the
/// event counts as released. Event failures after activation are logged
/// and returned without touching the state: the worker stays activated
/// and keeps serving.
pub struct WorkerHost {
    handler: Arc<dyn WorkerEventHandler>,
    state: RwLock<WorkerState>,
    skip_waiting: AtomicBool,
}

impl WorkerHost {
    /// Wraps a freshly parsed worker.
    pub fn new(handler: Arc<dyn WorkerEventHandler>) -> Self {
        WorkerHost {
            handler,
            state: RwLock::new(WorkerState::Parsed),
            skip_waiting: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> WorkerState {
        *self.state.read()
    }

    /// Whether install asked to activate without waiting for old
    /// clients to release the previous generation.
    pub fn skip_waiting_requested(&self) -> bool {
        self.skip_waiting.load(Ordering::SeqCst)
    }

    /// Runs the install phase. A precache warning is already part of a
    /// successful report; only a hard handler failure makes the
    /// generation redundant.
    pub async fn install(&self) -> WorkerResult<InstallReport> {
        self.transition("install", WorkerState::Installing)?;
        match self.handler.on_install().await {
            Ok(report) => {
                if report.skip_waiting {
                    log::info!("skip waiting requested");
                    self.skip_waiting.store(true, Ordering::SeqCst);
                }
                self.transition("install", WorkerState::Installed)?;
                Ok(report)
            }
            Err(err) => {
                log::error!("install failed: {err}");
                self.retire();
                Err(err)
            }
        }
    }

    /// Runs the activation phase. On success the worker starts handling
    /// events; on failure the generation goes redundant.
    pub async fn activate(&self) -> WorkerResult<ActivateReport> {
        self.transition("activate", WorkerState::Activating)?;
        match self.handler.on_activate().await {
            Ok(report) => {
                self.transition("activate", WorkerState::Activated)?;
                Ok(report)
            }
            Err(err) => {
                log::error!("activation failed: {err}");
                self.retire();
                Err(err)
            }
        }
    }

    /// Dispatches a fetch event. Requires the activated state.
    pub async fn handle_fetch(&self, request: FetchRequest) -> WorkerResult<FetchResponse> {
        self.require_active("fetch event")?;
        self.handler
            .on_fetch(request)
            .await
            .map_err(|err| self.event_failed("fetch", err))
    }

    /// Dispatches a push event. Requires the activated state.
    pub async fn handle_push(&self, event: PushEvent) -> WorkerResult<NotificationRecord> {
        self.require_active("push event")?;
        self.handler
            .on_push(event)
            .await
            .map_err(|err| self.event_failed("push", err))
    }

    /// Dispatches a notification click. Requires the activated state.
    pub async fn handle_notification_click(
        &self,
        event: NotificationClickEvent,
    ) -> WorkerResult<ClickOutcome> {
        self.require_active("notificationclick event")?;
        self.handler
            .on_notification_click(event)
            .await
            .map_err(|err| self.event_failed("notificationclick", err))
    }

    /// Marks the generation redundant, as when a newer one takes over.
    pub fn retire(&self) {
        let mut state = self.state.write();
        if !state.is_terminal() {
            log::info!("worker {} -> redundant", *state);
            *state = WorkerState::Redundant;
        }
    }

    fn transition(&self, operation: &'static str, next: WorkerState) -> WorkerResult<()> {
        let mut state = self.state.write();
        if !state.can_transition_to(next) {
            return Err(WorkerError::InvalidState {
                operation,
                state: *state,
            });
        }
        log::info!("worker {} -> {next}", *state);
        *state = next;
        Ok(())
    }

    fn require_active(&self, operation: &'static str) -> WorkerResult<()> {
        let state = self.state();
        if !state.can_handle_events() {
            return Err(WorkerError::InvalidState { operation, state });
        }
        Ok(())
    }

    // Event failures are fatal to the event, not to the worker.
    fn event_failed(&self, kind: &str, err: WorkerError) -> WorkerError {
        log::error!("{kind} event failed: {err}");
        err
    }
}
