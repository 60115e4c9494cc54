//! Worker error taxonomy
//!
//! Every variant is fatal to the operation that raised it and to
//! nothing else. The two documented soft failures never show up here:
//! a precache batch failure is carried as an install warning, and an
//! unparseable push payload falls back to the raw-text body.

use thiserror::Error;

use cache_storage::CacheError;
use fetch_types::FetchError;
use notifications::NotificationError;

use crate::clients::ClientError;
use crate::lifecycle::WorkerState;

/// Umbrella error for worker operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkerError {
    #[error("network error: {0}")]
    Fetch(#[from] FetchError),

    #[error("cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("notification error: {0}")]
    Notification(#[from] NotificationError),

    #[error("client error: {0}")]
    Client(#[from] ClientError),

    /// The host dispatched an operation the current state cannot run.
    #[error("{operation} not allowed in worker state {state}")]
    InvalidState {
        operation: &'static str,
        state: WorkerState,
    },
}

pub type WorkerResult<T> = Result<T, WorkerError>;
