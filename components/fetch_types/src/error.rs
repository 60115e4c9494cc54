//! Network-level fetch failures
//!
//! Only transport problems surface here. An HTTP error status is a
//! normal `FetchResponse`, not a `FetchError`.

use thiserror::Error;

/// Errors surfaced by a network fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The host could not be reached at all.
    #[error("network unreachable: {0}")]
    Unreachable(String),

    /// The connection was established but the transfer failed.
    #[error("transfer failed for {url}: {reason}")]
    Interrupted { url: String, reason: String },
}
