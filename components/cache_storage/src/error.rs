//! Cache storage failures

use thiserror::Error;

/// Errors surfaced by cache writes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    /// Partial-content responses are rejected at `put` time.
    #[error("cannot cache partial response (status 206) for {url}")]
    PartialResponse { url: String },
}
