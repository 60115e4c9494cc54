//! Named cache buckets for the offline worker
//!
//! An in-memory rendering of the Cache and CacheStorage interfaces
//! (https://w3c.github.io/ServiceWorker/#cache-objects). Buckets map an
//! exact request key to one stored response; versioning lives entirely in
//! the bucket name.

pub mod bucket;
pub mod error;
pub mod storage;

// Re-export main types
pub use bucket::CacheBucket;
pub use error::CacheError;
pub use storage::CacheStorage;
