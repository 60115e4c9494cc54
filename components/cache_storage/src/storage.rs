//! The named-bucket store

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use fetch_types::{FetchRequest, FetchResponse};

use crate::bucket::CacheBucket;

/// Holds every named [`CacheBucket`], created on first open
///
/// Bucket names are opaque strings. The store never inspects them for
/// version numbers; stale-version cleanup works by deleting every name
/// that is not the current one.
#[derive(Debug, Default)]
pub struct CacheStorage {
    buckets: RwLock<HashMap<String, Arc<CacheBucket>>>,
}

impl CacheStorage {
    pub fn new() -> Self {
        CacheStorage::default()
    }

    /// Opens the named bucket, creating it if absent. Repeated opens of
    /// the same name return handles to the same bucket.
    pub fn open(&self, name: &str) -> Arc<CacheBucket> {
        let mut buckets = self.buckets.write();
        buckets
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(CacheBucket::new(name)))
            .clone()
    }

    /// Whether a bucket with this name exists.
    pub fn has(&self, name: &str) -> bool {
        self.buckets.read().contains_key(name)
    }

    /// Deletes the named bucket and everything in it. Returns whether it
    /// existed. Outstanding handles keep their entries but are no longer
    /// reachable by name.
    pub fn delete(&self, name: &str) -> bool {
        self.buckets.write().remove(name).is_some()
    }

    /// Every bucket name, sorted for stable iteration.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.buckets.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Searches every bucket in name order and returns the first match.
    pub fn match_request(&self, request: &FetchRequest) -> Option<FetchResponse> {
        let buckets = self.buckets.read();
        let mut names: Vec<&String> = buckets.keys().collect();
        names.sort();
        names
            .into_iter()
            .find_map(|name| buckets[name].match_request(request))
    }
}
