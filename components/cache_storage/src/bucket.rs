//! A single named cache bucket

use std::collections::HashMap;

use parking_lot::RwLock;

use fetch_types::{FetchRequest, FetchResponse};

use crate::error::CacheError;

/// Composes the exact-match key for a request.
///
/// The key is the request method plus the verbatim URL string. Query
/// strings are significant, headers never participate, and no
/// normalization is applied.
fn cache_key(request: &FetchRequest) -> String {
    format!("{} {}", request.method.as_str(), request.url)
}

/// One named bucket mapping request keys to stored responses
///
/// Buckets are handed out as `Arc`s by [`crate::CacheStorage::open`] and
/// synchronize internally, so clones of the handle can be used from
/// concurrent tasks.
#[derive(Debug)]
pub struct CacheBucket {
    name: String,
    entries: RwLock<HashMap<String, FetchResponse>>,
}

impl CacheBucket {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        CacheBucket {
            name: name.into(),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// The bucket name, version suffix and all.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a request by exact key match. Returns a clone of the
    /// stored response on hit.
    pub fn match_request(&self, request: &FetchRequest) -> Option<FetchResponse> {
        self.entries.read().get(&cache_key(request)).cloned()
    }

    /// Looks up a URL as a GET request.
    pub fn match_url(&self, url: &str) -> Option<FetchResponse> {
        self.match_request(&FetchRequest::get(url))
    }

    /// Stores one response under the request's key, replacing any
    /// previous entry. Rejects partial-content responses.
    pub fn put(&self, request: &FetchRequest, response: FetchResponse) -> Result<(), CacheError> {
        if response.status == 206 {
            return Err(CacheError::PartialResponse {
                url: request.url.clone(),
            });
        }
        self.entries.write().insert(cache_key(request), response);
        Ok(())
    }

    /// Stores a batch of entries atomically: either every entry lands or
    /// none does. Returns the number stored.
    pub fn put_all(
        &self,
        entries: Vec<(FetchRequest, FetchResponse)>,
    ) -> Result<usize, CacheError> {
        for (request, response) in &entries {
            if response.status == 206 {
                return Err(CacheError::PartialResponse {
                    url: request.url.clone(),
                });
            }
        }
        let mut stored = self.entries.write();
        let count = entries.len();
        for (request, response) in entries {
            stored.insert(cache_key(&request), response);
        }
        Ok(count)
    }

    /// Removes the entry for a request. Returns whether one existed.
    pub fn remove(&self, request: &FetchRequest) -> bool {
        self.entries.write().remove(&cache_key(request)).is_some()
    }

    /// The stored keys, sorted for stable iteration.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
