//! The network boundary

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use parking_lot::RwLock;

use fetch_types::{FetchError, FetchRequest, FetchResponse};

/// The worker's one way to reach the network.
#[async_trait]
pub trait Network: Send + Sync {
    /// Performs a single network fetch. Transport failure is an error;
    /// an HTTP error status is a normal response.
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, FetchError>;
}

/// Canned-route network
///
/// Serves pre-registered responses by URL, records every request it
/// sees, and can be told to fail specific URLs. Unrouted URLs behave as
/// unreachable.
#[derive(Default)]
pub struct MemoryNetwork {
    routes: RwLock<HashMap<String, FetchResponse>>,
    failing: RwLock<HashSet<String>>,
    requests: RwLock<Vec<FetchRequest>>,
}

impl MemoryNetwork {
    pub fn new() -> Self {
        MemoryNetwork::default()
    }

    /// Serves this response for the URL, replacing any previous route.
    pub fn route(&self, url: impl Into<String>, response: FetchResponse) {
        self.routes.write().insert(url.into(), response);
    }

    /// Serves a 200 response with the given body for the URL.
    pub fn route_ok(&self, url: &str, body: &str) {
        self.route(url, FetchResponse::new(url, 200, body));
    }

    /// Makes every fetch of this URL fail as unreachable.
    pub fn fail(&self, url: impl Into<String>) {
        self.failing.write().insert(url.into());
    }

    /// Clears a failure, letting the URL's route answer again.
    pub fn recover(&self, url: &str) {
        self.failing.write().remove(url);
    }

    /// Every request fetched so far, in order.
    pub fn requests(&self) -> Vec<FetchRequest> {
        self.requests.read().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.read().len()
    }

    /// How many fetches hit the given URL.
    pub fn requests_for(&self, url: &str) -> usize {
        self.requests.read().iter().filter(|r| r.url == url).count()
    }
}

#[async_trait]
impl Network for MemoryNetwork {
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, FetchError> {
        self.requests.write().push(request.clone());
        if self.failing.read().contains(&request.url) {
            return Err(FetchError::Unreachable(request.url.clone()));
        }
        match self.routes.read().get(&request.url) {
            Some(response) => Ok(response.clone()),
            None => Err(FetchError::Unreachable(request.url.clone())),
        }
    }
}
