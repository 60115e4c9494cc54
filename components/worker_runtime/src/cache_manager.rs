//! Offline-first cache logic

use std::sync::Arc;

use futures::future::try_join_all;

use cache_storage::{CacheBucket, CacheError, CacheStorage};
use fetch_types::{FetchRequest, FetchResponse};

use crate::clients::WindowClients;
use crate::config::WorkerConfig;
use crate::error::WorkerResult;
use crate::handler::{ActivateReport, InstallReport, PrecacheWarning};
use crate::network::Network;

/// Precaches at install, purges at activate, serves fetches cache-first
///
/// Install is the only writer: fetch-time traffic never lands in the
/// cache.
pub struct CacheManager {
    config: WorkerConfig,
    storage: Arc<CacheStorage>,
    network: Arc<dyn Network>,
    clients: Arc<WindowClients>,
}

impl CacheManager {
    pub fn new(
        config: WorkerConfig,
        storage: Arc<CacheStorage>,
        network: Arc<dyn Network>,
        clients: Arc<WindowClients>,
    ) -> Self {
        CacheManager {
            config,
            storage,
            network,
            clients,
        }
    }

    /// Install-time precache of the asset manifest.
    ///
    /// The batch is atomic and its failure is deliberately soft: the
    /// error is logged, carried in the report as a warning, and install
    /// still succeeds. Immediate activation is always requested.
    pub async fn install(&self) -> WorkerResult<InstallReport> {
        let bucket = self.storage.open(&self.config.cache_name);
        let requested = self.config.precache_manifest.len();
        log::info!(
            "installing, precaching {requested} assets into {}",
            self.config.cache_name
        );

        let warning = match self.precache(&bucket).await {
            Ok(count) => {
                log::info!("precached {count} assets");
                None
            }
            Err(warning) => {
                log::error!("{warning}; continuing without precache");
                Some(warning)
            }
        };
        let precached = if warning.is_none() { requested } else { 0 };

        Ok(InstallReport {
            requested,
            precached,
            warning,
            skip_waiting: true,
        })
    }

    async fn precache(&self, bucket: &CacheBucket) -> Result<usize, PrecacheWarning> {
        let fetches = self.config.precache_manifest.iter().map(|url| async move {
            let request = FetchRequest::get(url.as_str());
            match self.network.fetch(&request).await {
                Ok(response) => Ok((request, response)),
                Err(err) => Err(PrecacheWarning {
                    url: url.clone(),
                    source: err.into(),
                }),
            }
        });
        let entries = try_join_all(fetches).await?;
        bucket.put_all(entries).map_err(|err| {
            let url = match &err {
                CacheError::PartialResponse { url } => url.clone(),
            };
            PrecacheWarning {
                url,
                source: err.into(),
            }
        })
    }

    /// Activation-time takeover: delete every bucket except the current
    /// one, then claim all windows.
    pub fn activate(&self) -> WorkerResult<ActivateReport> {
        let mut purged = Vec::new();
        for name in self.storage.names() {
            if name != self.config.cache_name {
                log::info!("purging stale cache bucket {name}");
                self.storage.delete(&name);
                purged.push(name);
            }
        }
        let claimed = self.clients.claim();
        log::info!("activated, claimed {claimed} windows");
        Ok(ActivateReport { purged, claimed })
    }

    /// Serves a request: exact cache match first, otherwise exactly one
    /// network fetch whose response is returned unmodified.
    pub async fn fetch(&self, request: &FetchRequest) -> WorkerResult<FetchResponse> {
        let bucket = self.storage.open(&self.config.cache_name);
        if let Some(hit) = bucket.match_request(request) {
            log::debug!("cache hit for {} {}", request.method, request.url);
            return Ok(hit);
        }
        log::debug!("cache miss for {} {}, going to network", request.method, request.url);
        let response = self.network.fetch(request).await?;
        Ok(response)
    }
}
