//! The offline worker itself

use std::sync::Arc;

use async_trait::async_trait;

use cache_storage::CacheStorage;
use fetch_types::{FetchRequest, FetchResponse};
use notifications::{NotificationCenter, NotificationRecord};

use crate::cache_manager::CacheManager;
use crate::clients::WindowClients;
use crate::config::WorkerConfig;
use crate::error::WorkerResult;
use crate::events::{ClickOutcome, NotificationClickEvent, PushEvent};
use crate::handler::{ActivateReport, InstallReport, WorkerEventHandler};
use crate::network::Network;
use crate::notification_router::NotificationRouter;

/// The Campus Cupid worker: a cache manager and a notification router
/// behind the event interface
///
/// All platform services are injected; the worker owns no I/O of its
/// own.
pub struct OfflineWorker {
    cache: CacheManager,
    router: NotificationRouter,
}

impl OfflineWorker {
    pub fn new(
        config: WorkerConfig,
        storage: Arc<CacheStorage>,
        network: Arc<dyn Network>,
        center: Arc<NotificationCenter>,
        clients: Arc<WindowClients>,
    ) -> Self {
        OfflineWorker {
            cache: CacheManager::new(config.clone(), storage, network, clients.clone()),
            router: NotificationRouter::new(config, center, clients),
        }
    }
}

#[async_trait]
impl WorkerEventHandler for OfflineWorker {
    async fn on_install(&self) -> WorkerResult<InstallReport> {
        self.cache.install().await
    }

    async fn on_activate(&self) -> WorkerResult<ActivateReport> {
        self.cache.activate()
    }

    async fn on_fetch(&self, request: FetchRequest) -> WorkerResult<FetchResponse> {
        self.cache.fetch(&request).await
    }

    async fn on_push(&self, event: PushEvent) -> WorkerResult<NotificationRecord> {
        self.router.push(event)
    }

    async fn on_notification_click(
        &self,
        event: NotificationClickEvent,
    ) -> WorkerResult<ClickOutcome> {
        self.router.click(event)
    }
}
