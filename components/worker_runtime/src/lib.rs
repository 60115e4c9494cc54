//! The offline worker runtime
//!
//! Runs the Campus Cupid service worker (https://w3c.github.io/ServiceWorker/):
//! a cache manager that precaches the asset manifest and serves fetches
//! cache-first, and a notification router that turns push messages into
//! notifications and clicks into navigation. All platform services are
//! injected at construction and every event handler is an async method
//! the host awaits.

pub mod cache_manager;
pub mod clients;
pub mod config;
pub mod error;
pub mod events;
pub mod handler;
pub mod lifecycle;
pub mod network;
pub mod notification_router;
pub mod worker;

// Re-export main types
pub use cache_manager::CacheManager;
pub use clients::{Client, ClientError, ClientId, WindowClients};
pub use config::WorkerConfig;
pub use error::{WorkerError, WorkerResult};
pub use events::{ClickOutcome, NotificationClickEvent, PushData, PushEvent};
pub use handler::{ActivateReport, InstallReport, PrecacheWarning, WorkerEventHandler};
pub use lifecycle::{WorkerHost, WorkerState};
pub use network::{MemoryNetwork, Network};
pub use notification_router::NotificationRouter;
pub use worker::OfflineWorker;
