//! Full worker sessions from registration to replacement
//!
//! One generation goes through install, activation, fetch serving, a
//! push with a click, an event-level failure it survives, and finally
//! replacement by the next deployment.

use std::sync::Arc;

use cache_storage::CacheStorage;
use fetch_types::FetchRequest;
use notifications::{NotificationCenter, ACTION_OPEN};
use worker_runtime::{
    ClickOutcome, MemoryNetwork, NotificationClickEvent, OfflineWorker, PushEvent, WindowClients,
    WorkerConfig, WorkerError, WorkerHost, WorkerState,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

struct Deployment {
    storage: Arc<CacheStorage>,
    network: Arc<MemoryNetwork>,
    center: Arc<NotificationCenter>,
    clients: Arc<WindowClients>,
}

impl Deployment {
    fn new() -> Self {
        init_logging();
        Deployment {
            storage: Arc::new(CacheStorage::new()),
            network: Arc::new(MemoryNetwork::new()),
            center: Arc::new(NotificationCenter::new()),
            clients: Arc::new(WindowClients::new()),
        }
    }

    fn roll_out(&self, config: WorkerConfig) -> WorkerHost {
        for url in &config.precache_manifest {
            self.network
                .route_ok(url, &format!("{} from {}", url, config.cache_name));
        }
        let worker = OfflineWorker::new(
            config,
            self.storage.clone(),
            self.network.clone(),
            self.center.clone(),
            self.clients.clone(),
        );
        WorkerHost::new(Arc::new(worker))
    }
}

#[tokio::test]
async fn test_full_session() {
    let deployment = Deployment::new();
    let host = deployment.roll_out(WorkerConfig::default());

    // A page is already open before the worker exists.
    let page = deployment.clients.spawn("/");

    // Install precaches and asks to take over immediately.
    let install = host.install().await.unwrap();
    assert!(install.complete());
    assert!(install.skip_waiting);
    assert!(host.skip_waiting_requested());

    // Activation purges nothing on a first deployment but claims the
    // open page.
    let activate = host.activate().await.unwrap();
    assert!(activate.purged.is_empty());
    assert_eq!(activate.claimed, 1);
    assert!(deployment.clients.get(page.id).unwrap().controlled);

    // The page reloads offline: every asset comes from the cache.
    for url in &WorkerConfig::default().precache_manifest {
        deployment.network.fail(url.clone());
        let response = host.handle_fetch(FetchRequest::get(url.as_str())).await.unwrap();
        assert!(response.ok());
    }

    // A push arrives and the user clicks View Now.
    let record = host
        .handle_push(PushEvent::with_text(
            r#"{"title":"New match!","url":"/matches"}"#,
        ))
        .await
        .unwrap();
    let outcome = host
        .handle_notification_click(NotificationClickEvent::with_action(record.clone(), ACTION_OPEN))
        .await
        .unwrap();
    let opened = match outcome {
        ClickOutcome::Opened(id) => deployment.clients.get(id).unwrap(),
        other => panic!("expected Opened, got {other:?}"),
    };
    assert_eq!(opened.url, "/matches");
    assert!(deployment.center.is_closed(record.id));

    // An API call fails while offline; the worker shrugs it off.
    assert!(host.handle_fetch(FetchRequest::get("/api/feed")).await.is_err());
    assert_eq!(host.state(), WorkerState::Activated);
    assert!(host.handle_push(PushEvent::empty()).await.is_ok());
}

#[tokio::test]
async fn test_no_events_before_activation() {
    let deployment = Deployment::new();
    let host = deployment.roll_out(WorkerConfig::default());

    let err = host.handle_push(PushEvent::empty()).await.unwrap_err();
    assert!(matches!(err, WorkerError::InvalidState { .. }));

    host.install().await.unwrap();
    let err = host.handle_fetch(FetchRequest::get("/")).await.unwrap_err();
    assert!(matches!(err, WorkerError::InvalidState { .. }));

    host.activate().await.unwrap();
    assert!(host.handle_fetch(FetchRequest::get("/")).await.is_ok());
}

#[tokio::test]
async fn test_next_deployment_replaces_the_previous_one() {
    let deployment = Deployment::new();

    let v3 = deployment.roll_out(WorkerConfig::default());
    v3.install().await.unwrap();
    v3.activate().await.unwrap();
    let v3_bucket = deployment.storage.open("campus-cupid-cache-v3");
    assert!(!v3_bucket.is_empty());

    // The v4 worker installs alongside, skips waiting, and takes over.
    let v4_config = WorkerConfig {
        cache_name: "campus-cupid-cache-v4".to_string(),
        ..WorkerConfig::default()
    };
    let v4 = deployment.roll_out(v4_config);
    v4.install().await.unwrap();
    assert!(v4.skip_waiting_requested());
    v3.retire();
    let report = v4.activate().await.unwrap();

    assert_eq!(v3.state(), WorkerState::Redundant);
    assert_eq!(report.purged, vec!["campus-cupid-cache-v3"]);
    assert_eq!(deployment.storage.names(), vec!["campus-cupid-cache-v4"]);

    // The retired generation refuses further events.
    let err = v3.handle_fetch(FetchRequest::get("/")).await.unwrap_err();
    assert!(matches!(err, WorkerError::InvalidState { .. }));

    // The new one serves its own cache.
    let response = v4.handle_fetch(FetchRequest::get("/")).await.unwrap();
    assert_eq!(response.body_text(), "/ from campus-cupid-cache-v4");
}

#[tokio::test]
async fn test_install_failure_worker_never_goes_hard_down() {
    let deployment = Deployment::new();
    let config = WorkerConfig::default();
    // Routes are registered by roll_out; break one before installing.
    let host = deployment.roll_out(config.clone());
    deployment.network.fail("/manifest.json");

    let report = host.install().await.unwrap();
    assert!(!report.complete());
    let warning = report.warning.unwrap();
    assert_eq!(warning.url, "/manifest.json");

    host.activate().await.unwrap();
    assert_eq!(host.state(), WorkerState::Activated);

    // Nothing was cached, but once the outage clears the site works
    // online again.
    deployment.network.recover("/manifest.json");
    let response = host
        .handle_fetch(FetchRequest::get("/manifest.json"))
        .await
        .unwrap();
    assert!(response.ok());
}
