//! Push payload handling and notification click routing
//!
//! Covers the notification pipeline end to end: payload parsing with
//! per-field defaults, the fixed presentation contract, and close-first
//! click routing into window focus or a new window.

use std::sync::Arc;

use cache_storage::CacheStorage;
use notifications::{NotificationAction, NotificationCenter, ACTION_CLOSE, ACTION_OPEN};
use worker_runtime::{
    ClickOutcome, MemoryNetwork, NotificationClickEvent, OfflineWorker, PushEvent, WindowClients,
    WorkerConfig, WorkerHost,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

struct TestBed {
    center: Arc<NotificationCenter>,
    clients: Arc<WindowClients>,
    host: WorkerHost,
}

async fn activated_testbed() -> TestBed {
    init_logging();
    let config = WorkerConfig::default();
    let network = Arc::new(MemoryNetwork::new());
    for url in &config.precache_manifest {
        network.route_ok(url, "asset");
    }
    let center = Arc::new(NotificationCenter::new());
    let clients = Arc::new(WindowClients::new());
    let worker = OfflineWorker::new(
        config,
        Arc::new(CacheStorage::new()),
        network,
        center.clone(),
        clients.clone(),
    );
    let host = WorkerHost::new(Arc::new(worker));
    host.install().await.expect("install should succeed");
    host.activate().await.expect("activate should succeed");
    TestBed {
        center,
        clients,
        host,
    }
}

#[tokio::test]
async fn test_json_payload_drives_the_notification() {
    let bed = activated_testbed().await;

    let record = bed
        .host
        .handle_push(PushEvent::with_text(
            r#"{"title":"New match!","body":"Alex liked your profile","url":"/matches/42","icon":"/img/alex.png"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(record.title, "New match!");
    assert_eq!(record.options.body, "Alex liked your profile");
    assert_eq!(record.options.icon, "/img/alex.png");
    assert_eq!(record.options.data.url, "/matches/42");
    assert_eq!(bed.center.displayed().len(), 1);
}

#[tokio::test]
async fn test_presentation_contract_is_fixed() {
    let bed = activated_testbed().await;

    let record = bed
        .host
        .handle_push(PushEvent::with_text(r#"{"title":"Hi"}"#))
        .await
        .unwrap();

    assert_eq!(record.options.badge, "/images/icons/icon-96x96.png");
    assert_eq!(record.options.vibrate, vec![100, 50, 100]);
    assert_eq!(
        record.options.actions,
        vec![
            NotificationAction::new(ACTION_OPEN, "View Now"),
            NotificationAction::new(ACTION_CLOSE, "Close"),
        ]
    );
    assert!(record.options.data.timestamp > 0);
}

#[tokio::test]
async fn test_plain_text_push_becomes_the_body() {
    let bed = activated_testbed().await;

    let record = bed
        .host
        .handle_push(PushEvent::with_text("Hello"))
        .await
        .unwrap();

    assert_eq!(record.title, "Campus Cupid");
    assert_eq!(record.options.body, "Hello");
    assert_eq!(record.options.data.url, "/");
    assert_eq!(record.options.icon, "/images/icons/icon-192x192.png");
}

#[tokio::test]
async fn test_payload_free_push_uses_every_default() {
    let bed = activated_testbed().await;

    let record = bed.host.handle_push(PushEvent::empty()).await.unwrap();

    assert_eq!(record.title, "Campus Cupid");
    assert_eq!(record.options.body, "You have a new notification!");
    assert_eq!(record.options.data.url, "/");
}

#[tokio::test]
async fn test_close_action_only_closes() {
    let bed = activated_testbed().await;
    bed.clients.spawn("/");
    let record = bed
        .host
        .handle_push(PushEvent::with_text(r#"{"url":"/matches"}"#))
        .await
        .unwrap();

    let outcome = bed
        .host
        .handle_notification_click(NotificationClickEvent::with_action(
            record.clone(),
            ACTION_CLOSE,
        ))
        .await
        .unwrap();

    assert_eq!(outcome, ClickOutcome::Dismissed);
    assert!(bed.center.is_closed(record.id));
    assert_eq!(bed.clients.match_all(true).len(), 1);
    assert!(!bed.clients.match_all(true)[0].focused);
}

#[tokio::test]
async fn test_open_action_focuses_the_matching_window() {
    let bed = activated_testbed().await;
    bed.clients.spawn("/");
    let matching = bed.clients.spawn("/matches");
    let record = bed
        .host
        .handle_push(PushEvent::with_text(r#"{"url":"/matches"}"#))
        .await
        .unwrap();

    let outcome = bed
        .host
        .handle_notification_click(NotificationClickEvent::with_action(record.clone(), ACTION_OPEN))
        .await
        .unwrap();

    assert_eq!(outcome, ClickOutcome::Focused(matching.id));
    assert!(bed.center.is_closed(record.id));
    assert!(bed.clients.get(matching.id).unwrap().focused);
    // No extra window appeared.
    assert_eq!(bed.clients.match_all(true).len(), 2);
}

#[tokio::test]
async fn test_uncontrolled_window_still_matches() {
    let bed = activated_testbed().await;
    // Spawned after activation, so never claimed.
    let fresh = bed.clients.spawn("/matches");
    assert!(!bed.clients.get(fresh.id).unwrap().controlled);

    let record = bed
        .host
        .handle_push(PushEvent::with_text(r#"{"url":"/matches"}"#))
        .await
        .unwrap();
    let outcome = bed
        .host
        .handle_notification_click(NotificationClickEvent::body_click(record))
        .await
        .unwrap();

    assert_eq!(outcome, ClickOutcome::Focused(fresh.id));
}

#[tokio::test]
async fn test_no_matching_window_opens_one() {
    let bed = activated_testbed().await;
    bed.clients.spawn("/profile");
    let record = bed
        .host
        .handle_push(PushEvent::with_text(r#"{"url":"/matches"}"#))
        .await
        .unwrap();

    let outcome = bed
        .host
        .handle_notification_click(NotificationClickEvent::body_click(record))
        .await
        .unwrap();

    let opened = match outcome {
        ClickOutcome::Opened(id) => bed.clients.get(id).unwrap(),
        other => panic!("expected Opened, got {other:?}"),
    };
    assert_eq!(opened.url, "/matches");
    assert!(opened.focused);
    assert_eq!(bed.clients.match_all(true).len(), 2);
}

#[tokio::test]
async fn test_default_url_click_goes_home() {
    let bed = activated_testbed().await;
    let record = bed.host.handle_push(PushEvent::with_text("Hello")).await.unwrap();

    let outcome = bed
        .host
        .handle_notification_click(NotificationClickEvent::body_click(record))
        .await
        .unwrap();

    let opened = match outcome {
        ClickOutcome::Opened(id) => bed.clients.get(id).unwrap(),
        other => panic!("expected Opened, got {other:?}"),
    };
    assert_eq!(opened.url, "/");
}

#[tokio::test]
async fn test_each_push_gets_its_own_notification() {
    let bed = activated_testbed().await;

    let first = bed.host.handle_push(PushEvent::with_text("one")).await.unwrap();
    let second = bed.host.handle_push(PushEvent::with_text("two")).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(bed.center.displayed().len(), 2);

    bed.host
        .handle_notification_click(NotificationClickEvent::with_action(first, ACTION_CLOSE))
        .await
        .unwrap();
    assert_eq!(bed.center.displayed().len(), 1);
    assert_eq!(bed.center.displayed()[0].id, second.id);
}
