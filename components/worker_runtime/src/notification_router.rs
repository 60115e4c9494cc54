//! Push-to-notification pipeline and click routing

use std::sync::Arc;

use notifications::{
    default_actions, NotificationCenter, NotificationData, NotificationOptions,
    NotificationRecord, PushPayload, ACTION_CLOSE,
};

use crate::clients::WindowClients;
use crate::config::WorkerConfig;
use crate::error::WorkerResult;
use crate::events::{ClickOutcome, NotificationClickEvent, PushEvent};

/// Turns push messages into notifications and clicks into navigation.
pub struct NotificationRouter {
    config: WorkerConfig,
    center: Arc<NotificationCenter>,
    clients: Arc<WindowClients>,
}

impl NotificationRouter {
    pub fn new(
        config: WorkerConfig,
        center: Arc<NotificationCenter>,
        clients: Arc<WindowClients>,
    ) -> Self {
        NotificationRouter {
            config,
            center,
            clients,
        }
    }

    /// Displays the notification for a push message.
    ///
    /// Missing payload fields fall back to the configured defaults; the
    /// badge, vibration pattern and action buttons are fixed.
    pub fn push(&self, event: PushEvent) -> WorkerResult<NotificationRecord> {
        let payload = match &event.data {
            Some(data) => PushPayload::parse(&data.text()),
            None => PushPayload::default(),
        };

        let title = payload
            .title
            .unwrap_or_else(|| self.config.default_title.clone());
        let body = payload
            .body
            .unwrap_or_else(|| self.config.default_body.clone());
        let url = payload
            .url
            .unwrap_or_else(|| self.config.default_url.clone());
        let icon = payload
            .icon
            .unwrap_or_else(|| self.config.default_icon.clone());

        let options = NotificationOptions {
            body,
            icon,
            badge: self.config.badge.clone(),
            vibrate: self.config.vibration.clone(),
            data: NotificationData::new(url),
            actions: default_actions(),
        };

        log::info!("push received, displaying \"{title}\"");
        let record = self.center.show(title, options)?;
        Ok(record)
    }

    /// Routes a notification click.
    ///
    /// The notification is closed before anything else. The close action
    /// stops there; any other click focuses the first window whose URL
    /// equals the stored target, or opens a new one.
    pub fn click(&self, event: NotificationClickEvent) -> WorkerResult<ClickOutcome> {
        self.center.close(event.notification.id);

        if event.action.as_deref() == Some(ACTION_CLOSE) {
            log::debug!("{} dismissed", event.notification.id);
            return Ok(ClickOutcome::Dismissed);
        }

        let target = &event.notification.options.data.url;
        let windows = self.clients.match_all(true);
        if let Some(window) = windows.iter().find(|c| c.url == *target) {
            let focused = self.clients.focus(window.id)?;
            log::debug!("focused {} at {target}", focused.id);
            return Ok(ClickOutcome::Focused(focused.id));
        }

        let opened = self.clients.open_window(target.as_str())?;
        log::debug!("opened {} at {target}", opened.id);
        Ok(ClickOutcome::Opened(opened.id))
    }
}
