//! Window clients under the worker's scope

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static NEXT_CLIENT_ID: AtomicU64 = AtomicU64::new(1);

/// Identifier for a window client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub u64);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "client#{}", self.0)
    }
}

/// An open window under the worker's scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: ClientId,
    /// The window's current URL, verbatim.
    pub url: String,
    /// Whether this worker controls the window.
    pub controlled: bool,
    pub focused: bool,
}

/// Errors surfaced by window operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The window no longer exists.
    #[error("window client not found: {0}")]
    NotFound(ClientId),

    /// The host refused to open a new window.
    #[error("window open blocked for {0}")]
    OpenBlocked(String),
}

/// In-memory registry of the windows open under the worker's scope
///
/// At most one window is focused at a time. Newly spawned windows start
/// uncontrolled, the way a page loaded before the worker activates is.
#[derive(Default)]
pub struct WindowClients {
    clients: RwLock<Vec<Client>>,
    popup_blocked: AtomicBool,
}

impl WindowClients {
    pub fn new() -> Self {
        WindowClients::default()
    }

    /// Adds an uncontrolled, unfocused window at the given URL.
    pub fn spawn(&self, url: impl Into<String>) -> Client {
        let client = Client {
            id: ClientId(NEXT_CLIENT_ID.fetch_add(1, Ordering::SeqCst)),
            url: url.into(),
            controlled: false,
            focused: false,
        };
        self.clients.write().push(client.clone());
        client
    }

    /// Looks a window up by id.
    pub fn get(&self, id: ClientId) -> Option<Client> {
        self.clients.read().iter().find(|c| c.id == id).cloned()
    }

    /// Lists windows in open order. Uncontrolled windows are included
    /// only when asked for.
    pub fn match_all(&self, include_uncontrolled: bool) -> Vec<Client> {
        self.clients
            .read()
            .iter()
            .filter(|c| include_uncontrolled || c.controlled)
            .cloned()
            .collect()
    }

    /// Focuses the window, unfocusing every other one.
    pub fn focus(&self, id: ClientId) -> Result<Client, ClientError> {
        let mut clients = self.clients.write();
        let position = clients
            .iter()
            .position(|c| c.id == id)
            .ok_or(ClientError::NotFound(id))?;
        for client in clients.iter_mut() {
            client.focused = false;
        }
        clients[position].focused = true;
        Ok(clients[position].clone())
    }

    /// Opens a new window at the URL. The new window starts focused and
    /// controlled by this worker.
    pub fn open_window(&self, url: impl Into<String>) -> Result<Client, ClientError> {
        let url = url.into();
        if self.popup_blocked.load(Ordering::SeqCst) {
            return Err(ClientError::OpenBlocked(url));
        }
        let mut clients = self.clients.write();
        for client in clients.iter_mut() {
            client.focused = false;
        }
        let client = Client {
            id: ClientId(NEXT_CLIENT_ID.fetch_add(1, Ordering::SeqCst)),
            url,
            controlled: true,
            focused: true,
        };
        clients.push(client.clone());
        Ok(client)
    }

    /// Marks every window controlled by this worker. Returns how many.
    pub fn claim(&self) -> usize {
        let mut clients = self.clients.write();
        for client in clients.iter_mut() {
            client.controlled = true;
        }
        clients.len()
    }

    /// Drops a window, as when the user closes the tab. Returns whether
    /// it existed.
    pub fn remove(&self, id: ClientId) -> bool {
        let mut clients = self.clients.write();
        let before = clients.len();
        clients.retain(|c| c.id != id);
        clients.len() < before
    }

    /// Makes `open_window` fail, as under a popup blocker.
    pub fn set_popup_blocked(&self, blocked: bool) {
        self.popup_blocked.store(blocked, Ordering::SeqCst);
    }
}
