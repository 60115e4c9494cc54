//! Deployment configuration

use serde::{Deserialize, Serialize};

/// Everything deployment-specific about the worker, injected at
/// construction
///
/// `Default` carries the Campus Cupid production values. Nothing is read
/// from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Name of the one cache bucket this worker generation owns. The
    /// deployment version is encoded here and nowhere else.
    pub cache_name: String,
    /// Assets fetched and cached at install time.
    pub precache_manifest: Vec<String>,
    /// Notification title when the push payload has none.
    pub default_title: String,
    /// Notification body when the push payload has none.
    pub default_body: String,
    /// Click target when the push payload has none.
    pub default_url: String,
    /// Notification icon when the push payload has none.
    pub default_icon: String,
    /// Badge shown on every notification.
    pub badge: String,
    /// Vibration pattern in milliseconds, applied to every notification.
    pub vibration: Vec<u32>,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        WorkerConfig {
            cache_name: "campus-cupid-cache-v3".to_string(),
            precache_manifest: vec![
                "/".to_string(),
                "/index.html".to_string(),
                "https://unpkg.com/@supabase/supabase-js@2".to_string(),
                "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css"
                    .to_string(),
                "/manifest.json".to_string(),
            ],
            default_title: "Campus Cupid".to_string(),
            default_body: "You have a new notification!".to_string(),
            default_url: "/".to_string(),
            default_icon: "/images/icons/icon-192x192.png".to_string(),
            badge: "/images/icons/icon-96x96.png".to_string(),
            vibration: vec![100, 50, 100],
        }
    }
}
