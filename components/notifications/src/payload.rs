//! Push payload wire format

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fields carried by a push payload, before defaults are applied
///
/// The wire format is UTF-8 text, optionally a JSON object with any
/// subset of these fields. Parsing never fails: text that is not a JSON
/// object simply leaves fields unset, and text that is not JSON at all
/// becomes the body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushPayload {
    pub title: Option<String>,
    pub body: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
}

impl PushPayload {
    /// Decodes payload text.
    ///
    /// Valid JSON is probed field by field, so a JSON scalar or array
    /// yields an empty payload rather than a body. Empty string fields
    /// count as unset. Only text that fails to parse as JSON is taken
    /// verbatim as the body.
    pub fn parse(text: &str) -> PushPayload {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => PushPayload {
                title: string_field(&value, "title"),
                body: string_field(&value, "body"),
                url: string_field(&value, "url"),
                icon: string_field(&value, "icon"),
            },
            Err(_) => {
                log::debug!("push payload is not JSON, using raw text as body");
                PushPayload {
                    body: Some(text.to_string()),
                    ..PushPayload::default()
                }
            }
        }
    }
}

fn string_field(value: &Value, name: &str) -> Option<String> {
    value
        .get(name)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
