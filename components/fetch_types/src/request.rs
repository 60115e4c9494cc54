//! Request side of a fetch exchange

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// HTTP request methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestMethod {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Options,
    Patch,
}

impl RequestMethod {
    /// Returns the canonical uppercase token for the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Head => "HEAD",
            RequestMethod::Post => "POST",
            RequestMethod::Put => "PUT",
            RequestMethod::Delete => "DELETE",
            RequestMethod::Options => "OPTIONS",
            RequestMethod::Patch => "PATCH",
        }
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A request as seen by the worker's fetch interception
///
/// The URL is kept verbatim. Query strings stay significant and no
/// normalization of any kind is applied.
///
/// # Examples
///
/// ```
/// use fetch_types::{FetchRequest, RequestMethod};
///
/// let request = FetchRequest::get("/index.html");
/// assert_eq!(request.method, RequestMethod::Get);
/// assert_eq!(request.url, "/index.html");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchRequest {
    pub method: RequestMethod,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<Vec<u8>>,
}

impl FetchRequest {
    /// Creates a request with the given method and URL.
    pub fn new(method: RequestMethod, url: impl Into<String>) -> Self {
        FetchRequest {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Creates a GET request, the common case for asset fetches.
    pub fn get(url: impl Into<String>) -> Self {
        FetchRequest::new(RequestMethod::Get, url)
    }

    /// Sets a header, replacing any previous value for the name.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the request body.
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }
}
