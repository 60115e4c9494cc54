//! Shared fetch vocabulary for the offline worker
//!
//! Models the two halves of a fetch exchange (https://fetch.spec.whatwg.org/)
//! as plain data. URLs are carried as opaque strings and never parsed or
//! normalized; bodies are byte vectors.

pub mod error;
pub mod request;
pub mod response;

// Re-export main types
pub use error::FetchError;
pub use request::{FetchRequest, RequestMethod};
pub use response::{status_text, FetchResponse};
