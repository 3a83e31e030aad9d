//! HTTP transport types for the build/parse split.
//!
//! # Design
//! Requests and responses are plain data. `JadxClient` builds `HttpRequest`
//! values and classifies `HttpResponse` values; only the transport module
//! touches the network. All fields are owned so a request can be moved into
//! a blocking or async executor without lifetime concerns.

use std::time::Duration;

/// A GET request described as plain data.
///
/// The plugin surface is read-only, so there is no method field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
}

/// Status and body of a completed round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
