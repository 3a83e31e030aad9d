//! HTTP bridge to a running JADX decompiler plugin.
//!
//! # Overview
//! Holds the connection settings for the plugin (base URL, optional bearer
//! token), probes its `/health` endpoint and forwards GET requests to any
//! named endpoint. Every network failure is folded into a
//! [`PluginResponse::Error`] value so a tool-calling host can hand the result
//! straight back to its caller.
//!
//! # Design
//! - `ConnectionConfig` is an explicit value owned by the embedding
//!   application, never process-wide state.
//! - `JadxClient` splits each operation into `build_*` (produces an
//!   `HttpRequest`) and `parse_*` (classifies an `HttpResponse`), so the
//!   request shape and the response classification are testable without a
//!   network.
//! - `health_check` and `fetch` execute that round-trip. Each call opens its
//!   own HTTP client and drops it before returning.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod response;
mod transport;

pub use client::{JadxClient, REQUEST_TIMEOUT};
pub use config::{ConnectionConfig, DEFAULT_PORT};
pub use error::BridgeError;
pub use http::{HttpRequest, HttpResponse};
pub use response::PluginResponse;
