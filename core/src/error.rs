//! Error types for the plugin bridge.
//!
//! # Design
//! Only `InvalidConfiguration` ever reaches a caller as `Err`. Transport and
//! status failures are rendered through their `Display` text into
//! `PluginResponse::Error`, so the messages below are what a tool-calling
//! host ends up showing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    /// A configuration value was rejected (blank URL, unparsable port).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The request never produced an HTTP response: connection refused, DNS
    /// failure, timeout, or the client could not be built.
    #[error("Unexpected error: {0}")]
    Transport(String),

    /// The plugin answered with a non-2xx status.
    #[error("HTTP error {status}: {body}")]
    RemoteStatus { status: u16, body: String },
}
