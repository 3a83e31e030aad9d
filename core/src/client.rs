//! Request builder and response classifier for the JADX plugin.
//!
//! # Design
//! `JadxClient` owns its `ConnectionConfig`. Every `build_*` call reads the
//! configuration at that moment, and because `fetch` borrows the client for
//! the whole round-trip, the configuration cannot change under an in-flight
//! call. Hosts that need to reconfigure while calls are running clone the
//! client per batch.

use std::time::Duration;

use serde_json::Value;

use crate::config::ConnectionConfig;
use crate::error::BridgeError;
use crate::http::{HttpRequest, HttpResponse};
use crate::response::PluginResponse;

/// Timeout applied to every plugin request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const HEALTH_ENDPOINT: &str = "health";

#[derive(Debug, Clone, Default)]
pub struct JadxClient {
    config: ConnectionConfig,
}

impl JadxClient {
    pub fn new(config: ConnectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ConnectionConfig {
        &mut self.config
    }

    /// Full URL for `endpoint`; leading slashes on the endpoint are ignored.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.url(),
            endpoint.trim_start_matches('/')
        )
    }

    pub fn build_health_request(&self) -> HttpRequest {
        self.build_get(HEALTH_ENDPOINT, Vec::new())
    }

    pub fn build_fetch_request(&self, endpoint: &str, params: &[(&str, &str)]) -> HttpRequest {
        let query = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.build_get(endpoint, query)
    }

    /// A 2xx body is returned verbatim, whatever its shape.
    pub fn parse_health_response(&self, response: HttpResponse) -> PluginResponse {
        match check_status(response) {
            Ok(body) => PluginResponse::Text(body),
            Err(err) => err.into(),
        }
    }

    /// A 2xx body is parsed as JSON, falling back to text when it is not JSON.
    pub fn parse_fetch_response(&self, response: HttpResponse) -> PluginResponse {
        match check_status(response) {
            Ok(body) => match serde_json::from_str::<Value>(&body) {
                Ok(value) => PluginResponse::Structured(value),
                Err(_) => PluginResponse::Text(body),
            },
            Err(err) => err.into(),
        }
    }

    fn build_get(&self, endpoint: &str, query: Vec<(String, String)>) -> HttpRequest {
        HttpRequest {
            url: self.endpoint_url(endpoint),
            query,
            headers: self.config.headers(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

/// Hand back the body of a 2xx response, otherwise a `RemoteStatus` error.
fn check_status(response: HttpResponse) -> Result<String, BridgeError> {
    if response.is_success() {
        return Ok(response.body);
    }
    Err(BridgeError::RemoteStatus {
        status: response.status,
        body: response.body,
    })
}
