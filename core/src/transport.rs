//! Network round-trips for `JadxClient`.
//!
//! The health check blocks on a `ureq` agent and `fetch` awaits a `reqwest`
//! client. Both are created for a single call and dropped before it returns,
//! so nothing is pooled across calls.

use crate::client::JadxClient;
use crate::error::BridgeError;
use crate::http::{HttpRequest, HttpResponse};
use crate::response::PluginResponse;

impl JadxClient {
    /// Probe `{base_url}/health` and return its body as text.
    ///
    /// Blocks the calling thread for up to the request timeout. Failures come
    /// back as `PluginResponse::Error`.
    pub fn health_check(&self) -> PluginResponse {
        let req = self.build_health_request();
        tracing::info!("Attempting to connect to {}", req.url);

        let result = match execute_blocking(&req) {
            Ok(response) => self.parse_health_response(response),
            Err(err) => err.into(),
        };
        if let Some(message) = result.error_message() {
            tracing::error!("Health check failed: {message}");
        }
        result
    }

    /// GET `{base_url}/{endpoint}` with `params` as the query string.
    ///
    /// JSON bodies come back as `Structured`, anything else as `Text`.
    /// Failures come back as `PluginResponse::Error`.
    pub async fn fetch(&self, endpoint: &str, params: &[(&str, &str)]) -> PluginResponse {
        let req = self.build_fetch_request(endpoint, params);
        tracing::debug!(url = %req.url, params = req.query.len(), "fetching from plugin");

        let result = match execute_async(&req).await {
            Ok(response) => self.parse_fetch_response(response),
            Err(err) => err.into(),
        };
        if let Some(message) = result.error_message() {
            tracing::error!("{message}");
        }
        result
    }
}

fn execute_blocking(req: &HttpRequest) -> Result<HttpResponse, BridgeError> {
    // Status codes, redirects included, are classified by the client, not by ureq.
    let agent = ureq::Agent::config_builder()
        .timeout_global(Some(req.timeout))
        .http_status_as_error(false)
        .max_redirects(0)
        .build()
        .new_agent();

    let mut call = agent.get(req.url.as_str());
    for (key, value) in &req.query {
        call = call.query(key.as_str(), value.as_str());
    }
    for (name, value) in &req.headers {
        call = call.header(name.as_str(), value.as_str());
    }

    let mut response = call.call().map_err(transport_error)?;
    let status = response.status().as_u16();
    let bytes = response
        .body_mut()
        .with_config()
        .limit(u64::MAX)
        .read_to_vec()
        .map_err(transport_error)?;
    let body = String::from_utf8_lossy(&bytes).into_owned();

    Ok(HttpResponse { status, body })
}

async fn execute_async(req: &HttpRequest) -> Result<HttpResponse, BridgeError> {
    let client = reqwest::Client::builder()
        .timeout(req.timeout)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(transport_error)?;

    let mut call = client.get(&req.url).query(&req.query);
    for (name, value) in &req.headers {
        call = call.header(name.as_str(), value.as_str());
    }

    let response = call.send().await.map_err(transport_error)?;
    let status = response.status().as_u16();
    let body = response.text().await.map_err(transport_error)?;

    Ok(HttpResponse { status, body })
}

fn transport_error(err: impl std::fmt::Display) -> BridgeError {
    BridgeError::Transport(err.to_string())
}
