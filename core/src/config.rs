//! Connection settings for the JADX plugin.
//!
//! # Design
//! The base URL is derived from the port until `set_url` overrides it; the
//! override wins until the next `set_port`. A token, when present, is
//! stored trimmed and an empty token disables the authorization header.

use crate::error::BridgeError;

/// Port the JADX plugin listens on out of the box.
pub const DEFAULT_PORT: u16 = 8650;

const LOCAL_HOST: &str = "127.0.0.1";

const ENV_PORT: &str = "JADX_PORT";
const ENV_URL: &str = "JADX_URL";
const ENV_AUTH_TOKEN: &str = "JADX_AUTH_TOKEN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    port: u16,
    base_url: String,
    auth_token: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            base_url: local_url(DEFAULT_PORT),
            auth_token: String::new(),
        }
    }
}

impl ConnectionConfig {
    /// Build a configuration from `JADX_PORT`, `JADX_URL` and
    /// `JADX_AUTH_TOKEN`, falling back to the defaults for unset variables.
    pub fn from_env() -> Result<Self, BridgeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConnectionConfig::from_env`] with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BridgeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_PORT) {
            let port = raw.trim().parse::<u16>().map_err(|e| {
                BridgeError::InvalidConfiguration(format!("{ENV_PORT}={raw:?}: {e}"))
            })?;
            config.set_port(port);
        }
        if let Some(url) = lookup(ENV_URL) {
            config.set_url(&url)?;
        }
        if let Some(token) = lookup(ENV_AUTH_TOKEN) {
            config.set_auth_token(&token);
        }

        Ok(config)
    }

    /// Point at the plugin on the local host at `port`. Discards any URL
    /// previously set with [`ConnectionConfig::set_url`].
    pub fn set_port(&mut self, port: u16) {
        self.port = port;
        self.base_url = local_url(port);
    }

    /// Override the base URL, e.g. `https://example.com/jadx`.
    ///
    /// Surrounding whitespace and trailing slashes are removed. A blank
    /// result is rejected and leaves the configuration unchanged.
    pub fn set_url(&mut self, url: &str) -> Result<(), BridgeError> {
        let normalized = url.trim().trim_end_matches('/');
        if normalized.is_empty() {
            return Err(BridgeError::InvalidConfiguration(
                "JADX URL must not be empty".to_string(),
            ));
        }
        self.base_url = normalized.to_string();
        Ok(())
    }

    pub fn set_auth_token(&mut self, token: &str) {
        self.auth_token = token.trim().to_string();
    }

    pub fn url(&self) -> &str {
        &self.base_url
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn auth_token(&self) -> Option<&str> {
        if self.auth_token.is_empty() {
            None
        } else {
            Some(&self.auth_token)
        }
    }

    /// Headers sent with every request: nothing, or a single bearer
    /// authorization entry.
    pub fn headers(&self) -> Vec<(String, String)> {
        match self.auth_token() {
            Some(token) => vec![("authorization".to_string(), format!("Bearer {token}"))],
            None => Vec::new(),
        }
    }
}

fn local_url(port: u16) -> String {
    format!("http://{LOCAL_HOST}:{port}")
}
