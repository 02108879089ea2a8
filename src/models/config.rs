//! Configuration model loaded from external sources.

use std::time::Duration;

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings of the console server and its backend connection.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    /// Base URL of the marketplace REST API.
    pub api_url: String,
    /// Prefix of static asset URLs in templates.
    pub assets_url: String,
    pub templates_dir: String,
    /// Signing key of the flash message cookie, at least 64 bytes.
    pub secret: String,
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_cache_ttl_secs() -> u64 {
    30
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl ServerConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeouts_default_when_missing() {
        let config: ServerConfig = serde_json::from_value(serde_json::json!({
            "domain": "localhost",
            "address": "127.0.0.1",
            "port": 8080,
            "api_url": "http://localhost:4000/api/v1/",
            "assets_url": "/assets",
            "templates_dir": "templates/**/*",
            "secret": "x",
        }))
        .unwrap();

        assert_eq!(config.cache_ttl(), Duration::from_secs(30));
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }
}
