use crate::cep_config::is_http_url;
use crate::{ConfigError, ConfigErrorResult, DEFAULT_CLIENT_SERVER_URL, DEFAULT_CLIENT_TIMEOUT_SECS};

use serde::Deserialize;

/// Settings for the `ua` command line client.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub server_url: String,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: String::from(DEFAULT_CLIENT_SERVER_URL),
            timeout_secs: DEFAULT_CLIENT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !is_http_url(&self.server_url) {
            return Err(ConfigError::url(format!(
                "client.server_url must start with http:// or https://, got '{}'",
                self.server_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::config("client.timeout_secs must be positive"));
        }
        Ok(())
    }
}
