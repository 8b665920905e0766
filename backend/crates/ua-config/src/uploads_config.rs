use crate::cep_config::is_http_url;
use crate::{ConfigError, ConfigErrorResult, DEFAULT_UPLOADS_BASE_URL, DEFAULT_UPLOADS_PATH};

use serde::Deserialize;

/// Where relative picture paths are served from.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadsConfig {
    pub base_url: String,
    pub path: String,
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_UPLOADS_BASE_URL),
            path: String::from(DEFAULT_UPLOADS_PATH),
        }
    }
}

impl UploadsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !is_http_url(&self.base_url) {
            return Err(ConfigError::url(format!(
                "uploads.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if !self.path.starts_with('/') {
            return Err(ConfigError::url(format!(
                "uploads.path must start with '/', got '{}'",
                self.path
            )));
        }
        Ok(())
    }
}
