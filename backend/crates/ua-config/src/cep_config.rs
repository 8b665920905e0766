use crate::{ConfigError, ConfigErrorResult, DEFAULT_CEP_BASE_URL, DEFAULT_CEP_TIMEOUT_SECS};

use serde::Deserialize;

pub const MAX_CEP_TIMEOUT_SECS: u64 = 60;

/// Upstream used by the CEP proxy; lookups go to `<base_url>/<cep>/json/`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CepConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for CepConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_CEP_BASE_URL),
            timeout_secs: DEFAULT_CEP_TIMEOUT_SECS,
        }
    }
}

impl CepConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !is_http_url(&self.base_url) {
            return Err(ConfigError::url(format!(
                "cep.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 || self.timeout_secs > MAX_CEP_TIMEOUT_SECS {
            return Err(ConfigError::config(format!(
                "cep.timeout_secs must be 1-{}, got {}",
                MAX_CEP_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    /// Lookup URL for an already normalized CEP.
    pub fn lookup_url(&self, cep: &str) -> String {
        format!("{}/{}/json/", self.base_url.trim_end_matches('/'), cep)
    }
}

pub(crate) fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
