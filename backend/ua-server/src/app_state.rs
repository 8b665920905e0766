use crate::error::{Result as ServerErrorResult, ServerError};

use ua_config::{CepConfig, Config};
use ua_core::{UserValidator, ValidationLimits};

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub validator: Arc<UserValidator>,
    pub cep: CepConfig,
    /// Outbound client for the CEP upstream, timeout from `cep.timeout_secs`
    pub http: reqwest::Client,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &Config) -> ServerErrorResult<Self> {
        let validator = UserValidator::new(ValidationLimits {
            max_name_length: config.validation.max_name_length,
            min_password_length: config.validation.min_password_length,
            max_collection_size: config.validation.max_collection_size,
        });

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.cep.timeout_secs))
            .user_agent(concat!("ua-server/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ServerError::HttpClient {
                message: e.to_string(),
            })?;

        Ok(Self {
            pool,
            validator: Arc::new(validator),
            cep: config.cep.clone(),
            http,
            request_timeout: Duration::from_secs(config.server.request_timeout_secs),
        })
    }
}
