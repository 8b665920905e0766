mod cep_config;
mod client_config;
mod config;
mod database_config;
mod error;
mod grid_config;
mod log_level;
mod logging_config;
mod server_config;
mod uploads_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use cep_config::CepConfig;
pub use client_config::ClientConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use grid_config::GridConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use uploads_config::UploadsConfig;
pub use validation_config::ValidationConfig;

pub const CONFIG_DIR_ENV: &str = "UA_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".ua";
pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

const DEFAULT_DATABASE_FILENAME: &str = "user-admin.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_CEP_BASE_URL: &str = "https://viacep.com.br/ws";
const DEFAULT_CEP_TIMEOUT_SECS: u64 = 5;

const DEFAULT_UPLOADS_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_UPLOADS_PATH: &str = "/uploads";

const DEFAULT_CLIENT_SERVER_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_CLIENT_TIMEOUT_SECS: u64 = 30;
