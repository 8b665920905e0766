use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, CepConfig, ClientConfig, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, GridConfig, LoggingConfig, ServerConfig, UploadsConfig,
    ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
    pub cep: CepConfig,
    pub uploads: UploadsConfig,
    pub grid: GridConfig,
    pub client: ClientConfig,
}

impl Config {
    /// Loading order:
    /// 1. `UA_CONFIG_DIR` env var, else `./.ua/`
    /// 2. Create the directory if it doesn't exist
    /// 3. `config.toml` if present, else defaults
    /// 4. `UA_*` environment overrides
    ///
    /// Does NOT validate; call [`Config::validate`] after loading.
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: `UA_CONFIG_DIR` env var > `./.ua/` (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.logging.validate()?;
        self.validation.validate()?;
        self.cep.validate()?;
        self.uploads.validate()?;
        self.grid.validate()?;
        self.client.validate()?;
        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// `Some(<config_dir>/<logging.dir>/<file_name>)` when file logging is on.
    pub fn log_file_path(&self, file_name: &str) -> ConfigErrorResult<Option<PathBuf>> {
        if !self.logging.file {
            return Ok(None);
        }
        Ok(Some(
            Self::config_dir()?.join(&self.logging.dir).join(file_name),
        ))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (timeout {}s)",
            self.server.host, self.server.port, self.server.request_timeout_secs
        );
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  logging: {} (file: {}, colored: {})",
            *self.logging.level, self.logging.file, self.logging.colored
        );
        info!(
            "  validation: name={}, password>={}, collections<={}",
            self.validation.max_name_length,
            self.validation.min_password_length,
            self.validation.max_collection_size
        );
        info!(
            "  cep: {} (timeout {}s)",
            self.cep.base_url, self.cep.timeout_secs
        );
        info!("  uploads: {}{}", self.uploads.base_url, self.uploads.path);
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("UA_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("UA_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("UA_DATABASE_PATH", &mut self.database.path);

        // Logging
        Self::apply_env_parse("UA_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("UA_LOG_FILE", &mut self.logging.file);
        Self::apply_env_bool("UA_LOG_COLORED", &mut self.logging.colored);

        // CEP proxy
        Self::apply_env_string("UA_CEP_BASE_URL", &mut self.cep.base_url);
        Self::apply_env_parse("UA_CEP_TIMEOUT_SECS", &mut self.cep.timeout_secs);

        // Uploads
        Self::apply_env_string("UA_UPLOADS_BASE_URL", &mut self.uploads.base_url);

        // Grid
        Self::apply_env_parse("UA_GRID_DEBOUNCE_MS", &mut self.grid.debounce_ms);

        // Client
        Self::apply_env_string("UA_CLIENT_SERVER_URL", &mut self.client.server_url);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"; anything else is false.
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values leave `target` untouched.
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }
}
