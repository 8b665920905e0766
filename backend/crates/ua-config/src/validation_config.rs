use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_NAME_LENGTH: usize = 1;
pub const MAX_NAME_LENGTH: usize = 1000;
pub const DEFAULT_MAX_NAME_LENGTH: usize = 200;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 128;
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

pub const MIN_COLLECTION_SIZE: usize = 1;
pub const MAX_COLLECTION_SIZE: usize = 100;
pub const DEFAULT_MAX_COLLECTION_SIZE: usize = 20;

/// Limits applied to user submissions before they reach the database.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub max_name_length: usize,
    /// Only enforced when a password is created
    pub min_password_length: usize,
    /// Upper bound for e-mails, telephones and addresses, each
    pub max_collection_size: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            max_collection_size: DEFAULT_MAX_COLLECTION_SIZE,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_name_length < MIN_NAME_LENGTH || self.max_name_length > MAX_NAME_LENGTH {
            return Err(ConfigError::config(format!(
                "validation.max_name_length must be {}-{}, got {}",
                MIN_NAME_LENGTH, MAX_NAME_LENGTH, self.max_name_length
            )));
        }

        if self.min_password_length < MIN_PASSWORD_LENGTH
            || self.min_password_length > MAX_PASSWORD_LENGTH
        {
            return Err(ConfigError::config(format!(
                "validation.min_password_length must be {}-{}, got {}",
                MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH, self.min_password_length
            )));
        }

        if self.max_collection_size < MIN_COLLECTION_SIZE
            || self.max_collection_size > MAX_COLLECTION_SIZE
        {
            return Err(ConfigError::config(format!(
                "validation.max_collection_size must be {}-{}, got {}",
                MIN_COLLECTION_SIZE, MAX_COLLECTION_SIZE, self.max_collection_size
            )));
        }

        Ok(())
    }
}
