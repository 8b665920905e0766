use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 150;
pub const DEFAULT_ROWS_PER_PAGE: usize = 10;
pub const DEFAULT_MIN_CARD_WIDTH_PX: u32 = 350;

pub const MAX_DEBOUNCE_MS: u64 = 10_000;
pub const MAX_ROWS_PER_PAGE: usize = 1000;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Delay between the last page/sort/search change and the fetch
    pub debounce_ms: u64,
    pub resize_debounce_ms: u64,
    pub rows_per_page: usize,
    pub min_card_width_px: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            min_card_width_px: DEFAULT_MIN_CARD_WIDTH_PX,
        }
    }
}

impl GridConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.debounce_ms > MAX_DEBOUNCE_MS || self.resize_debounce_ms > MAX_DEBOUNCE_MS {
            return Err(ConfigError::config(format!(
                "grid.debounce_ms and grid.resize_debounce_ms must be 0-{}, got {}/{}",
                MAX_DEBOUNCE_MS, self.debounce_ms, self.resize_debounce_ms
            )));
        }

        if self.rows_per_page == 0 || self.rows_per_page > MAX_ROWS_PER_PAGE {
            return Err(ConfigError::config(format!(
                "grid.rows_per_page must be 1-{}, got {}",
                MAX_ROWS_PER_PAGE, self.rows_per_page
            )));
        }

        if self.min_card_width_px == 0 {
            return Err(ConfigError::config("grid.min_card_width_px must be positive"));
        }

        Ok(())
    }
}
