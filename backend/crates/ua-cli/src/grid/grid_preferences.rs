use crate::grid::{GridOptions, SortConfig, ViewMode};

use serde::{Deserialize, Serialize};
use serde_json::Value;

const STORAGE_KEY_PREFIX: &str = "dataGridConfig_";

/// `dataGridConfig_<configKey|entityName>`
pub fn storage_key(config_key: Option<&str>, entity_name: &str) -> String {
    let key = config_key
        .filter(|k| !k.trim().is_empty())
        .unwrap_or(entity_name);
    format!("{}{}", STORAGE_KEY_PREFIX, key)
}

/// Persisted layout of one grid instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPreferences {
    pub sort_config: SortConfig,
    pub rows_per_page: usize,
    /// Empty when not grouping
    #[serde(default)]
    pub grouping_field: String,
    pub visible_column_ids: Vec<String>,
    pub view_mode: ViewMode,
}

impl GridPreferences {
    pub fn grouping(&self) -> Option<&str> {
        Some(self.grouping_field.as_str()).filter(|g| !g.is_empty())
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Merges a stored blob over the defaults of `options`, field by field.
    ///
    /// Values that no longer fit the columns or options are replaced by
    /// their default, so a stale blob never breaks the grid.
    pub fn restore(stored: Option<&Value>, options: &GridOptions) -> Self {
        let defaults = options.default_preferences();
        let Some(Value::Object(blob)) = stored else {
            if stored.is_some() {
                log::warn!(
                    "Ignoring unreadable preferences for {}",
                    options.storage_key()
                );
            }
            return defaults;
        };

        let sort_config = blob
            .get("sortConfig")
            .and_then(|v| serde_json::from_value::<SortConfig>(v.clone()).ok())
            .filter(|s| options.is_sortable(&s.field))
            .unwrap_or(defaults.sort_config);

        let rows_per_page = blob
            .get("rowsPerPage")
            .and_then(Value::as_u64)
            .and_then(|n| usize::try_from(n).ok())
            .filter(|n| options.rows_per_page_options.contains(n))
            .unwrap_or(defaults.rows_per_page);

        let view_mode = blob
            .get("viewMode")
            .and_then(|v| serde_json::from_value::<ViewMode>(v.clone()).ok())
            .unwrap_or(defaults.view_mode);

        let grouping_field = match view_mode {
            ViewMode::Card => String::new(),
            ViewMode::Grid => match blob.get("groupingField").and_then(Value::as_str) {
                Some(field) if field.is_empty() || options.is_groupable(field) => {
                    String::from(field)
                }
                _ => defaults.grouping_field,
            },
        };

        let stored_visible: Vec<String> = blob
            .get("visibleColumnIds")
            .and_then(Value::as_array)
            .map(|ids| {
                ids.iter()
                    .filter_map(Value::as_str)
                    .filter(|id| options.column(id).is_some())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();
        let visible_column_ids = if stored_visible.is_empty() {
            defaults.visible_column_ids
        } else {
            options.normalize_visible(&stored_visible)
        };

        Self {
            sort_config,
            rows_per_page,
            grouping_field,
            visible_column_ids,
            view_mode,
        }
    }
}
