use crate::grid::{ColumnDef, GridPreferences, SortConfig, ViewMode, storage_key};

use ua_config::GridConfig;

use std::time::Duration;

pub const DEFAULT_ENTITY_NAME: &str = "Itens";
pub const DEFAULT_ROWS_PER_PAGE_OPTIONS: [usize; 5] = [5, 10, 25, 50, 100];
pub const DEFAULT_ROWS_PER_PAGE: usize = 10;
pub const DEFAULT_SORT_FIELD: &str = "id";
pub const ACTIONS_COLUMN_ID: &str = "actions";
/// Card layout floor
pub const DEFAULT_MIN_CARD_WIDTH: u32 = 350;

/// Caller-supplied grid configuration. Fixed for the life of a grid.
#[derive(Debug, Clone)]
pub struct GridOptions {
    pub entity_name: String,
    /// Preference key; falls back to `entity_name`
    pub config_key: Option<String>,
    pub columns: Vec<ColumnDef>,
    pub rows_per_page_options: Vec<usize>,
    pub default_rows_per_page: usize,
    pub default_sort: SortConfig,
    pub default_grouping: Option<String>,
    pub default_view_mode: ViewMode,
    /// Columns that cannot be hidden
    pub always_visible: Vec<String>,
    /// Static query parameters appended to every search request
    pub extra_params: Vec<(String, String)>,
    pub debounce: Duration,
    pub resize_debounce: Duration,
    pub min_card_width: u32,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            entity_name: String::from(DEFAULT_ENTITY_NAME),
            config_key: None,
            columns: Vec::new(),
            rows_per_page_options: DEFAULT_ROWS_PER_PAGE_OPTIONS.to_vec(),
            default_rows_per_page: DEFAULT_ROWS_PER_PAGE,
            default_sort: SortConfig::asc(DEFAULT_SORT_FIELD),
            default_grouping: None,
            default_view_mode: ViewMode::Grid,
            always_visible: vec![String::from(ACTIONS_COLUMN_ID)],
            extra_params: Vec::new(),
            debounce: Duration::from_millis(500),
            resize_debounce: Duration::from_millis(150),
            min_card_width: DEFAULT_MIN_CARD_WIDTH,
        }
    }
}

impl GridOptions {
    pub fn new(entity_name: impl Into<String>, columns: Vec<ColumnDef>) -> Self {
        Self {
            entity_name: entity_name.into(),
            columns,
            ..Self::default()
        }
    }

    /// Applies the `[grid]` config section. A configured page size that is
    /// not among the options is added to them.
    pub fn with_config(mut self, config: &GridConfig) -> Self {
        self.debounce = Duration::from_millis(config.debounce_ms);
        self.resize_debounce = Duration::from_millis(config.resize_debounce_ms);
        self.min_card_width = config.min_card_width_px;
        self.default_rows_per_page = config.rows_per_page;
        if !self.rows_per_page_options.contains(&config.rows_per_page) {
            self.rows_per_page_options.push(config.rows_per_page);
            self.rows_per_page_options.sort_unstable();
        }
        self
    }

    pub fn storage_key(&self) -> String {
        storage_key(self.config_key.as_deref(), &self.entity_name)
    }

    pub fn column(&self, id: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn is_always_visible(&self, id: &str) -> bool {
        self.always_visible.iter().any(|v| v == id)
    }

    pub fn is_sortable(&self, id: &str) -> bool {
        self.column(id).is_some_and(|c| c.sortable)
    }

    pub fn is_groupable(&self, id: &str) -> bool {
        self.column(id).is_some_and(|c| c.groupable)
    }

    pub fn all_column_ids(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.id.clone()).collect()
    }

    /// Keeps known ids in column order and adds the always-visible ones.
    pub fn normalize_visible(&self, ids: &[String]) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| ids.contains(&c.id) || self.is_always_visible(&c.id))
            .map(|c| c.id.clone())
            .collect()
    }

    pub fn visible_columns(&self, ids: &[String]) -> Vec<&ColumnDef> {
        self.columns
            .iter()
            .filter(|c| ids.contains(&c.id) || self.is_always_visible(&c.id))
            .collect()
    }

    pub fn default_preferences(&self) -> GridPreferences {
        let grouping_field = match self.default_view_mode {
            ViewMode::Grid => self
                .default_grouping
                .clone()
                .filter(|g| self.is_groupable(g))
                .unwrap_or_default(),
            ViewMode::Card => String::new(),
        };

        GridPreferences {
            sort_config: self.default_sort.clone(),
            rows_per_page: self.default_rows_per_page,
            grouping_field,
            visible_column_ids: self.all_column_ids(),
            view_mode: self.default_view_mode,
        }
    }
}
