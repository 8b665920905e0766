//! Pure grid state transitions.
//!
//! Every user action returns the [`Effects`] it requires; the caller decides
//! how to schedule the fetch and where to persist preferences. Nothing here
//! fetches or sleeps.

use crate::grid::grouping::{group_rows, plain_rows, sort_rows};
use crate::grid::{
    Breakpoint, CardLayout, GridOptions, GridPreferences, GridResult, RenderedRow, SearchParams,
    SearchResult, SortConfig, ViewMode, compute_card_layout,
};

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridPhase {
    /// Preferences not restored yet; fetches and writes are suppressed
    Uninitialized,
    ConfigLoaded,
}

/// Follow-up work requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Effects {
    pub fetch: bool,
    pub persist: bool,
}

impl Effects {
    pub const NONE: Effects = Effects {
        fetch: false,
        persist: false,
    };
    pub const FETCH: Effects = Effects {
        fetch: true,
        persist: false,
    };
    pub const PERSIST: Effects = Effects {
        fetch: false,
        persist: true,
    };
    pub const FETCH_AND_PERSIST: Effects = Effects {
        fetch: true,
        persist: true,
    };

    pub fn is_none(&self) -> bool {
        !self.fetch && !self.persist
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    Failed,
    /// A newer request was issued; the result was dropped
    Stale,
    /// Page started past the new total; page is now 0 and must be refetched
    PageReset,
}

#[derive(Debug, Clone)]
pub struct GridState {
    phase: GridPhase,
    page: usize,
    rows_per_page: usize,
    sort: SortConfig,
    grouping_field: Option<String>,
    visible_column_ids: Vec<String>,
    view_mode: ViewMode,
    search_input: String,
    active_search: Option<String>,
    rows: Vec<Value>,
    total_count: u64,
    loading: bool,
    error: Option<String>,
    generation: u64,
    viewport_width: Option<u32>,
}

impl GridState {
    /// Uninitialized state holding the caller's defaults.
    pub fn new(options: &GridOptions) -> Self {
        let defaults = options.default_preferences();
        Self {
            phase: GridPhase::Uninitialized,
            page: 0,
            rows_per_page: defaults.rows_per_page,
            sort: defaults.sort_config,
            grouping_field: None,
            visible_column_ids: defaults.visible_column_ids,
            view_mode: defaults.view_mode,
            search_input: String::new(),
            active_search: None,
            rows: Vec::new(),
            total_count: 0,
            loading: false,
            error: None,
            generation: 0,
            viewport_width: None,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn phase(&self) -> GridPhase {
        self.phase
    }

    pub fn is_config_loaded(&self) -> bool {
        self.phase == GridPhase::ConfigLoaded
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn sort(&self) -> &SortConfig {
        &self.sort
    }

    pub fn grouping_field(&self) -> Option<&str> {
        self.grouping_field.as_deref()
    }

    pub fn visible_column_ids(&self) -> &[String] {
        &self.visible_column_ids
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn active_search(&self) -> Option<&str> {
        self.active_search.as_deref()
    }

    pub fn rows(&self) -> &[Value] {
        &self.rows
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn viewport_width(&self) -> Option<u32> {
        self.viewport_width
    }

    /// Largest page whose end index still fits the server's `i64` indices.
    pub fn last_addressable_page(&self) -> usize {
        let limit = usize::try_from(i64::MAX).unwrap_or(usize::MAX);
        (limit / self.rows_per_page.max(1)).saturating_sub(1)
    }

    pub fn page_count(&self) -> usize {
        if self.rows_per_page == 0 {
            return 0;
        }
        (self.total_count as usize).div_ceil(self.rows_per_page)
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport_width
            .is_some_and(|w| Breakpoint::from_width(w).is_mobile())
    }

    /// Header clicks are ignored while the table is grouped.
    pub fn sorting_disabled(&self) -> bool {
        self.view_mode == ViewMode::Grid && self.grouping_field.is_some()
    }

    pub fn preferences(&self) -> GridPreferences {
        GridPreferences {
            sort_config: self.sort.clone(),
            rows_per_page: self.rows_per_page,
            grouping_field: self.grouping_field.clone().unwrap_or_default(),
            visible_column_ids: self.visible_column_ids.clone(),
            view_mode: self.view_mode,
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// `Uninitialized -> ConfigLoaded`, once. Later calls are ignored.
    pub fn load_config(&mut self, preferences: GridPreferences) -> Effects {
        if self.is_config_loaded() {
            log::debug!("Grid preferences already loaded, ignoring reload");
            return Effects::NONE;
        }

        self.grouping_field = preferences.grouping().map(String::from);
        self.sort = preferences.sort_config;
        self.rows_per_page = preferences.rows_per_page;
        self.visible_column_ids = preferences.visible_column_ids;
        self.view_mode = preferences.view_mode;
        if self.is_mobile() {
            self.force_card_view();
        }
        self.phase = GridPhase::ConfigLoaded;

        Effects::FETCH
    }

    /// Suppresses effects until preferences are restored.
    fn gate(&self, effects: Effects) -> Effects {
        if self.is_config_loaded() {
            effects
        } else {
            Effects::NONE
        }
    }

    /// Pages past the last addressable one are clamped to it.
    pub fn set_page(&mut self, page: usize) -> Effects {
        let page = page.min(self.last_addressable_page());
        if page == self.page {
            return Effects::NONE;
        }
        self.page = page;
        self.gate(Effects::FETCH)
    }

    /// Resets to the first page. Sizes not among the options are ignored.
    pub fn set_rows_per_page(&mut self, rows_per_page: usize, options: &GridOptions) -> Effects {
        if !options.rows_per_page_options.contains(&rows_per_page) {
            log::warn!("Ignoring unsupported page size {}", rows_per_page);
            return Effects::NONE;
        }
        if rows_per_page == self.rows_per_page && self.page == 0 {
            return Effects::NONE;
        }
        self.rows_per_page = rows_per_page;
        self.page = 0;
        self.gate(Effects::FETCH_AND_PERSIST)
    }

    pub fn set_sort(&mut self, sort: SortConfig, options: &GridOptions) -> Effects {
        if self.sorting_disabled() {
            log::debug!("Sorting disabled while grouped by {:?}", self.grouping_field);
            return Effects::NONE;
        }
        if !options.is_sortable(&sort.field) {
            log::warn!("Ignoring sort on unsortable column '{}'", sort.field);
            return Effects::NONE;
        }
        if sort == self.sort {
            return Effects::NONE;
        }
        self.sort = sort;
        self.gate(Effects::FETCH_AND_PERSIST)
    }

    /// Header click on `field`.
    pub fn toggle_sort(&mut self, field: &str, options: &GridOptions) -> Effects {
        let next = self.sort.toggle(field);
        self.set_sort(next, options)
    }

    /// Typing only; see [`GridState::commit_search`].
    pub fn set_search_input(&mut self, text: impl Into<String>) -> Effects {
        self.search_input = text.into();
        Effects::NONE
    }

    /// Makes the trimmed input the active term and returns to the first page.
    pub fn commit_search(&mut self) -> Effects {
        let term = Some(self.search_input.trim())
            .filter(|t| !t.is_empty())
            .map(String::from);
        if term == self.active_search {
            return Effects::NONE;
        }
        self.active_search = term;
        self.page = 0;
        self.gate(Effects::FETCH)
    }

    /// Table view only; unknown or ungroupable fields are ignored.
    pub fn set_grouping(&mut self, field: Option<&str>, options: &GridOptions) -> Effects {
        if self.view_mode == ViewMode::Card {
            log::debug!("Grouping is only available in the table view");
            return Effects::NONE;
        }
        let field = field.filter(|f| !f.is_empty());
        if let Some(f) = field
            && !options.is_groupable(f)
        {
            log::warn!("Ignoring grouping by unknown column '{}'", f);
            return Effects::NONE;
        }
        if field == self.grouping_field.as_deref() {
            return Effects::NONE;
        }
        self.grouping_field = field.map(String::from);
        self.gate(Effects::FETCH_AND_PERSIST)
    }

    /// Switching to cards clears grouping. Mobile viewports stay on cards.
    pub fn set_view_mode(&mut self, mode: ViewMode) -> Effects {
        if mode == self.view_mode {
            return Effects::NONE;
        }
        if mode == ViewMode::Grid && self.is_mobile() {
            log::debug!("Table view unavailable on mobile viewports");
            return Effects::NONE;
        }
        let regrouped = mode == ViewMode::Card && self.grouping_field.is_some();
        self.view_mode = mode;
        if mode == ViewMode::Card {
            self.grouping_field = None;
        }
        self.gate(Effects {
            fetch: regrouped,
            persist: true,
        })
    }

    fn force_card_view(&mut self) -> bool {
        if self.view_mode == ViewMode::Card {
            return false;
        }
        self.view_mode = ViewMode::Card;
        self.grouping_field.take().is_some()
    }

    /// Hides or shows a column. Always-visible and unknown ids are ignored.
    pub fn toggle_column(&mut self, id: &str, options: &GridOptions) -> Effects {
        if options.is_always_visible(id) || options.column(id).is_none() {
            return Effects::NONE;
        }
        let mut ids = self.visible_column_ids.clone();
        if let Some(pos) = ids.iter().position(|v| v == id) {
            ids.remove(pos);
        } else {
            ids.push(id.to_string());
        }
        self.visible_column_ids = options.normalize_visible(&ids);
        self.gate(Effects::PERSIST)
    }

    /// A mobile width forces the card view.
    pub fn set_viewport_width(&mut self, width: u32) -> Effects {
        self.viewport_width = Some(width);
        if !self.is_mobile() {
            return Effects::NONE;
        }
        if self.view_mode == ViewMode::Card {
            return Effects::NONE;
        }
        let regrouped = self.force_card_view();
        self.gate(Effects {
            fetch: regrouped,
            persist: true,
        })
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    // =========================================================================
    // Fetch lifecycle
    // =========================================================================

    pub fn search_params(&self, options: &GridOptions) -> SearchParams {
        let mut params = SearchParams::for_page(self.page, self.rows_per_page);
        params.sort = self.sort.field.clone();
        params.order = self.sort.direction;
        params.group = match self.view_mode {
            ViewMode::Grid => self.grouping_field.clone(),
            ViewMode::Card => None,
        };
        params.search = self.active_search.clone();
        params.extra = options.extra_params.clone();
        params
    }

    /// Issues a new request generation; `None` before preferences are loaded.
    pub fn begin_fetch(&mut self, options: &GridOptions) -> Option<(u64, SearchParams)> {
        if !self.is_config_loaded() {
            return None;
        }
        self.generation += 1;
        self.loading = true;
        self.error = None;
        Some((self.generation, self.search_params(options)))
    }

    /// Applies a response unless a newer request has been issued since.
    pub fn finish_fetch(
        &mut self,
        generation: u64,
        result: GridResult<SearchResult>,
    ) -> FetchOutcome {
        if generation != self.generation {
            log::debug!(
                "Discarding stale response {} (current {})",
                generation,
                self.generation
            );
            return FetchOutcome::Stale;
        }

        match result {
            Ok(result) => {
                let start_index = self.page.saturating_mul(self.rows_per_page);
                if self.page > 0 && start_index as u64 >= result.total_count {
                    log::debug!(
                        "Page {} starts past {} rows, returning to the first page",
                        self.page,
                        result.total_count
                    );
                    self.page = 0;
                    return FetchOutcome::PageReset;
                }

                self.rows = result.rows;
                self.total_count = result.total_count;
                self.loading = false;
                FetchOutcome::Applied
            }
            Err(e) => {
                log::warn!("Grid fetch failed: {}", e);
                self.rows.clear();
                self.total_count = 0;
                self.error = Some(e.user_message().to_string());
                self.loading = false;
                FetchOutcome::Failed
            }
        }
    }

    /// Loading always ends for the current generation, whatever happened.
    pub fn end_fetch(&mut self, generation: u64) {
        if generation == self.generation {
            self.loading = false;
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Table rows with group headers, or client-sorted rows for cards.
    pub fn rendered_rows(&self, options: &GridOptions) -> Vec<RenderedRow> {
        let sort_column = options.column(&self.sort.field);
        match self.view_mode {
            ViewMode::Grid => match self
                .grouping_field
                .as_deref()
                .and_then(|g| options.column(g))
            {
                Some(group_column) => {
                    group_rows(&self.rows, group_column, sort_column, &self.sort)
                }
                None => plain_rows(&self.rows),
            },
            ViewMode::Card => {
                let mut rows = self.rows.clone();
                sort_rows(&mut rows, sort_column, &self.sort);
                plain_rows(&rows)
            }
        }
    }

    pub fn card_layout(&self, options: &GridOptions) -> Option<CardLayout> {
        if self.view_mode != ViewMode::Card {
            return None;
        }
        compute_card_layout(self.viewport_width?, self.rows.len(), options.min_card_width)
    }

    /// Shown when a finished fetch returned no rows.
    pub fn empty_message(&self, entity_name: &str) -> Option<String> {
        if self.loading || self.error.is_some() || !self.rows.is_empty() {
            return None;
        }
        let entity = entity_name.to_lowercase();
        Some(match &self.active_search {
            Some(term) => format!("Nenhum(a) {} encontrado(a) para \"{}\".", entity, term),
            None => format!("Nenhum(a) {} encontrado(a).", entity),
        })
    }
}
