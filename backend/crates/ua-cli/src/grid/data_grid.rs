use crate::grid::{
    CardLayout, Debouncer, Effects, FetchOutcome, GridOptions, GridPreferences, GridState,
    PreferenceStore, RenderedRow, RowFetcher, SortConfig, ViewMode,
};

use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use serde_json::{Map, Value, json};

/// Point-in-time view of a grid, ready to render or serialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSnapshot {
    pub entity_name: String,
    pub page: usize,
    pub page_count: usize,
    pub rows_per_page: usize,
    pub total_count: u64,
    pub sort: SortConfig,
    pub sorting_disabled: bool,
    pub grouping_field: Option<String>,
    pub view_mode: ViewMode,
    pub search: Option<String>,
    pub visible_column_ids: Vec<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub empty_message: Option<String>,
    pub rows: Vec<RenderedRow>,
    pub card_layout: Option<CardLayout>,
}

impl GridSnapshot {
    /// Rows as display cells of the visible columns, group headers kept.
    pub fn display_rows(&self, options: &GridOptions) -> Value {
        let columns: Vec<_> = options
            .visible_columns(&self.visible_column_ids)
            .into_iter()
            .filter(|c| !options.is_always_visible(&c.id))
            .collect();

        let rows = self
            .rows
            .iter()
            .map(|rendered| match rendered {
                RenderedRow::GroupHeader { label, count, .. } => {
                    json!({ "group": label, "count": count })
                }
                RenderedRow::Data { row, stripe } => {
                    let cells: Map<String, Value> = columns
                        .iter()
                        .map(|c| (c.label.clone(), Value::String(c.format(row))))
                        .collect();
                    json!({ "stripe": stripe, "cells": cells })
                }
            })
            .collect();

        Value::Array(rows)
    }
}

struct Inner {
    options: GridOptions,
    state: Mutex<GridState>,
    fetcher: Arc<dyn RowFetcher>,
    store: Arc<dyn PreferenceStore>,
    fetch_debouncer: Debouncer,
    resize_debouncer: Debouncer,
}

impl Inner {
    fn state(&self) -> MutexGuard<'_, GridState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Resets loading for its generation when the fetch ends, including when
/// the fetch future is aborted.
struct LoadingGuard {
    inner: Arc<Inner>,
    generation: u64,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.inner.state().end_fetch(self.generation);
    }
}

/// Grid instance driving [`GridState`] against a [`RowFetcher`].
///
/// Fetch triggers are debounced so a burst of changes produces one request.
/// Responses to superseded requests are discarded. Dropping the grid
/// cancels both debounce timers.
pub struct DataGrid {
    inner: Arc<Inner>,
}

impl DataGrid {
    /// Restores stored preferences and schedules the first fetch.
    pub fn mount(
        options: GridOptions,
        fetcher: Arc<dyn RowFetcher>,
        store: Arc<dyn PreferenceStore>,
    ) -> Self {
        let inner = Arc::new(Inner {
            state: Mutex::new(GridState::new(&options)),
            fetch_debouncer: Debouncer::new(options.debounce),
            resize_debouncer: Debouncer::new(options.resize_debounce),
            options,
            fetcher,
            store,
        });
        let grid = Self { inner };

        let key = grid.inner.options.storage_key();
        let stored = grid.inner.store.load(&key);
        let preferences = GridPreferences::restore(stored.as_ref(), &grid.inner.options);
        log::debug!("Restored {}: {:?}", key, preferences);

        let effects = grid.inner.state().load_config(preferences);
        grid.apply(effects);
        grid
    }

    pub fn options(&self) -> &GridOptions {
        &self.inner.options
    }

    fn apply(&self, effects: Effects) {
        Self::apply_to(&self.inner, effects);
    }

    fn apply_to(inner: &Arc<Inner>, effects: Effects) {
        if effects.persist {
            Self::persist(inner);
        }
        if effects.fetch {
            let task_inner = Arc::clone(inner);
            inner.fetch_debouncer.schedule(Self::run_fetch(task_inner));
        }
    }

    fn persist(inner: &Inner) {
        let preferences = {
            let state = inner.state();
            if !state.is_config_loaded() {
                return;
            }
            state.preferences()
        };
        let key = inner.options.storage_key();
        if let Err(e) = inner.store.save(&key, &preferences.to_value()) {
            log::warn!("Failed to persist {}: {}", key, e);
        }
    }

    async fn run_fetch(inner: Arc<Inner>) {
        loop {
            let Some((generation, params)) = inner.state().begin_fetch(&inner.options) else {
                return;
            };
            let _loading = LoadingGuard {
                inner: Arc::clone(&inner),
                generation,
            };

            log::debug!(
                "Fetching {} rows {}..{} (generation {})",
                inner.options.entity_name,
                params.start_index,
                params.end_index,
                generation
            );
            let result = inner.fetcher.fetch(&params).await;
            let outcome = inner.state().finish_fetch(generation, result);
            log::debug!("Fetch {} finished: {:?}", generation, outcome);

            if outcome != FetchOutcome::PageReset {
                return;
            }
        }
    }

    // =========================================================================
    // Actions
    // =========================================================================

    pub fn set_page(&self, page: usize) {
        let effects = self.inner.state().set_page(page);
        self.apply(effects);
    }

    pub fn set_rows_per_page(&self, rows_per_page: usize) {
        let effects = self
            .inner
            .state()
            .set_rows_per_page(rows_per_page, &self.inner.options);
        self.apply(effects);
    }

    pub fn set_sort(&self, sort: SortConfig) {
        let effects = self.inner.state().set_sort(sort, &self.inner.options);
        self.apply(effects);
    }

    pub fn toggle_sort(&self, field: &str) {
        let effects = self.inner.state().toggle_sort(field, &self.inner.options);
        self.apply(effects);
    }

    pub fn set_search_input(&self, text: impl Into<String>) {
        let effects = self.inner.state().set_search_input(text);
        self.apply(effects);
    }

    pub fn commit_search(&self) {
        let effects = self.inner.state().commit_search();
        self.apply(effects);
    }

    pub fn set_grouping(&self, field: Option<&str>) {
        let effects = self
            .inner
            .state()
            .set_grouping(field, &self.inner.options);
        self.apply(effects);
    }

    pub fn set_view_mode(&self, mode: ViewMode) {
        let effects = self.inner.state().set_view_mode(mode);
        self.apply(effects);
    }

    pub fn toggle_column(&self, id: &str) {
        let effects = self.inner.state().toggle_column(id, &self.inner.options);
        self.apply(effects);
    }

    /// Debounced; the latest width wins.
    pub fn resize(&self, width: u32) {
        let inner = Arc::clone(&self.inner);
        self.inner.resize_debouncer.schedule(async move {
            let effects = inner.state().set_viewport_width(width);
            Self::apply_to(&inner, effects);
        });
    }

    pub fn dismiss_error(&self) {
        self.inner.state().dismiss_error();
    }

    /// Skips the debounce and fetches the current page now.
    pub async fn refresh(&self) {
        self.inner.fetch_debouncer.cancel();
        Self::run_fetch(Arc::clone(&self.inner)).await;
    }

    /// Waits until pending resize and fetch work has run.
    pub async fn settle(&self) {
        self.inner.resize_debouncer.flush().await;
        self.inner.fetch_debouncer.flush().await;
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn state(&self) -> GridState {
        self.inner.state().clone()
    }

    pub fn rows(&self) -> Vec<Value> {
        self.inner.state().rows().to_vec()
    }

    pub fn rendered_rows(&self) -> Vec<RenderedRow> {
        self.inner.state().rendered_rows(&self.inner.options)
    }

    pub fn snapshot(&self) -> GridSnapshot {
        let options = &self.inner.options;
        let state = self.inner.state();

        GridSnapshot {
            entity_name: options.entity_name.clone(),
            page: state.page(),
            page_count: state.page_count(),
            rows_per_page: state.rows_per_page(),
            total_count: state.total_count(),
            sort: state.sort().clone(),
            sorting_disabled: state.sorting_disabled(),
            grouping_field: state.grouping_field().map(String::from),
            view_mode: state.view_mode(),
            search: state.active_search().map(String::from),
            visible_column_ids: state.visible_column_ids().to_vec(),
            loading: state.is_loading(),
            error: state.error().map(String::from),
            empty_message: state.empty_message(&options.entity_name),
            rows: state.rendered_rows(options),
            card_layout: state.card_layout(options),
        }
    }
}

impl Drop for DataGrid {
    fn drop(&mut self) {
        self.inner.fetch_debouncer.cancel();
        self.inner.resize_debouncer.cancel();
    }
}
