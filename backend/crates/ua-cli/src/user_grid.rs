//! The user listing: columns, options and one scripted pass of the grid.

use crate::grid::{
    ColumnDef, ColumnKind, DataGrid, GridOptions, GridSnapshot, SortConfig, SortDirection,
    ViewMode,
};

use ua_config::GridConfig;

pub const USERS_ENTITY_NAME: &str = "Usuários";
pub const USERS_CONFIG_KEY: &str = "users";
pub const PREFERENCES_FILENAME: &str = "grid_preferences.json";

pub fn user_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("id", "ID").groupable(false),
        ColumnDef::new("name", "Nome"),
        ColumnDef::new("nickname", "Apelido"),
        ColumnDef::new("cpf", "CPF").groupable(false),
        ColumnDef::new("birth_date", "Data de Nascimento").kind(ColumnKind::Date),
        ColumnDef::new("mainEmail", "E-mail").groupable(false),
        ColumnDef::new("mainTelephone", "Telefone")
            .kind(ColumnKind::Telephone)
            .groupable(false),
        ColumnDef::new("city", "Cidade")
            .field("mainAddress.city")
            .sortable(false)
            .groupable(false),
        ColumnDef::new("updated_at", "Atualizado em")
            .kind(ColumnKind::DateTime)
            .groupable(false),
        ColumnDef::new("actions", "Ações")
            .sortable(false)
            .groupable(false)
            .formatter(|_| String::new()),
    ]
}

pub fn user_grid_options(config: &GridConfig) -> GridOptions {
    let mut options = GridOptions::new(USERS_ENTITY_NAME, user_columns()).with_config(config);
    options.config_key = Some(String::from(USERS_CONFIG_KEY));
    options.extra_params = vec![(String::from("main_address"), String::from("true"))];
    options
}

/// Changes requested on the command line, applied in one burst.
#[derive(Debug, Clone, Default)]
pub struct GridActions {
    pub view: Option<ViewMode>,
    pub group: Option<String>,
    pub ungroup: bool,
    pub rows: Option<usize>,
    pub sort: Option<String>,
    pub order: Option<SortDirection>,
    pub search: Option<String>,
    pub page: Option<usize>,
    pub toggle_columns: Vec<String>,
    pub width: Option<u32>,
}

/// Applies `actions` as a user would, waits for the debounced fetch and
/// returns the settled grid.
pub async fn drive_grid(grid: &DataGrid, actions: &GridActions) -> GridSnapshot {
    if let Some(view) = actions.view {
        grid.set_view_mode(view);
    }
    if actions.ungroup {
        grid.set_grouping(None);
    } else if let Some(group) = &actions.group {
        grid.set_grouping(Some(group));
    }
    if let Some(rows) = actions.rows {
        grid.set_rows_per_page(rows);
    }
    match (&actions.sort, actions.order) {
        (Some(field), order) => {
            grid.set_sort(SortConfig::new(field.clone(), order.unwrap_or_default()))
        }
        (None, Some(order)) => {
            let current = grid.state().sort().clone();
            grid.set_sort(SortConfig::new(current.field, order));
        }
        (None, None) => {}
    }
    if let Some(search) = &actions.search {
        grid.set_search_input(search.clone());
        grid.commit_search();
    }
    if let Some(page) = actions.page {
        grid.set_page(page);
    }
    for column in &actions.toggle_columns {
        grid.toggle_column(column);
    }
    if let Some(width) = actions.width {
        grid.resize(width);
    }

    grid.settle().await;
    grid.snapshot()
}
