mod card_layout;
mod debouncer;
mod formatter;
mod grid_preferences;
mod grid_state;
mod grouping;
mod search;

use crate::grid::GridOptions;
use crate::user_grid::{USERS_CONFIG_KEY, USERS_ENTITY_NAME, user_columns};

/// User grid options with the stock page sizes and debounce.
pub(crate) fn user_options() -> GridOptions {
    let mut options = GridOptions::new(USERS_ENTITY_NAME, user_columns());
    options.config_key = Some(String::from(USERS_CONFIG_KEY));
    options
}
