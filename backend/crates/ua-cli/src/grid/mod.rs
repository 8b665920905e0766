//! Server-paginated data grid.
//!
//! [`GridState`] is a pure reducer over user actions and fetch results.
//! [`DataGrid`] drives it: it restores preferences, debounces fetches and
//! resize recomputation, and discards responses from superseded requests.

pub mod card_layout;
pub mod column_def;
pub mod data_grid;
pub mod debouncer;
pub mod error;
pub mod formatter;
pub mod grid_options;
pub mod grid_preferences;
pub mod grid_state;
pub mod grouping;
pub mod preference_store;
pub mod row_fetcher;
pub mod search_params;
pub mod search_response;
pub mod sort_config;
pub mod view_mode;

pub use card_layout::{Breakpoint, CardLayout, compute_card_layout};
pub use column_def::{CellFormatter, ColumnDef, ColumnKind};
pub use data_grid::{DataGrid, GridSnapshot};
pub use debouncer::Debouncer;
pub use error::{GridError, Result as GridResult};
pub use grid_options::GridOptions;
pub use grid_preferences::{GridPreferences, storage_key};
pub use grid_state::{Effects, FetchOutcome, GridPhase, GridState};
pub use grouping::{RenderedRow, natural_cmp};
pub use preference_store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use row_fetcher::{HttpRowFetcher, RowFetcher};
pub use search_params::SearchParams;
pub use search_response::{SearchResult, parse_search_response};
pub use sort_config::{SortConfig, SortDirection};
pub use view_mode::ViewMode;
