pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::database::{connect, connect_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use repositories::search_query::{SearchPage, SearchQuery, SortField, SortOrder};
pub use repositories::user_repository::UserRepository;
