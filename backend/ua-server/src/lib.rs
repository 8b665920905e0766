pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    proxy::{
        cep_response::{CepAddress, CepResponse},
        viacep::lookup_cep,
    },
    users::{
        search_users_query::SearchUsersQuery,
        user_includes_query::UserIncludesQuery,
        user_response::{SearchMeta, SearchUsersResponse, UserResponse},
        users::{create_user, delete_user, get_user, replace_user, search_users, update_user},
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};

pub use crate::routes::build_router;
