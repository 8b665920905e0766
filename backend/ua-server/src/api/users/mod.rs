pub mod search_users_query;
pub mod user_includes_query;
pub mod user_response;
pub mod users;
