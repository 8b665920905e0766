mod error;
mod user_includes_query;
