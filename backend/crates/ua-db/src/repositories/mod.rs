pub mod rows;
pub mod search_query;
pub mod user_repository;
