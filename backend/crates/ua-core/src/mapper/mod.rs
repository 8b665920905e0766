pub mod user_form;
pub mod user_mapper;
