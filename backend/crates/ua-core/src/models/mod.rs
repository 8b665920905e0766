pub mod address;
pub mod email;
pub mod main_flag;
pub mod telephone;
pub mod telephone_type;
pub mod user;
pub mod user_submission;
pub mod user_summary;
