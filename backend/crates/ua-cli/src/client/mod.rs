pub(crate) mod client;
pub(crate) mod error;

pub use client::{Client, USERS_PATH, USERS_SEARCH_PATH, VIACEP_PROXY_PATH};
pub use error::{ClientError, Result as CliClientResult};
