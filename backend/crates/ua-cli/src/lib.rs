//! ua-cli library
//!
//! HTTP client for the ua-server REST API, the server-paginated data grid
//! and the form-driven user flows used by the `ua` binary.

pub mod client;
pub mod grid;
pub mod logger;
pub mod user_forms;
pub mod user_grid;

#[cfg(test)]
mod tests;

pub use client::{CliClientResult, Client, ClientError};
