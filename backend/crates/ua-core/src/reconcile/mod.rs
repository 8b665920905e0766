//! Child-collection reconciliation.
//!
//! Given the persisted records of a collection and the records a client
//! submitted, compute which ids to delete, which records to create and which
//! to update. The result is applied by the persistence layer inside a single
//! transaction.

pub mod change_set;
pub mod child_record;
pub mod nested_write;
pub mod reconciler;
pub mod user_update;
