use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Records that take part in the single-main invariant of a collection.
pub trait MainFlag {
    fn is_main(&self) -> bool;
    fn set_is_main(&mut self, is_main: bool);
}

/// Marks `records[index]` as main and every sibling as not main.
#[track_caller]
pub fn set_main<T: MainFlag>(records: &mut [T], index: usize) -> CoreErrorResult<()> {
    if index >= records.len() {
        return Err(CoreError::IndexOutOfRange {
            index,
            len: records.len(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    for (position, record) in records.iter_mut().enumerate() {
        record.set_is_main(position == index);
    }

    Ok(())
}

/// Index of the first record flagged as main.
pub fn main_index<T: MainFlag>(records: &[T]) -> Option<usize> {
    records.iter().position(MainFlag::is_main)
}
