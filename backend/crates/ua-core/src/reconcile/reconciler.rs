use crate::{ChangeSet, ChildRecord, RecordUpdate};

use std::collections::{HashMap, HashSet};

/// Partitions `submitted` against `previous`.
///
/// * every previous id missing from `submitted` is deleted
/// * every submitted record without an id is created
/// * every submitted record with an id is updated, unless it is equal to the
///   previous record with the same id
///
/// Runs in O(n + m). Ids present in `submitted` but unknown to `previous`
/// still land in the update partition; the persistence layer rejects them.
pub fn reconcile<T: ChildRecord>(previous: &[T], submitted: &[T]) -> ChangeSet<T> {
    let submitted_ids: HashSet<i64> = submitted.iter().filter_map(ChildRecord::id).collect();
    let previous_by_id: HashMap<i64, &T> = previous
        .iter()
        .filter_map(|record| record.id().map(|id| (id, record)))
        .collect();

    let delete = previous
        .iter()
        .filter_map(ChildRecord::id)
        .filter(|id| !submitted_ids.contains(id))
        .collect();

    let mut create = Vec::new();
    let mut update = Vec::new();

    for record in submitted {
        match record.id() {
            None => create.push(record.clone()),
            Some(id) => {
                let unchanged = previous_by_id
                    .get(&id)
                    .is_some_and(|existing| *existing == record);
                if !unchanged {
                    update.push(RecordUpdate {
                        id,
                        data: record.clone(),
                    });
                }
            }
        }
    }

    ChangeSet {
        delete,
        create,
        update,
    }
}
