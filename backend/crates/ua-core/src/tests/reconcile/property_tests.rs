//! Applying a change set to the previous collection reproduces the submission.

use crate::{ChangeSet, ChildRecord, Email, reconcile};

use std::collections::{BTreeMap, HashSet};

use proptest::prelude::*;

/// Stand-in for the persistence layer: deletes, replaces and appends.
fn apply(previous: &[Email], changes: &ChangeSet<Email>) -> Vec<Email> {
    let deleted: HashSet<i64> = changes.delete.iter().copied().collect();
    let updates: BTreeMap<i64, &Email> = changes.update.iter().map(|u| (u.id, &u.data)).collect();

    let mut result: Vec<Email> = previous
        .iter()
        .filter(|e| e.id().is_some_and(|id| !deleted.contains(&id)))
        .map(|e| {
            e.id()
                .and_then(|id| updates.get(&id))
                .map(|u| (*u).clone())
                .unwrap_or_else(|| e.clone())
        })
        .collect();
    result.extend(changes.create.iter().cloned());
    result
}

fn sort_key(e: &Email) -> (Option<i64>, String, bool) {
    (e.id, e.email.clone(), e.is_main)
}

fn sorted(mut records: Vec<Email>) -> Vec<Email> {
    records.sort_by_key(sort_key);
    records
}

fn numbered(names: Vec<String>) -> Vec<Email> {
    names
        .into_iter()
        .enumerate()
        .map(|(i, name)| Email {
            id: Some(i as i64 + 1),
            ..Email::new(format!("{}@example.com", name), i == 0)
        })
        .collect()
}

prop_compose! {
    fn arb_previous()(names in prop::collection::vec("[a-z]{1,6}", 0..8)) -> Vec<Email> {
        numbered(names)
    }
}

prop_compose! {
    fn arb_case()(
        names in prop::collection::vec("[a-z]{1,6}", 0..8),
        keep in prop::collection::vec(any::<(bool, bool)>(), 8),
        new_names in prop::collection::vec("[a-z]{1,6}", 0..4),
    ) -> (Vec<Email>, Vec<Email>) {
        let previous = numbered(names);
        let mut submitted = Vec::new();
        for (record, (kept, edited)) in previous.iter().zip(keep) {
            if kept {
                let mut record = record.clone();
                if edited {
                    record.email = format!("edited.{}", record.email);
                }
                submitted.push(record);
            }
        }
        for name in new_names {
            submitted.push(Email::new(format!("{}@new.example.com", name), false));
        }
        (previous, submitted)
    }
}

proptest! {
    #[test]
    fn applying_changes_reproduces_submission((previous, submitted) in arb_case()) {
        let changes = reconcile(&previous, &submitted);
        let applied = apply(&previous, &changes);

        prop_assert_eq!(sorted(applied), sorted(submitted));
    }

    #[test]
    fn reconciling_against_itself_is_empty(previous in arb_previous()) {
        let changes = reconcile(&previous, &previous);

        prop_assert!(changes.is_empty());
    }

    #[test]
    fn all_new_submission_deletes_all_and_creates_all(
        previous in arb_previous(),
        names in prop::collection::vec("[a-z]{1,6}", 0..5),
    ) {
        let submitted: Vec<Email> = names
            .iter()
            .map(|n| Email::new(format!("{}@example.com", n), false))
            .collect();

        let changes = reconcile(&previous, &submitted);

        let previous_ids: Vec<i64> = previous.iter().filter_map(|e| e.id).collect();
        prop_assert_eq!(changes.delete, previous_ids);
        prop_assert_eq!(changes.create, submitted);
        prop_assert!(changes.update.is_empty());
    }
}
