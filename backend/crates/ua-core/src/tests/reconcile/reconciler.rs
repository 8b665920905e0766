use crate::tests::{address, email, telephone};
use crate::{RecordUpdate, reconcile};

use googletest::prelude::*;

#[test]
fn given_identical_collections_when_reconciled_then_change_set_is_empty() {
    // Given
    let previous = vec![
        email(Some(1), "a@example.com", true),
        email(Some(2), "b@example.com", false),
    ];

    // When
    let changes = reconcile(&previous, &previous.clone());

    // Then
    assert_that!(changes.is_empty(), eq(true));
}

#[test]
fn given_only_new_records_when_reconciled_then_everything_previous_is_deleted() {
    // Given
    let previous = vec![
        telephone(Some(10), "+55 (11) 91234-5678", true),
        telephone(Some(11), "+55 (11) 3456-7890", false),
    ];
    let submitted = vec![telephone(None, "+55 (21) 99999-0000", true)];

    // When
    let changes = reconcile(&previous, &submitted);

    // Then
    assert_that!(changes.delete, eq(&vec![10, 11]));
    assert_that!(changes.create, eq(&submitted));
    assert_that!(changes.update, is_empty());
}

#[test]
fn given_mixed_submission_when_reconciled_then_records_are_partitioned() {
    // Given
    let previous = vec![
        address(Some(1), "Rua A", true),
        address(Some(2), "Rua B", false),
        address(Some(3), "Rua C", false),
    ];
    let mut moved = address(Some(2), "Rua B2", true);
    moved.number = Some(12);
    let submitted = vec![
        address(Some(1), "Rua A", false),
        moved.clone(),
        address(None, "Rua Nova", false),
    ];

    // When
    let changes = reconcile(&previous, &submitted);

    // Then
    assert_that!(changes.delete, eq(&vec![3]));
    assert_that!(changes.create, len(eq(1)));
    assert_that!(changes.create[0].street, eq("Rua Nova"));
    assert_that!(changes.update, len(eq(2)));
    assert_that!(changes.updated_ids().collect::<Vec<_>>(), eq(&vec![1, 2]));
    assert_that!(
        changes.update[1],
        eq(&RecordUpdate {
            id: 2,
            data: moved
        })
    );
}

#[test]
fn given_unchanged_record_among_edits_when_reconciled_then_it_is_not_updated() {
    // Given
    let previous = vec![
        email(Some(1), "keep@example.com", true),
        email(Some(2), "old@example.com", false),
    ];
    let submitted = vec![
        email(Some(1), "keep@example.com", true),
        email(Some(2), "new@example.com", false),
    ];

    // When
    let changes = reconcile(&previous, &submitted);

    // Then
    assert_that!(changes.counts(), eq((0, 0, 1)));
    assert_that!(changes.update[0].id, eq(2));
}

#[test]
fn given_unknown_id_when_reconciled_then_it_is_still_an_update() {
    // Given
    let previous = vec![email(Some(1), "a@example.com", true)];
    let submitted = vec![email(Some(99), "ghost@example.com", true)];

    // When
    let changes = reconcile(&previous, &submitted);

    // Then
    assert_that!(changes.delete, eq(&vec![1]));
    assert_that!(changes.update[0].id, eq(99));
}

#[test]
fn given_empty_submission_when_reconciled_then_every_previous_id_is_deleted() {
    let previous = vec![email(Some(4), "a@example.com", true)];

    let changes = reconcile(&previous, &[]);

    assert_that!(changes.counts(), eq((1, 0, 0)));
}
