use crate::tests::{address, email, telephone};
use crate::{UserChildren, UserSubmission, UserUpdatePayload, reconcile_user_children};

use googletest::prelude::*;

fn snapshot() -> UserChildren {
    UserChildren {
        emails: vec![email(Some(1), "a@example.com", true)],
        telephones: vec![telephone(Some(5), "+55 (11) 91234-5678", true)],
        addresses: vec![address(Some(9), "Rua A", true)],
    }
}

#[test]
fn given_absent_collections_when_reconciled_then_they_are_left_alone() {
    // Given
    let submission = UserSubmission {
        emails: Some(vec![
            email(Some(1), "a@example.com", true),
            email(None, "b@example.com", false),
        ]),
        ..UserSubmission::default()
    };

    // When
    let changes = reconcile_user_children(&snapshot(), &submission);

    // Then
    assert_that!(changes.emails.map(|c| c.counts()), some(eq((0, 1, 0))));
    assert_that!(changes.telephones, none());
    assert_that!(changes.addresses, none());
}

#[test]
fn given_unchanged_collection_when_payload_built_then_nested_write_is_omitted() {
    // Given
    let current = snapshot();
    let submission = UserSubmission {
        name: Some(String::from("Maria")),
        emails: Some(current.emails.clone()),
        telephones: Some(vec![]),
        ..UserSubmission::default()
    };

    // When
    let payload = UserUpdatePayload::from_submission(&current, &submission);

    // Then
    assert_that!(payload.name.as_deref(), some(eq("Maria")));
    assert_that!(payload.email, none());
    assert_that!(payload.address, none());
    let telephone = payload.telephone.unwrap();
    assert_that!(telephone.delete_many.unwrap().id.ids, eq(&vec![5]));
}

#[test]
fn given_payload_when_serialized_then_password_hash_is_never_sent() {
    // Given
    let payload = UserUpdatePayload {
        password_hash: Some(String::from("$argon2id$secret")),
        ..UserUpdatePayload::default()
    };

    // When
    let json = serde_json::to_string(&payload).unwrap();

    // Then
    assert_that!(json, eq("{}"));
    assert_that!(payload.has_child_writes(), eq(false));
}
