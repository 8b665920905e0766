use crate::tests::email;
use crate::{CoreError, Email, main_index, set_main};

use googletest::prelude::*;

fn emails(count: usize) -> Vec<Email> {
    (0..count)
        .map(|i| email(Some(i as i64 + 1), &format!("user{}@example.com", i), i == 0))
        .collect()
}

#[test]
fn given_first_is_main_when_set_main_on_last_then_only_last_is_main() {
    // Given
    let mut records = emails(4);

    // When
    let result = set_main(&mut records, 3);

    // Then
    assert_that!(result, ok(anything()));
    let flags: Vec<bool> = records.iter().map(|e| e.is_main).collect();
    assert_that!(flags, eq(&vec![false, false, false, true]));
    assert_that!(main_index(&records), some(eq(3)));
}

#[test]
fn given_several_mains_when_set_main_then_exactly_one_remains() {
    // Given
    let mut records = emails(3);
    for record in &mut records {
        record.is_main = true;
    }

    // When
    set_main(&mut records, 1).unwrap();

    // Then
    assert_that!(records.iter().filter(|e| e.is_main).count(), eq(1));
    assert_that!(records[1].is_main, eq(true));
}

#[test]
fn given_index_past_end_when_set_main_then_error_and_records_untouched() {
    // Given
    let mut records = emails(2);
    let before = records.clone();

    // When
    let result = set_main(&mut records, 2);

    // Then
    assert!(matches!(
        result,
        Err(CoreError::IndexOutOfRange { index: 2, len: 2, .. })
    ));
    assert_that!(records, eq(&before));
}

#[test]
fn given_no_main_when_main_index_then_none() {
    let mut records = emails(2);
    records[0].is_main = false;

    assert_that!(main_index(&records), none());
}

mod property_tests {
    use crate::tests::email;
    use crate::{Email, set_main};

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn toggling_main_leaves_exactly_one_main(
            flags in prop::collection::vec(any::<bool>(), 1..12),
            pick in any::<prop::sample::Index>(),
        ) {
            let mut records: Vec<Email> = flags
                .iter()
                .enumerate()
                .map(|(i, is_main)| email(Some(i as i64), "a@b.co", *is_main))
                .collect();
            let k = pick.index(records.len());

            set_main(&mut records, k).unwrap();

            prop_assert!(records[k].is_main);
            prop_assert_eq!(records.iter().filter(|e| e.is_main).count(), 1);
        }
    }
}
