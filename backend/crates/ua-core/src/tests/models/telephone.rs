use crate::{Telephone, TelephoneType};

use googletest::prelude::*;

#[test]
fn given_mobile_mask_when_parsed_then_numeric_parts_are_split() {
    // When
    let telephone = Telephone::from_masked("+55 (11) 91234-5678", TelephoneType::Pessoal, true);

    // Then
    assert_that!(telephone.country_code, some(eq(55)));
    assert_that!(telephone.state_code, some(eq(11)));
    assert_that!(telephone.number, some(eq(912345678)));
    assert_that!(telephone.full_number.as_deref(), some(eq("5511912345678")));
    assert_that!(telephone.is_main, eq(true));
}

#[test]
fn given_landline_mask_when_parsed_then_eight_digit_number_is_kept() {
    // When
    let telephone =
        Telephone::from_masked("+55 (21) 3456-7890", TelephoneType::Profissional, false);

    // Then
    assert_that!(telephone.number, some(eq(34567890)));
    assert_that!(telephone.full_number.as_deref(), some(eq("552134567890")));
    assert_that!(telephone.telephone_type, eq(TelephoneType::Profissional));
}

#[test]
fn given_garbage_when_parsed_then_all_numeric_parts_are_none() {
    // When
    let telephone = Telephone::from_masked("abc", TelephoneType::Pessoal, false);

    // Then
    assert_that!(telephone.country_code, none());
    assert_that!(telephone.state_code, none());
    assert_that!(telephone.number, none());
    assert_that!(telephone.full_number, none());
}

#[test]
fn given_unmasked_digits_when_parsed_then_all_numeric_parts_are_none() {
    let telephone = Telephone::from_masked("5511912345678", TelephoneType::Pessoal, false);

    assert_that!(telephone.number, none());
    assert_that!(telephone.full_number, none());
}

#[test]
fn given_parsed_telephone_when_masked_then_display_string_round_trips() {
    // Given
    let telephone = Telephone::from_masked("+55 (11) 91234-5678", TelephoneType::Pessoal, true);

    // When
    let masked = telephone.masked();

    // Then
    assert_that!(masked.as_deref(), some(eq("+55 (11) 91234-5678")));
}

#[test]
fn given_missing_parts_when_masked_then_none() {
    let telephone = Telephone::with_parts(TelephoneType::Pessoal, Some(55), None, Some(1), false);

    assert_that!(telephone.masked(), none());
    assert_that!(telephone.full_number, none());
}

#[test]
fn given_changed_number_when_refreshed_then_full_number_follows() {
    // Given
    let mut telephone =
        Telephone::from_masked("+55 (11) 91234-5678", TelephoneType::Pessoal, true);
    telephone.state_code = Some(21);

    // When
    telephone.refresh_full_number();

    // Then
    assert_that!(telephone.full_number.as_deref(), some(eq("5521912345678")));
}

#[test]
fn given_local_number_with_leading_zero_when_parsed_then_digits_are_preserved() {
    // When
    let telephone = Telephone::from_masked("+55 (11) 0123-4567", TelephoneType::Pessoal, false);

    // Then
    assert_that!(telephone.number, some(eq(1234567)));
    assert_that!(telephone.full_number.as_deref(), some(eq("551101234567")));
    assert_that!(telephone.masked().as_deref(), some(eq("+55 (11) 0123-4567")));
}

#[test]
fn given_consistent_full_number_when_refreshed_then_leading_zero_is_kept() {
    // Given
    let mut telephone =
        Telephone::from_masked("+55 (11) 0123-4567", TelephoneType::Pessoal, false);

    // When
    telephone.refresh_full_number();

    // Then
    assert_that!(telephone.full_number.as_deref(), some(eq("551101234567")));
}
