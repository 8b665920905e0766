use crate::grid::ColumnKind;
use crate::grid::formatter::{
    EMPTY_CELL, INVALID_DATE, format_cell, format_currency, format_date, format_date_time,
    format_telephone,
};

use googletest::assert_that;
use googletest::prelude::eq;
use serde_json::json;

#[test]
fn given_eleven_digits_when_format_telephone_then_mobile_mask() {
    assert_that!(format_telephone("11912345678"), eq("(11) 91234-5678"));
}

#[test]
fn given_ten_digits_when_format_telephone_then_landline_mask() {
    assert_that!(format_telephone("1133334444"), eq("(11) 3333-4444"));
}

#[test]
fn given_unexpected_length_when_format_telephone_then_unchanged() {
    assert_that!(format_telephone("12345"), eq("12345"));
}

#[test]
fn given_iso_date_when_format_date_then_day_month_year() {
    assert_that!(format_date(&json!("1990-05-20")), eq("20/05/1990"));
}

#[test]
fn given_garbage_when_format_date_then_invalid_date() {
    assert_that!(format_date(&json!("yesterday")), eq(INVALID_DATE));
}

#[test]
fn given_offset_timestamp_when_format_date_time_then_utc() {
    assert_that!(
        format_date_time(&json!("2024-01-15T13:45:00-03:00")),
        eq("15/01/2024 16:45")
    );
}

#[test]
fn given_unix_seconds_when_format_date_time_then_formatted() {
    assert_that!(format_date_time(&json!(0)), eq("01/01/1970 00:00"));
}

#[test]
fn given_amounts_when_format_currency_then_brazilian_notation() {
    assert_that!(format_currency(1234.56), eq("R$ 1.234,56"));
    assert_that!(format_currency(1234567.0), eq("R$ 1.234.567,00"));
    assert_that!(format_currency(0.5), eq("R$ 0,50"));
    assert_that!(format_currency(-12.3), eq("-R$ 12,30"));
}

#[test]
fn given_null_or_blank_when_format_cell_then_placeholder() {
    assert_that!(format_cell(ColumnKind::Text, &json!(null)), eq(EMPTY_CELL));
    assert_that!(format_cell(ColumnKind::Date, &json!("  ")), eq(EMPTY_CELL));
}

#[test]
fn given_boolean_column_when_format_cell_then_sim_or_nao() {
    assert_that!(format_cell(ColumnKind::Boolean, &json!(true)), eq("Sim"));
    assert_that!(format_cell(ColumnKind::Boolean, &json!(0)), eq("Não"));
}

#[test]
fn given_number_in_text_column_when_format_cell_then_plain() {
    assert_that!(format_cell(ColumnKind::Text, &json!(42)), eq("42"));
}
