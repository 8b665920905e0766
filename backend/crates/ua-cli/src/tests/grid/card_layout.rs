use crate::grid::{Breakpoint, compute_card_layout};

use googletest::assert_that;
use googletest::prelude::{eq, none, some};

#[test]
fn given_widths_when_classified_then_breakpoints_match_thresholds() {
    assert_that!(Breakpoint::from_width(599), eq(Breakpoint::Xs));
    assert_that!(Breakpoint::from_width(600), eq(Breakpoint::Sm));
    assert_that!(Breakpoint::from_width(1199), eq(Breakpoint::Md));
    assert_that!(Breakpoint::from_width(1200), eq(Breakpoint::Lg));
}

#[test]
fn given_too_few_rows_when_computing_layout_then_none() {
    assert_that!(compute_card_layout(1280, 2, 350), none());
}

#[test]
fn given_wide_viewport_when_cards_too_narrow_then_columns_reduced() {
    // 4 columns would be 308px wide
    let layout = compute_card_layout(1280, 10, 350).expect("layout for 10 rows");

    assert_that!(layout.breakpoint, eq(Breakpoint::Lg));
    assert_that!(layout.columns, eq(3));
    assert_that!(layout.card_width, eq(416));
}

#[test]
fn given_phone_width_when_computing_layout_then_single_full_width_column() {
    let layout = compute_card_layout(500, 5, 350);

    assert_that!(layout.map(|l| (l.columns, l.card_width)), some(eq((1, 500))));
}
