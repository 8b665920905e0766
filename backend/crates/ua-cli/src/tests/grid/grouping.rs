use crate::grid::grouping::{group_rows, sort_rows};
use crate::grid::{ColumnDef, RenderedRow, SortConfig, SortDirection, natural_cmp};

use std::cmp::Ordering;

use googletest::assert_that;
use googletest::prelude::{eq, len};
use serde_json::{Value, json};

fn names(rows: &[Value]) -> Vec<String> {
    rows.iter()
        .map(|r| r["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn given_digit_runs_when_natural_cmp_then_numeric_order() {
    assert_that!(natural_cmp("item2", "item10"), eq(Ordering::Less));
    assert_that!(natural_cmp("item010", "item9"), eq(Ordering::Greater));
}

#[test]
fn given_mixed_case_when_natural_cmp_then_case_insensitive() {
    assert_that!(natural_cmp("beta", "Alpha"), eq(Ordering::Greater));
    assert_that!(natural_cmp("alpha", "Beta"), eq(Ordering::Less));
}

#[test]
fn given_desc_sort_when_sort_rows_then_reversed() {
    let column = ColumnDef::new("name", "Nome");
    let mut rows = vec![
        json!({ "name": "user2" }),
        json!({ "name": "user10" }),
        json!({ "name": "user1" }),
    ];

    sort_rows(
        &mut rows,
        Some(&column),
        &SortConfig::new("name", SortDirection::Desc),
    );

    assert_that!(names(&rows), eq(&vec![
        String::from("user10"),
        String::from("user2"),
        String::from("user1"),
    ]));
}

#[test]
fn given_rows_when_grouped_then_headers_interleaved_with_counts() {
    // Given
    let city = ColumnDef::new("city", "Cidade").field("address.city");
    let name = ColumnDef::new("name", "Nome");
    let rows = vec![
        json!({ "name": "Bruno", "address": { "city": "Recife" } }),
        json!({ "name": "Ana", "address": { "city": "Santos" } }),
        json!({ "name": "Carla", "address": { "city": "Recife" } }),
    ];

    // When
    let rendered = group_rows(&rows, &city, Some(&name), &SortConfig::asc("name"));

    // Then
    assert_that!(rendered, len(eq(5)));
    assert_that!(
        rendered[0],
        eq(&RenderedRow::GroupHeader {
            field: String::from("city"),
            value: String::from("Recife"),
            label: String::from("Recife"),
            count: 2,
        })
    );
    assert_that!(
        rendered[2],
        eq(&RenderedRow::Data {
            row: rows[2].clone(),
            stripe: 1,
        })
    );
    assert_that!(
        rendered[4],
        eq(&RenderedRow::Data {
            row: rows[1].clone(),
            stripe: 0,
        })
    );
}

#[test]
fn given_desc_sort_when_grouped_then_groups_stay_ascending() {
    let city = ColumnDef::new("city", "Cidade");
    let name = ColumnDef::new("name", "Nome");
    let rows = vec![
        json!({ "name": "Ana", "city": "B" }),
        json!({ "name": "Bia", "city": "A" }),
        json!({ "name": "Caio", "city": "A" }),
    ];

    let rendered = group_rows(
        &rows,
        &city,
        Some(&name),
        &SortConfig::new("name", SortDirection::Desc),
    );

    let order: Vec<String> = rendered
        .iter()
        .map(|r| match r {
            RenderedRow::GroupHeader { value, .. } => format!("#{}", value),
            RenderedRow::Data { row, .. } => row["name"].as_str().unwrap_or_default().to_string(),
        })
        .collect();
    assert_that!(order, eq(&vec![
        String::from("#A"),
        String::from("Caio"),
        String::from("Bia"),
        String::from("#B"),
        String::from("Ana"),
    ]));
}
