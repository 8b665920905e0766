//! Client-side ordering and group-header interleaving.

use crate::grid::formatter::plain_text;
use crate::grid::{ColumnDef, SortConfig, SortDirection};

use std::cmp::Ordering;

use serde::Serialize;
use serde_json::Value;

static NULL: Value = Value::Null;

/// One line of the rendered table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RenderedRow {
    /// Emitted whenever the grouped value changes from the previous row
    #[serde(rename_all = "camelCase")]
    GroupHeader {
        field: String,
        value: String,
        label: String,
        count: usize,
    },
    /// `stripe` restarts at 0 after every group header
    Data { row: Value, stripe: usize },
}

/// Case-insensitive comparison where digit runs compare by numeric value,
/// so `item2` sorts before `item10`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let l_run = take_digits(&mut left);
                let r_run = take_digits(&mut right);
                let ordering = compare_digit_runs(&l_run, &r_run);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            (Some(l), Some(r)) => {
                let ordering = l.to_lowercase().cmp(r.to_lowercase());
                if ordering != Ordering::Equal {
                    return ordering;
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied().filter(char::is_ascii_digit) {
        run.push(c);
        chars.next();
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Numbers compare numerically; everything else by [`natural_cmp`] on its text.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => natural_cmp(&plain_text(a), &plain_text(b)),
    }
}

fn sort_value<'a>(row: &'a Value, column: Option<&ColumnDef>, field: &str) -> &'a Value {
    match column {
        Some(column) => column.value(row),
        None => row.get(field).unwrap_or(&NULL),
    }
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Stable client-side sort, used by the card view.
pub fn sort_rows(rows: &mut [Value], sort_column: Option<&ColumnDef>, sort: &SortConfig) {
    rows.sort_by(|a, b| {
        directed(
            compare_values(
                sort_value(a, sort_column, &sort.field),
                sort_value(b, sort_column, &sort.field),
            ),
            sort.direction,
        )
    });
}

pub fn plain_rows(rows: &[Value]) -> Vec<RenderedRow> {
    rows.iter()
        .enumerate()
        .map(|(stripe, row)| RenderedRow::Data {
            row: row.clone(),
            stripe,
        })
        .collect()
}

/// Orders rows by the grouped value (ascending), breaking ties with the
/// active sort, and interleaves a header before every run of equal values.
pub fn group_rows(
    rows: &[Value],
    group_column: &ColumnDef,
    sort_column: Option<&ColumnDef>,
    sort: &SortConfig,
) -> Vec<RenderedRow> {
    let mut ordered: Vec<&Value> = rows.iter().collect();
    ordered.sort_by(|a, b| {
        compare_values(group_column.value(a), group_column.value(b)).then_with(|| {
            directed(
                compare_values(
                    sort_value(a, sort_column, &sort.field),
                    sort_value(b, sort_column, &sort.field),
                ),
                sort.direction,
            )
        })
    });

    let mut rendered = Vec::with_capacity(ordered.len() + 4);
    let mut current: Option<String> = None;
    let mut header_at = 0;
    let mut stripe = 0;

    for row in ordered {
        let value = plain_text(group_column.value(row));
        if current.as_deref() != Some(value.as_str()) {
            header_at = rendered.len();
            rendered.push(RenderedRow::GroupHeader {
                field: group_column.id.clone(),
                value: value.clone(),
                label: group_column.format(row),
                count: 0,
            });
            current = Some(value);
            stripe = 0;
        }

        if let Some(RenderedRow::GroupHeader { count, .. }) = rendered.get_mut(header_at) {
            *count += 1;
        }
        rendered.push(RenderedRow::Data {
            row: row.clone(),
            stripe,
        });
        stripe += 1;
    }

    rendered
}
