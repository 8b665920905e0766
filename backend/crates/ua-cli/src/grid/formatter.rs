//! Cell formatting for pt-BR display.

use crate::grid::ColumnKind;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

pub const EMPTY_CELL: &str = "-";
pub const INVALID_DATE: &str = "Data Inválida";

pub fn format_cell(kind: ColumnKind, value: &Value) -> String {
    if is_empty(value) {
        return String::from(EMPTY_CELL);
    }

    match kind {
        ColumnKind::Text => plain_text(value),
        ColumnKind::Telephone => format_telephone(&plain_text(value)),
        ColumnKind::Date => format_date(value),
        ColumnKind::DateTime => format_date_time(value),
        ColumnKind::Currency => match as_f64(value) {
            Some(amount) => format_currency(amount),
            None => plain_text(value),
        },
        ColumnKind::Boolean => match as_bool(value) {
            Some(flag) => String::from(format_boolean(flag)),
            None => plain_text(value),
        },
    }
}

pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Text used for display fallbacks, sorting and grouping.
pub fn plain_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => String::from(format_boolean(*b)),
        other => other.to_string(),
    }
}

/// `(11) 3333-4444` for 10 digits, `(11) 91234-5678` for 11; anything
/// else is returned as given.
pub fn format_telephone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        11 => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        _ => raw.to_string(),
    }
}

pub fn format_date(value: &Value) -> String {
    parse_date_time(value)
        .map(|dt| dt.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| String::from(INVALID_DATE))
}

/// Offsets are normalized to UTC.
pub fn format_date_time(value: &Value) -> String {
    parse_date_time(value)
        .map(|dt| dt.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_else(|| String::from(INVALID_DATE))
}

/// `R$ 1.234,56`
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let integer = (cents / 100).to_string();

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, grouped, cents % 100)
}

pub fn format_boolean(flag: bool) -> &'static str {
    if flag { "Sim" } else { "Não" }
}

fn parse_date_time(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                return Some(dt.naive_utc());
            }
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
                return Some(dt);
            }
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        }
        // Unix seconds
        Value::Number(n) => n
            .as_i64()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map(|dt| dt.naive_utc()),
        _ => None,
    }
}

fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_i64().map(|i| i != 0),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "sim" => Some(true),
            "false" | "0" | "não" | "nao" => Some(false),
            _ => None,
        },
        _ => None,
    }
}
