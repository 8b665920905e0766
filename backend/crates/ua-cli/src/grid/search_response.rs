use crate::grid::{GridError, GridResult};

use serde_json::Value;

/// Rows and total count of one search response.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResult {
    pub rows: Vec<Value>,
    pub total_count: u64,
}

pub fn invalid_format_message(entity_name: &str) -> String {
    format!("Formato inválido ao buscar {}.", entity_name)
}

/// Reads `{ ok, data, meta: { totalCount } }`.
///
/// The count is looked up under `meta.totalCount`, then `totalCount`,
/// then `meta.pagination.total`; a missing count is 0. `ok: false`, a
/// missing `data` array or a count that is negative or not a number is a
/// shape error carrying the body's `message` when there is one.
pub fn parse_search_response(entity_name: &str, body: &Value) -> GridResult<SearchResult> {
    let shape_error = || {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.trim().is_empty())
            .map(String::from)
            .unwrap_or_else(|| invalid_format_message(entity_name));
        GridError::invalid_response(message)
    };

    if body.get("ok").and_then(Value::as_bool) != Some(true) {
        return Err(shape_error());
    }

    let rows = body
        .get("data")
        .and_then(Value::as_array)
        .cloned()
        .ok_or_else(shape_error)?;

    let count = body
        .pointer("/meta/totalCount")
        .or_else(|| body.get("totalCount"))
        .or_else(|| body.pointer("/meta/pagination/total"));

    let total_count = match count {
        None | Some(Value::Null) => 0,
        Some(value) => value.as_u64().ok_or_else(|| {
            log::warn!("Unusable total count {} for {}", value, entity_name);
            shape_error()
        })?,
    };

    Ok(SearchResult { rows, total_count })
}
