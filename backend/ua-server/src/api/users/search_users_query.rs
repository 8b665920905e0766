use crate::{ApiError, ApiResult};

use ua_db::{SearchQuery, SortField, SortOrder};

use serde::Deserialize;

/// Query string of `GET /api/users/search`.
///
/// Every value arrives as raw text so malformed numbers produce the API's own
/// message instead of an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchUsersQuery {
    #[serde(rename = "startIndex")]
    pub start_index: Option<String>,
    #[serde(rename = "endIndex")]
    pub end_index: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub secondary_sort: Option<String>,
    pub secondary_order: Option<String>,
    pub group: Option<String>,
    pub search: Option<String>,
    pub main_address: Option<String>,
}

impl SearchUsersQuery {
    /// `[startIndex, endIndex)` becomes `offset`/`limit`.
    #[track_caller]
    pub fn into_search_query(self) -> ApiResult<SearchQuery> {
        let (start, end) = match (parse_index(&self.start_index), parse_index(&self.end_index)) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                return Err(ApiError::bad_request(
                    "Índice inicial ou final inválido: devem ser números.",
                ));
            }
        };
        if start < 0 || end < 0 {
            return Err(ApiError::bad_request(
                "Índice inicial ou final inválido: não podem ser negativos.",
            ));
        }
        if end <= start {
            return Err(ApiError::bad_request(
                "Intervalo inválido: O índice final deve ser maior que o índice inicial.",
            ));
        }

        let sort = match non_blank(&self.sort) {
            None => SortField::Id,
            Some(value) => SortField::from_param(value).ok_or_else(|| {
                ApiError::bad_request(format!("Campo de ordenação inválido: {}", value))
            })?,
        };

        let secondary = match non_blank(&self.secondary_sort) {
            None => None,
            Some(value) => {
                let field = SortField::from_param(value).ok_or_else(|| {
                    ApiError::bad_request(format!(
                        "Campo de ordenação secundário inválido: {}",
                        value
                    ))
                })?;
                Some((field, SortOrder::from_param(self.secondary_order.as_deref())))
            }
        };

        let group = match non_blank(&self.group) {
            None => None,
            Some(value) => Some(SortField::from_param(value).ok_or_else(|| {
                ApiError::bad_request(format!("Campo de agrupamento inválido: {}", value))
            })?),
        };

        Ok(SearchQuery {
            offset: start,
            limit: end - start,
            sort,
            order: SortOrder::from_param(self.order.as_deref()),
            secondary,
            group,
            search: non_blank(&self.search).map(String::from),
            include_main_address: self.main_address.as_deref() == Some("true"),
        })
    }
}

fn parse_index(value: &Option<String>) -> Option<i64> {
    value.as_deref()?.trim().parse().ok()
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
