use crate::grid::SortDirection;

/// Query sent to the search endpoint for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub start_index: usize,
    /// Exclusive
    pub end_index: usize,
    pub sort: String,
    pub order: SortDirection,
    /// Grid view only
    pub group: Option<String>,
    /// Trimmed, never empty
    pub search: Option<String>,
    pub extra: Vec<(String, String)>,
}

impl SearchParams {
    /// Indices saturate instead of overflowing on absurd pages.
    pub fn for_page(page: usize, rows_per_page: usize) -> Self {
        let start_index = page.saturating_mul(rows_per_page);
        Self {
            start_index,
            end_index: start_index.saturating_add(rows_per_page),
            sort: String::from("id"),
            order: SortDirection::Asc,
            group: None,
            search: None,
            extra: Vec::new(),
        }
    }

    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            (String::from("startIndex"), self.start_index.to_string()),
            (String::from("endIndex"), self.end_index.to_string()),
            (String::from("sort"), self.sort.clone()),
            (String::from("order"), String::from(self.order.as_str())),
        ];
        if let Some(group) = &self.group {
            pairs.push((String::from("group"), group.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push((String::from("search"), search.clone()));
        }
        pairs.extend(self.extra.iter().cloned());
        pairs
    }
}
