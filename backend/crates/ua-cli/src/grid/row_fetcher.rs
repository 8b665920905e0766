use crate::grid::search_response::invalid_format_message;
use crate::grid::{GridError, GridResult, SearchParams, SearchResult, parse_search_response};

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Url};
use serde_json::Value;

/// Source of grid pages.
#[async_trait]
pub trait RowFetcher: Send + Sync {
    async fn fetch(&self, params: &SearchParams) -> GridResult<SearchResult>;
}

/// Fetches pages from a search endpoint over HTTP.
pub struct HttpRowFetcher {
    http: ReqwestClient,
    url: String,
    entity_name: String,
}

impl HttpRowFetcher {
    pub fn new(http: ReqwestClient, url: impl Into<String>, entity_name: &str) -> Self {
        Self {
            http,
            url: url.into(),
            entity_name: entity_name.to_string(),
        }
    }

    fn fetch_error(&self, detail: impl AsRef<str>) -> GridError {
        GridError::fetch(format!(
            "Erro ao buscar {}: {}",
            self.entity_name,
            detail.as_ref()
        ))
    }
}

#[async_trait]
impl RowFetcher for HttpRowFetcher {
    async fn fetch(&self, params: &SearchParams) -> GridResult<SearchResult> {
        let url = Url::parse_with_params(&self.url, params.to_query_pairs())
            .map_err(|e| self.fetch_error(e.to_string()))?;

        log::debug!("Fetching {} from {}", self.entity_name, url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.fetch_error(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| self.fetch_error(e.to_string()))?;
        let body = serde_json::from_str::<Value>(&text).ok();

        if !status.is_success() {
            let detail = body
                .as_ref()
                .and_then(|b| b.get("message"))
                .and_then(Value::as_str)
                .filter(|m| !m.trim().is_empty())
                .map(String::from)
                .or_else(|| status.canonical_reason().map(String::from))
                .unwrap_or_else(|| format!("Erro HTTP {}", status.as_u16()));
            return Err(self.fetch_error(detail));
        }

        match body {
            Some(body) => parse_search_response(&self.entity_name, &body),
            None => Err(GridError::invalid_response(invalid_format_message(
                &self.entity_name,
            ))),
        }
    }
}
