use crate::grid::HttpRowFetcher;
use crate::{CliClientResult, ClientError};

use ua_core::{User, UserIncludes, UserSubmission, UserUpdatePayload};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Url};
use serde_json::{Value, json};

pub const USERS_PATH: &str = "/api/users";
pub const USERS_SEARCH_PATH: &str = "/api/users/search";
pub const VIACEP_PROXY_PATH: &str = "/api/proxy/viacep";

/// HTTP client for the ua-server REST API
pub struct Client {
    pub base_url: String,
    http: ReqwestClient,
}

impl Client {
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    /// * `timeout` - Applied to every request
    pub fn new(base_url: &str, timeout: Duration) -> CliClientResult<Self> {
        let http = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Fetcher for a data grid backed by `search_path` on this server.
    pub fn row_fetcher(&self, search_path: &str, entity_name: &str) -> HttpRowFetcher {
        HttpRowFetcher::new(
            self.http.clone(),
            format!("{}{}", self.base_url, search_path),
            entity_name,
        )
    }

    #[track_caller]
    fn url(&self, path: &str, params: &[(String, String)]) -> CliClientResult<Url> {
        let raw = format!("{}{}", self.base_url, path);
        let parsed = if params.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, params)
        };
        parsed.map_err(|e| ClientError::Url {
            url: raw.clone(),
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http.request(method, url)
    }

    /// Sends the request and returns the JSON body.
    ///
    /// An empty success body (e.g. 204) becomes `{"ok": true}`. Non-success
    /// statuses become [`ClientError::Api`] with the server's message.
    async fn execute(&self, req: RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let body: Option<Value> = if text.trim().is_empty() {
            None
        } else {
            match serde_json::from_str(&text) {
                Ok(value) => Some(value),
                Err(e) if status.is_success() => return Err(ClientError::from_json(e)),
                Err(_) => None,
            }
        };

        if !status.is_success() {
            let error = body.as_ref().and_then(|b| b.get("error"));
            let code = error
                .and_then(|e| e.get("code"))
                .and_then(Value::as_str)
                .map(String::from)
                .unwrap_or_else(|| format!("HTTP_{}", status.as_u16()));
            let message = error
                .and_then(|e| e.get("message"))
                .or_else(|| body.as_ref().and_then(|b| b.get("message")))
                .and_then(Value::as_str)
                .map(String::from)
                .or_else(|| status.canonical_reason().map(String::from))
                .unwrap_or_else(|| format!("Erro HTTP {}", status.as_u16()));

            return Err(ClientError::api_error(status.as_u16(), code, message));
        }

        Ok(body.unwrap_or_else(|| json!({ "ok": true })))
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// `GET /api/users/search` with the given query pairs
    pub async fn search_users(&self, params: &[(String, String)]) -> CliClientResult<Value> {
        let url = self.url(USERS_SEARCH_PATH, params)?;
        self.execute(self.request(Method::GET, url)).await
    }

    pub async fn get_user(&self, id: i64, includes: UserIncludes) -> CliClientResult<Value> {
        let params = vec![
            (String::from("email"), includes.email.to_string()),
            (String::from("telephone"), includes.telephone.to_string()),
            (String::from("address"), includes.address.to_string()),
        ];
        let url = self.url(&format!("{}/{}", USERS_PATH, id), &params)?;
        self.execute(self.request(Method::GET, url)).await
    }

    /// The stored user with every collection, as the server reports it.
    pub async fn fetch_user(&self, id: i64) -> CliClientResult<User> {
        let body = self.get_user(id, UserIncludes::all()).await?;
        let data = body.get("data").cloned().unwrap_or(Value::Null);
        Ok(serde_json::from_value(data)?)
    }

    pub async fn create_user(&self, submission: &UserSubmission) -> CliClientResult<Value> {
        let url = self.url(USERS_PATH, &[])?;
        self.execute(self.request(Method::POST, url).json(submission))
            .await
    }

    /// `PUT`: the server reconciles `submission` against its own snapshot.
    pub async fn replace_user(
        &self,
        id: i64,
        submission: &UserSubmission,
    ) -> CliClientResult<Value> {
        let url = self.url(&format!("{}/{}", USERS_PATH, id), &[])?;
        self.execute(self.request(Method::PUT, url).json(submission))
            .await
    }

    /// `PATCH`: applies an already reconciled nested-write payload.
    pub async fn patch_user(
        &self,
        id: i64,
        payload: &UserUpdatePayload,
    ) -> CliClientResult<Value> {
        let url = self.url(&format!("{}/{}", USERS_PATH, id), &[])?;
        self.execute(self.request(Method::PATCH, url).json(payload))
            .await
    }

    pub async fn delete_user(&self, id: i64) -> CliClientResult<Value> {
        let url = self.url(&format!("{}/{}", USERS_PATH, id), &[])?;
        self.execute(self.request(Method::DELETE, url)).await
    }

    // =========================================================================
    // CEP
    // =========================================================================

    /// The proxy always answers 200; branch on the `ok` field.
    pub async fn lookup_cep(&self, cep: &str) -> CliClientResult<Value> {
        let url = self.url(&format!("{}/{}", VIACEP_PROXY_PATH, cep), &[])?;
        self.execute(self.request(Method::GET, url)).await
    }
}
