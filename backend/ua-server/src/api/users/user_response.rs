use ua_core::{User, UserSummary};

use serde::Serialize;

/// Single user response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub ok: bool,
    pub message: String,
    pub data: User,
}

impl UserResponse {
    pub fn new(message: &str, data: User) -> Self {
        Self {
            ok: true,
            message: message.to_string(),
            data,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMeta {
    pub total_count: i64,
}

/// One page of the user listing
#[derive(Debug, Serialize)]
pub struct SearchUsersResponse {
    pub ok: bool,
    pub message: String,
    pub data: Vec<UserSummary>,
    pub meta: SearchMeta,
}
