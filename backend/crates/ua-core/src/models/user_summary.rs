use crate::Address;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One row of the user search listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub nickname: Option<String>,
    pub cpf: Option<String>,
    #[serde(rename = "birth_date")]
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "updated_at")]
    pub updated_at: DateTime<Utc>,
    pub main_email: Option<String>,
    pub main_telephone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_address: Option<Address>,
}
