use crate::{Address, Email, Telephone};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub nickname: Option<String>,
    /// Absolute URL or a path relative to the uploads directory
    pub picture: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub cpf: Option<String>,

    #[serde(skip)]
    pub password_hash: Option<String>,

    // Children, loaded on demand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<Email>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephones: Option<Vec<Telephone>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<Address>>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Child collections as a reconciliation snapshot; unloaded ones are empty.
    pub fn children(&self) -> UserChildren {
        UserChildren {
            emails: self.emails.clone().unwrap_or_default(),
            telephones: self.telephones.clone().unwrap_or_default(),
            addresses: self.addresses.clone().unwrap_or_default(),
        }
    }
}

/// Which child collections to load alongside a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct UserIncludes {
    #[serde(default)]
    pub email: bool,
    #[serde(default)]
    pub telephone: bool,
    #[serde(default)]
    pub address: bool,
}

impl UserIncludes {
    pub fn all() -> Self {
        Self {
            email: true,
            telephone: true,
            address: true,
        }
    }
}

/// Persisted child collections of one user, read right before an update.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserChildren {
    pub emails: Vec<Email>,
    pub telephones: Vec<Telephone>,
    pub addresses: Vec<Address>,
}

/// A user ready to be inserted, password already hashed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub nickname: Option<String>,
    pub picture: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub cpf: Option<String>,
    pub password_hash: Option<String>,
    pub emails: Vec<Email>,
    pub telephones: Vec<Telephone>,
    pub addresses: Vec<Address>,
}
