use crate::{ChildRecord, MainFlag};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Email {
    /// `None` until persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub email: String,
    #[serde(default)]
    pub is_main: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<DateTime<Utc>>,
}

impl Email {
    pub fn new(email: impl Into<String>, is_main: bool) -> Self {
        Self {
            id: None,
            email: email.into(),
            is_main,
            email_verified: None,
        }
    }
}

impl ChildRecord for Email {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }
}

impl MainFlag for Email {
    fn is_main(&self) -> bool {
        self.is_main
    }

    fn set_is_main(&mut self, is_main: bool) {
        self.is_main = is_main;
    }
}
