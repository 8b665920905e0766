use crate::{MainFlag, TelephoneType};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User as edited in a form: every value kept as typed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub nickname: String,
    pub picture: String,
    /// `YYYY-MM-DD`
    pub birth_date: String,
    pub cpf: String,
    pub password: String,
    pub password_confirmation: String,
    pub emails: Vec<EmailForm>,
    pub telephones: Vec<TelephoneForm>,
    pub addresses: Vec<AddressForm>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub email: String,
    pub is_main: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelephoneForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub is_main: bool,
    #[serde(rename = "type")]
    pub telephone_type: String,
    /// Masked, e.g. `+55 (11) 91234-5678`
    pub number: String,
}

impl Default for TelephoneForm {
    fn default() -> Self {
        Self {
            id: None,
            is_main: false,
            telephone_type: TelephoneType::default().to_string(),
            number: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub zip_code: String,
    pub street: String,
    pub number: String,
    pub complement: String,
    pub district: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub is_main: bool,
}

impl MainFlag for EmailForm {
    fn is_main(&self) -> bool {
        self.is_main
    }

    fn set_is_main(&mut self, is_main: bool) {
        self.is_main = is_main;
    }
}

impl MainFlag for TelephoneForm {
    fn is_main(&self) -> bool {
        self.is_main
    }

    fn set_is_main(&mut self, is_main: bool) {
        self.is_main = is_main;
    }
}

impl MainFlag for AddressForm {
    fn is_main(&self) -> bool {
        self.is_main
    }

    fn set_is_main(&mut self, is_main: bool) {
        self.is_main = is_main;
    }
}
