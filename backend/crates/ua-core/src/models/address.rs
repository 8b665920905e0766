use crate::{ChildRecord, MainFlag};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Digits only, without the mask
    pub zip_code: String,
    pub street: String,
    pub number: Option<i32>,
    #[serde(default)]
    pub complement: String,
    pub district: String,
    pub city: String,
    pub state: String,
    pub country: String,
    #[serde(default)]
    pub is_main: bool,
}

impl ChildRecord for Address {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }
}

impl MainFlag for Address {
    fn is_main(&self) -> bool {
        self.is_main
    }

    fn set_is_main(&mut self, is_main: bool) {
        self.is_main = is_main;
    }
}
