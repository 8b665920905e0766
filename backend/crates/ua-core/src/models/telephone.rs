use crate::{ChildRecord, MainFlag, TelephoneType};

use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

/// `+55 (11) 91234-5678`
static MASK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+(\d{2})\s\((\d{2})\)\s(\d{4,5})-(\d{4})$").expect("telephone mask pattern")
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Telephone {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub is_main: bool,
    #[serde(rename = "type", default)]
    pub telephone_type: TelephoneType,
    pub country_code: Option<i32>,
    pub state_code: Option<i32>,
    pub number: Option<i64>,
    /// Concatenation of the three numeric parts; kept in sync by [`Telephone::with_parts`].
    pub full_number: Option<String>,
}

impl Telephone {
    /// Builds a telephone from numeric parts, deriving `full_number`.
    pub fn with_parts(
        telephone_type: TelephoneType,
        country_code: Option<i32>,
        state_code: Option<i32>,
        number: Option<i64>,
        is_main: bool,
    ) -> Self {
        Self {
            id: None,
            is_main,
            telephone_type,
            country_code,
            state_code,
            number,
            full_number: Self::full_number_of(country_code, state_code, number),
        }
    }

    /// Lenient parse of a masked display string.
    ///
    /// A string that does not match the mask yields a record whose numeric
    /// fields are all `None`. Use [`Telephone::is_valid_mask`] first when the
    /// input must be rejected instead.
    pub fn from_masked(mask: &str, telephone_type: TelephoneType, is_main: bool) -> Self {
        match Self::parse_mask(mask) {
            Some((country_code, state_code, local)) => {
                let mut telephone = Self::with_parts(
                    telephone_type,
                    Some(country_code),
                    Some(state_code),
                    local.parse().ok(),
                    is_main,
                );
                // The integer part drops leading zeros; the digits keep them
                telephone.full_number =
                    Some(format!("{:02}{:02}{}", country_code, state_code, local));
                telephone
            }
            None => {
                if !mask.trim().is_empty() {
                    log::warn!(
                        "Telephone '{}' does not match the mask, numeric parts dropped",
                        mask
                    );
                }
                Self::with_parts(telephone_type, None, None, None, is_main)
            }
        }
    }

    pub fn is_valid_mask(mask: &str) -> bool {
        MASK.is_match(mask)
    }

    /// Formats the numeric parts back into `+cc (sc) nnnnn-nnnn`.
    pub fn masked(&self) -> Option<String> {
        let (country_code, state_code) = (self.country_code?, self.state_code?);
        let digits = self.local_digits()?;
        if digits.len() <= 4 {
            return None;
        }
        let (head, tail) = digits.split_at(digits.len() - 4);
        Some(format!(
            "+{:02} ({:02}) {}-{}",
            country_code, state_code, head, tail
        ))
    }

    /// Recomputes `full_number` from the numeric parts, unless the stored
    /// value already agrees with them.
    pub fn refresh_full_number(&mut self) {
        if self.stored_local_digits().is_none() {
            self.full_number =
                Self::full_number_of(self.country_code, self.state_code, self.number);
        }
    }

    /// Local number digits, leading zeros included when `full_number` has them.
    fn local_digits(&self) -> Option<String> {
        match self.stored_local_digits() {
            Some(local) => Some(local.to_string()),
            None => self.number.map(|n| n.to_string()),
        }
    }

    /// The local part of `full_number`, when it matches the numeric parts.
    fn stored_local_digits(&self) -> Option<&str> {
        let (country_code, state_code, number) =
            (self.country_code?, self.state_code?, self.number?);
        let prefix = format!("{:02}{:02}", country_code, state_code);
        let local = self.full_number.as_deref()?.strip_prefix(prefix.as_str())?;
        let consistent = !local.is_empty()
            && local.bytes().all(|b| b.is_ascii_digit())
            && local.parse::<i64>().ok() == Some(number);
        consistent.then_some(local)
    }

    fn full_number_of(
        country_code: Option<i32>,
        state_code: Option<i32>,
        number: Option<i64>,
    ) -> Option<String> {
        match (country_code, state_code, number) {
            (Some(cc), Some(sc), Some(n)) => Some(format!("{:02}{:02}{}", cc, sc, n)),
            _ => None,
        }
    }

    fn parse_mask(mask: &str) -> Option<(i32, i32, String)> {
        let captures = MASK.captures(mask)?;
        let country_code = captures.get(1)?.as_str().parse().ok()?;
        let state_code = captures.get(2)?.as_str().parse().ok()?;
        let local = format!("{}{}", captures.get(3)?.as_str(), captures.get(4)?.as_str());
        Some((country_code, state_code, local))
    }
}

impl ChildRecord for Telephone {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }
}

impl MainFlag for Telephone {
    fn is_main(&self) -> bool {
        self.is_main
    }

    fn set_is_main(&mut self, is_main: bool) {
        self.is_main = is_main;
    }
}
