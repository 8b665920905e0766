use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Length of a Brazilian postal code (CEP) once the mask is removed.
pub const CEP_DIGITS: usize = 8;

/// Strips every non-digit and requires exactly eight digits.
#[track_caller]
pub fn normalize_cep(raw: &str) -> CoreErrorResult<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    if digits.len() != CEP_DIGITS {
        return Err(CoreError::InvalidCep {
            value: raw.to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(digits)
}
