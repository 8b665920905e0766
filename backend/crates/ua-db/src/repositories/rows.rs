//! Row to model conversions shared by the repository queries.

use crate::{DbError, Result as DbErrorResult};

use ua_core::{Address, Email, Telephone, TelephoneType, User, UserSummary};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use error_location::ErrorLocation;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

#[track_caller]
pub(crate) fn timestamp(table: &'static str, seconds: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0).ok_or_else(|| DbError::CorruptRow {
        table,
        message: format!("invalid timestamp {}", seconds),
        location: ErrorLocation::from(Location::caller()),
    })
}

pub(crate) fn user(row: &SqliteRow) -> DbErrorResult<User> {
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        nickname: row.try_get("nickname")?,
        picture: row.try_get("picture")?,
        birth_date: row.try_get::<Option<NaiveDate>, _>("birth_date")?,
        cpf: row.try_get("cpf")?,
        password_hash: row.try_get("password_hash")?,
        emails: None,
        telephones: None,
        addresses: None,
        created_at: timestamp("users", row.try_get("created_at")?)?,
        updated_at: timestamp("users", row.try_get("updated_at")?)?,
    })
}

pub(crate) fn email(row: &SqliteRow) -> DbErrorResult<Email> {
    let verified: Option<i64> = row.try_get("email_verified")?;

    Ok(Email {
        id: Some(row.try_get("id")?),
        email: row.try_get("email")?,
        is_main: row.try_get("is_main")?,
        email_verified: verified
            .map(|seconds| timestamp("user_emails", seconds))
            .transpose()?,
    })
}

pub(crate) fn telephone(row: &SqliteRow) -> DbErrorResult<Telephone> {
    let raw_type: String = row.try_get("type")?;
    let telephone_type = TelephoneType::from_str(&raw_type).map_err(|e| DbError::CorruptRow {
        table: "user_telephones",
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(Telephone {
        id: Some(row.try_get("id")?),
        is_main: row.try_get("is_main")?,
        telephone_type,
        country_code: row.try_get("country_code")?,
        state_code: row.try_get("state_code")?,
        number: row.try_get("number")?,
        full_number: row.try_get("full_number")?,
    })
}

pub(crate) fn address(row: &SqliteRow) -> DbErrorResult<Address> {
    Ok(Address {
        id: Some(row.try_get("id")?),
        zip_code: row.try_get("zip_code")?,
        street: row.try_get("street")?,
        number: row.try_get("number")?,
        complement: row.try_get("complement")?,
        district: row.try_get("district")?,
        city: row.try_get("city")?,
        state: row.try_get("state")?,
        country: row.try_get("country")?,
        is_main: row.try_get("is_main")?,
    })
}

pub(crate) fn user_summary(row: &SqliteRow) -> DbErrorResult<UserSummary> {
    Ok(UserSummary {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        nickname: row.try_get("nickname")?,
        cpf: row.try_get("cpf")?,
        birth_date: row.try_get::<Option<NaiveDate>, _>("birth_date")?,
        updated_at: timestamp("users", row.try_get("updated_at")?)?,
        main_email: row.try_get("main_email")?,
        main_telephone: row.try_get("main_telephone")?,
        main_address: None,
    })
}
