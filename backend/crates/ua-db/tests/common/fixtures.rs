#![allow(dead_code)]

use ua_core::{Address, Email, NewUser, Telephone, TelephoneType};

use chrono::NaiveDate;

/// Creates a NewUser with one main record in every collection
pub fn create_test_new_user(name: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        nickname: Some(format!("{}-nick", name.to_lowercase())),
        picture: Some("avatars/test.png".to_string()),
        birth_date: NaiveDate::from_ymd_opt(1990, 5, 17),
        cpf: Some("123.456.789-09".to_string()),
        password_hash: Some("$argon2id$v=19$test".to_string()),
        emails: vec![Email::new(format!("{}@example.com", name.to_lowercase()), true)],
        telephones: vec![Telephone::from_masked(
            "+55 (11) 91234-5678",
            TelephoneType::Pessoal,
            true,
        )],
        addresses: vec![create_test_address("Avenida Paulista", true)],
    }
}

pub fn create_test_address(street: &str, is_main: bool) -> Address {
    Address {
        id: None,
        zip_code: "01310100".to_string(),
        street: street.to_string(),
        number: Some(1000),
        complement: String::new(),
        district: "Bela Vista".to_string(),
        city: "São Paulo".to_string(),
        state: "SP".to_string(),
        country: "Brasil".to_string(),
        is_main,
    }
}
