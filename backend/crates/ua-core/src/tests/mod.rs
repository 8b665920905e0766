mod models;

use crate::{Address, Email, Telephone, TelephoneType};

pub(crate) fn email(id: Option<i64>, address: &str, is_main: bool) -> Email {
    Email {
        id,
        ..Email::new(address, is_main)
    }
}

pub(crate) fn telephone(id: Option<i64>, mask: &str, is_main: bool) -> Telephone {
    let mut telephone = Telephone::from_masked(mask, TelephoneType::Pessoal, is_main);
    telephone.id = id;
    telephone
}

pub(crate) fn address(id: Option<i64>, street: &str, is_main: bool) -> Address {
    Address {
        id,
        zip_code: String::from("01310100"),
        street: street.to_string(),
        number: Some(1000),
        complement: String::new(),
        district: String::from("Bela Vista"),
        city: String::from("São Paulo"),
        state: String::from("SP"),
        country: String::from("Brasil"),
        is_main,
    }
}
