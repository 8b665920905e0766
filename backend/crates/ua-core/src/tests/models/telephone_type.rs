use crate::TelephoneType;

use std::str::FromStr;

#[test]
fn test_telephone_type_as_str() {
    assert_eq!(TelephoneType::Pessoal.as_str(), "Pessoal");
    assert_eq!(TelephoneType::Profissional.as_str(), "Profissional");
}

#[test]
fn test_telephone_type_from_str_ignores_case() {
    assert_eq!(
        TelephoneType::from_str("pessoal").unwrap(),
        TelephoneType::Pessoal
    );
    assert_eq!(
        TelephoneType::from_str("PROFISSIONAL").unwrap(),
        TelephoneType::Profissional
    );
    assert!(TelephoneType::from_str("Comercial").is_err());
}

#[test]
fn test_telephone_type_default() {
    assert_eq!(TelephoneType::default(), TelephoneType::Pessoal);
}
