//! Conversion between the stored user shape and the form shape.

use crate::{
    Address, AddressForm, Email, EmailForm, Telephone, TelephoneForm, User, UserForm,
    UserSubmission,
};

use chrono::NaiveDate;

const DEFAULT_COUNTRY: &str = "Brasil";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Maps users to forms and forms to submissions.
///
/// Relative picture paths are resolved against the uploads location.
#[derive(Debug, Clone)]
pub struct UserMapper {
    uploads_base_url: String,
    uploads_path: String,
}

impl UserMapper {
    pub fn new(uploads_base_url: &str, uploads_path: &str) -> Self {
        Self {
            uploads_base_url: uploads_base_url.trim_end_matches('/').to_string(),
            uploads_path: uploads_path.trim_matches('/').to_string(),
        }
    }

    /// Stored user to an editable form.
    pub fn user_to_form(&self, user: &User) -> UserForm {
        UserForm {
            id: Some(user.id),
            name: user.name.clone(),
            nickname: user.nickname.clone().unwrap_or_default(),
            picture: user
                .picture
                .as_deref()
                .map(|p| self.resolve_picture(p))
                .unwrap_or_default(),
            birth_date: user
                .birth_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            cpf: user.cpf.clone().unwrap_or_default(),
            password: String::new(),
            password_confirmation: String::new(),
            emails: user
                .emails
                .iter()
                .flatten()
                .map(|e| EmailForm {
                    id: e.id,
                    email: e.email.clone(),
                    is_main: e.is_main,
                    email_verified: e.email_verified,
                })
                .collect(),
            telephones: user
                .telephones
                .iter()
                .flatten()
                .map(|t| TelephoneForm {
                    id: t.id,
                    is_main: t.is_main,
                    telephone_type: t.telephone_type.to_string(),
                    number: t.masked().unwrap_or_default(),
                })
                .collect(),
            addresses: user
                .addresses
                .iter()
                .flatten()
                .map(|a| AddressForm {
                    id: a.id,
                    zip_code: format!("{:0>8}", a.zip_code),
                    street: a.street.clone(),
                    number: a.number.map(|n| n.to_string()).unwrap_or_default(),
                    complement: a.complement.clone(),
                    district: a.district.clone(),
                    city: a.city.clone(),
                    state: a.state.clone(),
                    country: if a.country.trim().is_empty() {
                        DEFAULT_COUNTRY.to_string()
                    } else {
                        a.country.clone()
                    },
                    is_main: a.is_main,
                })
                .collect(),
        }
    }

    /// Form to the desired state sent to the server.
    ///
    /// Telephones are parsed leniently; run
    /// [`crate::UserValidator::validate_form`] first to reject bad masks.
    pub fn form_to_submission(&self, form: &UserForm) -> UserSubmission {
        UserSubmission {
            name: Some(form.name.trim().to_string()),
            nickname: non_blank(&form.nickname),
            picture: non_blank(&form.picture),
            birth_date: NaiveDate::parse_from_str(form.birth_date.trim(), DATE_FORMAT).ok(),
            cpf: non_blank(&form.cpf),
            password: non_blank(&form.password),
            password_confirmation: non_blank(&form.password_confirmation),
            emails: Some(
                form.emails
                    .iter()
                    .map(|e| Email {
                        id: e.id,
                        email: e.email.trim().to_string(),
                        is_main: e.is_main,
                        email_verified: e.email_verified,
                    })
                    .collect(),
            ),
            telephones: Some(
                form.telephones
                    .iter()
                    .map(|t| {
                        let telephone_type = t.telephone_type.parse().unwrap_or_default();
                        let mut telephone =
                            Telephone::from_masked(&t.number, telephone_type, t.is_main);
                        telephone.id = t.id;
                        telephone
                    })
                    .collect(),
            ),
            addresses: Some(
                form.addresses
                    .iter()
                    .map(|a| Address {
                        id: a.id,
                        zip_code: digits(&a.zip_code),
                        street: a.street.trim().to_string(),
                        number: digits(&a.number).parse().ok(),
                        complement: a.complement.trim().to_string(),
                        district: a.district.trim().to_string(),
                        city: a.city.trim().to_string(),
                        state: a.state.trim().to_string(),
                        country: a.country.trim().to_string(),
                        is_main: a.is_main,
                    })
                    .collect(),
            ),
        }
    }

    /// Absolute `http(s)` URLs are kept; anything else is joined to the
    /// uploads location.
    pub fn resolve_picture(&self, picture: &str) -> String {
        if picture.starts_with("http://") || picture.starts_with("https://") {
            return picture.to_string();
        }

        let relative = picture.trim_start_matches('/');
        if self.uploads_path.is_empty() {
            format!("{}/{}", self.uploads_base_url, relative)
        } else {
            format!("{}/{}/{}", self.uploads_base_url, self.uploads_path, relative)
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}
