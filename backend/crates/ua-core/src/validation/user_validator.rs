use crate::{
    Address, AddressForm, CoreError, Email, EmailForm, FieldError, MainFlag,
    Result as CoreErrorResult, Telephone, TelephoneForm, TelephoneType, UserForm, UserSubmission,
};

use std::collections::HashSet;
use std::panic::Location;
use std::sync::LazyLock;

use chrono::NaiveDate;
use error_location::ErrorLocation;
use regex_lite::Regex;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

static BRAZILIAN_TELEPHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+55 \(\d{2}\) \d{4,5}-\d{4}$").expect("brazilian telephone pattern")
});

const PASSWORD_SPECIALS: &str = "@$!%*?&";
const CPF_DIGITS: usize = 11;
const ZIP_DIGITS: usize = 8;

/// Whether the submission creates a user or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionMode {
    Create,
    Update,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationLimits {
    pub max_name_length: usize,
    pub min_password_length: usize,
    pub max_collection_size: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_name_length: 200,
            min_password_length: 8,
            max_collection_size: 20,
        }
    }
}

/// Validates user forms (client side) and submissions (server side).
///
/// Every rule runs; failures are returned together as
/// [`CoreError::Fields`].
#[derive(Debug, Clone, Default)]
pub struct UserValidator {
    limits: ValidationLimits,
}

impl UserValidator {
    pub fn new(limits: ValidationLimits) -> Self {
        Self { limits }
    }

    /// Validate a form as typed, including telephone masks.
    #[track_caller]
    pub fn validate_form(&self, form: &UserForm, mode: SubmissionMode) -> CoreErrorResult<()> {
        let mut errors = Vec::new();

        self.check_name(&mut errors, Some(form.name.as_str()), mode);
        if form.birth_date.trim().is_empty() {
            errors.push(FieldError::new("birth_date", "Data de nascimento é obrigatória"));
        } else if NaiveDate::parse_from_str(form.birth_date.trim(), "%Y-%m-%d").is_err() {
            errors.push(FieldError::new("birth_date", "Data de nascimento inválida"));
        }
        self.check_cpf(&mut errors, Some(form.cpf.as_str()), mode);
        self.check_password(
            &mut errors,
            Some(form.password.as_str()).filter(|p| !p.is_empty()),
            Some(form.password_confirmation.as_str()).filter(|p| !p.is_empty()),
            mode,
        );

        self.check_collection(
            &mut errors,
            "emails",
            &form.emails,
            |e: &EmailForm| e.id,
            "e-mail",
        );
        for (i, email) in form.emails.iter().enumerate() {
            check_email(&mut errors, i, &email.email);
        }

        self.check_collection(
            &mut errors,
            "telephones",
            &form.telephones,
            |t: &TelephoneForm| t.id,
            "telefone",
        );
        for (i, telephone) in form.telephones.iter().enumerate() {
            let field = format!("telephones.{}.number", i);
            if telephone.number.trim().is_empty() {
                errors.push(FieldError::new(field, "Telefone é obrigatório"));
            } else if !BRAZILIAN_TELEPHONE.is_match(&telephone.number) {
                errors.push(FieldError::new(field, "Formato de telefone inválido"));
            }
            if telephone.telephone_type.parse::<TelephoneType>().is_err() {
                errors.push(FieldError::new(
                    format!("telephones.{}.type", i),
                    "Tipo deve ser Pessoal ou Profissional",
                ));
            }
        }

        self.check_collection(
            &mut errors,
            "addresses",
            &form.addresses,
            |a: &AddressForm| a.id,
            "endereço",
        );
        for (i, address) in form.addresses.iter().enumerate() {
            check_zip(&mut errors, i, &address.zip_code);
            if address.number.trim().is_empty() {
                errors.push(FieldError::new(
                    format!("addresses.{}.number", i),
                    "Número é obrigatório",
                ));
            } else if address.number.trim().parse::<i32>().is_err() {
                errors.push(FieldError::new(
                    format!("addresses.{}.number", i),
                    "Número inválido",
                ));
            }
            check_address_text(
                &mut errors,
                i,
                [
                    ("street", &address.street, "Rua é obrigatória"),
                    ("district", &address.district, "Bairro é obrigatório"),
                    ("city", &address.city, "Cidade é obrigatória"),
                    ("state", &address.state, "Estado é obrigatório"),
                    ("country", &address.country, "País é obrigatório"),
                ],
            );
        }

        finish(errors)
    }

    /// Validate a typed submission.
    ///
    /// In update mode absent fields and collections are skipped. A telephone
    /// whose numeric parts are missing is rejected instead of being stored
    /// with null parts.
    #[track_caller]
    pub fn validate_submission(
        &self,
        submission: &UserSubmission,
        mode: SubmissionMode,
    ) -> CoreErrorResult<()> {
        let mut errors = Vec::new();

        self.check_name(&mut errors, submission.name.as_deref(), mode);
        if mode == SubmissionMode::Create && submission.birth_date.is_none() {
            errors.push(FieldError::new("birth_date", "Data de nascimento é obrigatória"));
        }
        self.check_cpf(&mut errors, submission.cpf.as_deref(), mode);
        self.check_password(
            &mut errors,
            submission.password.as_deref(),
            submission.password_confirmation.as_deref(),
            mode,
        );

        match &submission.emails {
            Some(emails) => {
                self.check_collection(
                    &mut errors,
                    "emails",
                    emails,
                    |e: &Email| e.id,
                    "e-mail",
                );
                for (i, email) in emails.iter().enumerate() {
                    check_email(&mut errors, i, &email.email);
                }
            }
            None => require_on_create(&mut errors, mode, "emails", "e-mail"),
        }

        match &submission.telephones {
            Some(telephones) => {
                self.check_collection(
                    &mut errors,
                    "telephones",
                    telephones,
                    |t: &Telephone| t.id,
                    "telefone",
                );
                for (i, telephone) in telephones.iter().enumerate() {
                    if telephone.country_code.is_none()
                        || telephone.state_code.is_none()
                        || telephone.number.is_none()
                    {
                        errors.push(FieldError::new(
                            format!("telephones.{}.number", i),
                            "Formato de telefone inválido",
                        ));
                    }
                }
            }
            None => require_on_create(&mut errors, mode, "telephones", "telefone"),
        }

        match &submission.addresses {
            Some(addresses) => {
                self.check_collection(
                    &mut errors,
                    "addresses",
                    addresses,
                    |a: &Address| a.id,
                    "endereço",
                );
                for (i, address) in addresses.iter().enumerate() {
                    check_zip(&mut errors, i, &address.zip_code);
                    if address.number.is_none() {
                        errors.push(FieldError::new(
                            format!("addresses.{}.number", i),
                            "Número é obrigatório",
                        ));
                    }
                    check_address_text(
                        &mut errors,
                        i,
                        [
                            ("street", &address.street, "Rua é obrigatória"),
                            ("district", &address.district, "Bairro é obrigatório"),
                            ("city", &address.city, "Cidade é obrigatória"),
                            ("state", &address.state, "Estado é obrigatório"),
                            ("country", &address.country, "País é obrigatório"),
                        ],
                    );
                }
            }
            None => require_on_create(&mut errors, mode, "addresses", "endereço"),
        }

        finish(errors)
    }

    fn check_name(&self, errors: &mut Vec<FieldError>, name: Option<&str>, mode: SubmissionMode) {
        match name.map(str::trim) {
            Some("") => errors.push(FieldError::new("name", "Nome é obrigatório")),
            None if mode == SubmissionMode::Create => {
                errors.push(FieldError::new("name", "Nome é obrigatório"))
            }
            Some(name) if name.chars().count() > self.limits.max_name_length => {
                errors.push(FieldError::new(
                    "name",
                    format!(
                        "Nome deve ter no máximo {} caracteres",
                        self.limits.max_name_length
                    ),
                ))
            }
            _ => {}
        }
    }

    fn check_cpf(&self, errors: &mut Vec<FieldError>, cpf: Option<&str>, mode: SubmissionMode) {
        let Some(cpf) = cpf.map(str::trim) else {
            if mode == SubmissionMode::Create {
                errors.push(FieldError::new("cpf", "CPF é obrigatório"));
            }
            return;
        };

        if cpf.is_empty() {
            errors.push(FieldError::new("cpf", "CPF é obrigatório"));
            return;
        }

        let well_formed = cpf
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '-');
        let digit_count = cpf.chars().filter(char::is_ascii_digit).count();
        if !well_formed || digit_count != CPF_DIGITS {
            errors.push(FieldError::new("cpf", "CPF inválido"));
        }
    }

    fn check_password(
        &self,
        errors: &mut Vec<FieldError>,
        password: Option<&str>,
        confirmation: Option<&str>,
        mode: SubmissionMode,
    ) {
        let Some(password) = password else {
            if mode == SubmissionMode::Create {
                errors.push(FieldError::new("password", "Senha é obrigatória"));
            }
            return;
        };

        if password.chars().count() < self.limits.min_password_length {
            errors.push(FieldError::new(
                "password",
                format!(
                    "Senha deve ter pelo menos {} caracteres",
                    self.limits.min_password_length
                ),
            ));
        }

        let strong = password.chars().any(|c| c.is_ascii_lowercase())
            && password.chars().any(|c| c.is_ascii_uppercase())
            && password.chars().any(|c| c.is_ascii_digit())
            && password.chars().any(|c| PASSWORD_SPECIALS.contains(c));
        if !strong {
            errors.push(FieldError::new(
                "password",
                "Senha deve conter pelo menos uma letra maiúscula, uma minúscula, um número e um caractere especial",
            ));
        }

        match confirmation {
            None => errors.push(FieldError::new(
                "password_confirmation",
                "Confirmação de senha é obrigatória",
            )),
            Some(confirmation) if confirmation != password => errors.push(FieldError::new(
                "password_confirmation",
                "As senhas devem coincidir",
            )),
            _ => {}
        }
    }

    /// Size bounds, exactly one main record and unique ids.
    fn check_collection<T: MainFlag>(
        &self,
        errors: &mut Vec<FieldError>,
        field: &str,
        records: &[T],
        id_of: impl Fn(&T) -> Option<i64>,
        noun: &str,
    ) {
        if records.is_empty() {
            errors.push(FieldError::new(
                field,
                format!("Pelo menos um {} é necessário", noun),
            ));
            return;
        }

        if records.len() > self.limits.max_collection_size {
            errors.push(FieldError::new(
                field,
                format!(
                    "No máximo {} registros de {} são permitidos",
                    self.limits.max_collection_size, noun
                ),
            ));
        }

        match records.iter().filter(|r| r.is_main()).count() {
            0 => errors.push(FieldError::new(
                field,
                format!("Pelo menos um {} deve ser marcado como principal", noun),
            )),
            1 => {}
            _ => errors.push(FieldError::new(
                field,
                format!("Apenas um {} pode ser marcado como principal", noun),
            )),
        }

        let mut seen = HashSet::new();
        for (i, record) in records.iter().enumerate() {
            if let Some(id) = id_of(record)
                && !seen.insert(id)
            {
                errors.push(FieldError::new(
                    format!("{}.{}.id", field, i),
                    format!("Registro {} duplicado", id),
                ));
            }
        }
    }
}

fn require_on_create(errors: &mut Vec<FieldError>, mode: SubmissionMode, field: &str, noun: &str) {
    if mode == SubmissionMode::Create {
        errors.push(FieldError::new(
            field,
            format!("Pelo menos um {} é necessário", noun),
        ));
    }
}

fn check_email(errors: &mut Vec<FieldError>, index: usize, email: &str) {
    let field = format!("emails.{}.email", index);
    if email.trim().is_empty() {
        errors.push(FieldError::new(field, "E-mail é obrigatório"));
    } else if !EMAIL.is_match(email.trim()) {
        errors.push(FieldError::new(field, "E-mail inválido"));
    }
}

fn check_zip(errors: &mut Vec<FieldError>, index: usize, zip_code: &str) {
    let field = format!("addresses.{}.zip_code", index);
    let digits = zip_code.chars().filter(char::is_ascii_digit).count();
    if zip_code.trim().is_empty() {
        errors.push(FieldError::new(field, "CEP é obrigatório"));
    } else if digits != ZIP_DIGITS {
        errors.push(FieldError::new(field, "CEP deve ter 8 dígitos"));
    }
}

fn check_address_text<const N: usize>(
    errors: &mut Vec<FieldError>,
    index: usize,
    fields: [(&str, &String, &str); N],
) {
    for (name, value, message) in fields {
        if value.trim().is_empty() {
            errors.push(FieldError::new(
                format!("addresses.{}.{}", index, name),
                message,
            ));
        }
    }
}

#[track_caller]
fn finish(errors: Vec<FieldError>) -> CoreErrorResult<()> {
    if errors.is_empty() {
        return Ok(());
    }

    Err(CoreError::Fields {
        errors,
        location: ErrorLocation::from(Location::caller()),
    })
}
