pub mod cep;
pub mod error;
pub mod mapper;
pub mod models;
pub mod password;
pub mod reconcile;
pub mod validation;

pub use cep::normalize_cep;
pub use error::{CoreError, FieldError, Result};
pub use error_location::ErrorLocation;
pub use mapper::user_form::{AddressForm, EmailForm, TelephoneForm, UserForm};
pub use mapper::user_mapper::UserMapper;
pub use models::address::Address;
pub use models::email::Email;
pub use models::main_flag::{MainFlag, main_index, set_main};
pub use models::telephone::Telephone;
pub use models::telephone_type::TelephoneType;
pub use models::user::{NewUser, User, UserChildren, UserIncludes};
pub use models::user_submission::UserSubmission;
pub use models::user_summary::UserSummary;
pub use reconcile::change_set::{ChangeSet, RecordUpdate};
pub use reconcile::child_record::ChildRecord;
pub use reconcile::nested_write::{DeleteMany, IdFilter, NestedUpdate, NestedWrite, WhereId};
pub use reconcile::reconciler::reconcile;
pub use reconcile::user_update::{UserChildChanges, UserUpdatePayload, reconcile_user_children};
pub use validation::user_validator::{SubmissionMode, UserValidator, ValidationLimits};

#[cfg(test)]
mod tests;
