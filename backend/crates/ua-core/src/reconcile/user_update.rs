use crate::{
    Address, ChangeSet, Email, NestedWrite, Telephone, UserChildren, UserSubmission, reconcile,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-collection change sets; `None` leaves the collection untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserChildChanges {
    pub emails: Option<ChangeSet<Email>>,
    pub telephones: Option<ChangeSet<Telephone>>,
    pub addresses: Option<ChangeSet<Address>>,
}

/// Reconciles every collection present in `submission` against `snapshot`.
pub fn reconcile_user_children(
    snapshot: &UserChildren,
    submission: &UserSubmission,
) -> UserChildChanges {
    UserChildChanges {
        emails: submission
            .emails
            .as_deref()
            .map(|emails| reconcile(&snapshot.emails, emails)),
        telephones: submission
            .telephones
            .as_deref()
            .map(|telephones| reconcile(&snapshot.telephones, telephones)),
        addresses: submission
            .addresses
            .as_deref()
            .map(|addresses| reconcile(&snapshot.addresses, addresses)),
    }
}

/// Body of `PATCH /api/users/{id}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserUpdatePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,

    /// Set by the server only
    #[serde(skip)]
    pub password_hash: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<NestedWrite<Email>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<NestedWrite<Telephone>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<NestedWrite<Address>>,
}

impl UserUpdatePayload {
    /// Base fields from `submission` plus the nested writes that bring
    /// `snapshot` in line with it. Collections with no changes are omitted.
    pub fn from_submission(snapshot: &UserChildren, submission: &UserSubmission) -> Self {
        let changes = reconcile_user_children(snapshot, submission);

        Self {
            name: submission.name.clone(),
            nickname: submission.nickname.clone(),
            picture: submission.picture.clone(),
            birth_date: submission.birth_date,
            cpf: submission.cpf.clone(),
            password_hash: None,
            email: Self::non_empty(changes.emails),
            telephone: Self::non_empty(changes.telephones),
            address: Self::non_empty(changes.addresses),
        }
    }

    pub fn has_child_writes(&self) -> bool {
        self.email.is_some() || self.telephone.is_some() || self.address.is_some()
    }

    fn non_empty<T>(changes: Option<ChangeSet<T>>) -> Option<NestedWrite<T>> {
        changes
            .filter(|c| !c.is_empty())
            .map(NestedWrite::from)
    }
}
