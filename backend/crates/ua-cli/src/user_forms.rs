//! Create and update flows driven by a user form file.

use crate::{CliClientResult, Client, ClientError};

use ua_core::{
    SubmissionMode, UserForm, UserMapper, UserUpdatePayload, UserValidator, main_index, set_main,
};

use std::path::Path;

use serde_json::Value;

pub fn read_form(path: &Path) -> CliClientResult<UserForm> {
    let contents = std::fs::read_to_string(path).map_err(|e| ClientError::io(path, e))?;
    Ok(serde_json::from_str(&contents)?)
}

/// Position of the record to flag as main in each collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MainChoices {
    pub email: Option<usize>,
    pub telephone: Option<usize>,
    pub address: Option<usize>,
}

/// Flags the chosen records as main and clears the flag on their siblings.
pub fn choose_main(form: &mut UserForm, choices: MainChoices) -> CliClientResult<()> {
    if let Some(index) = choices.email {
        set_main(&mut form.emails, index)?;
    }
    if let Some(index) = choices.telephone {
        set_main(&mut form.telephones, index)?;
    }
    if let Some(index) = choices.address {
        set_main(&mut form.addresses, index)?;
    }

    log::debug!(
        "Main records: e-mail={:?}, telephone={:?}, address={:?}",
        main_index(&form.emails),
        main_index(&form.telephones),
        main_index(&form.addresses)
    );

    Ok(())
}

/// Validates the form and posts it as a new user.
pub async fn create_from_form(
    client: &Client,
    form: &UserForm,
    mapper: &UserMapper,
    validator: &UserValidator,
) -> CliClientResult<Value> {
    validator.validate_form(form, SubmissionMode::Create)?;
    let submission = mapper.form_to_submission(form);
    client.create_user(&submission).await
}

/// Diffs the form against the server's current state and sends only the
/// changes as one nested-write `PATCH`.
///
/// A new password cannot travel in the nested-write payload, so forms that
/// carry one are sent whole with `PUT` and reconciled by the server.
pub async fn update_from_form(
    client: &Client,
    id: i64,
    form: &UserForm,
    mapper: &UserMapper,
    validator: &UserValidator,
) -> CliClientResult<Value> {
    validator.validate_form(form, SubmissionMode::Update)?;
    let submission = mapper.form_to_submission(form);

    if submission.password.is_some() {
        log::info!("Form for user {} changes the password, sending full state", id);
        return client.replace_user(id, &submission).await;
    }

    let snapshot = client.fetch_user(id).await?.children();
    let payload = UserUpdatePayload::from_submission(&snapshot, &submission);

    log::info!(
        "User {} changes: e-mail={}, telephone={}, address={}",
        id,
        payload.email.is_some(),
        payload.telephone.is_some(),
        payload.address.is_some()
    );

    client.patch_user(id, &payload).await
}

/// Stored user mapped back into an editable form.
pub async fn fetch_form(client: &Client, id: i64, mapper: &UserMapper) -> CliClientResult<UserForm> {
    let user = client.fetch_user(id).await?;
    Ok(mapper.user_to_form(&user))
}
