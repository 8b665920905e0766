//! User REST API handlers

use crate::app_state::AppState;
use crate::{
    ApiError, ApiResult, SearchMeta, SearchUsersQuery, SearchUsersResponse, UserIncludesQuery,
    UserResponse,
};

use ua_core::password::hash_password;
use ua_core::{
    FieldError, NestedWrite, NewUser, SubmissionMode, Telephone, UserIncludes, UserSubmission,
    UserUpdatePayload,
};
use ua_db::UserRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use error_location::ErrorLocation;

const SEARCH_OK: &str = "Busca efetuada com sucesso!";
const USER_FOUND: &str = "Usuário encontrado!";
const USER_CREATED: &str = "Usuário cadastrado com sucesso!";
const USER_UPDATED: &str = "Usuário atualizado com sucesso";
const USER_NOT_FOUND: &str = "Usuário não encontrado";
const INVALID_TELEPHONE: &str = "Formato de telefone inválido";

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/users/search
///
/// One page of users, ordered by group, sort and secondary sort
pub async fn search_users(
    State(state): State<AppState>,
    Query(params): Query<SearchUsersQuery>,
) -> ApiResult<Json<SearchUsersResponse>> {
    let query = params.into_search_query()?;

    let repo = UserRepository::new(state.pool.clone());
    let page = repo.search(&query).await?;

    log::debug!(
        "Search offset={} limit={} returned {} of {} user(s)",
        query.offset,
        query.limit,
        page.rows.len(),
        page.total_count
    );

    Ok(Json(SearchUsersResponse {
        ok: true,
        message: SEARCH_OK.to_string(),
        data: page.rows,
        meta: SearchMeta {
            total_count: page.total_count,
        },
    }))
}

/// GET /api/users/{id}
///
/// Child collections are loaded only when requested
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(includes): Query<UserIncludesQuery>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = parse_user_id(&id)?;
    let includes = UserIncludes::from(includes);

    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .find_by_id(user_id, includes)
        .await?
        .ok_or_else(|| ApiError::not_found(USER_NOT_FOUND))?;

    Ok(Json(UserResponse::new(USER_FOUND, user)))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserSubmission>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let Json(submission) = payload?;
    state
        .validator
        .validate_submission(&submission, SubmissionMode::Create)?;

    let new_user = new_user_from(submission)?;

    let repo = UserRepository::new(state.pool.clone());
    let user = repo.create(&new_user).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse::new(USER_CREATED, user)),
    ))
}

/// PUT /api/users/{id}
///
/// Full desired state; child collections are reconciled against what is stored.
/// A password in the body is re-hashed.
pub async fn replace_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UserSubmission>, JsonRejection>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = parse_user_id(&id)?;
    let Json(submission) = payload?;
    state
        .validator
        .validate_submission(&submission, SubmissionMode::Update)?;

    let repo = UserRepository::new(state.pool.clone());
    let snapshot = repo
        .snapshot(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(USER_NOT_FOUND))?;

    let mut update = UserUpdatePayload::from_submission(&snapshot, &submission);
    if let Some(password) = submission.password.as_deref().filter(|p| !p.is_empty()) {
        update.password_hash = Some(hash_password(password)?);
    }

    let user = repo.apply_update(user_id, &update).await?;

    Ok(Json(UserResponse::new(USER_UPDATED, user)))
}

/// PATCH /api/users/{id}
///
/// Base fields plus nested `deleteMany`/`create`/`update` writes, applied in
/// one transaction
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UserUpdatePayload>, JsonRejection>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = parse_user_id(&id)?;
    let Json(update) = payload?;
    validate_update(&state, &update)?;

    let repo = UserRepository::new(state.pool.clone());
    let user = repo.apply_update(user_id, &update).await?;

    Ok(Json(UserResponse::new(USER_UPDATED, user)))
}

/// DELETE /api/users/{id}
///
/// Children are removed by cascade
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let user_id = parse_user_id(&id)?;

    let repo = UserRepository::new(state.pool.clone());
    if !repo.delete(user_id).await? {
        return Err(ApiError::not_found(USER_NOT_FOUND));
    }

    log::info!("Deleted user {}", user_id);
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Helpers
// =============================================================================

#[track_caller]
fn parse_user_id(raw: &str) -> ApiResult<i64> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::Validation {
            message: "ID do usuário inválido".to_string(),
            field: Some("id".to_string()),
            fields: Vec::new(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

fn new_user_from(submission: UserSubmission) -> ApiResult<NewUser> {
    let password_hash = match submission.password.as_deref() {
        Some(password) if !password.is_empty() => Some(hash_password(password)?),
        _ => None,
    };

    Ok(NewUser {
        name: submission.name.unwrap_or_default().trim().to_string(),
        nickname: submission.nickname,
        picture: submission.picture,
        birth_date: submission.birth_date,
        cpf: submission.cpf,
        password_hash,
        emails: submission.emails.unwrap_or_default(),
        telephones: submission.telephones.unwrap_or_default(),
        addresses: submission.addresses.unwrap_or_default(),
    })
}

/// Base fields go through the submission rules; created or updated
/// telephones must carry every numeric part.
fn validate_update(state: &AppState, update: &UserUpdatePayload) -> ApiResult<()> {
    let base = UserSubmission {
        name: update.name.clone(),
        nickname: update.nickname.clone(),
        picture: update.picture.clone(),
        birth_date: update.birth_date,
        cpf: update.cpf.clone(),
        ..UserSubmission::default()
    };
    state
        .validator
        .validate_submission(&base, SubmissionMode::Update)?;

    let errors = incomplete_telephones(update.telephone.as_ref());
    if !errors.is_empty() {
        return Err(ApiError::Validation {
            message: INVALID_TELEPHONE.to_string(),
            field: None,
            fields: errors,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}

fn incomplete_telephones(write: Option<&NestedWrite<Telephone>>) -> Vec<FieldError> {
    let Some(write) = write else {
        return Vec::new();
    };

    let incomplete =
        |t: &Telephone| t.country_code.is_none() || t.state_code.is_none() || t.number.is_none();

    let created = write
        .create
        .iter()
        .flatten()
        .enumerate()
        .filter(|(_, t)| incomplete(*t))
        .map(|(i, _)| {
            FieldError::new(format!("telephone.create.{}.number", i), INVALID_TELEPHONE)
        });
    let updated = write
        .update
        .iter()
        .flatten()
        .enumerate()
        .filter(|(_, u)| incomplete(&u.data))
        .map(|(i, _)| {
            FieldError::new(format!("telephone.update.{}.number", i), INVALID_TELEPHONE)
        });

    created.chain(updated).collect()
}
