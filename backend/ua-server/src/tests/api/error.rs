use crate::ApiError;

use ua_core::{CoreError, FieldError};
use ua_db::DbError;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_envelope() {
    let (status, json) = body_json(ApiError::not_found("Usuário não encontrado")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["ok"], false);
    assert_eq!(json["message"], "Usuário não encontrado");
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Usuário não encontrado");
    assert!(json["error"].get("field").is_none());
    assert!(json["error"].get("fields").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let (status, json) = body_json(ApiError::validation("CPF inválido", Some("cpf"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "cpf");
}

#[tokio::test]
async fn test_field_errors_keep_every_entry_and_lead_with_the_first() {
    let error = ApiError::from(CoreError::Fields {
        errors: vec![
            FieldError::new("name", "Nome é obrigatório"),
            FieldError::new("emails.0.email", "E-mail inválido"),
        ],
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Nome é obrigatório");
    let fields = json["error"]["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[1]["field"], "emails.0.email");
    assert_eq!(fields[1]["message"], "E-mail inválido");
}

#[tokio::test]
async fn test_upstream_error_returns_502() {
    let (status, json) = body_json(ApiError::upstream("Erro na API ViaCEP: 503")).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"]["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn test_user_not_found_maps_to_404() {
    let error = ApiError::from(DbError::UserNotFound {
        user_id: 9,
        location: ErrorLocation::from(Location::caller()),
    });

    assert_eq!(error.status(), StatusCode::NOT_FOUND);
    assert_eq!(error.message(), "Usuário não encontrado");
}

#[tokio::test]
async fn test_foreign_child_maps_to_409() {
    let error = ApiError::from(DbError::ChildNotFound {
        collection: "emails",
        id: 42,
        user_id: 7,
        location: ErrorLocation::from(Location::caller()),
    });

    assert_eq!(error.status(), StatusCode::CONFLICT);
    assert!(error.message().contains("42"));
}

#[tokio::test]
async fn test_database_failure_hides_details() {
    let error = ApiError::from(DbError::Migration {
        message: "table users already exists".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["message"], "Erro interno do servidor");
}

#[tokio::test]
async fn test_password_hash_failure_is_internal() {
    let error = ApiError::from(CoreError::PasswordHash {
        message: "salt too short".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error.message(), "Erro interno do servidor");
}
