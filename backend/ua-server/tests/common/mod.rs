#![allow(dead_code)]

//! Test infrastructure for ua-server API tests

use ua_config::Config;
use ua_core::{Address, Email, NewUser, Telephone, TelephoneType, User};
use ua_db::UserRepository;
use ua_server::{AppState, build_router};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tower::ServiceExt;

/// AppState over a migrated in-memory database
pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with(Config::default()).await
}

/// AppState whose CEP proxy talks to `base_url`
pub async fn create_test_app_state_with_cep(base_url: &str) -> AppState {
    let mut config = Config::default();
    config.cep.base_url = base_url.to_string();
    config.cep.timeout_secs = 1;
    create_test_app_state_with(config).await
}

async fn create_test_app_state_with(config: Config) -> AppState {
    let pool = ua_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    AppState::new(pool, &config).expect("Failed to build app state")
}

/// Stores a user with one main e-mail, telephone and address
pub async fn create_test_user(pool: &SqlitePool, name: &str) -> User {
    let new_user = NewUser {
        name: name.to_string(),
        nickname: Some(format!("{}-nick", name.to_lowercase())),
        picture: None,
        birth_date: NaiveDate::from_ymd_opt(1990, 5, 20),
        cpf: Some("123.456.789-09".to_string()),
        password_hash: None,
        emails: vec![Email::new(format!("{}@example.com", name.to_lowercase()), true)],
        telephones: vec![Telephone::from_masked(
            "+55 (11) 91234-5678",
            TelephoneType::Pessoal,
            true,
        )],
        addresses: vec![Address {
            id: None,
            zip_code: "01310100".to_string(),
            street: "Avenida Paulista".to_string(),
            number: Some(1000),
            complement: String::new(),
            district: "Bela Vista".to_string(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
            country: "Brasil".to_string(),
            is_main: true,
        }],
    };

    UserRepository::new(pool.clone())
        .create(&new_user)
        .await
        .expect("Failed to create test user")
}

/// Body of a complete, valid `POST /api/users`
pub fn valid_submission() -> Value {
    json!({
        "name": "Maria Silva",
        "nickname": "maria",
        "birth_date": "1990-05-20",
        "cpf": "123.456.789-09",
        "password": "Segura@123",
        "password_confirmation": "Segura@123",
        "emails": [
            { "email": "maria@example.com", "is_main": true },
            { "email": "maria@trabalho.com", "is_main": false }
        ],
        "telephones": [
            {
                "is_main": true,
                "type": "Pessoal",
                "country_code": 55,
                "state_code": 11,
                "number": 912345678,
                "full_number": null
            }
        ],
        "addresses": [
            {
                "zip_code": "01310100",
                "street": "Avenida Paulista",
                "number": 1000,
                "district": "Bela Vista",
                "city": "São Paulo",
                "state": "SP",
                "country": "Brasil",
                "is_main": true
            }
        ]
    })
}

/// Sends one request through a fresh router and decodes the JSON body
/// (`Value::Null` when the body is empty).
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let app = build_router(state.clone());

    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
