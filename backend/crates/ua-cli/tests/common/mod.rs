#![allow(dead_code)]

use ua_cli::Client;
use ua_cli::grid::GridOptions;
use ua_cli::user_grid::{USERS_CONFIG_KEY, USERS_ENTITY_NAME, user_columns};

use std::time::Duration;

use serde_json::{Value, json};

pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

pub fn test_client(uri: &str) -> Client {
    Client::new(uri, TEST_TIMEOUT).expect("client should build")
}

/// User grid options with debounces short enough for tests.
pub fn fast_user_options() -> GridOptions {
    let mut options = GridOptions::new(USERS_ENTITY_NAME, user_columns());
    options.config_key = Some(String::from(USERS_CONFIG_KEY));
    options.debounce = Duration::from_millis(20);
    options.resize_debounce = Duration::from_millis(10);
    options
}

/// `{ ok, data, meta }` body holding `count` summary rows.
pub fn search_body(count: usize, total_count: u64) -> Value {
    let rows: Vec<Value> = (1..=count)
        .map(|i| {
            json!({
                "id": i,
                "name": format!("Usuário {}", i),
                "nickname": null,
                "cpf": "123.456.789-09",
                "birth_date": "1990-05-20",
                "mainEmail": format!("user{}@example.com", i),
                "mainTelephone": "11912345678",
                "updated_at": "2024-01-15T13:45:00Z"
            })
        })
        .collect();

    json!({
        "ok": true,
        "message": "Busca efetuada com sucesso!",
        "data": rows,
        "meta": { "totalCount": total_count }
    })
}

/// Stored user 7 with one record in every collection.
pub fn stored_user() -> Value {
    json!({
        "id": 7,
        "name": "Maria",
        "nickname": null,
        "picture": null,
        "birth_date": "1990-05-20",
        "cpf": "123.456.789-09",
        "emails": [
            { "id": 11, "email": "maria@example.com", "is_main": true }
        ],
        "telephones": [
            {
                "id": 21,
                "is_main": true,
                "type": "Pessoal",
                "country_code": 55,
                "state_code": 11,
                "number": 912345678,
                "full_number": "5511912345678"
            }
        ],
        "addresses": [
            {
                "id": 31,
                "zip_code": "01310100",
                "street": "Avenida Paulista",
                "number": 1000,
                "complement": "",
                "district": "Bela Vista",
                "city": "São Paulo",
                "state": "SP",
                "country": "Brasil",
                "is_main": true
            }
        ],
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    })
}
