//! Address lookup proxy for ViaCEP
//!
//! Answers are always HTTP 200; failures travel as `ok: false` so the form
//! can show the message next to the CEP field.

use crate::app_state::AppState;
use crate::{ApiError, ApiResult, CepAddress, CepResponse};

use ua_core::normalize_cep;

use axum::{
    Json,
    extract::{Path, State},
    http::header,
};
use serde_json::Value;

/// GET /api/proxy/viacep/{cep}
pub async fn lookup_cep(
    State(state): State<AppState>,
    Path(cep): Path<String>,
) -> Json<CepResponse> {
    let Ok(cleaned) = normalize_cep(&cep) else {
        log::debug!("Rejected CEP '{}'", cep);
        return Json(CepResponse::failed(format!(
            "CEP inválido: {} (deve ter 8 dígitos)",
            cep
        )));
    };

    match fetch_address(&state, &cleaned).await {
        Ok(address) => Json(CepResponse::found(address)),
        Err(e) => {
            log::warn!("CEP lookup for {} failed: {}", cleaned, e);
            Json(CepResponse::failed(e.message()))
        }
    }
}

async fn fetch_address(state: &AppState, cep: &str) -> ApiResult<CepAddress> {
    let url = state.cep.lookup_url(cep);

    let response = state
        .http
        .get(&url)
        .header(header::ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                ApiError::upstream("Tempo esgotado ao consultar a API ViaCEP")
            } else {
                ApiError::upstream(format!("Erro ao consultar a API ViaCEP: {}", e))
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::upstream(format!(
            "Erro na API ViaCEP: {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("")
        )));
    }

    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"));
    if !is_json {
        return Err(ApiError::upstream("Resposta inválida da API ViaCEP"));
    }

    let body: Value = response
        .json()
        .await
        .map_err(|_| ApiError::upstream("Resposta inválida da API ViaCEP"))?;

    // ViaCEP answers 200 with `"erro": true` (or "true") for unknown codes
    let not_found = match body.get("erro") {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(flag)) => flag == "true",
        _ => false,
    };
    if not_found {
        return Err(ApiError::not_found(format!("CEP {} não encontrado", cep)));
    }

    serde_json::from_value(body)
        .map_err(|_| ApiError::upstream("Resposta inválida da API ViaCEP"))
}
