use serde::{Deserialize, Serialize};

/// Subset of a ViaCEP answer the address form fills in.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CepAddress {
    #[serde(default)]
    pub logradouro: String,
    #[serde(default)]
    pub bairro: String,
    #[serde(default)]
    pub localidade: String,
    #[serde(default)]
    pub uf: String,
}

/// Body of every proxy answer, success or not.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CepResponse {
    pub ok: bool,
    pub data: Option<CepAddress>,
    pub error: Option<String>,
}

impl CepResponse {
    pub fn found(address: CepAddress) -> Self {
        Self {
            ok: true,
            data: Some(address),
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(message.into()),
        }
    }
}
