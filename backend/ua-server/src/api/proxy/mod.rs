pub mod cep_response;
pub mod viacep;
