use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::core::cep::Endereco;

use super::common::{
    BadGatewayResponse, BadRequestResponse, InternalServerErrorResponse, NotFoundResponse,
};

#[derive(Object, Deserialize, Serialize, Debug, PartialEq)]
pub struct CepResponse {
    pub logradouro: String,
    pub bairro: String,
    pub cidade: String,
    pub uf: String,
    pub cep: String,
}

impl From<Endereco> for CepResponse {
    fn from(value: Endereco) -> Self {
        Self {
            logradouro: value.logradouro,
            bairro: value.bairro,
            cidade: value.cidade,
            uf: value.uf,
            cep: value.cep,
        }
    }
}

#[derive(ApiResponse)]
pub enum CepResponses {
    #[oai(status = 200)]
    Ok(Json<CepResponse>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 502)]
    BadGateway(Json<BadGatewayResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}
