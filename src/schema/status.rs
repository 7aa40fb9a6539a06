use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use super::common::InternalServerErrorResponse;

#[derive(Object, Deserialize, Serialize)]
pub struct StatusRoutes {
    pub cadastrar_idoso: String,
    pub buscar_cep: String,
    pub listar_idosos: String,
}

#[derive(Object, Deserialize, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub documentacao: String,
    pub rotas: StatusRoutes,
}

#[derive(Object, Deserialize, Serialize)]
pub struct TesteResponse {
    pub status: String,
    pub banco: String,
}

#[derive(Object, Deserialize, Serialize)]
pub struct CaminhoBancoResponse {
    pub caminho_absoluto: String,
    pub existe: bool,
}

#[derive(ApiResponse)]
pub enum TesteResponses {
    #[oai(status = 200)]
    Ok(Json<TesteResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}
