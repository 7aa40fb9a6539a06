use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::model::idoso::{Idoso, IdosoPatch, NewIdoso};

use super::common::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse};

pub const MISSING_FIELDS_MESSAGE: &str = "Campos obrigatórios faltando";
pub const NOT_FOUND_MESSAGE: &str = "Idoso não encontrado";

#[derive(Object, Deserialize, Serialize, Debug, PartialEq)]
pub struct IdosoResponse {
    #[oai(read_only)]
    pub id: i64,
    pub nome: String,
    pub idade: i64,
    pub nome_responsavel: String,
    pub celular_responsavel: String,
    pub cep: String,
    pub logradouro: String,
    pub numero: String,
    pub bairro: String,
    pub cidade: String,
    pub uf: String,
}

impl From<Idoso> for IdosoResponse {
    fn from(value: Idoso) -> Self {
        Self {
            id: value.id,
            nome: value.nome,
            idade: value.idade,
            nome_responsavel: value.nome_responsavel,
            celular_responsavel: value.celular_responsavel,
            cep: value.cep,
            logradouro: value.logradouro,
            numero: value.numero,
            bairro: value.bairro,
            cidade: value.cidade,
            uf: value.uf,
        }
    }
}

#[derive(ApiResponse)]
pub enum IdosoListResponses {
    #[oai(status = 200)]
    Ok(Json<Vec<IdosoResponse>>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(ApiResponse)]
pub enum IdosoDetailResponses {
    #[oai(status = 200)]
    Ok(Json<IdosoResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

/// Required fields are optional here so a missing one yields our own 400
/// body instead of a payload parse failure.
#[derive(Object, Deserialize, Default)]
pub struct IdosoCreateRequest {
    pub nome: Option<String>,
    pub idade: Option<i64>,
    pub nome_responsavel: Option<String>,
    pub celular_responsavel: Option<String>,
    pub cep: Option<String>,
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub uf: Option<String>,
}

impl IdosoCreateRequest {
    /// `None` when any required field is absent.
    pub fn into_new_idoso(self) -> Option<NewIdoso> {
        Some(NewIdoso {
            nome: self.nome?,
            idade: self.idade?,
            nome_responsavel: self.nome_responsavel?,
            celular_responsavel: self.celular_responsavel?,
            cep: self.cep?,
            logradouro: self.logradouro.unwrap_or_default(),
            numero: self.numero.unwrap_or_default(),
            bairro: self.bairro.unwrap_or_default(),
            cidade: self.cidade.unwrap_or_default(),
            uf: self.uf.unwrap_or_default(),
        })
    }
}

#[derive(ApiResponse)]
pub enum IdosoCreateResponses {
    #[oai(status = 201)]
    Created(Json<IdosoResponse>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(Object, Deserialize, Default)]
pub struct IdosoUpdateRequest {
    pub nome: Option<String>,
    pub idade: Option<i64>,
    pub nome_responsavel: Option<String>,
    pub celular_responsavel: Option<String>,
    pub cep: Option<String>,
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub uf: Option<String>,
}

impl From<IdosoUpdateRequest> for IdosoPatch {
    fn from(value: IdosoUpdateRequest) -> Self {
        Self {
            nome: value.nome,
            idade: value.idade,
            nome_responsavel: value.nome_responsavel,
            celular_responsavel: value.celular_responsavel,
            cep: value.cep,
            logradouro: value.logradouro,
            numero: value.numero,
            bairro: value.bairro,
            cidade: value.cidade,
            uf: value.uf,
        }
    }
}

#[derive(ApiResponse)]
pub enum IdosoUpdateResponses {
    #[oai(status = 200)]
    Ok(Json<IdosoResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(ApiResponse)]
pub enum IdosoDeleteResponses {
    #[oai(status = 204)]
    NoContent,

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}
