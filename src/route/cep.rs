use std::sync::Arc;

use poem::web::Data;
use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use tracing::warn;

use crate::{
    core::cep::{find_address, CepError},
    schema::{
        cep::CepResponses,
        common::{
            BadGatewayResponse, BadRequestResponse, InternalServerErrorResponse, NotFoundResponse,
        },
    },
    AppState,
};

#[derive(Tags)]
enum ApiCepTags {
    /// Consulta de endereço por CEP
    Cep,
}

pub struct ApiCep;

#[OpenApi]
impl ApiCep {
    /// Busca endereço pelo CEP
    #[oai(path = "/cep/:cep", method = "get", tag = "ApiCepTags::Cep")]
    async fn get_cep_api(&self, Path(cep): Path<String>, state: Data<&Arc<AppState>>) -> CepResponses {
        match find_address(state.address_lookup.as_ref(), &cep).await {
            Ok(val) => CepResponses::Ok(Json(val.into())),
            Err(err @ CepError::InvalidCep) => CepResponses::BadRequest(Json(BadRequestResponse {
                erro: err.to_string(),
            })),
            Err(err @ CepError::NotFound) => CepResponses::NotFound(Json(NotFoundResponse {
                erro: err.to_string(),
            })),
            Err(
                err @ (CepError::Unreachable(_)
                | CepError::UpstreamStatus(_)
                | CepError::UnreadableBody(_)),
            ) => {
                warn!(cep = %cep, "viacep unavailable: {:?}", err);
                CepResponses::BadGateway(Json(BadGatewayResponse {
                    erro: err.to_string(),
                }))
            }
            Err(err @ CepError::InvalidResponse(_)) => CepResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.cep",
                    "get_cep_api",
                    "find_address",
                    &err.to_string(),
                ),
            )),
        }
    }
}
