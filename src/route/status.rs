use std::{path::Path, sync::Arc};

use poem::web::Data;
use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::{
    schema::{
        common::InternalServerErrorResponse,
        status::{
            CaminhoBancoResponse, StatusResponse, StatusRoutes, TesteResponse, TesteResponses,
        },
    },
    settings::Config,
    AppState,
};

#[derive(Tags)]
enum ApiStatusTags {
    Status,
}

pub struct ApiStatus {
    docs_url: String,
}

impl ApiStatus {
    pub fn new(config: &Config) -> Self {
        Self {
            docs_url: config.docs_url(),
        }
    }
}

fn absolute_path(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

#[OpenApi]
impl ApiStatus {
    /// Descreve a API e suas rotas principais
    #[oai(path = "/status", method = "get", tag = "ApiStatusTags::Status")]
    async fn status_api(&self) -> Json<StatusResponse> {
        Json(StatusResponse {
            status: "API está funcionando".to_string(),
            documentacao: self.docs_url.clone(),
            rotas: StatusRoutes {
                cadastrar_idoso: "POST /idosos".to_string(),
                buscar_cep: "GET /cep/<cep>".to_string(),
                listar_idosos: "GET /idosos".to_string(),
            },
        })
    }

    /// Verifica a conexão com o banco
    #[oai(path = "/teste", method = "get", tag = "ApiStatusTags::Status")]
    async fn teste_api(&self, state: Data<&Arc<AppState>>) -> TesteResponses {
        if let Err(err) = sqlx::query("SELECT 1").execute(&state.db).await {
            return TesteResponses::InternalServerError(Json(InternalServerErrorResponse::new(
                "route.status",
                "teste_api",
                "ping database",
                &err.to_string(),
            )));
        }
        TesteResponses::Ok(Json(TesteResponse {
            status: "API operacional".to_string(),
            banco: "Conectado".to_string(),
        }))
    }

    /// Mostra onde fica o arquivo do banco
    #[oai(path = "/caminho_banco", method = "get", tag = "ApiStatusTags::Status")]
    async fn caminho_banco_api(&self, state: Data<&Arc<AppState>>) -> Json<CaminhoBancoResponse> {
        let options = state.db.connect_options();
        let path = options.get_filename();
        Json(CaminhoBancoResponse {
            caminho_absoluto: absolute_path(path),
            existe: path.exists(),
        })
    }
}
