use std::sync::Arc;

use poem::web::Data;
use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use tracing::info;

use crate::{
    repository::idoso::{create_idoso, delete_idoso, get_all_idoso, get_idoso_by_id, update_idoso},
    schema::{
        common::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
        idoso::{
            IdosoCreateRequest, IdosoCreateResponses, IdosoDeleteResponses, IdosoDetailResponses,
            IdosoListResponses, IdosoResponse, IdosoUpdateRequest, IdosoUpdateResponses,
            MISSING_FIELDS_MESSAGE, NOT_FOUND_MESSAGE,
        },
    },
    AppState,
};

#[derive(Tags)]
enum ApiIdosoTags {
    /// Operações com idosos
    Idosos,
}

pub struct ApiIdoso;

#[OpenApi]
impl ApiIdoso {
    /// Lista todos os idosos cadastrados
    #[oai(path = "/idosos", method = "get", tag = "ApiIdosoTags::Idosos")]
    async fn list_idoso_api(&self, state: Data<&Arc<AppState>>) -> IdosoListResponses {
        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return IdosoListResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.idoso",
                        "list_idoso_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_all_idoso(&mut tx).await {
            Ok(val) => val,
            Err(err) => {
                return IdosoListResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.idoso",
                        "list_idoso_api",
                        "get_all_idoso",
                        &err.to_string(),
                    ),
                ))
            }
        };

        IdosoListResponses::Ok(Json(data.into_iter().map(IdosoResponse::from).collect()))
    }

    /// Cadastra um novo idoso
    #[oai(path = "/idosos", method = "post", tag = "ApiIdosoTags::Idosos")]
    async fn create_idoso_api(
        &self,
        Json(json): Json<IdosoCreateRequest>,
        state: Data<&Arc<AppState>>,
    ) -> IdosoCreateResponses {
        let new_idoso = match json.into_new_idoso() {
            Some(val) => val,
            None => {
                return IdosoCreateResponses::BadRequest(Json(BadRequestResponse {
                    erro: MISSING_FIELDS_MESSAGE.to_string(),
                }))
            }
        };

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return IdosoCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.idoso",
                        "create_idoso_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let idoso = match create_idoso(&mut tx, new_idoso).await {
            Ok(val) => val,
            Err(err) => {
                return IdosoCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.idoso",
                        "create_idoso_api",
                        "create_idoso",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if let Err(err) = tx.commit().await {
            return IdosoCreateResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.idoso",
                    "create_idoso_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        info!(id = idoso.id, "idoso created");
        IdosoCreateResponses::Created(Json(idoso.into()))
    }

    /// Busca um idoso pelo ID
    #[oai(path = "/idosos/:id", method = "get", tag = "ApiIdosoTags::Idosos")]
    async fn get_detail_idoso_api(
        &self,
        Path(id): Path<i64>,
        state: Data<&Arc<AppState>>,
    ) -> IdosoDetailResponses {
        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return IdosoDetailResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.idoso",
                        "get_detail_idoso_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_idoso_by_id(&mut tx, id).await {
            Ok(val) => val,
            Err(err) => {
                return IdosoDetailResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.idoso",
                        "get_detail_idoso_api",
                        "get_idoso_by_id",
                        &err.to_string(),
                    ),
                ))
            }
        };
        match data {
            Some(val) => IdosoDetailResponses::Ok(Json(val.into())),
            None => IdosoDetailResponses::NotFound(Json(NotFoundResponse {
                erro: NOT_FOUND_MESSAGE.to_string(),
            })),
        }
    }

    /// Atualiza dados do idoso
    #[oai(path = "/idosos/:id", method = "put", tag = "ApiIdosoTags::Idosos")]
    async fn update_idoso_api(
        &self,
        Path(id): Path<i64>,
        Json(json): Json<IdosoUpdateRequest>,
        state: Data<&Arc<AppState>>,
    ) -> IdosoUpdateResponses {
        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return IdosoUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.idoso",
                        "update_idoso_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_idoso_by_id(&mut tx, id).await {
            Ok(val) => val,
            Err(err) => {
                return IdosoUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.idoso",
                        "update_idoso_api",
                        "get_idoso_by_id",
                        &err.to_string(),
                    ),
                ))
            }
        };
        let mut data = match data {
            Some(val) => val,
            None => {
                return IdosoUpdateResponses::NotFound(Json(NotFoundResponse {
                    erro: NOT_FOUND_MESSAGE.to_string(),
                }))
            }
        };

        if let Err(err) = update_idoso(&mut tx, &mut data, json.into()).await {
            return IdosoUpdateResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.idoso",
                    "update_idoso_api",
                    "update_idoso",
                    &err.to_string(),
                ),
            ));
        }

        if let Err(err) = tx.commit().await {
            return IdosoUpdateResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.idoso",
                    "update_idoso_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        IdosoUpdateResponses::Ok(Json(data.into()))
    }

    /// Remove um idoso
    #[oai(path = "/idosos/:id", method = "delete", tag = "ApiIdosoTags::Idosos")]
    async fn delete_idoso_api(
        &self,
        Path(id): Path<i64>,
        state: Data<&Arc<AppState>>,
    ) -> IdosoDeleteResponses {
        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return IdosoDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.idoso",
                        "delete_idoso_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_idoso_by_id(&mut tx, id).await {
            Ok(val) => val,
            Err(err) => {
                return IdosoDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.idoso",
                        "delete_idoso_api",
                        "get_idoso_by_id",
                        &err.to_string(),
                    ),
                ))
            }
        };
        let data = match data {
            Some(val) => val,
            None => {
                return IdosoDeleteResponses::NotFound(Json(NotFoundResponse {
                    erro: NOT_FOUND_MESSAGE.to_string(),
                }))
            }
        };

        if let Err(err) = delete_idoso(&mut tx, &data).await {
            return IdosoDeleteResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.idoso",
                    "delete_idoso_api",
                    "delete_idoso",
                    &err.to_string(),
                ),
            ));
        }

        if let Err(err) = tx.commit().await {
            return IdosoDeleteResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.idoso",
                    "delete_idoso_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        info!(id = data.id, "idoso deleted");
        IdosoDeleteResponses::NoContent
    }
}
