use std::sync::Arc;

use poem::{
    middleware::{AddData, Cors},
    Endpoint, EndpointExt, Response, Route,
};
use poem_openapi::OpenApiService;
use route::{cep::ApiCep, idoso::ApiIdoso, status::ApiStatus};
use settings::Config;
use sqlx::{Pool, Sqlite};

use crate::core::cep::AddressLookup;

pub mod cli;
pub mod core;
pub mod factory;
pub mod model;
pub mod repository;
pub mod route;
pub mod schema;
pub mod settings;

pub struct AppState {
    pub db: Pool<Sqlite>,
    pub address_lookup: Arc<dyn AddressLookup>,
}

/// Render any framework-level failure (bad path parameter, malformed body,
/// unknown route) with the same `{"erro": ...}` body the handlers use.
async fn error_to_json(err: poem::Error) -> Response {
    Response::builder()
        .status(err.status())
        .content_type("application/json")
        .body(serde_json::json!({ "erro": err.to_string() }).to_string())
}

pub fn init_openapi_route(
    app_state: Arc<AppState>,
    config: &Config,
) -> impl Endpoint<Output = Response> {
    let prefix = config.prefix.clone().unwrap_or("/".to_string());
    let openapi_route = OpenApiService::new(
        (ApiIdoso, ApiCep, ApiStatus::new(config)),
        "API Cadastro de Idosos",
        "1.0",
    )
    .description("Cadastro de idosos e seus responsáveis, com consulta de endereço por CEP")
    .server(prefix.clone());
    let openapi_json_endpoint = openapi_route.spec_endpoint();
    let ui = openapi_route.swagger_ui();
    Route::new()
        .nest(prefix, openapi_route)
        .nest("/swagger-ui", ui)
        .at("/openapi.json", openapi_json_endpoint)
        .with(AddData::new(app_state))
        .catch_all_error(error_to_json)
        .with(Cors::new())
}
