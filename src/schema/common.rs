use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use tracing::error;

#[derive(Object, Deserialize, Serialize)]
pub struct BadRequestResponse {
    pub erro: String,
}

#[derive(Object, Deserialize, Serialize)]
pub struct NotFoundResponse {
    pub erro: String,
}

#[derive(Object, Deserialize, Serialize)]
pub struct BadGatewayResponse {
    pub erro: String,
}

#[derive(Object, Deserialize, Serialize)]
pub struct InternalServerErrorResponse {
    pub erro: String,
}

impl InternalServerErrorResponse {
    /// Log where a request failed and wrap the cause for the client.
    pub fn new(module: &str, function: &str, process: &str, err: &str) -> Self {
        error!("{}.{} on {}: {}", module, function, process, err);
        Self {
            erro: err.to_string(),
        }
    }
}
