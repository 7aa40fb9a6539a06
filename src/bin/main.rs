use std::sync::Arc;

use cadastro_idosos::{
    core::{cep::ViaCepClient, db::init_pool, logging::init_logging},
    init_openapi_route,
    settings::get_config,
    AppState,
};
use poem::listener::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = get_config()?;
    let _guard = init_logging(&config);
    tracing::info!("run with config: {:?}", config);

    // Init Database Connection
    tracing::info!("Init SQLite connection on {}", config.database_url);
    let pool = init_pool(&config).await?;
    // Init ViaCEP client
    tracing::info!("Init ViaCEP client on {}", config.viacep_url);
    // Init App State
    let app_state = Arc::new(AppState {
        db: pool,
        address_lookup: Arc::new(ViaCepClient::new(&config.viacep_url)),
    });

    let app = init_openapi_route(app_state.clone(), &config);
    tracing::info!("run server on {}:{}", config.host, config.port);
    poem::Server::new(TcpListener::bind(format!(
        "{}:{}",
        config.host, config.port
    )))
    .run(app)
    .await?;
    Ok(())
}
