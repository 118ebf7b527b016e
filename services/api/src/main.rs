use sea_orm::Database;
use tracing::info;

use bolao_api::config::ApiConfig;
use bolao_api::router::build_router;
use bolao_api::state::AppState;

#[tokio::main]
async fn main() {
    bolao_core::tracing::init_tracing();

    let config = ApiConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret,
        app_url: config.app_url,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.api_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("bolão API listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
