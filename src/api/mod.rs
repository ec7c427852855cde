pub mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::fetch::PriceClient;

pub type SharedClient = Arc<PriceClient>;

pub fn create_router(client: SharedClient) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route(
            "/prices",
            post(routes::lookup_prices).options(routes::preflight),
        )
        .with_state(client)
        .layer(CorsLayer::permissive()) // browser callers live on other origins
}

pub async fn start_server(client: PriceClient, port: u16) -> anyhow::Result<()> {
    let client = Arc::new(client);
    let app = create_router(client);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    tracing::info!("Server running on http://localhost:{}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
