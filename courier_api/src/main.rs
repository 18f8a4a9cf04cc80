mod directions;
mod error;
mod optimize_route;
mod refresh_route;
mod router;
mod state;

use std::sync::Arc;

use axum::http::Method;
use axum::serve;
use courier_directions::directions_client::DirectionsClient;
use courier_optimizer::solver::route_optimizer_params::RouteOptimizerParams;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{Level, info};

use crate::router::router;
use crate::state::AppState;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const ADDR_ENV_VAR: &str = "COURIER_API_ADDR";
const DEFAULT_ADDR: &str = "127.0.0.1:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let client = Arc::new(DirectionsClient::from_env());
    let provider_name = client.name();
    let state = Arc::new(AppState::new(client, RouteOptimizerParams::default()));

    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    let app = router(state).layer(ServiceBuilder::new().layer(cors_layer));

    let addr = std::env::var(ADDR_ENV_VAR).unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(%addr, provider = provider_name, "Listening");

    serve(listener, app).await?;

    Ok(())
}
