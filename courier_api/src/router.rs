use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use courier_directions::provider::DirectionsProvider;

use crate::{
    directions::directions_handler, optimize_route::optimize_route_handler,
    refresh_route::refresh_route_handler, state::AppState,
};

async fn health_handler() -> &'static str {
    "ok"
}

pub fn router<P>(state: Arc<AppState<P>>) -> Router
where
    P: DirectionsProvider + 'static,
{
    Router::new()
        .route("/optimize-route", post(optimize_route_handler::<P>))
        .route("/refresh-route", post(refresh_route_handler::<P>))
        .route("/directions", post(directions_handler::<P>))
        .route("/health", get(health_handler))
        .with_state(state)
}
