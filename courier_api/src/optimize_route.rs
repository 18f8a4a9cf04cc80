use std::sync::Arc;

use axum::{Json, extract::State};
use courier_directions::provider::DirectionsProvider;
use courier_optimizer::{
    problem::stop::{StartLocation, Stop},
    solution::route_order::RouteOrder,
};
use serde::Deserialize;
use serde_with::{DefaultOnError, serde_as};
use tracing::info;

use crate::{error::ApiError, state::AppState};

#[serde_as]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRouteBody {
    #[serde(default)]
    deliveries: Vec<Stop>,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    current_location: StartLocation,

    #[serde(default)]
    use_traffic: bool,
}

pub async fn optimize_route_handler<P>(
    State(state): State<Arc<AppState<P>>>,
    Json(body): Json<OptimizeRouteBody>,
) -> Result<Json<RouteOrder>, ApiError>
where
    P: DirectionsProvider + 'static,
{
    let route = if body.use_traffic {
        state
            .coordinator
            .refresh(&body.deliveries, &body.current_location)
            .await?
            .route
    } else {
        state
            .optimizer
            .optimize(&body.deliveries, &body.current_location)
            .await?
    };

    info!(
        stops = route.stop_count,
        excluded = route.excluded.len(),
        method = %route.method,
        "Optimized route"
    );

    Ok(Json(route))
}
