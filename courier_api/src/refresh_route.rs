use std::sync::Arc;

use axum::{Json, extract::State};
use courier_directions::provider::DirectionsProvider;
use courier_optimizer::{
    problem::stop::{StartLocation, Stop},
    solver::refresh_coordinator::RefreshOutcome,
};
use serde::Deserialize;
use serde_with::{DefaultOnError, serde_as};
use tracing::info;

use crate::{error::ApiError, state::AppState};

#[serde_as]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRouteBody {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    current_location: StartLocation,

    /// Stops the courier has not completed yet
    #[serde(default)]
    remaining_deliveries: Vec<Stop>,
}

pub async fn refresh_route_handler<P>(
    State(state): State<Arc<AppState<P>>>,
    Json(body): Json<RefreshRouteBody>,
) -> Result<Json<RefreshOutcome>, ApiError>
where
    P: DirectionsProvider + 'static,
{
    let outcome = state
        .coordinator
        .refresh(&body.remaining_deliveries, &body.current_location)
        .await?;

    info!(
        stops = outcome.route.stop_count,
        optimization_type = %outcome.optimization_type,
        "Refreshed route"
    );

    Ok(Json(outcome))
}
