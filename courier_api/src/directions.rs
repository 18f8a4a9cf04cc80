use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use courier_directions::{
    polyline::{self, DEFAULT_PRECISION},
    provider::DirectionsProvider,
};
use courier_optimizer::{
    directions::directions_result::DirectionsResult, problem::stop::Coordinates,
};
use geojson::{Feature, GeoJson, Geometry};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{error::ApiError, state::AppState};

#[derive(Deserialize)]
pub struct DirectionsBody {
    origin: Option<Coordinates>,
    destination: Option<Coordinates>,

    #[serde(default)]
    waypoints: Vec<Coordinates>,
}

#[derive(Serialize)]
pub struct DirectionsResponse {
    directions: DirectionsResult,

    /// Decoded overview polyline as a GeoJSON feature
    geometry: Option<GeoJson>,
}

impl IntoResponse for DirectionsResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub async fn directions_handler<P>(
    State(state): State<Arc<AppState<P>>>,
    Json(body): Json<DirectionsBody>,
) -> Result<DirectionsResponse, ApiError>
where
    P: DirectionsProvider + 'static,
{
    let directions = state
        .directions
        .get_directions(
            body.origin.as_ref(),
            body.destination.as_ref(),
            &body.waypoints,
        )
        .await?;

    let geometry = geometry(&directions.polyline);

    Ok(DirectionsResponse {
        directions,
        geometry,
    })
}

fn geometry(encoded: &str) -> Option<GeoJson> {
    if encoded.is_empty() {
        return None;
    }

    match polyline::decode(encoded, DEFAULT_PRECISION) {
        Ok(line) => {
            let feature = Feature {
                bbox: None,
                properties: None,
                foreign_members: None,
                id: None,
                geometry: Some(Geometry::new(geojson::Value::from(&line))),
            };
            Some(GeoJson::Feature(feature))
        }
        Err(error) => {
            warn!(%error, "Could not decode route polyline");
            None
        }
    }
}
