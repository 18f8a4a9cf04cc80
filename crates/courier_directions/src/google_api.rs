use tracing::debug;

use crate::{
    lat_lng::LatLng,
    provider::{
        DepartureTime, DirectionsProvider, DirectionsRequest, OptimizeRouteRequest,
        ProviderError,
    },
    response::DirectionsResponse,
};

pub const GOOGLE_DIRECTIONS_API_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

pub const API_KEY_ENV_VAR: &str = "GOOGLE_MAPS_API_KEY";
pub const DIRECTIONS_URL_ENV_VAR: &str = "COURIER_DIRECTIONS_URL";

pub struct GoogleDirectionsClientParams {
    pub api_key: String,
    pub base_url: String,
}

impl GoogleDirectionsClientParams {
    /// Reads the API key and the optional URL override from the environment.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var(API_KEY_ENV_VAR)
            .map_err(|_| anyhow::anyhow!("{} is not set", API_KEY_ENV_VAR))?;

        if api_key.trim().is_empty() {
            return Err(anyhow::anyhow!("{} is empty", API_KEY_ENV_VAR));
        }

        let base_url = std::env::var(DIRECTIONS_URL_ENV_VAR)
            .unwrap_or_else(|_| GOOGLE_DIRECTIONS_API_URL.to_string());

        Ok(Self { api_key, base_url })
    }
}

pub struct GoogleDirectionsClient {
    params: GoogleDirectionsClientParams,
    client: reqwest::Client,
}

impl GoogleDirectionsClient {
    pub fn new(params: GoogleDirectionsClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    async fn fetch(
        &self,
        query: Vec<(&'static str, String)>,
    ) -> Result<DirectionsResponse, ProviderError> {
        let response = self
            .client
            .get(&self.params.base_url)
            .query(&query)
            .query(&[("key", &self.params.api_key)])
            .send()
            .await?;

        if response.status().is_success() {
            let directions: DirectionsResponse = response.json().await?;
            debug!(
                status = %directions.status,
                routes = directions.routes.len(),
                "GoogleDirections: received response"
            );
            Ok(directions)
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            Err(ProviderError::Api { status, message })
        }
    }
}

/// `optimize:true|lat,lng|lat,lng`, or the plain pipe-joined list.
fn waypoints_param(waypoints: &[LatLng], optimize_order: bool) -> String {
    let mut param = if optimize_order {
        String::from("optimize:true")
    } else {
        String::new()
    };

    for waypoint in waypoints {
        if !param.is_empty() {
            param.push('|');
        }
        param.push_str(&waypoint.to_string());
    }

    param
}

fn optimize_route_query(request: &OptimizeRouteRequest) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("origin", request.origin.to_string()),
        ("destination", request.destination.to_string()),
        (
            "waypoints",
            waypoints_param(&request.waypoints, request.optimize_order),
        ),
        ("mode", request.mode.to_string()),
    ];

    if let Some(departure_time) = request.departure_time {
        query.push(("departure_time", departure_time.to_string()));
    }

    query
}

fn directions_query(request: &DirectionsRequest) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("origin", request.origin.to_string()),
        ("destination", request.destination.to_string()),
        ("mode", request.mode.to_string()),
        ("units", String::from("metric")),
    ];

    if !request.waypoints.is_empty() {
        query.push(("waypoints", waypoints_param(&request.waypoints, false)));
    }

    query
}

impl DirectionsProvider for GoogleDirectionsClient {
    async fn optimize_route(
        &self,
        request: &OptimizeRouteRequest,
    ) -> Result<DirectionsResponse, ProviderError> {
        debug!(
            waypoints = request.waypoints.len(),
            traffic = request.departure_time == Some(DepartureTime::Now),
            "GoogleDirections: requesting optimized route"
        );
        self.fetch(optimize_route_query(request)).await
    }

    async fn directions(
        &self,
        request: &DirectionsRequest,
    ) -> Result<DirectionsResponse, ProviderError> {
        debug!(
            waypoints = request.waypoints.len(),
            "GoogleDirections: requesting directions"
        );
        self.fetch(directions_query(request)).await
    }
}
