use tracing::{info, warn};

use crate::{
    google_api::{GoogleDirectionsClient, GoogleDirectionsClientParams},
    offline::OfflineProvider,
    provider::{DirectionsProvider, DirectionsRequest, OptimizeRouteRequest, ProviderError},
    response::DirectionsResponse,
};

/// The provider selected at startup.
pub enum DirectionsClient {
    Google(GoogleDirectionsClient),
    Offline(OfflineProvider),
}

impl DirectionsClient {
    /// Uses the Google client when an API key is configured, the offline provider otherwise.
    pub fn from_env() -> Self {
        match GoogleDirectionsClientParams::from_env() {
            Ok(params) => {
                info!(url = %params.base_url, "Using Google directions provider");
                DirectionsClient::Google(GoogleDirectionsClient::new(params))
            }
            Err(error) => {
                warn!("{error}, routes will be optimized with the nearest neighbor heuristic");
                DirectionsClient::Offline(OfflineProvider)
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DirectionsClient::Google(_) => "google",
            DirectionsClient::Offline(_) => "offline",
        }
    }
}

impl Default for DirectionsClient {
    fn default() -> Self {
        Self::from_env()
    }
}

impl DirectionsProvider for DirectionsClient {
    async fn optimize_route(
        &self,
        request: &OptimizeRouteRequest,
    ) -> Result<DirectionsResponse, ProviderError> {
        match self {
            DirectionsClient::Google(client) => client.optimize_route(request).await,
            DirectionsClient::Offline(client) => client.optimize_route(request).await,
        }
    }

    async fn directions(
        &self,
        request: &DirectionsRequest,
    ) -> Result<DirectionsResponse, ProviderError> {
        match self {
            DirectionsClient::Google(client) => client.directions(request).await,
            DirectionsClient::Offline(client) => client.directions(request).await,
        }
    }
}
