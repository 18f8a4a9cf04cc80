use std::sync::Arc;

use courier_directions::provider::{DirectionsProvider, DirectionsRequest, TravelMode};
use tracing::{debug, instrument};

use crate::{
    directions::directions_result::DirectionsResult, error::DirectionsError,
    problem::stop::Coordinates,
};

/// Fetches turn-by-turn directions for a fixed sequence of points.
pub struct DirectionsService<P> {
    provider: Arc<P>,
    mode: TravelMode,
}

impl<P> Clone for DirectionsService<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            mode: self.mode,
        }
    }
}

impl<P> DirectionsService<P>
where
    P: DirectionsProvider,
{
    pub fn new(provider: Arc<P>, mode: TravelMode) -> Self {
        Self { provider, mode }
    }

    /// Waypoints without usable coordinates are dropped. Provider failures, including
    /// a response without routes, are returned as [`DirectionsError::Provider`].
    #[instrument(skip_all, level = "debug", fields(waypoints = waypoints.len()))]
    pub async fn get_directions(
        &self,
        origin: Option<&Coordinates>,
        destination: Option<&Coordinates>,
        waypoints: &[Coordinates],
    ) -> Result<DirectionsResult, DirectionsError> {
        let origin = origin
            .and_then(Coordinates::to_lat_lng)
            .ok_or(DirectionsError::InvalidEndpoints)?;
        let destination = destination
            .and_then(Coordinates::to_lat_lng)
            .ok_or(DirectionsError::InvalidEndpoints)?;

        let waypoints: Vec<_> = waypoints.iter().filter_map(Coordinates::to_lat_lng).collect();

        let request = DirectionsRequest {
            origin,
            destination,
            waypoints,
            mode: self.mode,
        };

        let response = self.provider.directions(&request).await?;
        let route = response.into_first_route()?;
        let result = DirectionsResult::from(route);

        debug!(
            steps = result.steps.len(),
            distance = result.distance.value(),
            "DirectionsService: received directions"
        );

        Ok(result)
    }
}
