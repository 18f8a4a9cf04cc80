use courier_directions::provider::DirectionsProvider;
use jiff::Timestamp;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::{
    error::OptimizeError,
    problem::stop::{StartLocation, Stop},
    solution::{optimization_method::OptimizationType, route_order::RouteOrder},
    solver::route_optimizer::{RouteOptimizer, Traffic},
};

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RefreshOutcome {
    pub route: RouteOrder,
    pub optimization_type: OptimizationType,
    pub refreshed_at: Timestamp,
}

/// Re-optimizes the remaining stops of a run while it is in progress.
///
/// A traffic-aware provider attempt is made first. When it fails for any reason, a
/// single standard attempt follows (provider without traffic, then nearest neighbor)
/// and its result is final.
pub struct RouteRefreshCoordinator<P> {
    optimizer: RouteOptimizer<P>,
}

impl<P> Clone for RouteRefreshCoordinator<P> {
    fn clone(&self) -> Self {
        Self {
            optimizer: self.optimizer.clone(),
        }
    }
}

impl<P> RouteRefreshCoordinator<P>
where
    P: DirectionsProvider,
{
    pub fn new(optimizer: RouteOptimizer<P>) -> Self {
        Self { optimizer }
    }

    #[instrument(skip_all, level = "debug", fields(stops = remaining.len()))]
    pub async fn refresh(
        &self,
        remaining: &[Stop],
        start: &StartLocation,
    ) -> Result<RefreshOutcome, OptimizeError> {
        let prepared = RouteOptimizer::<P>::prepare(remaining, start)?;

        // Nothing to ask the provider for a single stop
        if prepared.len() == 1 {
            let route = self.optimizer.optimize_prepared(prepared, Traffic::Live).await;
            return Ok(outcome(route, OptimizationType::TrafficAware));
        }

        match self
            .optimizer
            .optimize_with_provider(&prepared, Traffic::Live)
            .await
        {
            Ok(route) => {
                debug!(
                    stops = route.stop_count,
                    "RouteRefreshCoordinator: traffic-aware route"
                );
                Ok(outcome(route, OptimizationType::TrafficAware))
            }
            Err(error) => {
                warn!(
                    %error,
                    "RouteRefreshCoordinator: traffic-aware optimization failed, retrying without traffic"
                );
                let route = self
                    .optimizer
                    .optimize_prepared(prepared, Traffic::Ignore)
                    .await;
                Ok(outcome(route, OptimizationType::Standard))
            }
        }
    }
}

fn outcome(route: RouteOrder, optimization_type: OptimizationType) -> RefreshOutcome {
    RefreshOutcome {
        route,
        optimization_type,
        refreshed_at: Timestamp::now(),
    }
}
