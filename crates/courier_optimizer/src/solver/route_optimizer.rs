use std::{collections::HashSet, sync::Arc};

use courier_directions::{
    lat_lng::LatLng,
    provider::{DepartureTime, DirectionsProvider, OptimizeRouteRequest, ProviderError},
};
use jiff::SignedDuration;
use tracing::{debug, instrument, warn};

use crate::{
    error::OptimizeError,
    problem::{
        meters::Meters,
        stop::{StartLocation, Stop, StopId},
    },
    solution::{optimization_method::OptimizationMethod, route_order::RouteOrder},
    solver::{nearest_neighbor::nearest_neighbor_tour, route_optimizer_params::RouteOptimizerParams},
    timer_debug,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traffic {
    Ignore,
    /// Ask the provider for live traffic timing (departure "now")
    Live,
}

impl Traffic {
    fn departure_time(self) -> Option<DepartureTime> {
        match self {
            Traffic::Ignore => None,
            Traffic::Live => Some(DepartureTime::Now),
        }
    }
}

/// Stops that passed validation, in input order, with their coordinates.
#[derive(Debug, Clone)]
pub struct PreparedStops {
    start: LatLng,
    stops: Vec<Stop>,
    locations: Vec<LatLng>,
    excluded: Vec<StopId>,
}

impl PreparedStops {
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

/// Orders one courier's stops, through the provider when it answers and with the
/// nearest neighbor heuristic otherwise.
pub struct RouteOptimizer<P> {
    provider: Arc<P>,
    params: RouteOptimizerParams,
}

impl<P> Clone for RouteOptimizer<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            params: self.params,
        }
    }
}

impl<P> RouteOptimizer<P>
where
    P: DirectionsProvider,
{
    pub fn new(provider: Arc<P>, params: RouteOptimizerParams) -> Self {
        Self { provider, params }
    }

    /// Validates the inputs and drops the stops that cannot be optimized.
    ///
    /// Inactive stops, stops without usable coordinates and repeated stop ids are
    /// reported in the `excluded` list of the resulting route.
    pub fn prepare(stops: &[Stop], start: &StartLocation) -> Result<PreparedStops, OptimizeError> {
        if stops.is_empty() {
            return Err(OptimizeError::NoDeliveries);
        }

        let start = start
            .to_lat_lng()
            .ok_or(OptimizeError::InvalidStartLocation)?;

        let mut seen = HashSet::with_capacity(stops.len());
        let mut prepared = PreparedStops {
            start,
            stops: Vec::with_capacity(stops.len()),
            locations: Vec::with_capacity(stops.len()),
            excluded: vec![],
        };
        let mut active = 0;

        for stop in stops {
            if !stop.is_active() {
                prepared.excluded.push(stop.id.clone());
                continue;
            }
            active += 1;

            match stop.location() {
                Some(location) if seen.insert(&stop.id) => {
                    prepared.stops.push(stop.clone());
                    prepared.locations.push(location);
                }
                _ => prepared.excluded.push(stop.id.clone()),
            }
        }

        if active == 0 {
            return Err(OptimizeError::NoActiveDeliveries);
        }

        if prepared.is_empty() {
            return Err(OptimizeError::NoValidCoordinates);
        }

        if !prepared.excluded.is_empty() {
            debug!(
                excluded = prepared.excluded.len(),
                kept = prepared.len(),
                "RouteOptimizer: excluded stops before optimizing"
            );
        }

        Ok(prepared)
    }

    #[instrument(skip_all, level = "debug", fields(stops = stops.len()))]
    pub async fn optimize(
        &self,
        stops: &[Stop],
        start: &StartLocation,
    ) -> Result<RouteOrder, OptimizeError> {
        let prepared = Self::prepare(stops, start)?;
        Ok(self.optimize_prepared(prepared, Traffic::Ignore).await)
    }

    /// Same as [`RouteOptimizer::optimize`] with live traffic requested from the provider.
    #[instrument(skip_all, level = "debug", fields(stops = stops.len()))]
    pub async fn optimize_with_traffic(
        &self,
        stops: &[Stop],
        start: &StartLocation,
    ) -> Result<RouteOrder, OptimizeError> {
        let prepared = Self::prepare(stops, start)?;
        Ok(self.optimize_prepared(prepared, Traffic::Live).await)
    }

    /// Never fails: provider errors fall through to the nearest neighbor heuristic.
    pub async fn optimize_prepared(&self, prepared: PreparedStops, traffic: Traffic) -> RouteOrder {
        if prepared.len() == 1 {
            return single_stop_route(prepared);
        }

        match self.optimize_with_provider(&prepared, traffic).await {
            Ok(route) => route,
            Err(error) => {
                warn!(
                    %error,
                    stops = prepared.len(),
                    "RouteOptimizer: provider optimization failed, using nearest neighbor"
                );
                self.fallback(prepared)
            }
        }
    }

    /// Round trip from the start through every stop, the provider choosing the order.
    pub async fn optimize_with_provider(
        &self,
        prepared: &PreparedStops,
        traffic: Traffic,
    ) -> Result<RouteOrder, ProviderError> {
        let request = OptimizeRouteRequest {
            origin: prepared.start,
            destination: prepared.start,
            waypoints: prepared.locations.clone(),
            optimize_order: true,
            mode: self.params.mode,
            departure_time: traffic.departure_time(),
        };

        debug!(
            waypoints = request.waypoints.len(),
            traffic = traffic == Traffic::Live,
            "RouteOptimizer: requesting provider optimization"
        );

        let response = timer_debug!(
            "RouteOptimizer: provider optimize_route",
            self.provider.optimize_route(&request).await
        )?;
        let route = response.into_first_route()?;

        check_waypoint_order(&route.waypoint_order, prepared.len())?;

        let sequence = route
            .waypoint_order
            .iter()
            .map(|&index| (prepared.stops[index].clone(), None))
            .collect();

        let total_distance = Meters::new(route.total_distance());
        let total_duration = secs_to_duration(route.total_duration());

        Ok(RouteOrder::from_sequence(
            sequence,
            total_distance,
            total_duration,
            OptimizationMethod::ProviderOptimized,
        )
        .with_polyline(route.polyline().map(String::from))
        .with_excluded(prepared.excluded.clone()))
    }

    /// Nearest neighbor tour from the start. Traffic-blind: the duration is a
    /// straight conversion of the distance at the fallback speed.
    pub fn fallback(&self, prepared: PreparedStops) -> RouteOrder {
        let tour = timer_debug!(
            "RouteOptimizer: nearest neighbor",
            nearest_neighbor_tour(prepared.start, &prepared.locations)
        );

        let total_distance: Meters = tour.iter().map(|hop| hop.distance).sum();
        let estimate = total_distance / self.params.fallback_speed;
        let total_duration = SignedDuration::from_secs(estimate.as_secs_f64().round() as i64);

        let sequence = tour
            .iter()
            .map(|hop| (prepared.stops[hop.index].clone(), Some(hop.distance)))
            .collect();

        RouteOrder::from_sequence(
            sequence,
            total_distance.round(),
            total_duration,
            OptimizationMethod::FallbackNearestNeighbor,
        )
        .with_excluded(prepared.excluded)
    }
}

fn single_stop_route(prepared: PreparedStops) -> RouteOrder {
    let sequence = prepared
        .stops
        .into_iter()
        .map(|stop| (stop, Some(Meters::ZERO)))
        .collect();

    RouteOrder::from_sequence(
        sequence,
        Meters::ZERO,
        SignedDuration::ZERO,
        OptimizationMethod::SingleDelivery,
    )
    .with_excluded(prepared.excluded)
}

/// The provider order must visit every waypoint exactly once.
fn check_waypoint_order(order: &[usize], expected: usize) -> Result<(), ProviderError> {
    let mut visited = vec![false; expected];
    let is_permutation = order.len() == expected
        && order
            .iter()
            .all(|&index| index < expected && !std::mem::replace(&mut visited[index], true));

    if is_permutation {
        Ok(())
    } else {
        Err(ProviderError::InvalidWaypointOrder {
            order: order.to_vec(),
            expected,
        })
    }
}

// Out of range totals are treated like any other malformed value
fn secs_to_duration(secs: f64) -> SignedDuration {
    SignedDuration::try_from_secs_f64(secs).unwrap_or(SignedDuration::ZERO)
}
