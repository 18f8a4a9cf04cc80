use std::sync::Arc;

use courier_directions::provider::DirectionsProvider;
use courier_optimizer::{
    directions::directions_service::DirectionsService,
    solver::{
        refresh_coordinator::RouteRefreshCoordinator, route_optimizer::RouteOptimizer,
        route_optimizer_params::RouteOptimizerParams,
    },
};

pub struct AppState<P> {
    pub optimizer: RouteOptimizer<P>,
    pub coordinator: RouteRefreshCoordinator<P>,
    pub directions: DirectionsService<P>,
}

impl<P> AppState<P>
where
    P: DirectionsProvider,
{
    pub fn new(provider: Arc<P>, params: RouteOptimizerParams) -> Self {
        let optimizer = RouteOptimizer::new(Arc::clone(&provider), params);

        Self {
            coordinator: RouteRefreshCoordinator::new(optimizer.clone()),
            directions: DirectionsService::new(provider, params.mode),
            optimizer,
        }
    }
}
