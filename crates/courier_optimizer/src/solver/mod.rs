pub mod nearest_neighbor;
pub mod refresh_coordinator;
pub mod route_optimizer;
pub mod route_optimizer_params;
