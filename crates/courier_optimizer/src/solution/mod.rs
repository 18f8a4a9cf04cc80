pub mod optimization_method;
pub mod route_order;
