pub mod delivery_status;
pub mod distance;
pub mod kmh;
pub mod meters;
pub mod stop;
