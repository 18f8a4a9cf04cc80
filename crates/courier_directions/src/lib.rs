pub mod directions_client;
pub mod google_api;
pub mod lat_lng;
pub mod offline;
pub mod polyline;
pub mod provider;
pub mod response;
