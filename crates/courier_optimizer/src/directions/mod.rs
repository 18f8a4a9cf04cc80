pub mod directions_result;
pub mod directions_service;
