use std::{fmt::Display, future::Future, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{lat_lng::LatLng, response::DirectionsResponse};

#[derive(Debug, Deserialize, Serialize, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Bicycling,
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TravelMode::Driving => "driving",
                TravelMode::Walking => "walking",
                TravelMode::Bicycling => "bicycling",
            }
        )
    }
}

impl FromStr for TravelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "driving" => Ok(TravelMode::Driving),
            "walking" => Ok(TravelMode::Walking),
            "bicycling" => Ok(TravelMode::Bicycling),
            other => Err(format!("Unknown travel mode: {other}")),
        }
    }
}

/// Departure time hint. Providers use it to account for live traffic.
#[derive(Debug, Deserialize, Serialize, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DepartureTime {
    Now,
}

impl Display for DepartureTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DepartureTime::Now => write!(f, "now"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeRouteRequest {
    pub origin: LatLng,
    pub destination: LatLng,
    pub waypoints: Vec<LatLng>,

    /// Let the provider pick the visiting order of the waypoints
    pub optimize_order: bool,
    pub mode: TravelMode,
    pub departure_time: Option<DepartureTime>,
}

impl Default for OptimizeRouteRequest {
    fn default() -> Self {
        Self {
            origin: LatLng::new(0.0, 0.0),
            destination: LatLng::new(0.0, 0.0),
            waypoints: vec![],
            optimize_order: true,
            mode: TravelMode::default(),
            departure_time: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsRequest {
    pub origin: LatLng,
    pub destination: LatLng,
    pub waypoints: Vec<LatLng>,
    pub mode: TravelMode,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Directions API error: {status}{}", .message.as_deref().map(|m| format!(" - {m}")).unwrap_or_default())]
    Status {
        status: String,
        message: Option<String>,
    },

    #[error("no routes found")]
    NoRoutes,

    #[error("provider unavailable: {0}")]
    Unavailable(String),

    #[error("waypoint order {order:?} is not a permutation of {expected} waypoints")]
    InvalidWaypointOrder { order: Vec<usize>, expected: usize },
}

/// The external routing service.
///
/// Both calls resolve with the raw provider response; a non-"OK" status or an
/// empty route list is turned into a [`ProviderError`] by
/// [`DirectionsResponse::into_first_route`], so every consumer treats those the
/// same way.
pub trait DirectionsProvider: Send + Sync {
    fn optimize_route(
        &self,
        request: &OptimizeRouteRequest,
    ) -> impl Future<Output = Result<DirectionsResponse, ProviderError>> + Send;

    fn directions(
        &self,
        request: &DirectionsRequest,
    ) -> impl Future<Output = Result<DirectionsResponse, ProviderError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let error = ProviderError::Status {
            status: String::from("OVER_QUERY_LIMIT"),
            message: None,
        };
        assert_eq!(error.to_string(), "Directions API error: OVER_QUERY_LIMIT");

        let error = ProviderError::Status {
            status: String::from("REQUEST_DENIED"),
            message: Some(String::from("The provided API key is invalid.")),
        };
        assert_eq!(
            error.to_string(),
            "Directions API error: REQUEST_DENIED - The provided API key is invalid."
        );
    }

    #[test]
    fn test_travel_mode_display() {
        assert_eq!(TravelMode::default().to_string(), "driving");
        assert_eq!(TravelMode::Bicycling.to_string(), "bicycling");
    }

    #[test]
    fn test_travel_mode_from_str() {
        assert_eq!("walking".parse(), Ok(TravelMode::Walking));
        assert_eq!(" Bicycling ".parse(), Ok(TravelMode::Bicycling));
        assert!("flying".parse::<TravelMode>().is_err());
    }
}
