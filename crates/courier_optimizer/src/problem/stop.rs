use std::fmt::Display;

use courier_directions::lat_lng::LatLng;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, serde_as};

use crate::problem::delivery_status::DeliveryStatus;

/// Opaque reference to a delivery record owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct StopId(String);

impl StopId {
    pub fn new(id: impl Into<String>) -> Self {
        StopId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for StopId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coordinates as received from the caller.
///
/// A component that is missing or not a number deserializes to `None`, so a bad
/// record excludes its stop instead of rejecting the whole request.
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct Coordinates {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub lat: Option<f64>,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub lng: Option<f64>,
}

/// The courier's current position.
pub type StartLocation = Coordinates;

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat: Some(lat),
            lng: Some(lng),
        }
    }

    /// The validated coordinate, if both components are present, finite and in range.
    pub fn to_lat_lng(&self) -> Option<LatLng> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(LatLng::new(lat, lng)).filter(LatLng::is_valid),
            _ => None,
        }
    }
}

impl From<LatLng> for Coordinates {
    fn from(value: LatLng) -> Self {
        Coordinates::new(value.lat, value.lng)
    }
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Stop {
    pub id: StopId,

    /// A `null` or malformed object behaves like missing coordinates
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub coordinates: Coordinates,

    /// Stops without a status are assumed to be part of the active run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DeliveryStatus>,
}

impl Stop {
    pub fn new(id: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            id: StopId::new(id),
            coordinates,
            status: None,
        }
    }

    pub fn with_status(mut self, status: DeliveryStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_active(&self) -> bool {
        self.status.is_none_or(|status| status.is_active())
    }

    pub fn location(&self) -> Option<LatLng> {
        self.coordinates.to_lat_lng()
    }
}
