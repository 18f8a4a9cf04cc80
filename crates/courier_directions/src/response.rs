use serde::Deserialize;
use serde_with::{DefaultOnError, serde_as};

use crate::{lat_lng::LatLng, provider::ProviderError};

pub const STATUS_OK: &str = "OK";

// Every numeric or nested field is parsed leniently: a missing or malformed value
// falls back to its default instead of failing the whole response.

#[serde_as]
#[derive(Deserialize, Debug, Clone, Default)]
pub struct DirectionsResponse {
    pub status: String,

    #[serde(default)]
    pub error_message: Option<String>,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub routes: Vec<ProviderRoute>,
}

#[serde_as]
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ProviderRoute {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub legs: Vec<ProviderLeg>,

    /// Visiting order chosen by the provider, as indices into the request waypoints
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub waypoint_order: Vec<usize>,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub overview_polyline: Option<OverviewPolyline>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct OverviewPolyline {
    #[serde(default)]
    pub points: String,
}

#[serde_as]
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ProviderLeg {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub distance: Option<TextValue>,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub duration: Option<TextValue>,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub steps: Vec<ProviderStep>,
}

#[serde_as]
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TextValue {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub text: String,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub value: f64,
}

#[serde_as]
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ProviderStep {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub html_instructions: Option<String>,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub distance: Option<TextValue>,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub duration: Option<TextValue>,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub start_location: Option<LatLng>,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub end_location: Option<LatLng>,
}

impl DirectionsResponse {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Returns the first route, failing on a non-"OK" status or an empty route list.
    pub fn into_first_route(self) -> Result<ProviderRoute, ProviderError> {
        if !self.is_ok() {
            return Err(ProviderError::Status {
                status: self.status,
                message: self.error_message,
            });
        }

        self.routes.into_iter().next().ok_or(ProviderError::NoRoutes)
    }
}

impl ProviderRoute {
    /// Sum of the leg distances in meters. Missing leg distances count as zero.
    pub fn total_distance(&self) -> f64 {
        self.legs.iter().map(ProviderLeg::distance_value).sum()
    }

    /// Sum of the leg durations in seconds. Missing leg durations count as zero.
    pub fn total_duration(&self) -> f64 {
        self.legs.iter().map(ProviderLeg::duration_value).sum()
    }

    pub fn polyline(&self) -> Option<&str> {
        self.overview_polyline
            .as_ref()
            .map(|polyline| polyline.points.as_str())
            .filter(|points| !points.is_empty())
    }
}

impl ProviderLeg {
    pub fn distance_value(&self) -> f64 {
        measure_value(self.distance.as_ref())
    }

    pub fn duration_value(&self) -> f64 {
        measure_value(self.duration.as_ref())
    }
}

fn measure_value(measure: Option<&TextValue>) -> f64 {
    measure
        .map(|m| m.value)
        .filter(|value| value.is_finite() && *value >= 0.0)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_into_first_route_rejects_non_ok_status() {
        let response: DirectionsResponse = serde_json::from_value(json!({
            "status": "OVER_QUERY_LIMIT",
            "error_message": "You have exceeded your daily request quota",
            "routes": []
        }))
        .unwrap();

        match response.into_first_route() {
            Err(ProviderError::Status { status, message }) => {
                assert_eq!(status, "OVER_QUERY_LIMIT");
                assert!(message.unwrap().contains("quota"));
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_into_first_route_rejects_empty_routes() {
        let response: DirectionsResponse =
            serde_json::from_value(json!({ "status": "OK" })).unwrap();

        let error = response.into_first_route().unwrap_err();
        assert!(matches!(error, ProviderError::NoRoutes));
        assert_eq!(error.to_string(), "no routes found");
    }

    #[test]
    fn test_malformed_leg_values_count_as_zero() {
        let response: DirectionsResponse = serde_json::from_value(json!({
            "status": "OK",
            "routes": [{
                "legs": [
                    { "distance": { "text": "1.2 km", "value": 1200 }, "duration": { "value": 300 } },
                    { "distance": { "value": "far" }, "duration": null },
                    { "distance": "oops" },
                    { "distance": { "value": 800 }, "duration": { "value": 100 } },
                    { "distance": { "value": -50 }, "duration": { "value": -5 } }
                ],
                "waypoint_order": [1, 0],
                "overview_polyline": { "points": "_p~iF~ps|U" }
            }]
        }))
        .unwrap();

        let route = response.into_first_route().unwrap();
        assert_eq!(route.legs.len(), 5);
        assert_eq!(route.total_distance(), 2000.0);
        assert_eq!(route.total_duration(), 400.0);
        assert_eq!(route.waypoint_order, vec![1, 0]);
        assert_eq!(route.polyline(), Some("_p~iF~ps|U"));
    }

    #[test]
    fn test_steps_with_missing_fields() {
        let leg: ProviderLeg = serde_json::from_value(json!({
            "steps": [
                {
                    "html_instructions": "Head <b>north</b>",
                    "distance": { "text": "0.1 km", "value": 100 },
                    "duration": { "text": "1 min", "value": 30 },
                    "start_location": { "lat": 1.0, "lng": 2.0 },
                    "end_location": { "lat": 1.5, "lng": 2.5 }
                },
                { "start_location": { "lat": "x" } }
            ]
        }))
        .unwrap();

        assert_eq!(leg.steps.len(), 2);
        assert_eq!(leg.steps[0].start_location, Some(LatLng::new(1.0, 2.0)));
        assert!(leg.steps[1].html_instructions.is_none());
        assert!(leg.steps[1].start_location.is_none());
        assert_eq!(leg.distance_value(), 0.0);
    }

    #[test]
    fn test_empty_polyline_is_none() {
        let route = ProviderRoute {
            overview_polyline: Some(OverviewPolyline {
                points: String::new(),
            }),
            ..ProviderRoute::default()
        };
        assert_eq!(route.polyline(), None);
    }
}
