use courier_directions::{
    lat_lng::LatLng,
    response::{ProviderRoute, ProviderStep, TextValue},
};
use jiff::SignedDuration;
use serde::Serialize;

use crate::{problem::meters::Meters, utils::time::serialize_as_secs};

/// A provider measure with its display text, e.g. `{ text: "1.2 km", value: 1200 }`.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Measure {
    pub text: String,
    pub value: f64,
}

impl From<Option<TextValue>> for Measure {
    fn from(value: Option<TextValue>) -> Self {
        value
            .map(|TextValue { text, value }| Measure { text, value })
            .unwrap_or_default()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DirectionsStep {
    pub instruction: String,
    pub distance: Measure,
    pub duration: Measure,
    pub start_location: LatLng,
    pub end_location: LatLng,
}

impl From<ProviderStep> for DirectionsStep {
    fn from(step: ProviderStep) -> Self {
        let origin = LatLng::new(0.0, 0.0);
        DirectionsStep {
            instruction: step.html_instructions.unwrap_or_default(),
            distance: step.distance.into(),
            duration: step.duration.into(),
            start_location: step.start_location.unwrap_or(origin),
            end_location: step.end_location.unwrap_or(origin),
        }
    }
}

/// Turn-by-turn directions through a fixed sequence of points.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DirectionsResult {
    pub distance: Meters,

    #[serde(serialize_with = "serialize_as_secs")]
    pub duration: SignedDuration,

    /// Encoded overview polyline, empty when the provider sent none
    pub polyline: String,

    /// Steps of every leg, in travel order
    pub steps: Vec<DirectionsStep>,
    pub waypoint_order: Vec<usize>,
}

impl From<ProviderRoute> for DirectionsResult {
    fn from(route: ProviderRoute) -> Self {
        let distance = Meters::new(route.total_distance());
        let duration = SignedDuration::try_from_secs_f64(route.total_duration())
            .unwrap_or(SignedDuration::ZERO);
        let polyline = route.polyline().map(String::from).unwrap_or_default();

        let steps = route
            .legs
            .into_iter()
            .flat_map(|leg| leg.steps)
            .map(DirectionsStep::from)
            .collect();

        DirectionsResult {
            distance,
            duration,
            polyline,
            steps,
            waypoint_order: route.waypoint_order,
        }
    }
}

#[cfg(test)]
mod tests {
    use courier_directions::response::DirectionsResponse;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_steps_are_flattened_with_defaults() {
        let response: DirectionsResponse = serde_json::from_value(json!({
            "status": "OK",
            "routes": [{
                "legs": [
                    {
                        "distance": { "text": "1 km", "value": 1000 },
                        "duration": { "text": "2 mins", "value": 120 },
                        "steps": [
                            {
                                "html_instructions": "Head <b>east</b>",
                                "distance": { "text": "0.4 km", "value": 400 },
                                "duration": { "text": "1 min", "value": 50 },
                                "start_location": { "lat": 0.0, "lng": 0.0 },
                                "end_location": { "lat": 0.0, "lng": 0.004 }
                            },
                            { "html_instructions": "Turn left" }
                        ]
                    },
                    {
                        "distance": { "value": 500 },
                        "duration": { "value": 60 },
                        "steps": [{ "distance": { "text": "0.5 km" } }]
                    }
                ],
                "overview_polyline": { "points": "_p~iF~ps|U" }
            }]
        }))
        .unwrap();

        let result = DirectionsResult::from(response.into_first_route().unwrap());

        assert_eq!(result.distance, Meters::new(1500.0));
        assert_eq!(result.duration, SignedDuration::from_secs(180));
        assert_eq!(result.polyline, "_p~iF~ps|U");
        assert!(result.waypoint_order.is_empty());

        assert_eq!(result.steps.len(), 3);
        assert_eq!(result.steps[0].instruction, "Head <b>east</b>");
        assert_eq!(result.steps[0].distance.value, 400.0);
        assert_eq!(result.steps[0].end_location, LatLng::new(0.0, 0.004));

        assert_eq!(result.steps[1].instruction, "Turn left");
        assert_eq!(result.steps[1].distance, Measure::default());
        assert_eq!(result.steps[1].duration, Measure::default());
        assert_eq!(result.steps[1].start_location, LatLng::new(0.0, 0.0));

        assert_eq!(result.steps[2].instruction, "");
        assert_eq!(result.steps[2].distance.text, "0.5 km");
        assert_eq!(result.steps[2].distance.value, 0.0);
    }

    #[test]
    fn test_serialized_shape() {
        let result = DirectionsResult::from(ProviderRoute::default());
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["distance"], 0.0);
        assert_eq!(json["duration"], 0.0);
        assert_eq!(json["polyline"], "");
        assert_eq!(json["waypointOrder"], json!([]));
        assert_eq!(json["steps"], json!([]));
    }
}
