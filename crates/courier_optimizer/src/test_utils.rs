use std::{collections::VecDeque, sync::Mutex};

use courier_directions::{
    provider::{DirectionsProvider, DirectionsRequest, OptimizeRouteRequest, ProviderError},
    response::{DirectionsResponse, OverviewPolyline, ProviderLeg, ProviderRoute, TextValue},
};

use crate::problem::stop::{Coordinates, Stop};

type ScriptedResponse = Result<DirectionsResponse, ProviderError>;

/// Provider answering from queues of scripted responses and recording every request.
/// An exhausted queue answers with [`ProviderError::Unavailable`].
#[derive(Default)]
pub struct MockProvider {
    optimize_responses: Mutex<VecDeque<ScriptedResponse>>,
    directions_responses: Mutex<VecDeque<ScriptedResponse>>,
    optimize_requests: Mutex<Vec<OptimizeRouteRequest>>,
    directions_requests: Mutex<Vec<DirectionsRequest>>,
}

impl MockProvider {
    pub fn push_optimize_response(&self, response: ScriptedResponse) {
        self.optimize_responses.lock().unwrap().push_back(response);
    }

    pub fn push_directions_response(&self, response: ScriptedResponse) {
        self.directions_responses.lock().unwrap().push_back(response);
    }

    pub fn optimize_requests(&self) -> Vec<OptimizeRouteRequest> {
        self.optimize_requests.lock().unwrap().clone()
    }

    pub fn directions_requests(&self) -> Vec<DirectionsRequest> {
        self.directions_requests.lock().unwrap().clone()
    }
}

fn next_response(queue: &Mutex<VecDeque<ScriptedResponse>>) -> ScriptedResponse {
    queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| Err(ProviderError::Unavailable(String::from("no scripted response"))))
}

impl DirectionsProvider for MockProvider {
    async fn optimize_route(
        &self,
        request: &OptimizeRouteRequest,
    ) -> Result<DirectionsResponse, ProviderError> {
        self.optimize_requests.lock().unwrap().push(request.clone());
        next_response(&self.optimize_responses)
    }

    async fn directions(
        &self,
        request: &DirectionsRequest,
    ) -> Result<DirectionsResponse, ProviderError> {
        self.directions_requests.lock().unwrap().push(request.clone());
        next_response(&self.directions_responses)
    }
}

pub fn stop(id: &str, lat: f64, lng: f64) -> Stop {
    Stop::new(id, Coordinates::new(lat, lng))
}

fn measure(value: f64) -> Option<TextValue> {
    Some(TextValue {
        text: String::new(),
        value,
    })
}

/// An "OK" response with one route; `legs` are (meters, seconds) pairs.
pub fn ok_response(
    waypoint_order: Vec<usize>,
    legs: &[(f64, f64)],
    polyline: Option<&str>,
) -> DirectionsResponse {
    DirectionsResponse {
        status: String::from("OK"),
        error_message: None,
        routes: vec![ProviderRoute {
            legs: legs
                .iter()
                .map(|&(distance, duration)| ProviderLeg {
                    distance: measure(distance),
                    duration: measure(duration),
                    steps: vec![],
                })
                .collect(),
            waypoint_order,
            overview_polyline: polyline.map(|points| OverviewPolyline {
                points: points.to_string(),
            }),
        }],
    }
}

/// A response without routes.
pub fn status_response(status: &str) -> DirectionsResponse {
    DirectionsResponse {
        status: status.to_string(),
        error_message: None,
        routes: vec![],
    }
}

pub fn response_from_json(value: serde_json::Value) -> DirectionsResponse {
    serde_json::from_value(value).unwrap()
}
