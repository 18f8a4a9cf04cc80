use jiff::{SignedDuration, Timestamp};
use serde::Serialize;

use crate::{
    problem::{
        meters::Meters,
        stop::{Stop, StopId},
    },
    solution::optimization_method::OptimizationMethod,
    utils::time::serialize_as_secs,
};

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteStop {
    pub stop: Stop,

    /// Zero-based position in the visiting sequence
    pub position: usize,
    pub is_first: bool,
    pub is_last: bool,

    /// Only known when the order was computed locally
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_from_previous: Option<Meters>,
}

/// The visiting sequence of one optimization run, whatever produced it.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RouteOrder {
    pub stops: Vec<RouteStop>,
    pub total_distance: Meters,

    #[serde(serialize_with = "serialize_as_secs")]
    pub total_duration: SignedDuration,
    pub stop_count: usize,
    pub method: OptimizationMethod,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub polyline: Option<String>,

    /// Stops left out before optimizing: inactive or without usable coordinates
    pub excluded: Vec<StopId>,
    pub computed_at: Timestamp,
}

impl RouteOrder {
    /// Assigns positions and first/last flags to an ordered sequence of stops.
    pub(crate) fn from_sequence(
        sequence: Vec<(Stop, Option<Meters>)>,
        total_distance: Meters,
        total_duration: SignedDuration,
        method: OptimizationMethod,
    ) -> Self {
        let last = sequence.len().saturating_sub(1);
        let stops: Vec<RouteStop> = sequence
            .into_iter()
            .enumerate()
            .map(|(position, (stop, distance_from_previous))| RouteStop {
                stop,
                position,
                is_first: position == 0,
                is_last: position == last,
                distance_from_previous,
            })
            .collect();

        RouteOrder {
            stop_count: stops.len(),
            stops,
            total_distance,
            total_duration,
            method,
            polyline: None,
            excluded: vec![],
            computed_at: Timestamp::now(),
        }
    }

    pub(crate) fn with_polyline(mut self, polyline: Option<String>) -> Self {
        self.polyline = polyline;
        self
    }

    pub(crate) fn with_excluded(mut self, excluded: Vec<StopId>) -> Self {
        self.excluded = excluded;
        self
    }

    pub fn stop_ids(&self) -> impl Iterator<Item = &StopId> {
        self.stops.iter().map(|route_stop| &route_stop.stop.id)
    }
}

#[cfg(test)]
mod tests {
    use crate::problem::stop::Coordinates;

    use super::*;

    #[test]
    fn test_from_sequence_flags() {
        let sequence = vec![
            (Stop::new("a", Coordinates::new(0.0, 0.0)), None),
            (Stop::new("b", Coordinates::new(0.0, 1.0)), None),
            (Stop::new("c", Coordinates::new(0.0, 2.0)), None),
        ];

        let order = RouteOrder::from_sequence(
            sequence,
            Meters::new(10.0),
            SignedDuration::from_secs(1),
            OptimizationMethod::ProviderOptimized,
        );

        assert_eq!(order.stop_count, 3);
        assert_eq!(
            order.stops.iter().map(|s| s.position).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert!(order.stops[0].is_first && !order.stops[0].is_last);
        assert!(!order.stops[1].is_first && !order.stops[1].is_last);
        assert!(!order.stops[2].is_first && order.stops[2].is_last);
    }

    #[test]
    fn test_serialized_shape() {
        let order = RouteOrder::from_sequence(
            vec![(Stop::new("a", Coordinates::new(1.0, 2.0)), Some(Meters::ZERO))],
            Meters::ZERO,
            SignedDuration::from_secs(90),
            OptimizationMethod::SingleDelivery,
        )
        .with_excluded(vec![StopId::new("z")]);

        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["method"], "single-delivery");
        assert_eq!(json["totalDistance"], 0.0);
        assert_eq!(json["totalDuration"], 90.0);
        assert_eq!(json["stopCount"], 1);
        assert_eq!(json["excluded"][0], "z");
        assert_eq!(json["stops"][0]["isFirst"], true);
        assert_eq!(json["stops"][0]["isLast"], true);
        assert_eq!(json["stops"][0]["stop"]["id"], "a");
        assert!(json.get("polyline").is_none());
        assert!(json["computedAt"].is_string());
    }
}
