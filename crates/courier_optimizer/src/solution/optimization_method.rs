use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// How a [`RouteOrder`](crate::solution::route_order::RouteOrder) was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum OptimizationMethod {
    #[serde(rename = "single-delivery")]
    SingleDelivery,
    #[serde(rename = "directions-api")]
    ProviderOptimized,
    #[serde(rename = "fallback-nearest-neighbor")]
    FallbackNearestNeighbor,
}

impl Display for OptimizationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                OptimizationMethod::SingleDelivery => "single-delivery",
                OptimizationMethod::ProviderOptimized => "directions-api",
                OptimizationMethod::FallbackNearestNeighbor => "fallback-nearest-neighbor",
            }
        )
    }
}

/// Whether a refreshed route accounts for live traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptimizationType {
    TrafficAware,
    Standard,
}

impl Display for OptimizationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptimizationType::TrafficAware => write!(f, "traffic-aware"),
            OptimizationType::Standard => write!(f, "standard"),
        }
    }
}
