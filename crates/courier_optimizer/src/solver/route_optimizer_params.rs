use courier_directions::provider::TravelMode;

use crate::problem::kmh::Kmh;

/// Average speed used to estimate durations of locally computed routes.
/// 36 km/h is 10 m/s: one second per ten meters.
pub const DEFAULT_FALLBACK_SPEED_KMH: f64 = 36.0;

#[derive(Debug, Clone, Copy)]
pub struct RouteOptimizerParams {
    pub fallback_speed: Kmh,
    pub mode: TravelMode,
}

impl Default for RouteOptimizerParams {
    fn default() -> Self {
        Self {
            fallback_speed: Kmh::new(DEFAULT_FALLBACK_SPEED_KMH),
            mode: TravelMode::Driving,
        }
    }
}
