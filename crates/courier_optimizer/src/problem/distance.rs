use courier_directions::lat_lng::LatLng;

use crate::problem::meters::Meters;

pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance on a spherical earth.
pub fn haversine_distance(from: &LatLng, to: &LatLng) -> Meters {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();

    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    Meters::new(EARTH_RADIUS_METERS * c)
}
