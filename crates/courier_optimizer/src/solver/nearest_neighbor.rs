use courier_directions::lat_lng::LatLng;

use crate::problem::{distance::haversine_distance, meters::Meters};

/// One hop of a nearest neighbor tour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hop {
    /// Index into the input points
    pub index: usize,
    pub distance: Meters,
}

/// Greedy tour from `start`: always travel to the closest unvisited point.
///
/// Ties go to the point appearing first in `points`. Runs in O(n²).
pub fn nearest_neighbor_tour(start: LatLng, points: &[LatLng]) -> Vec<Hop> {
    // Kept in input order so that the first minimum found is the earliest point
    let mut unvisited: Vec<usize> = (0..points.len()).collect();
    let mut tour = Vec::with_capacity(points.len());
    let mut current = start;

    while !unvisited.is_empty() {
        let mut nearest = 0;
        let mut nearest_distance = Meters::new(f64::INFINITY);

        for (position, &index) in unvisited.iter().enumerate() {
            let distance = haversine_distance(&current, &points[index]);
            if distance < nearest_distance {
                nearest = position;
                nearest_distance = distance;
            }
        }

        let index = unvisited.remove(nearest);
        tour.push(Hop {
            index,
            distance: nearest_distance,
        });
        current = points[index];
    }

    tour
}
