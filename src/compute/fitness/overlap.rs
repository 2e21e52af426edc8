//! Spaces-overlap evaluator (f2).

use geo::Polygon;

use crate::compute::intersection_area;
use crate::schema::{Boundary, Individual};

use super::DEGENERATE_PENALTY;

/// Total area shared by any two floors, plus area of floors lying on
/// adjacent buildings.
pub fn spaces_overlap(individual: &Individual, boundary: &Boundary) -> f64 {
    if individual.has_degenerate_floor() {
        return DEGENERATE_PENALTY;
    }

    let floors: Vec<Polygon<f64>> = individual
        .spaces
        .iter()
        .map(|s| s.floor.polygon())
        .collect();

    let mut overlap = 0.0;
    for (i, a) in floors.iter().enumerate() {
        for b in &floors[i + 1..] {
            overlap += intersection_area(a, b);
        }
    }

    for neighbour in boundary.adjacent_polygons() {
        overlap += floors
            .iter()
            .map(|floor| intersection_area(floor, &neighbour))
            .sum::<f64>();
    }

    overlap
}
