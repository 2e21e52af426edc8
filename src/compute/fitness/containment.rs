//! Compactness (f6) and overflow (f7) evaluators.

use geo::MultiPolygon;

use crate::compute::{clip, deflate, intersection_area_multi, union_area};
use crate::schema::{Boundary, DesignSpecification, Individual};

use super::DEGENERATE_PENALTY;

/// Boundary area left empty by the spaces.
///
/// Each space is clipped to the boundary and the clipped parts are unioned,
/// so area shared by several spaces is subtracted once.
pub fn compactness(individual: &Individual, boundary: &Boundary) -> f64 {
    if individual.has_degenerate_floor() {
        return DEGENERATE_PENALTY;
    }

    let outline = boundary.polygon();
    let occupied: Vec<MultiPolygon<f64>> = individual
        .spaces
        .iter()
        .map(|s| clip(&s.floor.polygon(), &outline))
        .collect();

    (boundary.area() - union_area(&occupied)).max(0.0)
}

/// Floor area lying outside the usable core, i.e. the building outline
/// deflated by the wall offset.
pub fn overflow(individual: &Individual, boundary: &Boundary, spec: &DesignSpecification) -> f64 {
    if individual.has_degenerate_floor() {
        return DEGENERATE_PENALTY;
    }

    let core = deflate(&boundary.polygon(), spec.deflation_offset());
    individual
        .spaces
        .iter()
        .map(|s| {
            let inside = intersection_area_multi(&s.floor.polygon(), &core);
            (s.floor.area() - inside).max(0.0)
        })
        .sum()
}
