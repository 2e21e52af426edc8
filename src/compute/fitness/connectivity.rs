//! Connectivity/adjacency evaluator (f1).

use crate::schema::{DesignSpecification, Floor, Individual, Requirement, SpecificationError};

use super::DEGENERATE_PENALTY;

/// Weight applied to adjacency requirements relative to door requirements.
const ADJACENCY_FACTOR: f64 = 0.1;

/// Signed edge-to-edge separation of two intervals; negative when their
/// projections overlap.
#[inline]
fn separation(a_start: f64, a_len: f64, b_start: f64, b_len: f64) -> f64 {
    let extent = (a_start + a_len).max(b_start + b_len) - a_start.min(b_start);
    extent - (a_len + b_len)
}

/// How far two floors are from meeting within `clearance` of each other.
///
/// Separated floors score their excess separation, floors within clearance
/// on one axis score the separating axis, and floors sharing a wall long
/// enough for the clearance score zero. Branches are tested in order and the
/// first match wins; several can hold at once.
pub fn gap_distance(a: &Floor, b: &Floor, clearance: f64) -> f64 {
    let c = clearance;
    let dx = separation(a.x(), a.width, b.x(), b.width);
    let dy = separation(a.y(), a.height, b.y(), b.height);

    let x_apart = dx >= 0.0;
    let y_apart = dy >= 0.0;
    let x_near = dx + c >= 0.0;
    let y_near = dy + c >= 0.0;

    match (x_apart, y_apart, x_near, y_near) {
        (true, true, _, _) => dx + dy + c,
        (true, _, _, true) => dx + dy + c,
        (_, true, true, _) => dx + dy + c,
        (true, _, _, false) => dx,
        (_, true, false, _) => dy,
        (_, _, true, true) => (dx + c).min(dy + c) - dx.max(dy),
        (_, _, true, false) => dx.abs(),
        (_, _, false, true) => dy.abs(),
        (_, _, false, false) => dx.abs().min(dy.abs()),
    }
}

/// Sum of gap distances over every ordered pair with a requirement.
///
/// The full directed matrix is traversed, so a requirement stated in both
/// `(i, j)` and `(j, i)` contributes twice.
pub fn connectivity_adjacency(
    individual: &Individual,
    spec: &DesignSpecification,
) -> Result<f64, SpecificationError> {
    spec.validate_lengths()?;
    spec.validate_connectivity()?;
    individual.check_binding(spec)?;

    if individual.has_degenerate_floor() {
        return Ok(DEGENERATE_PENALTY);
    }

    let spaces = &individual.spaces;
    let mut penalty = 0.0;
    for i in 0..spec.len() {
        for j in 0..spec.len() {
            penalty += match spec.requirement(i, j)? {
                Requirement::None => 0.0,
                Requirement::InteriorDoor => gap_distance(
                    &spaces[i].floor,
                    &spaces[j].floor,
                    spec.door_clearance(i, j),
                ),
                Requirement::Adjacency => {
                    ADJACENCY_FACTOR * gap_distance(&spaces[i].floor, &spaces[j].floor, 0.0)
                }
            };
        }
    }

    Ok(penalty)
}
