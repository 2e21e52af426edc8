//! Floor-dimensions evaluator (f5).

use crate::schema::{DesignSpecification, Individual, SpecificationError};

use super::DEGENERATE_PENALTY;

/// Summed area deficit of spaces below their required minimum area.
pub fn floor_dimensions(
    individual: &Individual,
    spec: &DesignSpecification,
) -> Result<f64, SpecificationError> {
    spec.validate_lengths()?;
    individual.check_binding(spec)?;
    if individual.has_degenerate_floor() {
        return Ok(DEGENERATE_PENALTY);
    }

    Ok(individual
        .spaces
        .iter()
        .zip(&spec.min_area)
        .filter_map(|(space, min_area)| {
            min_area.map(|required| (required - space.floor.area()).max(0.0))
        })
        .sum())
}
