//! Fitness evaluation for candidate floor-plan layouts.
//!
//! # Overview
//!
//! A candidate is scored by seven independent evaluators, each returning a
//! non-negative penalty where 0 means the constraint is fully met:
//!
//! - `ConnectivityAdjacency` (f1): gap distance between spaces that need a
//!   door or direct adjacency
//! - `SpacesOverlap` (f2): area shared by spaces or lying on neighbours
//! - `OpeningsOverlap` (f3): obstructed vacant area in front of openings
//! - `OpeningOrientation` (f4): exterior openings facing the wrong way
//! - `FloorDimensions` (f5): area deficit below the required minimum
//! - `Compactness` (f6): empty area left inside the boundary
//! - `Overflow` (f7): floor area spilling outside the usable core
//!
//! The aggregate is `w1 * f1 + sum(wk * sqrt(fk))` for k = 2..7. Lower is
//! better; 0 means every constraint is satisfied.
//!
//! # Example
//!
//! ```rust,no_run
//! use floorplan_fitness::{Boundary, DesignSpecification, FitnessEvaluator, FitnessWeights, Individual};
//!
//! let spec = DesignSpecification::from_json_file("design.json")?;
//! let boundary = Boundary::from_json_file("boundary.json")?;
//! let candidate = Individual::from_json_file("candidate.json")?;
//!
//! let evaluator = FitnessEvaluator::new(FitnessWeights::default())?;
//! let breakdown = evaluator.evaluate(&candidate, &spec, &boundary)?;
//! println!("fitness = {:.3}", breakdown.fitness);
//! # Ok::<(), floorplan_fitness::SpecificationError>(())
//! ```

mod connectivity;
mod containment;
mod dimensions;
mod openings;
mod overlap;

use rayon::prelude::*;

use crate::schema::{Boundary, DesignSpecification, FitnessWeights, Individual, SpecificationError};

pub use connectivity::{connectivity_adjacency, gap_distance};
pub use containment::{compactness, overflow};
pub use dimensions::floor_dimensions;
pub use openings::{opening_orientation, openings_overlap};
pub use overlap::spaces_overlap;

/// Penalty assigned by an evaluator when a candidate's geometry is
/// degenerate. Finite so the aggregate stays comparable.
pub const DEGENERATE_PENALTY: f64 = 1.0e12;

/// The seven evaluators, in aggregation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Evaluator {
    ConnectivityAdjacency,
    SpacesOverlap,
    OpeningsOverlap,
    OpeningOrientation,
    FloorDimensions,
    Compactness,
    Overflow,
}

impl Evaluator {
    pub const ALL: [Evaluator; 7] = [
        Evaluator::ConnectivityAdjacency,
        Evaluator::SpacesOverlap,
        Evaluator::OpeningsOverlap,
        Evaluator::OpeningOrientation,
        Evaluator::FloorDimensions,
        Evaluator::Compactness,
        Evaluator::Overflow,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::ConnectivityAdjacency => "connectivity_adjacency",
            Self::SpacesOverlap => "spaces_overlap",
            Self::OpeningsOverlap => "openings_overlap",
            Self::OpeningOrientation => "opening_orientation",
            Self::FloorDimensions => "floor_dimensions",
            Self::Compactness => "compactness",
            Self::Overflow => "overflow",
        }
    }

    /// Everything but f1 enters the aggregate through a square root.
    #[inline]
    pub fn is_square_rooted(&self) -> bool {
        !matches!(self, Self::ConnectivityAdjacency)
    }
}

/// Result of a single evaluator.
#[derive(Debug, Clone)]
pub struct EvaluatorResult {
    pub evaluator: Evaluator,
    /// Penalty as returned by the evaluator.
    pub raw: f64,
    /// Penalty after the square-root transform (f2..f7).
    pub transformed: f64,
    pub weight: f64,
}

impl EvaluatorResult {
    #[inline]
    pub fn weighted(&self) -> f64 {
        self.weight * self.transformed
    }
}

/// Aggregate fitness with the per-evaluator results it was built from.
#[derive(Debug, Clone)]
pub struct FitnessBreakdown {
    pub fitness: f64,
    pub results: Vec<EvaluatorResult>,
}

impl FitnessBreakdown {
    pub fn result(&self, evaluator: Evaluator) -> Option<&EvaluatorResult> {
        self.results.iter().find(|r| r.evaluator == evaluator)
    }
}

/// Scores candidates against a fixed weighting.
///
/// Holds no per-candidate state, so one evaluator can be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator {
    weights: FitnessWeights,
}

impl FitnessEvaluator {
    /// Create a new fitness evaluator.
    pub fn new(weights: FitnessWeights) -> Result<Self, SpecificationError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &FitnessWeights {
        &self.weights
    }

    /// Validate the inputs and evaluate a candidate.
    pub fn evaluate(
        &self,
        individual: &Individual,
        spec: &DesignSpecification,
        boundary: &Boundary,
    ) -> Result<FitnessBreakdown, SpecificationError> {
        spec.validate()?;
        boundary.validate()?;
        self.score(individual, spec, boundary)
    }

    /// Evaluate every candidate in parallel and cache its fitness.
    pub fn evaluate_population(
        &self,
        individuals: &mut [Individual],
        spec: &DesignSpecification,
        boundary: &Boundary,
    ) -> Result<(), SpecificationError> {
        spec.validate()?;
        boundary.validate()?;

        individuals.par_iter_mut().try_for_each(|individual| {
            let breakdown = self.score(individual, spec, boundary)?;
            individual.fitness_value = breakdown.fitness;
            Ok(())
        })
    }

    /// Evaluate a candidate against already validated data.
    fn score(
        &self,
        individual: &Individual,
        spec: &DesignSpecification,
        boundary: &Boundary,
    ) -> Result<FitnessBreakdown, SpecificationError> {
        individual.check_binding(spec)?;

        if individual.has_degenerate_floor() {
            log::debug!(
                "{}: degenerate floor geometry, scoring as worst case",
                individual.label
            );
        }

        let mut results = Vec::with_capacity(Evaluator::ALL.len());
        for (evaluator, weight) in Evaluator::ALL.into_iter().zip(self.weights.to_array()) {
            let raw = compute_evaluator(evaluator, individual, spec, boundary)?;
            if !raw.is_finite() || raw < 0.0 {
                return Err(SpecificationError::InvalidPenalty {
                    evaluator: evaluator.name(),
                    value: raw,
                });
            }

            let transformed = if evaluator.is_square_rooted() {
                raw.sqrt()
            } else {
                raw
            };
            results.push(EvaluatorResult {
                evaluator,
                raw,
                transformed,
                weight,
            });
        }

        let fitness = results.iter().map(EvaluatorResult::weighted).sum();

        log::trace!(
            "{}: fitness {:.4} [{}]",
            individual.label,
            fitness,
            results
                .iter()
                .map(|r| format!("{}={:.4}", r.evaluator.name(), r.raw))
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(FitnessBreakdown { fitness, results })
    }
}

/// Compute a single evaluator.
fn compute_evaluator(
    evaluator: Evaluator,
    individual: &Individual,
    spec: &DesignSpecification,
    boundary: &Boundary,
) -> Result<f64, SpecificationError> {
    match evaluator {
        Evaluator::ConnectivityAdjacency => connectivity_adjacency(individual, spec),
        Evaluator::SpacesOverlap => Ok(spaces_overlap(individual, boundary)),
        Evaluator::OpeningsOverlap => openings_overlap(individual, spec, boundary),
        Evaluator::OpeningOrientation => opening_orientation(individual, spec),
        Evaluator::FloorDimensions => floor_dimensions(individual, spec),
        Evaluator::Compactness => Ok(compactness(individual, boundary)),
        Evaluator::Overflow => Ok(overflow(individual, boundary, spec)),
    }
}

/// Fitness of `individual`; lower is better.
pub fn evaluate(
    individual: &Individual,
    spec: &DesignSpecification,
    boundary: &Boundary,
    weights: &FitnessWeights,
) -> Result<f64, SpecificationError> {
    let evaluator = FitnessEvaluator::new(*weights)?;
    Ok(evaluator.evaluate(individual, spec, boundary)?.fitness)
}

impl Individual {
    /// Evaluate and cache the fitness value.
    pub fn compute_fitness(
        &mut self,
        spec: &DesignSpecification,
        boundary: &Boundary,
        weights: &FitnessWeights,
    ) -> Result<f64, SpecificationError> {
        self.fitness_value = evaluate(self, spec, boundary, weights)?;
        Ok(self.fitness_value)
    }
}
