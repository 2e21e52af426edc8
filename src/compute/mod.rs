//! Compute module - Polygon geometry and fitness evaluation.

mod geometry;

pub mod fitness;

pub use fitness::{
    DEGENERATE_PENALTY, Evaluator, EvaluatorResult, FitnessBreakdown, FitnessEvaluator, evaluate,
};
pub use geometry::*;
