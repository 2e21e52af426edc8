//! Floor-plan fitness - Multi-objective scoring of residential layouts.
//!
//! This crate scores candidate floor plans against a design specification
//! (spaces, required connections, openings, minimum areas and wall
//! thicknesses) and a building boundary. Seven evaluators each produce a
//! non-negative penalty; their weighted aggregate is the fitness a search
//! procedure minimises.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Design specification, boundary, candidate layout and weights
//! - `compute`: Polygon geometry and the fitness evaluators
//!
//! # Example
//!
//! ```rust,no_run
//! use floorplan_fitness::{
//!     schema::{Boundary, DesignSpecification, FitnessWeights, Floor, Individual, Space},
//!     compute::evaluate,
//! };
//!
//! let spec = DesignSpecification::from_json_file("data/reference_dwelling.json")?;
//! let boundary = Boundary::rectangle((0.0, 0.0), 900.0, 700.0);
//!
//! // One floor per specified space, in specification order
//! let spaces = spec
//!     .names
//!     .iter()
//!     .enumerate()
//!     .map(|(i, name)| Space::new(name.clone(), Floor::new((i as f64 * 100.0, 0.0), 90.0, 90.0)))
//!     .collect();
//! let candidate = Individual::new("candidate", spaces);
//!
//! let fitness = evaluate(&candidate, &spec, &boundary, &FitnessWeights::default())?;
//! println!("fitness = {fitness:.3}");
//! # Ok::<(), floorplan_fitness::SpecificationError>(())
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{Evaluator, FitnessBreakdown, FitnessEvaluator, evaluate};
pub use schema::{Boundary, DesignSpecification, FitnessWeights, Individual, SpecificationError};
