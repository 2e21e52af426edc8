//! Specification errors surfaced to the caller.

/// Malformed or inconsistent design data, boundary, weights or candidate
/// binding. These are fatal for a run and never absorbed into a penalty.
#[derive(Debug, thiserror::Error)]
pub enum SpecificationError {
    #[error("Design specification must describe at least one space")]
    EmptySpecification,
    #[error("Connectivity value {value} at ({row}, {col}) is not one of 0, 1, 2")]
    InvalidConnectivity { row: usize, col: usize, value: u8 },
    #[error("Connectivity row {row} has {found} entries, expected {expected}")]
    NonSquareConnectivity {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Field `{field}` has {found} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("Space {index} is labelled `{found}` but the specification expects `{expected}`")]
    LabelMismatch {
        index: usize,
        expected: String,
        found: String,
    },
    #[error("{which} wall thickness must be finite and positive, got {value}")]
    InvalidWallThickness { which: &'static str, value: f64 },
    #[error("Opening size for space {index} must be finite and non-negative, got {value}")]
    InvalidOpeningSize { index: usize, value: f64 },
    #[error("Dimension bounds for space {index} must satisfy 0 < min <= max")]
    InvalidDimensionBounds { index: usize },
    #[error("Minimum area for space {index} must be finite and positive, got {value}")]
    InvalidMinArea { index: usize, value: f64 },
    #[error("Building boundary is degenerate: {0}")]
    DegenerateBoundary(String),
    #[error("Adjacent building {index} is degenerate: {reason}")]
    DegenerateAdjacent { index: usize, reason: String },
    #[error("Weight {index} must be finite and non-negative, got {value}")]
    InvalidWeight { index: usize, value: f64 },
    #[error("Evaluator `{evaluator}` produced invalid penalty {value}")]
    InvalidPenalty { evaluator: &'static str, value: f64 },
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}
