//! Evaluator weights for the fitness aggregate.

use serde::{Deserialize, Serialize};

use super::SpecificationError;

fn default_weight() -> f64 {
    0.1
}

/// One weight per evaluator, in evaluator order f1..f7.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FitnessWeights {
    #[serde(default = "default_weight")]
    pub connectivity: f64,
    #[serde(default = "default_weight")]
    pub spaces_overlap: f64,
    #[serde(default = "default_weight")]
    pub openings_overlap: f64,
    #[serde(default = "default_weight")]
    pub opening_orientation: f64,
    #[serde(default = "default_weight")]
    pub floor_dimensions: f64,
    #[serde(default = "default_weight")]
    pub compactness: f64,
    #[serde(default = "default_weight")]
    pub overflow: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self::uniform(default_weight())
    }
}

impl From<[f64; 7]> for FitnessWeights {
    fn from(w: [f64; 7]) -> Self {
        Self {
            connectivity: w[0],
            spaces_overlap: w[1],
            openings_overlap: w[2],
            opening_orientation: w[3],
            floor_dimensions: w[4],
            compactness: w[5],
            overflow: w[6],
        }
    }
}

impl FitnessWeights {
    /// Same weight for every evaluator.
    pub fn uniform(weight: f64) -> Self {
        Self::from([weight; 7])
    }

    /// Weights in evaluator order.
    pub fn to_array(&self) -> [f64; 7] {
        [
            self.connectivity,
            self.spaces_overlap,
            self.openings_overlap,
            self.opening_orientation,
            self.floor_dimensions,
            self.compactness,
            self.overflow,
        ]
    }

    /// Every weight must be finite and non-negative.
    pub fn validate(&self) -> Result<(), SpecificationError> {
        for (index, value) in self.to_array().into_iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(SpecificationError::InvalidWeight { index, value });
            }
        }
        Ok(())
    }
}
