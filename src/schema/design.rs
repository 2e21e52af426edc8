//! Design specification: the static requirements for a set of labelled spaces.
//!
//! All per-space arrays are indexed `0..N` and aligned with each other and with
//! the spaces of every candidate [`Individual`](super::Individual).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::SpecificationError;

/// Functional class of a space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FunctionClass {
    /// Halls, corridors.
    Circulation,
    /// Rooms and offices.
    Room,
    /// Kitchens and bathrooms.
    WetArea,
    /// Annexes, balconies, garages.
    Annex,
}

/// Cardinal direction a wall (and anything placed on it) faces.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

/// Topological requirement between two spaces, decoded from the raw
/// connectivity matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// No requirement (code 0).
    None,
    /// Spaces must share an interior door (code 1).
    InteriorDoor,
    /// Spaces must be directly adjacent (code 2).
    Adjacency,
}

impl Requirement {
    /// Decode a matrix cell, rejecting anything outside `{0, 1, 2}`.
    pub fn from_code(value: u8, row: usize, col: usize) -> Result<Self, SpecificationError> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::InteriorDoor),
            2 => Ok(Self::Adjacency),
            _ => Err(SpecificationError::InvalidConnectivity { row, col, value }),
        }
    }
}

/// Rectangle in front of an opening that must stay vacant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Clearance {
    /// Side length along the opening.
    pub width: f64,
    /// Depth in front of the opening.
    pub depth: f64,
}

/// Required exterior opening (window or door) of a space.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpeningSpec {
    /// Opening width along the wall.
    pub size: f64,
    /// Required facing. `None` lets the search choose.
    #[serde(default)]
    pub orientation: Option<Orientation>,
    /// Vacant area in front of the opening.
    #[serde(default)]
    pub clearance: Option<Clearance>,
}

/// Admissible floor envelope: bounds for the shorter and the longer side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DimensionBounds {
    pub short_min: f64,
    pub short_max: f64,
    pub long_min: f64,
    pub long_max: f64,
}

impl DimensionBounds {
    fn is_valid(&self) -> bool {
        let ordered = |lo: f64, hi: f64| lo.is_finite() && hi.is_finite() && lo > 0.0 && lo <= hi;
        ordered(self.short_min, self.short_max) && ordered(self.long_min, self.long_max)
    }
}

/// Static requirements for `N` spaces, loaded once per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignSpecification {
    /// Space labels.
    pub names: Vec<String>,
    /// Functional class per space.
    pub function_class: Vec<FunctionClass>,
    /// `N x N` matrix with 0 = none, 1 = interior door, 2 = adjacency.
    pub connectivity: Vec<Vec<u8>>,
    /// Interior door openings per space.
    pub interior_door_sizes: Vec<Vec<f64>>,
    /// Exterior windows per space (empty when the space has none).
    pub exterior_windows: Vec<Vec<OpeningSpec>>,
    /// Exterior doors per space (empty when the space has none).
    pub exterior_doors: Vec<Vec<OpeningSpec>>,
    /// Floor envelope per space.
    pub dimension_bounds: Vec<DimensionBounds>,
    /// Optional minimum floor area per space.
    pub min_area: Vec<Option<f64>>,
    /// Interior wall thickness.
    pub interior_wall_thickness: f64,
    /// Exterior wall thickness.
    pub exterior_wall_thickness: f64,
}

impl DesignSpecification {
    /// Parse a specification from JSON.
    pub fn from_json(json: &str) -> Result<Self, SpecificationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a specification from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SpecificationError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Number of spaces.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when no spaces are specified.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Decoded requirement between spaces `i` and `j`.
    pub fn requirement(&self, i: usize, j: usize) -> Result<Requirement, SpecificationError> {
        Requirement::from_code(self.connectivity[i][j], i, j)
    }

    /// Total interior door opening of space `i`.
    pub fn door_size(&self, i: usize) -> f64 {
        self.interior_door_sizes[i].iter().sum()
    }

    /// Clearance required for an interior door between spaces `i` and `j`.
    pub fn door_clearance(&self, i: usize, j: usize) -> f64 {
        self.interior_wall_thickness + self.door_size(i).max(self.door_size(j))
    }

    /// Inward offset turning the building outline into the usable core line.
    pub fn deflation_offset(&self) -> f64 {
        self.exterior_wall_thickness - 0.5 * self.interior_wall_thickness
    }

    /// Validate array alignment, matrix shape and codes, and scalar ranges.
    pub fn validate(&self) -> Result<(), SpecificationError> {
        self.validate_lengths()?;
        self.validate_connectivity()?;

        for (which, value) in [
            ("Interior", self.interior_wall_thickness),
            ("Exterior", self.exterior_wall_thickness),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SpecificationError::InvalidWallThickness { which, value });
            }
        }

        for index in 0..self.len() {
            let sizes = self.interior_door_sizes[index]
                .iter()
                .copied()
                .chain(self.exterior_windows[index].iter().map(|o| o.size))
                .chain(self.exterior_doors[index].iter().map(|o| o.size));
            for value in sizes {
                if !value.is_finite() || value < 0.0 {
                    return Err(SpecificationError::InvalidOpeningSize { index, value });
                }
            }

            if !self.dimension_bounds[index].is_valid() {
                return Err(SpecificationError::InvalidDimensionBounds { index });
            }

            if let Some(value) = self.min_area[index]
                && (!value.is_finite() || value <= 0.0)
            {
                return Err(SpecificationError::InvalidMinArea { index, value });
            }
        }

        Ok(())
    }

    /// Check every per-space array has one entry per named space.
    pub fn validate_lengths(&self) -> Result<(), SpecificationError> {
        let n = self.len();
        if n == 0 {
            return Err(SpecificationError::EmptySpecification);
        }

        let lengths = [
            ("function_class", self.function_class.len()),
            ("connectivity", self.connectivity.len()),
            ("interior_door_sizes", self.interior_door_sizes.len()),
            ("exterior_windows", self.exterior_windows.len()),
            ("exterior_doors", self.exterior_doors.len()),
            ("dimension_bounds", self.dimension_bounds.len()),
            ("min_area", self.min_area.len()),
        ];
        for (field, found) in lengths {
            if found != n {
                return Err(SpecificationError::LengthMismatch {
                    field,
                    expected: n,
                    found,
                });
            }
        }
        Ok(())
    }

    /// Check the connectivity matrix is square and holds only known codes.
    pub fn validate_connectivity(&self) -> Result<(), SpecificationError> {
        let n = self.len();
        if self.connectivity.len() != n {
            return Err(SpecificationError::LengthMismatch {
                field: "connectivity",
                expected: n,
                found: self.connectivity.len(),
            });
        }
        for (row, cells) in self.connectivity.iter().enumerate() {
            if cells.len() != n {
                return Err(SpecificationError::NonSquareConnectivity {
                    row,
                    expected: n,
                    found: cells.len(),
                });
            }
            for (col, &value) in cells.iter().enumerate() {
                Requirement::from_code(value, row, col)?;
            }
        }
        Ok(())
    }
}
