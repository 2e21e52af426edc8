//! Candidate layout model: floors, openings, spaces and individuals.

use std::fs;
use std::path::Path;

use geo::{Polygon, Rect, coord};
use serde::{Deserialize, Serialize};

use super::{DesignSpecification, Orientation, SpecificationError};

/// Axis-aligned floor rectangle of a space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Floor {
    /// Bottom-left corner.
    pub position: (f64, f64),
    pub width: f64,
    pub height: f64,
}

impl Floor {
    pub fn new(position: (f64, f64), width: f64, height: f64) -> Self {
        Self {
            position,
            width,
            height,
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.position.0
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.position.1
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.position.0 + self.width
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.position.1 + self.height
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Length of the wall facing `side`.
    pub fn wall_length(&self, side: Orientation) -> f64 {
        match side {
            Orientation::North | Orientation::South => self.width,
            Orientation::East | Orientation::West => self.height,
        }
    }

    /// Non-positive or non-finite extent, including corners or area that
    /// overflow to infinity.
    pub fn is_degenerate(&self) -> bool {
        let (x, y) = self.position;
        !(x.is_finite()
            && y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
            && self.right().is_finite()
            && self.top().is_finite()
            && self.area().is_finite())
    }

    pub fn rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.x(), y: self.y() },
            coord! { x: self.right(), y: self.top() },
        )
    }

    pub fn polygon(&self) -> Polygon<f64> {
        self.rect().to_polygon()
    }
}

/// Window placed on a wall of a space.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Window {
    /// Wall the window sits on.
    pub side: Orientation,
    /// Relative position along the wall, in `[0, 1]`.
    pub position: f64,
    /// Width along the wall.
    pub size: f64,
}

/// Whether a door leads to another space or outside.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DoorKind {
    #[default]
    Interior,
    Exterior,
}

/// Door leaf opening direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Swing {
    #[default]
    Inward,
    Outward,
}

/// Door placed on a wall of a space.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Door {
    /// Wall the door sits on.
    pub side: Orientation,
    /// Relative position along the wall, in `[0, 1]`.
    pub position: f64,
    /// Width along the wall.
    pub size: f64,
    #[serde(default)]
    pub kind: DoorKind,
    #[serde(default)]
    pub swing: Swing,
}

/// One labelled space of a candidate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Space {
    pub label: String,
    pub floor: Floor,
    #[serde(default)]
    pub windows: Vec<Window>,
    #[serde(default)]
    pub doors: Vec<Door>,
}

impl Space {
    /// Space without openings.
    pub fn new(label: impl Into<String>, floor: Floor) -> Self {
        Self {
            label: label.into(),
            floor,
            windows: Vec::new(),
            doors: Vec::new(),
        }
    }

    /// Exterior doors, in placement order.
    pub fn exterior_doors(&self) -> impl Iterator<Item = &Door> {
        self.doors.iter().filter(|d| d.kind == DoorKind::Exterior)
    }
}

/// One complete candidate arrangement. Spaces are index-aligned with the
/// design specification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Individual {
    pub label: String,
    pub spaces: Vec<Space>,
    /// Last computed fitness (lower is better).
    #[serde(default)]
    pub fitness_value: f64,
}

impl Individual {
    pub fn new(label: impl Into<String>, spaces: Vec<Space>) -> Self {
        Self {
            label: label.into(),
            spaces,
            fitness_value: 0.0,
        }
    }

    /// Parse a candidate from JSON.
    pub fn from_json(json: &str) -> Result<Self, SpecificationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a candidate from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SpecificationError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Any floor with non-positive or non-finite geometry.
    pub fn has_degenerate_floor(&self) -> bool {
        self.spaces.iter().any(|s| s.floor.is_degenerate())
    }

    /// Check the candidate binds one space per specification slot, with
    /// matching labels.
    pub fn check_binding(&self, spec: &DesignSpecification) -> Result<(), SpecificationError> {
        if self.spaces.len() != spec.len() {
            return Err(SpecificationError::LengthMismatch {
                field: "spaces",
                expected: spec.len(),
                found: self.spaces.len(),
            });
        }
        for (index, (space, name)) in self.spaces.iter().zip(&spec.names).enumerate() {
            if &space.label != name {
                return Err(SpecificationError::LabelMismatch {
                    index,
                    expected: name.clone(),
                    found: space.label.clone(),
                });
            }
        }
        Ok(())
    }
}
