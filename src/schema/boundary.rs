//! Building boundary and adjacent buildings.

use std::fs;
use std::path::Path;

use geo::{Area, Polygon, Validation};
use serde::{Deserialize, Serialize};

use super::SpecificationError;
use crate::compute::polygon_from_points;

/// Axis-aligned bounding rectangle of a boundary outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRectangle {
    /// Bottom-left corner (min x, min y).
    pub position: (f64, f64),
    pub width: f64,
    pub height: f64,
}

/// Building outline plus the footprints of neighbouring buildings that no
/// space may occupy.
///
/// Rings may repeat their first point at the end or leave closure implicit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boundary {
    /// Ordered outline vertices.
    pub building: Vec<(f64, f64)>,
    /// Adjacent building outlines.
    #[serde(default)]
    pub adjacent: Vec<Vec<(f64, f64)>>,
}

impl Boundary {
    /// Boundary without adjacent buildings.
    pub fn new(building: Vec<(f64, f64)>) -> Self {
        Self {
            building,
            adjacent: Vec::new(),
        }
    }

    /// Axis-aligned rectangular boundary.
    pub fn rectangle(position: (f64, f64), width: f64, height: f64) -> Self {
        let (x, y) = position;
        Self::new(vec![
            (x, y),
            (x + width, y),
            (x + width, y + height),
            (x, y + height),
        ])
    }

    /// Add an adjacent building outline.
    pub fn with_adjacent(mut self, outline: Vec<(f64, f64)>) -> Self {
        self.adjacent.push(outline);
        self
    }

    /// Parse a boundary from JSON.
    pub fn from_json(json: &str) -> Result<Self, SpecificationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a boundary from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SpecificationError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Building outline as a polygon.
    pub fn polygon(&self) -> Polygon<f64> {
        polygon_from_points(&self.building)
    }

    /// Adjacent building outlines as polygons.
    pub fn adjacent_polygons(&self) -> Vec<Polygon<f64>> {
        self.adjacent
            .iter()
            .map(|outline| polygon_from_points(outline))
            .collect()
    }

    /// Building outline area.
    pub fn area(&self) -> f64 {
        self.polygon().unsigned_area()
    }

    /// Bounding rectangle of the building outline.
    pub fn bounding_rectangle(&self) -> BoundingRectangle {
        let (min_x, min_y, max_x, max_y) = self.building.iter().fold(
            (
                f64::INFINITY,
                f64::INFINITY,
                f64::NEG_INFINITY,
                f64::NEG_INFINITY,
            ),
            |(min_x, min_y, max_x, max_y), &(x, y)| {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            },
        );

        if self.building.is_empty() {
            return BoundingRectangle {
                position: (0.0, 0.0),
                width: 0.0,
                height: 0.0,
            };
        }

        BoundingRectangle {
            position: (min_x, min_y),
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }

    /// Reject outlines with fewer than three vertices, zero area or
    /// self-intersections.
    pub fn validate(&self) -> Result<(), SpecificationError> {
        check_outline(&self.building).map_err(SpecificationError::DegenerateBoundary)?;
        for (index, outline) in self.adjacent.iter().enumerate() {
            check_outline(outline)
                .map_err(|reason| SpecificationError::DegenerateAdjacent { index, reason })?;
        }
        Ok(())
    }
}

fn check_outline(points: &[(f64, f64)]) -> Result<(), String> {
    if points.iter().any(|&(x, y)| !x.is_finite() || !y.is_finite()) {
        return Err("non-finite vertex".to_string());
    }

    let polygon = polygon_from_points(points);
    // Closed ring repeats the first vertex.
    if polygon.exterior().0.len() < 4 {
        return Err(format!("{} vertices, need at least 3", points.len()));
    }
    if polygon.unsigned_area() <= f64::EPSILON {
        return Err("zero area".to_string());
    }
    if !polygon.is_valid() {
        return Err("self-intersecting outline".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_rectangle() {
        let boundary = Boundary::new(vec![(0.0, 0.0), (900.0, 0.0), (900.0, 400.0), (500.0, 700.0), (0.0, 700.0)]);
        let rect = boundary.bounding_rectangle();
        assert_eq!(rect.position, (0.0, 0.0));
        assert_eq!(rect.width, 900.0);
        assert_eq!(rect.height, 700.0);
    }

    #[test]
    fn test_area_with_explicit_closure() {
        let open = Boundary::rectangle((10.0, 20.0), 900.0, 700.0);
        let mut closed = open.clone();
        closed.building.push((10.0, 20.0));

        assert!((open.area() - 630_000.0).abs() < 1e-6);
        assert!((closed.area() - 630_000.0).abs() < 1e-6);
        closed.validate().unwrap();
    }

    #[test]
    fn test_degenerate_boundaries() {
        let too_few = Boundary::new(vec![(0.0, 0.0), (1.0, 0.0)]);
        assert!(matches!(
            too_few.validate(),
            Err(SpecificationError::DegenerateBoundary(_))
        ));

        let flat = Boundary::new(vec![(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)]);
        assert!(matches!(
            flat.validate(),
            Err(SpecificationError::DegenerateBoundary(_))
        ));

        let bowtie = Boundary::new(vec![(0.0, 0.0), (10.0, 10.0), (10.0, 0.0), (0.0, 10.0)]);
        assert!(matches!(
            bowtie.validate(),
            Err(SpecificationError::DegenerateBoundary(_))
        ));
    }

    #[test]
    fn test_degenerate_adjacent() {
        let boundary = Boundary::rectangle((0.0, 0.0), 900.0, 700.0)
            .with_adjacent(vec![(900.0, 0.0), (1200.0, 0.0), (1200.0, 700.0), (900.0, 700.0)])
            .with_adjacent(vec![(0.0, 800.0), (10.0, 800.0)]);
        assert!(matches!(
            boundary.validate(),
            Err(SpecificationError::DegenerateAdjacent { index: 1, .. })
        ));
        assert_eq!(boundary.adjacent_polygons().len(), 2);
    }

    #[test]
    fn test_from_json() {
        let boundary = Boundary::from_json(
            r#"{ "building": [[0, 0], [900, 0], [900, 700], [0, 700]] }"#,
        )
        .unwrap();
        assert!(boundary.adjacent.is_empty());
        assert!((boundary.area() - 630_000.0).abs() < 1e-6);
    }
}
