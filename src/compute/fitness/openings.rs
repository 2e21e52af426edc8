//! Openings-overlap (f3) and opening-orientation (f4) evaluators.
//!
//! A space's exterior windows and exterior doors are paired, in order, with
//! the openings its specification slot requires. Openings beyond the
//! required list are not scored.

use geo::{Polygon, Rect, coord};

use crate::compute::intersection_area;
use crate::schema::{
    Boundary, Clearance, DesignSpecification, Door, Floor, Individual, OpeningSpec, Orientation,
    SpecificationError, Space, Window,
};

use super::DEGENERATE_PENALTY;

/// An opening reduced to where it sits on its floor.
#[derive(Debug, Clone, Copy)]
struct Placement {
    side: Orientation,
    position: f64,
    size: f64,
}

impl From<&Window> for Placement {
    fn from(w: &Window) -> Self {
        Self {
            side: w.side,
            position: w.position,
            size: w.size,
        }
    }
}

impl From<&Door> for Placement {
    fn from(d: &Door) -> Self {
        Self {
            side: d.side,
            position: d.position,
            size: d.size,
        }
    }
}

impl Placement {
    /// Vacant rectangle outside the wall, centred on the opening. `None` when
    /// the opening does not fit on its wall.
    fn clearance_area(&self, floor: &Floor, clearance: Clearance) -> Option<Polygon<f64>> {
        let wall = floor.wall_length(self.side);
        let fits = self.position.is_finite()
            && (0.0..=1.0).contains(&self.position)
            && self.size.is_finite()
            && self.size > 0.0
            && self.size <= wall;
        if !fits {
            return None;
        }

        let centre = self.position * (wall - self.size) + 0.5 * self.size;
        let half = 0.5 * clearance.width;
        let depth = clearance.depth;

        let (min, max) = match self.side {
            Orientation::North => {
                let cx = floor.x() + centre;
                ((cx - half, floor.top()), (cx + half, floor.top() + depth))
            }
            Orientation::South => {
                let cx = floor.x() + centre;
                ((cx - half, floor.y() - depth), (cx + half, floor.y()))
            }
            Orientation::East => {
                let cy = floor.y() + centre;
                ((floor.right(), cy - half), (floor.right() + depth, cy + half))
            }
            Orientation::West => {
                let cy = floor.y() + centre;
                ((floor.x() - depth, cy - half), (floor.x(), cy + half))
            }
        };

        Some(Rect::new(coord! { x: min.0, y: min.1 }, coord! { x: max.0, y: max.1 }).to_polygon())
    }
}

/// Required exterior openings of `space` paired with their placements.
fn required_openings<'a>(
    space: &'a Space,
    spec: &'a DesignSpecification,
    index: usize,
) -> impl Iterator<Item = (&'a OpeningSpec, Placement)> + 'a {
    let windows = spec.exterior_windows[index]
        .iter()
        .zip(space.windows.iter().map(Placement::from));
    let doors = spec.exterior_doors[index]
        .iter()
        .zip(space.exterior_doors().map(Placement::from));
    windows.chain(doors)
}

/// Area of every required vacant clearance occupied by another space or by
/// an adjacent building.
pub fn openings_overlap(
    individual: &Individual,
    spec: &DesignSpecification,
    boundary: &Boundary,
) -> Result<f64, SpecificationError> {
    spec.validate_lengths()?;
    individual.check_binding(spec)?;
    if individual.has_degenerate_floor() {
        return Ok(DEGENERATE_PENALTY);
    }

    let floors: Vec<Polygon<f64>> = individual
        .spaces
        .iter()
        .map(|s| s.floor.polygon())
        .collect();
    let neighbours = boundary.adjacent_polygons();

    let mut penalty = 0.0;
    for (i, space) in individual.spaces.iter().enumerate() {
        for (required, placement) in required_openings(space, spec, i) {
            let Some(clearance) = required.clearance else {
                continue;
            };
            let Some(area) = placement.clearance_area(&space.floor, clearance) else {
                return Ok(DEGENERATE_PENALTY);
            };

            let other_floors = floors
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, floor)| floor);
            penalty += other_floors
                .chain(&neighbours)
                .map(|other| intersection_area(&area, other))
                .sum::<f64>();
        }
    }

    Ok(penalty)
}

/// Number of exterior openings facing a direction other than the one
/// required for them.
pub fn opening_orientation(
    individual: &Individual,
    spec: &DesignSpecification,
) -> Result<f64, SpecificationError> {
    spec.validate_lengths()?;
    individual.check_binding(spec)?;

    let misoriented = individual
        .spaces
        .iter()
        .enumerate()
        .flat_map(|(i, space)| required_openings(space, spec, i))
        .filter(|(required, placement)| {
            required
                .orientation
                .is_some_and(|facing| facing != placement.side)
        })
        .count();

    Ok(misoriented as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{DoorKind, Swing};

    /// Two spaces: "Room" needs a north window with a 300 x 500 clearance,
    /// "Entry" needs a west exterior door without clearance.
    fn spec() -> DesignSpecification {
        DesignSpecification::from_json(
            r#"{
                "names": ["Room", "Entry"],
                "function_class": ["room", "circulation"],
                "connectivity": [[0, 1], [1, 0]],
                "interior_door_sizes": [[90.0], [90.0]],
                "exterior_windows": [
                    [{ "size": 100.0, "orientation": "north", "clearance": { "width": 300.0, "depth": 500.0 } }],
                    []
                ],
                "exterior_doors": [
                    [],
                    [{ "size": 100.0, "orientation": "west" }]
                ],
                "dimension_bounds": [
                    { "short_min": 100, "short_max": 400, "long_min": 100, "long_max": 600 },
                    { "short_min": 100, "short_max": 400, "long_min": 100, "long_max": 600 }
                ],
                "min_area": [null, null],
                "interior_wall_thickness": 8.0,
                "exterior_wall_thickness": 35.0
            }"#,
        )
        .unwrap()
    }

    fn window(side: Orientation) -> Window {
        Window {
            side,
            position: 0.5,
            size: 100.0,
        }
    }

    fn exterior_door(side: Orientation) -> Door {
        Door {
            side,
            position: 0.0,
            size: 100.0,
            kind: DoorKind::Exterior,
            swing: Swing::Inward,
        }
    }

    fn candidate(entry: Floor, window_side: Orientation, door_side: Orientation) -> Individual {
        let mut room = Space::new("Room", Floor::new((0.0, 0.0), 300.0, 200.0));
        room.windows.push(window(window_side));
        let mut hall = Space::new("Entry", entry);
        hall.doors.push(exterior_door(door_side));
        hall.doors.push(Door {
            kind: DoorKind::Interior,
            ..exterior_door(Orientation::North)
        });
        Individual::new("candidate", vec![room, hall])
    }

    #[test]
    fn test_clearance_rectangle_per_side() {
        let floor = Floor::new((0.0, 0.0), 300.0, 200.0);
        let clearance = Clearance {
            width: 300.0,
            depth: 500.0,
        };
        let placement = |side| Placement {
            side,
            position: 0.5,
            size: 100.0,
        };

        let north = placement(Orientation::North)
            .clearance_area(&floor, clearance)
            .unwrap();
        let west = placement(Orientation::West)
            .clearance_area(&floor, clearance)
            .unwrap();

        let north_box = north.exterior().0.clone();
        assert!(north_box.iter().all(|c| c.y >= 200.0 && c.y <= 700.0));
        assert!(north_box.iter().all(|c| c.x >= 0.0 && c.x <= 300.0));
        let west_box = west.exterior().0.clone();
        assert!(west_box.iter().all(|c| c.x >= -500.0 && c.x <= 0.0));
        assert!(west_box.iter().all(|c| c.y >= -50.0 && c.y <= 250.0));
    }

    #[test]
    fn test_opening_larger_than_wall_does_not_fit() {
        let floor = Floor::new((0.0, 0.0), 80.0, 200.0);
        let clearance = Clearance {
            width: 100.0,
            depth: 100.0,
        };
        let placement = Placement {
            side: Orientation::North,
            position: 0.5,
            size: 100.0,
        };
        assert!(placement.clearance_area(&floor, clearance).is_none());

        let outside = Placement {
            side: Orientation::West,
            position: 1.5,
            size: 100.0,
        };
        assert!(outside.clearance_area(&floor, clearance).is_none());
    }

    #[test]
    fn test_unobstructed_clearance_scores_zero() {
        let boundary = Boundary::rectangle((0.0, 0.0), 900.0, 900.0);
        let individual = candidate(
            Floor::new((300.0, 0.0), 200.0, 200.0),
            Orientation::North,
            Orientation::West,
        );
        assert_eq!(openings_overlap(&individual, &spec(), &boundary).unwrap(), 0.0);
    }

    #[test]
    fn test_obstructed_clearance_scores_blocked_area() {
        let boundary = Boundary::rectangle((0.0, 0.0), 900.0, 900.0);
        // Entry sits across the north clearance: x [0, 300], y [250, 350].
        let individual = candidate(
            Floor::new((0.0, 250.0), 300.0, 100.0),
            Orientation::North,
            Orientation::West,
        );
        let penalty = openings_overlap(&individual, &spec(), &boundary).unwrap();
        assert!((penalty - 30_000.0).abs() < 1e-1);
    }

    #[test]
    fn test_adjacent_building_blocks_clearance() {
        let boundary = Boundary::rectangle((0.0, 0.0), 900.0, 900.0).with_adjacent(vec![
            (0.0, 600.0),
            (300.0, 600.0),
            (300.0, 800.0),
            (0.0, 800.0),
        ]);
        let individual = candidate(
            Floor::new((300.0, 0.0), 200.0, 200.0),
            Orientation::North,
            Orientation::West,
        );
        // Clearance reaches y = 700.
        let penalty = openings_overlap(&individual, &spec(), &boundary).unwrap();
        assert!((penalty - 30_000.0).abs() < 1e-1);
    }

    #[test]
    fn test_misplaced_opening_is_degenerate() {
        let boundary = Boundary::rectangle((0.0, 0.0), 900.0, 900.0);
        let mut individual = candidate(
            Floor::new((300.0, 0.0), 200.0, 200.0),
            Orientation::North,
            Orientation::West,
        );
        individual.spaces[0].windows[0].size = 400.0;
        assert_eq!(
            openings_overlap(&individual, &spec(), &boundary).unwrap(),
            DEGENERATE_PENALTY
        );
    }

    #[test]
    fn test_short_opening_lists_are_an_error() {
        let boundary = Boundary::rectangle((0.0, 0.0), 900.0, 900.0);
        let individual = candidate(
            Floor::new((300.0, 0.0), 200.0, 200.0),
            Orientation::North,
            Orientation::West,
        );

        let mut short_windows = spec();
        short_windows.exterior_windows.truncate(1);
        assert!(matches!(
            openings_overlap(&individual, &short_windows, &boundary),
            Err(SpecificationError::LengthMismatch {
                field: "exterior_windows",
                ..
            })
        ));

        let mut short_doors = spec();
        short_doors.exterior_doors.truncate(1);
        assert!(matches!(
            opening_orientation(&individual, &short_doors),
            Err(SpecificationError::LengthMismatch {
                field: "exterior_doors",
                ..
            })
        ));
    }

    #[test]
    fn test_orientation_mismatches_are_counted() {
        let entry = Floor::new((300.0, 0.0), 200.0, 200.0);
        let matching = candidate(entry, Orientation::North, Orientation::West);
        assert_eq!(opening_orientation(&matching, &spec()).unwrap(), 0.0);

        let one_off = candidate(entry, Orientation::South, Orientation::West);
        assert_eq!(opening_orientation(&one_off, &spec()).unwrap(), 1.0);

        let both_off = candidate(entry, Orientation::East, Orientation::North);
        assert_eq!(opening_orientation(&both_off, &spec()).unwrap(), 2.0);
    }

    #[test]
    fn test_unset_orientation_is_free() {
        let mut spec = spec();
        spec.exterior_windows[0][0].orientation = None;
        let individual = candidate(
            Floor::new((300.0, 0.0), 200.0, 200.0),
            Orientation::South,
            Orientation::West,
        );
        assert_eq!(opening_orientation(&individual, &spec).unwrap(), 0.0);
    }
}
