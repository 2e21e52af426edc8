//! Polygon helpers shared by the evaluators.
//!
//! Intersections and unions go through `geo`'s boolean operations so that
//! non-rectangular boundaries and neighbour footprints are handled the same
//! way as floor rectangles.

use geo::{Area, BooleanOps, BoundingRect, Buffer, LineString, MultiPolygon, Polygon, Rect};

/// Build a polygon from an ordered ring, closed or not.
pub fn polygon_from_points(points: &[(f64, f64)]) -> Polygon<f64> {
    Polygon::new(LineString::from(points.to_vec()), Vec::new())
}

/// Bounding boxes share interior area.
fn boxes_overlap(a: Option<Rect<f64>>, b: Option<Rect<f64>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => {
            a.min().x < b.max().x
                && b.min().x < a.max().x
                && a.min().y < b.max().y
                && b.min().y < a.max().y
        }
        _ => false,
    }
}

/// Area of `a ∩ b`. Exactly zero when the bounding boxes are disjoint or
/// only touch.
pub fn intersection_area(a: &Polygon<f64>, b: &Polygon<f64>) -> f64 {
    if !boxes_overlap(a.bounding_rect(), b.bounding_rect()) {
        return 0.0;
    }
    a.intersection(b).unsigned_area()
}

/// Area of `a ∩ region` for a multi-part region.
pub fn intersection_area_multi(a: &Polygon<f64>, region: &MultiPolygon<f64>) -> f64 {
    if !boxes_overlap(a.bounding_rect(), region.bounding_rect()) {
        return 0.0;
    }
    MultiPolygon::new(vec![a.clone()])
        .intersection(region)
        .unsigned_area()
}

/// Clip `a` to `region`.
pub fn clip(a: &Polygon<f64>, region: &Polygon<f64>) -> MultiPolygon<f64> {
    if !boxes_overlap(a.bounding_rect(), region.bounding_rect()) {
        return MultiPolygon::new(Vec::new());
    }
    a.intersection(region)
}

/// Area covered by the union of all parts, each point counted once.
pub fn union_area(parts: &[MultiPolygon<f64>]) -> f64 {
    parts
        .iter()
        .filter(|p| !p.0.is_empty())
        .fold(MultiPolygon::new(Vec::new()), |acc, part| acc.union(part))
        .unsigned_area()
}

/// Offset `polygon` inward by `distance`. Non-positive distances return the
/// polygon unchanged.
pub fn deflate(polygon: &Polygon<f64>, distance: f64) -> MultiPolygon<f64> {
    if distance <= 0.0 {
        return MultiPolygon::new(vec![polygon.clone()]);
    }
    polygon.buffer(-distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64, y: f64, side: f64) -> Polygon<f64> {
        polygon_from_points(&[(x, y), (x + side, y), (x + side, y + side), (x, y + side)])
    }

    #[test]
    fn test_intersection_area() {
        let a = square(0.0, 0.0, 100.0);
        let b = square(50.0, 50.0, 100.0);
        assert!((intersection_area(&a, &b) - 2500.0).abs() < 1e-1);
        assert!((intersection_area(&b, &a) - 2500.0).abs() < 1e-1);
    }

    #[test]
    fn test_touching_squares_have_zero_intersection() {
        let a = square(0.0, 0.0, 100.0);
        let b = square(100.0, 0.0, 100.0);
        let c = square(300.0, 300.0, 10.0);
        assert_eq!(intersection_area(&a, &b), 0.0);
        assert_eq!(intersection_area(&a, &c), 0.0);
    }

    #[test]
    fn test_union_counts_overlap_once() {
        let a = MultiPolygon::new(vec![square(0.0, 0.0, 100.0)]);
        let b = MultiPolygon::new(vec![square(50.0, 0.0, 100.0)]);
        let empty = MultiPolygon::new(Vec::new());
        assert!((union_area(&[a, b, empty]) - 15_000.0).abs() < 1e-1);
        assert_eq!(union_area(&[]), 0.0);
    }

    #[test]
    fn test_clip() {
        let a = square(-50.0, -50.0, 100.0);
        let region = square(0.0, 0.0, 100.0);
        assert!((clip(&a, &region).unsigned_area() - 2500.0).abs() < 1e-1);
        assert!(clip(&square(500.0, 0.0, 10.0), &region).0.is_empty());
    }

    #[test]
    fn test_deflate_rectangle() {
        let outline = polygon_from_points(&[(0.0, 0.0), (900.0, 0.0), (900.0, 700.0), (0.0, 700.0)]);
        let core = deflate(&outline, 31.0);
        assert!((core.unsigned_area() - 838.0 * 638.0).abs() < 1.0);

        let unchanged = deflate(&outline, 0.0);
        assert!((unchanged.unsigned_area() - 630_000.0).abs() < 1e-6);
    }
}
