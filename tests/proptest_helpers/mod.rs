//! Shared strategies for the reconciliation property tests.

use annograde::shape::{Point, RegionShape, Shape, ShapeKind};
use proptest::prelude::*;

pub fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        // Curve resampling dominates runtime; keep the case count modest.
        cases: 64,
        ..ProptestConfig::default()
    }
}

/// Strategy for a finite pixel-space point.
pub fn arb_point() -> impl Strategy<Value = Point> {
    (0.0f64..1000.0, 0.0f64..1000.0).prop_map(|(x, y)| Point::new(x, y))
}

/// Strategy for a labeled bounding box.
pub fn arb_box() -> impl Strategy<Value = Shape> {
    (
        arb_point(),
        arb_point(),
        prop::sample::select(vec!["car", "person", "sign"]),
    )
        .prop_map(|(min, max, label)| {
            Shape::Region(
                RegionShape::new(ShapeKind::BoundingBox, vec![min, max]).with_label(label),
            )
        })
}

/// Strategy for a small collection of boxes.
pub fn arb_box_set(max_len: usize) -> impl Strategy<Value = Vec<Shape>> {
    prop::collection::vec(arb_box(), 0..=max_len)
}

/// Strategy for a curve with guaranteed non-zero arc length.
///
/// Control points advance monotonically in x so the curve never collapses
/// to a point (which would resample to nothing and match nothing).
pub fn arb_curve() -> impl Strategy<Value = Shape> {
    (
        arb_point(),
        prop::collection::vec((1.0f64..50.0, -50.0f64..50.0), 2..=6),
    )
        .prop_map(|(start, deltas)| {
            let mut points = vec![start];
            let mut current = start;
            for (dx, dy) in deltas {
                current = Point::new(current.x + dx, current.y + dy);
                points.push(current);
            }
            Shape::curve(points)
        })
}

/// Translates every point of a region shape by the same offset.
pub fn translate(shape: &Shape, dx: f64, dy: f64) -> Shape {
    match shape {
        Shape::Region(region) => {
            let mut moved = region.clone();
            moved.points = region
                .points
                .iter()
                .map(|p| Point::new(p.x + dx, p.y + dy))
                .collect();
            Shape::Region(moved)
        }
        other => other.clone(),
    }
}
