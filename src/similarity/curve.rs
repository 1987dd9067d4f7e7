//! Similarity predicate for curve shapes (lane and line annotations).

use crate::geom::{equidistant_points, max_aligned_distance, CURVE_SAMPLE_COUNT};
use crate::shape::{Point, Shape};

/// True when two curves stay within `threshold` of each other.
///
/// Both control-point lists are resampled to [`CURVE_SAMPLE_COUNT`]
/// arc-length-equidistant points and compared index-aligned; the
/// comparison is repeated against `b` drawn in the opposite direction, so
/// stroke direction never affects the verdict. A degenerate curve
/// resamples to nothing and never matches.
pub fn similar_curves(a: &Shape, b: &Shape, threshold: f64) -> bool {
    let (Shape::Curve(a), Shape::Curve(b)) = (a, b) else {
        return false;
    };

    let curve1 = equidistant_points(&a.control_points, CURVE_SAMPLE_COUNT);
    let curve2 = equidistant_points(&b.control_points, CURVE_SAMPLE_COUNT);
    let d1 = max_aligned_distance(&curve1, &curve2).unwrap_or(threshold + 1.0);

    let reversed: Vec<Point> = b.control_points.iter().rev().copied().collect();
    let curve2_reversed = equidistant_points(&reversed, CURVE_SAMPLE_COUNT);
    let d2 = max_aligned_distance(&curve1, &curve2_reversed).unwrap_or(threshold + 1.0);

    log::debug!("curve max distance {}", d1.min(d2));

    d1 < threshold || d2 < threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lane(points: &[(f64, f64)]) -> Shape {
        Shape::curve(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    #[test]
    fn test_identical_curves_match() {
        let a = lane(&[(0.0, 0.0), (50.0, 80.0), (100.0, 0.0)]);
        let b = lane(&[(0.0, 0.0), (50.0, 80.0), (100.0, 0.0)]);
        assert!(similar_curves(&a, &b, 30.0));
    }

    #[test]
    fn test_reversed_curve_matches() {
        let a = lane(&[(0.0, 0.0), (50.0, 80.0), (100.0, 0.0)]);
        let b = lane(&[(100.0, 0.0), (50.0, 80.0), (0.0, 0.0)]);
        assert!(similar_curves(&a, &b, 30.0));
    }

    #[test]
    fn test_translated_curve_respects_threshold() {
        let a = lane(&[(0.0, 0.0), (50.0, 80.0), (100.0, 0.0)]);
        let b = lane(&[(0.0, 5.0), (50.0, 85.0), (100.0, 5.0)]);
        // Vertical offset of 5: inside a threshold of 6, outside 4.
        assert!(similar_curves(&a, &b, 6.0));
        assert!(!similar_curves(&a, &b, 4.0));
    }

    #[test]
    fn test_short_control_list_never_matches() {
        let degenerate = lane(&[(0.0, 0.0), (10.0, 10.0)]);
        let full = lane(&[(0.0, 0.0), (50.0, 80.0), (100.0, 0.0)]);
        assert!(!similar_curves(&degenerate, &full, 1000.0));
        assert!(!similar_curves(&degenerate, &degenerate, 1000.0));
    }

    #[test]
    fn test_zero_threshold_rejects_identical_curves() {
        // The comparison is strict, so a zero threshold matches nothing.
        let a = lane(&[(0.0, 0.0), (50.0, 80.0), (100.0, 0.0)]);
        assert!(!similar_curves(&a, &a, 0.0));
    }
}
