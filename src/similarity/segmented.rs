//! Similarity predicate for segmented shapes (multi-field label capture
//! along a path).

use super::points_consumable;
use crate::shape::Shape;

// Maximum per-segment ratio difference two matching shapes may have.
const SEGMENT_RATIO_EPSILON: f64 = 0.25;

/// True when two segmented shapes are interchangeable within `threshold`.
///
/// Three checks must all pass: the point walk (strict distance), the
/// per-index ratio comparison within a fixed epsilon, and exact
/// case-sensitive equality of the segment label lists.
pub fn similar_segmented(a: &Shape, b: &Shape, threshold: f64) -> bool {
    let (Shape::Segmented(a), Shape::Segmented(b)) = (a, b) else {
        return false;
    };

    points_consumable(&a.points, &b.points, |d| d < threshold)
        && ratios_match(&a.segment_ratios, &b.segment_ratios)
        && a.segment_labels == b.segment_labels
}

fn ratios_match(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(x, y)| (y - x).abs() <= SEGMENT_RATIO_EPSILON)
}
