//! Similarity predicate for region shapes (boxes, quadrilaterals,
//! polygons, connected lines).

use super::points_consumable;
use crate::shape::Shape;

/// True when two region shapes are interchangeable within `threshold`.
///
/// Metadata gates the comparison: the kinds must agree, labels must match
/// case-insensitively (absent counts as empty), and every tag of `a` must
/// appear in `b`. Geometry then matches when each of `a`'s points claims a
/// distinct point of `b` within `threshold` (inclusive).
pub fn similar_regions(a: &Shape, b: &Shape, threshold: f64) -> bool {
    let (Shape::Region(a), Shape::Region(b)) = (a, b) else {
        return false;
    };

    a.kind == b.kind
        && labels_match(a.label.as_deref(), b.label.as_deref())
        && tags_contained(&a.tags, &b.tags)
        && points_consumable(&a.points, &b.points, |d| d <= threshold)
}

fn labels_match(a: Option<&str>, b: Option<&str>) -> bool {
    a.unwrap_or("").to_lowercase() == b.unwrap_or("").to_lowercase()
}

// One-directional: every tag of `a` must appear in `b`, not vice versa.
fn tags_contained(a: &[String], b: &[String]) -> bool {
    a.iter().all(|tag| b.contains(tag))
}
