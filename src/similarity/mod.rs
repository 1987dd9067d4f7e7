//! Shape similarity predicates, one per shape family.
//!
//! Each predicate answers "are these two shapes interchangeable within the
//! given distance threshold". Predicates are total: malformed geometry and
//! cross-family shape pairs are simply never similar, so grading always
//! reaches a verdict.

mod curve;
mod region;
mod segmented;

pub use curve::similar_curves;
pub use region::similar_regions;
pub use segmented::similar_segmented;

use crate::shape::{Point, Shape, ShapeFamily};

/// Applies the similarity predicate for `family` to a shape pair.
///
/// This is the dispatch table the matcher runs over both collections;
/// shapes outside the requested family never match.
pub fn similar(family: ShapeFamily, a: &Shape, b: &Shape, threshold: f64) -> bool {
    match family {
        ShapeFamily::Region => similar_regions(a, b, threshold),
        ShapeFamily::Curve => similar_curves(a, b, threshold),
        ShapeFamily::Segmented => similar_segmented(a, b, threshold),
    }
}

/// Greedy point-list comparison: every point of `a` must claim a distinct
/// point of `b` for which `within(distance)` holds, in order, first fit.
///
/// Surplus points in `b` are ignored, so a shape with fewer points than its
/// counterpart can still pass; the reverse always fails. Callers supply the
/// comparison (inclusive for regions, strict for segmented paths).
pub(crate) fn points_consumable(
    a: &[Point],
    b: &[Point],
    within: impl Fn(f64) -> bool,
) -> bool {
    let mut used = vec![false; b.len()];
    for point in a {
        let found = b
            .iter()
            .enumerate()
            .find_map(|(idx, candidate)| {
                (!used[idx] && within(point.distance(candidate))).then_some(idx)
            });
        match found {
            Some(idx) => used[idx] = true,
            None => return false,
        }
    }
    true
}
