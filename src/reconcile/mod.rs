//! Annotation reconciliation: grading submitted shapes against a
//! reference set.
//!
//! This is the engine's public surface. Both operations are pure,
//! synchronous functions over their arguments: derive a distance
//! threshold, run the family's similarity predicate through the greedy
//! matcher, and return either a boolean verdict or the three-way
//! partition used for feedback rendering. Malformed shapes never error;
//! they surface as incorrect (submitted side) or missing (reference
//! side).

mod report;

pub use report::ReconciliationResult;

use crate::matcher;
use crate::shape::{Shape, ShapeFamily};
use crate::similarity;
use crate::threshold;

/// Options for a reconciliation call.
///
/// Image dimensions feed the pixel-space threshold derivation; an absent
/// tolerance percentage selects the per-family default.
#[derive(Clone, Debug, Default)]
pub struct ReconcileOptions {
    /// Width of the annotated image in pixels.
    pub image_width: u32,
    /// Height of the annotated image in pixels.
    pub image_height: u32,
    /// Task-level variation tolerance percentage, if configured.
    pub tolerance_percent: Option<u32>,
}

/// True iff the submitted and reference sets are the same size and admit
/// a greedy one-to-one correspondence under the family's predicate.
pub fn match_shapes(
    family: ShapeFamily,
    user: &[Shape],
    reference: &[Shape],
    opts: &ReconcileOptions,
) -> bool {
    let threshold = threshold::threshold(
        family,
        opts.tolerance_percent,
        opts.image_width,
        opts.image_height,
    );

    matcher::match_all(user, reference, |a, b| {
        similarity::similar(family, a, b, threshold)
    })
}

/// Partitions the submitted shapes into correct / incorrect and the
/// reference shapes into accounted-for / missing.
pub fn reconcile(
    family: ShapeFamily,
    user: &[Shape],
    reference: &[Shape],
    opts: &ReconcileOptions,
) -> ReconciliationResult {
    let threshold = threshold::threshold(
        family,
        opts.tolerance_percent,
        opts.image_width,
        opts.image_height,
    );

    let partition = matcher::partition(user, reference, |a, b| {
        similarity::similar(family, a, b, threshold)
    });

    ReconciliationResult {
        correct: partition.matched,
        incorrect: partition.unmatched_a,
        missing: partition.unmatched_b,
    }
}
