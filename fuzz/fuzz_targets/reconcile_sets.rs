//! Fuzz target for the reconciliation engine.
//!
//! Parses an arbitrary annotation set and grades it against itself for
//! every shape family. Reconciliation must never panic, and a set graded
//! against itself must never report anything missing beyond what the
//! family predicate already rejects.

#![no_main]

use annograde::reconcile::{reconcile, ReconcileOptions};
use annograde::shape::io_json::from_json_slice;
use annograde::shape::{Shape, ShapeFamily};
use libfuzzer_sys::fuzz_target;

fn point_count(shape: &Shape) -> usize {
    match shape {
        Shape::Region(region) => region.points.len(),
        Shape::Curve(curve) => curve.control_points.len(),
        Shape::Segmented(segmented) => segmented.points.len(),
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }

    let Ok(mut set) = from_json_slice(data) else {
        return;
    };
    // Keep the quadratic matching and curve resampling tractable.
    set.shapes.truncate(8);
    set.shapes.retain(|shape| point_count(shape) <= 64);

    let opts = ReconcileOptions {
        image_width: set.image_width,
        image_height: set.image_height,
        tolerance_percent: Some(5),
    };

    for family in [
        ShapeFamily::Region,
        ShapeFamily::Curve,
        ShapeFamily::Segmented,
    ] {
        let result = reconcile(family, &set.shapes, &set.shapes, &opts);
        assert!(result.correct.len() <= set.shapes.len());
        assert!(result.incorrect.len() <= set.shapes.len());
        assert!(result.missing.len() <= set.shapes.len());
    }
});
