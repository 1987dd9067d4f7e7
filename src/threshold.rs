//! Distance threshold derivation.
//!
//! A reconciliation call is configured with a task-level "variation
//! tolerance" percentage; this module turns it into the concrete distance
//! threshold the similarity predicates compare against. Derivation never
//! fails: an absent percentage falls back to a per-family default so that
//! grading always produces a verdict.

use crate::shape::ShapeFamily;

// The image dimension floor keeps thresholds sane when callers pass
// unknown or zero image sizes.
const MIN_MAX_DIMENSION: u32 = 100;

// Default tolerance for region shapes when no percentage is supplied.
const DEFAULT_REGION_PERCENT: f64 = 5.0;

// Curve thresholds are expressed in fixed pixel-equivalent units rather
// than image fractions.
const CURVE_PERCENT_SCALE: f64 = 6.0;
const DEFAULT_CURVE_THRESHOLD: f64 = 30.0;

// Segmented shapes keep the original fixed fallback when no percentage is
// supplied.
const DEFAULT_SEGMENTED_THRESHOLD: f64 = 30.0;

/// Derives the distance threshold for one reconciliation call.
///
/// Region and segmented shapes live in pixel space: a supplied percentage
/// is taken of the larger image dimension (floored at 100). Curves use a
/// fixed scale of 6 units per percent. Absent percentages fall back to the
/// documented per-family defaults.
pub fn threshold(
    family: ShapeFamily,
    tolerance_percent: Option<u32>,
    image_width: u32,
    image_height: u32,
) -> f64 {
    let derived = match family {
        ShapeFamily::Region => {
            let max_dim = max_dimension(image_width, image_height);
            match tolerance_percent {
                Some(percent) => percent as f64 * max_dim / 100.0,
                None => DEFAULT_REGION_PERCENT * max_dim / 100.0,
            }
        }
        ShapeFamily::Segmented => match tolerance_percent {
            Some(percent) => percent as f64 * max_dimension(image_width, image_height) / 100.0,
            None => DEFAULT_SEGMENTED_THRESHOLD,
        },
        ShapeFamily::Curve => match tolerance_percent {
            Some(percent) => percent as f64 * CURVE_PERCENT_SCALE,
            None => DEFAULT_CURVE_THRESHOLD,
        },
    };

    log::debug!(
        "derived {} threshold {} (tolerance {:?}, image {}x{})",
        family,
        derived,
        tolerance_percent,
        image_width,
        image_height
    );

    derived
}

fn max_dimension(image_width: u32, image_height: u32) -> f64 {
    image_width.max(image_height).max(MIN_MAX_DIMENSION) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_threshold_from_percent() {
        assert_eq!(threshold(ShapeFamily::Region, Some(2), 100, 100), 2.0);
        assert_eq!(threshold(ShapeFamily::Region, Some(10), 640, 480), 64.0);
    }

    #[test]
    fn test_region_threshold_default_is_five_percent() {
        assert_eq!(threshold(ShapeFamily::Region, None, 640, 480), 32.0);
    }

    #[test]
    fn test_dimension_floor() {
        // Tiny or unknown images clamp to a 100-pixel dimension.
        assert_eq!(threshold(ShapeFamily::Region, Some(10), 20, 30), 10.0);
        assert_eq!(threshold(ShapeFamily::Region, Some(10), 0, 0), 10.0);
    }

    #[test]
    fn test_curve_threshold() {
        assert_eq!(threshold(ShapeFamily::Curve, Some(5), 640, 480), 30.0);
        assert_eq!(threshold(ShapeFamily::Curve, None, 640, 480), 30.0);
        // Image size never enters the curve derivation.
        assert_eq!(threshold(ShapeFamily::Curve, Some(5), 0, 0), 30.0);
    }

    #[test]
    fn test_segmented_threshold() {
        assert_eq!(threshold(ShapeFamily::Segmented, Some(2), 200, 100), 4.0);
        assert_eq!(threshold(ShapeFamily::Segmented, None, 200, 100), 30.0);
    }

    #[test]
    fn test_zero_percent_is_respected() {
        assert_eq!(threshold(ShapeFamily::Region, Some(0), 640, 480), 0.0);
        assert_eq!(threshold(ShapeFamily::Curve, Some(0), 640, 480), 0.0);
    }
}
