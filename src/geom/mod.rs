//! Curve geometry: piecewise quadratic Bézier sampling and arc-length
//! resampling.
//!
//! Curve annotations are stored as control-point lists; two curves can only
//! be compared point-wise once both are resampled to the same fixed number
//! of points evenly spaced along their length. The resampling walks a very
//! fine subdivision of the curve and emits a point every time the
//! accumulated arc length crosses the next even spacing of the total.

use crate::shape::Point;

/// Number of equidistant points a curve is resampled to for comparison.
pub const CURVE_SAMPLE_COUNT: usize = 50;

// Fineness of the raw subdivision each quadratic segment is walked at
// before arc lengths are accumulated.
const RAW_STEPS_PER_SAMPLE: usize = 50;

/// Samples the piecewise quadratic Bézier curve described by
/// `control_points` at `steps + 1` parameter values per segment.
///
/// Segments are built from overlapping control-point triples
/// `(2j, 2j+1, 2j+2)`; fewer than three control points yield no samples.
fn curve_points(control_points: &[Point], steps: usize) -> Vec<Point> {
    let mut samples = Vec::new();

    if control_points.len() < 3 || steps == 0 {
        return samples;
    }

    let mut j = 0;
    while j + 2 < control_points.len() {
        let p0 = control_points[j];
        let p1 = control_points[j + 1];
        let p2 = control_points[j + 2];

        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let u = 1.0 - t;
            let x = u * u * p0.x + 2.0 * u * t * p1.x + t * t * p2.x;
            let y = u * u * p0.y + 2.0 * u * t * p1.y + t * t * p2.y;
            samples.push(Point::new(x, y));
        }

        j += 2;
    }

    samples
}

/// Resamples a control-point curve into up to `count` points evenly spaced
/// along its arc length.
///
/// The walk accumulates segment lengths over the raw subdivision and emits
/// the current sample every time the accumulator exceeds `total / count`,
/// then resets it. Degenerate curves (fewer than three control points, or
/// zero total length) resample to an empty list, which downstream
/// comparison treats as "never similar".
pub fn equidistant_points(control_points: &[Point], count: usize) -> Vec<Point> {
    let raw = curve_points(control_points, count * RAW_STEPS_PER_SAMPLE);
    if raw.is_empty() || count == 0 {
        return Vec::new();
    }

    let total_length: f64 = raw.windows(2).map(|pair| pair[0].distance(&pair[1])).sum();
    let segment_length = total_length / count as f64;

    let mut result = Vec::with_capacity(count);
    let mut current_length = 0.0;
    for i in 1..raw.len() {
        current_length += raw[i].distance(&raw[i - 1]);
        if current_length > segment_length {
            result.push(raw[i]);
            current_length = 0.0;
        }
    }

    result
}

/// Index-aligned maximum distance between two resampled curves.
///
/// Pairs are compared positionally; the shorter curve bounds the
/// comparison. Returns `None` when either curve is empty.
pub fn max_aligned_distance(curve1: &[Point], curve2: &[Point]) -> Option<f64> {
    curve1
        .iter()
        .zip(curve2)
        .map(|(a, b)| a.distance(b))
        .reduce(f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arc_controls() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(50.0, 80.0),
            Point::new(100.0, 0.0),
        ]
    }

    #[test]
    fn test_short_control_list_yields_nothing() {
        assert!(equidistant_points(&[], CURVE_SAMPLE_COUNT).is_empty());
        assert!(equidistant_points(&[Point::new(0.0, 0.0)], CURVE_SAMPLE_COUNT).is_empty());
        assert!(equidistant_points(
            &[Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
            CURVE_SAMPLE_COUNT
        )
        .is_empty());
    }

    #[test]
    fn test_resample_count_is_close_to_target() {
        let resampled = equidistant_points(&arc_controls(), CURVE_SAMPLE_COUNT);
        // The accumulate-and-reset walk can drop a point or two at the tail.
        assert!(resampled.len() <= CURVE_SAMPLE_COUNT);
        assert!(resampled.len() >= CURVE_SAMPLE_COUNT - 2);
    }

    #[test]
    fn test_resample_is_deterministic() {
        let a = equidistant_points(&arc_controls(), CURVE_SAMPLE_COUNT);
        let b = equidistant_points(&arc_controls(), CURVE_SAMPLE_COUNT);
        assert_eq!(a, b);
    }

    #[test]
    fn test_translated_curve_resamples_to_translated_points() {
        let base = equidistant_points(&arc_controls(), CURVE_SAMPLE_COUNT);
        let shifted_controls: Vec<Point> = arc_controls()
            .iter()
            .map(|p| Point::new(p.x, p.y + 5.0))
            .collect();
        let shifted = equidistant_points(&shifted_controls, CURVE_SAMPLE_COUNT);

        // Rounding at an accumulator boundary can shift the selection by a
        // raw sample, so allow sub-pixel slack rather than exact equality.
        assert!((base.len() as i64 - shifted.len() as i64).abs() <= 1);
        for (a, b) in base.iter().zip(&shifted) {
            assert!((a.x - b.x).abs() < 0.5);
            assert!((b.y - a.y - 5.0).abs() < 0.5);
        }
    }

    #[test]
    fn test_zero_length_curve_resamples_to_nothing() {
        let degenerate = vec![
            Point::new(5.0, 5.0),
            Point::new(5.0, 5.0),
            Point::new(5.0, 5.0),
        ];
        assert!(equidistant_points(&degenerate, CURVE_SAMPLE_COUNT).is_empty());
    }

    #[test]
    fn test_max_aligned_distance() {
        let a = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        let b = vec![Point::new(0.0, 3.0), Point::new(1.0, 4.0)];
        assert_eq!(max_aligned_distance(&a, &b), Some(4.0));
        assert_eq!(max_aligned_distance(&a, &[]), None);
    }
}
