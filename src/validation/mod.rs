//! Annotation set validation for annograde.
//!
//! The engine itself never rejects malformed geometry; it silently grades
//! it as incorrect or missing. This module is the loud counterpart: it
//! inspects an [`AnnotationSet`] and reports the shapes the engine can
//! never match, so reference sets with broken geometry are caught before
//! a training session instead of surfacing as mysterious grades.

mod report;

pub use report::{IssueCode, IssueContext, Severity, ValidationIssue, ValidationReport};

use crate::shape::{AnnotationSet, Shape};

/// Options for validation behavior.
#[derive(Clone, Debug, Default)]
pub struct ValidateOptions {
    /// If true, treat warnings as errors.
    pub strict: bool,
}

/// Validates an annotation set and returns a report of all issues found.
///
/// This checks:
/// - Image dimensions are positive
/// - All coordinates and ratios are finite
/// - Regions and segmented shapes have at least one point
/// - Curves have enough control points to describe a segment
/// - Segmented ratio/label lists agree in length, ratios lie in [0, 1],
///   and labels are non-empty
pub fn validate_set(set: &AnnotationSet, _opts: &ValidateOptions) -> ValidationReport {
    let mut report = ValidationReport::new();

    if set.image_width == 0 || set.image_height == 0 {
        report.add(ValidationIssue::error(
            IssueCode::InvalidImageDimensions,
            format!(
                "Invalid dimensions {}x{} (must be positive)",
                set.image_width, set.image_height
            ),
            IssueContext::Set,
        ));
    }

    for (index, shape) in set.shapes.iter().enumerate() {
        validate_shape(shape, index, &mut report);
    }

    report
}

/// Validates a single shape.
fn validate_shape(shape: &Shape, index: usize, report: &mut ValidationReport) {
    let context = IssueContext::Shape { index };

    if !shape.is_finite() {
        report.add(ValidationIssue::error(
            IssueCode::ShapeNotFinite,
            "Non-finite coordinate or ratio",
            context.clone(),
        ));
        return; // Skip further geometry checks if values are invalid
    }

    match shape {
        Shape::Region(region) => {
            if region.points.is_empty() {
                report.add(ValidationIssue::warning(
                    IssueCode::EmptyPointList,
                    "Region has no points and matches vacuously",
                    context,
                ));
            }
        }
        Shape::Curve(curve) => {
            if curve.control_points.len() < 3 {
                report.add(ValidationIssue::error(
                    IssueCode::CurveTooShort,
                    format!(
                        "Curve has {} control point(s), needs at least 3",
                        curve.control_points.len()
                    ),
                    context,
                ));
            }
        }
        Shape::Segmented(segmented) => {
            if segmented.points.is_empty() {
                report.add(ValidationIssue::warning(
                    IssueCode::EmptyPointList,
                    "Segmented shape has no points and matches vacuously",
                    context.clone(),
                ));
            }

            if segmented.segment_ratios.len() != segmented.segment_labels.len() {
                report.add(ValidationIssue::error(
                    IssueCode::SegmentArityMismatch,
                    format!(
                        "{} ratio(s) but {} label(s)",
                        segmented.segment_ratios.len(),
                        segmented.segment_labels.len()
                    ),
                    context.clone(),
                ));
            }

            for (i, ratio) in segmented.segment_ratios.iter().enumerate() {
                if !(0.0..=1.0).contains(ratio) {
                    report.add(ValidationIssue::warning(
                        IssueCode::RatioOutOfRange,
                        format!("Segment {} ratio {} outside [0, 1]", i, ratio),
                        context.clone(),
                    ));
                }
            }

            for (i, label) in segmented.segment_labels.iter().enumerate() {
                if label.is_empty() {
                    report.add(ValidationIssue::warning(
                        IssueCode::EmptySegmentLabel,
                        format!("Segment {} has an empty label", i),
                        context.clone(),
                    ));
                }
            }
        }
    }
}
