//! Core shape model for annotation reconciliation.
//!
//! This module defines the canonical representation of a single geometric
//! annotation. Upstream capture surfaces (canvas, review screens) decode
//! their raw annotation records into these types before asking the engine
//! for a verdict; the engine itself never parses or renders anything.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::point::Point;

/// The geometric role of a region shape.
///
/// All kinds are matched the same way (as ordered point lists); the kind
/// only has to agree between two shapes for them to be comparable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Axis-aligned bounding box, stored as two corner points.
    BoundingBox,
    /// Four-corner quadrilateral.
    Quadrilateral,
    /// Closed polygon with an arbitrary number of vertices.
    Polygon,
    /// Free-form connected line (an open path).
    ConnectedLine,
}

impl ShapeKind {
    /// Returns the snake_case name used in serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::BoundingBox => "bounding_box",
            ShapeKind::Quadrilateral => "quadrilateral",
            ShapeKind::Polygon => "polygon",
            ShapeKind::ConnectedLine => "connected_line",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The matching family a reconciliation call operates on.
///
/// Each family has its own similarity predicate and threshold derivation;
/// shapes from another family never match within a call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeFamily {
    /// Boxes, quadrilaterals, polygons and free paths (pixel space).
    Region,
    /// Parametric curves described by Bézier control points.
    Curve,
    /// Multi-segment paths with per-segment ratios and labels.
    Segmented,
}

impl fmt::Display for ShapeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeFamily::Region => write!(f, "region"),
            ShapeFamily::Curve => write!(f, "curve"),
            ShapeFamily::Segmented => write!(f, "segmented"),
        }
    }
}

/// A region annotation: an ordered point list with optional metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionShape {
    /// The geometric role of this region.
    pub kind: ShapeKind,

    /// Ordered vertex list in pixel coordinates.
    pub points: Vec<Point>,

    /// Optional class label (e.g., "car"). Compared case-insensitively;
    /// an absent label is treated as the empty string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Free-form tags attached by the annotator.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl RegionShape {
    /// Creates a new region shape with no label or tags.
    pub fn new(kind: ShapeKind, points: Vec<Point>) -> Self {
        Self {
            kind,
            points,
            label: None,
            tags: Vec::new(),
        }
    }

    /// Sets the class label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Adds a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }
}

/// A curve annotation described by quadratic Bézier control points.
///
/// Control points are consumed in overlapping triples: points `2j`,
/// `2j + 1` and `2j + 2` define one quadratic segment, so consecutive
/// segments share an endpoint. Fewer than three control points describe
/// no curve at all and never match anything.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveShape {
    /// Ordered control-point list in pixel coordinates.
    pub control_points: Vec<Point>,
}

impl CurveShape {
    /// Creates a new curve shape.
    pub fn new(control_points: Vec<Point>) -> Self {
        Self { control_points }
    }
}

/// A path subdivided into ordered segments, each with a relative length
/// ratio and an independent text label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SegmentedShape {
    /// Ordered vertex list of the underlying path.
    pub points: Vec<Point>,

    /// Relative length of each segment (fractions of the whole path).
    pub segment_ratios: Vec<f64>,

    /// Text label captured for each segment. Compared case-sensitively.
    pub segment_labels: Vec<String>,
}

impl SegmentedShape {
    /// Creates a new segmented shape.
    pub fn new(points: Vec<Point>, segment_ratios: Vec<f64>, segment_labels: Vec<String>) -> Self {
        Self {
            points,
            segment_ratios,
            segment_labels,
        }
    }
}

/// A single geometric annotation.
///
/// This is a closed tagged union: each variant belongs to exactly one
/// [`ShapeFamily`] and is graded by that family's similarity predicate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    /// Boxes, quadrilaterals, polygons, free paths.
    Region(RegionShape),
    /// Bézier-described curves (e.g., lane lines).
    Curve(CurveShape),
    /// Segmented multi-label paths.
    Segmented(SegmentedShape),
}

impl Shape {
    /// Creates a region shape.
    pub fn region(kind: ShapeKind, points: Vec<Point>) -> Self {
        Shape::Region(RegionShape::new(kind, points))
    }

    /// Creates a curve shape.
    pub fn curve(control_points: Vec<Point>) -> Self {
        Shape::Curve(CurveShape::new(control_points))
    }

    /// Creates a segmented shape.
    pub fn segmented(
        points: Vec<Point>,
        segment_ratios: Vec<f64>,
        segment_labels: Vec<String>,
    ) -> Self {
        Shape::Segmented(SegmentedShape::new(points, segment_ratios, segment_labels))
    }

    /// Returns the matching family this shape belongs to.
    pub fn family(&self) -> ShapeFamily {
        match self {
            Shape::Region(_) => ShapeFamily::Region,
            Shape::Curve(_) => ShapeFamily::Curve,
            Shape::Segmented(_) => ShapeFamily::Segmented,
        }
    }

    /// Returns true if every coordinate in the shape is finite.
    pub fn is_finite(&self) -> bool {
        match self {
            Shape::Region(region) => region.points.iter().all(Point::is_finite),
            Shape::Curve(curve) => curve.control_points.iter().all(Point::is_finite),
            Shape::Segmented(segmented) => {
                segmented.points.iter().all(Point::is_finite)
                    && segmented.segment_ratios.iter().all(|r| r.is_finite())
            }
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Region(region) => {
                write!(f, "{} ({} points)", region.kind, region.points.len())?;
                if let Some(label) = &region.label {
                    write!(f, " '{}'", label)?;
                }
                Ok(())
            }
            Shape::Curve(curve) => {
                write!(f, "curve ({} control points)", curve.control_points.len())
            }
            Shape::Segmented(segmented) => write!(
                f,
                "segmented ({} points, {} segments)",
                segmented.points.len(),
                segmented.segment_ratios.len()
            ),
        }
    }
}

/// A set of annotations on one image, as exchanged with the CLI.
///
/// The engine itself only sees shape slices; this wrapper carries the
/// image dimensions the threshold derivation needs.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AnnotationSet {
    /// Width of the annotated image in pixels.
    pub image_width: u32,

    /// Height of the annotated image in pixels.
    pub image_height: u32,

    /// All shapes drawn on the image.
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

impl AnnotationSet {
    /// Creates an empty annotation set for an image of the given size.
    pub fn new(image_width: u32, image_height: u32) -> Self {
        Self {
            image_width,
            image_height,
            shapes: Vec::new(),
        }
    }

    /// Adds a shape to the set.
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shapes.push(shape);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_families() {
        let region = Shape::region(
            ShapeKind::BoundingBox,
            vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)],
        );
        let curve = Shape::curve(vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 5.0),
            Point::new(10.0, 0.0),
        ]);
        let segmented = Shape::segmented(
            vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
            vec![1.0],
            vec!["lane".into()],
        );

        assert_eq!(region.family(), ShapeFamily::Region);
        assert_eq!(curve.family(), ShapeFamily::Curve);
        assert_eq!(segmented.family(), ShapeFamily::Segmented);
    }

    #[test]
    fn test_region_builder_pattern() {
        let region = RegionShape::new(
            ShapeKind::Polygon,
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(5.0, 8.0),
            ],
        )
        .with_label("roof")
        .with_tag("occluded")
        .with_tag("truncated");

        assert_eq!(region.label.as_deref(), Some("roof"));
        assert_eq!(region.tags.len(), 2);
    }

    #[test]
    fn test_is_finite() {
        let good = Shape::region(ShapeKind::BoundingBox, vec![Point::new(1.0, 2.0)]);
        assert!(good.is_finite());

        let bad = Shape::region(ShapeKind::BoundingBox, vec![Point::new(f64::NAN, 2.0)]);
        assert!(!bad.is_finite());

        let bad_ratio = Shape::segmented(
            vec![Point::new(0.0, 0.0)],
            vec![f64::INFINITY],
            vec!["a".into()],
        );
        assert!(!bad_ratio.is_finite());
    }

    #[test]
    fn test_annotation_set_builder() {
        let set = AnnotationSet::new(640, 480).with_shape(Shape::region(
            ShapeKind::BoundingBox,
            vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)],
        ));

        assert_eq!(set.image_width, 640);
        assert_eq!(set.shapes.len(), 1);
    }
}
