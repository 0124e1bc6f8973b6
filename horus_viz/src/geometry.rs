//! Primitive builders
//!
//! Pure functions from pose/extents/color to scene or image primitives.
//! Inputs pass through unmodified except for two shifts: `oriented_box`
//! lowers the center by half the height, and `text_label` lifts the label
//! above its anchor (clamped to the image top).

use crate::config::AnnotationStyle;
use horus_perception::{
    Color, CubePrimitive, LinePrimitive, LineType, Point, Point2, PointsAnnotation,
    PointsAnnotationType, Pose, SpherePrimitive, TextAnnotation, TextPrimitive, Time, Vector3,
};

/// Font size of floating 3D labels (scene units)
pub const LABEL_FONT_SIZE: f64 = 1.0;

/// Corner pairs of a cuboid: bottom quad, top quad, then the 4 verticals.
/// Indexes into the corner order produced by [`cuboid_corners`].
pub const WIREFRAME_EDGES: [u32; 24] = [
    0, 1, 1, 2, 2, 3, 3, 0, // bottom
    4, 5, 5, 6, 6, 7, 7, 4, // top
    0, 4, 1, 5, 2, 6, 3, 7, // verticals
];

/// Solid box whose bottom face sits at the pose's z
pub fn oriented_box(extents: &Vector3, pose: &Pose, color: Color) -> CubePrimitive {
    CubePrimitive {
        pose: Pose {
            position: Point {
                x: pose.position.x,
                y: pose.position.y,
                z: pose.position.z - 0.5 * extents.z,
            },
            orientation: pose.orientation,
        },
        size: *extents,
        color,
    }
}

/// The 8 corners of a box centered on the origin
///
/// Order: bottom quad counter-clockwise from (-x, -y), then the top quad in
/// the same order.
pub fn cuboid_corners(extents: &Vector3) -> [Point; 8] {
    let (hx, hy, hz) = (extents.x / 2.0, extents.y / 2.0, extents.z / 2.0);
    [
        Point::new(-hx, -hy, -hz),
        Point::new(hx, -hy, -hz),
        Point::new(hx, hy, -hz),
        Point::new(-hx, hy, -hz),
        Point::new(-hx, -hy, hz),
        Point::new(hx, -hy, hz),
        Point::new(hx, hy, hz),
        Point::new(-hx, hy, hz),
    ]
}

/// 12-edge cuboid as a line list, centered on the pose (no ground shift)
pub fn wireframe_box(extents: &Vector3, pose: &Pose, color: Color, thickness: f64) -> LinePrimitive {
    LinePrimitive {
        line_type: LineType::LineList,
        pose: *pose,
        thickness,
        scale_invariant: false,
        points: cuboid_corners(extents).to_vec(),
        color,
        colors: Vec::new(),
        indices: WIREFRAME_EDGES.to_vec(),
    }
}

/// Sphere marking one sample of a predicted path
pub fn path_marker(pose: &Pose, color: Color, size: f64) -> SpherePrimitive {
    SpherePrimitive {
        pose: *pose,
        size: Vector3::splat(size),
        color,
    }
}

/// Closed rectangle in pixel space (first corner repeated last)
pub fn rectangle_outline(x: f64, y: f64, w: f64, h: f64) -> Vec<Point2> {
    vec![
        Point2::new(x, y),
        Point2::new(x + w, y),
        Point2::new(x + w, y + h),
        Point2::new(x, y + h),
        Point2::new(x, y),
    ]
}

/// Rectangle outline annotation with a translucent fill of the same hue
pub fn outline_annotation(
    timestamp: Time,
    points: Vec<Point2>,
    outline: Color,
    style: &AnnotationStyle,
) -> PointsAnnotation {
    PointsAnnotation {
        timestamp,
        annotation_type: PointsAnnotationType::LineLoop,
        points,
        outline_color: outline,
        outline_colors: Vec::new(),
        fill_color: outline.with_alpha(style.fill_alpha),
        thickness: style.thickness,
    }
}

/// Text placed `style.text_offset_px` above the anchor, never above row 0
pub fn text_label(
    timestamp: Time,
    anchor: Point2,
    text: String,
    color: Color,
    style: &AnnotationStyle,
) -> TextAnnotation {
    TextAnnotation {
        timestamp,
        position: Point2::new(anchor.x, (anchor.y - style.text_offset_px).max(0.0)),
        text,
        font_size: style.font_size,
        text_color: color,
        background_color: style.background,
    }
}

/// Camera-facing label floating `lift` above the top of an object
pub fn floating_label(
    extents: &Vector3,
    pose: &Pose,
    text: &str,
    color: Color,
    lift: f64,
) -> TextPrimitive {
    TextPrimitive {
        pose: Pose {
            position: Point {
                z: pose.position.z + extents.z / 2.0 + lift,
                ..pose.position
            },
            orientation: pose.orientation,
        },
        billboard: true,
        font_size: LABEL_FONT_SIZE,
        scale_invariant: false,
        color,
        text: text.to_string(),
    }
}
