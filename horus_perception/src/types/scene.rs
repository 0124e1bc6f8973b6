//! 3D scene messages (`foxglove.SceneUpdate`)
//!
//! A scene update carries entities; each entity groups typed primitive arrays
//! that share one timestamp, frame and lifetime. The schema is fixed-shape:
//! every array is always present, possibly empty.

use crate::log_summary::LogSummary;
use crate::types::geometry::{Color, Point, Pose, Vector3};
use crate::types::header::{foxglove_time, Duration, Time};
use serde::{Deserialize, Serialize};

/// How `LinePrimitive::points` are joined
#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum LineType {
    /// Connected polyline
    #[default]
    LineStrip = 0,
    /// Closed polyline
    LineLoop = 1,
    /// Independent segments, one per pair of points
    LineList = 2,
}

impl From<LineType> for u8 {
    fn from(t: LineType) -> u8 {
        t as u8
    }
}

impl TryFrom<u8> for LineType {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(LineType::LineStrip),
            1 => Ok(LineType::LineLoop),
            2 => Ok(LineType::LineList),
            other => Err(format!("invalid line type {}", other)),
        }
    }
}

/// Solid box
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CubePrimitive {
    /// Center and orientation
    pub pose: Pose,
    /// Edge lengths
    pub size: Vector3,
    pub color: Color,
}

/// Ellipsoid (sphere when all sizes are equal)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpherePrimitive {
    pub pose: Pose,
    /// Diameters along each axis
    pub size: Vector3,
    pub color: Color,
}

/// Polyline or segment list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    #[serde(rename = "type")]
    pub line_type: LineType,
    /// Origin of the points' frame
    pub pose: Pose,
    pub thickness: f64,
    /// Thickness in screen pixels instead of scene units
    pub scale_invariant: bool,
    pub points: Vec<Point>,
    pub color: Color,
    /// Per-point colors; empty means `color` applies to all
    pub colors: Vec<Color>,
    /// Point indices; empty means points are used in order
    pub indices: Vec<u32>,
}

/// Text in the 3D scene
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub pose: Pose,
    /// Always face the camera
    pub billboard: bool,
    pub font_size: f64,
    pub scale_invariant: bool,
    pub color: Color,
    pub text: String,
}

/// Arrow
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ArrowPrimitive {
    pub pose: Pose,
    pub shaft_length: f64,
    pub shaft_diameter: f64,
    pub head_length: f64,
    pub head_diameter: f64,
    pub color: Color,
}

/// Cylinder or cone
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CylinderPrimitive {
    pub pose: Pose,
    pub size: Vector3,
    pub bottom_scale: f64,
    pub top_scale: f64,
    pub color: Color,
}

/// Triangle mesh
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriangleListPrimitive {
    pub pose: Pose,
    pub points: Vec<Point>,
    pub color: Color,
    pub colors: Vec<Color>,
    pub indices: Vec<u32>,
}

/// External 3D model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelPrimitive {
    pub pose: Pose,
    pub scale: Vector3,
    pub color: Color,
    pub override_color: bool,
    pub url: String,
    pub media_type: String,
    pub data: Vec<u8>,
}

/// Entity metadata entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValuePair {
    pub key: String,
    pub value: String,
}

/// Request to remove previously published entities
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneEntityDeletion {
    #[serde(with = "foxglove_time")]
    pub timestamp: Time,
    /// 0 = matching id, 1 = all
    #[serde(rename = "type")]
    pub deletion_type: u8,
    pub id: String,
}

/// Group of primitives sharing one timestamp, frame and lifetime
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneEntity {
    #[serde(with = "foxglove_time")]
    pub timestamp: Time,
    pub frame_id: String,
    /// Entities with the same id replace each other
    pub id: String,
    /// How long the entity stays visible; zero means forever
    #[serde(with = "foxglove_time")]
    pub lifetime: Duration,
    /// Keep the entity fixed to its frame as the frame moves
    pub frame_locked: bool,
    pub metadata: Vec<KeyValuePair>,
    pub arrows: Vec<ArrowPrimitive>,
    pub cubes: Vec<CubePrimitive>,
    pub spheres: Vec<SpherePrimitive>,
    pub cylinders: Vec<CylinderPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub triangles: Vec<TriangleListPrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub models: Vec<ModelPrimitive>,
}

impl SceneEntity {
    /// Total number of primitives across all arrays
    pub fn primitive_count(&self) -> usize {
        self.arrows.len()
            + self.cubes.len()
            + self.spheres.len()
            + self.cylinders.len()
            + self.lines.len()
            + self.triangles.len()
            + self.texts.len()
            + self.models.len()
    }
}

/// Batch of entity updates and deletions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneUpdate {
    pub deletions: Vec<SceneEntityDeletion>,
    pub entities: Vec<SceneEntity>,
}

// ============================================================================
// LogSummary Implementations
// ============================================================================

impl LogSummary for SceneEntity {
    fn log_summary(&self) -> String {
        format!(
            "SceneEntity('{}', frame='{}', cubes={}, lines={}, spheres={}, texts={})",
            self.id,
            self.frame_id,
            self.cubes.len(),
            self.lines.len(),
            self.spheres.len(),
            self.texts.len()
        )
    }
}

impl LogSummary for SceneUpdate {
    fn log_summary(&self) -> String {
        let primitives: usize = self.entities.iter().map(|e| e.primitive_count()).sum();
        format!(
            "SceneUpdate({} entities, {} primitives, {} deletions)",
            self.entities.len(),
            primitives,
            self.deletions.len()
        )
    }
}
