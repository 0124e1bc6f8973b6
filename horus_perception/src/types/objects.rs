//! Object-level perception messages
//!
//! Detected, tracked and predicted object batches as published by an
//! Autoware-style perception pipeline. Only the fields consumed downstream
//! are modeled; unknown fields are ignored when decoding.

use crate::log_summary::LogSummary;
use crate::types::geometry::{Pose, PoseWithCovariance, Vector3};
use crate::types::header::{Duration, Header};
use serde::{Deserialize, Serialize};

/// One classification hypothesis for an object
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectClassification {
    /// Category code; `None` when the publisher left it undefined
    pub label: Option<u8>,
    /// Hypothesis probability (0.0 - 1.0)
    #[serde(default)]
    pub probability: f32,
}

impl ObjectClassification {
    pub const UNKNOWN: u8 = 0;
    pub const CAR: u8 = 1;
    pub const BICYCLE: u8 = 2;
    pub const BUS: u8 = 3;
    pub const TRUCK: u8 = 4;
    pub const CYCLIST: u8 = 5;
    pub const MOTORCYCLE: u8 = 6;
    pub const PEDESTRIAN: u8 = 7;

    /// Create a classification with a defined label
    pub fn new(label: u8, probability: f32) -> Self {
        Self {
            label: Some(label),
            probability,
        }
    }
}

/// Object bounding volume
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Shape kind (bounding box, cylinder, polygon)
    #[serde(rename = "type", default)]
    pub shape_type: u8,
    /// Extents along x (length), y (width), z (height) in meters
    pub dimensions: Vector3,
}

impl Shape {
    pub const BOUNDING_BOX: u8 = 0;
    pub const CYLINDER: u8 = 1;
    pub const POLYGON: u8 = 2;

    /// Bounding-box shape with the given extents
    pub fn bounding_box(dimensions: Vector3) -> Self {
        Self {
            shape_type: Self::BOUNDING_BOX,
            dimensions,
        }
    }
}

/// 128-bit object identifier (`unique_identifier_msgs/UUID`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Uuid {
    pub uuid: [u8; 16],
}

// ============================================================================
// Detected objects
// ============================================================================

/// Kinematic state of a detected object
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectedObjectKinematics {
    pub pose_with_covariance: PoseWithCovariance,
    #[serde(default)]
    pub has_position_covariance: bool,
    /// 0 = unavailable, 1 = sign unknown, 2 = available
    #[serde(default)]
    pub orientation_availability: u8,
}

/// Single detected object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectedObject {
    /// Existence confidence (0.0 - 1.0)
    #[serde(default)]
    pub existence_probability: f32,
    /// Classification hypotheses, most likely first
    #[serde(default)]
    pub classification: Vec<ObjectClassification>,
    pub kinematics: DetectedObjectKinematics,
    pub shape: Shape,
}

impl DetectedObject {
    /// Create a detected object with a single classification
    pub fn new(label: u8, pose: Pose, dimensions: Vector3) -> Self {
        Self {
            existence_probability: 1.0,
            classification: vec![ObjectClassification::new(label, 1.0)],
            kinematics: DetectedObjectKinematics {
                pose_with_covariance: PoseWithCovariance::from_pose(pose),
                ..Default::default()
            },
            shape: Shape::bounding_box(dimensions),
        }
    }

    /// Set existence probability
    pub fn with_existence_probability(mut self, p: f32) -> Self {
        self.existence_probability = p;
        self
    }
}

/// Batch of detected objects
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectedObjects {
    pub header: Header,
    #[serde(default)]
    pub objects: Vec<DetectedObject>,
}

// ============================================================================
// Tracked objects
// ============================================================================

/// Kinematic state of a tracked object
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackedObjectKinematics {
    pub pose_with_covariance: PoseWithCovariance,
    #[serde(default)]
    pub orientation_availability: u8,
    #[serde(default)]
    pub is_stationary: bool,
}

/// Single tracked object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackedObject {
    #[serde(default)]
    pub object_id: Uuid,
    #[serde(default)]
    pub existence_probability: f32,
    #[serde(default)]
    pub classification: Vec<ObjectClassification>,
    pub kinematics: TrackedObjectKinematics,
    pub shape: Shape,
}

impl TrackedObject {
    /// Create a tracked object with a single classification
    pub fn new(label: u8, pose: Pose, dimensions: Vector3) -> Self {
        Self {
            object_id: Uuid::default(),
            existence_probability: 1.0,
            classification: vec![ObjectClassification::new(label, 1.0)],
            kinematics: TrackedObjectKinematics {
                pose_with_covariance: PoseWithCovariance::from_pose(pose),
                ..Default::default()
            },
            shape: Shape::bounding_box(dimensions),
        }
    }
}

/// Batch of tracked objects
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackedObjects {
    pub header: Header,
    #[serde(default)]
    pub objects: Vec<TrackedObject>,
}

// ============================================================================
// Predicted objects
// ============================================================================

/// One candidate future trajectory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictedPath {
    /// Poses sampled along the trajectory, in order
    #[serde(default)]
    pub path: Vec<Pose>,
    /// Time between consecutive samples
    #[serde(default)]
    pub time_step: Duration,
    /// Path confidence (0.0 - 1.0)
    #[serde(default)]
    pub confidence: f32,
}

impl PredictedPath {
    /// Create a path from poses
    pub fn new(path: Vec<Pose>, confidence: f32) -> Self {
        Self {
            path,
            time_step: Duration::default(),
            confidence,
        }
    }
}

/// Kinematic state and predictions of a predicted object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictedObjectKinematics {
    pub initial_pose_with_covariance: PoseWithCovariance,
    /// Candidate paths, most likely first
    #[serde(default)]
    pub predicted_paths: Vec<PredictedPath>,
}

/// Single predicted object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictedObject {
    #[serde(default)]
    pub object_id: Uuid,
    #[serde(default)]
    pub existence_probability: f32,
    #[serde(default)]
    pub classification: Vec<ObjectClassification>,
    pub kinematics: PredictedObjectKinematics,
    pub shape: Shape,
}

impl PredictedObject {
    /// Create a predicted object with a single classification and no paths
    pub fn new(label: u8, pose: Pose, dimensions: Vector3) -> Self {
        Self {
            object_id: Uuid::default(),
            existence_probability: 1.0,
            classification: vec![ObjectClassification::new(label, 1.0)],
            kinematics: PredictedObjectKinematics {
                initial_pose_with_covariance: PoseWithCovariance::from_pose(pose),
                predicted_paths: Vec::new(),
            },
            shape: Shape::bounding_box(dimensions),
        }
    }

    /// Append a candidate path
    pub fn with_path(mut self, path: PredictedPath) -> Self {
        self.kinematics.predicted_paths.push(path);
        self
    }
}

/// Batch of predicted objects
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictedObjects {
    pub header: Header,
    #[serde(default)]
    pub objects: Vec<PredictedObject>,
}

// ============================================================================
// LogSummary Implementations
// ============================================================================

impl LogSummary for DetectedObjects {
    fn log_summary(&self) -> String {
        format!(
            "DetectedObjects(frame='{}', {} objects)",
            self.header.frame_id,
            self.objects.len()
        )
    }
}

impl LogSummary for TrackedObjects {
    fn log_summary(&self) -> String {
        format!(
            "TrackedObjects(frame='{}', {} objects)",
            self.header.frame_id,
            self.objects.len()
        )
    }
}

impl LogSummary for PredictedObjects {
    fn log_summary(&self) -> String {
        let paths: usize = self
            .objects
            .iter()
            .map(|o| o.kinematics.predicted_paths.len())
            .sum();
        format!(
            "PredictedObjects(frame='{}', {} objects, {} paths)",
            self.header.frame_id,
            self.objects.len(),
            paths
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined_label_decodes_as_none() {
        let c: ObjectClassification = serde_json::from_str(r#"{"probability":0.4}"#).unwrap();
        assert_eq!(c.label, None);
        let c: ObjectClassification =
            serde_json::from_str(r#"{"label":null,"probability":0.4}"#).unwrap();
        assert_eq!(c.label, None);
    }

    #[test]
    fn test_shape_type_field_name() {
        let s: Shape = serde_json::from_str(
            r#"{"type":1,"footprint":{"points":[]},"dimensions":{"x":1.0,"y":2.0,"z":3.0}}"#,
        )
        .unwrap();
        assert_eq!(s.shape_type, Shape::CYLINDER);
        assert_eq!(s.dimensions.z, 3.0);
    }

    #[test]
    fn test_predicted_object_builder() {
        let obj = PredictedObject::new(
            ObjectClassification::CAR,
            Pose::from_position(1.0, 0.0, 0.0),
            Vector3::new(4.0, 2.0, 1.5),
        )
        .with_path(PredictedPath::new(vec![Pose::default(); 3], 0.9));
        assert_eq!(obj.kinematics.predicted_paths.len(), 1);
        assert_eq!(obj.kinematics.predicted_paths[0].path.len(), 3);
    }

    #[test]
    fn test_log_summary() {
        let msg = PredictedObjects {
            header: Header::new(Default::default(), "map"),
            objects: vec![PredictedObject::default(), PredictedObject::default()],
        };
        assert_eq!(
            msg.log_summary(),
            "PredictedObjects(frame='map', 2 objects, 0 paths)"
        );
    }
}
