//! HORUS Perception Message Types
//!
//! This crate provides the message shapes exchanged between an Autoware-style
//! perception stack and a Foxglove-style scene viewer. All types derive
//! `Serialize` / `Deserialize` with ROS 2 field names so they decode directly
//! from JSON-encoded messages.
//!
//! # Types
//!
//! Input (perception):
//!
//! - [`DetectedObjects`] - Objects detected in the current frame
//! - [`TrackedObjects`] - Objects with persistent tracking IDs
//! - [`PredictedObjects`] - Tracked objects with predicted future paths
//! - [`DetectedObjectsWithFeature`] - Detections with image ROI + point cluster
//! - [`TrafficLightRoiArray`] - Traffic-light regions in camera images
//!
//! Output (visualization):
//!
//! - [`SceneUpdate`] - 3D scene entities (cubes, lines, spheres, texts)
//! - [`ImageAnnotations`] - 2D image overlays (polylines, texts)
//!
//! Flat geometric values ([`Point`], [`Quaternion`], [`Pose`], [`Color`], ...)
//! are `#[repr(C)]` and implement `Pod` / `Zeroable`.
//!
//! # Example
//!
//! ```rust,ignore
//! use horus_perception::{DetectedObjects, LogSummary};
//!
//! let msg: DetectedObjects = serde_json::from_slice(&payload)?;
//! println!("{}", msg.log_summary());
//! ```

pub mod log_summary;
pub mod types;

pub use log_summary::LogSummary;
pub use types::annotations::{
    CircleAnnotation, ImageAnnotations, PointsAnnotation, PointsAnnotationType, TextAnnotation,
};
pub use types::geometry::{Color, Point, Point2, Pose, PoseWithCovariance, Quaternion, Vector3};
pub use types::header::{Duration, Header, Time};
pub use types::objects::{
    DetectedObject, DetectedObjectKinematics, DetectedObjects, ObjectClassification,
    PredictedObject, PredictedObjectKinematics, PredictedObjects, PredictedPath, Shape,
    TrackedObject, TrackedObjectKinematics, TrackedObjects, Uuid,
};
pub use types::pointcloud::{PointCloud2, PointField};
pub use types::roi::{
    DetectedObjectWithFeature, DetectedObjectsWithFeature, Feature, RegionOfInterest,
    TrafficLightRoi, TrafficLightRoiArray,
};
pub use types::scene::{
    ArrowPrimitive, CubePrimitive, CylinderPrimitive, KeyValuePair, LinePrimitive, LineType,
    ModelPrimitive, SceneEntity, SceneEntityDeletion, SceneUpdate, SpherePrimitive,
    TextPrimitive, TriangleListPrimitive,
};
