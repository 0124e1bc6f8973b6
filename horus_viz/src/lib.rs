//! HORUS Perception Visualization
//!
//! Converts perception messages into Foxglove visualization messages:
//!
//! | Input                          | Output                      |
//! |--------------------------------|-----------------------------|
//! | `DetectedObjects`              | `SceneUpdate` (boxes)       |
//! | `TrackedObjects`               | `SceneUpdate` (boxes)       |
//! | `PredictedObjects`             | `SceneUpdate` (boxes + path markers) |
//! | `DetectedObjectsWithFeature`   | `ImageAnnotations`          |
//! | `TrafficLightRoiArray`         | `ImageAnnotations`          |
//!
//! Every conversion is a pure function of its input. Records without a usable
//! classification or rectangle are dropped from the output; nothing else is
//! filtered and nothing is retained between calls.
//!
//! # Example
//!
//! ```rust,ignore
//! use horus_viz::{VizConfig, VizConverter};
//!
//! let converter = VizConverter::new(VizConfig::load(Path::new("viz.yaml"))?)?;
//! let scene = converter.convert_predicted_objects(&msg);
//!
//! // Or route by schema name with JSON payloads
//! let out = converter.convert_json("autoware_perception_msgs/msg/TrackedObjects", &bytes)?;
//! assert_eq!(out.schema, "foxglove.SceneUpdate");
//! ```

pub mod assembler;
pub mod classification;
pub mod config;
pub mod converter;
pub mod error;
pub mod geometry;
pub mod objects;
pub mod regions;
pub mod routes;

pub use classification::{object_styles, traffic_light_styles, DisplayStyle, StyleRegistry};
pub use config::{AnnotationStyle, BoxStyle, PathGate, VizConfig, WireframeStyle};
pub use converter::VizConverter;
pub use error::{VizError, VizResult};
pub use objects::{BoxStrategy, ObjectRecord, SolidBoxes, Wireframes};
pub use routes::{route_for, routes, Converted, SchemaRoute, SourceKind, VizMessage};

use horus_perception::{
    DetectedObjects, DetectedObjectsWithFeature, ImageAnnotations, PredictedObjects, SceneUpdate,
    TrackedObjects, TrafficLightRoiArray,
};
use std::sync::OnceLock;

static DEFAULT_CONVERTER: OnceLock<VizConverter> = OnceLock::new();

fn default_converter() -> &'static VizConverter {
    DEFAULT_CONVERTER.get_or_init(VizConverter::default)
}

/// Convert detected objects with the default configuration
pub fn convert_detected_objects(msg: &DetectedObjects) -> SceneUpdate {
    default_converter().convert_detected_objects(msg)
}

/// Convert tracked objects with the default configuration
pub fn convert_tracked_objects(msg: &TrackedObjects) -> SceneUpdate {
    default_converter().convert_tracked_objects(msg)
}

/// Convert predicted objects with the default configuration
pub fn convert_predicted_objects(msg: &PredictedObjects) -> SceneUpdate {
    default_converter().convert_predicted_objects(msg)
}

/// Convert feature detections with the default configuration
pub fn convert_detected_objects_with_feature(msg: &DetectedObjectsWithFeature) -> ImageAnnotations {
    default_converter().convert_detected_objects_with_feature(msg)
}

/// Convert traffic-light regions with the default configuration
pub fn convert_traffic_light_rois(msg: &TrafficLightRoiArray) -> ImageAnnotations {
    default_converter().convert_traffic_light_rois(msg)
}
