//! Source schema → converter routing
//!
//! Catalog of the message schemas this crate converts and the Foxglove
//! schema each one produces. Both the legacy `autoware_auto_perception_msgs`
//! and the current `autoware_perception_msgs` namespaces map to the same
//! converter. Hosts look routes up by schema name and may hand JSON-encoded
//! messages to [`VizConverter::convert_json`].

use crate::converter::VizConverter;
use crate::error::{VizError, VizResult};
use horus_perception::{
    DetectedObjects, DetectedObjectsWithFeature, ImageAnnotations, LogSummary, PredictedObjects,
    SceneUpdate, TrackedObjects, TrafficLightRoiArray,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Destination schema for 3D object batches
pub const SCENE_UPDATE_SCHEMA: &str = "foxglove.SceneUpdate";
/// Destination schema for 2D region batches
pub const IMAGE_ANNOTATIONS_SCHEMA: &str = "foxglove.ImageAnnotations";

/// Which input message shape a schema carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    DetectedObjects,
    TrackedObjects,
    PredictedObjects,
    DetectedObjectsWithFeature,
    TrafficLightRoiArray,
}

impl SourceKind {
    /// Destination schema produced for this input shape
    pub const fn destination(self) -> &'static str {
        match self {
            SourceKind::DetectedObjects
            | SourceKind::TrackedObjects
            | SourceKind::PredictedObjects => SCENE_UPDATE_SCHEMA,
            SourceKind::DetectedObjectsWithFeature | SourceKind::TrafficLightRoiArray => {
                IMAGE_ANNOTATIONS_SCHEMA
            }
        }
    }
}

/// One source → destination schema pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaRoute {
    pub from_schema: &'static str,
    pub to_schema: &'static str,
    pub kind: SourceKind,
}

impl SchemaRoute {
    const fn new(from_schema: &'static str, kind: SourceKind) -> Self {
        Self {
            from_schema,
            to_schema: kind.destination(),
            kind,
        }
    }
}

static ROUTES: [SchemaRoute; 8] = [
    SchemaRoute::new(
        "autoware_auto_perception_msgs/msg/PredictedObjects",
        SourceKind::PredictedObjects,
    ),
    SchemaRoute::new(
        "autoware_perception_msgs/msg/PredictedObjects",
        SourceKind::PredictedObjects,
    ),
    SchemaRoute::new(
        "autoware_auto_perception_msgs/msg/TrackedObjects",
        SourceKind::TrackedObjects,
    ),
    SchemaRoute::new(
        "autoware_perception_msgs/msg/TrackedObjects",
        SourceKind::TrackedObjects,
    ),
    SchemaRoute::new(
        "autoware_auto_perception_msgs/msg/DetectedObjects",
        SourceKind::DetectedObjects,
    ),
    SchemaRoute::new(
        "autoware_perception_msgs/msg/DetectedObjects",
        SourceKind::DetectedObjects,
    ),
    SchemaRoute::new(
        "tier4_perception_msgs/msg/DetectedObjectsWithFeature",
        SourceKind::DetectedObjectsWithFeature,
    ),
    SchemaRoute::new(
        "tier4_perception_msgs/msg/TrafficLightRoiArray",
        SourceKind::TrafficLightRoiArray,
    ),
];

/// Every supported schema pair
pub fn routes() -> &'static [SchemaRoute] {
    &ROUTES
}

/// Route for a source schema name (leading '/' ignored)
pub fn route_for(schema: &str) -> Option<&'static SchemaRoute> {
    let schema = schema.trim_start_matches('/');
    ROUTES.iter().find(|r| r.from_schema == schema)
}

/// Output of a routed conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum VizMessage {
    Scene(SceneUpdate),
    Image(ImageAnnotations),
}

impl LogSummary for VizMessage {
    fn log_summary(&self) -> String {
        match self {
            VizMessage::Scene(m) => m.log_summary(),
            VizMessage::Image(m) => m.log_summary(),
        }
    }
}

/// Converted message tagged with its destination schema
#[derive(Debug, Clone, PartialEq)]
pub struct Converted {
    pub schema: &'static str,
    pub message: VizMessage,
}

impl Converted {
    /// Encode the output message as JSON
    pub fn to_json(&self) -> VizResult<Vec<u8>> {
        Ok(serde_json::to_vec(&self.message)?)
    }
}

fn decode<T>(schema: &str, payload: &[u8]) -> VizResult<T>
where
    T: DeserializeOwned + LogSummary,
{
    let msg: T = serde_json::from_slice(payload)?;
    log::debug!("Decoded {}: {}", schema, msg.log_summary());
    Ok(msg)
}

impl VizConverter {
    /// Decode a JSON message of `schema` and convert it
    pub fn convert_json(&self, schema: &str, payload: &[u8]) -> VizResult<Converted> {
        let route =
            route_for(schema).ok_or_else(|| VizError::UnknownSchema(schema.to_string()))?;

        let message = match route.kind {
            SourceKind::DetectedObjects => {
                let msg: DetectedObjects = decode(schema, payload)?;
                VizMessage::Scene(self.convert_detected_objects(&msg))
            }
            SourceKind::TrackedObjects => {
                let msg: TrackedObjects = decode(schema, payload)?;
                VizMessage::Scene(self.convert_tracked_objects(&msg))
            }
            SourceKind::PredictedObjects => {
                let msg: PredictedObjects = decode(schema, payload)?;
                VizMessage::Scene(self.convert_predicted_objects(&msg))
            }
            SourceKind::DetectedObjectsWithFeature => {
                let msg: DetectedObjectsWithFeature = decode(schema, payload)?;
                VizMessage::Image(self.convert_detected_objects_with_feature(&msg))
            }
            SourceKind::TrafficLightRoiArray => {
                let msg: TrafficLightRoiArray = decode(schema, payload)?;
                VizMessage::Image(self.convert_traffic_light_rois(&msg))
            }
        };

        log::debug!(
            "Converted {} -> {}: {}",
            route.from_schema,
            route.to_schema,
            message.log_summary()
        );

        Ok(Converted {
            schema: route.to_schema,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_route_table_is_unique() {
        let names: HashSet<_> = routes().iter().map(|r| r.from_schema).collect();
        assert_eq!(names.len(), routes().len());
    }

    #[test]
    fn test_both_autoware_namespaces_route_to_same_kind() {
        for kind in ["PredictedObjects", "TrackedObjects", "DetectedObjects"] {
            let legacy = route_for(&format!("autoware_auto_perception_msgs/msg/{}", kind)).unwrap();
            let current = route_for(&format!("autoware_perception_msgs/msg/{}", kind)).unwrap();
            assert_eq!(legacy.kind, current.kind);
            assert_eq!(legacy.to_schema, SCENE_UPDATE_SCHEMA);
        }
    }

    #[test]
    fn test_region_routes_produce_image_annotations() {
        for schema in [
            "tier4_perception_msgs/msg/DetectedObjectsWithFeature",
            "/tier4_perception_msgs/msg/TrafficLightRoiArray",
        ] {
            assert_eq!(route_for(schema).unwrap().to_schema, IMAGE_ANNOTATIONS_SCHEMA);
        }
    }

    #[test]
    fn test_unknown_schema() {
        assert!(route_for("sensor_msgs/msg/Image").is_none());
        let err = VizConverter::default()
            .convert_json("sensor_msgs/msg/Image", b"{}")
            .unwrap_err();
        assert!(matches!(err, VizError::UnknownSchema(s) if s == "sensor_msgs/msg/Image"));
    }

    #[test]
    fn test_malformed_payload() {
        let err = VizConverter::default()
            .convert_json("autoware_perception_msgs/msg/DetectedObjects", b"{not json")
            .unwrap_err();
        assert!(matches!(err, VizError::Serialization(_)));
    }
}
