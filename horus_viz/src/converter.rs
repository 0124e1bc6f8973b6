//! Configured converter facade
//!
//! `VizConverter` owns an immutable [`VizConfig`] and the box strategy it
//! selects. Every method is a pure function of its input message, so one
//! converter can be shared across threads.

use crate::config::VizConfig;
use crate::error::VizResult;
use crate::objects::{box_strategy, objects_to_scene, BoxStrategy};
use crate::regions::{features_to_annotations, traffic_lights_to_annotations};
use horus_perception::{
    DetectedObjects, DetectedObjectsWithFeature, ImageAnnotations, PredictedObjects, SceneUpdate,
    TrackedObjects, TrafficLightRoiArray,
};

/// Perception → visualization converter
#[derive(Debug)]
pub struct VizConverter {
    config: VizConfig,
    strategy: Box<dyn BoxStrategy>,
}

impl Default for VizConverter {
    fn default() -> Self {
        let config = VizConfig::default();
        let strategy = box_strategy(&config);
        Self { config, strategy }
    }
}

impl VizConverter {
    /// Create a converter after validating `config`
    pub fn new(config: VizConfig) -> VizResult<Self> {
        config.validate()?;
        let strategy = box_strategy(&config);
        Ok(Self { config, strategy })
    }

    /// Active configuration
    pub fn config(&self) -> &VizConfig {
        &self.config
    }

    /// Detected objects → boxes (plus optional labels)
    pub fn convert_detected_objects(&self, msg: &DetectedObjects) -> SceneUpdate {
        objects_to_scene(&msg.header, &msg.objects, self.strategy.as_ref(), &self.config)
    }

    /// Tracked objects → boxes (plus optional labels)
    pub fn convert_tracked_objects(&self, msg: &TrackedObjects) -> SceneUpdate {
        objects_to_scene(&msg.header, &msg.objects, self.strategy.as_ref(), &self.config)
    }

    /// Predicted objects → boxes plus gated path markers
    pub fn convert_predicted_objects(&self, msg: &PredictedObjects) -> SceneUpdate {
        objects_to_scene(&msg.header, &msg.objects, self.strategy.as_ref(), &self.config)
    }

    /// Feature detections → outlines with "LABEL: score" text
    pub fn convert_detected_objects_with_feature(
        &self,
        msg: &DetectedObjectsWithFeature,
    ) -> ImageAnnotations {
        features_to_annotations(msg, &self.config.annotation)
    }

    /// Traffic-light regions → outlines with "TL:<id> <type>" text
    pub fn convert_traffic_light_rois(&self, msg: &TrafficLightRoiArray) -> ImageAnnotations {
        traffic_lights_to_annotations(msg, &self.config.annotation)
    }
}
