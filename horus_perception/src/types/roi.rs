//! Image-space region messages
//!
//! 2D detections expressed as pixel rectangles: generic detections with an
//! attached point-cloud feature, and traffic-light regions.

use crate::log_summary::LogSummary;
use crate::types::header::Header;
use crate::types::objects::DetectedObject;
use crate::types::pointcloud::PointCloud2;
use serde::{Deserialize, Serialize};

/// Axis-aligned pixel rectangle (`sensor_msgs/RegionOfInterest`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionOfInterest {
    /// Left edge (pixels)
    pub x_offset: u32,
    /// Top edge (pixels)
    pub y_offset: u32,
    pub height: u32,
    pub width: u32,
    #[serde(default)]
    pub do_rectify: bool,
}

impl RegionOfInterest {
    /// Create a region from offset and size
    pub fn new(x_offset: u32, y_offset: u32, width: u32, height: u32) -> Self {
        Self {
            x_offset,
            y_offset,
            height,
            width,
            do_rectify: false,
        }
    }

    /// Area in pixels
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Point cluster and image region backing a detection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub cluster: PointCloud2,
    /// Image region; absent when the detection was not projected
    pub roi: Option<RegionOfInterest>,
}

/// Detection paired with its feature
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectedObjectWithFeature {
    pub object: DetectedObject,
    pub feature: Option<Feature>,
}

impl DetectedObjectWithFeature {
    /// Pair a detection with an image region and an empty cluster
    pub fn new(object: DetectedObject, roi: RegionOfInterest) -> Self {
        Self {
            object,
            feature: Some(Feature {
                cluster: PointCloud2::default(),
                roi: Some(roi),
            }),
        }
    }

    /// Image region, if both the feature and its ROI are present
    pub fn roi(&self) -> Option<&RegionOfInterest> {
        self.feature.as_ref().and_then(|f| f.roi.as_ref())
    }
}

/// Batch of detections with features
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectedObjectsWithFeature {
    pub header: Header,
    #[serde(default)]
    pub feature_objects: Vec<DetectedObjectWithFeature>,
}

/// Traffic-light region
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficLightRoi {
    pub traffic_light_id: i64,
    /// Signal subject (see associated constants)
    #[serde(default)]
    pub traffic_light_type: u8,
    pub roi: Option<RegionOfInterest>,
}

impl TrafficLightRoi {
    pub const CAR_TRAFFIC_LIGHT: u8 = 0;
    pub const PEDESTRIAN_TRAFFIC_LIGHT: u8 = 1;

    /// Create a traffic-light region
    pub fn new(traffic_light_id: i64, traffic_light_type: u8, roi: RegionOfInterest) -> Self {
        Self {
            traffic_light_id,
            traffic_light_type,
            roi: Some(roi),
        }
    }
}

/// Batch of traffic-light regions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrafficLightRoiArray {
    pub header: Header,
    #[serde(default)]
    pub rois: Vec<TrafficLightRoi>,
}

// ============================================================================
// LogSummary Implementations
// ============================================================================

impl LogSummary for RegionOfInterest {
    fn log_summary(&self) -> String {
        format!(
            "Roi({}x{} @ {},{})",
            self.width, self.height, self.x_offset, self.y_offset
        )
    }
}

impl LogSummary for DetectedObjectsWithFeature {
    fn log_summary(&self) -> String {
        let with_roi = self
            .feature_objects
            .iter()
            .filter(|f| f.roi().is_some())
            .count();
        format!(
            "DetectedObjectsWithFeature(frame='{}', {} objects, {} with roi)",
            self.header.frame_id,
            self.feature_objects.len(),
            with_roi
        )
    }
}

impl LogSummary for TrafficLightRoiArray {
    fn log_summary(&self) -> String {
        format!(
            "TrafficLightRoiArray(frame='{}', {} rois)",
            self.header.frame_id,
            self.rois.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_feature_has_no_roi() {
        let f = DetectedObjectWithFeature {
            object: DetectedObject::default(),
            feature: None,
        };
        assert!(f.roi().is_none());

        let f = DetectedObjectWithFeature {
            object: DetectedObject::default(),
            feature: Some(Feature::default()),
        };
        assert!(f.roi().is_none());
    }

    #[test]
    fn test_traffic_light_roi_decodes() {
        let json = r#"{"header":{"stamp":{"sec":1,"nanosec":2},"frame_id":"camera"},
            "rois":[{"traffic_light_id":7,"traffic_light_type":1,
            "roi":{"x_offset":5,"y_offset":6,"height":10,"width":4,"do_rectify":false}}]}"#;
        let msg: TrafficLightRoiArray = serde_json::from_str(json).unwrap();
        assert_eq!(msg.rois.len(), 1);
        assert_eq!(msg.rois[0].traffic_light_type, TrafficLightRoi::PEDESTRIAN_TRAFFIC_LIGHT);
        assert_eq!(msg.rois[0].roi.unwrap().area(), 40);
    }

    #[test]
    fn test_log_summary_counts_rois() {
        let msg = DetectedObjectsWithFeature {
            header: Header::new(Default::default(), "camera"),
            feature_objects: vec![
                DetectedObjectWithFeature::new(
                    DetectedObject::default(),
                    RegionOfInterest::new(0, 0, 1, 1),
                ),
                DetectedObjectWithFeature::default(),
            ],
        };
        assert_eq!(
            msg.log_summary(),
            "DetectedObjectsWithFeature(frame='camera', 2 objects, 1 with roi)"
        );
    }
}
