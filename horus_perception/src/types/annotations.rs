//! 2D image annotation messages (`foxglove.ImageAnnotations`)
//!
//! Overlays drawn on top of a camera image, in pixel coordinates. Each
//! annotation carries its own timestamp; the batch has none.

use crate::log_summary::LogSummary;
use crate::types::geometry::{Color, Point2};
use crate::types::header::{foxglove_time, Time};
use serde::{Deserialize, Serialize};

/// How `PointsAnnotation::points` are drawn
#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum PointsAnnotationType {
    #[default]
    Unknown = 0,
    Points = 1,
    LineLoop = 2,
    LineStrip = 3,
    LineList = 4,
}

impl From<PointsAnnotationType> for u8 {
    fn from(t: PointsAnnotationType) -> u8 {
        t as u8
    }
}

impl TryFrom<u8> for PointsAnnotationType {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(PointsAnnotationType::Unknown),
            1 => Ok(PointsAnnotationType::Points),
            2 => Ok(PointsAnnotationType::LineLoop),
            3 => Ok(PointsAnnotationType::LineStrip),
            4 => Ok(PointsAnnotationType::LineList),
            other => Err(format!("invalid points annotation type {}", other)),
        }
    }
}

/// Circle overlay
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CircleAnnotation {
    #[serde(with = "foxglove_time")]
    pub timestamp: Time,
    /// Center (pixels)
    pub position: Point2,
    pub diameter: f64,
    pub thickness: f64,
    pub fill_color: Color,
    pub outline_color: Color,
}

/// Points, polyline or polygon overlay
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointsAnnotation {
    #[serde(with = "foxglove_time")]
    pub timestamp: Time,
    #[serde(rename = "type")]
    pub annotation_type: PointsAnnotationType,
    pub points: Vec<Point2>,
    pub outline_color: Color,
    /// Per-point outline colors; empty means `outline_color` applies to all
    pub outline_colors: Vec<Color>,
    pub fill_color: Color,
    pub thickness: f64,
}

/// Text overlay
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextAnnotation {
    #[serde(with = "foxglove_time")]
    pub timestamp: Time,
    /// Bottom-left origin of the text (pixels)
    pub position: Point2,
    pub text: String,
    pub font_size: f64,
    pub text_color: Color,
    pub background_color: Color,
}

/// Batch of image overlays
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageAnnotations {
    pub circles: Vec<CircleAnnotation>,
    pub points: Vec<PointsAnnotation>,
    pub texts: Vec<TextAnnotation>,
}

impl ImageAnnotations {
    /// Whether the batch draws nothing
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty() && self.points.is_empty() && self.texts.is_empty()
    }
}

impl LogSummary for ImageAnnotations {
    fn log_summary(&self) -> String {
        format!(
            "ImageAnnotations(circles={}, points={}, texts={})",
            self.circles.len(),
            self.points.len(),
            self.texts.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_annotation_type_codes() {
        let ann = PointsAnnotation {
            annotation_type: PointsAnnotationType::LineLoop,
            ..Default::default()
        };
        let value = serde_json::to_value(&ann).unwrap();
        assert_eq!(value["type"], 2);

        let back: PointsAnnotation = serde_json::from_value(value).unwrap();
        assert_eq!(back.annotation_type, PointsAnnotationType::LineLoop);
    }

    #[test]
    fn test_annotation_timestamps_use_nsec() {
        let text = TextAnnotation {
            timestamp: Time::new(10, 20),
            ..Default::default()
        };
        let value = serde_json::to_value(&text).unwrap();
        assert_eq!(value["timestamp"], serde_json::json!({ "sec": 10, "nsec": 20 }));
    }

    #[test]
    fn test_empty_batch() {
        let anns = ImageAnnotations::default();
        assert!(anns.is_empty());
        assert_eq!(anns.log_summary(), "ImageAnnotations(circles=0, points=0, texts=0)");
    }
}
