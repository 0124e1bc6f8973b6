//! Visualization configuration
//!
//! Typed configuration for the converters, loadable from YAML. Every section
//! has defaults matching the stock Foxglove rendering, so an empty document
//! (or no file at all) is valid.
//!
//! # Example viz.yaml
//!
//! ```yaml
//! # Object encoding: solid (colored cubes) or wireframe (line lists)
//! box_style: wireframe
//!
//! # Floating category labels above 3D objects
//! labels: true
//!
//! # Predicted path rendering policy
//! path_gate:
//!   skip_unknown: true
//!   require_forward: true
//!
//! wireframe:
//!   thickness: 0.05
//!   color: { r: 0.0, g: 1.0, b: 1.0, a: 1.0 }
//!
//! annotation:
//!   font_size: 18.0
//! ```

use crate::error::{VizError, VizResult};
use horus_perception::{Color, Duration};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How 3D objects are drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxStyle {
    /// Ground-anchored cubes colored by category
    #[default]
    Solid,
    /// Line-list cuboids in a fixed color, centered on the pose
    Wireframe,
}

/// Which predicted objects get path markers
///
/// With both flags set an object needs a known category and a floored
/// initial x strictly greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathGate {
    /// No markers for category UNKNOWN
    pub skip_unknown: bool,
    /// No markers unless `floor(initial x) > 0`
    pub require_forward: bool,
}

impl Default for PathGate {
    fn default() -> Self {
        Self {
            skip_unknown: true,
            require_forward: true,
        }
    }
}

/// Wireframe box appearance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireframeStyle {
    /// Line thickness (scene units)
    pub thickness: f64,
    pub color: Color,
}

impl Default for WireframeStyle {
    fn default() -> Self {
        Self {
            thickness: 0.1,
            color: Color::WHITE,
        }
    }
}

/// 2D overlay appearance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationStyle {
    /// Outline thickness (pixels)
    pub thickness: f64,
    /// Outline alpha for feature detections
    pub outline_alpha: f64,
    /// Fill alpha for every outline
    pub fill_alpha: f64,
    pub font_size: f64,
    /// Distance between the rectangle top and the label (pixels)
    pub text_offset_px: f64,
    pub background: Color,
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            thickness: 4.0,
            outline_alpha: 0.8,
            fill_alpha: 0.2,
            font_size: 14.0,
            text_offset_px: 6.0,
            background: Color::new(0.0, 0.0, 0.0, 0.5),
        }
    }
}

/// Converter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    pub box_style: BoxStyle,

    /// Emit a floating category label per 3D object
    pub labels: bool,

    /// Lifetime of every emitted scene entity
    pub lifetime: Duration,

    pub path_gate: PathGate,

    /// Diameter of predicted path markers (meters)
    pub path_marker_size: f64,

    /// Height of floating labels above the object top (meters)
    pub label_lift: f64,

    pub wireframe: WireframeStyle,

    pub annotation: AnnotationStyle,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            box_style: BoxStyle::Solid,
            labels: false,
            lifetime: Duration::from_secs(1),
            path_gate: PathGate::default(),
            path_marker_size: 0.25,
            label_lift: 0.5,
            wireframe: WireframeStyle::default(),
            annotation: AnnotationStyle::default(),
        }
    }
}

impl VizConfig {
    /// Parse and validate configuration from a YAML string
    pub fn from_yaml_str(content: &str) -> VizResult<Self> {
        // An empty document deserializes to unit, not a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: VizConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a YAML file
    pub fn load(path: &Path) -> VizResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        log::info!(
            "Loaded visualization config from {} (box_style={:?}, labels={})",
            path.display(),
            config.box_style,
            config.labels
        );
        Ok(config)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> VizResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check value ranges
    pub fn validate(&self) -> VizResult<()> {
        if self.path_marker_size.is_nan() || self.path_marker_size <= 0.0 {
            return Err(VizError::Config(format!(
                "path_marker_size must be positive, got {}",
                self.path_marker_size
            )));
        }
        if self.label_lift.is_nan() || self.label_lift < 0.0 {
            return Err(VizError::Config(format!(
                "label_lift must be non-negative, got {}",
                self.label_lift
            )));
        }
        if self.wireframe.thickness.is_nan() || self.wireframe.thickness < 0.0 {
            return Err(VizError::Config(format!(
                "wireframe.thickness must be non-negative, got {}",
                self.wireframe.thickness
            )));
        }
        if self.annotation.thickness.is_nan()
            || self.annotation.thickness < 0.0
            || self.annotation.font_size.is_nan()
            || self.annotation.font_size <= 0.0
        {
            return Err(VizError::Config(
                "annotation.thickness must be non-negative and annotation.font_size positive"
                    .to_string(),
            ));
        }
        for (name, alpha) in [
            ("annotation.outline_alpha", self.annotation.outline_alpha),
            ("annotation.fill_alpha", self.annotation.fill_alpha),
        ] {
            if !(0.0..=1.0).contains(&alpha) {
                return Err(VizError::Config(format!(
                    "{} must be in [0, 1], got {}",
                    name, alpha
                )));
            }
        }
        for (name, color) in [
            ("wireframe.color", self.wireframe.color),
            ("annotation.background", self.annotation.background),
        ] {
            let in_range = [color.r, color.g, color.b, color.a]
                .iter()
                .all(|c| (0.0..=1.0).contains(c));
            if !in_range {
                return Err(VizError::Config(format!(
                    "{} components must be in [0, 1]",
                    name
                )));
            }
        }
        Ok(())
    }
}
