//! Detected / tracked / predicted object conversion
//!
//! All three object kinds go through [`collect_objects`]: drop records with
//! no usable classification, look up the category style, emit a box through
//! the configured [`BoxStrategy`], then optionally a floating label and
//! predicted path markers. The per-kind differences (which pose field is
//! read, whether a path exists) live in the [`ObjectRecord`] impls.

use crate::assembler::{assemble_scene, SceneBuckets};
use crate::classification::{object_styles, primary_label, DisplayStyle};
use crate::config::{BoxStyle, PathGate, VizConfig};
use crate::geometry::{floating_label, oriented_box, path_marker, wireframe_box};
use horus_perception::{
    Color, DetectedObject, Header, ObjectClassification, Pose, PredictedObject, SceneUpdate,
    TrackedObject, Vector3,
};
use std::fmt::Debug;

/// Read access to the fields every object kind shares
pub trait ObjectRecord {
    /// Classification hypotheses, most likely first
    fn classification(&self) -> &[ObjectClassification];

    /// Pose the geometry is anchored to
    fn pose(&self) -> &Pose;

    /// Bounding volume extents
    fn extents(&self) -> &Vector3;

    /// First predicted path, if this kind carries predictions
    fn predicted_path(&self) -> Option<&[Pose]> {
        None
    }
}

impl ObjectRecord for DetectedObject {
    fn classification(&self) -> &[ObjectClassification] {
        &self.classification
    }

    fn pose(&self) -> &Pose {
        &self.kinematics.pose_with_covariance.pose
    }

    fn extents(&self) -> &Vector3 {
        &self.shape.dimensions
    }
}

impl ObjectRecord for TrackedObject {
    fn classification(&self) -> &[ObjectClassification] {
        &self.classification
    }

    fn pose(&self) -> &Pose {
        &self.kinematics.pose_with_covariance.pose
    }

    fn extents(&self) -> &Vector3 {
        &self.shape.dimensions
    }
}

impl ObjectRecord for PredictedObject {
    fn classification(&self) -> &[ObjectClassification] {
        &self.classification
    }

    fn pose(&self) -> &Pose {
        &self.kinematics.initial_pose_with_covariance.pose
    }

    fn extents(&self) -> &Vector3 {
        &self.shape.dimensions
    }

    fn predicted_path(&self) -> Option<&[Pose]> {
        self.kinematics
            .predicted_paths
            .first()
            .map(|p| p.path.as_slice())
    }
}

// ============================================================================
// Box encodings
// ============================================================================

/// How one object's bounding volume is drawn
pub trait BoxStrategy: Debug + Send + Sync {
    fn emit(&self, extents: &Vector3, pose: &Pose, style: &DisplayStyle, buckets: &mut SceneBuckets);
}

/// Ground-anchored cubes in the category color
#[derive(Debug, Clone, Copy, Default)]
pub struct SolidBoxes;

impl BoxStrategy for SolidBoxes {
    fn emit(&self, extents: &Vector3, pose: &Pose, style: &DisplayStyle, buckets: &mut SceneBuckets) {
        buckets.cubes.push(oriented_box(extents, pose, style.color));
    }
}

/// Line-list cuboids in one fixed color
#[derive(Debug, Clone, Copy)]
pub struct Wireframes {
    pub color: Color,
    pub thickness: f64,
}

impl BoxStrategy for Wireframes {
    fn emit(&self, extents: &Vector3, pose: &Pose, _style: &DisplayStyle, buckets: &mut SceneBuckets) {
        buckets
            .lines
            .push(wireframe_box(extents, pose, self.color, self.thickness));
    }
}

/// Build the strategy selected by `config.box_style`
pub fn box_strategy(config: &VizConfig) -> Box<dyn BoxStrategy> {
    match config.box_style {
        BoxStyle::Solid => Box::new(SolidBoxes),
        BoxStyle::Wireframe => Box::new(Wireframes {
            color: config.wireframe.color,
            thickness: config.wireframe.thickness,
        }),
    }
}

// ============================================================================
// Traversal
// ============================================================================

/// Whether a predicted object's path is drawn
pub fn path_allowed(gate: &PathGate, label: u8, pose: &Pose) -> bool {
    if gate.skip_unknown && label == ObjectClassification::UNKNOWN {
        return false;
    }
    let forward = pose.position.x.floor() > 0.0;
    if gate.require_forward && !forward {
        return false;
    }
    true
}

/// Filter objects and build their primitives
pub fn collect_objects<O: ObjectRecord>(
    objects: &[O],
    strategy: &dyn BoxStrategy,
    config: &VizConfig,
) -> SceneBuckets {
    let mut buckets = SceneBuckets::default();
    let styles = object_styles();

    for object in objects {
        let Some(label) = primary_label(object.classification()) else {
            continue;
        };
        let style = styles.style_for(label);
        let pose = object.pose();
        let extents = object.extents();

        strategy.emit(extents, pose, style, &mut buckets);

        if config.labels {
            buckets.texts.push(floating_label(
                extents,
                pose,
                style.label,
                style.color.with_alpha(1.0),
                config.label_lift,
            ));
        }

        if let Some(path) = object.predicted_path() {
            if path_allowed(&config.path_gate, label, pose) {
                buckets.spheres.extend(
                    path.iter()
                        .map(|p| path_marker(p, style.color, config.path_marker_size)),
                );
            }
        }
    }

    buckets
}

/// Convert an object batch to a single-entity scene update
pub fn objects_to_scene<O: ObjectRecord>(
    header: &Header,
    objects: &[O],
    strategy: &dyn BoxStrategy,
    config: &VizConfig,
) -> SceneUpdate {
    let buckets = collect_objects(objects, strategy, config);
    assemble_scene(header, buckets, config.lifetime)
}
