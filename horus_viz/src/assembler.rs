//! Packs primitive buckets into the fixed-shape output envelopes

use horus_perception::{
    CubePrimitive, Duration, Header, ImageAnnotations, LinePrimitive, PointsAnnotation,
    SceneEntity, SceneUpdate, SpherePrimitive, TextAnnotation, TextPrimitive,
};

/// Entity id when the batch carries no path markers
pub const DETECTED_ENTITY_ID: &str = "detected_objects";
/// Entity id when the batch carries path markers
pub const PREDICTED_ENTITY_ID: &str = "predicted_objects";

/// 3D primitives collected for one batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneBuckets {
    pub cubes: Vec<CubePrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub spheres: Vec<SpherePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl SceneBuckets {
    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
            && self.lines.is_empty()
            && self.spheres.is_empty()
            && self.texts.is_empty()
    }
}

/// 2D primitives collected for one batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationBuckets {
    pub points: Vec<PointsAnnotation>,
    pub texts: Vec<TextAnnotation>,
}

/// Wrap buckets in a single-entity scene update
///
/// The entity id only distinguishes the predicted layer (any path markers)
/// from the detected/tracked layer.
pub fn assemble_scene(header: &Header, buckets: SceneBuckets, lifetime: Duration) -> SceneUpdate {
    let id = if buckets.spheres.is_empty() {
        DETECTED_ENTITY_ID
    } else {
        PREDICTED_ENTITY_ID
    };

    SceneUpdate {
        deletions: Vec::new(),
        entities: vec![SceneEntity {
            timestamp: header.stamp,
            frame_id: header.frame_id.clone(),
            id: id.to_string(),
            lifetime,
            frame_locked: false,
            metadata: Vec::new(),
            arrows: Vec::new(),
            cubes: buckets.cubes,
            spheres: buckets.spheres,
            cylinders: Vec::new(),
            lines: buckets.lines,
            triangles: Vec::new(),
            texts: buckets.texts,
            models: Vec::new(),
        }],
    }
}

/// Wrap buckets in an image annotation batch (circles always empty)
pub fn assemble_annotations(buckets: AnnotationBuckets) -> ImageAnnotations {
    ImageAnnotations {
        circles: Vec::new(),
        points: buckets.points,
        texts: buckets.texts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horus_perception::Time;

    #[test]
    fn test_empty_scene_keeps_envelope() {
        let header = Header::new(Time::new(5, 6), "base_link");
        let update = assemble_scene(&header, SceneBuckets::default(), Duration::from_secs(1));

        assert!(update.deletions.is_empty());
        assert_eq!(update.entities.len(), 1);
        let entity = &update.entities[0];
        assert_eq!(entity.id, DETECTED_ENTITY_ID);
        assert_eq!(entity.timestamp, Time::new(5, 6));
        assert_eq!(entity.frame_id, "base_link");
        assert_eq!(entity.lifetime, Duration::from_secs(1));
        assert!(!entity.frame_locked);
        assert_eq!(entity.primitive_count(), 0);
    }

    #[test]
    fn test_spheres_select_predicted_id() {
        let buckets = SceneBuckets {
            spheres: vec![SpherePrimitive::default()],
            ..Default::default()
        };
        let update = assemble_scene(&Header::default(), buckets, Duration::default());
        assert_eq!(update.entities[0].id, PREDICTED_ENTITY_ID);
        assert_eq!(update.entities[0].spheres.len(), 1);
    }

    #[test]
    fn test_annotations_envelope() {
        let anns = assemble_annotations(AnnotationBuckets {
            points: vec![PointsAnnotation::default()],
            texts: vec![TextAnnotation::default()],
        });
        assert!(anns.circles.is_empty());
        assert_eq!(anns.points.len(), 1);
        assert_eq!(anns.texts.len(), 1);
    }
}
