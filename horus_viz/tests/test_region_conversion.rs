//! Integration tests for image-space region conversion.

use horus_perception::{
    Color, DetectedObject, DetectedObjectWithFeature, DetectedObjectsWithFeature, Header,
    ObjectClassification, Point2, PointsAnnotationType, Pose, RegionOfInterest, Time,
    TrafficLightRoi, TrafficLightRoiArray, Vector3,
};
use horus_viz::{AnnotationStyle, VizConfig, VizConverter};

fn header() -> Header {
    Header::new(Time::new(5, 123), "camera0/camera_optical_link")
}

// ============================================================================
// 1. Traffic lights
// ============================================================================

#[test]
fn test_vehicle_traffic_light() {
    let msg = TrafficLightRoiArray {
        header: header(),
        rois: vec![TrafficLightRoi::new(
            7,
            TrafficLightRoi::CAR_TRAFFIC_LIGHT,
            RegionOfInterest::new(5, 5, 10, 10),
        )],
    };
    let anns = horus_viz::convert_traffic_light_rois(&msg);

    assert!(anns.circles.is_empty());
    assert_eq!(anns.points.len(), 1);
    assert_eq!(anns.texts.len(), 1);

    let outline = &anns.points[0];
    assert_eq!(outline.annotation_type, PointsAnnotationType::LineLoop);
    assert_eq!(outline.timestamp, Time::new(5, 123));
    assert_eq!(
        outline.points,
        vec![
            Point2::new(5.0, 5.0),
            Point2::new(15.0, 5.0),
            Point2::new(15.0, 15.0),
            Point2::new(5.0, 15.0),
            Point2::new(5.0, 5.0),
        ]
    );
    assert_eq!(outline.thickness, 4.0);

    let text = &anns.texts[0];
    assert_eq!(text.text, "TL:7 VehicleTL");
    assert_eq!(text.position, Point2::new(5.0, 0.0));
    assert_eq!(text.font_size, 14.0);
    assert_eq!(text.background_color, Color::new(0.0, 0.0, 0.0, 0.5));
    assert_eq!(text.timestamp, outline.timestamp);
}

#[test]
fn test_one_outline_and_text_per_roi() {
    let rois = (0..6)
        .map(|i| {
            if i % 2 == 0 {
                TrafficLightRoi::new(i, (i % 3) as u8, RegionOfInterest::new(20, 30, 8, 16))
            } else {
                TrafficLightRoi {
                    traffic_light_id: i,
                    traffic_light_type: 0,
                    roi: None,
                }
            }
        })
        .collect();
    let msg = TrafficLightRoiArray {
        header: header(),
        rois,
    };
    let anns = horus_viz::convert_traffic_light_rois(&msg);
    assert_eq!(anns.points.len(), 3);
    assert_eq!(anns.texts.len(), 3);
    let texts: Vec<&str> = anns.texts.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["TL:0 VehicleTL", "TL:2 UNKNOWN", "TL:4 PedestrianTL"]);
}

// ============================================================================
// 2. Feature detections
// ============================================================================

#[test]
fn test_feature_detections() {
    let object = DetectedObject::new(
        ObjectClassification::TRUCK,
        Pose::default(),
        Vector3::splat(1.0),
    )
    .with_existence_probability(0.4567);
    let msg = DetectedObjectsWithFeature {
        header: header(),
        feature_objects: vec![DetectedObjectWithFeature::new(
            object,
            RegionOfInterest::new(300, 200, 64, 48),
        )],
    };
    let anns = horus_viz::convert_detected_objects_with_feature(&msg);

    assert_eq!(anns.points.len(), 1);
    assert_eq!(anns.points[0].outline_color, Color::new(0.0, 0.5, 1.0, 0.8));
    assert_eq!(anns.points[0].fill_color, Color::new(0.0, 0.5, 1.0, 0.2));
    assert_eq!(anns.texts[0].text, "TRUCK: 0.46");
    assert_eq!(anns.texts[0].position, Point2::new(300.0, 194.0));
}

#[test]
fn test_feature_text_follows_category_order() {
    let feature_objects = [
        ObjectClassification::BICYCLE,
        ObjectClassification::TRUCK,
        ObjectClassification::MOTORCYCLE,
    ]
    .into_iter()
    .map(|label| {
        DetectedObjectWithFeature::new(
            DetectedObject::new(label, Pose::default(), Vector3::splat(1.0))
                .with_existence_probability(0.5),
            RegionOfInterest::new(10, 10, 5, 5),
        )
    })
    .collect();
    let msg = DetectedObjectsWithFeature {
        header: header(),
        feature_objects,
    };
    let anns = horus_viz::convert_detected_objects_with_feature(&msg);
    let texts: Vec<&str> = anns.texts.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["BICYCLE: 0.50", "TRUCK: 0.50", "MOTORCYCLE: 0.50"]);
    // Code 2 keeps the bicycle color alongside its label
    assert_eq!(anns.points[0].outline_color, Color::new(1.0, 0.5, 0.5, 0.8));
}

#[test]
fn test_annotation_style_from_config() {
    let converter = VizConverter::new(VizConfig {
        annotation: AnnotationStyle {
            thickness: 2.0,
            font_size: 20.0,
            text_offset_px: 10.0,
            ..Default::default()
        },
        ..Default::default()
    })
    .unwrap();
    let msg = TrafficLightRoiArray {
        header: header(),
        rois: vec![TrafficLightRoi::new(
            1,
            TrafficLightRoi::PEDESTRIAN_TRAFFIC_LIGHT,
            RegionOfInterest::new(40, 40, 4, 4),
        )],
    };
    let anns = converter.convert_traffic_light_rois(&msg);
    assert_eq!(anns.points[0].thickness, 2.0);
    assert_eq!(anns.texts[0].font_size, 20.0);
    assert_eq!(anns.texts[0].position, Point2::new(40.0, 30.0));
}

#[test]
fn test_empty_batches() {
    assert!(horus_viz::convert_traffic_light_rois(&TrafficLightRoiArray::default()).is_empty());
    assert!(
        horus_viz::convert_detected_objects_with_feature(&DetectedObjectsWithFeature::default())
            .is_empty()
    );
}
