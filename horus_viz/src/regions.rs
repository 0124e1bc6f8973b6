//! Image-space region conversion
//!
//! Feature detections and traffic-light regions both become one rectangle
//! outline plus one text label per region, stamped with the source header
//! time. Records without a rectangle (or, for features, without a usable
//! classification) are skipped.

use crate::assembler::{assemble_annotations, AnnotationBuckets};
use crate::classification::{object_styles, primary_label, traffic_light_styles};
use crate::config::AnnotationStyle;
use crate::geometry::{outline_annotation, rectangle_outline, text_label};
use horus_perception::{
    Color, DetectedObjectsWithFeature, ImageAnnotations, Point2, RegionOfInterest, Time,
    TrafficLightRoiArray,
};

/// Probability rounded to two decimals, ties away from zero
fn score_2dp(p: f32) -> f64 {
    (p as f64 * 100.0).round() / 100.0
}

fn push_region(
    buckets: &mut AnnotationBuckets,
    stamp: Time,
    roi: &RegionOfInterest,
    outline: Color,
    text: String,
    style: &AnnotationStyle,
) {
    let x = roi.x_offset as f64;
    let y = roi.y_offset as f64;
    let points = rectangle_outline(x, y, roi.width as f64, roi.height as f64);

    buckets
        .points
        .push(outline_annotation(stamp, points, outline, style));
    buckets
        .texts
        .push(text_label(stamp, Point2::new(x, y), text, outline, style));
}

/// Outline + "LABEL: score" per detection that has an ROI
pub fn features_to_annotations(
    msg: &DetectedObjectsWithFeature,
    style: &AnnotationStyle,
) -> ImageAnnotations {
    let mut buckets = AnnotationBuckets::default();
    let styles = object_styles();

    for entry in &msg.feature_objects {
        let Some(roi) = entry.roi() else {
            continue;
        };
        let Some(label) = primary_label(&entry.object.classification) else {
            continue;
        };

        let category = styles.style_for(label);
        let outline = category.color.with_alpha(style.outline_alpha);
        let text = format!(
            "{}: {:.2}",
            category.label,
            score_2dp(entry.object.existence_probability)
        );
        push_region(&mut buckets, msg.header.stamp, roi, outline, text, style);
    }

    assemble_annotations(buckets)
}

/// Outline + "TL:<id> <type>" per traffic light that has an ROI
pub fn traffic_lights_to_annotations(
    msg: &TrafficLightRoiArray,
    style: &AnnotationStyle,
) -> ImageAnnotations {
    let mut buckets = AnnotationBuckets::default();
    let styles = traffic_light_styles();

    for tl in &msg.rois {
        let Some(roi) = tl.roi.as_ref() else {
            continue;
        };

        let subject = styles.style_for(tl.traffic_light_type);
        let text = format!("TL:{} {}", tl.traffic_light_id, subject.label);
        push_region(&mut buckets, msg.header.stamp, roi, subject.color, text, style);
    }

    assemble_annotations(buckets)
}
