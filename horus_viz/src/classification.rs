//! Category code → display style lookup
//!
//! Two immutable registries: object categories (agent colors, half
//! transparent) and traffic-light subjects (signal colors, opaque). Lookups
//! are total; unmapped codes get opaque white and "UNKNOWN".

use horus_perception::{Color, ObjectClassification, TrafficLightRoi};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Label used for unmapped codes
pub const FALLBACK_LABEL: &str = "UNKNOWN";

/// Color and text used to draw one category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayStyle {
    pub color: Color,
    pub label: &'static str,
}

impl DisplayStyle {
    pub const fn new(color: Color, label: &'static str) -> Self {
        Self { color, label }
    }
}

/// Fixed code → style table with a fallback entry
#[derive(Debug)]
pub struct StyleRegistry {
    styles: HashMap<u8, DisplayStyle>,
    fallback: DisplayStyle,
}

impl StyleRegistry {
    fn new(entries: &[(u8, DisplayStyle)]) -> Self {
        Self {
            styles: entries.iter().copied().collect(),
            fallback: DisplayStyle::new(Color::WHITE, FALLBACK_LABEL),
        }
    }

    /// Style for `code`, or the fallback when unmapped
    pub fn style_for(&self, code: u8) -> &DisplayStyle {
        self.styles.get(&code).unwrap_or(&self.fallback)
    }

    /// Whether `code` has its own entry
    pub fn contains(&self, code: u8) -> bool {
        self.styles.contains_key(&code)
    }

    /// Style returned for unmapped codes
    pub fn fallback(&self) -> &DisplayStyle {
        &self.fallback
    }

    /// Number of mapped codes
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

static OBJECT_STYLES: OnceLock<StyleRegistry> = OnceLock::new();
static TRAFFIC_LIGHT_STYLES: OnceLock<StyleRegistry> = OnceLock::new();

/// Registry for object categories
pub fn object_styles() -> &'static StyleRegistry {
    OBJECT_STYLES.get_or_init(|| {
        StyleRegistry::new(&[
            (
                ObjectClassification::UNKNOWN,
                DisplayStyle::new(Color::new(1.0, 1.0, 1.0, 0.5), "UNKNOWN"),
            ),
            (
                ObjectClassification::CAR,
                DisplayStyle::new(Color::new(1.0, 0.0, 0.0, 0.5), "CAR"),
            ),
            (
                ObjectClassification::BICYCLE,
                DisplayStyle::new(Color::new(1.0, 0.5, 0.5, 0.5), "BICYCLE"),
            ),
            (
                ObjectClassification::BUS,
                DisplayStyle::new(Color::new(0.0, 0.5, 1.0, 0.5), "BUS"),
            ),
            (
                ObjectClassification::TRUCK,
                DisplayStyle::new(Color::new(0.0, 0.5, 1.0, 0.5), "TRUCK"),
            ),
            (
                ObjectClassification::CYCLIST,
                DisplayStyle::new(Color::new(1.0, 0.5, 0.5, 0.5), "CYCLIST"),
            ),
            (
                ObjectClassification::MOTORCYCLE,
                DisplayStyle::new(Color::new(1.0, 1.0, 0.5, 0.5), "MOTORCYCLE"),
            ),
            (
                ObjectClassification::PEDESTRIAN,
                DisplayStyle::new(Color::new(0.75, 1.0, 0.25, 0.5), "PEDESTRIAN"),
            ),
        ])
    })
}

/// Registry for traffic-light subject types
pub fn traffic_light_styles() -> &'static StyleRegistry {
    TRAFFIC_LIGHT_STYLES.get_or_init(|| {
        StyleRegistry::new(&[
            (
                TrafficLightRoi::CAR_TRAFFIC_LIGHT,
                DisplayStyle::new(Color::new(0.0, 1.0, 0.0, 1.0), "VehicleTL"),
            ),
            (
                TrafficLightRoi::PEDESTRIAN_TRAFFIC_LIGHT,
                DisplayStyle::new(Color::new(0.0, 0.0, 1.0, 1.0), "PedestrianTL"),
            ),
        ])
    })
}

/// Label of the first classification, if it exists and is defined
///
/// Only the first hypothesis is ever consulted; `None` means the record
/// must be dropped.
pub fn primary_label(classification: &[ObjectClassification]) -> Option<u8> {
    classification.first().and_then(|c| c.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_registry_has_eight_categories() {
        assert_eq!(object_styles().len(), 8);
        for code in 0..8u8 {
            assert!(object_styles().contains(code));
        }
    }

    #[test]
    fn test_car_style() {
        let style = object_styles().style_for(ObjectClassification::CAR);
        assert_eq!(style.label, "CAR");
        assert_eq!(style.color, Color::new(1.0, 0.0, 0.0, 0.5));
    }

    #[test]
    fn test_unmapped_codes_fall_back() {
        for code in 8..=u8::MAX {
            let style = object_styles().style_for(code);
            assert_eq!(style.label, FALLBACK_LABEL);
            assert_eq!(style.color, Color::WHITE);
        }
        for code in 2..=u8::MAX {
            assert_eq!(traffic_light_styles().style_for(code), traffic_light_styles().fallback());
        }
    }

    #[test]
    fn test_mapped_unknown_is_not_the_fallback() {
        // Category UNKNOWN is half transparent, the fallback is opaque
        let unknown = object_styles().style_for(ObjectClassification::UNKNOWN);
        assert_eq!(unknown.label, "UNKNOWN");
        assert_eq!(unknown.color.a, 0.5);
        assert_ne!(unknown, object_styles().fallback());
    }

    #[test]
    fn test_traffic_light_styles() {
        let vehicle = traffic_light_styles().style_for(TrafficLightRoi::CAR_TRAFFIC_LIGHT);
        assert_eq!(vehicle.label, "VehicleTL");
        assert_eq!(vehicle.color, Color::new(0.0, 1.0, 0.0, 1.0));

        let ped = traffic_light_styles().style_for(TrafficLightRoi::PEDESTRIAN_TRAFFIC_LIGHT);
        assert_eq!(ped.label, "PedestrianTL");
        assert_eq!(ped.color.a, 1.0);
    }

    #[test]
    fn test_primary_label() {
        assert_eq!(primary_label(&[]), None);
        assert_eq!(
            primary_label(&[ObjectClassification {
                label: None,
                probability: 0.9
            }]),
            None
        );
        assert_eq!(
            primary_label(&[
                ObjectClassification::new(ObjectClassification::BUS, 0.6),
                ObjectClassification::new(ObjectClassification::CAR, 0.4),
            ]),
            Some(ObjectClassification::BUS)
        );
    }

    #[test]
    fn test_only_first_hypothesis_is_consulted() {
        let classes = [
            ObjectClassification {
                label: None,
                probability: 0.5,
            },
            ObjectClassification::new(ObjectClassification::CAR, 0.5),
        ];
        assert_eq!(primary_label(&classes), None);
    }
}
