use super::*;
use crate::catalog::mark::{MarkShape, SwipeDirection};

const TOUR: &str = r#"{
    "bounds": { "width": 320, "height": 480 },
    "config": { "use_bubbles": false },
    "marks": [
        { "rect": { "x": 6, "y": 24, "width": 40, "height": 40 }, "caption": "A", "shape": "circle" },
        { "rect": { "x": 125, "y": 0, "width": 60, "height": 320 }, "swipe_enabled": true, "swipe_direction": "down" }
    ]
}"#;

#[test]
fn parses_marks_and_partial_config() {
    let tour = Tour::from_json_str(TOUR).unwrap();
    assert_eq!(tour.bounds, Size::new(320.0, 480.0));
    assert!(!tour.config.use_bubbles);
    assert_eq!(tour.config.label_spacing, 35.0);
    assert_eq!(tour.marks.len(), 2);
    assert_eq!(tour.marks[0].rect, Rect::new(6.0, 24.0, 46.0, 64.0));
    assert_eq!(tour.marks[0].shape, MarkShape::Circle);
    assert!(tour.marks[1].swipe_enabled);
    assert_eq!(tour.marks[1].swipe_direction, SwipeDirection::Down);
    assert!(!tour.marks[1].has_caption());
    tour.validate().unwrap();
    assert_eq!(tour.catalog().unwrap().count(), 2);
    assert_eq!(tour.bounds_rect(), Rect::new(0.0, 0.0, 320.0, 480.0));
}

#[test]
fn missing_config_uses_defaults() {
    let tour = Tour::from_json_str(r#"{"bounds":{"width":100,"height":100},"marks":[]}"#).unwrap();
    assert_eq!(tour.config, OverlayConfig::default());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = Tour::from_json_str("{").unwrap_err();
    assert!(matches!(err, CoachMarkError::Serde(_)));
}

#[test]
fn zero_bounds_fail_validation() {
    let tour = Tour::from_json_str(r#"{"bounds":{"width":0,"height":100},"marks":[]}"#).unwrap();
    assert!(matches!(
        tour.validate(),
        Err(CoachMarkError::Validation(_))
    ));
}

#[test]
fn missing_file_is_reported_with_path() {
    let err = Tour::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}
