use super::*;

#[test]
fn defaults_match_documented_values() {
    let cfg = OverlayConfig::default();
    assert_eq!(cfg.mask_color, Rgba8::new(0, 0, 0, 204));
    assert_eq!(cfg.cutout_corner_radius, 2.0);
    assert_eq!(cfg.max_caption_width, 230.0);
    assert_eq!(cfg.label_spacing, 35.0);
    assert!(cfg.use_bubbles);
    assert_eq!(cfg.animation_duration, 0.3);
    assert!(cfg.validate().is_ok());
}

#[test]
fn partial_json_fills_defaults() {
    let cfg: OverlayConfig =
        serde_json::from_str(r#"{"use_bubbles": false, "animation_duration": 0.5}"#).unwrap();
    assert!(!cfg.use_bubbles);
    assert_eq!(cfg.animation_duration, 0.5);
    assert_eq!(cfg.label_spacing, 35.0);
}

#[test]
fn negative_or_nan_values_are_configuration_errors() {
    let cfg = OverlayConfig {
        animation_duration: -1.0,
        ..OverlayConfig::default()
    };
    assert!(matches!(
        cfg.validate(),
        Err(CoachMarkError::Configuration(_))
    ));

    let cfg = OverlayConfig {
        label_spacing: f64::NAN,
        ..OverlayConfig::default()
    };
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("label_spacing"));
}
