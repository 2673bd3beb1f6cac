use super::*;

#[derive(serde::Serialize, serde::Deserialize)]
struct Holder {
    #[serde(with = "rect_xywh")]
    rect: Rect,
    #[serde(default, with = "rect_xywh::option")]
    poi: Option<Rect>,
}

#[test]
fn rect_xywh_reads_origin_and_size() {
    let h: Holder =
        serde_json::from_str(r#"{"rect":{"x":6,"y":24,"width":40,"height":40}}"#).unwrap();
    assert_eq!(h.rect, Rect::new(6.0, 24.0, 46.0, 64.0));
    assert!(h.poi.is_none());

    let json = serde_json::to_value(&h).unwrap();
    assert_eq!(json["rect"]["width"], 40.0);
    assert_eq!(json["rect"]["x"], 6.0);
}

#[test]
fn validate_rect_rejects_nan_and_negative_sizes() {
    assert!(validate_rect(Rect::new(0.0, 0.0, 10.0, 10.0), "r").is_ok());
    assert!(validate_rect(Rect::new(0.0, 0.0, 0.0, 0.0), "r").is_ok());
    assert!(validate_rect(Rect::new(f64::NAN, 0.0, 10.0, 10.0), "r").is_err());
    assert!(validate_rect(Rect::new(10.0, 0.0, 0.0, 10.0), "r").is_err());
}

#[test]
fn floored_center_matches_first_cutout_seed() {
    let c = floored_center(Rect::new(6.0, 24.0, 46.0, 64.0));
    assert_eq!(c, Point::new(26.0, 44.0));
    let c = floored_center(Rect::new(0.0, 0.0, 5.0, 5.0));
    assert_eq!(c, Point::new(2.0, 2.0));
}

#[test]
fn rgba_alpha_conversion_rounds() {
    let c = Rgba8::BLACK.with_alpha(0.8);
    assert_eq!(c.a, 204);
    assert!((c.alpha_f64() - 0.8).abs() < 0.01);
    assert_eq!(Rgba8::WHITE.with_alpha(2.0).a, 255);
}
