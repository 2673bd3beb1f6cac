use super::*;

fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
    Rect::new(x, y, x + w, y + h)
}

#[test]
fn at_returns_marks_in_order_and_fails_past_the_end() {
    let catalog = MarkCatalog::builder()
        .mark(CoachMark::new(rect(6.0, 24.0, 40.0, 40.0)).caption("A"))
        .mark(CoachMark::new(rect(275.0, 24.0, 40.0, 40.0)).caption("B"))
        .build()
        .unwrap();

    assert_eq!(catalog.count(), 2);
    assert_eq!(catalog.at(0).unwrap().caption, "A");
    assert_eq!(catalog.at(1).unwrap().caption, "B");
    match catalog.at(2) {
        Err(CoachMarkError::Index { index, count }) => {
            assert_eq!(index, 2);
            assert_eq!(count, 2);
        }
        other => panic!("expected index error, got {other:?}"),
    }
}

#[test]
fn iter_follows_catalog_order() {
    let catalog = MarkCatalog::new(vec![
        CoachMark::new(rect(0.0, 0.0, 10.0, 10.0)).caption("first"),
        CoachMark::new(rect(0.0, 20.0, 10.0, 10.0)),
        CoachMark::new(rect(0.0, 40.0, 10.0, 10.0)).caption("third"),
    ])
    .unwrap();

    let captions: Vec<&str> = catalog.iter().map(|m| m.caption.as_str()).collect();
    assert_eq!(captions, vec!["first", "", "third"]);
    assert_eq!(catalog.iter().filter(|m| m.has_caption()).count(), 2);
}

#[test]
fn anchor_prefers_non_empty_poi() {
    let target = rect(10.0, 10.0, 40.0, 40.0);
    let poi = rect(20.0, 20.0, 5.0, 5.0);
    assert_eq!(CoachMark::new(target).anchor_rect(), target);
    assert_eq!(CoachMark::new(target).poi(poi).anchor_rect(), poi);
    assert_eq!(
        CoachMark::new(target)
            .poi(rect(20.0, 20.0, 0.0, 5.0))
            .anchor_rect(),
        target
    );
}

#[test]
fn invalid_rects_are_rejected_with_mark_index() {
    let err = MarkCatalog::new(vec![
        CoachMark::new(rect(0.0, 0.0, 1.0, 1.0)),
        CoachMark::new(Rect::new(0.0, 0.0, f64::INFINITY, 1.0)),
    ])
    .unwrap_err();
    assert!(err.to_string().contains("mark 1"));
}

#[test]
fn marks_deserialize_with_defaults() {
    let json = r#"[
        {"rect": {"x": 125, "y": 0, "width": 60, "height": 320},
         "caption": "Swipe for more options",
         "shape": "square",
         "font": {"size_px": 14, "bold": true},
         "swipe_enabled": true,
         "swipe_direction": "down"},
        {"rect": {"x": 0, "y": 0, "width": 10, "height": 10}}
    ]"#;
    let marks: Vec<CoachMark> = serde_json::from_str(json).unwrap();
    assert_eq!(marks[0].shape, MarkShape::Square);
    assert_eq!(marks[0].swipe_direction, SwipeDirection::Down);
    assert!(marks[0].font.bold);
    assert!(marks[0].swipe_enabled);

    assert!(!marks[1].has_caption());
    assert_eq!(marks[1].shape, MarkShape::Other);
    assert!(!marks[1].swipe_enabled);
    assert_eq!(marks[1].poi, None);
}

#[test]
fn empty_catalog_is_allowed() {
    let catalog = MarkCatalog::builder().build().unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.at(0).is_err());
}
