use super::*;
use crate::foundation::core::Rect;

fn overlay() -> LayerContent {
    LayerContent::Overlay {
        bounds: Rect::new(0.0, 0.0, 320.0, 480.0),
    }
}

fn label(text: &str) -> LayerContent {
    LayerContent::Label {
        frame: Rect::new(0.0, 0.0, 10.0, 10.0),
        text: text.to_string(),
        text_color: Rgba8::WHITE,
        style: TextStyle::default(),
    }
}

#[test]
fn attach_and_detach_track_live_layers() {
    let mut s = RecordingSurface::new();
    s.attach(None, LayerId(0), overlay());
    s.attach(Some(LayerId(0)), LayerId(1), label("a"));
    assert_eq!(s.attached_count(), 2);
    assert_eq!(s.layer(LayerId(1)).unwrap().parent, Some(LayerId(0)));

    s.detach(LayerId(1));
    assert!(!s.is_attached(LayerId(1)));
    assert!(s.attached_of_kind(LayerKind::Label).is_empty());
    assert_eq!(s.ops().len(), 3);
}

#[test]
fn peak_counts_simultaneous_layers_only() {
    let mut s = RecordingSurface::new();
    s.attach(None, LayerId(1), label("a"));
    s.detach(LayerId(1));
    s.attach(None, LayerId(2), label("b"));
    assert_eq!(s.peak_attached(LayerKind::Label), 1);

    s.attach(None, LayerId(3), label("c"));
    assert_eq!(s.peak_attached(LayerKind::Label), 2);
    assert_eq!(s.peak_attached(LayerKind::Bubble), 0);
}

#[test]
fn property_setters_update_live_state() {
    let mut s = RecordingSurface::new();
    s.attach(
        None,
        LayerId(7),
        LayerContent::Mask {
            path: BezPath::new(),
            fill: Rgba8::BLACK,
            fill_rule: FillRule::EvenOdd,
        },
    );
    s.set_opacity(LayerId(7), 0.25);
    s.set_transform(LayerId(7), Affine::translate((3.0, 4.0)));

    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.line_to((5.0, 0.0));
    s.set_mask_path(LayerId(7), &path);

    let state = s.layer(LayerId(7)).unwrap();
    assert_eq!(state.opacity, 0.25);
    assert_eq!(state.transform, Affine::translate((3.0, 4.0)));
    match &state.content {
        LayerContent::Mask { path: p, .. } => assert_eq!(p, &path),
        other => panic!("unexpected content {other:?}"),
    }
    assert!(matches!(s.ops().last(), Some(SurfaceOp::MaskPath { .. })));
}

#[test]
fn setters_on_detached_layers_are_logged_but_harmless() {
    let mut s = RecordingSurface::new();
    s.set_opacity(LayerId(99), 0.0);
    assert_eq!(s.attached_count(), 0);
    assert_eq!(s.ops().len(), 1);
}
