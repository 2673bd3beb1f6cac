use super::*;
use crate::text::measure::FixedAdvanceMeasurer;

const BOUNDS: Size = Size::new(320.0, 480.0);

#[test]
fn label_goes_below_the_cutout_when_it_fits() {
    let frame = caption_label_frame(
        Rect::new(6.0, 24.0, 46.0, 64.0),
        Size::new(100.0, 20.0),
        BOUNDS,
        35.0,
    );
    assert_eq!(frame, Rect::new(110.0, 99.0, 210.0, 119.0));
}

#[test]
fn label_moves_above_when_it_would_overflow() {
    let frame = caption_label_frame(
        Rect::new(0.0, 400.0, 320.0, 460.0),
        Size::new(101.0, 20.0),
        BOUNDS,
        35.0,
    );
    assert_eq!(frame.y0, 345.0);
    assert_eq!(frame.x0, 109.0);
}

#[test]
fn label_wraps_to_max_width() {
    let mut m = FixedAdvanceMeasurer::new(1.0, 1.0);
    let style = TextStyle {
        size_px: 10.0,
        ..TextStyle::default()
    };
    let label = CaptionLabel::new(
        &mut m,
        Rect::new(6.0, 24.0, 46.0, 64.0),
        "Synchronize your mail",
        style,
        BOUNDS,
        120.0,
        35.0,
    )
    .unwrap();
    assert!(label.frame.width() <= 120.0);
    assert_eq!(label.frame.height(), 20.0);
    assert_eq!(label.text, "Synchronize your mail");
}
