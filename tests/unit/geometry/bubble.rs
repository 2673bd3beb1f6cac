use super::*;
use crate::text::measure::FixedAdvanceMeasurer;

// 10px font, 1em advance, 1em line height: every char is a 10x10 box.
fn measurer() -> FixedAdvanceMeasurer {
    FixedAdvanceMeasurer::new(1.0, 1.0)
}

fn style() -> TextStyle {
    TextStyle {
        size_px: 10.0,
        ..TextStyle::default()
    }
}

fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
    Rect::new(x, y, x + w, y + h)
}

const SCREEN: Size = Size::new(320.0, 480.0);

fn place(target: Rect, text: &str, arrow: ArrowPosition) -> BubblePlacement {
    compute_bubble_frame(
        &mut measurer(),
        target,
        text,
        &style(),
        arrow,
        SCREEN,
        &BubbleMetrics::default(),
    )
    .unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn body_size_adds_padding_to_measured_text() {
    let body = bubble_body_size(
        &mut measurer(),
        "A",
        &style(),
        ArrowPosition::Top,
        SCREEN,
        &BubbleMetrics::default(),
    )
    .unwrap();
    assert_eq!(body, Size::new(34.0, 30.0));
}

#[test]
fn side_arrow_narrows_the_wrap_width() {
    // 29 chars = 290px: fits 296px (top) but not 288px (left).
    let text = "a".repeat(29);
    let top = bubble_body_size(
        &mut measurer(),
        &text,
        &style(),
        ArrowPosition::Top,
        SCREEN,
        &BubbleMetrics::default(),
    )
    .unwrap();
    let left = bubble_body_size(
        &mut measurer(),
        &text,
        &style(),
        ArrowPosition::Left,
        SCREEN,
        &BubbleMetrics::default(),
    )
    .unwrap();
    assert_eq!(top.height, 30.0);
    assert_eq!(left.height, 40.0);
}

#[test]
fn top_arrow_centers_below_target() {
    let p = place(rect(6.0, 24.0, 40.0, 40.0), "A", ArrowPosition::Top);
    assert_eq!(p.arrow, ArrowPosition::Top);
    assert_eq!(p.frame, rect(9.0, 70.0, 34.0, 38.0));
    assert_eq!(p.arrow_offset, 0.0);
}

#[test]
fn targets_inside_the_screen_keep_top_bubbles_on_screen_without_offset() {
    for ix in 1..=13 {
        for iy in 0..=9 {
            let target = rect(f64::from(ix) * 20.0, f64::from(iy) * 40.0, 40.0, 40.0);
            let p = place(target, "A", ArrowPosition::Top);
            assert!(p.frame.x0 >= 0.0, "{target:?}");
            assert!(p.frame.x1 <= SCREEN.width, "{target:?}");
            assert_eq!(p.arrow_offset, 0.0, "{target:?}");
            assert_eq!(p.arrow, ArrowPosition::Top, "{target:?}");
        }
    }
}

#[test]
fn right_overflow_clamps_and_shifts_arrow_back_onto_target() {
    let target = rect(275.0, 24.0, 40.0, 40.0);
    let p = place(target, "Create a new message", ArrowPosition::Top);
    assert_eq!(p.frame.x1, SCREEN.width);
    assert_eq!(p.arrow_offset, 87.0);

    let bubble = Bubble {
        title: "Create a new message".into(),
        style: style(),
        placement: p,
        metrics: BubbleMetrics::default(),
        fill: Rgba8::WHITE,
        text_color: Rgba8::BLACK,
    };
    assert!(approx(bubble.arrow_tip().x, target.center().x));
}

#[test]
fn left_overflow_clamps_with_extra_padding() {
    let target = rect(6.0, 24.0, 40.0, 40.0);
    let p = place(target, "Create a new message", ArrowPosition::Top);
    assert_eq!(p.frame.x0, 0.0);
    assert_eq!(p.arrow_offset, -89.0);
    let tip = arrow_tip(&p, &BubbleMetrics::default());
    assert!(approx(tip.x, target.center().x - 3.0));
}

#[test]
fn top_arrow_flips_to_bottom_near_screen_bottom() {
    let target = rect(100.0, 440.0, 40.0, 30.0);
    let p = place(target, "Hi", ArrowPosition::Top);
    assert_eq!(p.arrow, ArrowPosition::Bottom);
    assert_eq!(p.frame, rect(98.0, 398.0, 44.0, 38.0));
    assert!(p.frame.y1 <= SCREEN.height);
    assert!(p.frame.y1 <= target.y0);
}

#[test]
fn bottom_arrow_flips_to_top_near_screen_top() {
    let target = rect(100.0, 10.0, 40.0, 30.0);
    let p = place(target, "Hi", ArrowPosition::Bottom);
    assert_eq!(p.arrow, ArrowPosition::Top);
    assert_eq!(p.frame.y0, 46.0);
    assert_eq!(p.frame.height(), 38.0);
}

#[test]
fn flip_keeps_the_clamped_x_and_offset() {
    let target = rect(300.0, 450.0, 20.0, 20.0);
    let p = place(target, "abcdefghij", ArrowPosition::Top);
    assert_eq!(p.arrow, ArrowPosition::Bottom);
    assert_eq!(p.arrow_offset, 52.0);
    assert_eq!(p.frame, rect(196.0, 408.0, 124.0, 38.0));
}

#[test]
fn side_arrows_sit_beside_the_target() {
    let target = rect(10.0, 100.0, 40.0, 40.0);
    let left = place(target, "Hi", ArrowPosition::Left);
    assert_eq!(left.frame, rect(56.0, 105.0, 52.0, 30.0));
    let tip = arrow_tip(&left, &BubbleMetrics::default());
    assert_eq!(tip, Point::new(0.0, 15.0));

    let right = calculate_frame(
        rect(200.0, 100.0, 40.0, 40.0),
        Size::new(44.0, 30.0),
        ArrowPosition::Right,
        &BubbleMetrics::default(),
    );
    assert_eq!(right, rect(144.0, 105.0, 52.0, 30.0));
}

#[test]
fn arrow_path_apex_matches_tip_for_every_edge() {
    let metrics = BubbleMetrics::default();
    for arrow in [
        ArrowPosition::Top,
        ArrowPosition::Bottom,
        ArrowPosition::Left,
        ArrowPosition::Right,
    ] {
        let placement = BubblePlacement {
            frame: rect(0.0, 0.0, 60.0, 40.0),
            arrow,
            arrow_offset: if arrow.is_vertical() { 4.0 } else { 0.0 },
            body: Size::new(52.0, 32.0),
        };
        let path = arrow_path(&placement, &metrics);
        let tip = arrow_tip(&placement, &metrics);
        let has_apex = path.elements().iter().any(|el| match el {
            kurbo::PathEl::LineTo(p) | kurbo::PathEl::MoveTo(p) => {
                (p.x - tip.x).abs() < 1e-6 && (p.y - tip.y).abs() < 1e-6
            }
            _ => false,
        });
        assert!(has_apex, "{arrow:?} apex missing from {}", path.to_svg());
        let bbox = path.bounding_box();
        assert!(approx(bbox.width().max(bbox.height()), 2.0 * metrics.arrow_size));
        assert!(approx(bbox.width().min(bbox.height()), metrics.arrow_size));
    }
}

#[test]
fn body_and_text_frames_account_for_arrow_edge() {
    let p = place(rect(6.0, 24.0, 40.0, 40.0), "A", ArrowPosition::Top);
    let metrics = BubbleMetrics::default();
    let body = body_path(&p, &metrics).bounding_box();
    assert!(approx(body.y0, 8.0));
    assert!(approx(body.height(), 30.0));

    let text = text_frame(&p, &metrics);
    assert_eq!(text, rect(12.0, 18.0, 10.0, 10.0));
}

#[test]
fn measurement_failure_propagates() {
    let bad = TextStyle {
        size_px: -1.0,
        ..TextStyle::default()
    };
    let err = compute_bubble_frame(
        &mut measurer(),
        rect(0.0, 0.0, 10.0, 10.0),
        "x",
        &bad,
        ArrowPosition::Top,
        SCREEN,
        &BubbleMetrics::default(),
    );
    assert!(matches!(
        err,
        Err(crate::foundation::error::CoachMarkError::MissingMetrics(_))
    ));
}
