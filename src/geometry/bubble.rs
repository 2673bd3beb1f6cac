//! Caption bubble sizing, placement and chrome.
//!
//! Placement runs in three steps: measure the caption, position the bubble
//! against the target for the requested arrow edge, then clamp it into the
//! screen, recording how far the arrow must shift to keep pointing at the
//! target, and flipping a top/bottom arrow once if the bubble leaves the screen
//! vertically.

use kurbo::{RoundedRect, Shape};

use crate::{
    foundation::core::{Affine, BezPath, PATH_TOLERANCE, Point, Rect, Rgba8, Size, Vec2},
    foundation::error::CoachMarkResult,
    text::measure::{TextMeasurer, TextStyle},
};

/// Edge of the bubble that carries the arrow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrowPosition {
    /// Arrow on the top edge; the bubble sits below the target.
    #[default]
    Top,
    /// Arrow on the bottom edge; the bubble sits above the target.
    Bottom,
    /// Arrow on the left edge; the bubble sits right of the target.
    Left,
    /// Arrow on the right edge; the bubble sits left of the target.
    Right,
}

impl ArrowPosition {
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Rotation applied to the canonical (upward-pointing) arrow triangle.
    pub fn rotation_rad(self) -> f64 {
        use std::f64::consts::PI;
        match self {
            Self::Top => 0.0,
            Self::Bottom => PI,
            Self::Right => PI * 0.5,
            Self::Left => PI * 1.5,
        }
    }
}

/// Fixed bubble dimensions.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BubbleMetrics {
    /// Gap between the target and the arrow.
    pub arrow_space: f64,
    /// Arrow height; the base is twice this.
    pub arrow_size: f64,
    /// Padding between caption text and the bubble border.
    pub padding: f64,
    pub corner_radius: f64,
    /// Extra arrow shift applied when the bubble is clamped at the left edge.
    pub clamp_padding: f64,
}

impl Default for BubbleMetrics {
    fn default() -> Self {
        Self {
            arrow_space: 6.0,
            arrow_size: 8.0,
            padding: 8.0,
            corner_radius: 6.0,
            clamp_padding: 3.0,
        }
    }
}

impl BubbleMetrics {
    /// Width reserved for a side arrow when wrapping the caption.
    fn side_allowance(&self, arrow: ArrowPosition) -> f64 {
        if arrow.is_vertical() {
            0.0
        } else {
            self.arrow_size
        }
    }

    /// Offset of the bubble body inside its frame (arrow allowance on the top/left edge).
    pub fn body_offset(&self, arrow: ArrowPosition) -> Vec2 {
        Vec2::new(
            if arrow == ArrowPosition::Left {
                self.arrow_size
            } else {
                0.0
            },
            if arrow == ArrowPosition::Top {
                self.arrow_size
            } else {
                0.0
            },
        )
    }
}

/// Resolved bubble geometry.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BubblePlacement {
    /// Bubble frame in screen coordinates, arrow included.
    #[serde(with = "crate::foundation::core::rect_xywh")]
    pub frame: Rect,
    /// Arrow edge after any flip.
    pub arrow: ArrowPosition,
    /// Shift of the arrow along its edge caused by clamping.
    pub arrow_offset: f64,
    /// Body size without the arrow.
    #[serde(with = "crate::foundation::core::size_wh")]
    pub body: Size,
}

/// Body size for `text`: wrapped text plus padding, arrow excluded.
pub fn bubble_body_size(
    measurer: &mut dyn TextMeasurer,
    text: &str,
    style: &TextStyle,
    arrow: ArrowPosition,
    screen: Size,
    metrics: &BubbleMetrics,
) -> CoachMarkResult<Size> {
    let max_width = screen.width - metrics.side_allowance(arrow) - metrics.padding * 3.0;
    let text_size = measurer.measure(text, style, max_width)?;
    Ok(Size::new(
        text_size.width + metrics.padding * 3.0,
        text_size.height + metrics.padding * 2.5,
    ))
}

/// Bubble frame for `arrow` before any clamping.
pub fn calculate_frame(
    target: Rect,
    body: Size,
    arrow: ArrowPosition,
    metrics: &BubbleMetrics,
) -> Rect {
    let mut x = target.x0;
    let mut y = target.y0;
    let mut w = body.width;
    let mut h = body.height;

    match arrow {
        ArrowPosition::Top | ArrowPosition::Bottom => {
            x += target.width() / 2.0 - body.width / 2.0;
            y += if arrow == ArrowPosition::Top {
                metrics.arrow_space + target.height()
            } else {
                -(metrics.arrow_space * 2.0 + body.height)
            };
            h += metrics.arrow_size;
        }
        ArrowPosition::Left | ArrowPosition::Right => {
            y += target.height() / 2.0 - body.height / 2.0;
            x += if arrow == ArrowPosition::Left {
                metrics.arrow_space + target.width()
            } else {
                -(metrics.arrow_space * 2.0 + body.width)
            };
            w += metrics.arrow_size;
        }
    }

    Rect::new(x, y, x + w, y + h)
}

/// Clamp a freshly calculated placement into `screen`.
///
/// Horizontal overflow is clamped and recorded in `arrow_offset`. A top arrow
/// that runs off the bottom flips to bottom (and vice versa) with the frame's
/// y and height recomputed for the new edge; x is kept and nothing is
/// re-checked after the flip.
pub fn fix_frame_if_out_of_bounds(
    placement: BubblePlacement,
    target: Rect,
    screen: Size,
    metrics: &BubbleMetrics,
) -> BubblePlacement {
    let frame = placement.frame;
    let mut arrow = placement.arrow;
    let mut arrow_offset = placement.arrow_offset;

    let mut x = frame.x0;
    let mut y = frame.y0;
    let width = frame.width();
    let mut height = frame.height();

    if x + width > screen.width {
        arrow_offset = x + width - screen.width;
        x = screen.width - width;
    }

    if x < 0.0 {
        if arrow_offset == 0.0 {
            arrow_offset = x - metrics.clamp_padding;
        }
        x = 0.0;
    }

    let flip = match arrow {
        ArrowPosition::Top if y + height > screen.height => Some(ArrowPosition::Bottom),
        ArrowPosition::Bottom if y < 0.0 => Some(ArrowPosition::Top),
        _ => None,
    };
    if let Some(flipped) = flip {
        tracing::debug!(from = ?arrow, to = ?flipped, "bubble flipped to stay on screen");
        arrow = flipped;
        let refit = calculate_frame(target, placement.body, arrow, metrics);
        y = refit.y0;
        height = refit.height();
    }

    BubblePlacement {
        frame: Rect::new(x, y, x + width, y + height),
        arrow,
        arrow_offset,
        body: placement.body,
    }
}

/// Measure, position and clamp a bubble for `text` pointing at `target`.
pub fn compute_bubble_frame(
    measurer: &mut dyn TextMeasurer,
    target: Rect,
    text: &str,
    style: &TextStyle,
    arrow: ArrowPosition,
    screen: Size,
    metrics: &BubbleMetrics,
) -> CoachMarkResult<BubblePlacement> {
    let body = bubble_body_size(measurer, text, style, arrow, screen, metrics)?;
    let placement = BubblePlacement {
        frame: calculate_frame(target, body, arrow, metrics),
        arrow,
        arrow_offset: 0.0,
        body,
    };
    let fixed = fix_frame_if_out_of_bounds(placement, target, screen, metrics);
    tracing::debug!(
        frame = ?fixed.frame,
        arrow = ?fixed.arrow,
        arrow_offset = fixed.arrow_offset,
        "bubble placed"
    );
    Ok(fixed)
}

/// Arrow triangle in bubble-local coordinates.
pub fn arrow_path(placement: &BubblePlacement, metrics: &BubbleMetrics) -> BezPath {
    let s = metrics.arrow_size;
    let center = s / 2.0;
    let body = placement.body;

    let mut path = BezPath::new();
    path.move_to(Point::new(center - s, s));
    path.line_to(Point::new(center + s, s));
    path.line_to(Point::new(center, 0.0));
    path.close_path();

    let translate = match placement.arrow {
        ArrowPosition::Top => Vec2::new(body.width / 2.0 - s / 2.0 + placement.arrow_offset, 0.0),
        ArrowPosition::Bottom => Vec2::new(
            body.width / 2.0 + s / 2.0 + placement.arrow_offset,
            body.height + s,
        ),
        ArrowPosition::Left => Vec2::new(0.0, (body.height + s) / 2.0),
        ArrowPosition::Right => Vec2::new(body.width + s, (body.height - s) / 2.0),
    };
    path.apply_affine(Affine::translate(translate) * Affine::rotate(placement.arrow.rotation_rad()));
    path
}

/// Arrow tip in bubble-local coordinates.
pub fn arrow_tip(placement: &BubblePlacement, metrics: &BubbleMetrics) -> Point {
    let s = metrics.arrow_size;
    let body = placement.body;
    match placement.arrow {
        ArrowPosition::Top => Point::new(body.width / 2.0 + placement.arrow_offset, 0.0),
        ArrowPosition::Bottom => {
            Point::new(body.width / 2.0 + placement.arrow_offset, body.height + s)
        }
        ArrowPosition::Left => Point::new(0.0, body.height / 2.0),
        ArrowPosition::Right => Point::new(body.width + s, body.height / 2.0),
    }
}

/// Rounded body in bubble-local coordinates.
pub fn body_path(placement: &BubblePlacement, metrics: &BubbleMetrics) -> BezPath {
    let origin = metrics.body_offset(placement.arrow).to_point();
    RoundedRect::from_origin_size(origin, placement.body, metrics.corner_radius)
        .to_path(PATH_TOLERANCE)
}

/// Caption text rect in bubble-local coordinates.
pub fn text_frame(placement: &BubblePlacement, metrics: &BubbleMetrics) -> Rect {
    let offset = metrics.body_offset(placement.arrow);
    let x = offset.x + metrics.padding * 1.5;
    let y = offset.y + metrics.padding * 1.25;
    let width = placement.frame.width() - x - metrics.padding * 1.5;
    let height = placement.frame.height() - y - metrics.padding * 1.25;
    Rect::new(x, y, x + width, y + height)
}

/// A placed caption bubble; owns its title.
#[derive(Clone, Debug, PartialEq)]
pub struct Bubble {
    pub title: String,
    pub style: TextStyle,
    pub placement: BubblePlacement,
    pub metrics: BubbleMetrics,
    pub fill: Rgba8,
    pub text_color: Rgba8,
}

impl Bubble {
    /// Lift of the looping bounce that runs after the bubble fades in.
    pub const BOUNCE_LIFT: f64 = 5.0;

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        measurer: &mut dyn TextMeasurer,
        target: Rect,
        title: impl Into<String>,
        style: TextStyle,
        arrow: ArrowPosition,
        screen: Size,
        metrics: BubbleMetrics,
        fill: Rgba8,
    ) -> CoachMarkResult<Self> {
        let title = title.into();
        let placement = compute_bubble_frame(measurer, target, &title, &style, arrow, screen, &metrics)?;
        Ok(Self {
            title,
            style,
            placement,
            metrics,
            fill,
            text_color: Rgba8::BLACK.with_alpha(0.9),
        })
    }

    pub fn frame(&self) -> Rect {
        self.placement.frame
    }

    pub fn arrow(&self) -> ArrowPosition {
        self.placement.arrow
    }

    pub fn arrow_offset(&self) -> f64 {
        self.placement.arrow_offset
    }

    pub fn body_path(&self) -> BezPath {
        body_path(&self.placement, &self.metrics)
    }

    pub fn arrow_path(&self) -> BezPath {
        arrow_path(&self.placement, &self.metrics)
    }

    /// Arrow tip in screen coordinates.
    pub fn arrow_tip(&self) -> Point {
        arrow_tip(&self.placement, &self.metrics) + self.placement.frame.origin().to_vec2()
    }

    pub fn text_frame(&self) -> Rect {
        text_frame(&self.placement, &self.metrics)
    }

    pub fn bounce_transform(&self) -> Affine {
        Affine::translate((0.0, -Self::BOUNCE_LIFT))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/bubble.rs"]
mod tests;
