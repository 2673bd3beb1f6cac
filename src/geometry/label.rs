use crate::{
    foundation::core::{Rect, Size},
    foundation::error::CoachMarkResult,
    text::measure::{TextMeasurer, TextStyle},
};

/// Plain caption shown instead of a bubble when bubbles are disabled.
#[derive(Clone, Debug, PartialEq)]
pub struct CaptionLabel {
    pub text: String,
    pub style: TextStyle,
    pub frame: Rect,
}

/// Place a caption label `spacing` below the cutout, or above it when the label
/// would not fit below. Horizontally centered in `bounds`.
pub fn caption_label_frame(
    cutout: Rect,
    text_size: Size,
    bounds: Size,
    spacing: f64,
) -> Rect {
    let mut y = cutout.y1 + spacing;
    let bottom = y + text_size.height + spacing;
    if bottom > bounds.height {
        y = cutout.y0 - spacing - text_size.height;
    }
    let x = ((bounds.width - text_size.width) / 2.0).floor();
    Rect::from_origin_size((x, y), text_size)
}

impl CaptionLabel {
    pub fn new(
        measurer: &mut dyn TextMeasurer,
        cutout: Rect,
        text: impl Into<String>,
        style: TextStyle,
        bounds: Size,
        max_width: f64,
        spacing: f64,
    ) -> CoachMarkResult<Self> {
        let text = text.into();
        let size = measurer.measure(&text, &style, max_width)?;
        let frame = caption_label_frame(cutout, size, bounds, spacing);
        Ok(Self { text, style, frame })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/label.rs"]
mod tests;
