use kurbo::{Ellipse, RoundedRect, Shape};

use crate::{
    catalog::mark::MarkShape,
    foundation::core::{BezPath, FillRule, PATH_TOLERANCE, Rect, floored_center},
};

/// Fill rule that turns the mask path into a full-bounds scrim with a hole.
pub const MASK_FILL_RULE: FillRule = FillRule::EvenOdd;

/// Outline of the cutout itself.
pub fn cutout_shape_path(rect: Rect, shape: MarkShape, corner_radius: f64) -> BezPath {
    match shape {
        MarkShape::Circle => Ellipse::from_rect(rect).to_path(PATH_TOLERANCE),
        MarkShape::Square => rect.to_path(PATH_TOLERANCE),
        MarkShape::Other => RoundedRect::from_rect(rect, corner_radius).to_path(PATH_TOLERANCE),
    }
}

/// Full-bounds rectangle followed by the cutout as a second sub-path.
pub fn cutout_mask_path(bounds: Rect, cutout: Rect, shape: MarkShape, corner_radius: f64) -> BezPath {
    let mut path = bounds.to_path(PATH_TOLERANCE);
    path.extend(
        cutout_shape_path(cutout, shape, corner_radius)
            .elements()
            .iter()
            .copied(),
    );
    path
}

/// Zero-size rect at the floored center of `rect`; the first cutout grows from here.
pub fn collapsed_cutout(rect: Rect) -> Rect {
    Rect::from_origin_size(floored_center(rect), (0.0, 0.0))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/cutout.rs"]
mod tests;
