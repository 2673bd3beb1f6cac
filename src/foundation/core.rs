use crate::foundation::error::{CoachMarkError, CoachMarkResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Size, Vec2};

/// Flattening tolerance used when converting kurbo shapes into paths.
pub(crate) const PATH_TOLERANCE: f64 = 0.1;

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with alpha taken from a `[0, 1]` fraction.
    pub fn with_alpha(self, alpha: f64) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }

    pub fn alpha_f64(self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

/// Fill rule the surface must use when filling a path with several sub-paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FillRule {
    NonZero,
    EvenOdd,
}

pub(crate) fn validate_rect(rect: Rect, what: &str) -> CoachMarkResult<()> {
    let finite = [rect.x0, rect.y0, rect.x1, rect.y1]
        .iter()
        .all(|v| v.is_finite());
    if !finite {
        return Err(CoachMarkError::validation(format!(
            "{what} must have finite coordinates"
        )));
    }
    if rect.width() < 0.0 || rect.height() < 0.0 {
        return Err(CoachMarkError::validation(format!(
            "{what} must have non-negative width and height"
        )));
    }
    Ok(())
}

/// Center of `rect`, floored to whole units.
pub(crate) fn floored_center(rect: Rect) -> Point {
    let c = rect.center();
    Point::new(c.x.floor(), c.y.floor())
}

/// Serde adapter that reads and writes a [`Rect`] as `{x, y, width, height}`.
pub mod rect_xywh {
    use kurbo::Rect;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Xywh {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    }

    impl From<Rect> for Xywh {
        fn from(r: Rect) -> Self {
            Self {
                x: r.x0,
                y: r.y0,
                width: r.width(),
                height: r.height(),
            }
        }
    }

    impl From<Xywh> for Rect {
        fn from(v: Xywh) -> Self {
            Rect::new(v.x, v.y, v.x + v.width, v.y + v.height)
        }
    }

    pub fn serialize<S: Serializer>(rect: &Rect, s: S) -> Result<S::Ok, S::Error> {
        Xywh::from(*rect).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Rect, D::Error> {
        Xywh::deserialize(d).map(Rect::from)
    }

    /// Optional variant for fields such as a mark's point of interest.
    pub mod option {
        use super::Xywh;
        use kurbo::Rect;
        use serde::{Deserialize, Deserializer, Serialize, Serializer};

        pub fn serialize<S: Serializer>(rect: &Option<Rect>, s: S) -> Result<S::Ok, S::Error> {
            rect.map(Xywh::from).serialize(s)
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Rect>, D::Error> {
            Ok(Option::<Xywh>::deserialize(d)?.map(Rect::from))
        }
    }
}

/// Serde adapter that reads and writes a [`Size`] as `{width, height}`.
pub mod size_wh {
    use kurbo::Size;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Wh {
        width: f64,
        height: f64,
    }

    pub fn serialize<S: Serializer>(size: &Size, s: S) -> Result<S::Ok, S::Error> {
        Wh {
            width: size.width,
            height: size.height,
        }
        .serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Size, D::Error> {
        let wh = Wh::deserialize(d)?;
        Ok(Size::new(wh.width, wh.height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
