use crate::{
    foundation::core::{Rect, rect_xywh, validate_rect},
    foundation::error::{CoachMarkError, CoachMarkResult},
    text::measure::TextStyle,
};

/// Shape of the cutout punched around a mark's target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkShape {
    /// Oval inscribed in the target rect.
    Circle,
    /// The target rect exactly.
    Square,
    /// Rounded rect with the configured cutout corner radius.
    #[default]
    Other,
}

/// Direction of the swipe hint; names follow where the gesture starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    /// Left to right.
    #[default]
    Left,
    /// Right to left.
    Right,
    /// Top to bottom.
    Up,
    /// Bottom to top.
    Down,
}

impl SwipeDirection {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// One step of the tour.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CoachMark {
    /// Target rectangle in overlay coordinates.
    #[serde(with = "rect_xywh")]
    pub rect: Rect,
    /// Point of interest; when present and non-empty the bubble anchors here instead.
    #[serde(default, with = "rect_xywh::option", skip_serializing_if = "Option::is_none")]
    pub poi: Option<Rect>,
    /// Empty caption means no bubble for this step.
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub shape: MarkShape,
    #[serde(default)]
    pub font: TextStyle,
    #[serde(default)]
    pub swipe_enabled: bool,
    #[serde(default)]
    pub swipe_direction: SwipeDirection,
}

impl CoachMark {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            poi: None,
            caption: String::new(),
            shape: MarkShape::default(),
            font: TextStyle::default(),
            swipe_enabled: false,
            swipe_direction: SwipeDirection::default(),
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn shape(mut self, shape: MarkShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn poi(mut self, poi: Rect) -> Self {
        self.poi = Some(poi);
        self
    }

    pub fn font(mut self, font: TextStyle) -> Self {
        self.font = font;
        self
    }

    pub fn swipe(mut self, direction: SwipeDirection) -> Self {
        self.swipe_enabled = true;
        self.swipe_direction = direction;
        self
    }

    pub fn has_caption(&self) -> bool {
        !self.caption.is_empty()
    }

    /// Rect the caption bubble points at.
    pub fn anchor_rect(&self) -> Rect {
        match self.poi {
            Some(poi) if poi.width() > 0.0 && poi.height() > 0.0 => poi,
            _ => self.rect,
        }
    }

    pub fn validate(&self) -> CoachMarkResult<()> {
        validate_rect(self.rect, "coach mark rect")?;
        if let Some(poi) = self.poi {
            validate_rect(poi, "coach mark poi")?;
        }
        Ok(())
    }
}

/// Ordered, immutable list of marks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarkCatalog {
    marks: Vec<CoachMark>,
}

impl MarkCatalog {
    pub fn new(marks: Vec<CoachMark>) -> CoachMarkResult<Self> {
        for (idx, mark) in marks.iter().enumerate() {
            mark.validate()
                .map_err(|e| CoachMarkError::validation(format!("mark {idx}: {e}")))?;
        }
        Ok(Self { marks })
    }

    pub fn builder() -> MarkCatalogBuilder {
        MarkCatalogBuilder::default()
    }

    pub fn count(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn at(&self, index: usize) -> CoachMarkResult<&CoachMark> {
        self.marks
            .get(index)
            .ok_or_else(|| CoachMarkError::index(index, self.marks.len()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CoachMark> {
        self.marks.iter()
    }
}

#[derive(Debug, Default)]
pub struct MarkCatalogBuilder {
    marks: Vec<CoachMark>,
}

impl MarkCatalogBuilder {
    pub fn mark(mut self, mark: CoachMark) -> Self {
        self.marks.push(mark);
        self
    }

    pub fn build(self) -> CoachMarkResult<MarkCatalog> {
        MarkCatalog::new(self.marks)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/mark.rs"]
mod tests;
