use std::borrow::Cow;
use std::path::Path;

use crate::foundation::{
    core::Size,
    error::{CoachMarkError, CoachMarkResult},
};

/// Font selection for a caption.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextStyle {
    /// Registered family name; `None` picks the measurer's default family.
    #[serde(default)]
    pub family: Option<String>,
    pub size_px: f32,
    #[serde(default)]
    pub bold: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            family: None,
            size_px: 14.0,
            bold: false,
        }
    }
}

impl TextStyle {
    pub fn bold(size_px: f32) -> Self {
        Self {
            size_px,
            bold: true,
            ..Self::default()
        }
    }
}

/// Text measurement capability: `(text, style, max width) -> wrapped size`.
pub trait TextMeasurer {
    fn measure(&mut self, text: &str, style: &TextStyle, max_width: f64) -> CoachMarkResult<Size>;
}

fn check_size(style: &TextStyle) -> CoachMarkResult<()> {
    if !style.size_px.is_finite() || style.size_px <= 0.0 {
        return Err(CoachMarkError::missing_metrics(
            "text size_px must be finite and > 0",
        ));
    }
    Ok(())
}

/// Parley-backed measurer over fonts registered from raw bytes.
pub struct ParleyMeasurer {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    families: Vec<String>,
}

impl Default for ParleyMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl ParleyMeasurer {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            families: Vec::new(),
        }
    }

    /// Register font bytes and return the family name they resolve to.
    /// The first registered family becomes the default.
    pub fn register_font(&mut self, font_bytes: &[u8]) -> CoachMarkResult<String> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            CoachMarkError::missing_metrics("no font families registered from font bytes")
        })?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| CoachMarkError::missing_metrics("registered font family has no name"))?
            .to_string();
        if !self.families.contains(&family_name) {
            self.families.push(family_name.clone());
        }
        tracing::debug!(family = %family_name, "registered caption font");
        Ok(family_name)
    }

    pub fn register_font_file(&mut self, path: impl AsRef<Path>) -> CoachMarkResult<String> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            CoachMarkError::Other(anyhow::anyhow!("read font '{}': {e}", path.display()))
        })?;
        self.register_font(&bytes)
    }

    pub fn families(&self) -> &[String] {
        &self.families
    }

    fn resolve_family(&self, style: &TextStyle) -> CoachMarkResult<String> {
        match &style.family {
            Some(name) if self.families.iter().any(|f| f == name) => Ok(name.clone()),
            Some(name) => Err(CoachMarkError::missing_metrics(format!(
                "font family '{name}' is not registered"
            ))),
            None => self.families.first().cloned().ok_or_else(|| {
                CoachMarkError::missing_metrics("no font registered for caption measurement")
            }),
        }
    }
}

impl TextMeasurer for ParleyMeasurer {
    fn measure(&mut self, text: &str, style: &TextStyle, max_width: f64) -> CoachMarkResult<Size> {
        check_size(style)?;
        let family = self.resolve_family(style)?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(style.size_px));
        if style.bold {
            builder.push_default(parley::style::StyleProperty::FontWeight(
                parley::style::FontWeight::BOLD,
            ));
        }

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(Some(max_width.max(0.0) as f32));

        let mut w = 0.0f64;
        let mut h = 0.0f64;
        for line in layout.lines() {
            let m = line.metrics();
            w = w.max(f64::from(m.advance));
            h += f64::from(m.ascent + m.descent + m.leading);
        }
        if !w.is_finite() || !h.is_finite() {
            return Err(CoachMarkError::missing_metrics(
                "text layout produced non-finite metrics",
            ));
        }
        Ok(Size::new(w, h))
    }
}

/// Deterministic measurer with a fixed per-character advance and line height,
/// both relative to the font size. Wraps greedily on whitespace.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvanceMeasurer {
    pub advance_em: f64,
    pub line_height_em: f64,
}

impl Default for FixedAdvanceMeasurer {
    fn default() -> Self {
        Self {
            advance_em: 0.5,
            line_height_em: 1.2,
        }
    }
}

impl FixedAdvanceMeasurer {
    pub fn new(advance_em: f64, line_height_em: f64) -> Self {
        Self {
            advance_em,
            line_height_em,
        }
    }

    fn wrap_lines(&self, text: &str, advance: f64, max_width: f64) -> Vec<usize> {
        let max_chars = if advance > 0.0 {
            ((max_width / advance).floor() as usize).max(1)
        } else {
            usize::MAX
        };

        let mut lines = Vec::new();
        for paragraph in text.split('\n') {
            let mut current = 0usize;
            for word in paragraph.split_whitespace() {
                let mut len = word.chars().count();
                let needed = if current == 0 { len } else { current + 1 + len };
                if needed <= max_chars {
                    current = needed;
                    continue;
                }
                if current > 0 {
                    lines.push(current);
                }
                // Words wider than a line are broken at character boundaries.
                while len > max_chars {
                    lines.push(max_chars);
                    len -= max_chars;
                }
                current = len;
            }
            lines.push(current);
        }
        lines
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure(&mut self, text: &str, style: &TextStyle, max_width: f64) -> CoachMarkResult<Size> {
        check_size(style)?;
        let size = f64::from(style.size_px);
        let advance = size * self.advance_em;
        let lines = self.wrap_lines(text, advance, max_width.max(0.0));

        let widest = lines.iter().copied().max().unwrap_or(0);
        Ok(Size::new(
            widest as f64 * advance,
            lines.len() as f64 * size * self.line_height_em,
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/measure.rs"]
mod tests;
