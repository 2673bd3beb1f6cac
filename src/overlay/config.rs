use crate::foundation::{
    core::Rgba8,
    error::{CoachMarkError, CoachMarkResult},
};

fn default_mask_color() -> Rgba8 {
    Rgba8::BLACK.with_alpha(0.8)
}

fn default_cutout_corner_radius() -> f64 {
    2.0
}

fn default_max_caption_width() -> f64 {
    230.0
}

fn default_label_spacing() -> f64 {
    35.0
}

fn default_use_bubbles() -> bool {
    true
}

fn default_animation_duration() -> f64 {
    0.3
}

fn default_bubble_color() -> Rgba8 {
    Rgba8::WHITE
}

/// Overlay appearance and timing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverlayConfig {
    /// Scrim color around the cutout.
    #[serde(default = "default_mask_color")]
    pub mask_color: Rgba8,
    /// Corner radius for [`crate::MarkShape::Other`] cutouts.
    #[serde(default = "default_cutout_corner_radius")]
    pub cutout_corner_radius: f64,
    /// Wrap width of plain caption labels.
    #[serde(default = "default_max_caption_width")]
    pub max_caption_width: f64,
    /// Gap between a plain caption label and the cutout.
    #[serde(default = "default_label_spacing")]
    pub label_spacing: f64,
    /// Bubbles when true, plain caption labels otherwise.
    #[serde(default = "default_use_bubbles")]
    pub use_bubbles: bool,
    /// Seconds for the overlay fade-in and each cutout morph.
    #[serde(default = "default_animation_duration")]
    pub animation_duration: f64,
    #[serde(default = "default_bubble_color")]
    pub bubble_color: Rgba8,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            mask_color: default_mask_color(),
            cutout_corner_radius: default_cutout_corner_radius(),
            max_caption_width: default_max_caption_width(),
            label_spacing: default_label_spacing(),
            use_bubbles: default_use_bubbles(),
            animation_duration: default_animation_duration(),
            bubble_color: default_bubble_color(),
        }
    }
}

impl OverlayConfig {
    pub fn validate(&self) -> CoachMarkResult<()> {
        for (name, value) in [
            ("cutout_corner_radius", self.cutout_corner_radius),
            ("max_caption_width", self.max_caption_width),
            ("label_spacing", self.label_spacing),
            ("animation_duration", self.animation_duration),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CoachMarkError::configuration(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/config.rs"]
mod tests;
