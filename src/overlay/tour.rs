use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    catalog::mark::{CoachMark, MarkCatalog},
    foundation::core::{Rect, Size, size_wh},
    foundation::error::{CoachMarkError, CoachMarkResult},
    overlay::config::OverlayConfig,
};

/// A tour document: overlay bounds, configuration and the ordered marks.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tour {
    #[serde(with = "size_wh")]
    pub bounds: Size,
    #[serde(default)]
    pub config: OverlayConfig,
    pub marks: Vec<CoachMark>,
}

impl Tour {
    /// Parse a tour from JSON text.
    pub fn from_json_str(s: &str) -> CoachMarkResult<Self> {
        serde_json::from_str(s).map_err(|e| CoachMarkError::serde(format!("parse tour JSON: {e}")))
    }

    pub fn from_reader<R: std::io::Read>(r: R) -> CoachMarkResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| CoachMarkError::serde(format!("parse tour JSON: {e}")))
    }

    /// Parse a tour from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CoachMarkResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CoachMarkError::Other(anyhow::anyhow!(
                "open tour JSON '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> CoachMarkResult<()> {
        if !(self.bounds.width.is_finite() && self.bounds.height.is_finite())
            || self.bounds.width <= 0.0
            || self.bounds.height <= 0.0
        {
            return Err(CoachMarkError::validation(
                "tour bounds must be finite and > 0",
            ));
        }
        self.config.validate()?;
        for (idx, mark) in self.marks.iter().enumerate() {
            mark.validate()
                .map_err(|e| CoachMarkError::validation(format!("mark {idx}: {e}")))?;
        }
        Ok(())
    }

    /// Validated catalog built from the tour's marks.
    pub fn catalog(&self) -> CoachMarkResult<MarkCatalog> {
        MarkCatalog::new(self.marks.clone())
    }

    pub fn bounds_rect(&self) -> Rect {
        Rect::from_origin_size((0.0, 0.0), self.bounds)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/tour.rs"]
mod tests;
