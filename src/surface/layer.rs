use std::collections::BTreeMap;

use crate::{
    foundation::core::{Affine, BezPath, FillRule, Rect, Rgba8},
    text::measure::TextStyle,
};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct LayerId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub enum LayerKind {
    Overlay,
    Mask,
    Bubble,
    Label,
    HintIndicator,
}

/// What a layer draws. Geometry of child layers is in overlay coordinates;
/// paths inside a bubble are local to the bubble's frame.
#[derive(Clone, Debug, PartialEq)]
pub enum LayerContent {
    Overlay {
        bounds: Rect,
    },
    Mask {
        path: BezPath,
        fill: Rgba8,
        fill_rule: FillRule,
    },
    Bubble {
        frame: Rect,
        body: BezPath,
        arrow: BezPath,
        fill: Rgba8,
        text: String,
        text_frame: Rect,
        text_color: Rgba8,
        style: TextStyle,
    },
    Label {
        frame: Rect,
        text: String,
        text_color: Rgba8,
        style: TextStyle,
    },
    HintIndicator {
        frame: Rect,
        shape: BezPath,
        fill: Rgba8,
        glow: Rgba8,
        glow_radius: f64,
    },
}

impl LayerContent {
    pub fn kind(&self) -> LayerKind {
        match self {
            Self::Overlay { .. } => LayerKind::Overlay,
            Self::Mask { .. } => LayerKind::Mask,
            Self::Bubble { .. } => LayerKind::Bubble,
            Self::Label { .. } => LayerKind::Label,
            Self::HintIndicator { .. } => LayerKind::HintIndicator,
        }
    }
}

/// Host rendering surface: accepts layered children with opacity, transform,
/// and a shape mask whose path can be replaced.
pub trait RenderSurface {
    fn attach(&mut self, parent: Option<LayerId>, layer: LayerId, content: LayerContent);
    fn detach(&mut self, layer: LayerId);
    fn set_opacity(&mut self, layer: LayerId, opacity: f64);
    fn set_transform(&mut self, layer: LayerId, transform: Affine);
    fn set_mask_path(&mut self, layer: LayerId, path: &BezPath);
}

/// One call made against a [`RecordingSurface`], in a serializable form.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SurfaceOp {
    Attach {
        layer: LayerId,
        parent: Option<LayerId>,
        kind: LayerKind,
    },
    Detach {
        layer: LayerId,
    },
    Opacity {
        layer: LayerId,
        value: f64,
    },
    Transform {
        layer: LayerId,
        coeffs: [f64; 6],
    },
    MaskPath {
        layer: LayerId,
        svg: String,
    },
}

#[derive(Clone, Debug)]
pub struct LayerState {
    pub parent: Option<LayerId>,
    pub content: LayerContent,
    pub opacity: f64,
    pub transform: Affine,
}

/// In-memory surface that keeps the live layer tree and a log of every call.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    layers: BTreeMap<LayerId, LayerState>,
    ops: Vec<SurfaceOp>,
    peak: BTreeMap<LayerKind, usize>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    pub fn layer(&self, id: LayerId) -> Option<&LayerState> {
        self.layers.get(&id)
    }

    pub fn is_attached(&self, id: LayerId) -> bool {
        self.layers.contains_key(&id)
    }

    pub fn attached_of_kind(&self, kind: LayerKind) -> Vec<LayerId> {
        self.layers
            .iter()
            .filter(|(_, s)| s.content.kind() == kind)
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn attached_count(&self) -> usize {
        self.layers.len()
    }

    /// Highest number of simultaneously attached layers of `kind` seen so far.
    pub fn peak_attached(&self, kind: LayerKind) -> usize {
        self.peak.get(&kind).copied().unwrap_or(0)
    }
}

impl RenderSurface for RecordingSurface {
    fn attach(&mut self, parent: Option<LayerId>, layer: LayerId, content: LayerContent) {
        let kind = content.kind();
        self.ops.push(SurfaceOp::Attach {
            layer,
            parent,
            kind,
        });
        self.layers.insert(
            layer,
            LayerState {
                parent,
                content,
                opacity: 1.0,
                transform: Affine::IDENTITY,
            },
        );
        let live = self
            .layers
            .values()
            .filter(|s| s.content.kind() == kind)
            .count();
        let peak = self.peak.entry(kind).or_insert(0);
        *peak = (*peak).max(live);
    }

    fn detach(&mut self, layer: LayerId) {
        self.ops.push(SurfaceOp::Detach { layer });
        self.layers.remove(&layer);
    }

    fn set_opacity(&mut self, layer: LayerId, opacity: f64) {
        self.ops.push(SurfaceOp::Opacity {
            layer,
            value: opacity,
        });
        if let Some(state) = self.layers.get_mut(&layer) {
            state.opacity = opacity;
        }
    }

    fn set_transform(&mut self, layer: LayerId, transform: Affine) {
        self.ops.push(SurfaceOp::Transform {
            layer,
            coeffs: transform.as_coeffs(),
        });
        if let Some(state) = self.layers.get_mut(&layer) {
            state.transform = transform;
        }
    }

    fn set_mask_path(&mut self, layer: LayerId, path: &BezPath) {
        self.ops.push(SurfaceOp::MaskPath {
            layer,
            svg: path.to_svg(),
        });
        if let Some(LayerState {
            content: LayerContent::Mask { path: current, .. },
            ..
        }) = self.layers.get_mut(&layer)
        {
            *current = path.clone();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/layer.rs"]
mod tests;
