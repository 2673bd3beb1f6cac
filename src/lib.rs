//! Coachmarks is a headless engine for guided-tour overlays.
//!
//! An overlay dims the host UI, punches a cutout around one target at a time,
//! points a caption bubble at it and can loop a swipe hint over it. The engine
//! never draws: it talks to the host through three capabilities.
//!
//! - [`RenderSurface`] accepts layers with opacity, transform and a mask path.
//! - [`Scheduler`] runs animations and hands back an [`AnimationId`]; the host
//!   reports completion with [`OverlayController::animation_finished`].
//! - [`TextMeasurer`] wraps caption text to a width.
//!
//! # Pipeline overview
//!
//! 1. **Catalog**: a [`MarkCatalog`] of [`CoachMark`]s, built in code or loaded
//!    from a [`Tour`] JSON document.
//! 2. **Place**: per step, [`compute_bubble_frame`] sizes and positions the
//!    caption bubble; [`cutout_mask_path`] builds the scrim with its hole;
//!    [`build_hint_sequence`] lays out the swipe hint.
//! 3. **Drive**: [`OverlayController`] sequences the fades, cutout morphs and
//!    hint loops, and reports progress to an [`OverlayObserver`].
//!
//! For tests and the bundled CLI, [`ManualScheduler`], [`RecordingSurface`] and
//! [`FixedAdvanceMeasurer`] provide a fully deterministic host.
#![forbid(unsafe_code)]

mod animation;
mod catalog;
mod foundation;
mod geometry;
mod hint;
mod overlay;
mod surface;
mod text;

pub use animation::ease::Ease;
pub use animation::scheduler::{
    AnimationId, AnimationRequest, Effect, ManualScheduler, Repeat, ScheduledAnimation, Scheduler,
    Timing,
};
pub use catalog::mark::{CoachMark, MarkCatalog, MarkCatalogBuilder, MarkShape, SwipeDirection};
pub use foundation::core::{
    Affine, BezPath, FillRule, Point, Rect, Rgba8, Size, Vec2, rect_xywh, size_wh,
};
pub use foundation::error::{CoachMarkError, CoachMarkResult};
pub use geometry::bubble::{
    ArrowPosition, Bubble, BubbleMetrics, BubblePlacement, arrow_path, arrow_tip, body_path,
    bubble_body_size, calculate_frame, compute_bubble_frame, fix_frame_if_out_of_bounds,
    text_frame,
};
pub use geometry::cutout::{MASK_FILL_RULE, collapsed_cutout, cutout_mask_path, cutout_shape_path};
pub use geometry::label::{CaptionLabel, caption_label_frame};
pub use hint::swipe::{
    DEFAULT_MARGIN, HintIndicator, HintLoop, HintPhase, HintPose, HintSequence, HintStep,
    INDICATOR_SIZE, build_hint_sequence, indicator_frame, indicator_shape, travel_distance,
};
pub use overlay::config::OverlayConfig;
pub use overlay::controller::{
    CaptionKind, CaptionView, InputEvent, OverlayController, OverlayState,
};
pub use overlay::observer::{EventLog, OverlayEvent, OverlayObserver};
pub use overlay::tour::Tour;
pub use surface::layer::{
    LayerContent, LayerId, LayerKind, LayerState, RecordingSurface, RenderSurface, SurfaceOp,
};
pub use text::measure::{FixedAdvanceMeasurer, ParleyMeasurer, TextMeasurer, TextStyle};
