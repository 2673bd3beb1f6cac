//! Looping swipe-hint indicator.
//!
//! One cycle: jump to the start pose (2x scale at the leading edge, invisible),
//! ease in to natural scale while fading in, then slide to the trailing edge
//! while fading out. The loop's stop flag is checked only between cycles.

use kurbo::{Ellipse, Shape};

use crate::{
    animation::ease::Ease,
    catalog::mark::SwipeDirection,
    foundation::core::{Affine, BezPath, PATH_TOLERANCE, Point, Rect, Rgba8, Size, Vec2},
    surface::layer::{LayerContent, LayerId},
};

pub const INDICATOR_SIZE: Size = Size::new(40.0, 40.0);
pub const DEFAULT_MARGIN: f64 = 20.0;

const START_SCALE: f64 = 2.0;
const FADE_IN_DELAY: f64 = 0.3;
const FADE_IN_DURATION: f64 = 0.6;
const SLIDE_DURATION: f64 = 1.0;

/// Indicator pose relative to its resting frame. Scale is about the indicator center.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct HintPose {
    pub translate: Vec2,
    pub scale: f64,
    pub alpha: f64,
}

impl HintPose {
    pub fn to_affine(self, indicator: Size) -> Affine {
        let center = Vec2::new(indicator.width / 2.0, indicator.height / 2.0);
        // T(translate) * T(center) * S(scale) * T(-center)
        Affine::translate(self.translate)
            * Affine::translate(center)
            * Affine::scale(self.scale)
            * Affine::translate(-center)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct HintPhase {
    pub to: HintPose,
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
}

/// One full cycle of the hint animation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct HintSequence {
    pub direction: SwipeDirection,
    /// Resting frame of the indicator in overlay coordinates.
    #[serde(with = "crate::foundation::core::rect_xywh")]
    pub origin: Rect,
    /// Distance covered along the travel axis.
    pub travel: f64,
    /// Pose applied instantly at the top of each cycle.
    pub start: HintPose,
    /// Fade-in to natural scale.
    pub settle: HintPhase,
    /// Slide to the trailing edge while fading out.
    pub slide: HintPhase,
}

impl HintSequence {
    pub fn cycle_duration(&self) -> f64 {
        self.settle.delay + self.settle.duration + self.slide.delay + self.slide.duration
    }
}

/// Travel distance: container extent minus both margins and the indicator.
pub fn travel_distance(
    direction: SwipeDirection,
    container: Size,
    indicator: Size,
    margin: f64,
) -> f64 {
    if direction.is_horizontal() {
        container.width - margin * 2.0 - indicator.width
    } else {
        container.height - margin * 2.0 - indicator.height
    }
}

/// Resting frame: centered on the container's cross axis, `margin` in from the
/// container's start edge on the travel axis.
pub fn indicator_frame(
    direction: SwipeDirection,
    container: Rect,
    indicator: Size,
    margin: f64,
) -> Rect {
    let center = container.center();
    let origin = if direction.is_horizontal() {
        Point::new(container.x0 + margin, center.y - indicator.height / 2.0)
    } else {
        Point::new(center.x - indicator.width / 2.0, container.y0 + margin)
    };
    Rect::from_origin_size(origin, indicator)
}

/// Leading and trailing offsets along the travel axis.
fn edge_offsets(direction: SwipeDirection, travel: f64) -> (f64, f64) {
    match direction {
        SwipeDirection::Left | SwipeDirection::Up => (0.0, travel),
        SwipeDirection::Right | SwipeDirection::Down => (travel, 0.0),
    }
}

fn along_axis(direction: SwipeDirection, d: f64) -> Vec2 {
    if direction.is_horizontal() {
        Vec2::new(d, 0.0)
    } else {
        Vec2::new(0.0, d)
    }
}

pub fn build_hint_sequence(
    direction: SwipeDirection,
    container: Rect,
    indicator: Size,
    margin: f64,
) -> HintSequence {
    let travel = travel_distance(direction, container.size(), indicator, margin);
    let (leading, trailing) = edge_offsets(direction, travel);
    let leading = along_axis(direction, leading);
    let trailing = along_axis(direction, trailing);

    HintSequence {
        direction,
        origin: indicator_frame(direction, container, indicator, margin),
        travel,
        start: HintPose {
            translate: leading,
            scale: START_SCALE,
            alpha: 0.0,
        },
        settle: HintPhase {
            to: HintPose {
                translate: leading,
                scale: 1.0,
                alpha: 1.0,
            },
            duration: FADE_IN_DURATION,
            delay: FADE_IN_DELAY,
            ease: Ease::EaseIn,
        },
        slide: HintPhase {
            to: HintPose {
                translate: trailing,
                scale: 1.0,
                alpha: 0.0,
            },
            duration: SLIDE_DURATION,
            delay: 0.0,
            ease: Ease::EaseInOut,
        },
    }
}

/// Repeating hint task with a cooperative stop flag.
#[derive(Clone, Debug, PartialEq)]
pub struct HintLoop {
    sequence: HintSequence,
    stopped: bool,
    cycles: u64,
}

impl HintLoop {
    pub fn new(sequence: HintSequence) -> Self {
        Self {
            sequence,
            stopped: false,
            cycles: 0,
        }
    }

    pub fn sequence(&self) -> &HintSequence {
        &self.sequence
    }

    /// Request the loop to end; an in-flight cycle still runs to completion.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Begin another cycle unless stopped.
    pub fn next_cycle(&mut self) -> Option<HintSequence> {
        if self.stopped {
            return None;
        }
        self.cycles += 1;
        Some(self.sequence)
    }
}

/// Which part of a cycle an indicator's in-flight animation belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HintStep {
    Settle,
    Slide,
}

/// The live indicator for the current step.
#[derive(Clone, Debug, PartialEq)]
pub struct HintIndicator {
    pub layer: LayerId,
    pub size: Size,
    pub pose: HintPose,
    hint_loop: HintLoop,
    alive: bool,
}

impl HintIndicator {
    pub fn new(layer: LayerId, sequence: HintSequence, size: Size) -> Self {
        Self {
            layer,
            size,
            pose: sequence.start,
            hint_loop: HintLoop::new(sequence),
            alive: true,
        }
    }

    pub fn direction(&self) -> SwipeDirection {
        self.hint_loop.sequence().direction
    }

    pub fn sequence(&self) -> &HintSequence {
        self.hint_loop.sequence()
    }

    pub fn hint_loop(&self) -> &HintLoop {
        &self.hint_loop
    }

    pub fn hint_loop_mut(&mut self) -> &mut HintLoop {
        &mut self.hint_loop
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Stop looping and mark the indicator dead; it only awaits detachment.
    pub fn retire(&mut self) {
        self.hint_loop.stop();
        self.alive = false;
    }

    pub fn transform(&self) -> Affine {
        self.pose.to_affine(self.size)
    }

    pub fn content(&self) -> LayerContent {
        let frame = self.sequence().origin;
        LayerContent::HintIndicator {
            frame,
            shape: indicator_shape(self.size),
            fill: Rgba8::WHITE,
            glow: Rgba8::new(0, 76, 182, 255),
            glow_radius: 8.0,
        }
    }
}

/// Circle filling the indicator, in indicator-local coordinates.
pub fn indicator_shape(size: Size) -> BezPath {
    Ellipse::from_rect(Rect::from_origin_size(Point::ORIGIN, size)).to_path(PATH_TOLERANCE)
}

#[cfg(test)]
#[path = "../../tests/unit/hint/swipe.rs"]
mod tests;
