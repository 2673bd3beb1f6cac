use crate::{
    animation::ease::Ease,
    foundation::core::{Affine, BezPath},
    surface::layer::LayerId,
};

/// Handle for a scheduled animation; completion is reported back with the same id.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct AnimationId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Repeat {
    Once,
    /// Loops until stopped; never reports completion.
    Forever { autoreverse: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timing {
    pub duration: f64, // seconds
    pub delay: f64,    // seconds
    pub ease: Ease,
    pub repeat: Repeat,
}

impl Timing {
    pub fn new(duration: f64, ease: Ease) -> Self {
        Self {
            duration,
            delay: 0.0,
            ease,
            repeat: Repeat::Once,
        }
    }

    pub fn delayed(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn forever(mut self, autoreverse: bool) -> Self {
        self.repeat = Repeat::Forever { autoreverse };
        self
    }

    /// Delay plus duration, or `None` for a looping animation.
    pub fn total(&self) -> Option<f64> {
        match self.repeat {
            Repeat::Once => Some(self.delay.max(0.0) + self.duration.max(0.0)),
            Repeat::Forever { .. } => None,
        }
    }

    /// Eased progress in `0..=1`, `elapsed` seconds after the request was issued.
    /// Stays at 0 through the delay; looping timings report their first pass.
    pub fn progress(&self, elapsed: f64) -> f64 {
        let t = elapsed - self.delay.max(0.0);
        if t <= 0.0 {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return 1.0;
        }
        self.ease.apply(t / self.duration)
    }
}

/// Presentation change the host interpolates over the animation's timing.
///
/// The controller writes the end value of every finite animation to the surface
/// before scheduling it, so a host that skips those still converges on the right
/// state. Looping effects (the caption bounce) leave the model at `from`.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Opacity {
        from: f64,
        to: f64,
    },
    /// Morph of the cutout mask from one mask path to the next.
    MaskPath {
        from: BezPath,
        to: BezPath,
    },
    Transform {
        from: Affine,
        to: Affine,
    },
    /// Transform and opacity animated together on one layer.
    Pose {
        from: Affine,
        to: Affine,
        from_opacity: f64,
        to_opacity: f64,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimationRequest {
    pub layer: LayerId,
    pub timing: Timing,
    pub effect: Effect,
}

/// Animation engine capability: "run effect over duration, report completion".
///
/// Completion is delivered by the host calling
/// [`crate::OverlayController::animation_finished`] with the returned id on the
/// same thread that issued the request.
pub trait Scheduler {
    /// Current time in seconds on the clock animations are issued against.
    fn now(&self) -> f64;

    fn animate(&mut self, request: AnimationRequest) -> AnimationId;

    /// Drop a looping animation; no completion is reported for it.
    fn stop(&mut self, id: AnimationId);
}

#[derive(Clone, Debug)]
pub struct ScheduledAnimation {
    pub id: AnimationId,
    pub issued_at: f64,
    pub request: AnimationRequest,
}

/// Deterministic virtual-clock scheduler.
///
/// Nothing is interpolated; the scheduler only tracks when each request would
/// finish so that completions can be replayed in time order.
///
/// Every request is kept in [`ManualScheduler::history`], so memory grows with
/// each hint cycle and [`ManualScheduler::request`] is a linear scan. Meant for
/// tests and bounded simulations, not long-running hosts.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: f64,
    next_id: u64,
    in_flight: Vec<(f64, AnimationId)>,
    looping: Vec<AnimationId>,
    history: Vec<ScheduledAnimation>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    /// Every request ever issued, in issue order.
    pub fn history(&self) -> &[ScheduledAnimation] {
        &self.history
    }

    pub fn request(&self, id: AnimationId) -> Option<&AnimationRequest> {
        self.history
            .iter()
            .find(|s| s.id == id)
            .map(|s| &s.request)
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn looping(&self) -> &[AnimationId] {
        &self.looping
    }

    pub fn next_completion_at(&self) -> Option<f64> {
        self.in_flight
            .iter()
            .map(|(t, _)| *t)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Pop the earliest animation finishing at or before `deadline`, moving the
    /// clock to its finish time. Ties resolve in issue order.
    pub fn pop_due(&mut self, deadline: f64) -> Option<AnimationId> {
        let (pos, &(at, id)) = self
            .in_flight
            .iter()
            .enumerate()
            .filter(|(_, (t, _))| *t <= deadline)
            .min_by(|(_, a), (_, b)| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))?;
        self.in_flight.remove(pos);
        self.now = self.now.max(at);
        Some(id)
    }

    pub fn advance_clock(&mut self, to: f64) {
        self.now = self.now.max(to);
    }
}

impl Scheduler for ManualScheduler {
    fn now(&self) -> f64 {
        self.now
    }

    fn animate(&mut self, request: AnimationRequest) -> AnimationId {
        let id = AnimationId(self.next_id);
        self.next_id += 1;
        match request.timing.total() {
            Some(total) => self.in_flight.push((self.now + total, id)),
            None => self.looping.push(id),
        }
        self.history.push(ScheduledAnimation {
            id,
            issued_at: self.now,
            request,
        });
        id
    }

    fn stop(&mut self, id: AnimationId) {
        self.looping.retain(|l| *l != id);
        self.in_flight.retain(|(_, l)| *l != id);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scheduler.rs"]
mod tests;
