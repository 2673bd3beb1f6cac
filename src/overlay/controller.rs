//! Step navigation state machine.
//!
//! The controller owns the overlay and mask layers plus at most one caption and
//! one hint indicator. Every finite visual change is written to the surface as its end
//! value and handed to the scheduler as an animation; follow-up work runs when
//! the host reports the animation finished via [`OverlayController::animation_finished`].

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    animation::{
        ease::Ease,
        scheduler::{AnimationId, AnimationRequest, Effect, ManualScheduler, Scheduler, Timing},
    },
    catalog::mark::{CoachMark, MarkCatalog, MarkShape, SwipeDirection},
    foundation::{
        core::{Affine, BezPath, Rect, Rgba8, Size, validate_rect},
        error::{CoachMarkError, CoachMarkResult},
    },
    geometry::{
        bubble::{ArrowPosition, Bubble, BubbleMetrics},
        cutout::{MASK_FILL_RULE, collapsed_cutout, cutout_mask_path},
        label::CaptionLabel,
    },
    hint::swipe::{
        DEFAULT_MARGIN, HintIndicator, HintStep, INDICATOR_SIZE, build_hint_sequence,
    },
    overlay::{config::OverlayConfig, observer::OverlayObserver},
    surface::layer::{LayerContent, LayerId, RenderSurface},
    text::measure::TextMeasurer,
};

const CAPTION_FADE_OUT: f64 = 0.3;
const CAPTION_FADE_IN: f64 = 0.8;
const CAPTION_FADE_IN_DELAY: f64 = 0.3;
const BOUNCE_DURATION: f64 = 2.0;
const BOUNCE_DELAY: f64 = 0.3;
const HINT_FADE_OUT: f64 = 0.6;
const CLEANUP_FADE: f64 = 0.6;
const CLEANUP_DELAY: f64 = 0.3;

const OVERLAY_LAYER: LayerId = LayerId(0);
const MASK_LAYER: LayerId = LayerId(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum OverlayState {
    Idle,
    /// Overlay fading in; the first mark is shown when the fade finishes.
    FadingIn,
    Active(usize),
    /// Terminal. Cleanup has been started.
    Completed,
}

/// Discrete user input delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum InputEvent {
    Tap,
    /// Horizontal swipes advance like a tap; vertical swipes are ignored.
    Swipe(SwipeDirection),
}

#[derive(Clone, Debug, PartialEq)]
pub enum CaptionKind {
    Bubble(Bubble),
    Label(CaptionLabel),
}

/// A caption owned by the controller together with its layer.
#[derive(Clone, Debug, PartialEq)]
pub struct CaptionView {
    pub layer: LayerId,
    pub kind: CaptionKind,
    bounce: Option<AnimationId>,
}

impl CaptionView {
    pub fn bubble(&self) -> Option<&Bubble> {
        match &self.kind {
            CaptionKind::Bubble(b) => Some(b),
            CaptionKind::Label(_) => None,
        }
    }

    pub fn frame(&self) -> Rect {
        match &self.kind {
            CaptionKind::Bubble(b) => b.frame(),
            CaptionKind::Label(l) => l.frame,
        }
    }

    pub fn content(&self) -> LayerContent {
        match &self.kind {
            CaptionKind::Bubble(b) => LayerContent::Bubble {
                frame: b.frame(),
                body: b.body_path(),
                arrow: b.arrow_path(),
                fill: b.fill,
                text: b.title.clone(),
                text_frame: b.text_frame(),
                text_color: b.text_color,
                style: b.style.clone(),
            },
            CaptionKind::Label(l) => LayerContent::Label {
                frame: l.frame,
                text: l.text.clone(),
                text_color: Rgba8::WHITE,
                style: l.style.clone(),
            },
        }
    }
}

/// Ownership slot for a replaceable child. A replacement is attached only after
/// the outgoing child's fade-out finishes, so at most one is ever attached.
#[derive(Debug, Default)]
enum Slot<T> {
    #[default]
    Empty,
    Active(T),
    Retiring {
        outgoing: T,
        fade: AnimationId,
        incoming: Option<T>,
    },
}

impl<T> Slot<T> {
    fn active(&self) -> Option<&T> {
        match self {
            Self::Active(v) => Some(v),
            _ => None,
        }
    }
}

/// Last opacity change issued for a layer, sampled against the scheduler clock
/// to find what is on screen while the change is still running.
#[derive(Clone, Copy, Debug, PartialEq)]
struct OpacityTrack {
    from: f64,
    to: f64,
    issued_at: f64,
    timing: Timing,
}

impl OpacityTrack {
    fn fixed(value: f64) -> Self {
        Self {
            from: value,
            to: value,
            issued_at: 0.0,
            timing: Timing::new(0.0, Ease::Linear),
        }
    }

    fn sample(&self, now: f64) -> f64 {
        self.from + (self.to - self.from) * self.timing.progress(now - self.issued_at)
    }
}

/// Work to run when an animation finishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Continuation {
    StartNavigation,
    CutoutMorph { index: usize },
    CaptionRetired,
    HintRetired,
    HintPhase { layer: LayerId, step: HintStep },
    CleanupFinished,
    Passive,
}

/// Coach-mark overlay driven by taps over a fixed catalog.
pub struct OverlayController<S: RenderSurface, A: Scheduler> {
    catalog: MarkCatalog,
    bounds: Rect,
    config: OverlayConfig,
    surface: S,
    scheduler: A,
    measurer: Box<dyn TextMeasurer>,
    observer: Option<Box<dyn OverlayObserver>>,
    state: OverlayState,
    index: Option<usize>,
    mask_path: BezPath,
    caption: Slot<CaptionView>,
    hint: Slot<HintIndicator>,
    pending: BTreeMap<AnimationId, Continuation>,
    opacity: BTreeMap<LayerId, OpacityTrack>,
    attached: BTreeSet<LayerId>,
    next_layer: u64,
    cleanup_started: bool,
}

impl<S: RenderSurface, A: Scheduler> OverlayController<S, A> {
    /// Attach the (transparent) overlay and its mask to `surface`.
    pub fn new(
        catalog: MarkCatalog,
        bounds: Size,
        config: OverlayConfig,
        surface: S,
        scheduler: A,
        measurer: Box<dyn TextMeasurer>,
    ) -> CoachMarkResult<Self> {
        config.validate()?;
        let bounds = Rect::from_origin_size((0.0, 0.0), bounds);
        validate_rect(bounds, "overlay bounds")?;
        if bounds.is_zero_area() {
            return Err(CoachMarkError::validation("overlay bounds must not be empty"));
        }

        let mask_path = cutout_mask_path(bounds, collapsed_cutout(bounds), MarkShape::Square, 0.0);
        let mut this = Self {
            catalog,
            bounds,
            config,
            surface,
            scheduler,
            measurer,
            observer: None,
            state: OverlayState::Idle,
            index: None,
            mask_path,
            caption: Slot::Empty,
            hint: Slot::Empty,
            pending: BTreeMap::new(),
            opacity: BTreeMap::new(),
            attached: BTreeSet::new(),
            next_layer: MASK_LAYER.0 + 1,
            cleanup_started: false,
        };

        this.attach(None, OVERLAY_LAYER, LayerContent::Overlay { bounds });
        this.set_opacity(OVERLAY_LAYER, 0.0);
        this.attach(
            Some(OVERLAY_LAYER),
            MASK_LAYER,
            LayerContent::Mask {
                path: this.mask_path.clone(),
                fill: this.config.mask_color,
                fill_rule: MASK_FILL_RULE,
            },
        );
        Ok(this)
    }

    pub fn set_observer(&mut self, observer: impl OverlayObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// Last index navigated to; may equal the catalog count once completed.
    pub fn current_index(&self) -> Option<usize> {
        self.index
    }

    pub fn catalog(&self) -> &MarkCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &A {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut A {
        &mut self.scheduler
    }

    /// Model value of the mask path (the end state of any morph in flight).
    pub fn mask_path(&self) -> &BezPath {
        &self.mask_path
    }

    pub fn overlay_layer(&self) -> LayerId {
        OVERLAY_LAYER
    }

    pub fn mask_layer(&self) -> LayerId {
        MASK_LAYER
    }

    /// The attached caption, if any. A retiring caption is not reported.
    pub fn caption(&self) -> Option<&CaptionView> {
        self.caption.active()
    }

    pub fn bubble(&self) -> Option<&Bubble> {
        self.caption().and_then(CaptionView::bubble)
    }

    pub fn hint(&self) -> Option<&HintIndicator> {
        self.hint.active()
    }

    pub fn is_attached(&self, layer: LayerId) -> bool {
        self.attached.contains(&layer)
    }

    /// Opacity `layer` is presenting right now, partway through any fade in
    /// flight. Layers with no opacity change on record present fully opaque.
    pub fn presented_opacity(&self, layer: LayerId) -> f64 {
        self.opacity
            .get(&layer)
            .map_or(1.0, |track| track.sample(self.scheduler.now()))
    }

    /// Fade the overlay in, then show the first mark.
    ///
    /// An empty catalog completes immediately.
    #[tracing::instrument(skip(self))]
    pub fn start(&mut self) -> CoachMarkResult<()> {
        if self.state != OverlayState::Idle {
            return Err(CoachMarkError::configuration(format!(
                "start called in state {:?}",
                self.state
            )));
        }
        if self.catalog.is_empty() {
            tracing::debug!("empty catalog, completing immediately");
            self.cleanup();
            return Ok(());
        }

        self.state = OverlayState::FadingIn;
        let timing = Timing::new(self.config.animation_duration, Ease::EaseInOut);
        self.track_opacity(OVERLAY_LAYER, 0.0, 1.0, timing);
        let id = self.scheduler.animate(AnimationRequest {
            layer: OVERLAY_LAYER,
            timing,
            effect: Effect::Opacity { from: 0.0, to: 1.0 },
        });
        self.pending.insert(id, Continuation::StartNavigation);
        Ok(())
    }

    /// Show mark `index`, or complete the tour when `index` is past the last mark.
    ///
    /// Completion is idempotent; once completed further calls do nothing.
    #[tracing::instrument(skip(self))]
    pub fn navigate_to_coach_mark(&mut self, index: usize) -> CoachMarkResult<()> {
        if self.state == OverlayState::Completed {
            tracing::debug!("overlay already completed");
            return Ok(());
        }
        if index >= self.catalog.count() {
            self.index = Some(index);
            self.cleanup();
            return Ok(());
        }

        let mark = self.catalog.at(index)?.clone();
        // Measure before touching any state so a measurement failure leaves the step as it was.
        let caption = self.build_caption(&mark)?;

        self.state = OverlayState::Active(index);
        self.index = Some(index);
        self.notify(|o| o.will_navigate(index));

        self.replace_caption(caption);
        self.morph_cutout(index, &mark);

        let hint = if mark.swipe_enabled {
            let sequence = build_hint_sequence(
                mark.swipe_direction,
                mark.rect,
                INDICATOR_SIZE,
                DEFAULT_MARGIN,
            );
            Some(HintIndicator::new(self.alloc_layer(), sequence, INDICATOR_SIZE))
        } else {
            None
        };
        self.replace_hint(hint);
        Ok(())
    }

    pub fn handle_input(&mut self, event: InputEvent) -> CoachMarkResult<()> {
        match event {
            InputEvent::Tap => self.tap(),
            InputEvent::Swipe(direction) if direction.is_horizontal() => self.tap(),
            InputEvent::Swipe(direction) => {
                tracing::debug!(?direction, "vertical swipe ignored");
                Ok(())
            }
        }
    }

    /// Report the tap for the current mark and advance to the next one.
    pub fn tap(&mut self) -> CoachMarkResult<()> {
        let OverlayState::Active(index) = self.state else {
            tracing::warn!(state = ?self.state, "tap ignored");
            return Ok(());
        };
        self.notify(|o| o.did_tap(index));
        self.navigate_to_coach_mark(index + 1)
    }

    /// Fade everything out and detach it. Runs at most once.
    ///
    /// `did_cleanup` is reported as soon as the fade is issued, before the
    /// layers are detached. An overlay that is not visible yet (cleanup from
    /// `Idle`) is detached right after `did_cleanup` without a fade.
    #[tracing::instrument(skip(self))]
    pub fn cleanup(&mut self) {
        if self.cleanup_started {
            return;
        }
        self.cleanup_started = true;
        self.state = OverlayState::Completed;
        self.notify(|o| o.will_cleanup());

        if self.presented_opacity(OVERLAY_LAYER) <= 0.0 {
            tracing::debug!("overlay not visible, detaching without fade");
            self.notify(|o| o.did_cleanup());
            self.finish_cleanup();
            return;
        }

        let timing = Timing::new(CLEANUP_FADE, Ease::EaseIn).delayed(CLEANUP_DELAY);
        self.fade_out(OVERLAY_LAYER, timing, Continuation::CleanupFinished);

        match std::mem::take(&mut self.caption) {
            Slot::Active(view) => {
                self.fade_out(view.layer, timing, Continuation::Passive);
                self.caption = Slot::Active(view);
            }
            Slot::Retiring { outgoing, fade, .. } => {
                self.caption = Slot::Retiring {
                    outgoing,
                    fade,
                    incoming: None,
                };
            }
            Slot::Empty => {}
        }

        match std::mem::take(&mut self.hint) {
            Slot::Active(mut hint) => {
                hint.retire();
                self.fade_out(hint.layer, timing, Continuation::Passive);
                self.hint = Slot::Active(hint);
            }
            Slot::Retiring { outgoing, fade, .. } => {
                self.hint = Slot::Retiring {
                    outgoing,
                    fade,
                    incoming: None,
                };
            }
            Slot::Empty => {}
        }

        self.notify(|o| o.did_cleanup());
    }

    /// Host callback: the animation `id` has finished.
    pub fn animation_finished(&mut self, id: AnimationId) -> CoachMarkResult<()> {
        let Some(continuation) = self.pending.remove(&id) else {
            tracing::warn!(?id, "completion for unknown animation");
            return Ok(());
        };

        match continuation {
            Continuation::StartNavigation => {
                if self.state == OverlayState::FadingIn {
                    self.navigate_to_coach_mark(0)?;
                }
            }
            Continuation::CutoutMorph { index } => self.notify(|o| o.did_navigate(index)),
            Continuation::CaptionRetired => self.caption_retired(id),
            Continuation::HintRetired => self.hint_retired(id),
            Continuation::HintPhase { layer, step } => self.advance_hint(layer, Some(step)),
            Continuation::CleanupFinished => self.finish_cleanup(),
            Continuation::Passive => {}
        }
        Ok(())
    }

    fn notify(&mut self, f: impl FnOnce(&mut dyn OverlayObserver)) {
        if let Some(observer) = self.observer.as_deref_mut() {
            f(observer);
        }
    }

    fn alloc_layer(&mut self) -> LayerId {
        let id = LayerId(self.next_layer);
        self.next_layer += 1;
        id
    }

    fn attach(&mut self, parent: Option<LayerId>, layer: LayerId, content: LayerContent) {
        self.surface.attach(parent, layer, content);
        self.attached.insert(layer);
    }

    fn detach(&mut self, layer: LayerId) {
        self.opacity.remove(&layer);
        if self.attached.remove(&layer) {
            self.surface.detach(layer);
        }
    }

    fn set_opacity(&mut self, layer: LayerId, value: f64) {
        self.surface.set_opacity(layer, value);
        self.opacity.insert(layer, OpacityTrack::fixed(value));
    }

    /// Write the end value and remember the change so a later fade can start
    /// from whatever is presented at that moment.
    fn track_opacity(&mut self, layer: LayerId, from: f64, to: f64, timing: Timing) {
        self.surface.set_opacity(layer, to);
        let issued_at = self.scheduler.now();
        self.opacity.insert(
            layer,
            OpacityTrack {
                from,
                to,
                issued_at,
                timing,
            },
        );
    }

    /// Fade `layer` to transparent from its presented opacity.
    fn fade_out(&mut self, layer: LayerId, timing: Timing, then: Continuation) -> AnimationId {
        let from = self.presented_opacity(layer);
        self.track_opacity(layer, from, 0.0, timing);
        let id = self.scheduler.animate(AnimationRequest {
            layer,
            timing,
            effect: Effect::Opacity { from, to: 0.0 },
        });
        self.pending.insert(id, then);
        id
    }

    fn build_caption(&mut self, mark: &CoachMark) -> CoachMarkResult<Option<CaptionView>> {
        if !mark.has_caption() {
            return Ok(None);
        }
        let kind = if self.config.use_bubbles {
            CaptionKind::Bubble(Bubble::new(
                self.measurer.as_mut(),
                mark.anchor_rect(),
                mark.caption.clone(),
                mark.font.clone(),
                ArrowPosition::Top,
                self.bounds.size(),
                BubbleMetrics::default(),
                self.config.bubble_color,
            )?)
        } else {
            CaptionKind::Label(CaptionLabel::new(
                self.measurer.as_mut(),
                mark.rect,
                mark.caption.clone(),
                mark.font.clone(),
                self.bounds.size(),
                self.config.max_caption_width,
                self.config.label_spacing,
            )?)
        };
        Ok(Some(CaptionView {
            layer: self.alloc_layer(),
            kind,
            bounce: None,
        }))
    }

    fn replace_caption(&mut self, next: Option<CaptionView>) {
        match std::mem::take(&mut self.caption) {
            Slot::Empty => {
                if let Some(view) = next {
                    self.install_caption(view);
                }
            }
            Slot::Active(outgoing) => {
                let timing = Timing::new(CAPTION_FADE_OUT, Ease::EaseIn);
                let fade = self.fade_out(outgoing.layer, timing, Continuation::CaptionRetired);
                self.caption = Slot::Retiring {
                    outgoing,
                    fade,
                    incoming: next,
                };
            }
            Slot::Retiring { outgoing, fade, .. } => {
                self.caption = Slot::Retiring {
                    outgoing,
                    fade,
                    incoming: next,
                };
            }
        }
    }

    fn install_caption(&mut self, mut view: CaptionView) {
        let layer = view.layer;
        self.attach(Some(OVERLAY_LAYER), layer, view.content());
        let timing = Timing::new(CAPTION_FADE_IN, Ease::EaseIn).delayed(CAPTION_FADE_IN_DELAY);
        self.track_opacity(layer, 0.0, 1.0, timing);
        let id = self.scheduler.animate(AnimationRequest {
            layer,
            timing,
            effect: Effect::Opacity { from: 0.0, to: 1.0 },
        });
        self.pending.insert(id, Continuation::Passive);

        if let Some(bubble) = view.bubble() {
            let bounce = self.scheduler.animate(AnimationRequest {
                layer,
                timing: Timing::new(BOUNCE_DURATION, Ease::EaseInOut)
                    .delayed(BOUNCE_DELAY)
                    .forever(true),
                effect: Effect::Transform {
                    from: Affine::IDENTITY,
                    to: bubble.bounce_transform(),
                },
            });
            view.bounce = Some(bounce);
        }
        self.caption = Slot::Active(view);
    }

    fn retire_caption_view(&mut self, view: CaptionView) {
        if let Some(bounce) = view.bounce {
            self.scheduler.stop(bounce);
        }
        self.detach(view.layer);
    }

    fn caption_retired(&mut self, id: AnimationId) {
        match std::mem::take(&mut self.caption) {
            Slot::Retiring {
                outgoing,
                fade,
                incoming,
            } if fade == id => {
                self.retire_caption_view(outgoing);
                if let Some(view) = incoming {
                    self.install_caption(view);
                }
            }
            other => {
                tracing::debug!(?id, "stale caption fade-out");
                self.caption = other;
            }
        }
    }

    fn morph_cutout(&mut self, index: usize, mark: &CoachMark) {
        let radius = self.config.cutout_corner_radius;
        if index == 0 {
            let seed = cutout_mask_path(self.bounds, collapsed_cutout(mark.rect), mark.shape, radius);
            self.surface.set_mask_path(MASK_LAYER, &seed);
            self.mask_path = seed;
        }
        let target = cutout_mask_path(self.bounds, mark.rect, mark.shape, radius);
        self.surface.set_mask_path(MASK_LAYER, &target);
        let from = std::mem::replace(&mut self.mask_path, target.clone());
        let id = self.scheduler.animate(AnimationRequest {
            layer: MASK_LAYER,
            timing: Timing::new(self.config.animation_duration, Ease::EaseOut),
            effect: Effect::MaskPath { from, to: target },
        });
        self.pending.insert(id, Continuation::CutoutMorph { index });
    }

    fn replace_hint(&mut self, next: Option<HintIndicator>) {
        match std::mem::take(&mut self.hint) {
            Slot::Empty => {
                if let Some(hint) = next {
                    self.install_hint(hint);
                }
            }
            Slot::Active(mut outgoing) => {
                outgoing.retire();
                let timing = Timing::new(HINT_FADE_OUT, Ease::EaseIn);
                let fade = self.fade_out(outgoing.layer, timing, Continuation::HintRetired);
                self.hint = Slot::Retiring {
                    outgoing,
                    fade,
                    incoming: next,
                };
            }
            Slot::Retiring { outgoing, fade, .. } => {
                self.hint = Slot::Retiring {
                    outgoing,
                    fade,
                    incoming: next,
                };
            }
        }
    }

    fn install_hint(&mut self, hint: HintIndicator) {
        let layer = hint.layer;
        self.attach(Some(OVERLAY_LAYER), layer, hint.content());
        self.hint = Slot::Active(hint);
        self.advance_hint(layer, None);
    }

    fn hint_retired(&mut self, id: AnimationId) {
        match std::mem::take(&mut self.hint) {
            Slot::Retiring {
                outgoing,
                fade,
                incoming,
            } if fade == id => {
                self.detach(outgoing.layer);
                if let Some(hint) = incoming {
                    self.install_hint(hint);
                }
            }
            other => {
                tracing::debug!(?id, "stale hint fade-out");
                self.hint = other;
            }
        }
    }

    /// Issue the next hint phase after `finished`, or begin a cycle when `None`.
    /// A stopped loop finishes its current cycle and then goes quiet.
    fn advance_hint(&mut self, layer: LayerId, finished: Option<HintStep>) {
        let hint = match &mut self.hint {
            Slot::Active(h) if h.layer == layer => h,
            Slot::Retiring { outgoing, .. } if outgoing.layer == layer => outgoing,
            _ => {
                tracing::trace!(?layer, "hint phase for a detached indicator");
                return;
            }
        };
        let sequence = *hint.sequence();

        let (step, phase) = match finished {
            None | Some(HintStep::Slide) => {
                if hint.hint_loop_mut().next_cycle().is_none() {
                    tracing::trace!(?layer, "hint loop stopped");
                    return;
                }
                hint.pose = sequence.start;
                self.surface.set_transform(layer, hint.transform());
                self.surface.set_opacity(layer, hint.pose.alpha);
                self.opacity.insert(layer, OpacityTrack::fixed(hint.pose.alpha));
                (HintStep::Settle, sequence.settle)
            }
            Some(HintStep::Settle) => (HintStep::Slide, sequence.slide),
        };

        let from = hint.transform();
        let from_opacity = hint.pose.alpha;
        hint.pose = phase.to;
        let to = hint.transform();
        self.surface.set_transform(layer, to);
        self.surface.set_opacity(layer, phase.to.alpha);

        let timing = Timing::new(phase.duration, phase.ease).delayed(phase.delay);
        self.opacity.insert(
            layer,
            OpacityTrack {
                from: from_opacity,
                to: phase.to.alpha,
                issued_at: self.scheduler.now(),
                timing,
            },
        );
        let id = self.scheduler.animate(AnimationRequest {
            layer,
            timing,
            effect: Effect::Pose {
                from,
                to,
                from_opacity,
                to_opacity: phase.to.alpha,
            },
        });
        self.pending.insert(id, Continuation::HintPhase { layer, step });
    }

    fn finish_cleanup(&mut self) {
        match std::mem::take(&mut self.caption) {
            Slot::Active(view) => self.retire_caption_view(view),
            Slot::Retiring { outgoing, .. } => self.retire_caption_view(outgoing),
            Slot::Empty => {}
        }
        match std::mem::take(&mut self.hint) {
            Slot::Active(mut hint) | Slot::Retiring { outgoing: mut hint, .. } => {
                hint.retire();
                self.detach(hint.layer);
            }
            Slot::Empty => {}
        }
        self.detach(MASK_LAYER);
        self.detach(OVERLAY_LAYER);
        tracing::debug!("overlay detached");
    }
}

impl<S: RenderSurface> OverlayController<S, ManualScheduler> {
    /// Advance the virtual clock by `secs`, delivering every completion that
    /// falls inside the window in time order.
    pub fn run_for(&mut self, secs: f64) -> CoachMarkResult<()> {
        let deadline = self.scheduler.now() + secs;
        while let Some(id) = self.scheduler.pop_due(deadline) {
            self.animation_finished(id)?;
        }
        self.scheduler.advance_clock(deadline);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/controller.rs"]
mod tests;
