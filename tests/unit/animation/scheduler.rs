use super::*;

fn fade(layer: u64, duration: f64, delay: f64) -> AnimationRequest {
    AnimationRequest {
        layer: LayerId(layer),
        timing: Timing::new(duration, Ease::Linear).delayed(delay),
        effect: Effect::Opacity { from: 0.0, to: 1.0 },
    }
}

#[test]
fn completions_pop_in_finish_order() {
    let mut s = ManualScheduler::new();
    let slow = s.animate(fade(1, 1.0, 0.0));
    let fast = s.animate(fade(2, 0.3, 0.0));
    let delayed = s.animate(fade(3, 0.2, 0.5));

    assert_eq!(s.in_flight(), 3);
    assert_eq!(s.pop_due(2.0), Some(fast));
    assert_eq!(s.now(), 0.3);
    assert_eq!(s.pop_due(2.0), Some(delayed));
    assert_eq!(s.pop_due(0.9), None);
    assert_eq!(s.pop_due(2.0), Some(slow));
    assert_eq!(s.pop_due(2.0), None);
}

#[test]
fn ties_resolve_in_issue_order() {
    let mut s = ManualScheduler::new();
    let a = s.animate(fade(1, 0.5, 0.0));
    let b = s.animate(fade(2, 0.5, 0.0));
    assert_eq!(s.pop_due(1.0), Some(a));
    assert_eq!(s.pop_due(1.0), Some(b));
}

#[test]
fn looping_animations_never_complete_until_stopped() {
    let mut s = ManualScheduler::new();
    let mut req = fade(1, 2.0, 0.3);
    req.timing = req.timing.forever(true);
    let id = s.animate(req);

    assert_eq!(s.looping(), &[id]);
    assert_eq!(s.next_completion_at(), None);
    assert_eq!(s.pop_due(1_000.0), None);

    s.stop(id);
    assert!(s.looping().is_empty());
}

#[test]
fn requests_issued_later_start_from_current_clock() {
    let mut s = ManualScheduler::new();
    s.advance_clock(5.0);
    let id = s.animate(fade(1, 1.0, 0.0));
    assert_eq!(s.next_completion_at(), Some(6.0));
    assert_eq!(s.history()[0].issued_at, 5.0);
    assert!(s.request(id).is_some());
}

#[test]
fn progress_holds_through_delay_then_eases() {
    let t = Timing::new(1.0, Ease::Linear).delayed(0.5);
    assert_eq!(t.progress(0.0), 0.0);
    assert_eq!(t.progress(0.5), 0.0);
    assert_eq!(t.progress(1.0), 0.5);
    assert_eq!(t.progress(3.0), 1.0);

    let instant = Timing::new(0.0, Ease::EaseIn);
    assert_eq!(instant.progress(0.0), 0.0);
    assert_eq!(instant.progress(0.1), 1.0);
}

#[test]
fn trait_clock_matches_virtual_clock() {
    fn clock(s: &impl Scheduler) -> f64 {
        s.now()
    }
    let mut s = ManualScheduler::new();
    s.advance_clock(1.25);
    assert_eq!(clock(&s), 1.25);
}
