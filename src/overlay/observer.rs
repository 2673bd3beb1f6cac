use std::cell::RefCell;
use std::rc::Rc;

/// Lifecycle callbacks from the overlay controller. Every method defaults to a no-op.
pub trait OverlayObserver {
    fn will_navigate(&mut self, _index: usize) {}
    fn did_navigate(&mut self, _index: usize) {}
    fn will_cleanup(&mut self) {}
    fn did_cleanup(&mut self) {}
    fn did_tap(&mut self, _index: usize) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", content = "index", rename_all = "snake_case")]
pub enum OverlayEvent {
    WillNavigate(usize),
    DidNavigate(usize),
    WillCleanup,
    DidCleanup,
    DidTap(usize),
}

/// Observer that appends every callback to a shared log.
///
/// Clones share the same log, so one clone can be handed to the controller
/// while another is kept for inspection.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<OverlayEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<OverlayEvent> {
        self.events.borrow().clone()
    }

    pub fn count(&self, event: OverlayEvent) -> usize {
        self.events.borrow().iter().filter(|e| **e == event).count()
    }

    fn push(&self, event: OverlayEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl OverlayObserver for EventLog {
    fn will_navigate(&mut self, index: usize) {
        self.push(OverlayEvent::WillNavigate(index));
    }

    fn did_navigate(&mut self, index: usize) {
        self.push(OverlayEvent::DidNavigate(index));
    }

    fn will_cleanup(&mut self) {
        self.push(OverlayEvent::WillCleanup);
    }

    fn did_cleanup(&mut self) {
        self.push(OverlayEvent::DidCleanup);
    }

    fn did_tap(&mut self, index: usize) {
        self.push(OverlayEvent::DidTap(index));
    }
}
