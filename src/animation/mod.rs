/// Timing curves.
pub mod ease;
/// Scheduler capability and the deterministic virtual-clock scheduler.
pub mod scheduler;
