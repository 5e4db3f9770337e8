//! Simulation observer trait for progress reporting and data collection.

use pave_core::Minutes;
use pave_schedule::Event;

use crate::{QueueSnapshot, SimulationResult};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// event loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — event counter
///
/// ```rust,ignore
/// struct Counter(usize);
///
/// impl SimObserver for Counter {
///     fn on_event(&mut self, _event: &Event) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called for every event popped from the queue, before it is handled.
    fn on_event(&mut self, _event: &Event) {}

    /// Called for every recorded snapshot, including the final one.
    fn on_snapshot(&mut self, _snapshot: &QueueSnapshot) {}

    /// Called once, when the paver's initial queue is first reached.
    fn on_paver_activated(&mut self, _time: Minutes) {}

    /// Called once after the run terminates, with the finished result.
    fn on_run_end(&mut self, _result: &SimulationResult) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
