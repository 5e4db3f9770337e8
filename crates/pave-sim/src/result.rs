//! Run outcome and summary metrics.

use pave_core::Minutes;

use crate::QueueSnapshot;

/// How a run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunOutcome {
    /// Everything was laid.
    Completed,
    /// The event queue drained before the target was reached; the
    /// configuration cannot finish the job (e.g. the paver's initial queue
    /// is never reached).
    Exhausted,
}

/// Everything a run produces: the snapshot trace and the summary metrics.
///
/// Times are in minutes.  "Window" metrics cover only the span from paver
/// activation to the end of the run; the plain paver metrics cover the whole
/// run from t = 0.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    pub snapshots: Vec<QueueSnapshot>,

    pub outcome: RunOutcome,

    /// `outcome == RunOutcome::Completed`.
    pub completed: bool,

    /// Clock value when the run stopped.
    pub total_time: f64,

    pub plant_idle_time: f64,
    pub plant_utilization: f64,

    /// Paver idle time over the whole run.
    pub paver_idle_time: f64,
    pub paver_utilization: f64,

    /// When the paver's initial queue was reached, if ever.
    pub paver_activated_at: Option<Minutes>,

    /// Paver idle time inside the active window.
    pub window_idle_time: f64,

    /// Length of the active window; 0 if the paver never started.
    pub window_duration: f64,

    /// Paver utilization inside the active window; 0 if the window is empty.
    pub window_utilization: f64,

    /// Longest gap between consecutive unload completions.
    pub longest_unload_gap: f64,

    /// Trucks in the loop on average.  Trucks never leave, so this is the
    /// fleet size.
    pub avg_trucks_in_system: f64,

    pub events_processed: u64,

    /// Completed deliveries per truck, indexed by `TruckId`.
    pub deliveries: Vec<u32>,
}

impl SimulationResult {
    /// The snapshot taken when the run ended.
    pub fn final_snapshot(&self) -> Option<&QueueSnapshot> {
        self.snapshots.last()
    }

    /// Largest paver queue seen in any snapshot.
    pub fn peak_paver_queue(&self) -> u32 {
        self.snapshots
            .iter()
            .map(|s| s.counts.paver_queue)
            .max()
            .unwrap_or(0)
    }

    /// Largest plant queue seen in any snapshot.
    pub fn peak_plant_queue(&self) -> u32 {
        self.snapshots
            .iter()
            .map(|s| s.counts.plant_queue)
            .max()
            .unwrap_or(0)
    }
}

/// `(elapsed - idle) / elapsed`, floored at 0.  An empty span has
/// utilization 0.
#[inline]
pub fn utilization(elapsed: f64, idle: f64) -> f64 {
    if elapsed <= 0.0 {
        0.0
    } else {
        ((elapsed - idle) / elapsed).max(0.0)
    }
}
