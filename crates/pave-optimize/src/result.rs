//! Per-configuration summary kept by the sweep.

use pave_sim::SimulationResult;

/// The metrics of one completed run that matter for ranking fleets.
///
/// Times in minutes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizationResult {
    pub fleet_size:    u32,
    pub initial_queue: u32,

    /// Paver idle time over the run: the quantity being minimised.
    pub paver_idle_time:   f64,
    pub total_time:        f64,
    pub paver_utilization: f64,

    pub window_idle_time:   f64,
    pub window_duration:    f64,
    pub window_utilization: f64,

    pub longest_unload_gap: f64,
}

impl OptimizationResult {
    pub fn from_run(fleet_size: u32, initial_queue: u32, run: &SimulationResult) -> Self {
        Self {
            fleet_size,
            initial_queue,
            paver_idle_time:    run.paver_idle_time,
            total_time:         run.total_time,
            paver_utilization:  run.paver_utilization,
            window_idle_time:   run.window_idle_time,
            window_duration:    run.window_duration,
            window_utilization: run.window_utilization,
            longest_unload_gap: run.longest_unload_gap,
        }
    }
}
