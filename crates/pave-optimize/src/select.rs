//! Choosing and ranking fleet configurations.
//!
//! The goal is the smallest fleet that keeps the paver as busy as the best
//! configuration does.  Idle times within [`IDLE_TOLERANCE`] of each other
//! count as equally good.

use std::collections::BTreeMap;

use crate::OptimizationResult;

/// Idle-time differences up to this many minutes are treated as ties.
pub const IDLE_TOLERANCE: f64 = 1.0;

/// The smallest fleet whose paver idle time is within [`IDLE_TOLERANCE`] of
/// the best one.
///
/// Among equal fleet sizes the first result in `results` wins.  Returns
/// `None` only when `results` is empty.
pub fn find_optimal_configuration(results: &[OptimizationResult]) -> Option<OptimizationResult> {
    let min_idle = min_idle(results)?;
    results
        .iter()
        .filter(|r| r.paver_idle_time <= min_idle + IDLE_TOLERANCE)
        .min_by_key(|r| r.fleet_size)
        .cloned()
}

/// Order `results` best-first and keep at most `limit`.
///
/// Results are grouped into tolerance-wide idle-time bands measured from the
/// minimum; bands sort ascending, and inside a band smaller fleets come
/// first (input order breaks remaining ties).  The first entry is always the
/// one [`find_optimal_configuration`] picks.
pub fn rank_results(results: &[OptimizationResult], limit: usize) -> Vec<OptimizationResult> {
    let Some(min_idle) = min_idle(results) else {
        return Vec::new();
    };

    let band = |r: &OptimizationResult| -> u64 {
        if r.paver_idle_time <= min_idle + IDLE_TOLERANCE {
            0
        } else {
            ((r.paver_idle_time - min_idle) / IDLE_TOLERANCE).floor() as u64
        }
    };

    let mut ranked: Vec<OptimizationResult> = results.to_vec();
    ranked.sort_by_key(|r| (band(r), r.fleet_size));
    ranked.truncate(limit);
    ranked
}

/// Idle-time statistics for every fleet size that had at least one
/// completed run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetSummary {
    pub fleet_size: u32,

    /// Number of thresholds that completed for this fleet size.
    pub runs: usize,

    pub min_idle:  f64,
    pub max_idle:  f64,
    pub mean_idle: f64,
}

/// Summarise `results` per fleet size, ascending.
pub fn summarize_by_fleet_size(results: &[OptimizationResult]) -> Vec<FleetSummary> {
    let mut by_fleet: BTreeMap<u32, FleetSummary> = BTreeMap::new();
    for r in results {
        let idle = r.paver_idle_time;
        let entry = by_fleet.entry(r.fleet_size).or_insert(FleetSummary {
            fleet_size: r.fleet_size,
            runs:       0,
            min_idle:   idle,
            max_idle:   idle,
            mean_idle:  0.0,
        });
        entry.runs += 1;
        entry.min_idle = entry.min_idle.min(idle);
        entry.max_idle = entry.max_idle.max(idle);
        // Running sum; divided below.
        entry.mean_idle += idle;
    }

    by_fleet
        .into_values()
        .map(|mut s| {
            s.mean_idle /= s.runs as f64;
            s
        })
        .collect()
}

fn min_idle(results: &[OptimizationResult]) -> Option<f64> {
    results
        .iter()
        .map(|r| r.paver_idle_time)
        .min_by(f64::total_cmp)
}
