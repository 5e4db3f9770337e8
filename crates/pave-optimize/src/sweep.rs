//! Grid sweep: one isolated simulation per `(trucks, queue)` point.

use pave_core::{SimConfig, grid_seed};
use pave_sim::run_simulation_with;
use tracing::{debug, info};

use crate::{OptimizationParams, OptimizationResult, OptimizeResult};

/// Sweep the grid with the default configuration.
pub fn run_optimization(params: &OptimizationParams) -> OptimizeResult<Vec<OptimizationResult>> {
    run_optimization_with(params, &SimConfig::default())
}

/// Sweep the grid, keeping only runs that complete.
///
/// Each point runs with its own seed derived from `config.seed` and the
/// point's coordinates, so the output is identical with or without the
/// `parallel` feature.  Results come back in grid order.
pub fn run_optimization_with(
    params: &OptimizationParams,
    config: &SimConfig,
) -> OptimizeResult<Vec<OptimizationResult>> {
    params.validate()?;
    let grid = params.grid();

    let results = evaluate_grid(params, config, &grid);

    info!(
        points   = grid.len(),
        feasible = results.len(),
        "optimization sweep finished"
    );
    Ok(results)
}

fn evaluate_grid(
    params: &OptimizationParams,
    config: &SimConfig,
    grid:   &[(u32, u32)],
) -> Vec<OptimizationResult> {
    #[cfg(feature = "parallel")]
    return evaluate_grid_parallel(params, config, grid);

    #[cfg(not(feature = "parallel"))]
    evaluate_grid_sequential(params, config, grid)
}

#[cfg(any(not(feature = "parallel"), test))]
pub(crate) fn evaluate_grid_sequential(
    params: &OptimizationParams,
    config: &SimConfig,
    grid:   &[(u32, u32)],
) -> Vec<OptimizationResult> {
    grid.iter()
        .filter_map(|&(trucks, queue)| evaluate_point(params, config, trucks, queue))
        .collect()
}

// Also compiled for tests so both paths can be compared in one build.
#[cfg(any(feature = "parallel", test))]
pub(crate) fn evaluate_grid_parallel(
    params: &OptimizationParams,
    config: &SimConfig,
    grid:   &[(u32, u32)],
) -> Vec<OptimizationResult> {
    use rayon::prelude::*;

    // Indexed source: `collect` keeps grid order.
    grid.par_iter()
        .filter_map(|&(trucks, queue)| evaluate_point(params, config, trucks, queue))
        .collect()
}

/// Run one grid point.  `None` if it fails validation or never finishes.
fn evaluate_point(
    params: &OptimizationParams,
    config: &SimConfig,
    trucks: u32,
    queue:  u32,
) -> Option<OptimizationResult> {
    let sim_params = params.base.with_fleet(trucks, queue);
    let point_config = SimConfig {
        seed: grid_seed(config.seed, trucks, queue),
        ..config.clone()
    };

    match run_simulation_with(&sim_params, &point_config) {
        Ok(run) if run.completed => {
            debug!(trucks, queue, idle = run.paver_idle_time, "grid point completed");
            Some(OptimizationResult::from_run(trucks, queue, &run))
        }
        Ok(run) => {
            debug!(trucks, queue, time = run.total_time, "grid point exhausted; dropped");
            None
        }
        Err(e) => {
            debug!(trucks, queue, error = %e, "grid point invalid; dropped");
            None
        }
    }
}
