//! Unit tests for pave-optimize.

use pave_core::{BaseParameters, SimConfig, SpeedRange, grid_seed};
use pave_sim::run_simulation_with;

use crate::{
    OptimizationParams, OptimizationResult, OptimizeError, find_optimal_configuration,
    rank_results, run_optimization, run_optimization_with, summarize_by_fleet_size,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn result(fleet_size: u32, initial_queue: u32, idle: f64) -> OptimizationResult {
    OptimizationResult {
        fleet_size,
        initial_queue,
        paver_idle_time:    idle,
        total_time:         0.0,
        paver_utilization:  0.0,
        window_idle_time:   idle,
        window_duration:    0.0,
        window_utilization: 0.0,
        longest_unload_gap: 0.0,
    }
}

/// Same loop as the simulator's fixed-speed tests: 15 min load, 10 min
/// out, 10 min unload, 7.5 min back.
fn fixed_base(target: f64) -> BaseParameters {
    BaseParameters {
        target_quantity:    target,
        unit_capacity:      40.0,
        loading_duration:   15.0,
        plant_capacity:     None,
        unloading_duration: 10.0,
        loaded_speed:       SpeedRange::fixed(30.0),
        empty_speed:        SpeedRange::fixed(40.0),
        distance:           5.0,
    }
}

fn key(r: &OptimizationResult) -> (u32, u32) {
    (r.fleet_size, r.initial_queue)
}

// ── Selection ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod select {
    use super::*;

    #[test]
    fn smallest_fleet_within_tolerance() {
        let results = vec![result(3, 1, 120.0), result(4, 1, 100.0), result(5, 1, 100.4)];
        let best = find_optimal_configuration(&results).unwrap();
        assert_eq!(best.fleet_size, 4);
    }

    #[test]
    fn tolerance_prefers_smaller_fleet_over_exact_minimum() {
        let results = vec![result(6, 2, 50.0), result(5, 3, 50.9), result(4, 1, 51.5)];
        let best = find_optimal_configuration(&results).unwrap();
        assert_eq!(key(&best), (5, 3));
    }

    #[test]
    fn first_encountered_wins_on_fleet_tie() {
        let results = vec![result(4, 2, 10.0), result(4, 1, 10.2), result(5, 1, 9.8)];
        let best = find_optimal_configuration(&results).unwrap();
        assert_eq!(key(&best), (4, 2));
    }

    #[test]
    fn empty_input_has_no_optimum() {
        assert!(find_optimal_configuration(&[]).is_none());
    }

    #[test]
    fn ranking_starts_with_the_optimum() {
        let results = vec![
            result(3, 1, 120.0),
            result(5, 1, 100.4),
            result(4, 2, 100.0),
            result(6, 1, 103.0),
            result(4, 1, 100.9),
        ];
        let ranked = rank_results(&results, 10);
        let order: Vec<(u32, u32)> = ranked.iter().map(key).collect();
        assert_eq!(order, vec![(4, 2), (4, 1), (5, 1), (6, 1), (3, 1)]);
        assert_eq!(Some(ranked[0].clone()), find_optimal_configuration(&results));
    }

    #[test]
    fn ranking_bands_are_one_tolerance_wide() {
        // 101.5 sits in the first band above the minimum, 102.0 in the
        // second, so the larger fleet at 101.5 ranks ahead.
        let results = vec![result(9, 1, 100.0), result(3, 1, 102.0), result(5, 1, 101.5)];
        let order: Vec<(u32, u32)> = rank_results(&results, 10).iter().map(key).collect();
        assert_eq!(order, vec![(9, 1), (5, 1), (3, 1)]);
    }

    #[test]
    fn ranking_truncates() {
        let results: Vec<_> = (1..=20).map(|n| result(n, 1, n as f64 * 10.0)).collect();
        assert_eq!(rank_results(&results, 10).len(), 10);
        assert!(rank_results(&[], 10).is_empty());
    }

    #[test]
    fn per_fleet_summary() {
        let results = vec![
            result(4, 1, 30.0),
            result(3, 1, 90.0),
            result(4, 2, 10.0),
            result(4, 3, 20.0),
        ];
        let summary = summarize_by_fleet_size(&results);
        assert_eq!(summary.len(), 2);

        assert_eq!(summary[0].fleet_size, 3);
        assert_eq!(summary[0].runs, 1);
        assert_eq!(summary[0].mean_idle, 90.0);

        assert_eq!(summary[1].fleet_size, 4);
        assert_eq!(summary[1].runs, 3);
        assert_eq!(summary[1].min_idle, 10.0);
        assert_eq!(summary[1].max_idle, 30.0);
        assert_eq!(summary[1].mean_idle, 20.0);
    }
}

// ── Sweep parameters ──────────────────────────────────────────────────────────

#[cfg(test)]
mod params {
    use super::*;

    #[test]
    fn grid_caps_queue_at_fleet_size() {
        let p = OptimizationParams::new(BaseParameters::default(), 3, 5, 4);
        let grid = p.grid();
        assert_eq!(grid.len(), 3 + 4 + 4);
        assert_eq!(grid.first(), Some(&(3, 1)));
        assert_eq!(grid.last(), Some(&(5, 4)));
        assert!(grid.iter().all(|&(t, q)| q <= t));
    }

    #[test]
    fn inverted_ranges_rejected() {
        let p = OptimizationParams::new(BaseParameters::default(), 6, 4, 3);
        assert!(matches!(
            p.validate(),
            Err(OptimizeError::EmptyRange { what: "fleet size", .. })
        ));

        let mut p = OptimizationParams::default();
        p.min_queue = 5;
        p.max_queue = 2;
        assert!(matches!(run_optimization(&p), Err(OptimizeError::EmptyRange { .. })));
    }

    #[test]
    fn invalid_base_rejected() {
        let mut base = BaseParameters::default();
        base.distance = 0.0;
        let p = OptimizationParams::new(base, 1, 3, 3);
        assert!(matches!(run_optimization(&p), Err(OptimizeError::InvalidBase(_))));
    }
}

// ── Sweep ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sweep {
    use super::*;

    #[test]
    fn fixed_speed_sweep() {
        // 80 t = two loads.  (3, 3) can never fill the paver queue.
        let p = OptimizationParams::new(fixed_base(80.0), 1, 3, 3);
        let results = run_optimization(&p).unwrap();

        let keys: Vec<(u32, u32)> = results.iter().map(key).collect();
        assert_eq!(keys, vec![(1, 1), (2, 1), (2, 2), (3, 1), (3, 2)]);

        let idle: Vec<f64> = results.iter().map(|r| r.paver_idle_time).collect();
        assert_eq!(idle, vec![32.5, 5.0, 0.0, 5.0, 0.0]);

        let best = find_optimal_configuration(&results).unwrap();
        assert_eq!(key(&best), (2, 2));
    }

    #[test]
    fn zero_fleet_points_are_dropped() {
        let p = OptimizationParams {
            base:       fixed_base(40.0),
            min_trucks: 0,
            max_trucks: 1,
            min_queue:  0,
            max_queue:  1,
        };
        let results = run_optimization(&p).unwrap();
        let keys: Vec<(u32, u32)> = results.iter().map(key).collect();
        assert_eq!(keys, vec![(1, 1)]);
    }

    #[test]
    fn stochastic_sweep_is_reproducible() {
        let p = OptimizationParams::new(BaseParameters::default(), 3, 6, 4);
        let cfg = SimConfig::with_seed(11);
        let a = run_optimization_with(&p, &cfg).unwrap();
        let b = run_optimization_with(&p, &cfg).unwrap();
        assert!(!a.is_empty());
        assert_eq!(a, b);
        assert!(a.iter().all(|r| r.initial_queue <= r.fleet_size));
    }

    /// The sweep must equal running every grid point on its own, in grid
    /// order, whichever way it is scheduled.
    #[test]
    fn sequential_and_parallel_match_point_by_point_runs() {
        use crate::sweep::{evaluate_grid_parallel, evaluate_grid_sequential};

        let p = OptimizationParams::new(BaseParameters::default(), 3, 9, 6);
        let cfg = SimConfig::with_seed(5);
        let grid = p.grid();

        let expected: Vec<OptimizationResult> = grid
            .iter()
            .filter_map(|&(t, q)| {
                let point_cfg = SimConfig { seed: grid_seed(cfg.seed, t, q), ..cfg.clone() };
                let run = run_simulation_with(&p.base.with_fleet(t, q), &point_cfg).unwrap();
                run.completed.then(|| OptimizationResult::from_run(t, q, &run))
            })
            .collect();
        assert!(!expected.is_empty());

        assert_eq!(evaluate_grid_sequential(&p, &cfg, &grid), expected);
        assert_eq!(evaluate_grid_parallel(&p, &cfg, &grid), expected);
        assert_eq!(run_optimization_with(&p, &cfg).unwrap(), expected);
    }
}
