//! `paving` — run one plant → paver trucking scenario, and optionally sweep
//! fleet sizes to find the smallest fleet that keeps the paver busy.
//!
//! Run with:
//!   cargo run -p paving --release -- --trucks 8 --queue 3
//!   cargo run -p paving --release -- --optimize --max-trucks 13

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pave_core::{BaseParameters, Minutes, SimConfig, SimulationParameters};
use pave_optimize::{
    OptimizationParams, find_optimal_configuration, rank_results, run_optimization_with,
    summarize_by_fleet_size,
};
use pave_sim::{QueueSnapshot, SimBuilder, SimObserver, SimulationResult};

// ── Constants ─────────────────────────────────────────────────────────────────

const RANKING_LIMIT: usize = 10;

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Asphalt plant → paver trucking simulator.
///
/// Without `--optimize`, runs a single scenario and prints its metrics.
#[derive(Parser, Debug)]
#[command(name = "paving")]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of trucks in the fleet
    #[arg(short = 't', long, default_value = "8")]
    trucks: u32,

    /// Trucks that must be waiting before the paver starts
    #[arg(short = 'q', long, default_value = "3")]
    queue: u32,

    /// Tons to lay
    #[arg(long, default_value = "500")]
    target: f64,

    /// Plant → paver distance in km
    #[arg(long, default_value = "5")]
    distance: f64,

    /// Random seed for speed draws
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Print every recorded snapshot
    #[arg(long)]
    timeline: bool,

    /// Sweep fleet size × initial queue instead of a single run
    #[arg(long)]
    optimize: bool,

    /// Smallest fleet in the sweep
    #[arg(long, default_value = "3")]
    min_trucks: u32,

    /// Largest fleet in the sweep
    #[arg(long, default_value = "13")]
    max_trucks: u32,

    /// Largest initial queue in the sweep
    #[arg(long, default_value = "8")]
    max_queue: u32,
}

impl Args {
    fn base(&self) -> BaseParameters {
        BaseParameters {
            target_quantity: self.target,
            distance:        self.distance,
            ..BaseParameters::default()
        }
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs the paver start and keeps the snapshots for `--timeline`.
#[derive(Default)]
struct ConsoleObserver {
    timeline: Vec<QueueSnapshot>,
}

impl SimObserver for ConsoleObserver {
    fn on_snapshot(&mut self, snapshot: &QueueSnapshot) {
        self.timeline.push(snapshot.clone());
    }

    fn on_paver_activated(&mut self, time: Minutes) {
        info!(%time, "paver started");
    }

    fn on_run_end(&mut self, result: &SimulationResult) {
        info!(
            outcome = ?result.outcome,
            events  = result.events_processed,
            "run finished"
        );
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,paving=info")),
        )
        .init();

    let args = Args::parse();
    let config = SimConfig::with_seed(args.seed);

    if args.optimize {
        optimize(&args, &config)
    } else {
        single_run(&args, &config)
    }
}

fn single_run(args: &Args, config: &SimConfig) -> Result<()> {
    let params: SimulationParameters = args.base().with_fleet(args.trucks, args.queue);
    info!(trucks = args.trucks, queue = args.queue, seed = args.seed, "starting simulation");

    let sim = SimBuilder::new(params)
        .config(config.clone())
        .build()
        .context("invalid scenario")?;

    let mut observer = ConsoleObserver::default();
    let result = sim.run(&mut observer);

    if args.timeline {
        print_timeline(&observer.timeline);
    }
    print_run(&result);
    Ok(())
}

fn optimize(args: &Args, config: &SimConfig) -> Result<()> {
    let params = OptimizationParams {
        base:       args.base(),
        min_trucks: args.min_trucks,
        max_trucks: args.max_trucks,
        min_queue:  1,
        max_queue:  args.max_queue,
    };
    info!(
        min_trucks = params.min_trucks,
        max_trucks = params.max_trucks,
        max_queue  = params.max_queue,
        seed       = args.seed,
        "starting sweep"
    );

    let results = run_optimization_with(&params, config).context("invalid sweep")?;

    println!("── Top {RANKING_LIMIT} configurations ──");
    println!("{:>6} {:>6} {:>10} {:>10} {:>8} {:>8}", "trucks", "queue", "idle", "total", "util", "window");
    for r in rank_results(&results, RANKING_LIMIT) {
        println!(
            "{:>6} {:>6} {:>10.1} {:>10.1} {:>7.1}% {:>7.1}%",
            r.fleet_size,
            r.initial_queue,
            r.paver_idle_time,
            r.total_time,
            r.paver_utilization * 100.0,
            r.window_utilization * 100.0,
        );
    }

    println!();
    println!("── Idle time by fleet size ──");
    println!("{:>6} {:>5} {:>10} {:>10} {:>10}", "trucks", "runs", "min", "mean", "max");
    for s in summarize_by_fleet_size(&results) {
        println!(
            "{:>6} {:>5} {:>10.1} {:>10.1} {:>10.1}",
            s.fleet_size, s.runs, s.min_idle, s.mean_idle, s.max_idle,
        );
    }

    println!();
    match find_optimal_configuration(&results) {
        Some(best) => println!(
            "Optimal: {} trucks, start paving at {} queued ({:.1} min paver idle)",
            best.fleet_size, best.initial_queue, best.paver_idle_time,
        ),
        None => println!("No configuration completed the job."),
    }
    Ok(())
}

// ── Output ────────────────────────────────────────────────────────────────────

fn print_run(result: &SimulationResult) {
    println!("Outcome:            {:?}", result.outcome);
    println!("Total time:         {:.1} min", result.total_time);
    println!(
        "Plant idle:         {:.1} min ({:.1}% busy)",
        result.plant_idle_time,
        result.plant_utilization * 100.0,
    );
    println!(
        "Paver idle:         {:.1} min ({:.1}% busy)",
        result.paver_idle_time,
        result.paver_utilization * 100.0,
    );
    match result.paver_activated_at {
        Some(t) => println!(
            "Paving window:      {t} + {:.1} min, {:.1} min idle ({:.1}% busy)",
            result.window_duration,
            result.window_idle_time,
            result.window_utilization * 100.0,
        ),
        None => println!("Paving window:      paver never started"),
    }
    println!("Longest unload gap: {:.1} min", result.longest_unload_gap);
    println!("Peak paver queue:   {}", result.peak_paver_queue());
    println!("Trips per truck:    {:?}", result.deliveries);
    if let Some(last) = result.final_snapshot() {
        println!("Laid:               {:.1} t", last.laid);
    }
}

fn print_timeline(timeline: &[QueueSnapshot]) {
    println!(
        "{:>8} {:>6} {:>5} {:>6} {:>6} {:>6} {:>6} {:>7} {:>8}",
        "min", "plantQ", "load", "→pave", "paveQ", "unload", "→plant", "retired", "laid"
    );
    for s in timeline {
        let c = &s.counts;
        println!(
            "{:>8.1} {:>6} {:>5} {:>6} {:>6} {:>6} {:>6} {:>7} {:>8.1}",
            s.time.0,
            c.plant_queue,
            c.loading,
            c.traveling_loaded,
            c.paver_queue,
            c.unloading,
            c.traveling_empty,
            c.retired,
            s.laid,
        );
    }
    println!();
}
