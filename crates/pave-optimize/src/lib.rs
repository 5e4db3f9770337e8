//! `pave-optimize` — search fleet size × initial-queue threshold for the
//! configuration that keeps the paver busiest with the fewest trucks.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`params`]   | `OptimizationParams` (base scenario + sweep ranges)          |
//! | [`sweep`]    | `run_optimization`, `run_optimization_with`                  |
//! | [`select`]   | `find_optimal_configuration`, `rank_results`, `summarize_by_fleet_size` |
//! | [`result`]   | `OptimizationResult`                                         |
//! | [`error`]    | `OptimizeError`, `OptimizeResult<T>`                         |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Evaluates grid points on Rayon's thread pool.          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let results = run_optimization(&OptimizationParams::default())?;
//! if let Some(best) = find_optimal_configuration(&results) {
//!     println!("{} trucks, start at {} queued", best.fleet_size, best.initial_queue);
//! }
//! ```

pub mod error;
pub mod params;
pub mod result;
pub mod select;
pub mod sweep;

#[cfg(test)]
mod tests;

pub use error::{OptimizeError, OptimizeResult};
pub use params::OptimizationParams;
pub use result::OptimizationResult;
pub use select::{
    FleetSummary, IDLE_TOLERANCE, find_optimal_configuration, rank_results,
    summarize_by_fleet_size,
};
pub use sweep::{run_optimization, run_optimization_with};
