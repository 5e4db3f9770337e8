//! `pave-sim` — discrete-event driver for the plant → paver trucking loop.
//!
//! # Event loop
//!
//! ```text
//! init:  snapshot @ 0, plant admits first truck
//! loop while laid < target:
//!   ① pop earliest event (queue empty → Exhausted)
//!   ② advance clock to its time
//!   ③ dispatch:
//!        PlantArrival      → truck joins plant queue
//!        LoadingComplete   → load, draw loaded speed, schedule PaverArrival
//!        PaverArrival      → truck joins paver queue; maybe latch paver on
//!        UnloadingComplete → lay, draw empty speed, schedule PlantArrival
//!                            (or retire the truck if the job is done)
//!        Snapshot          → sample, schedule next while trucks are busy
//!   ④ plant.try_admit, paver.try_admit
//! end:   final snapshot, metrics
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pave_core::SimulationParameters;
//! use pave_sim::run_simulation;
//!
//! let result = run_simulation(&SimulationParameters::default())?;
//! println!("paver idle: {:.1} min", result.paver_idle_time);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod resource;
pub mod result;
pub mod sim;
pub mod snapshot;
pub mod truck;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use resource::{ResourceController, ResourceKind};
pub use result::{RunOutcome, SimulationResult, utilization};
pub use sim::Sim;
pub use snapshot::{QueueSnapshot, StateCounts};
pub use truck::{Truck, TruckState};

use pave_core::{SimConfig, SimulationParameters};

/// Validate `params` and run one simulation with the default configuration.
pub fn run_simulation(params: &SimulationParameters) -> SimResult<SimulationResult> {
    run_simulation_with(params, &SimConfig::default())
}

/// Validate `params` and run one simulation with an explicit configuration.
pub fn run_simulation_with(
    params: &SimulationParameters,
    config: &SimConfig,
) -> SimResult<SimulationResult> {
    let sim = SimBuilder::new(params.clone()).config(config.clone()).build()?;
    Ok(sim.run(&mut NoopObserver))
}
