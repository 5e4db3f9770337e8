//! Fluent builder for constructing a [`Sim`].

use pave_core::{Minutes, SimConfig, SimulationParameters, TruckId, TruckRng};
use pave_schedule::EventQueue;

use crate::resource::{ResourceController, ResourceKind};
use crate::{Sim, SimError, SimResult, Truck};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimulationParameters`]: the scenario.
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                       |
/// |-----------------|-------------------------------|
/// | `.config(c)`    | `SimConfig::default()`        |
/// | `.seed(s)`      | `SimConfig::default().seed`   |
///
/// # Example
///
/// ```rust,ignore
/// let result = SimBuilder::new(params)
///     .seed(7)
///     .build()?
///     .run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    params: SimulationParameters,
    config: SimConfig,
}

impl SimBuilder {
    pub fn new(params: SimulationParameters) -> Self {
        Self {
            params,
            config: SimConfig::default(),
        }
    }

    /// Replace the whole run configuration.
    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Override only the RNG seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Validate inputs, create the fleet and both controllers, and return a
    /// ready-to-run [`Sim`].
    ///
    /// Nothing is scheduled yet; [`Sim::run`] does that.
    pub fn build(self) -> SimResult<Sim> {
        self.params.validate()?;

        let interval = self.config.snapshot_interval.0;
        if !(interval.is_finite() && interval > 0.0) {
            return Err(SimError::Config(format!(
                "snapshot interval must be a positive number of minutes, got {interval}"
            )));
        }

        let fleet = self.params.fleet_size;
        let trucks: Vec<Truck> = (0..fleet).map(|i| Truck::new(TruckId(i))).collect();
        let rngs: Vec<TruckRng> = (0..fleet)
            .map(|i| TruckRng::new(self.config.seed, TruckId(i)))
            .collect();

        let mut plant = ResourceController::active(ResourceKind::Plant, Minutes::ZERO);
        for truck in &trucks {
            plant.enqueue(truck.id);
        }

        Ok(Sim {
            params: self.params,
            config: self.config,
            clock:  Minutes::ZERO,
            trucks,
            rngs,
            events: EventQueue::new(),
            plant,
            paver:  ResourceController::latched(ResourceKind::Paver),
            produced: 0.0,
            laid:     0.0,
            snapshots:          Vec::new(),
            last_unload:        None,
            longest_unload_gap: 0.0,
            events_processed:   0,
        })
    }
}
