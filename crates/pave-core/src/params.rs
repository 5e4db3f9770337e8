//! Scenario parameters and their validation.
//!
//! `BaseParameters` describes the physical loop (material, plant, paver,
//! road); `SimulationParameters` adds the two fleet knobs the optimizer
//! sweeps: how many trucks, and how many must queue at the paver before it
//! starts.
//!
//! Units: tons, minutes, km, km/h.

use crate::{ParamError, ParamResult};

// ── SpeedRange ────────────────────────────────────────────────────────────────

/// Inclusive `[min, max]` speed range in km/h.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedRange {
    pub min: f64,
    pub max: f64,
}

impl SpeedRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A range that always yields `speed`.
    pub const fn fixed(speed: f64) -> Self {
        Self { min: speed, max: speed }
    }

    #[inline]
    pub fn is_fixed(&self) -> bool {
        self.min == self.max
    }

    fn validate(
        &self,
        which:     &'static str,
        min_field: &'static str,
        max_field: &'static str,
    ) -> ParamResult<()> {
        positive(min_field, self.min)?;
        positive(max_field, self.max)?;
        if self.min > self.max {
            return Err(ParamError::InvertedSpeedRange { which, min: self.min, max: self.max });
        }
        Ok(())
    }
}

// ── BaseParameters ────────────────────────────────────────────────────────────

/// Every scenario input except fleet size and initial-queue threshold.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseParameters {
    /// Total material to lay, in tons.  Zero is a valid (trivial) job.
    pub target_quantity: f64,

    /// Tons one truck carries per trip.
    pub unit_capacity: f64,

    /// Fixed plant loading time per truck, in minutes.
    pub loading_duration: f64,

    /// Nameplate plant output in tons/hour.  Reported only; the simulation
    /// is driven by `loading_duration`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub plant_capacity: Option<f64>,

    /// Fixed paver unloading time per truck, in minutes.
    pub unloading_duration: f64,

    /// Speed range for plant → paver trips.
    pub loaded_speed: SpeedRange,

    /// Speed range for paver → plant trips.
    pub empty_speed: SpeedRange,

    /// One-way plant ↔ paver distance in km.
    pub distance: f64,
}

impl BaseParameters {
    /// Attach the fleet knobs to produce a full parameter set.
    pub fn with_fleet(&self, fleet_size: u32, initial_queue: u32) -> SimulationParameters {
        SimulationParameters {
            fleet_size,
            initial_queue,
            base: self.clone(),
        }
    }

    pub fn validate(&self) -> ParamResult<()> {
        finite("target quantity", self.target_quantity)?;
        if self.target_quantity < 0.0 {
            return Err(ParamError::NegativeTarget(self.target_quantity));
        }
        positive("unit capacity", self.unit_capacity)?;
        positive("loading duration", self.loading_duration)?;
        positive("unloading duration", self.unloading_duration)?;
        positive("distance", self.distance)?;
        if let Some(rate) = self.plant_capacity {
            positive("plant capacity", rate)?;
        }
        self.loaded_speed.validate("loaded", "loaded speed min", "loaded speed max")?;
        self.empty_speed.validate("empty", "empty speed min", "empty speed max")?;
        Ok(())
    }
}

impl Default for BaseParameters {
    fn default() -> Self {
        Self {
            target_quantity:    500.0,
            unit_capacity:      40.0,
            loading_duration:   15.0,
            plant_capacity:     Some(160.0),
            unloading_duration: 10.0,
            loaded_speed:       SpeedRange::new(20.0, 30.0),
            empty_speed:        SpeedRange::new(40.0, 50.0),
            distance:           5.0,
        }
    }
}

// ── SimulationParameters ──────────────────────────────────────────────────────

/// A complete scenario: base parameters plus the fleet configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationParameters {
    /// Number of trucks cycling between plant and paver.
    pub fleet_size: u32,

    /// Trucks that must be queued at the paver before it starts laying.
    /// Checked once; the paver never stops to wait for a queue again.
    pub initial_queue: u32,

    #[cfg_attr(feature = "serde", serde(flatten))]
    pub base: BaseParameters,
}

impl SimulationParameters {
    /// Fail fast on any configuration that cannot describe a real loop.
    pub fn validate(&self) -> ParamResult<()> {
        if self.fleet_size == 0 {
            return Err(ParamError::ZeroFleet);
        }
        if self.initial_queue == 0 || self.initial_queue > self.fleet_size {
            return Err(ParamError::QueueThresholdOutOfRange {
                threshold: self.initial_queue,
                fleet:     self.fleet_size,
            });
        }
        self.base.validate()
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        BaseParameters::default().with_fleet(8, 3)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn finite(field: &'static str, value: f64) -> ParamResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParamError::NonFinite { field })
    }
}

fn positive(field: &'static str, value: f64) -> ParamResult<()> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ParamError::NonPositive { field, value })
    }
}
