//! Periodic samples of aggregate loop state.

use pave_core::Minutes;

use crate::{Truck, TruckState};

/// Number of trucks in each [`TruckState`] at one instant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateCounts {
    pub plant_queue:      u32,
    pub loading:          u32,
    pub traveling_loaded: u32,
    pub paver_queue:      u32,
    pub unloading:        u32,
    pub traveling_empty:  u32,
    pub retired:          u32,
}

impl StateCounts {
    /// Tally the states of `trucks`.
    pub fn from_trucks(trucks: &[Truck]) -> Self {
        let mut counts = Self::default();
        for truck in trucks {
            *counts.slot_mut(truck.state) += 1;
        }
        counts
    }

    /// Count for one state.
    pub fn get(&self, state: TruckState) -> u32 {
        match state {
            TruckState::QueuedAtPlant   => self.plant_queue,
            TruckState::Loading         => self.loading,
            TruckState::TravelingLoaded => self.traveling_loaded,
            TruckState::QueuedAtPaver   => self.paver_queue,
            TruckState::Unloading       => self.unloading,
            TruckState::TravelingEmpty  => self.traveling_empty,
            TruckState::Retired         => self.retired,
        }
    }

    /// Sum over all states.  Always equals the fleet size.
    pub fn total(&self) -> u32 {
        TruckState::ALL.iter().map(|&s| self.get(s)).sum()
    }

    fn slot_mut(&mut self, state: TruckState) -> &mut u32 {
        match state {
            TruckState::QueuedAtPlant   => &mut self.plant_queue,
            TruckState::Loading         => &mut self.loading,
            TruckState::TravelingLoaded => &mut self.traveling_loaded,
            TruckState::QueuedAtPaver   => &mut self.paver_queue,
            TruckState::Unloading       => &mut self.unloading,
            TruckState::TravelingEmpty  => &mut self.traveling_empty,
            TruckState::Retired         => &mut self.retired,
        }
    }
}

/// One sample of the loop, taken every snapshot interval and once at the end.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueueSnapshot {
    pub time: Minutes,

    pub counts: StateCounts,

    /// Cumulative tons loaded at the plant.
    pub produced: f64,

    /// Cumulative tons laid by the paver.
    pub laid: f64,

    /// Plant serving slot is empty.
    pub plant_idle: bool,

    /// Paver is active and its serving slot is empty.
    pub paver_idle: bool,
}
