//! Per-truck lifecycle state.
//!
//! The lifecycle is a flat state tag on a plain record; trucks live in a
//! `Vec<Truck>` indexed by [`TruckId`] and never point at each other.
//!
//! ```text
//!  QueuedAtPlant ─admit─▶ Loading ─done─▶ TravelingLoaded ─arrive─▶ QueuedAtPaver
//!        ▲                                                               │ admit
//!        └──arrive── TravelingEmpty ◀─done (target open)── Unloading ◀───┘
//!                                     done (target met) ──▶ Retired
//! ```

use std::fmt;

use pave_core::{Minutes, TruckId};

/// Where a truck is in the loop.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TruckState {
    QueuedAtPlant,
    Loading,
    TravelingLoaded,
    QueuedAtPaver,
    Unloading,
    TravelingEmpty,
    /// Delivered the load that completed the job.  Terminal: no further
    /// events are ever scheduled for a retired truck.
    Retired,
}

impl TruckState {
    /// Every state, in lifecycle order.
    pub const ALL: [TruckState; 7] = [
        TruckState::QueuedAtPlant,
        TruckState::Loading,
        TruckState::TravelingLoaded,
        TruckState::QueuedAtPaver,
        TruckState::Unloading,
        TruckState::TravelingEmpty,
        TruckState::Retired,
    ];

    #[inline]
    pub fn is_traveling(self) -> bool {
        matches!(self, TruckState::TravelingLoaded | TruckState::TravelingEmpty)
    }
}

impl fmt::Display for TruckState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TruckState::QueuedAtPlant   => "queued-at-plant",
            TruckState::Loading         => "loading",
            TruckState::TravelingLoaded => "traveling-loaded",
            TruckState::QueuedAtPaver   => "queued-at-paver",
            TruckState::Unloading       => "unloading",
            TruckState::TravelingEmpty  => "traveling-empty",
            TruckState::Retired         => "retired",
        };
        f.write_str(s)
    }
}

/// One truck's record for the duration of a run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Truck {
    pub id: TruckId,

    pub state: TruckState,

    /// Tons on board.  Zero unless between loading and unloading.
    pub load: f64,

    /// When the truck entered `state`.
    pub state_entered: Minutes,

    /// Speed for the current trip in km/h.  `Some` only while traveling.
    pub speed: Option<f64>,

    /// Completed plant → paver → plant deliveries.
    pub deliveries: u32,
}

impl Truck {
    /// A fresh truck waiting at the plant at time zero.
    pub fn new(id: TruckId) -> Self {
        Self {
            id,
            state:         TruckState::QueuedAtPlant,
            load:          0.0,
            state_entered: Minutes::ZERO,
            speed:         None,
            deliveries:    0,
        }
    }

    /// Move to `state` at `now`.  Clears the trip speed when the new state
    /// is not a traveling one.
    #[inline]
    pub fn enter(&mut self, state: TruckState, now: Minutes) {
        self.state = state;
        self.state_entered = now;
        if !state.is_traveling() {
            self.speed = None;
        }
    }

    /// Minutes spent in the current state as of `now`.
    #[inline]
    pub fn time_in_state(&self, now: Minutes) -> f64 {
        now.since(self.state_entered)
    }
}
