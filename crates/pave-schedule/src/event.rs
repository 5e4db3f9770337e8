//! Scheduled simulation events.

use std::fmt;

use pave_core::{Minutes, TruckId};

/// What happens when an event fires.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// An empty truck reaches the plant queue.
    PlantArrival,
    /// The plant finishes filling a truck.
    LoadingComplete,
    /// A loaded truck reaches the paver queue.
    PaverArrival,
    /// The paver finishes emptying a truck.
    UnloadingComplete,
    /// Periodic sampling of aggregate state.
    Snapshot,
}

impl EventKind {
    /// `true` for every kind that concerns a single truck.
    #[inline]
    pub fn is_truck_event(self) -> bool {
        !matches!(self, EventKind::Snapshot)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventKind::PlantArrival      => "plant-arrival",
            EventKind::LoadingComplete   => "loading-complete",
            EventKind::PaverArrival      => "paver-arrival",
            EventKind::UnloadingComplete => "unloading-complete",
            EventKind::Snapshot          => "snapshot",
        };
        f.write_str(s)
    }
}

/// One entry on the timeline.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub time:  Minutes,
    pub kind:  EventKind,
    /// The truck the event concerns.  `None` only for snapshots.
    pub truck: Option<TruckId>,
}

impl Event {
    /// A truck-lifecycle event.
    #[inline]
    pub fn truck(time: Minutes, kind: EventKind, truck: TruckId) -> Self {
        Self { time, kind, truck: Some(truck) }
    }

    /// A periodic snapshot event.
    #[inline]
    pub fn snapshot(time: Minutes) -> Self {
        Self { time, kind: EventKind::Snapshot, truck: None }
    }
}
