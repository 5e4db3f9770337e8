//! Single-server resource controllers (the plant and the paver).
//!
//! A controller owns a FIFO queue of trucks and a serving slot holding at
//! most one truck.  It also owns the resource's idle-time account.
//!
//! # Idle accounting
//!
//! `free_since` marks the last moment the slot was known to be free.  Each
//! time [`try_admit`](ResourceController::try_admit) finds the slot free on
//! an active resource with work still to do, the gap `now - free_since` is
//! added to idle time and the mark moves to `now`.  Releasing a truck or
//! activating the resource resets the mark, so busy time is never counted.
//!
//! A resource accrues nothing before it is active (the paver waits for its
//! initial queue) or after its own target is met (the plant once every ton
//! has been loaded).

use std::collections::VecDeque;
use std::fmt;

use pave_core::{Minutes, TruckId};

/// Which end of the loop a controller manages.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceKind {
    Plant,
    Paver,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Plant => f.write_str("plant"),
            ResourceKind::Paver => f.write_str("paver"),
        }
    }
}

/// Queue + serving slot + idle account for one resource.
#[derive(Clone, Debug)]
pub struct ResourceController {
    kind:         ResourceKind,
    queue:        VecDeque<TruckId>,
    serving:      Option<TruckId>,
    idle_time:    f64,
    free_since:   Minutes,
    activated_at: Option<Minutes>,
}

impl ResourceController {
    /// A controller that is active from `now` (the plant starts at t = 0).
    pub fn active(kind: ResourceKind, now: Minutes) -> Self {
        let mut c = Self::latched(kind);
        c.activate(now);
        c
    }

    /// A controller that stays inactive until [`activate`](Self::activate)
    /// is called.
    pub fn latched(kind: ResourceKind) -> Self {
        Self {
            kind,
            queue:        VecDeque::new(),
            serving:      None,
            idle_time:    0.0,
            free_since:   Minutes::ZERO,
            activated_at: None,
        }
    }

    /// Set the activation latch.  Returns `false` (and changes nothing) if
    /// the latch was already set.
    pub fn activate(&mut self, now: Minutes) -> bool {
        if self.activated_at.is_some() {
            return false;
        }
        self.activated_at = Some(now);
        self.free_since = now;
        true
    }

    /// Add `truck` to the back of the queue.
    #[inline]
    pub fn enqueue(&mut self, truck: TruckId) {
        self.queue.push_back(truck);
    }

    /// Admit the front truck if the resource can serve right now.
    ///
    /// `target_met` is `true` once this resource has no work left (nothing
    /// left to load, or nothing left to lay).  Returns the admitted truck;
    /// the caller changes its state and schedules the completion event.
    pub fn try_admit(&mut self, now: Minutes, target_met: bool) -> Option<TruckId> {
        if self.serving.is_some() || !self.is_active() || target_met {
            return None;
        }

        if now > self.free_since {
            self.idle_time += now - self.free_since;
            self.free_since = now;
        }

        let truck = self.queue.pop_front()?;
        self.serving = Some(truck);
        Some(truck)
    }

    /// Empty the serving slot at `now`.  Returns the truck that was being
    /// served.
    pub fn release(&mut self, now: Minutes) -> Option<TruckId> {
        let truck = self.serving.take();
        self.free_since = now;
        truck
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.activated_at.is_some()
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        self.serving.is_none()
    }

    #[inline]
    pub fn serving(&self) -> Option<TruckId> {
        self.serving
    }

    #[inline]
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Total minutes the slot sat free while the resource was active.
    #[inline]
    pub fn idle_time(&self) -> f64 {
        self.idle_time
    }

    #[inline]
    pub fn activated_at(&self) -> Option<Minutes> {
        self.activated_at
    }
}
