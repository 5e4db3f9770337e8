//! Simulation time model.
//!
//! # Design
//!
//! Time is continuous: a `Minutes` value is the number of simulated minutes
//! since the run started.  Travel times come from random speeds, so an
//! integer tick would force rounding into every trip; instead `Minutes`
//! wraps an `f64` and supplies a total order (`f64::total_cmp`) so it can
//! key a `BTreeMap` in the event queue.
//!
//! Parameter validation rejects non-finite inputs, so every `Minutes` the
//! simulator produces is finite and the total order agrees with `<`.

use std::cmp::Ordering;
use std::fmt;

/// Default spacing between periodic queue snapshots.
pub const DEFAULT_SNAPSHOT_INTERVAL: Minutes = Minutes(5.0);

/// Default master seed.
pub const DEFAULT_SEED: u64 = 42;

// ── Minutes ──────────────────────────────────────────────────────────────────

/// An absolute simulation time (or a duration) in minutes.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minutes(pub f64);

impl Minutes {
    pub const ZERO: Minutes = Minutes(0.0);

    /// Minutes elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: Minutes) -> f64 {
        self.0 - earlier.0
    }

    /// Travel time in minutes for `distance_km` at `speed_kmh`.
    #[inline]
    pub fn for_trip(distance_km: f64, speed_kmh: f64) -> Minutes {
        Minutes(distance_km / speed_kmh * 60.0)
    }
}

impl PartialEq for Minutes {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for Minutes {}

impl PartialOrd for Minutes {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Minutes {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add<f64> for Minutes {
    type Output = Minutes;
    #[inline]
    fn add(self, rhs: f64) -> Minutes {
        Minutes(self.0 + rhs)
    }
}

impl std::ops::Add for Minutes {
    type Output = Minutes;
    #[inline]
    fn add(self, rhs: Minutes) -> Minutes {
        Minutes(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Minutes {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: Minutes) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.2}min", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run-level configuration that is not part of the physical scenario.
///
/// The same `SimulationParameters` with the same `SimConfig` always produce
/// identical results.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Master RNG seed.  Each truck derives its own stream from it.
    pub seed: u64,

    /// Spacing between periodic snapshots.  Default: 5 minutes.
    pub snapshot_interval: Minutes,
}

impl SimConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed, ..Self::default() }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:              DEFAULT_SEED,
            snapshot_interval: DEFAULT_SNAPSHOT_INTERVAL,
        }
    }
}
