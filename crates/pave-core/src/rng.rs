//! Deterministic per-truck RNG and seed derivation.
//!
//! # Determinism strategy
//!
//! Each truck gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (truck_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive truck IDs uniformly across the seed space.
//! A truck's speed draws therefore depend only on the seed and on how many
//! trips that truck has made, not on how its trips interleave with others.
//!
//! The optimizer derives one global seed per grid point with [`grid_seed`],
//! so a sweep gives the same answer whether it runs sequentially or on a
//! thread pool.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{SpeedRange, TruckId};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── TruckRng ──────────────────────────────────────────────────────────────────

/// Per-truck deterministic RNG.
///
/// Created once per truck when a run is built and stored in a `Vec` parallel
/// to the truck table.
pub struct TruckRng(SmallRng);

impl TruckRng {
    /// Seed deterministically from the run's global seed and a truck ID.
    pub fn new(global_seed: u64, truck: TruckId) -> Self {
        let seed = global_seed ^ (truck.0 as u64).wrapping_mul(MIXING_CONSTANT);
        TruckRng(SmallRng::seed_from_u64(seed))
    }

    /// Draw a speed uniformly from `range` (inclusive).
    ///
    /// A degenerate range returns `min` without touching the generator, so
    /// fixed-speed scenarios are exact.
    #[inline]
    pub fn speed(&mut self, range: SpeedRange) -> f64 {
        if range.is_fixed() {
            range.min
        } else {
            self.0.gen_range(range.min..=range.max)
        }
    }
}

// ── Grid seeds ────────────────────────────────────────────────────────────────

/// Derive the global seed for one optimizer grid point.
///
/// Mixes `fleet_size` and `initial_queue` into `seed` so neighbouring grid
/// points get unrelated streams.
pub fn grid_seed(seed: u64, fleet_size: u32, initial_queue: u32) -> u64 {
    let point = ((fleet_size as u64) << 32) | initial_queue as u64;
    seed ^ point.wrapping_add(1).wrapping_mul(MIXING_CONSTANT).rotate_left(17)
}
