//! Sweep definition: base scenario plus the two ranges to search.

use pave_core::BaseParameters;

use crate::{OptimizeError, OptimizeResult};

/// What to sweep.
///
/// Every `(trucks, queue)` pair with `trucks` in `min_trucks..=max_trucks`
/// and `queue` in `min_queue..=min(max_queue, trucks)` is one grid point.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizationParams {
    pub base: BaseParameters,

    pub min_trucks: u32,
    pub max_trucks: u32,

    pub min_queue: u32,
    pub max_queue: u32,
}

impl OptimizationParams {
    /// Sweep `min_trucks..=max_trucks` × `1..=max_queue` over `base`.
    pub fn new(base: BaseParameters, min_trucks: u32, max_trucks: u32, max_queue: u32) -> Self {
        Self {
            base,
            min_trucks,
            max_trucks,
            min_queue: 1,
            max_queue,
        }
    }

    /// Reject sweeps that cannot contain a single run.
    ///
    /// Individual grid points that turn out infeasible are not errors; they
    /// are dropped by the sweep.
    pub fn validate(&self) -> OptimizeResult<()> {
        if self.min_trucks > self.max_trucks {
            return Err(OptimizeError::EmptyRange {
                what: "fleet size",
                min:  self.min_trucks,
                max:  self.max_trucks,
            });
        }
        if self.min_queue > self.max_queue {
            return Err(OptimizeError::EmptyRange {
                what: "initial queue",
                min:  self.min_queue,
                max:  self.max_queue,
            });
        }
        self.base.validate()?;
        Ok(())
    }

    /// All `(trucks, queue)` grid points in sweep order: trucks ascending,
    /// then queue ascending.
    pub fn grid(&self) -> Vec<(u32, u32)> {
        (self.min_trucks..=self.max_trucks)
            .flat_map(|trucks| {
                let top = self.max_queue.min(trucks);
                (self.min_queue..=top).map(move |queue| (trucks, queue))
            })
            .collect()
    }
}

impl Default for OptimizationParams {
    /// The reference sweep: 3–13 trucks, thresholds 1–8.
    fn default() -> Self {
        Self::new(BaseParameters::default(), 3, 13, 8)
    }
}
