//! `pave-core` — foundational types for the paving-loop simulator.
//!
//! This crate is a dependency of every other `pave-*` crate.  It has no
//! `pave-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `TruckId`                                             |
//! | [`time`]        | `Minutes`, `SimConfig`                                |
//! | [`rng`]         | `TruckRng` (per-truck), `grid_seed`                   |
//! | [`params`]      | `SimulationParameters`, `BaseParameters`, `SpeedRange`|
//! | [`error`]       | `ParamError`, `ParamResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ParamError, ParamResult};
pub use ids::TruckId;
pub use params::{BaseParameters, SimulationParameters, SpeedRange};
pub use rng::{TruckRng, grid_seed};
pub use time::{Minutes, SimConfig};
