//! `pave-schedule` — the pending-event timeline.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`event`]       | `Event`, `EventKind`                                    |
//! | [`event_queue`] | `EventQueue` (`BTreeMap<Minutes, VecDeque<Event>>`)     |
//!
//! # Ordering contract
//!
//! ```text
//! pop order = ascending event time
//!             then insertion order among events with the same time
//! ```
//!
//! There is no other tie-break: a loading completion and a snapshot due at
//! the same minute come out in the order they were scheduled.

pub mod event;
pub mod event_queue;

#[cfg(test)]
mod tests;

pub use event::{Event, EventKind};
pub use event_queue::EventQueue;
