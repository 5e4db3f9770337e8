//! `EventQueue` — the pending-event timeline.
//!
//! # Structure
//!
//! Events are bucketed by time in a `BTreeMap<Minutes, VecDeque<Event>>`.
//! The first key is always the earliest pending time; within a bucket,
//! events leave in the order they arrived.  That gives both halves of the
//! ordering contract (time, then insertion) without a sequence counter.
//!
//! `BTreeMap` gives O(log B) insert and pop where B = number of distinct
//! pending times.  A run rarely has more than one pending event per truck
//! plus one snapshot, so B stays tiny.

use std::collections::{BTreeMap, VecDeque};

use pave_core::Minutes;

use crate::{Event, EventKind};

/// Time-ordered queue of pending events with FIFO tie-breaking.
#[derive(Default)]
pub struct EventQueue {
    inner: BTreeMap<Minutes, VecDeque<Event>>,
    /// Cached total event count for O(1) `len()`.
    total: usize,
    /// Pending events that are not snapshots.
    truck_events: usize,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `event`, keeping time order.
    ///
    /// An event with the same time as already-queued events is placed after
    /// them.
    pub fn schedule(&mut self, event: Event) {
        if event.kind.is_truck_event() {
            self.truck_events += 1;
        }
        self.inner.entry(event.time).or_default().push_back(event);
        self.total += 1;
    }

    /// Remove and return the earliest event, or `None` if nothing is pending.
    pub fn pop_earliest(&mut self) -> Option<Event> {
        let mut bucket = self.inner.first_entry()?;
        let event = bucket.get_mut().pop_front()?;
        if bucket.get().is_empty() {
            bucket.remove();
        }
        self.total -= 1;
        if event.kind.is_truck_event() {
            self.truck_events -= 1;
        }
        Some(event)
    }

    /// Time of the earliest pending event, or `None` if empty.
    pub fn peek_time(&self) -> Option<Minutes> {
        self.inner.keys().next().copied()
    }

    /// Total number of pending events.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Pending events that are not [`EventKind::Snapshot`].
    ///
    /// The driver stops rescheduling snapshots once this reaches zero, so a
    /// stalled run drains the queue instead of sampling forever.
    pub fn pending_truck_events(&self) -> usize {
        self.truck_events
    }

    /// Number of pending events of `kind`.  O(n); meant for tests and
    /// diagnostics.
    pub fn count_kind(&self, kind: EventKind) -> usize {
        self.inner
            .values()
            .flat_map(|bucket| bucket.iter())
            .filter(|e| e.kind == kind)
            .count()
    }
}
