//! Unit tests for pave-schedule.

use pave_core::{Minutes, TruckId};

use crate::{Event, EventKind, EventQueue};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn arrive(t: f64, truck: u32) -> Event {
    Event::truck(Minutes(t), EventKind::PaverArrival, TruckId(truck))
}

fn drain(q: &mut EventQueue) -> Vec<Event> {
    std::iter::from_fn(|| q.pop_earliest()).collect()
}

// ── EventQueue ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod event_queue {
    use super::*;

    #[test]
    fn empty_queue() {
        let mut q = EventQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
        assert!(q.peek_time().is_none());
        assert!(q.pop_earliest().is_none());
    }

    #[test]
    fn pops_in_time_order() {
        let mut q = EventQueue::new();
        q.schedule(arrive(30.0, 0));
        q.schedule(arrive(10.5, 1));
        q.schedule(arrive(20.0, 2));
        assert_eq!(q.peek_time(), Some(Minutes(10.5)));

        let times: Vec<f64> = drain(&mut q).iter().map(|e| e.time.0).collect();
        assert_eq!(times, vec![10.5, 20.0, 30.0]);
        assert!(q.is_empty());
    }

    #[test]
    fn same_time_is_fifo() {
        let mut q = EventQueue::new();
        q.schedule(arrive(5.0, 3));
        q.schedule(Event::snapshot(Minutes(5.0)));
        q.schedule(arrive(5.0, 1));
        q.schedule(arrive(1.0, 9));

        let order: Vec<(EventKind, Option<TruckId>)> =
            drain(&mut q).iter().map(|e| (e.kind, e.truck)).collect();
        assert_eq!(
            order,
            vec![
                (EventKind::PaverArrival, Some(TruckId(9))),
                (EventKind::PaverArrival, Some(TruckId(3))),
                (EventKind::Snapshot, None),
                (EventKind::PaverArrival, Some(TruckId(1))),
            ]
        );
    }

    #[test]
    fn interleaved_schedule_and_pop() {
        let mut q = EventQueue::new();
        q.schedule(arrive(10.0, 0));
        q.schedule(arrive(20.0, 1));
        let first = q.pop_earliest().unwrap();
        assert_eq!(first.time, Minutes(10.0));

        // Scheduled after a pop but earlier than what remains.
        q.schedule(arrive(15.0, 2));
        let rest: Vec<u32> = drain(&mut q).iter().map(|e| e.truck.unwrap().0).collect();
        assert_eq!(rest, vec![2, 1]);
    }

    #[test]
    fn counts_truck_events_separately() {
        let mut q = EventQueue::new();
        q.schedule(Event::snapshot(Minutes(0.0)));
        q.schedule(arrive(3.0, 0));
        assert_eq!(q.len(), 2);
        assert_eq!(q.pending_truck_events(), 1);
        assert_eq!(q.count_kind(EventKind::Snapshot), 1);

        q.pop_earliest(); // snapshot
        assert_eq!(q.pending_truck_events(), 1);
        q.pop_earliest(); // arrival
        assert_eq!(q.pending_truck_events(), 0);
        assert!(q.is_empty());
    }
}

// ── Event ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod event {
    use super::*;

    #[test]
    fn constructors() {
        let e = Event::truck(Minutes(2.0), EventKind::LoadingComplete, TruckId(4));
        assert_eq!(e.truck, Some(TruckId(4)));
        assert!(e.kind.is_truck_event());

        let s = Event::snapshot(Minutes(5.0));
        assert_eq!(s.truck, None);
        assert!(!s.kind.is_truck_event());
    }

    #[test]
    fn kind_display() {
        assert_eq!(EventKind::UnloadingComplete.to_string(), "unloading-complete");
        assert_eq!(EventKind::Snapshot.to_string(), "snapshot");
    }
}
