//! The `Sim` struct and its event loop.

use pave_core::{Minutes, SimConfig, SimulationParameters, TruckId, TruckRng};
use pave_schedule::{Event, EventKind, EventQueue};
use tracing::{debug, trace, warn};

use crate::resource::ResourceController;
use crate::result::utilization;
use crate::{
    QueueSnapshot, RunOutcome, SimObserver, SimulationResult, StateCounts, Truck, TruckState,
};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// One simulation run.
///
/// `Sim` owns every piece of mutable run state: the truck table, the event
/// timeline, both controllers and the running totals.  Nothing is shared
/// between instances, so independent runs can execute on different threads.
///
/// The run moves through:
///
/// 1. **Initializing**: schedule the t = 0 snapshot and let the plant admit
///    its first truck.
/// 2. **Running**: pop the earliest event, advance the clock, dispatch it,
///    then give both controllers a chance to admit.
/// 3. **Completed** once every ton is laid, or **Exhausted** if the
///    timeline drains first.
///
/// Create via [`SimBuilder`][crate::SimBuilder]; [`run`](Self::run) consumes
/// the instance.
pub struct Sim {
    pub params: SimulationParameters,
    pub config: SimConfig,

    /// Time of the event being processed.
    pub clock: Minutes,

    /// Indexed by `TruckId`.
    pub trucks: Vec<Truck>,

    /// Per-truck speed RNGs, parallel to `trucks`.
    pub(crate) rngs: Vec<TruckRng>,

    pub events: EventQueue,

    pub plant: ResourceController,
    pub paver: ResourceController,

    /// Cumulative tons loaded.
    pub produced: f64,
    /// Cumulative tons laid.
    pub laid: f64,

    pub(crate) snapshots:          Vec<QueueSnapshot>,
    pub(crate) last_unload:        Option<Minutes>,
    pub(crate) longest_unload_gap: f64,
    pub(crate) events_processed:   u64,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run to a terminal state and return the result.
    ///
    /// Calls observer hooks along the way.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(mut self, observer: &mut O) -> SimulationResult {
        self.initialize();

        let outcome = loop {
            if self.target_met() {
                break RunOutcome::Completed;
            }
            let Some(event) = self.events.pop_earliest() else {
                break RunOutcome::Exhausted;
            };

            debug_assert!(event.time >= self.clock, "event scheduled in the past");
            self.clock = event.time;
            self.events_processed += 1;
            trace!(time = self.clock.0, kind = %event.kind, truck = ?event.truck, "event");

            observer.on_event(&event);
            self.dispatch(event, observer);
            self.admit_plant();
            self.admit_paver();
        };

        self.finish(outcome, observer)
    }

    /// A snapshot of the current state without recording it.
    pub fn sample(&self) -> QueueSnapshot {
        QueueSnapshot {
            time:       self.clock,
            counts:     StateCounts::from_trucks(&self.trucks),
            produced:   self.produced,
            laid:       self.laid,
            plant_idle: self.plant.is_free(),
            paver_idle: self.paver.is_active() && self.paver.is_free(),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    fn initialize(&mut self) {
        self.events.schedule(Event::snapshot(Minutes::ZERO));
        self.admit_plant();
    }

    fn finish<O: SimObserver>(mut self, outcome: RunOutcome, observer: &mut O) -> SimulationResult {
        self.record_snapshot(observer);

        let end = self.clock;
        let total_time = end.0;
        let paver_idle = self.paver.idle_time();
        let window_duration = self
            .paver
            .activated_at()
            .map_or(0.0, |start| end.since(start));

        debug!(
            ?outcome,
            total_time,
            paver_idle,
            laid = self.laid,
            events = self.events_processed,
            "run finished"
        );

        let result = SimulationResult {
            snapshots:            std::mem::take(&mut self.snapshots),
            outcome,
            completed:            outcome == RunOutcome::Completed,
            total_time,
            plant_idle_time:      self.plant.idle_time(),
            plant_utilization:    utilization(total_time, self.plant.idle_time()),
            paver_idle_time:      paver_idle,
            paver_utilization:    utilization(total_time, paver_idle),
            paver_activated_at:   self.paver.activated_at(),
            window_idle_time:     paver_idle,
            window_duration,
            window_utilization:   utilization(window_duration, paver_idle),
            longest_unload_gap:   self.longest_unload_gap,
            avg_trucks_in_system: self.params.fleet_size as f64,
            events_processed:     self.events_processed,
            deliveries:           self.trucks.iter().map(|t| t.deliveries).collect(),
        };
        observer.on_run_end(&result);
        result
    }

    // ── Dispatch ──────────────────────────────────────────────────────────

    fn dispatch<O: SimObserver>(&mut self, event: Event, observer: &mut O) {
        if event.kind == EventKind::Snapshot {
            self.on_snapshot_due(observer);
            return;
        }
        let Some(truck) = event.truck else {
            warn!(kind = %event.kind, "truck event without a truck; ignored");
            return;
        };
        match event.kind {
            EventKind::PlantArrival      => self.on_plant_arrival(truck),
            EventKind::LoadingComplete   => self.on_loading_complete(truck),
            EventKind::PaverArrival      => self.on_paver_arrival(truck, observer),
            EventKind::UnloadingComplete => self.on_unloading_complete(truck),
            EventKind::Snapshot          => {}
        }
    }

    fn on_snapshot_due<O: SimObserver>(&mut self, observer: &mut O) {
        self.record_snapshot(observer);
        // Only keep sampling while trucks still have something scheduled;
        // otherwise the timeline could never drain.
        if self.events.pending_truck_events() > 0 {
            let next = self.clock + self.config.snapshot_interval;
            self.events.schedule(Event::snapshot(next));
        }
    }

    fn on_plant_arrival(&mut self, id: TruckId) {
        self.trucks[id.index()].enter(TruckState::QueuedAtPlant, self.clock);
        self.plant.enqueue(id);
    }

    fn on_loading_complete(&mut self, id: TruckId) {
        let now = self.clock;
        self.plant.release(now);

        let target = self.params.base.target_quantity;
        let capacity = self.params.base.unit_capacity;
        let remaining = (target - self.produced).max(0.0);
        let load = if capacity >= remaining {
            // Snap to the target so float residue can't trigger an extra load.
            self.produced = target;
            remaining
        } else {
            self.produced += capacity;
            capacity
        };

        let speed = self.rngs[id.index()].speed(self.params.base.loaded_speed);
        let arrival = now + Minutes::for_trip(self.params.base.distance, speed);

        let truck = &mut self.trucks[id.index()];
        truck.load = load;
        truck.enter(TruckState::TravelingLoaded, now);
        truck.speed = Some(speed);

        self.events.schedule(Event::truck(arrival, EventKind::PaverArrival, id));
    }

    fn on_paver_arrival<O: SimObserver>(&mut self, id: TruckId, observer: &mut O) {
        let now = self.clock;
        self.trucks[id.index()].enter(TruckState::QueuedAtPaver, now);
        self.paver.enqueue(id);

        if !self.paver.is_active()
            && self.paver.queue_len() >= self.params.initial_queue as usize
            && self.paver.activate(now)
        {
            debug!(time = now.0, queue = self.paver.queue_len(), "paver activated");
            observer.on_paver_activated(now);
        }
    }

    fn on_unloading_complete(&mut self, id: TruckId) {
        let now = self.clock;
        self.paver.release(now);

        let target = self.params.base.target_quantity;
        let remaining = (target - self.laid).max(0.0);
        let carried = self.trucks[id.index()].load;
        if carried >= remaining {
            self.laid = target;
        } else {
            self.laid += carried;
        }

        if self.paver.is_active() {
            if let Some(prev) = self.last_unload {
                self.longest_unload_gap = self.longest_unload_gap.max(now.since(prev));
            }
        }
        self.last_unload = Some(now);

        let truck = &mut self.trucks[id.index()];
        truck.load = 0.0;
        truck.deliveries += 1;

        if self.laid >= target {
            truck.enter(TruckState::Retired, now);
            debug!(time = now.0, truck = %id, "target laid; truck retired");
            return;
        }

        let speed = self.rngs[id.index()].speed(self.params.base.empty_speed);
        let arrival = now + Minutes::for_trip(self.params.base.distance, speed);
        truck.enter(TruckState::TravelingEmpty, now);
        truck.speed = Some(speed);

        self.events.schedule(Event::truck(arrival, EventKind::PlantArrival, id));
    }

    // ── Admission ─────────────────────────────────────────────────────────

    fn admit_plant(&mut self) {
        let done = self.produced >= self.params.base.target_quantity;
        if let Some(id) = self.plant.try_admit(self.clock, done) {
            self.trucks[id.index()].enter(TruckState::Loading, self.clock);
            let at = self.clock + self.params.base.loading_duration;
            self.events.schedule(Event::truck(at, EventKind::LoadingComplete, id));
        }
    }

    fn admit_paver(&mut self) {
        let done = self.target_met();
        if let Some(id) = self.paver.try_admit(self.clock, done) {
            self.trucks[id.index()].enter(TruckState::Unloading, self.clock);
            let at = self.clock + self.params.base.unloading_duration;
            self.events.schedule(Event::truck(at, EventKind::UnloadingComplete, id));
        }
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    #[inline]
    fn target_met(&self) -> bool {
        self.laid >= self.params.base.target_quantity
    }

    fn record_snapshot<O: SimObserver>(&mut self, observer: &mut O) {
        let snapshot = self.sample();
        observer.on_snapshot(&snapshot);
        self.snapshots.push(snapshot);
    }
}
