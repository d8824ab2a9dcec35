use std::fmt;

use crate::domain::generator::DeltaSource;

/// Kind of airport operation an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// The aircraft requests or occupies a runway to land.
    Landing,
    /// The aircraft requests or occupies a runway to take off.
    Takeoff,
}

/// Phase of an airport operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationPhase {
    /// The operation starts on time: first request for a runway.
    Attempt,
    /// The operation was delayed at least once because no runway was free.
    Retry,
    /// End of the runway occupancy for the operation.
    Completion,
}

/// A single occurrence during the simulation.
///
/// Events are immutable values: they are created by one of the
/// [`EventFactory`] operations, owned by the event queue, and consumed
/// exactly once by the simulation loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunwayEvent {
    /// Unique, monotonically increasing event identifier.
    event_id: u64,

    /// Identifier of the aircraft the event belongs to, shared across the
    /// whole lifecycle of that aircraft's events.
    aircraft_id: u64,

    /// Instant the event occurs, in seconds since simulation start.
    time: u64,

    kind: OperationKind,
    phase: OperationPhase,
}

impl RunwayEvent {
    pub fn event_id(&self) -> u64 {
        self.event_id
    }

    pub fn aircraft_id(&self) -> u64 {
        self.aircraft_id
    }

    pub fn time(&self) -> u64 {
        self.time
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn phase(&self) -> OperationPhase {
        self.phase
    }

    pub fn is_landing(&self) -> bool {
        self.kind == OperationKind::Landing
    }

    pub fn is_takeoff(&self) -> bool {
        self.kind == OperationKind::Takeoff
    }

    pub fn is_attempt(&self) -> bool {
        self.phase == OperationPhase::Attempt
    }

    pub fn is_retry(&self) -> bool {
        self.phase == OperationPhase::Retry
    }

    pub fn is_completion(&self) -> bool {
        self.phase == OperationPhase::Completion
    }

    /// True if this event occurs strictly before `other`.
    pub fn before(&self, other: &RunwayEvent) -> bool {
        self.time < other.time
    }
}

impl fmt::Display for RunwayEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RunwayEvent: ID={}, T={}\t{:?}_{:?}({})",
            self.event_id, self.time, self.phase, self.kind, self.aircraft_id
        )
    }
}

/// Factory for the events of one simulation run.
///
/// Owns the event-id counter, so runs are independent and reproducible:
/// two simulations never share identifier state.
#[derive(Debug, Default)]
pub struct EventFactory {
    next_event_id: u64,
}

impl EventFactory {
    pub fn new() -> EventFactory {
        EventFactory { next_event_id: 0 }
    }

    /// Allocates the next event id. A `None` aircraft means "new
    /// aircraft": the aircraft inherits the fresh event id, which keeps
    /// every aircraft traceable to its arrival event.
    fn build(&mut self, aircraft: Option<u64>, phase: OperationPhase, kind: OperationKind, time: u64) -> RunwayEvent {
        let event_id = self.next_event_id;
        self.next_event_id += 1;
        let aircraft_id = aircraft.unwrap_or(event_id);
        RunwayEvent { event_id, aircraft_id, time, kind, phase }
    }

    /// Generates the arrival of a new aircraft at the airport's airspace:
    /// a landing attempt at `previous.time + inter_arrival_delta()`, or at
    /// the bare delta when there is no previous arrival.
    pub fn arrival(&mut self, previous: Option<&RunwayEvent>, deltas: &mut dyn DeltaSource) -> RunwayEvent {
        let mut time = deltas.inter_arrival_delta();
        if let Some(previous) = previous {
            time += previous.time;
        }
        let event = self.build(None, OperationPhase::Attempt, OperationKind::Landing, time);
        log::info!("arrival    {}", event);
        event
    }

    /// Generates the retry of a rejected runway request, for the same
    /// aircraft and kind, after the generator's retry delay.
    pub fn retry(&mut self, request: &RunwayEvent, deltas: &mut dyn DeltaSource) -> RunwayEvent {
        let time = request.time + deltas.retry_delay();
        let event = self.build(Some(request.aircraft_id), OperationPhase::Retry, request.kind, time);
        log::info!("retry      {}", event);
        event
    }

    /// Generates the completion of a granted runway request, one slot
    /// after the request.
    pub fn completion(&mut self, request: &RunwayEvent, slot_duration: u64) -> RunwayEvent {
        let time = request.time + slot_duration;
        let event = self.build(Some(request.aircraft_id), OperationPhase::Completion, request.kind, time);
        log::info!("completion {}", event);
        event
    }

    /// Generates the takeoff attempt that follows a completed landing,
    /// once ground handling is over.
    pub fn departure(&mut self, landing_completion: &RunwayEvent, deltas: &mut dyn DeltaSource) -> RunwayEvent {
        let time = landing_completion.time + deltas.ground_duration();
        let event = self.build(Some(landing_completion.aircraft_id), OperationPhase::Attempt, OperationKind::Takeoff, time);
        log::info!("departure  {}", event);
        event
    }

    /// Generates a bare landing-attempt event at the given instant.
    ///
    /// Fixture for time-ordering tests of the event queue only; the
    /// simulation loop never produces events this way.
    pub fn fixture(&mut self, time: u64) -> RunwayEvent {
        self.build(None, OperationPhase::Attempt, OperationKind::Landing, time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generator::FixedDeltaSource;

    #[test]
    fn arrival_chains_from_previous_arrival() {
        let mut factory = EventFactory::new();
        let mut deltas = FixedDeltaSource { inter_arrival: 10, ground: 0, retry: 0 };

        let first = factory.arrival(None, &mut deltas);
        assert_eq!(first.time(), 10);
        assert!(first.is_landing() && first.is_attempt());

        let second = factory.arrival(Some(&first), &mut deltas);
        assert_eq!(second.time(), 20);
        assert_ne!(second.aircraft_id(), first.aircraft_id());
    }

    #[test]
    fn event_ids_are_unique_and_monotonic() {
        let mut factory = EventFactory::new();
        let mut deltas = FixedDeltaSource::zero();
        let a = factory.arrival(None, &mut deltas);
        let b = factory.arrival(Some(&a), &mut deltas);
        let c = factory.retry(&b, &mut deltas);
        assert!(a.event_id() < b.event_id());
        assert!(b.event_id() < c.event_id());
    }

    #[test]
    fn retry_keeps_kind_and_aircraft() {
        let mut factory = EventFactory::new();
        let mut deltas = FixedDeltaSource { inter_arrival: 0, ground: 0, retry: 30 };
        let request = factory.arrival(None, &mut deltas);
        let retry = factory.retry(&request, &mut deltas);
        assert_eq!(retry.aircraft_id(), request.aircraft_id());
        assert_eq!(retry.kind(), request.kind());
        assert!(retry.is_retry());
        assert_eq!(retry.time(), request.time() + 30);
    }

    #[test]
    fn completion_adds_slot_duration() {
        let mut factory = EventFactory::new();
        let mut deltas = FixedDeltaSource::zero();
        let request = factory.arrival(None, &mut deltas);
        let completion = factory.completion(&request, 120);
        assert_eq!(completion.time(), request.time() + 120);
        assert!(completion.is_completion());
        assert_eq!(completion.kind(), request.kind());
        assert_eq!(completion.aircraft_id(), request.aircraft_id());
    }

    #[test]
    fn departure_follows_landing_completion() {
        let mut factory = EventFactory::new();
        let mut deltas = FixedDeltaSource { inter_arrival: 5, ground: 600, retry: 0 };
        let arrival = factory.arrival(None, &mut deltas);
        let landed = factory.completion(&arrival, 120);
        let departure = factory.departure(&landed, &mut deltas);
        assert!(departure.is_takeoff() && departure.is_attempt());
        assert_eq!(departure.aircraft_id(), arrival.aircraft_id());
        assert_eq!(departure.time(), landed.time() + 600);
    }

    #[test]
    fn timestamps_never_decrease_along_a_lifecycle() {
        let mut factory = EventFactory::new();
        let mut deltas = FixedDeltaSource { inter_arrival: 7, ground: 11, retry: 13 };
        let arrival = factory.arrival(None, &mut deltas);
        let retry = factory.retry(&arrival, &mut deltas);
        let completion = factory.completion(&retry, 120);
        let departure = factory.departure(&completion, &mut deltas);
        assert!(arrival.time() <= retry.time());
        assert!(retry.time() <= completion.time());
        assert!(completion.time() <= departure.time());
    }
}
