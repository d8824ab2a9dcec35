use crate::domain::controller::RunwayController;
use crate::domain::event::{EventFactory, RunwayEvent};
use crate::domain::generator::{DeltaSource, RandomGenerator};
use crate::domain::params::Params;
use crate::domain::queue::EventQueue;
use crate::domain::statistics::Statistics;
use crate::error::Result;

/// Drives one simulation run: pulls the earliest event from the queue,
/// applies the runway-contention state machine, and pushes the resulting
/// follow-up events back into the queue.
///
/// Generic over the delta source so tests can run fully deterministic
/// scenarios with a fixed-delta stub.
#[derive(Debug)]
pub struct Simulation<D: DeltaSource> {
    deltas: D,
    controller: RunwayController,
    factory: EventFactory,
    queue: EventQueue,
}

impl<D: DeltaSource> Simulation<D> {
    pub fn new(deltas: D, runways: u32, slot_duration: u64) -> Simulation<D> {
        Simulation {
            deltas,
            controller: RunwayController::new(runways, slot_duration),
            factory: EventFactory::new(),
            queue: EventQueue::new(),
        }
    }

    /// Applies the state machine to one dequeued event and returns the
    /// follow-up event it produces, if any.
    ///
    /// - Landing/Takeoff Attempt or Retry: allocate a runway and schedule
    ///   the Completion if one is free, otherwise schedule a Retry.
    /// - Landing Completion: release the runway and schedule the takeoff
    ///   attempt that follows ground handling.
    /// - Takeoff Completion: release the runway; the aircraft's lifecycle
    ///   ends, no follow-up.
    fn step(&mut self, event: &RunwayEvent) -> Result<Option<RunwayEvent>> {
        if event.is_completion() {
            self.controller.release(event)?;
            if event.is_landing() {
                return Ok(Some(self.factory.departure(event, &mut self.deltas)));
            }
            return Ok(None);
        }

        // Attempt or Retry: the aircraft contends for a runway.
        if self.controller.free() > 0 {
            self.controller.allocate(event)?;
            Ok(Some(self.factory.completion(event, self.controller.slot_duration())))
        } else {
            Ok(Some(self.factory.retry(event, &mut self.deltas)))
        }
    }

    /// Runs the simulation until the time horizon.
    ///
    /// The queue is seeded with the first arrival. Each processed landing
    /// attempt also chains the next arrival into the queue, so there is
    /// always at most one pending arrival. The first extracted event with
    /// a timestamp beyond the horizon terminates the run unprocessed.
    pub fn run(&mut self, horizon: u64) -> Result<()> {
        log::info!("Simulation starts (horizon={})", horizon);

        let mut current = self.factory.arrival(None, &mut self.deltas);
        while current.time() <= horizon {
            let follow_up = self.step(&current)?;
            self.queue.insert(follow_up);

            if current.is_landing() && current.is_attempt() {
                let next_arrival = self.factory.arrival(Some(&current), &mut self.deltas);
                self.queue.insert(Some(next_arrival));
            }

            log::debug!("{} events pending", self.queue.len());
            let Some(next) = self.queue.extract() else {
                break;
            };
            current = next;
        }

        log::info!("Simulation over: {}", self.controller);
        Ok(())
    }

    /// Closes the statistics at `at` and returns the final snapshot,
    /// consuming the simulation.
    pub fn into_statistics(self, at: u64) -> Result<Statistics> {
        self.controller.into_statistics(at)
    }

    pub fn controller(&self) -> &RunwayController {
        &self.controller
    }
}

/// Runs one complete simulation with the given parameters up to the time
/// horizon, and returns the closed statistics snapshot.
///
/// This is the crate's entry point: it wires the seeded random generator,
/// the runway controller and the event factory together, runs the loop
/// and closes the statistics at the horizon.
pub fn run_simulation(params: &Params, horizon: u64) -> Result<Statistics> {
    log::info!("Simulation parameters: {:?}", params);

    let generator = RandomGenerator::new(params);
    let mut simulation = Simulation::new(generator, params.runways, params.slot_duration);
    simulation.run(horizon)?;
    simulation.into_statistics(horizon)
}
