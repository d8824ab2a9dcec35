use std::fmt;

use crate::domain::event::RunwayEvent;
use crate::domain::statistics::Statistics;
use crate::error::{Error, Result};

/// Tracks the runway capacity of the airport and forwards every processed
/// event to the statistics accumulator.
///
/// The free-runway count only ever changes through [`allocate`] and
/// [`release`], which are paired 1:1 with Attempt/Retry and Completion
/// events by the simulation loop; 0 ≤ free ≤ total holds at all times.
///
/// [`allocate`]: RunwayController::allocate
/// [`release`]: RunwayController::release
#[derive(Debug)]
pub struct RunwayController {
    /// Total number of runways of the airport.
    total: u32,

    /// Number of currently free runways.
    free: u32,

    /// Duration of one runway slot, in seconds.
    slot_duration: u64,

    statistics: Statistics,
}

impl RunwayController {
    /// Creates a controller with all `total` runways free.
    pub fn new(total: u32, slot_duration: u64) -> RunwayController {
        RunwayController { total, free: total, slot_duration, statistics: Statistics::new() }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn free(&self) -> u32 {
        self.free
    }

    pub fn slot_duration(&self) -> u64 {
        self.slot_duration
    }

    /// Occupies one runway for the requesting event and registers the
    /// event with the statistics.
    ///
    /// The request must be an Attempt or Retry; anything else is a wiring
    /// defect of the caller (`InvalidEventPhase`). Driving the free count
    /// below zero means the caller allocated without checking
    /// availability; that breaks the capacity invariant and is fatal
    /// (`RunwayInvariant`).
    pub fn allocate(&mut self, request: &RunwayEvent) -> Result<()> {
        if !(request.is_attempt() || request.is_retry()) {
            return Err(Error::InvalidEventPhase {
                operation: "allocate",
                expected: "Attempt or Retry",
                found: request.phase(),
            });
        }
        if self.free == 0 {
            return Err(Error::RunwayInvariant(format!("all {} runways already occupied at T={}", self.total, request.time())));
        }
        self.free -= 1;
        log::debug!("allocated runway for {} ({} free)", request, self.free);

        self.statistics.register(request);
        Ok(())
    }

    /// Frees the runway occupied by a finished operation and registers
    /// the event with the statistics.
    ///
    /// The event must be a Completion (`InvalidEventPhase` otherwise);
    /// freeing beyond the total count means allocate/release got
    /// unpaired, which is fatal (`RunwayInvariant`).
    pub fn release(&mut self, completion: &RunwayEvent) -> Result<()> {
        if !completion.is_completion() {
            return Err(Error::InvalidEventPhase {
                operation: "release",
                expected: "Completion",
                found: completion.phase(),
            });
        }
        if self.free == self.total {
            return Err(Error::RunwayInvariant(format!("all {} runways already free at T={}", self.total, completion.time())));
        }
        self.free += 1;
        log::debug!("released runway for {} ({} free)", completion, self.free);

        self.statistics.register(completion);
        Ok(())
    }

    /// Read access to the accumulated statistics.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Closes the statistics at `at` and hands out the final snapshot,
    /// consuming the controller.
    pub fn into_statistics(mut self, at: u64) -> Result<Statistics> {
        self.statistics.close(at)?;
        Ok(self.statistics)
    }
}

impl fmt::Display for RunwayController {
    /// Current occupancy and punctuality summary.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = &self.statistics;
        let on_runways = self.total - self.free;
        let on_time = stats.on_time_landings() + stats.on_time_takeoffs();
        let delayed = stats.delayed_landings() + stats.delayed_takeoffs();
        let total_ops = on_time + delayed;
        let punctuality = if total_ops > 0 { (100 * on_time / total_ops) as f64 } else { 100.0 };

        write!(
            f,
            "T={} Occupancy= {}(airport) + {}(runways). Punctuality={}%",
            stats.last_event_time(),
            stats.on_airport(),
            on_runways,
            punctuality
        )
    }
}
