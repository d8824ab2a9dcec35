use std::fmt;

use crate::domain::event::RunwayEvent;
use crate::error::{Error, Result};

/// Accumulates occupancy and punctuality data over one simulation run.
///
/// The number of aircraft on the airport grounds is variable: it grows
/// whenever a landing completes and shrinks whenever a takeoff begins.
/// If the count was N1 during a time span T1, N2 during T2, and so on —
/// {N1, T1}, {N2, T2}, ... — the mean is
///
/// ```text
/// mean = (N1*T1 + N2*T2 + ...) / (T1 + T2 + ...)
/// ```
///
/// The running sum of products `Ni*Ti` is kept in `airport_time_integral`,
/// while the total time spans from 0 to the closing instant. The mean
/// number of aircraft on runways is computed the same way.
///
/// Every registered event first charges both running counts over the
/// interval since the last update (with the pre-update counts), then
/// applies the count deltas the event implies. The accumulator therefore
/// only stays consistent when events are registered in non-decreasing
/// timestamp order, which the simulation loop guarantees.
#[derive(Debug, Default)]
pub struct Statistics {
    /// Landings that started on time (first attempt found a free runway).
    on_time_landings: u32,

    /// Takeoffs that started on time.
    on_time_takeoffs: u32,

    /// Landings that started only after at least one retry.
    delayed_landings: u32,

    /// Takeoffs that started only after at least one retry.
    delayed_takeoffs: u32,

    /// Completed landing operations.
    completed_landings: u32,

    /// Completed takeoff operations.
    completed_takeoffs: u32,

    /// Aircraft currently on the airport grounds (between the end of
    /// their landing and the start of their takeoff).
    on_airport: i64,

    /// Largest on-airport count observed at any instant.
    max_on_airport: i64,

    /// Running sum of on-airport count × elapsed time, for the mean.
    airport_time_integral: i64,

    /// Aircraft currently occupying a runway (between the start and the
    /// end of an operation).
    on_runway: i64,

    /// Largest on-runway count observed at any instant.
    max_on_runway: i64,

    /// Running sum of on-runway count × elapsed time, for the mean.
    runway_time_integral: i64,

    /// Instant of the last change to either running count. Needed for the
    /// time-weighted means.
    last_change: u64,

    /// Instant of the last registered event. Guards close-time
    /// consistency.
    last_event: u64,
}

impl Statistics {
    pub fn new() -> Statistics {
        Statistics::default()
    }

    /// Registers one event and updates the derived data.
    ///
    /// Integration happens first, over the interval since the last update
    /// and with the counts as they were before this event; only then are
    /// the event's own count deltas applied.
    pub fn register(&mut self, event: &RunwayEvent) {
        let time = event.time();
        debug_assert!(time >= self.last_change, "events must be registered in non-decreasing time order");
        let elapsed = (time - self.last_change) as i64;
        self.runway_time_integral += self.on_runway * elapsed;
        self.airport_time_integral += self.on_airport * elapsed;
        self.last_change = time;
        self.last_event = time;

        if event.is_completion() {
            // End of operation: the runway frees up; a completed landing
            // puts the aircraft on the airport grounds.
            self.on_runway -= 1;
            if event.is_landing() {
                self.completed_landings += 1;
                self.on_airport += 1;
                self.max_on_airport = self.max_on_airport.max(self.on_airport);
            } else {
                self.completed_takeoffs += 1;
            }
        } else {
            // Start of operation: the runway is taken; a starting takeoff
            // removes the aircraft from the airport grounds.
            self.on_runway += 1;
            self.max_on_runway = self.max_on_runway.max(self.on_runway);
            if event.is_attempt() {
                if event.is_landing() {
                    self.on_time_landings += 1;
                } else {
                    self.on_time_takeoffs += 1;
                    self.on_airport -= 1;
                }
            } else if event.is_retry() {
                if event.is_landing() {
                    self.delayed_landings += 1;
                } else {
                    self.delayed_takeoffs += 1;
                    self.on_airport -= 1;
                }
            }
        }
    }

    /// Performs the final integration step up to `at`.
    ///
    /// Must be called when a simulation ends; otherwise the mean values
    /// only cover the span up to the last registered event.
    pub fn close(&mut self, at: u64) -> Result<()> {
        if at < self.last_event {
            return Err(Error::InconsistentCloseTime { close: at, last_event: self.last_event });
        }
        let elapsed = (at - self.last_change) as i64;
        self.airport_time_integral += self.on_airport * elapsed;
        self.runway_time_integral += self.on_runway * elapsed;
        self.last_change = at;
        self.last_event = at;
        Ok(())
    }

    pub fn on_time_landings(&self) -> u32 {
        self.on_time_landings
    }

    pub fn on_time_takeoffs(&self) -> u32 {
        self.on_time_takeoffs
    }

    pub fn delayed_landings(&self) -> u32 {
        self.delayed_landings
    }

    pub fn delayed_takeoffs(&self) -> u32 {
        self.delayed_takeoffs
    }

    pub fn completed_landings(&self) -> u32 {
        self.completed_landings
    }

    pub fn completed_takeoffs(&self) -> u32 {
        self.completed_takeoffs
    }

    /// Current number of aircraft on the airport grounds.
    pub fn on_airport(&self) -> i64 {
        self.on_airport
    }

    /// Largest number of aircraft simultaneously on the airport grounds.
    pub fn max_on_airport(&self) -> i64 {
        self.max_on_airport
    }

    /// Current number of aircraft occupying runways.
    pub fn on_runway(&self) -> i64 {
        self.on_runway
    }

    /// Largest number of aircraft simultaneously on runways.
    pub fn max_on_runway(&self) -> i64 {
        self.max_on_runway
    }

    /// Instant of the last registered event (or the closing instant once
    /// the statistics have been closed).
    pub fn last_event_time(&self) -> u64 {
        self.last_event
    }

    /// Mean number of aircraft on the airport grounds, rounded to two
    /// decimal places.
    ///
    /// The divisor is the instant of the last update, standing in for the
    /// elapsed simulation time (simulation starts at 0). Errs with
    /// `NoData` before any event has been registered.
    pub fn mean_on_airport(&self) -> Result<f64> {
        self.mean_of(self.airport_time_integral)
    }

    /// Mean number of aircraft on runways, rounded to two decimal places.
    /// Errs with `NoData` before any event has been registered.
    pub fn mean_on_runway(&self) -> Result<f64> {
        self.mean_of(self.runway_time_integral)
    }

    fn mean_of(&self, integral: i64) -> Result<f64> {
        if self.last_change == 0 {
            return Err(Error::NoData);
        }
        let mean = integral as f64 / self.last_change as f64;
        Ok((mean * 100.0).round() / 100.0)
    }
}

/// Punctuality percentage with one decimal place, from integer division.
/// 100% when no operations ran.
fn punctuality(on_time: u32, total: u32) -> f64 {
    if total == 0 {
        return 100.0;
    }
    (1000 * on_time / total) as f64 / 10.0
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_landings = self.on_time_landings + self.delayed_landings;
        let total_takeoffs = self.on_time_takeoffs + self.delayed_takeoffs;
        let on_time_total = self.on_time_landings + self.on_time_takeoffs;
        let delayed_total = self.delayed_landings + self.delayed_takeoffs;

        writeln!(f, "Statistics at instant T= {}", self.last_event)?;
        writeln!(
            f,
            "\tLANDINGS \tOnTime: {}\tDelayed: {}\tPunctuality: {}",
            self.on_time_landings,
            self.delayed_landings,
            punctuality(self.on_time_landings, total_landings)
        )?;
        writeln!(
            f,
            "\tTAKEOFFS \tOnTime: {}\tDelayed: {}\tPunctuality: {}",
            self.on_time_takeoffs,
            self.delayed_takeoffs,
            punctuality(self.on_time_takeoffs, total_takeoffs)
        )?;
        writeln!(
            f,
            "\tTOTAL    \tOnTime: {}\tDelayed: {}\tPunctuality: {}",
            on_time_total,
            delayed_total,
            punctuality(on_time_total, total_landings + total_takeoffs)
        )?;
        writeln!(
            f,
            "\tAIRPORT_OCCUPANCY \tCurrent: {}\tMax: {}\tMean: {}",
            self.on_airport,
            self.max_on_airport,
            self.mean_on_airport().unwrap_or(0.0)
        )?;
        writeln!(
            f,
            "\tRUNWAY_OCCUPANCY  \tCurrent: {}\tMax: {}\tMean: {}",
            self.on_runway,
            self.max_on_runway,
            self.mean_on_runway().unwrap_or(0.0)
        )
    }
}
