use crate::api::params_dto::ParamsDto;
use crate::error::{Error, Result};

/*
 * Default scenario values
 */
const DEFAULT_SEED: u64 = 1;
const DEFAULT_RUNWAYS: u32 = 2;
const DEFAULT_SLOT_DURATION: u64 = 120;
const DEFAULT_ARRIVAL_FREQUENCY: f64 = 4.0;
const DEFAULT_GROUND_MEAN: f64 = 600.0;
const DEFAULT_GROUND_DEVIATION: f64 = 200.0;
const DEFAULT_GROUND_MINIMUM: f64 = 100.0;
const DEFAULT_RETRY_MEAN: f64 = 180.0;
const DEFAULT_RETRY_DEVIATION: f64 = 60.0;

/// Validated set of parameters that characterize one simulation run.
///
/// Construction is the only place range checks happen; every consumer of
/// a `Params` value can rely on the documented ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    /// Seed for the random generator. A value of 0 requests a
    /// non-reproducible sequence drawn from system entropy; any other
    /// value forces an identical sequence on every run.
    pub seed: u64,

    /// Total number of runways (≥ 1).
    pub runways: u32,

    /// Duration of one runway slot, in seconds (≥ 1).
    pub slot_duration: u64,

    /// Arrival frequency in aircraft per minute. Must yield a mean
    /// inter-arrival interval (60 / frequency) of at least one second.
    pub arrival_frequency: f64,

    /// Ground handling duration distribution: mean (≥ 1), standard
    /// deviation (≥ 1) and minimum (≥ 0), in seconds.
    pub ground_mean: f64,
    pub ground_deviation: f64,
    pub ground_minimum: f64,

    /// Retry delay distribution: mean (≥ 1) and standard deviation (≥ 1),
    /// in seconds.
    pub retry_mean: f64,
    pub retry_deviation: f64,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            seed: DEFAULT_SEED,
            runways: DEFAULT_RUNWAYS,
            slot_duration: DEFAULT_SLOT_DURATION,
            arrival_frequency: DEFAULT_ARRIVAL_FREQUENCY,
            ground_mean: DEFAULT_GROUND_MEAN,
            ground_deviation: DEFAULT_GROUND_DEVIATION,
            ground_minimum: DEFAULT_GROUND_MINIMUM,
            retry_mean: DEFAULT_RETRY_MEAN,
            retry_deviation: DEFAULT_RETRY_DEVIATION,
        }
    }
}

impl Params {
    /// Builds a validated `Params` from the parsed DTO, falling back to
    /// the default scenario for every absent field.
    pub fn from_dto(dto: ParamsDto) -> Result<Params> {
        let params = Params {
            seed: dto.seed.unwrap_or(DEFAULT_SEED),
            runways: dto.runways.unwrap_or(DEFAULT_RUNWAYS),
            slot_duration: dto.slot_duration.unwrap_or(DEFAULT_SLOT_DURATION),
            arrival_frequency: dto.arrival_frequency.unwrap_or(DEFAULT_ARRIVAL_FREQUENCY),
            ground_mean: dto.ground_mean.unwrap_or(DEFAULT_GROUND_MEAN),
            ground_deviation: dto.ground_deviation.unwrap_or(DEFAULT_GROUND_DEVIATION),
            ground_minimum: dto.ground_minimum.unwrap_or(DEFAULT_GROUND_MINIMUM),
            retry_mean: dto.retry_mean.unwrap_or(DEFAULT_RETRY_MEAN),
            retry_deviation: dto.retry_deviation.unwrap_or(DEFAULT_RETRY_DEVIATION),
        };
        params.validate()?;
        Ok(params)
    }

    /// Mean interval between two consecutive arrivals, in seconds.
    pub fn inter_arrival_mean(&self) -> f64 {
        60.0 / self.arrival_frequency
    }

    /// Checks every parameter against its documented range.
    fn validate(&self) -> Result<()> {
        if self.runways < 1 {
            return Err(invalid("runways", self.runways));
        }
        if self.slot_duration < 1 {
            return Err(invalid("slot_duration", self.slot_duration));
        }
        if self.inter_arrival_mean() < 1.0 {
            return Err(invalid("arrival_frequency", self.arrival_frequency));
        }
        if self.ground_mean < 1.0 {
            return Err(invalid("ground_mean", self.ground_mean));
        }
        if self.ground_deviation < 1.0 {
            return Err(invalid("ground_deviation", self.ground_deviation));
        }
        if self.ground_minimum < 0.0 {
            return Err(invalid("ground_minimum", self.ground_minimum));
        }
        if self.retry_mean < 1.0 {
            return Err(invalid("retry_mean", self.retry_mean));
        }
        if self.retry_deviation < 1.0 {
            return Err(invalid("retry_deviation", self.retry_deviation));
        }
        Ok(())
    }
}

fn invalid(name: &'static str, value: impl ToString) -> Error {
    Error::InvalidParameter { name, value: value.to_string() }
}
