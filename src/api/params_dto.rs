use serde::Deserialize;

/// External representation of a simulation parameters file.
///
/// Every field is optional; missing fields fall back to the default
/// scenario (2 runways, slot of 120 s, 4 arrivals per minute, ground
/// handling of 600 s ± 200 s with a 100 s floor, retry delay of
/// 180 s ± 60 s, seed 1).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamsDto {
    /// Seed for the random generator. `0` selects system entropy.
    pub seed: Option<u64>,

    /// Number of runways of the airport.
    pub runways: Option<u32>,

    /// Duration of one runway slot, in seconds.
    pub slot_duration: Option<u64>,

    /// Arrival frequency, in aircraft per minute.
    pub arrival_frequency: Option<f64>,

    /// Mean duration of ground handling, in seconds.
    pub ground_mean: Option<f64>,

    /// Standard deviation of ground handling duration, in seconds.
    pub ground_deviation: Option<f64>,

    /// Minimum duration of ground handling, in seconds.
    pub ground_minimum: Option<f64>,

    /// Mean retry delay when all runways are busy, in seconds.
    pub retry_mean: Option<f64>,

    /// Standard deviation of the retry delay, in seconds.
    pub retry_deviation: Option<f64>,
}
