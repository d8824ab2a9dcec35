use crate::api::params_dto::ParamsDto;
use crate::domain::params::Params;
use crate::domain::simulator::run_simulation;
use crate::domain::statistics::Statistics;
use crate::error::Result;
use crate::loader::parser::parse_json_file;

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

/// Loads the simulation parameters from a JSON file, runs the simulation
/// up to `horizon`, and returns the closed statistics snapshot.
pub fn simulate_from_file(file_path: &str, horizon: u64) -> Result<Statistics> {
    let dto: ParamsDto = parse_json_file::<ParamsDto>(file_path)?;
    log::info!("Parameters file parsed successfully.");

    let params = Params::from_dto(dto)?;

    run_simulation(&params, horizon)
}
