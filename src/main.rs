use clap::Parser;

use runway_sim::domain::params::Params;
use runway_sim::domain::simulator::run_simulation;
use runway_sim::logger;
use runway_sim::simulate_from_file;

/// Simulates the runway traffic of an airport and prints the resulting
/// occupancy and punctuality statistics.
#[derive(Debug, Parser)]
#[command(name = "runway_sim", about = "Airport runway discrete-event simulator")]
struct Cli {
    /// How long to simulate, in seconds.
    horizon: u64,

    /// Path to a JSON parameters file. Without it the default scenario is
    /// simulated (2 runways, slot 120 s, 4 arrivals/min, seed 1).
    #[arg(long)]
    params: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    logger::init();
    log::info!("Simulation starting. Horizon={}", cli.horizon);

    let result = match &cli.params {
        Some(file_path) => {
            log::info!("Loading parameters from '{}'...", file_path);
            simulate_from_file(file_path, cli.horizon)
        }
        None => run_simulation(&Params::default(), cli.horizon),
    };

    match result {
        Ok(statistics) => {
            log::info!("Simulation finished.");
            println!("Result {}", statistics);
        }
        Err(e) => {
            log::error!("Simulation failed: {}", e);
            std::process::exit(1);
        }
    }
}
