use thiserror::Error;

use crate::domain::event::OperationPhase;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Parameters file not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse parameters JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Simulation parameter out of range: {name}= {value}")]
    InvalidParameter { name: &'static str, value: String },

    #[error("Event with phase {found:?} passed to {operation}, which requires {expected}")]
    InvalidEventPhase { operation: &'static str, expected: &'static str, found: OperationPhase },

    #[error("Runway capacity invariant violated: {0}")]
    RunwayInvariant(String),

    #[error("Inconsistent statistics close time: {close} (close) < {last_event} (last registered event)")]
    InconsistentCloseTime { close: u64, last_event: u64 },

    #[error("No events registered yet, mean occupancy is undefined")]
    NoData,
}

pub type Result<T> = std::result::Result<T, Error>;
