//! Unified crate error types.

use thiserror::Error;

/// Top-level error returned by the engine facade.
#[derive(Error, Debug)]
pub enum TaximetroError {
    #[error("meter error: {0}")]
    Meter(#[from] MeterError),

    #[error("history error: {0}")]
    History(#[from] HistoryError),
}

/// Trip-meter state machine errors.
#[derive(Error, Debug)]
pub enum MeterError {
    #[error("no active trip: start a trip first")]
    NotStarted,

    #[error("invalid rate {input:?}: {reason}")]
    InvalidRate { input: String, reason: String },
}

/// History log persistence errors.
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("history log I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
