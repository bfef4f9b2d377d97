//! Caller-owned configuration for the metering core.
//!
//! One `MeterConfig` instance is built by the embedding application and
//! passed into the engine at construction time. There is no module-level
//! mutable state and no environment lookup; the history log path travels
//! here.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::trip::RateSchedule;

/// Default history log file name, relative to the working directory.
pub const DEFAULT_HISTORY_PATH: &str = "historial_trayectos.txt";

/// Nominal tick period: one accrual per second.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

/// Configuration for the meter, the tick trigger, and the history store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeterConfig {
    /// Initial per-tick fare rates.
    pub rates: RateSchedule,
    /// Period of the external tick trigger.
    pub tick_period: Duration,
    /// Path of the append-only trip history log.
    pub history_path: PathBuf,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            rates: RateSchedule::default(),
            tick_period: DEFAULT_TICK_PERIOD,
            history_path: PathBuf::from(DEFAULT_HISTORY_PATH),
        }
    }
}
