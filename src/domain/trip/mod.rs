//! Trip domain — movement states, fare rates, and finalized trip records.

pub mod state;
pub mod wire;

use chrono::{DateTime, Local, TimeDelta};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::MeterError;

pub use state::TripMeter;

/// Movement state of the vehicle while a trip is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementState {
    #[default]
    Stopped,
    Moving,
}

impl std::fmt::Display for MovementState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MovementState::Stopped => write!(f, "Parado"),
            MovementState::Moving => write!(f, "Moviendo"),
        }
    }
}

/// Per-tick fare rates, one per movement state.
///
/// Both rates are strictly positive. Defaults: 0.02 while stopped, 0.05
/// while moving (currency units per tick).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSchedule {
    pub stopped: Decimal,
    pub moving: Decimal,
}

impl RateSchedule {
    pub fn new(stopped: Decimal, moving: Decimal) -> Self {
        Self { stopped, moving }
    }

    /// Amount accrued by one tick in the given movement state.
    pub fn rate_for(&self, movement: MovementState) -> Decimal {
        match movement {
            MovementState::Stopped => self.stopped,
            MovementState::Moving => self.moving,
        }
    }

    /// Reject schedules with a non-positive rate.
    pub fn validate(&self) -> Result<(), MeterError> {
        for (label, rate) in [("stopped", self.stopped), ("moving", self.moving)] {
            if rate <= Decimal::ZERO {
                return Err(MeterError::InvalidRate {
                    input: rate.to_string(),
                    reason: format!("{label} rate must be positive"),
                });
            }
        }
        Ok(())
    }
}

impl Default for RateSchedule {
    fn default() -> Self {
        Self {
            stopped: Decimal::new(2, 2),
            moving: Decimal::new(5, 2),
        }
    }
}

/// A finalized trip summary.
///
/// Created once per finalize call; immutable afterwards. The history store
/// owns the persisted copy and never mutates or deletes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    pub started_at: DateTime<Local>,
    pub ended_at: DateTime<Local>,
    pub total: Decimal,
}

impl TripRecord {
    /// Trip duration, end minus start.
    pub fn duration(&self) -> TimeDelta {
        self.ended_at - self.started_at
    }
}
