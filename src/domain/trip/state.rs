//! Trip meter state machine — app-owned, crate-provided update logic.
//!
//! Two states: idle and active. `start` moves idle → active, `finalize`
//! moves active → idle, and every other mutating operation requires an
//! active trip and fails with [`MeterError::NotStarted`] otherwise, leaving
//! state untouched.
//!
//! Accrual is per-tick, not elapsed-time-proportional: one tick adds one
//! rate amount regardless of how much wall time actually passed since the
//! previous tick. `last_tick_at` is bookkeeping only and never feeds the
//! billing arithmetic.

use chrono::{DateTime, Local};
use rust_decimal::Decimal;

use super::{MovementState, RateSchedule, TripRecord};
use crate::error::MeterError;
use crate::shared::rate::parse_rate;

/// The fare-metering state machine.
///
/// The presentation layer owns one instance and calls the update methods;
/// the periodic tick trigger stays with the caller (see
/// [`crate::tick::TickDriver`]).
#[derive(Debug, Clone)]
pub struct TripMeter {
    movement: MovementState,
    total: Decimal,
    rates: RateSchedule,
    started_at: Option<DateTime<Local>>,
    last_tick_at: Option<DateTime<Local>>,
}

impl TripMeter {
    pub fn new(rates: RateSchedule) -> Self {
        Self {
            movement: MovementState::Stopped,
            total: Decimal::ZERO,
            rates,
            started_at: None,
            last_tick_at: None,
        }
    }

    // ── Read accessors ───────────────────────────────────────────────────

    pub fn movement(&self) -> MovementState {
        self.movement
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn rates(&self) -> RateSchedule {
        self.rates
    }

    pub fn started_at(&self) -> Option<DateTime<Local>> {
        self.started_at
    }

    /// Instant of the most recent accrual. Bookkeeping only; billing is
    /// per-tick, never proportional to the gap between ticks.
    pub fn last_tick_at(&self) -> Option<DateTime<Local>> {
        self.last_tick_at
    }

    /// Whether a trip is active (between `start` and `finalize`).
    pub fn is_active(&self) -> bool {
        self.started_at.is_some()
    }

    // ── State transitions ────────────────────────────────────────────────

    /// Begin a new trip at the current wall-clock time.
    ///
    /// Arming the periodic tick trigger is the caller's side effect.
    pub fn start(&mut self) {
        self.start_at(Local::now());
    }

    /// Begin a new trip at an explicit instant.
    ///
    /// Resets the total to zero and the movement state to `Stopped`.
    /// Starting while a trip is already active discards that trip and
    /// begins a fresh one.
    pub fn start_at(&mut self, now: DateTime<Local>) {
        self.total = Decimal::ZERO;
        self.movement = MovementState::Stopped;
        self.started_at = Some(now);
        self.last_tick_at = None;
        tracing::info!("trip started at {}", now.format("%H:%M:%S"));
    }

    /// Change the movement state of the active trip.
    pub fn set_movement(&mut self, movement: MovementState) -> Result<(), MeterError> {
        if !self.is_active() {
            return Err(MeterError::NotStarted);
        }
        self.movement = movement;
        match movement {
            MovementState::Moving => tracing::info!("taxi started moving"),
            MovementState::Stopped => tracing::info!("taxi stopped"),
        }
        Ok(())
    }

    /// Accrue one tick's cost and return the updated total.
    ///
    /// Adds the stopped rate while `Stopped`, the moving rate while
    /// `Moving`.
    pub fn accrue_tick(&mut self) -> Result<Decimal, MeterError> {
        if !self.is_active() {
            return Err(MeterError::NotStarted);
        }
        self.total += self.rates.rate_for(self.movement);
        self.last_tick_at = Some(Local::now());
        Ok(self.total)
    }

    /// End the active trip, returning its summary record.
    ///
    /// Resets total, movement, and start timestamp to their idle defaults.
    /// The caller passes the record to the history store and disarms the
    /// tick trigger.
    pub fn finalize(&mut self, now: DateTime<Local>) -> Result<TripRecord, MeterError> {
        let started_at = self.started_at.ok_or(MeterError::NotStarted)?;
        let record = TripRecord {
            started_at,
            ended_at: now,
            total: self.total,
        };
        self.total = Decimal::ZERO;
        self.movement = MovementState::Stopped;
        self.started_at = None;
        self.last_tick_at = None;
        tracing::info!("trip finalized, total {:.2} €", record.total);
        Ok(record)
    }

    /// Update both rates from user input strings.
    ///
    /// Both inputs must parse as strictly positive decimals (`.` or `,`
    /// separator); on any failure the existing rates are left unchanged.
    pub fn set_rates(&mut self, stopped: &str, moving: &str) -> Result<(), MeterError> {
        let stopped = parse_rate(stopped)?;
        let moving = parse_rate(moving)?;
        self.rates = RateSchedule::new(stopped, moving);
        tracing::info!("rates updated: stopped {} moving {}", stopped, moving);
        Ok(())
    }
}

impl Default for TripMeter {
    fn default() -> Self {
        Self::new(RateSchedule::default())
    }
}
