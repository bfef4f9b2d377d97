//! # Taxímetro Core
//!
//! The metering engine behind the Taxímetro digital desktop app: trip
//! lifecycle state machine, per-tick fare accrual, and an append-only trip
//! history log. The graphical shell lives elsewhere and drives this crate
//! through the [`engine::Taximetro`] facade.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Domain types, the trip state machine, and the append-only
//!    history log (`domain`, `shared`, `error`)
//! 2. **Scheduling** — `TickDriver`, the periodic accrual trigger (`tick`)
//! 3. **Engine** — `Taximetro`, the facade the presentation layer drives
//!    (`engine`, `config`)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use taximetro_core::prelude::*;
//!
//! let mut engine = Taximetro::builder()
//!     .history_path("historial_trayectos.txt")
//!     .build()?;
//!
//! engine.start_trip();
//! engine.set_movement(MovementState::Moving)?;
//! engine.accrue_tick()?; // invoked once per second by a TickDriver
//! let record = engine.finalize_trip(chrono::Local::now())?;
//! println!("{}", engine.history()?);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared parsing and formatting utilities.
pub mod shared;

/// Domain modules (vertical slices): trip metering, history persistence.
pub mod domain;

/// Unified crate error types.
pub mod error;

// ── Layer 2: Scheduling ──────────────────────────────────────────────────────

/// Periodic tick trigger for fare accrual.
pub mod tick;

// ── Layer 3: Engine ──────────────────────────────────────────────────────────

/// Caller-owned configuration.
pub mod config;

/// `Taximetro` — the primary entry point.
pub mod engine;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types
    pub use crate::domain::trip::{MovementState, RateSchedule, TripMeter, TripRecord};

    // Persistence
    pub use crate::domain::history::{HistoryStore, EMPTY_HISTORY};

    // Errors
    pub use crate::error::{HistoryError, MeterError, TaximetroError};

    // Engine + config
    pub use crate::config::MeterConfig;
    pub use crate::engine::{Taximetro, TaximetroBuilder};

    // Scheduling
    pub use crate::tick::TickDriver;

    // Formatting helpers the presentation layer renders with
    pub use crate::shared::{format_duration, format_total};
}
