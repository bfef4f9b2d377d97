//! `Taximetro` — the primary entry point.
//!
//! Composes the configuration, the trip meter, and the history store. The
//! presentation layer owns one instance and maps every user action to one
//! method call here; the periodic tick trigger stays with the caller (see
//! [`crate::tick::TickDriver`] and [`MeterConfig::tick_period`]).

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Local};
use rust_decimal::Decimal;

use crate::config::MeterConfig;
use crate::domain::history::HistoryStore;
use crate::domain::trip::{MovementState, TripMeter, TripRecord};
use crate::error::{MeterError, TaximetroError};

/// The metering engine the presentation layer drives.
#[derive(Debug)]
pub struct Taximetro {
    config: MeterConfig,
    meter: TripMeter,
    history: HistoryStore,
}

impl Taximetro {
    pub fn builder() -> TaximetroBuilder {
        TaximetroBuilder::default()
    }

    /// Build an engine from an already-validated configuration.
    pub fn new(config: MeterConfig) -> Self {
        let meter = TripMeter::new(config.rates);
        let history = HistoryStore::new(config.history_path.clone());
        Self {
            config,
            meter,
            history,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub fn config(&self) -> &MeterConfig {
        &self.config
    }

    pub fn meter(&self) -> &TripMeter {
        &self.meter
    }

    pub fn history_store(&self) -> &HistoryStore {
        &self.history
    }

    // ── Trip operations ──────────────────────────────────────────────────

    /// Begin a new trip now. The caller arms its tick trigger alongside.
    pub fn start_trip(&mut self) {
        self.meter.start();
    }

    /// Begin a new trip at an explicit instant.
    pub fn start_trip_at(&mut self, now: DateTime<Local>) {
        self.meter.start_at(now);
    }

    pub fn set_movement(&mut self, movement: MovementState) -> Result<(), MeterError> {
        self.meter.set_movement(movement)
    }

    /// Accrue one tick's cost, returning the updated total.
    pub fn accrue_tick(&mut self) -> Result<Decimal, MeterError> {
        self.meter.accrue_tick()
    }

    /// Update both rates from user input strings.
    pub fn set_rates(&mut self, stopped: &str, moving: &str) -> Result<(), MeterError> {
        self.meter.set_rates(stopped, moving)
    }

    /// Finalize the active trip and append its record to the history log.
    ///
    /// The meter is reset to idle even when the append fails; the
    /// persistence failure is reported once through the returned error and
    /// leaves in-memory state consistent. The caller disarms its tick
    /// trigger alongside.
    pub fn finalize_trip(&mut self, now: DateTime<Local>) -> Result<TripRecord, TaximetroError> {
        let record = self.meter.finalize(now)?;
        if let Err(e) = self.history.append(&record) {
            tracing::warn!("failed to persist trip record: {}", e);
            return Err(e.into());
        }
        Ok(record)
    }

    /// Full history log text, or the empty indicator when nothing is
    /// recorded.
    pub fn history(&self) -> Result<String, TaximetroError> {
        Ok(self.history.read_all()?)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct TaximetroBuilder {
    config: MeterConfig,
}

impl Default for TaximetroBuilder {
    fn default() -> Self {
        Self {
            config: MeterConfig::default(),
        }
    }
}

impl TaximetroBuilder {
    pub fn stopped_rate(mut self, rate: Decimal) -> Self {
        self.config.rates.stopped = rate;
        self
    }

    pub fn moving_rate(mut self, rate: Decimal) -> Self {
        self.config.rates.moving = rate;
        self
    }

    pub fn tick_period(mut self, period: Duration) -> Self {
        self.config.tick_period = period;
        self
    }

    pub fn history_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.history_path = path.into();
        self
    }

    /// Validate the configured rates and build the engine.
    pub fn build(self) -> Result<Taximetro, TaximetroError> {
        self.config.rates.validate()?;
        Ok(Taximetro::new(self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::fs;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn local(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 17, h, m, s).unwrap()
    }

    /// Helper to create a unique temp directory for each test.
    fn test_dir(name: &str) -> String {
        let dir = format!("/tmp/taximetro_engine_test_{}", name);
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_builder_defaults() {
        let engine = Taximetro::builder().build().unwrap();
        assert_eq!(engine.config().rates.stopped, dec("0.02"));
        assert_eq!(engine.config().rates.moving, dec("0.05"));
        assert_eq!(engine.config().tick_period, Duration::from_secs(1));
        assert!(!engine.meter().is_active());
    }

    #[test]
    fn test_builder_overrides() {
        let engine = Taximetro::builder()
            .stopped_rate(dec("0.10"))
            .moving_rate(dec("0.25"))
            .tick_period(Duration::from_millis(500))
            .history_path("/tmp/elsewhere.txt")
            .build()
            .unwrap();
        assert_eq!(engine.meter().rates().stopped, dec("0.10"));
        assert_eq!(engine.meter().rates().moving, dec("0.25"));
        assert_eq!(engine.config().tick_period, Duration::from_millis(500));
        assert_eq!(engine.history_store().path(), std::path::Path::new("/tmp/elsewhere.txt"));
    }

    #[test]
    fn test_builder_rejects_non_positive_rate() {
        let err = Taximetro::builder()
            .moving_rate(Decimal::ZERO)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            TaximetroError::Meter(MeterError::InvalidRate { .. })
        ));
    }

    #[test]
    fn test_finalize_trip_appends_to_history() {
        let dir = test_dir("finalize_appends");
        let mut engine = Taximetro::builder()
            .history_path(format!("{}/historial.txt", dir))
            .build()
            .unwrap();

        engine.start_trip_at(local(9, 30, 0));
        engine.set_movement(MovementState::Moving).unwrap();
        for _ in 0..3 {
            engine.accrue_tick().unwrap();
        }

        let record = engine.finalize_trip(local(9, 35, 30)).unwrap();
        assert_eq!(record.total, dec("0.15"));
        assert!(!engine.meter().is_active());

        let log = engine.history().unwrap();
        assert!(log.contains("=== Registro de Trayecto ==="));
        assert!(log.contains("Total: 0.15 €"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_finalize_trip_resets_meter_even_when_append_fails() {
        let mut engine = Taximetro::builder()
            .history_path("/tmp/taximetro_engine_missing_dir/nested/historial.txt")
            .build()
            .unwrap();

        engine.start_trip_at(local(9, 30, 0));
        engine.accrue_tick().unwrap();

        let err = engine.finalize_trip(local(9, 31, 0)).unwrap_err();
        assert!(matches!(err, TaximetroError::History(_)));
        assert!(!engine.meter().is_active());
        assert_eq!(engine.meter().total(), Decimal::ZERO);
    }

    #[test]
    fn test_history_on_fresh_engine_reads_empty_indicator() {
        let dir = test_dir("fresh_history");
        let engine = Taximetro::builder()
            .history_path(format!("{}/historial.txt", dir))
            .build()
            .unwrap();
        assert_eq!(
            engine.history().unwrap(),
            crate::domain::history::EMPTY_HISTORY
        );
        let _ = fs::remove_dir_all(&dir);
    }
}
