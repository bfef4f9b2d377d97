//! Persisted wire format for trip records.
//!
//! Each finalized trip is appended to the history log as a delimited
//! human-readable block, UTF-8, append-only. The literal markers and the
//! field order are part of the on-disk format and must not change between
//! releases:
//!
//! ```text
//! === Registro de Trayecto ===
//! Fecha: 2024-05-17
//! Hora inicio: 09:30:00
//! Hora fin: 09:35:30
//! Duración: 0:05:30
//! Total: 0.15 €
//! ============================
//! ```

use super::TripRecord;
use crate::shared::fmt::{format_duration, format_total};

/// Literal header marker opening every record block.
pub const RECORD_HEADER: &str = "=== Registro de Trayecto ===";

/// Literal footer marker closing every record block.
pub const RECORD_FOOTER: &str = "============================";

/// Render a record as one log block, trailing blank line included.
pub fn render_block(record: &TripRecord) -> String {
    format!(
        "{header}\n\
         Fecha: {date}\n\
         Hora inicio: {start}\n\
         Hora fin: {end}\n\
         Duración: {duration}\n\
         Total: {total}\n\
         {footer}\n\n",
        header = RECORD_HEADER,
        date = record.started_at.format("%Y-%m-%d"),
        start = record.started_at.format("%H:%M:%S"),
        end = record.ended_at.format("%H:%M:%S"),
        duration = format_duration(&record.duration()),
        total = format_total(&record.total),
        footer = RECORD_FOOTER,
    )
}
