//! Trip history persistence: an append-only plain-text log.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::trip::{wire, TripRecord};
use crate::error::HistoryError;

/// Indicator returned by [`HistoryStore::read_all`] when no trips are recorded.
pub const EMPTY_HISTORY: &str = "No hay trayectos registrados.";

/// Append-only store of finalized trip records.
///
/// Records are written as the wire-format blocks of
/// [`crate::domain::trip::wire`] and never mutated or deleted afterwards.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a finalized trip to the log, creating the file on first write.
    pub fn append(&self, record: &TripRecord) -> Result<(), HistoryError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(wire::render_block(record).as_bytes())?;
        Ok(())
    }

    /// Read the full log content.
    ///
    /// A missing or empty log file reads as [`EMPTY_HISTORY`] rather than an
    /// error.
    pub fn read_all(&self) -> Result<String, HistoryError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(EMPTY_HISTORY.to_string()),
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(EMPTY_HISTORY.to_string()),
            Err(e) => Err(HistoryError::Io(e)),
        }
    }
}
