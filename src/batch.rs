//! Headless key replay
//!
//! Feeds a string of keys through the [`Keymap`] into a fresh
//! [`Calculator`], as if typed into the UI, and reports the final state.
//! Whitespace is skipped so `"5 + 3 ="` and `"5+3="` are equivalent.

use crate::engine::calculator::Calculator;
use crate::engine::errors::CalcError;
use crate::engine::history::HistoryEntry;
use crate::input::Keymap;
use std::fmt;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    #[error("no binding for key '{key}' at position {position}")]
    UnknownKey { key: char, position: usize },
}

/// State left behind by a batch run
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub display: String,
    /// Newest first
    pub history: Vec<HistoryEntry>,
    /// Notices raised along the way, in order
    pub alerts: Vec<CalcError>,
}

/// Replay `keys` against a new calculator
pub fn run_keys(keys: &str, keymap: &Keymap) -> Result<BatchReport, BatchError> {
    let mut calculator = Calculator::new();
    let mut alerts = Vec::new();

    for (position, key) in keys.chars().enumerate() {
        if key.is_whitespace() {
            continue;
        }
        let input = keymap
            .lookup(key)
            .ok_or(BatchError::UnknownKey { key, position })?;
        calculator.press(input);
        debug!(%key, %input, display = calculator.display(), "replayed key");

        if let Some(alert) = calculator.dismiss_alert() {
            alerts.push(alert);
        }
    }

    Ok(BatchReport {
        display: calculator.display().to_string(),
        history: calculator.history().iter().cloned().collect(),
        alerts,
    })
}

impl fmt::Display for BatchReport {
    /// The display on the first line, then one `calculation = result` line
    /// per history entry
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.display)?;
        for entry in &self.history {
            writeln!(f, "{} = {}", entry.calculation(), entry.result())?;
        }
        Ok(())
    }
}
