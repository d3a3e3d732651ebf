// Calculation history, newest entry first

use std::collections::VecDeque;

/// A finished calculation as shown in the history pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    calculation: String,
    result: String,
}

impl HistoryEntry {
    pub fn new(calculation: impl Into<String>, result: impl Into<String>) -> Self {
        HistoryEntry {
            calculation: calculation.into(),
            result: result.into(),
        }
    }

    /// The operation that was evaluated, e.g. `3 + 2`
    pub fn calculation(&self) -> &str {
        &self.calculation
    }

    /// The formatted result, e.g. `5`
    pub fn result(&self) -> &str {
        &self.result
    }
}

/// Unbounded list of past calculations
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        History {
            entries: VecDeque::new(),
        }
    }

    /// Record a calculation at the head of the list
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Most recent calculation
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Entries newest-first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
