//! Station sequence model: a flat ordered list of unique stops.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One named stop in a station sequence.
///
/// The name is the uniqueness key: no two entries in the same sequence
/// may share a name (case-sensitive exact match). An entry's order is
/// its index in the owning [`StationSequence`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationEntry {
    /// Station name, unique within the sequence
    pub name: String,
}

impl StationEntry {
    /// Creates a new entry with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Ordered sequence of unique station stops.
///
/// The station editor is the degenerate single-group case of the
/// composition editor: same reorder algorithm, no grouping, uniqueness
/// on the entry name. All operations are total; bad input is a silent
/// no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationSequence {
    /// Ordered entries; an entry's `order` is its index here
    pub entries: Vec<StationEntry>,
}

impl StationSequence {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the sequence already holds an entry with this exact name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Appends a new entry. Duplicate names are silently rejected;
    /// returns whether the entry was added.
    pub fn add_entry(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            debug!(station = %name, "duplicate station rejected");
            return false;
        }
        self.entries.push(StationEntry::new(name));
        true
    }

    /// Removes the entry at `index`; remaining entries close the gap.
    /// No-op if the index is out of range.
    pub fn remove_entry(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
    }

    /// Repositions an entry. `to` is interpreted over the sequence with
    /// the moved entry removed and clamped to the remaining length.
    /// No-op if `from` is out of range.
    pub fn move_entry(&mut self, from: usize, to: usize) {
        if from >= self.entries.len() {
            return;
        }
        let entry = self.entries.remove(from);
        let to = to.min(self.entries.len());
        self.entries.insert(to, entry);
    }

    /// Entry names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Entries paired with their current zero-based order.
    pub fn indexed_entries(&self) -> impl Iterator<Item = (usize, &StationEntry)> {
        self.entries.iter().enumerate()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence_of(names: &[&str]) -> StationSequence {
        let mut sequence = StationSequence::new();
        for name in names {
            sequence.add_entry(*name);
        }
        sequence
    }

    #[test]
    fn test_add_entry() {
        let mut sequence = StationSequence::new();
        assert!(sequence.add_entry("Central"));
        assert!(sequence.add_entry("Harbor"));
        assert_eq!(sequence.names().collect::<Vec<_>>(), vec!["Central", "Harbor"]);
    }

    #[test]
    fn test_add_entry_rejects_duplicate() {
        let mut sequence = sequence_of(&["Central", "Harbor"]);
        assert!(!sequence.add_entry("Central"));
        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence.names().collect::<Vec<_>>(), vec!["Central", "Harbor"]);
    }

    #[test]
    fn test_duplicate_check_is_case_sensitive() {
        let mut sequence = sequence_of(&["Central"]);
        assert!(sequence.add_entry("central"));
        assert_eq!(sequence.len(), 2);
    }

    #[test]
    fn test_remove_entry() {
        let mut sequence = sequence_of(&["A", "B", "C"]);
        sequence.remove_entry(1);
        assert_eq!(sequence.names().collect::<Vec<_>>(), vec!["A", "C"]);

        // Out of range is a no-op
        sequence.remove_entry(10);
        assert_eq!(sequence.len(), 2);
    }

    #[test]
    fn test_move_entry() {
        let mut sequence = sequence_of(&["A", "B", "C", "D"]);
        sequence.move_entry(0, 2);
        assert_eq!(sequence.names().collect::<Vec<_>>(), vec!["B", "C", "A", "D"]);

        sequence.move_entry(3, 0);
        assert_eq!(sequence.names().collect::<Vec<_>>(), vec!["D", "B", "C", "A"]);
    }

    #[test]
    fn test_move_entry_clamps_and_ignores_bad_from() {
        let mut sequence = sequence_of(&["A", "B"]);
        sequence.move_entry(0, 99);
        assert_eq!(sequence.names().collect::<Vec<_>>(), vec!["B", "A"]);

        sequence.move_entry(5, 0);
        assert_eq!(sequence.names().collect::<Vec<_>>(), vec!["B", "A"]);
    }

    #[test]
    fn test_indexed_entries_contiguous_after_mutations() {
        let mut sequence = sequence_of(&["A", "B", "C"]);
        sequence.remove_entry(0);
        sequence.add_entry("D");

        let indices: Vec<_> = sequence.indexed_entries().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
