//! Station sequence wire codec.
//!
//! The persisted field value is a newline-separated ordered list of
//! unique station names. When the value is exchanged as structured data
//! it is an ordered list of plain strings; both forms load through this
//! module. Loading never fails: blank lines are skipped, surrounding
//! whitespace is trimmed per line, and duplicate names are dropped
//! keeping the first occurrence.

use crate::constants::STATION_SEPARATOR;
use crate::models::StationSequence;
use tracing::debug;

/// Loads a newline-separated station list.
#[must_use]
pub fn load_stations(raw: &str) -> StationSequence {
    let mut sequence = StationSequence::new();
    for line in raw.lines() {
        let name = line.trim();
        if name.is_empty() {
            continue;
        }
        if !sequence.add_entry(name) {
            debug!(station = %name, "dropping duplicate station on load");
        }
    }
    sequence
}

/// Loads a station sequence from its structured exchange form, an
/// ordered list of names. Same blank and duplicate handling as
/// [`load_stations`].
#[must_use]
pub fn load_station_list<S: AsRef<str>>(names: &[S]) -> StationSequence {
    let mut sequence = StationSequence::new();
    for name in names {
        let name = name.as_ref().trim();
        if name.is_empty() {
            continue;
        }
        sequence.add_entry(name);
    }
    sequence
}

/// Serializes a station sequence into the persisted newline-joined form.
#[must_use]
pub fn serialize_stations(sequence: &StationSequence) -> String {
    sequence
        .names()
        .collect::<Vec<_>>()
        .join(STATION_SEPARATOR)
}
