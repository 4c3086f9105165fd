//! Composition wire codec with legacy-format support.
//!
//! Newly written records always use the current format: a JSON array of
//! `{"name": ..., "parts": "a,b,c"}` objects, one per non-empty variant.
//! Reading must additionally accept every format the dashboard has ever
//! persisted. In priority order:
//!
//! 1. A structured list of `{name, parts}` objects (current format).
//! 2. A structured list of bare parts strings (older multi-variant
//!    format without names) — each string becomes an unnamed variant.
//! 3. A single string that itself parses as JSON into one of the above.
//! 4. A single raw comma-separated string that is not valid JSON
//!    (oldest, single-variant format) — one unnamed variant.
//! 5. Empty or whitespace-only input — one empty variant, ready for
//!    immediate editing.
//!
//! Classification is explicit (see [`LegacyFormat`]) and each variant has
//! its own parser, so the fallback chain is exhaustive and testable away
//! from any rendering layer. `load_composition` never fails: anything
//! that falls through the chain is treated as a raw parts string.

use crate::constants::PART_SEPARATOR;
use crate::models::{Composition, Variant};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error};

/// One `{name, parts}` record in the current wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantRecord {
    /// Variant display name (empty for records from legacy formats)
    #[serde(default)]
    pub name: String,
    /// Comma-joined token-type identifiers, no spaces
    #[serde(default)]
    pub parts: String,
}

/// Classified persisted value, newest format first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegacyFormat {
    /// Current format: list of `{name, parts}` records. Bare strings in
    /// a mixed list are carried as unnamed records.
    StructuredNamed(Vec<VariantRecord>),
    /// Older multi-variant format: list of bare parts strings
    StructuredPlain(Vec<String>),
    /// A JSON string whose content is itself one of the accepted formats
    JsonString(String),
    /// Oldest single-variant format: one raw comma-separated string
    RawCsv(String),
    /// Empty or whitespace-only value
    Empty,
}

/// Classifies a persisted value without building a model.
#[must_use]
pub fn classify(raw: &str) -> LegacyFormat {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return LegacyFormat::Empty;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Array(items)) => classify_array(&items),
        Ok(Value::String(inner)) => LegacyFormat::JsonString(inner),
        // Any other JSON scalar or object is not a recognized structured
        // form; treat the raw text as the oldest format.
        Ok(_) | Err(_) => LegacyFormat::RawCsv(trimmed.to_string()),
    }
}

/// Classifies a parsed JSON array of variants.
fn classify_array(items: &[Value]) -> LegacyFormat {
    if items.iter().all(Value::is_string) {
        let parts = items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect();
        return LegacyFormat::StructuredPlain(parts);
    }

    // At least one object present: read every element as a record, with
    // bare strings in a mixed list carried as unnamed records.
    let records = items
        .iter()
        .filter_map(|item| match item {
            Value::Object(_) => serde_json::from_value::<VariantRecord>(item.clone()).ok(),
            Value::String(parts) => Some(VariantRecord {
                name: String::new(),
                parts: parts.clone(),
            }),
            _ => None,
        })
        .collect();
    LegacyFormat::StructuredNamed(records)
}

/// Loads a persisted composition value, accepting every historical
/// format. Never fails; see the module docs for the fallback chain.
#[must_use]
pub fn load_composition(raw: &str) -> Composition {
    match classify(raw) {
        LegacyFormat::StructuredNamed(records) => {
            debug!(variants = records.len(), "loading current-format composition");
            load_composition_records(&records)
        }
        LegacyFormat::StructuredPlain(parts) => {
            debug!(variants = parts.len(), "loading unnamed multi-variant composition");
            from_plain_list(&parts)
        }
        LegacyFormat::JsonString(inner) => {
            debug!("unwrapping JSON string wrapper around composition value");
            load_composition(&inner)
        }
        LegacyFormat::RawCsv(parts) => {
            debug!("loading single-variant raw parts string");
            from_raw_csv(&parts)
        }
        LegacyFormat::Empty => Composition::with_one_empty_variant(),
    }
}

/// Builds a composition from current-format records (the structured
/// exchange form used when the value arrives pre-parsed).
#[must_use]
pub fn load_composition_records(records: &[VariantRecord]) -> Composition {
    let variants = records
        .iter()
        .map(|record| Variant::with_parts(record.name.clone(), split_parts(&record.parts)))
        .collect::<Vec<_>>();
    normalized(variants)
}

/// Builds a composition from the older list-of-strings format.
fn from_plain_list(parts_list: &[String]) -> Composition {
    let variants = parts_list
        .iter()
        .map(|parts| Variant::with_parts("", split_parts(parts)))
        .collect::<Vec<_>>();
    normalized(variants)
}

/// Builds a single unnamed variant from the oldest raw format.
fn from_raw_csv(parts: &str) -> Composition {
    normalized(vec![Variant::with_parts("", split_parts(parts))])
}

/// An empty variant list is replaced by one empty variant so the editor
/// always has a dropzone to work with.
fn normalized(variants: Vec<Variant>) -> Composition {
    if variants.is_empty() {
        Composition::with_one_empty_variant()
    } else {
        Composition { variants }
    }
}

/// Splits a comma-joined parts string into token types, skipping blanks
/// left by stray separators (e.g. `"loco,,car"` or a trailing comma).
fn split_parts(parts: &str) -> Vec<String> {
    parts
        .split(PART_SEPARATOR)
        .filter(|part| !part.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Projects a composition into current-format records, dropping
/// transient (zero-item) variants.
#[must_use]
pub fn composition_records(composition: &Composition) -> Vec<VariantRecord> {
    composition
        .view()
        .into_iter()
        .map(|(name, parts)| VariantRecord { name, parts })
        .collect()
}

/// Serializes a composition into the current wire format.
///
/// Serialization is total: the record list is plain strings, so JSON
/// emission cannot fail for real input. A failure is logged and mapped
/// to an empty list rather than surfaced, because this runs after every
/// mutation inside gesture handlers.
#[must_use]
pub fn serialize_composition(composition: &Composition) -> String {
    let records = composition_records(composition);
    match emit_records(&records) {
        Ok(wire) => wire,
        Err(err) => {
            error!("failed to emit composition wire value: {err:#}");
            "[]".to_string()
        }
    }
}

/// Emits records as a JSON array string.
fn emit_records(records: &[VariantRecord]) -> Result<String> {
    serde_json::to_string(records).context("Failed to serialize composition records")
}
