//! Shared fixtures for integration tests.

#![allow(dead_code)]

use consist_editor::models::Composition;

/// Builds a composition from `(name, parts)` pairs, in order.
pub fn composition_from(variants: &[(&str, &[&str])]) -> Composition {
    let mut composition = Composition::new();
    for (name, parts) in variants {
        let id = composition.add_variant(*name);
        for (index, part) in parts.iter().enumerate() {
            composition.insert_item(&id, *part, index);
        }
    }
    composition
}

/// Midpoints of `count` evenly sized elements laid out from coordinate
/// zero, `extent` wide each — what a host would measure for a rendered
/// row or column.
pub fn evenly_spaced_midpoints(count: usize, extent: f64) -> Vec<f64> {
    (0..count)
        .map(|i| consist_editor::services::reorder::midpoint(i as f64 * extent, extent))
        .collect()
}

/// A persisted record in the current wire format with two named variants.
pub const CURRENT_FORMAT_RECORD: &str =
    r#"[{"name":"Peak","parts":"loco,car,car,loco"},{"name":"Off-Peak","parts":"loco,car"}]"#;

/// The same consist as persisted by the oldest single-variant format.
pub const RAW_CSV_RECORD: &str = "loco,car,car,loco";

/// A persisted multi-variant record from before variants had names.
pub const PLAIN_LIST_RECORD: &str = r#"["loco,car,car,loco","loco,car"]"#;
