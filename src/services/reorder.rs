//! Pointer-driven reorder engine.
//!
//! This module is pure geometry: given a pointer coordinate along the
//! reordering axis (horizontal for composition dropzones, vertical for
//! station lists) and the midpoints of the candidate neighbors, it
//! computes where a dragged element would land. It has no side effects
//! and no knowledge of any rendering technology — the host measures real
//! geometry and feeds the numbers in.

/// Midpoint of an element along the reordering axis.
///
/// `origin` is the element's leading edge (left or top) and `extent` its
/// size along the axis (width or height).
#[must_use]
pub fn midpoint(origin: f64, extent: f64) -> f64 {
    origin + extent / 2.0
}

/// Computes the insertion index for a dragged element.
///
/// `midpoints` are the axis midpoints of every candidate neighbor in
/// sequence order, excluding the element currently being dragged.
///
/// For each candidate the offset `pointer - midpoint` is computed; among
/// candidates the pointer has not yet passed (negative offset), the one
/// closest to the pointer wins, and the element is inserted immediately
/// before it. Once the pointer has passed every midpoint the result is
/// `midpoints.len()` (append at the end).
///
/// Sweeping the pointer along sorted midpoints changes the result by
/// exactly one step per crossed midpoint, with no oscillation. When two
/// candidates share a midpoint the first-scanned one wins — the
/// comparison is strict, so exact ties resolve toward the earlier
/// position.
#[must_use]
pub fn insertion_index(pointer: f64, midpoints: &[f64]) -> usize {
    let mut closest: Option<(usize, f64)> = None;

    for (index, candidate) in midpoints.iter().enumerate() {
        let offset = pointer - candidate;
        if offset < 0.0 {
            match closest {
                Some((_, best)) if offset <= best => {}
                _ => closest = Some((index, offset)),
            }
        }
    }

    closest.map_or(midpoints.len(), |(index, _)| index)
}
