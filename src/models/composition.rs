//! Composition model: the ordered collection of variants.

use crate::models::Variant;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Complete train composition: an ordered sequence of named variants.
///
/// This is the canonical in-memory state of one composition editor.
/// Every mutation keeps variant order and item positions contiguous
/// (they are plain vector indices).
///
/// # Error handling
///
/// All operations are total: referencing an unknown variant id or an
/// out-of-range index is a silent no-op, never a panic or error. The
/// rendering host can therefore forward gestures without pre-validating
/// them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composition {
    /// Ordered list of variants; a variant's `order` is its index here
    pub variants: Vec<Variant>,
}

impl Composition {
    /// Creates an empty composition with no variants.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a composition holding one unnamed empty variant, ready
    /// for immediate editing. This is the state a fresh editor opens
    /// with when no persisted value exists.
    #[must_use]
    pub fn with_one_empty_variant() -> Self {
        Self {
            variants: vec![Variant::new("")],
        }
    }

    /// Appends a new empty variant and returns its stable id.
    pub fn add_variant(&mut self, name: impl Into<String>) -> String {
        let variant = Variant::new(name);
        let id = variant.id.clone();
        debug!(variant = %id, "adding composition variant");
        self.variants.push(variant);
        id
    }

    /// Removes the variant with the given id. Remaining variants close
    /// the gap, so their order values stay contiguous. No-op if the id
    /// is unknown.
    pub fn remove_variant(&mut self, id: &str) {
        if let Some(index) = self.variants.iter().position(|v| v.id == id) {
            debug!(variant = %id, "removing composition variant");
            self.variants.remove(index);
        }
    }

    /// Replaces the name of the variant with the given id. No-op if the
    /// id is unknown.
    pub fn rename_variant(&mut self, id: &str, name: impl Into<String>) {
        if let Some(variant) = self.variant_mut(id) {
            variant.name = name.into();
        }
    }

    /// Inserts a fresh token instance into the given variant at `at`,
    /// clamped to `[0, len]`. No-op if the variant id is unknown.
    pub fn insert_item(&mut self, id: &str, token_type: impl Into<String>, at: usize) {
        let Some(variant) = self.variant_mut(id) else {
            return;
        };
        let at = at.min(variant.items.len());
        variant
            .items
            .insert(at, crate::models::TokenInstance::new(token_type));
    }

    /// Removes the item at `index` from the given variant; remaining
    /// items close the gap. No-op if the variant id is unknown or the
    /// index is out of range.
    pub fn remove_item(&mut self, id: &str, index: usize) {
        let Some(variant) = self.variant_mut(id) else {
            return;
        };
        if index < variant.items.len() {
            variant.items.remove(index);
        }
    }

    /// Repositions an item within a single variant.
    ///
    /// `to` is interpreted over the sequence with the moved item removed
    /// (the index the reorder engine produces) and is clamped to the
    /// remaining length. Cross-variant moves are not supported by the
    /// interaction model; relocating content between variants happens
    /// only as a fresh palette insert.
    ///
    /// No-op if the variant id is unknown or `from` is out of range.
    pub fn move_item(&mut self, id: &str, from: usize, to: usize) {
        let Some(variant) = self.variant_mut(id) else {
            return;
        };
        if from >= variant.items.len() {
            return;
        }
        let item = variant.items.remove(from);
        let to = to.min(variant.items.len());
        variant.items.insert(to, item);
    }

    /// Gets the variant with the given id.
    #[must_use]
    pub fn variant(&self, id: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id == id)
    }

    /// Gets the variant with the given id mutably.
    fn variant_mut(&mut self, id: &str) -> Option<&mut Variant> {
        self.variants.iter_mut().find(|v| v.id == id)
    }

    /// Variants paired with their current zero-based order.
    pub fn indexed_variants(&self) -> impl Iterator<Item = (usize, &Variant)> {
        self.variants.iter().enumerate()
    }

    /// Read-only serialization projection: `(name, comma-joined parts)`
    /// per variant, in order, with transient (zero-item) variants
    /// dropped.
    #[must_use]
    pub fn view(&self) -> Vec<(String, String)> {
        self.variants
            .iter()
            .filter(|v| !v.is_transient())
            .map(|v| (v.name.clone(), v.parts()))
            .collect()
    }

    /// Whether any variant carries at least one item. The dashboard uses
    /// this to decide whether to render a composition section at all.
    #[must_use]
    pub fn has_items(&self) -> bool {
        self.variants.iter().any(|v| !v.is_transient())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composition_with_variant(parts: &[&str]) -> (Composition, String) {
        let mut composition = Composition::new();
        let id = composition.add_variant("Peak");
        for part in parts {
            let len = composition.variant(&id).unwrap().items.len();
            composition.insert_item(&id, *part, len);
        }
        (composition, id)
    }

    #[test]
    fn test_add_variant_appends_in_order() {
        let mut composition = Composition::new();
        let first = composition.add_variant("A");
        let second = composition.add_variant("B");

        assert_eq!(composition.variants.len(), 2);
        assert_eq!(composition.variants[0].id, first);
        assert_eq!(composition.variants[1].id, second);
    }

    #[test]
    fn test_remove_variant_renumbers() {
        let mut composition = Composition::new();
        let a = composition.add_variant("A");
        let b = composition.add_variant("B");
        let c = composition.add_variant("C");

        composition.remove_variant(&b);

        let order: Vec<_> = composition
            .indexed_variants()
            .map(|(i, v)| (i, v.id.clone()))
            .collect();
        assert_eq!(order, vec![(0, a), (1, c)]);
    }

    #[test]
    fn test_remove_variant_unknown_id_is_noop() {
        let mut composition = Composition::new();
        composition.add_variant("A");
        composition.remove_variant("no-such-id");
        assert_eq!(composition.variants.len(), 1);
    }

    #[test]
    fn test_rename_variant() {
        let mut composition = Composition::new();
        let id = composition.add_variant("Old");
        composition.rename_variant(&id, "New");
        assert_eq!(composition.variant(&id).unwrap().name, "New");

        // Unknown id is a no-op
        composition.rename_variant("no-such-id", "Ignored");
        assert_eq!(composition.variant(&id).unwrap().name, "New");
    }

    #[test]
    fn test_insert_item_clamps_index() {
        let (mut composition, id) = composition_with_variant(&["loco", "car"]);

        // Index far past the end clamps to append
        composition.insert_item(&id, "cab", 99);
        assert_eq!(composition.variant(&id).unwrap().parts(), "loco,car,cab");

        composition.insert_item(&id, "pano", 0);
        assert_eq!(
            composition.variant(&id).unwrap().parts(),
            "pano,loco,car,cab"
        );
    }

    #[test]
    fn test_insert_item_unknown_variant_is_noop() {
        let (mut composition, id) = composition_with_variant(&["loco"]);
        composition.insert_item("no-such-id", "car", 0);
        assert_eq!(composition.variant(&id).unwrap().parts(), "loco");
    }

    #[test]
    fn test_remove_item() {
        let (mut composition, id) = composition_with_variant(&["loco", "car", "cab"]);
        composition.remove_item(&id, 1);
        assert_eq!(composition.variant(&id).unwrap().parts(), "loco,cab");
    }

    #[test]
    fn test_remove_item_out_of_range_is_noop() {
        let (mut composition, id) = composition_with_variant(&["loco"]);
        composition.remove_item(&id, 5);
        assert_eq!(composition.variant(&id).unwrap().parts(), "loco");
    }

    #[test]
    fn test_move_item_within_variant() {
        let (mut composition, id) = composition_with_variant(&["loco", "car", "cab"]);

        // Move "loco" past "car": target index is over the remaining
        // two-element sequence.
        composition.move_item(&id, 0, 1);
        assert_eq!(composition.variant(&id).unwrap().parts(), "car,loco,cab");

        // Move to the end
        composition.move_item(&id, 0, 2);
        assert_eq!(composition.variant(&id).unwrap().parts(), "loco,cab,car");
    }

    #[test]
    fn test_move_item_clamps_target() {
        let (mut composition, id) = composition_with_variant(&["loco", "car"]);
        composition.move_item(&id, 0, 99);
        assert_eq!(composition.variant(&id).unwrap().parts(), "car,loco");
    }

    #[test]
    fn test_move_item_out_of_range_from_is_noop() {
        let (mut composition, id) = composition_with_variant(&["loco", "car"]);
        composition.move_item(&id, 7, 0);
        assert_eq!(composition.variant(&id).unwrap().parts(), "loco,car");
    }

    #[test]
    fn test_view_prunes_transient_variants() {
        let mut composition = Composition::new();
        let a = composition.add_variant("Peak");
        composition.add_variant("Empty One");
        composition.insert_item(&a, "loco", 0);
        composition.insert_item(&a, "car", 1);
        composition.add_variant("Empty Two");

        let view = composition.view();
        assert_eq!(view, vec![("Peak".to_string(), "loco,car".to_string())]);
    }

    #[test]
    fn test_view_preserves_variant_order() {
        let mut composition = Composition::new();
        let a = composition.add_variant("First");
        let b = composition.add_variant("Second");
        composition.insert_item(&b, "car", 0);
        composition.insert_item(&a, "loco", 0);

        let names: Vec<_> = composition.view().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn test_has_items() {
        let mut composition = Composition::with_one_empty_variant();
        assert!(!composition.has_items());

        let id = composition.variants[0].id.clone();
        composition.insert_item(&id, "loco", 0);
        assert!(composition.has_items());
    }

    #[test]
    fn test_unknown_token_type_preserved() {
        let (composition, id) = composition_with_variant(&["loco", "hovercraft"]);
        assert_eq!(
            composition.variant(&id).unwrap().parts(),
            "loco,hovercraft"
        );
    }
}
