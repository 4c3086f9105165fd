//! Composition variant (named group) data structures.

use crate::constants::PART_SEPARATOR;
use crate::models::TokenInstance;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named alternative arrangement of tokens for the same composition
/// (e.g., "Peak Hours" vs "Off-Peak").
///
/// # Invariants
///
/// - `id` is stable for the lifetime of the editing session and is never
///   reused, even after sibling variants are removed.
/// - Item positions are the vector indices, so they stay contiguous as
///   long as mutations go through the owning
///   [`Composition`](crate::models::Composition).
/// - The name is free text: it may be empty and does not have to be
///   unique among sibling variants.
/// - A variant with zero items is *transient*: it exists in the live
///   editing session but is pruned at serialization time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Stable identifier, assigned at creation
    #[serde(default = "generate_variant_id")]
    pub id: String,
    /// Display name, may be empty
    pub name: String,
    /// Ordered token instances
    pub items: Vec<TokenInstance>,
}

/// Generates a new unique variant ID
fn generate_variant_id() -> String {
    Uuid::new_v4().to_string()
}

impl Variant {
    /// Creates a new empty variant with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: generate_variant_id(),
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Creates a variant pre-populated with the given token types.
    pub fn with_parts<I, S>(name: impl Into<String>, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut variant = Self::new(name);
        variant.items = parts.into_iter().map(TokenInstance::new).collect();
        variant
    }

    /// Comma-joined token types in order (the wire `parts` field).
    #[must_use]
    pub fn parts(&self) -> String {
        self.items
            .iter()
            .map(|item| item.token_type.as_str())
            .collect::<Vec<_>>()
            .join(PART_SEPARATOR)
    }

    /// Items paired with their current zero-based positions.
    pub fn indexed_items(&self) -> impl Iterator<Item = (usize, &TokenInstance)> {
        self.items.iter().enumerate()
    }

    /// Whether this variant holds no items and would be pruned on
    /// serialization.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        self.items.is_empty()
    }
}
