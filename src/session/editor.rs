//! Editor sessions owning the model, the drag state, and the wire value.
//!
//! One session struct per editor instance on the form. Each owns its
//! model and drag session exclusively, so a composition editor and a
//! station editor can coexist on the same page without any shared state.
//! The cached wire value is refreshed after every committed mutation;
//! `wire_value()` is therefore always current as of the last gesture,
//! ready to hand to the persistence collaborator on form submission.
//!
//! All handlers run synchronously inside pointer and click events: the
//! model is never observable in a partially updated state, and a
//! cancelled drag leaves it byte-for-byte identical to before the
//! gesture.

use crate::models::{Composition, StationSequence};
use crate::parser;
use crate::services::reorder;
use crate::session::drag::{DragOrigin, DragSession};
use tracing::debug;

/// Editing session for the multi-variant composition editor.
#[derive(Debug, Clone)]
pub struct CompositionEditor {
    composition: Composition,
    drag: DragSession,
    wire: String,
}

impl CompositionEditor {
    /// Opens a fresh editor with one empty variant.
    #[must_use]
    pub fn new() -> Self {
        Self::from_composition(Composition::with_one_empty_variant())
    }

    /// Opens an editor on a persisted value, accepting every historical
    /// wire format.
    #[must_use]
    pub fn open(raw: &str) -> Self {
        Self::from_composition(parser::load_composition(raw))
    }

    fn from_composition(composition: Composition) -> Self {
        let wire = parser::serialize_composition(&composition);
        Self {
            composition,
            drag: DragSession::new(),
            wire,
        }
    }

    /// The current model state.
    #[must_use]
    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    /// The serialized value as of the last mutation.
    #[must_use]
    pub fn wire_value(&self) -> &str {
        &self.wire
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Adds a new empty variant, returning its id.
    pub fn add_variant(&mut self, name: &str) -> String {
        let id = self.composition.add_variant(name);
        self.refresh_wire();
        id
    }

    /// Removes a variant by id; no-op for unknown ids.
    pub fn remove_variant(&mut self, id: &str) {
        self.composition.remove_variant(id);
        self.refresh_wire();
    }

    /// Renames a variant; no-op for unknown ids.
    pub fn rename_variant(&mut self, id: &str, name: &str) {
        self.composition.rename_variant(id, name);
        self.refresh_wire();
    }

    /// Removes the item a user clicked; no-op on bad input.
    pub fn click_remove(&mut self, variant_id: &str, index: usize) {
        self.composition.remove_item(variant_id, index);
        self.refresh_wire();
    }

    /// Starts a drag from the palette. Returns whether the drag began.
    pub fn begin_palette_drag(&mut self, token_type: &str) -> bool {
        self.drag.start(DragOrigin::Palette {
            token_type: token_type.to_string(),
        })
    }

    /// Starts a drag from an existing item position. Returns whether the
    /// drag began.
    pub fn begin_item_drag(&mut self, variant_id: &str, index: usize) -> bool {
        self.drag.start(DragOrigin::Existing {
            zone: variant_id.to_string(),
            index,
        })
    }

    /// Computes where the dragged token would land, given the pointer
    /// coordinate and the candidate midpoints of the hovered dropzone
    /// (excluding the dragged element itself). Pure; called on every
    /// pointer move so the host can render a placeholder.
    #[must_use]
    pub fn drag_target(&self, pointer: f64, midpoints: &[f64]) -> usize {
        reorder::insertion_index(pointer, midpoints)
    }

    /// Commits the active drag onto a dropzone.
    ///
    /// Palette-sourced drags materialize a fresh token instance at the
    /// computed index. Existing-item drags commit a move only when the
    /// destination is the origin variant; a cross-variant drop of an
    /// existing item is ignored. Returns whether the model changed.
    pub fn drop_on(&mut self, variant_id: &str, pointer: f64, midpoints: &[f64]) -> bool {
        let Some(origin) = self.drag.take() else {
            return false;
        };
        let at = reorder::insertion_index(pointer, midpoints);

        match origin {
            DragOrigin::Palette { token_type } => {
                self.composition.insert_item(variant_id, token_type, at);
                self.refresh_wire();
                true
            }
            DragOrigin::Existing { zone, index } => {
                if zone != variant_id {
                    debug!("ignoring cross-variant drop of existing item");
                    return false;
                }
                self.composition.move_item(variant_id, index, at);
                self.refresh_wire();
                true
            }
        }
    }

    /// Abandons the active drag. The model is untouched.
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    fn refresh_wire(&mut self) {
        self.wire = parser::serialize_composition(&self.composition);
    }
}

impl Default for CompositionEditor {
    fn default() -> Self {
        Self::new()
    }
}

/// Editing session for the flat station sequence editor.
///
/// Stations are added from a search dropdown rather than a palette, so
/// the only drags are reorders of existing entries within the single
/// list.
#[derive(Debug, Clone)]
pub struct StationEditor {
    sequence: StationSequence,
    drag: DragSession,
    wire: String,
}

impl StationEditor {
    /// Opens a fresh editor with an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::from_sequence(StationSequence::new())
    }

    /// Opens an editor on a persisted newline-separated value.
    #[must_use]
    pub fn open(raw: &str) -> Self {
        Self::from_sequence(parser::load_stations(raw))
    }

    /// Opens an editor on the structured exchange form.
    #[must_use]
    pub fn open_list<S: AsRef<str>>(names: &[S]) -> Self {
        Self::from_sequence(parser::load_station_list(names))
    }

    fn from_sequence(sequence: StationSequence) -> Self {
        let wire = parser::serialize_stations(&sequence);
        Self {
            sequence,
            drag: DragSession::new(),
            wire,
        }
    }

    /// The current model state.
    #[must_use]
    pub fn sequence(&self) -> &StationSequence {
        &self.sequence
    }

    /// The serialized value as of the last mutation.
    #[must_use]
    pub fn wire_value(&self) -> &str {
        &self.wire
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Adds a station picked from the search dropdown. Duplicates are
    /// silently rejected; returns whether the entry was added.
    pub fn add_station(&mut self, name: &str) -> bool {
        let added = self.sequence.add_entry(name);
        if added {
            self.refresh_wire();
        }
        added
    }

    /// Removes the station at `index`; no-op when out of range.
    pub fn remove_station(&mut self, index: usize) {
        self.sequence.remove_entry(index);
        self.refresh_wire();
    }

    /// Starts a drag of the entry at `index`. Returns whether the drag
    /// began.
    pub fn begin_drag(&mut self, index: usize) -> bool {
        self.drag.start(DragOrigin::Existing {
            zone: String::new(),
            index,
        })
    }

    /// Computes where the dragged entry would land; pure, called on
    /// every pointer move. Midpoints exclude the dragged entry.
    #[must_use]
    pub fn drag_target(&self, pointer: f64, midpoints: &[f64]) -> usize {
        reorder::insertion_index(pointer, midpoints)
    }

    /// Commits the active drag at the computed position. Returns whether
    /// the model changed.
    pub fn drop_at(&mut self, pointer: f64, midpoints: &[f64]) -> bool {
        let Some(origin) = self.drag.take() else {
            return false;
        };
        match origin {
            DragOrigin::Existing { index, .. } => {
                let to = reorder::insertion_index(pointer, midpoints);
                self.sequence.move_entry(index, to);
                self.refresh_wire();
                true
            }
            DragOrigin::Palette { .. } => false,
        }
    }

    /// Abandons the active drag. The model is untouched.
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    fn refresh_wire(&mut self) {
        self.wire = parser::serialize_stations(&self.sequence);
    }
}

impl Default for StationEditor {
    fn default() -> Self {
        Self::new()
    }
}
