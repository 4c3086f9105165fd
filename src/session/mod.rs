//! Editing session state: drag tracking and per-editor ownership.

pub mod drag;
pub mod editor;

// Re-export session types
pub use drag::{DragOrigin, DragSession, DragState};
pub use editor::{CompositionEditor, StationEditor};
