//! Pure algorithmic services shared by both editors.

pub mod reorder;
