//! Data models for compositions, variants, and station sequences.
//!
//! This module contains the core data structures owned by an editing
//! session. Models are independent of any rendering technology and of the
//! persistence transport.

pub mod composition;
pub mod station;
pub mod token;
pub mod variant;

// Re-export all model types
pub use composition::Composition;
pub use station::{StationEntry, StationSequence};
pub use token::TokenInstance;
pub use variant::Variant;
