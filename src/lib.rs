//! Consist Editor Library
//!
//! This library provides the editing engine behind the transit dashboard's
//! line form: the in-memory model of train composition variants and station
//! sequences, the pointer-driven reorder algorithm, drag session tracking,
//! and the codec between the model and the persistence wire formats
//! (including three legacy read formats).

// Module declarations
pub mod catalog;
pub mod constants;
pub mod models;
pub mod parser;
pub mod services;
pub mod session;
