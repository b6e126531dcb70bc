//! Domain Services
//!
//! Pure business logic with no I/O dependencies.

pub mod differ;
pub mod json_merge;

pub use differ::{DiffResult, Differ};
pub use json_merge::{merge_preserving, overlay_layers, overlay_shallow};
