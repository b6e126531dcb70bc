//! Domain Entities
//!
//! Registries that components contribute to during construction.
//! - `ScriptRegistry` - named command sequences
//! - `DependencySet` - package name -> version constraint
//! - `FileEmitter` - one output file and its render mode

mod dependency_set;
mod file_emitter;
mod script_registry;

pub use dependency_set::{DependencyKind, DependencySet};
pub use file_emitter::{FileContent, FileEmitter, RenderMode, Rendered};
pub use script_registry::{ScriptRegistry, STEP_SEPARATOR};
