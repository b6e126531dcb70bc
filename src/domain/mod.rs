//! Domain Layer
//!
//! Pure project-state model: registries, value objects and merge rules.
//!
//! ## Structure
//!
//! - `entities/` - Registries with lifecycle (ScriptRegistry, DependencySet, FileEmitter)
//! - `value_objects/` - Immutable value types (PatternList, VersionConstraint, Layout)
//! - `services/` - Stateless helpers (JSON merge)
//! - `ports/` - Interface definitions for infrastructure
//!
//! Nothing in here touches the file system; `ports::FileSystem` is the only way out.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
