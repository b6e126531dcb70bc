//! projgen - declarative project-configuration synthesizer
//!
//! A project is described as a tree of components. Each component contributes
//! scripts, ignore patterns, dependency pins, compiler options and manifest
//! fields to shared project state while it is constructed; synthesis then
//! renders that state into `package.json`, `tsconfig.json`, ignore files and
//! friends, deterministically.

pub mod components;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod presets;
pub mod project;

// Re-exports for convenience
pub use components::{CompilerOptions, TypeScriptConfig, TypeScriptConfigOptions};
pub use config::{ConfigWarning, ProjectOptions};
pub use domain::entities::{DependencyKind, FileEmitter, RenderMode, Rendered};
pub use domain::ports::FileSystem;
pub use domain::value_objects::{Layout, PackageManager, PatternList, VersionConstraint};
pub use error::{ProjgenError, ProjgenResult};
pub use infrastructure::{LocalFs, MemoryFs};
pub use presets::{Preset, TypeScriptProject};
pub use project::{Component, Project, ProjectSettings, SynthReport};
