//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod layout;
mod package_manager;
pub mod pattern_list;
pub mod version_constraint;

pub use layout::Layout;
pub use package_manager::PackageManager;
pub use pattern_list::{PatternEntry, PatternKind, PatternList, GENERATED_MARKER};
pub use version_constraint::{ConstraintError, VersionConstraint};
