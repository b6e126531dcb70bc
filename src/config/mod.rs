//! Configuration module for projgen
//!
//! Resolution order, later wins:
//! 1. Built-in defaults
//! 2. Preset defaults (`preset = "library" | "app"`)
//! 3. Project config (`projgen.toml`)
//! 4. Environment variables (PROJGEN_*)

mod loader;
mod types;

pub use loader::{from_toml_str, load_with_warnings, with_env_overrides, ConfigWarning, CONFIG_FILE};
pub use types::{ProjectOptions, DEFAULT_TYPESCRIPT_VERSION};

/// Starter `projgen.toml` written by `projgen init`
pub const STARTER_CONFIG: &str = r#"# projgen project definition. Run `projgen synth` after editing.
preset = "library"
name = "my-project"
description = "A TypeScript library"
license = "Apache-2.0"
package_manager = "npm"

jest = true
eslint = true
docgen = false
compile_before_test = false

[dev_dependencies]

[layout]
srcdir = "src"
libdir = "lib"
testdir = "test"

[compiler_options]
"#;
