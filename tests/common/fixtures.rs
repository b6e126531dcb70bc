//! Test fixtures - reusable project definitions.

/// Library with every default toggle
pub const LIBRARY_CONFIG: &str = r#"
name = "widgets"
description = "Widget toolkit"
"#;

/// Library that compiles before testing and generates docs
pub const COMPILE_FIRST_CONFIG: &str = r#"
name = "widgets"
compile_before_test = true
docgen = true
"#;

/// Application preset
pub const APP_CONFIG: &str = r#"
preset = "app"
name = "service"
"#;

/// Library without a compiler config
pub const NO_TSCONFIG_CONFIG: &str = r#"
name = "plain"
disable_tsconfig = true
"#;

/// Custom layout and compiler overrides
pub const CUSTOM_LAYOUT_CONFIG: &str = r#"
name = "custom"

[layout]
srcdir = "source"
libdir = "dist-lib"
testdir = "spec"

[compiler_options]
target = "ES2020"
lib = ["es2020", "dom"]
"#;
