//! Components that contribute to a project during construction
//!
//! Each component exposes a `register(&mut Project, ...)` function that reads
//! what earlier components contributed, adds its own scripts, dependencies,
//! ignore patterns and files, and finally hands itself to the project.

pub mod compiler_options;
pub mod docgen;
pub mod eslint;
pub mod jest;
pub mod packaging;
pub mod sample;
pub mod typescript_config;

pub use compiler_options::CompilerOptions;
pub use docgen::Docgen;
pub use eslint::{Eslint, EslintOptions};
pub use jest::{Jest, JestOptions};
pub use packaging::Packaging;
pub use sample::{Sample, SampleOptions};
pub use typescript_config::{
    ConfigPurpose, TypeScriptConfig, TypeScriptConfigOptions, TypeScriptConfigState,
    TSCONFIG_FILE, TSCONFIG_TEST_FILE,
};
