//! Common test utilities for projgen contract, property and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project directory plus helpers to run the CLI
//! - Fixtures: reusable `projgen.toml` contents

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
