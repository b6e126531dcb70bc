//! Presentation Layer
//!
//! Argument parsing and output formatting (text/JSON) for the CLI.

pub mod cli;
pub mod output;

pub use output::{content_hash, render_plan, render_report, OutputFormat, PlanStatus};
