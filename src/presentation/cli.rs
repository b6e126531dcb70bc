//! CLI argument parsing
//!
//! Global flags (`--json`, `--verbose`) are inherited by every subcommand.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// projgen - declarative project-configuration synthesizer
#[derive(Parser, Debug)]
#[command(name = "projgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable output on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render projgen.toml into project files
    Synth {
        /// Project definition
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory files are written to
        #[arg(short, long, default_value = ".")]
        outdir: PathBuf,
    },

    /// Preview changes without writing
    Diff {
        /// Project definition
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory files would be written to
        #[arg(short, long, default_value = ".")]
        outdir: PathBuf,
    },

    /// Write a starter projgen.toml (never overwrites)
    Init {
        /// Directory to create projgen.toml in
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}
