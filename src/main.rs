//! projgen CLI - declarative project-configuration synthesizer
//!
//! Usage: projgen <COMMAND>
//!
//! Commands:
//!   synth   Render projgen.toml into project files
//!   diff    Preview changes without writing
//!   init    Write a starter projgen.toml

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use projgen::config::{ProjectOptions, CONFIG_FILE, STARTER_CONFIG};
use projgen::domain::entities::Rendered;
use projgen::presentation::cli::{Cli, Commands};
use projgen::presentation::{render_plan, render_report, OutputFormat};
use projgen::{FileEmitter, FileSystem, LocalFs, Project, TypeScriptProject};

/// Log to stderr so `--json` stdout stays clean.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "projgen=info",
        2 => "projgen=debug",
        _ => "projgen=trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let format = OutputFormat::from_json_flag(cli.json);

    match cli.command {
        Commands::Synth { config, outdir } => cmd_synth(config, &outdir, format),
        Commands::Diff { config, outdir } => cmd_diff(config, &outdir, format),
        Commands::Init { path } => cmd_init(&path, format),
    }
}

/// Resolve options and construct the component tree.
fn build_project(config: Option<PathBuf>, outdir: &Path) -> Result<Project> {
    let path = config.unwrap_or_else(|| outdir.join(CONFIG_FILE));
    if !path.exists() {
        bail!(
            "no project definition at {} (run `projgen init` to create one)",
            path.display()
        );
    }

    let (mut options, warnings) = ProjectOptions::resolve(Some(path.as_path()))
        .with_context(|| format!("failed to load {}", path.display()))?;
    for warning in &warnings {
        eprintln!("warning: {}", warning);
    }

    if options.name.trim().is_empty() {
        options.name = default_name(outdir);
    }
    options.validate(&path)?;

    Ok(TypeScriptProject::build(&options)?)
}

/// Name of the output directory, for definitions that leave `name` out
fn default_name(outdir: &Path) -> String {
    outdir
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_default()
}

fn cmd_synth(config: Option<PathBuf>, outdir: &Path, format: OutputFormat) -> Result<()> {
    let project = build_project(config, outdir)?;
    let report = project.synth(&LocalFs::new(), outdir);

    println!("{}", render_report(&report, format).trim_end());
    report.into_result()?;
    Ok(())
}

fn cmd_diff(config: Option<PathBuf>, outdir: &Path, format: OutputFormat) -> Result<()> {
    let project = build_project(config, outdir)?;
    let plan = project.plan(&LocalFs::new(), outdir);

    print!("{}", render_plan(&plan, format));
    if format == OutputFormat::Json {
        println!();
    }

    let failed = plan.iter().filter(|f| f.outcome.is_err()).count();
    if failed > 0 {
        bail!("{} file(s) cannot be synthesized", failed);
    }
    Ok(())
}

fn cmd_init(path: &Path, format: OutputFormat) -> Result<()> {
    let fs = LocalFs::new();
    let target = path.join(CONFIG_FILE);
    let emitter = FileEmitter::text_once(CONFIG_FILE, STARTER_CONFIG);

    let created = if fs.exists(&target) {
        false
    } else {
        match emitter.render(None)? {
            Rendered::Write(content) => {
                fs.write(&target, &content)?;
                true
            }
            Rendered::Unchanged | Rendered::Skipped => false,
        }
    };

    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "event": "init",
                "path": target.display().to_string(),
                "created": created,
            })
        ),
        OutputFormat::Text if created => println!("Created {}", target.display()),
        OutputFormat::Text => println!("{} already exists, left untouched", target.display()),
    }
    Ok(())
}
