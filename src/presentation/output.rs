//! Output Rendering
//!
//! Turns synthesis reports and plans into text or JSON for the CLI.

use serde_json::{json, Value};
use sha2::{Digest, Sha256};

use crate::domain::entities::Rendered;
use crate::domain::services::Differ;
use crate::project::{PlannedFile, SynthReport};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// What `diff` found for one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanStatus {
    Create,
    Update,
    Unchanged,
    Skipped,
    Error,
}

impl PlanStatus {
    pub fn of(file: &PlannedFile) -> Self {
        match (&file.outcome, &file.existing) {
            (Err(_), _) => PlanStatus::Error,
            (Ok(Rendered::Write(_)), None) => PlanStatus::Create,
            (Ok(Rendered::Write(_)), Some(_)) => PlanStatus::Update,
            (Ok(Rendered::Unchanged), _) => PlanStatus::Unchanged,
            (Ok(Rendered::Skipped), _) => PlanStatus::Skipped,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Create => "create",
            PlanStatus::Update => "update",
            PlanStatus::Unchanged => "unchanged",
            PlanStatus::Skipped => "skipped",
            PlanStatus::Error => "error",
        }
    }
}

/// SHA256 of rendered bytes
pub fn content_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("sha256:{:x}", hasher.finalize())
}

pub fn render_report(report: &SynthReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json!({
            "event": "synth",
            "success": report.is_success(),
            "written": report.written,
            "unchanged": report.unchanged,
            "skipped": report.skipped,
            "errors": report
                .errors
                .iter()
                .map(|e| json!({ "path": e.path, "message": e.message }))
                .collect::<Vec<_>>(),
        })
        .to_string(),
        OutputFormat::Text => {
            let mut out = String::new();
            for path in &report.written {
                out.push_str(&format!("  wrote      {}\n", path));
            }
            for path in &report.skipped {
                out.push_str(&format!("  kept       {}\n", path));
            }
            for failure in &report.errors {
                out.push_str(&format!("  failed     {}\n", failure));
            }
            out.push_str(&format!(
                "{} written, {} unchanged, {} skipped, {} failed\n",
                report.written.len(),
                report.unchanged.len(),
                report.skipped.len(),
                report.errors.len()
            ));
            out
        }
    }
}

pub fn render_plan(plan: &[PlannedFile], format: OutputFormat) -> String {
    let differ = Differ::new();
    match format {
        OutputFormat::Json => {
            let files: Vec<Value> = plan
                .iter()
                .map(|file| {
                    let path = file.path.display().to_string();
                    let mut entry = json!({
                        "path": path,
                        "status": PlanStatus::of(file).as_str(),
                    });
                    match &file.outcome {
                        Ok(Rendered::Write(content)) => {
                            let diff = differ.diff(&path, file.existing.as_deref(), content);
                            entry["hash"] = json!(content_hash(content));
                            entry["additions"] = json!(diff.additions);
                            entry["deletions"] = json!(diff.deletions);
                        }
                        Err(message) => entry["error"] = json!(message),
                        _ => {}
                    }
                    entry
                })
                .collect();
            let changes = plan
                .iter()
                .filter(|f| matches!(f.outcome, Ok(Rendered::Write(_))))
                .count();
            json!({ "event": "diff", "changes": changes, "files": files }).to_string()
        }
        OutputFormat::Text => {
            let mut out = String::new();
            let mut changes = 0;
            for file in plan {
                let path = file.path.display().to_string();
                match &file.outcome {
                    Ok(Rendered::Write(content)) => {
                        changes += 1;
                        out.push_str(
                            &differ
                                .diff(&path, file.existing.as_deref(), content)
                                .unified,
                        );
                    }
                    Err(message) => out.push_str(&format!("error: {}: {}\n", path, message)),
                    _ => {}
                }
            }
            if changes == 0 {
                out.push_str("No changes.\n");
            }
            out
        }
    }
}
