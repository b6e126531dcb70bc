//! Test environment builder for isolated projgen testing.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use projgen::{ProjectOptions, Project, TypeScriptProject};

/// Result of running a projgen CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated project directory
pub struct TestEnv {
    pub project_root: TempDir,
    projgen_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("Failed to create temp dir"),
            projgen_bin: PathBuf::from(env!("CARGO_BIN_EXE_projgen")),
        }
    }

    /// Environment with `projgen.toml` already written
    pub fn with_config(config: &str) -> Self {
        let env = Self::new();
        env.write("projgen.toml", config);
        env
    }

    pub fn root(&self) -> &Path {
        self.project_root.path()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn read_json(&self, relative: &str) -> serde_json::Value {
        serde_json::from_str(&self.read(relative))
            .unwrap_or_else(|e| panic!("{} is not JSON: {}", relative, e))
    }

    /// Run projgen CLI from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run projgen CLI with extra environment variables set
    pub fn run_with_env(&self, args: &[&str], vars: &[(&str, &str)]) -> TestResult {
        let output = Command::new(&self.projgen_bin)
            .current_dir(self.root())
            .args(args)
            .env_remove("RUST_LOG")
            .env_remove("PROJGEN_PACKAGE_MANAGER")
            .env_remove("PROJGEN_TYPESCRIPT_VERSION")
            .envs(vars.iter().copied())
            .output()
            .expect("Failed to execute projgen");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Parse a fixture and build its component tree in-process
pub fn build(config: &str) -> Project {
    let (options, warnings) =
        projgen::config::from_toml_str(config, Path::new("projgen.toml")).expect("valid config");
    assert!(warnings.is_empty(), "unexpected warnings: {:?}", warnings);
    build_options(&options)
}

pub fn build_options(options: &ProjectOptions) -> Project {
    TypeScriptProject::build(options).expect("project should build")
}
