//! Jest test tooling
//!
//! Contributes the test runner, its manifest configuration and the `test`
//! lifecycle script. Where the test step lands in `build` depends on
//! `compile_before_test`:
//! - `false`: `run test` is added now, before the preset adds `run compile`,
//!   and a `pretest` cleanup removes stale compiled output
//! - `true`: the caller registers Jest after the compile step; no cleanup

use std::any::Any;

use serde_json::json;

use super::compiler_options::CompilerOptions;
use super::typescript_config::{ConfigPurpose, TypeScriptConfig, TypeScriptConfigOptions};
use crate::domain::value_objects::Layout;
use crate::error::ProjgenResult;
use crate::project::{Component, Project};

pub const JEST_VERSION: &str = "^26.6.3";
pub const TEST_COMMAND: &str = "jest --passWithNoTests";

#[derive(Debug, Clone, Default)]
pub struct JestOptions {
    pub compile_before_test: bool,
    /// Caller overrides shared with the main tsconfig
    pub tsconfig_overrides: CompilerOptions,
}

#[derive(Debug, Clone)]
pub struct Jest {
    compile_before_test: bool,
    tsconfig: Option<String>,
}

impl Jest {
    pub fn register(project: &mut Project, options: JestOptions) -> ProjgenResult<()> {
        project.add_dev_dependencies([
            ("jest", JEST_VERSION),
            ("ts-jest", JEST_VERSION),
            ("@types/jest", JEST_VERSION),
        ])?;

        let main_configured = project
            .find_all::<TypeScriptConfig>()
            .any(|c| c.purpose() == ConfigPurpose::Build && c.is_configured());
        if main_configured {
            TypeScriptConfig::register(
                project,
                TypeScriptConfigOptions::test().with_overrides(options.tsconfig_overrides),
            )?;
        }
        let tsconfig = test_tsconfig(project);

        let layout = project.layout().clone();
        let mut config = json!({
            "preset": "ts-jest",
            "testMatch": [format!("**/{}/**/*.test.ts", layout.testdir.trim_matches('/'))],
            "collectCoverage": true,
            "coverageDirectory": "coverage",
        });
        if let Some(file) = &tsconfig {
            config["globals"] = json!({ "ts-jest": { "tsconfig": file } });
        }
        project.add_manifest_field("jest", config);

        project.add_script("test", [TEST_COMMAND]);
        let run_test = project.run_script("test");
        project.add_script("build", [run_test]);
        if !options.compile_before_test {
            let libdir = Layout::shell_word(layout.libdir.trim_matches('/'));
            project.add_script("pretest", [format!("rm -fr {}/", libdir)]);
        }

        project.gitignore_mut().exclude(["/coverage"]);
        if let Some(npmignore) = project.npmignore_mut() {
            npmignore.exclude(["/coverage".to_string(), format!("/{}", layout.testdir)]);
        }

        project.add_component(Self {
            compile_before_test: options.compile_before_test,
            tsconfig,
        });
        Ok(())
    }

    pub fn compile_before_test(&self) -> bool {
        self.compile_before_test
    }

    /// Compiler config the test runner was pointed at
    pub fn tsconfig(&self) -> Option<&str> {
        self.tsconfig.as_deref()
    }
}

impl Component for Jest {
    fn kind(&self) -> &'static str {
        "jest"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Test tsconfig if one is registered, else the main one, else nothing.
pub(crate) fn test_tsconfig(project: &Project) -> Option<String> {
    let configured: Vec<_> = project
        .find_all::<TypeScriptConfig>()
        .filter_map(|c| c.file().map(|f| (c.purpose(), f.display().to_string())))
        .collect();
    configured
        .iter()
        .find(|(purpose, _)| *purpose == ConfigPurpose::Test)
        .or_else(|| configured.first())
        .map(|(_, file)| file.clone())
}
