//! ESLint lint tooling

use std::any::Any;

use serde_json::json;

use super::jest::test_tsconfig;
use crate::domain::entities::FileEmitter;
use crate::error::ProjgenResult;
use crate::project::{Component, Project};

pub const ESLINTRC_FILE: &str = ".eslintrc.json";

const TS_ESLINT_VERSION: &str = "^4.3.0";

#[derive(Debug, Clone, Default)]
pub struct EslintOptions {
    /// Directories to lint; empty means source and test directories
    pub dirs: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Eslint {
    dirs: Vec<String>,
}

impl Eslint {
    pub fn register(project: &mut Project, options: EslintOptions) -> ProjgenResult<()> {
        project.add_dev_dependencies([
            ("eslint", "^7.6.0"),
            ("@typescript-eslint/eslint-plugin", TS_ESLINT_VERSION),
            ("@typescript-eslint/parser", TS_ESLINT_VERSION),
            ("eslint-plugin-import", "^2.22.0"),
        ])?;

        let dirs = if options.dirs.is_empty() {
            let layout = project.layout();
            vec![layout.srcdir.clone(), layout.testdir.clone()]
        } else {
            options.dirs
        };

        let mut parser_options = json!({
            "ecmaVersion": 2018,
            "sourceType": "module",
        });
        if let Some(tsconfig) = test_tsconfig(project) {
            parser_options["project"] = json!(format!("./{}", tsconfig));
        }

        project.add_file(FileEmitter::json(
            ESLINTRC_FILE,
            json!({
                "env": { "jest": true, "node": true },
                "root": true,
                "plugins": ["@typescript-eslint", "import"],
                "parser": "@typescript-eslint/parser",
                "parserOptions": parser_options,
                "extends": ["plugin:import/typescript"],
                "ignorePatterns": ["*.js", "*.d.ts", "node_modules/", "coverage"],
            }),
        ))?;

        project.add_script("eslint", [format!("eslint --ext .ts {}", dirs.join(" "))]);
        let run_eslint = project.run_script("eslint");
        project.add_script("test", [run_eslint]);

        if let Some(npmignore) = project.npmignore_mut() {
            npmignore.exclude([format!("/{}", ESLINTRC_FILE)]);
        }

        project.add_component(Self { dirs });
        Ok(())
    }

    pub fn dirs(&self) -> &[String] {
        &self.dirs
    }
}

impl Component for Eslint {
    fn kind(&self) -> &'static str {
        "eslint"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
