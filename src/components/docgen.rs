//! API documentation generator (typedoc)

use std::any::Any;

use crate::error::ProjgenResult;
use crate::project::{Component, Project};

pub const DOCS_DIR: &str = "docs";

#[derive(Debug, Clone)]
pub struct Docgen {
    out_dir: String,
}

impl Docgen {
    pub fn register(project: &mut Project) -> ProjgenResult<()> {
        project.add_dev_dependencies([("typedoc", "^0.17.8")])?;

        let srcdir = project.layout().srcdir.clone();
        project.add_script(
            "docgen",
            [format!("typedoc --out {}/ {}/", DOCS_DIR, srcdir.trim_matches('/'))],
        );

        let anchored = format!("/{}", DOCS_DIR);
        project.gitignore_mut().exclude([anchored.clone()]);
        if let Some(npmignore) = project.npmignore_mut() {
            npmignore.exclude([anchored]);
        }

        project.add_component(Self {
            out_dir: DOCS_DIR.to_string(),
        });
        Ok(())
    }

    pub fn out_dir(&self) -> &str {
        &self.out_dir
    }
}

impl Component for Docgen {
    fn kind(&self) -> &'static str {
        "docgen"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
