//! Package tarball step appended to `build`

use std::any::Any;

use crate::error::ProjgenResult;
use crate::project::{Component, Project};

pub const DIST_DIR: &str = "dist";

#[derive(Debug, Clone)]
pub struct Packaging {
    command: String,
}

impl Packaging {
    pub fn register(project: &mut Project) -> ProjgenResult<()> {
        let pack = project.package_manager().pack_command();
        let command = format!(
            "rm -fr {dist} && mkdir -p {dist}/js && {pack} && mv *.tgz {dist}/js/",
            dist = DIST_DIR,
            pack = pack
        );
        project.add_script("package", [command.clone()]);
        let run_package = project.run_script("package");
        project.add_script("build", [run_package]);

        let anchored = format!("/{}", DIST_DIR);
        project.gitignore_mut().exclude([anchored.clone()]);
        if let Some(npmignore) = project.npmignore_mut() {
            npmignore.exclude([anchored]);
        }

        project.add_component(Self { command });
        Ok(())
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl Component for Packaging {
    fn kind(&self) -> &'static str {
        "packaging"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
