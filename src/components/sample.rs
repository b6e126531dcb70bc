//! Starter sources, written once and then owned by the user

use std::any::Any;
use std::path::PathBuf;

use crate::domain::entities::FileEmitter;
use crate::error::ProjgenResult;
use crate::project::{Component, Project};

const SAMPLE_SOURCE: &str = "export class Hello {
  public sayHello() {
    return 'hello, world!';
  }
}
";

const SAMPLE_TEST: &str = "import { Hello } from '../src';

test('hello', () => {
  expect(new Hello().sayHello()).toBe('hello, world!');
});
";

#[derive(Debug, Clone, Default)]
pub struct SampleOptions {
    /// Also write a sample test
    pub with_test: bool,
}

#[derive(Debug, Clone)]
pub struct Sample {
    files: Vec<PathBuf>,
}

impl Sample {
    pub fn register(project: &mut Project, options: SampleOptions) -> ProjgenResult<()> {
        let layout = project.layout().clone();
        let mut files = vec![PathBuf::from(&layout.srcdir).join("index.ts")];
        if options.with_test {
            files.push(PathBuf::from(&layout.testdir).join("hello.test.ts"));
        }

        project.add_file(FileEmitter::text_once(files[0].clone(), SAMPLE_SOURCE))?;
        if let Some(test) = files.get(1) {
            project.add_file(FileEmitter::text_once(
                test.clone(),
                SAMPLE_TEST.replace("../src", &format!("../{}", layout.srcdir)),
            ))?;
        }

        project.add_component(Self { files });
        Ok(())
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

impl Component for Sample {
    fn kind(&self) -> &'static str {
        "sample"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
