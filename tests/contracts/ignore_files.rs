//! Ignore-file contracts
//!
//! Compiled output is untracked but shipped; sources are tracked but not shipped.

use std::path::Path;

use crate::common::*;

#[test]
fn contract_libdir_untracked_but_shipped() {
    let project = build(LIBRARY_CONFIG);
    let gitignore = project.gitignore();
    let npmignore = project.npmignore().unwrap();

    assert!(gitignore.is_ignored(Path::new("lib"), true));
    assert!(!gitignore.is_ignored(Path::new("src/index.ts"), false));

    assert!(npmignore.is_ignored(Path::new("src"), true));
    assert!(!npmignore.is_ignored(Path::new("lib"), true));
    assert!(!npmignore.is_ignored(Path::new("lib/index.d.ts"), false));
}

#[test]
fn contract_include_renders_after_exclude() {
    let project = build(LIBRARY_CONFIG);
    let lines = project.npmignore().unwrap().render();

    let src = lines.iter().position(|l| l == "/src").unwrap();
    let lib = lines.iter().position(|l| l == "!/lib").unwrap();
    assert!(src < lib);
}

#[test]
fn contract_custom_layout_drives_ignores() {
    let project = build(CUSTOM_LAYOUT_CONFIG);

    assert!(project.gitignore().is_ignored(Path::new("dist-lib"), true));
    let npmignore = project.npmignore().unwrap();
    assert!(npmignore.is_ignored(Path::new("source"), true));
    assert!(npmignore.is_ignored(Path::new("spec"), true));
    assert!(!npmignore.is_ignored(Path::new("dist-lib/index.js"), false));
}

#[test]
fn contract_out_dir_override_moves_every_output_path() {
    let project = build(
        r#"
name = "moved"

[compiler_options]
outDir = "dist"
"#,
    );
    let manifest = project.manifest();

    assert!(project.gitignore().is_ignored(Path::new("dist"), true));
    assert!(!project.gitignore().is_ignored(Path::new("lib"), true));
    assert!(!project.npmignore().unwrap().is_ignored(Path::new("dist/index.js"), false));
    assert_eq!(manifest["main"], "dist/index.js");
    assert_eq!(manifest["types"], "dist/index.d.ts");
    assert_eq!(manifest["scripts"]["pretest"], "rm -fr dist/");
}

#[test]
fn contract_npmignore_can_be_disabled() {
    let env = TestEnv::new();
    let project = build("name = \"x\"\nnpmignore = false\n");

    let report = project.synth(&projgen::LocalFs::new(), env.root());
    assert!(report.is_success());
    assert!(!env.project_path(".npmignore").exists());
    assert!(env.project_path(".gitignore").exists());
}
