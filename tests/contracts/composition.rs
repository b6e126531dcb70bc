//! Composition contracts
//!
//! Components contribute in registration order; later contributions append
//! (scripts) or override (dependencies, manifest fields).

use projgen::domain::entities::DependencyKind;
use projgen::project::ProjectSettings;
use projgen::{Project, ProjgenError};

use crate::common::*;

fn empty() -> Project {
    Project::new(ProjectSettings::new("demo")).unwrap()
}

/// CONTRACT: same-name scripts concatenate in call order
#[test]
fn contract_build_script_assembled_in_contribution_order() {
    let mut project = empty();
    project.add_script("build", ["test"]);
    project.add_script("build", ["compile"]);
    project.add_script("build", ["package"]);

    assert_eq!(
        project.scripts().commands("build").unwrap(),
        ["test", "compile", "package"]
    );
    assert_eq!(project.manifest()["scripts"]["build"], "test && compile && package");
}

/// CONTRACT: last registration of a dependency wins
#[test]
fn contract_dependency_last_write_wins() {
    let mut project = empty();
    project.add_dev_dependencies([("typescript", "^3.8.0")]).unwrap();
    project.add_dev_dependencies([("typescript", "^3.9.5")]).unwrap();

    assert_eq!(
        project
            .dependency_set(DependencyKind::Dev)
            .get("typescript")
            .unwrap()
            .as_str(),
        "^3.9.5"
    );
}

/// CONTRACT: malformed constraints fail at construction, leaving state untouched
#[test]
fn contract_invalid_constraint_fails_fast() {
    let mut project = empty();
    let err = project
        .add_dev_dependencies([("jest", "^26.0.0"), ("typescript", "^^3")])
        .unwrap_err();

    assert!(matches!(err, ProjgenError::InvalidVersionConstraint { .. }));
    assert!(!project.has_dependency("jest"));
}

#[test]
fn contract_invalid_constraint_in_config_fails_build() {
    let mut options = projgen::presets::library("bad");
    options
        .dependencies
        .insert("left-pad".to_string(), "not a version".to_string());

    let err = projgen::TypeScriptProject::build(&options).unwrap_err();
    assert!(matches!(err, ProjgenError::InvalidVersionConstraint { .. }));
}

/// CONTRACT: test-first projects build `[test, compile]` and clean compiled output first
#[test]
fn contract_test_before_compile() {
    let project = build(LIBRARY_CONFIG);

    assert_eq!(
        project.scripts().commands("build").unwrap(),
        ["npm run test", "npm run compile", "npm run package"]
    );
    assert_eq!(project.scripts().commands("pretest").unwrap(), ["rm -fr lib/"]);
}

/// CONTRACT: compile-first projects build `[compile, test]` with no cleanup
#[test]
fn contract_compile_before_test() {
    let project = build(COMPILE_FIRST_CONFIG);

    assert_eq!(
        project.scripts().commands("build").unwrap(),
        ["npm run compile", "npm run test", "npm run package"]
    );
    assert!(!project.scripts().contains("pretest"));
}

/// CONTRACT: later components see earlier contributions
#[test]
fn contract_lint_config_follows_registered_tsconfig() {
    let project = build(LIBRARY_CONFIG);
    let eslintrc = project
        .files()
        .find(std::path::Path::new(".eslintrc.json"))
        .unwrap();

    match eslintrc.content() {
        projgen::domain::entities::FileContent::Json(value) => {
            assert_eq!(value["parserOptions"]["project"], "./tsconfig.jest.json");
        }
        other => panic!("unexpected content {:?}", other),
    }
}

/// CONTRACT: package manager flows into every cross-script invocation
#[test]
fn contract_package_manager_in_scripts() {
    let project = build("name = \"y\"\npackage_manager = \"yarn\"\n");
    let build_steps = project.scripts().commands("build").unwrap();

    assert!(build_steps.iter().all(|step| step.starts_with("yarn run ")));
    assert!(project.scripts().commands("package").unwrap()[0].contains("yarn pack"));
}

/// CONTRACT: a second emitter for a taken path is rejected
#[test]
fn contract_file_collision_detected() {
    let mut project = build(LIBRARY_CONFIG);
    let err = projgen::TypeScriptConfig::register(
        &mut project,
        projgen::TypeScriptConfigOptions::build(),
    )
    .unwrap_err();

    assert!(matches!(err, ProjgenError::FileCollision { .. }));
}
