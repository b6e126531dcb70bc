//! Compiler configuration contracts

use std::path::Path;

use projgen::components::{TypeScriptConfig, TSCONFIG_FILE, TSCONFIG_TEST_FILE};
use projgen::domain::entities::FileContent;
use projgen::Project;

use crate::common::*;

fn json(project: &Project, path: &str) -> serde_json::Value {
    match project.files().find(Path::new(path)).unwrap().content() {
        FileContent::Json(value) => value.clone(),
        other => panic!("unexpected content {:?}", other),
    }
}

/// CONTRACT: disabling the compiler config emits nothing and sets no `types`
#[test]
fn contract_disabled_tsconfig_emits_nothing() {
    let project = build(NO_TSCONFIG_CONFIG);

    assert!(project.files().find(Path::new(TSCONFIG_FILE)).is_none());
    assert!(project.files().find(Path::new(TSCONFIG_TEST_FILE)).is_none());
    assert!(project.manifest().get("types").is_none());
    assert!(project
        .find_all::<TypeScriptConfig>()
        .all(|c| !c.is_configured()));
}

/// CONTRACT: main and test variants coexist with independent scopes
#[test]
fn contract_two_variants_coexist() {
    let project = build(LIBRARY_CONFIG);
    let main = json(&project, TSCONFIG_FILE);
    let test = json(&project, TSCONFIG_TEST_FILE);

    assert_eq!(main["include"], serde_json::json!(["src/**/*.ts"]));
    assert_eq!(
        test["include"],
        serde_json::json!(["src/**/*.ts", "test/**/*.ts"])
    );
    assert_eq!(test["compilerOptions"]["noEmit"], true);
    assert_eq!(project.manifest()["types"], "lib/index.d.ts");
}

/// CONTRACT: defaults < computed paths < overrides
#[test]
fn contract_override_layering() {
    let project = build(CUSTOM_LAYOUT_CONFIG);
    let main = json(&project, TSCONFIG_FILE);
    let options = &main["compilerOptions"];

    assert_eq!(options["target"], "ES2020");
    assert_eq!(options["lib"], serde_json::json!(["es2020", "dom"]));
    assert_eq!(options["rootDir"], "source");
    assert_eq!(options["outDir"], "dist-lib");
    assert_eq!(options["module"], "CommonJS");
    assert_eq!(project.manifest()["main"], "dist-lib/index.js");
    assert_eq!(project.manifest()["types"], "dist-lib/index.d.ts");

    // overrides reach the test variant too
    let test = json(&project, TSCONFIG_TEST_FILE);
    assert_eq!(test["compilerOptions"]["target"], "ES2020");
}

#[test]
fn contract_app_has_no_types_or_main() {
    let project = build(APP_CONFIG);
    let manifest = project.manifest();

    assert!(manifest.get("main").is_none());
    assert!(manifest.get("types").is_none());
    assert!(project.files().find(Path::new(TSCONFIG_FILE)).is_some());
}
