//! Synthesis contracts
//!
//! Synthesis is a pure render of construction-time state: idempotent, mode
//! respecting, and non-transactional across files.

use std::path::Path;

use projgen::{LocalFs, MemoryFs, ProjgenError};

use crate::common::*;

/// CONTRACT: synthesizing twice yields byte-identical files
#[test]
fn contract_synthesis_is_idempotent() {
    let env = TestEnv::new();
    let project = build(LIBRARY_CONFIG);

    let first = project.synth(&LocalFs::new(), env.root());
    assert!(first.is_success(), "{:?}", first.errors);
    let manifest = env.read("package.json");
    let tsconfig = env.read("tsconfig.json");

    let second = project.synth(&LocalFs::new(), env.root());
    assert!(second.written.is_empty(), "rewrote {:?}", second.written);
    assert_eq!(second.unchanged.len() + second.skipped.len(), first.written.len());
    assert_eq!(env.read("package.json"), manifest);
    assert_eq!(env.read("tsconfig.json"), tsconfig);
}

/// CONTRACT: rebuilding from the same options renders the same bytes
#[test]
fn contract_rebuild_is_deterministic() {
    let a = MemoryFs::new();
    let b = MemoryFs::new();
    build(LIBRARY_CONFIG).synth(&a, Path::new("out"));
    build(LIBRARY_CONFIG).synth(&b, Path::new("out"));

    assert_eq!(a.snapshot(), b.snapshot());
}

/// CONTRACT: replace-mode files discard prior content
#[test]
fn contract_replace_discards_prior_content() {
    let env = TestEnv::new();
    env.write("tsconfig.json", r#"{"compilerOptions": {"userKey": true}}"#);

    build(LIBRARY_CONFIG).synth(&LocalFs::new(), env.root());
    let tsconfig = env.read_json("tsconfig.json");

    assert!(tsconfig["compilerOptions"].get("userKey").is_none());
    assert_eq!(tsconfig["compilerOptions"]["outDir"], "lib");
}

/// CONTRACT: merge-preserve manifest keeps unknown top-level keys; the
/// sections projgen owns are rendered from current state
#[test]
fn contract_manifest_keeps_unknown_keys() {
    let env = TestEnv::new();
    env.write(
        "package.json",
        r#"{"name": "stale", "author": "Ada", "keywords": ["x"], "scripts": {"release": "np"}}"#,
    );

    build(LIBRARY_CONFIG).synth(&LocalFs::new(), env.root());
    let manifest = env.read_json("package.json");

    assert_eq!(manifest["name"], "widgets");
    assert_eq!(manifest["author"], "Ada");
    assert_eq!(manifest["keywords"], serde_json::json!(["x"]));
    assert!(manifest["scripts"].get("release").is_none());
    assert_eq!(manifest["scripts"]["compile"], "tsc");
}

/// CONTRACT: turning a tool off removes everything it put in the manifest
#[test]
fn contract_disabled_component_leaves_manifest() {
    let env = TestEnv::new();
    let first = build(
        r#"
name = "widgets"

[dev_dependencies]
left-pad = "^1.3.0"
"#,
    );
    assert!(first.synth(&LocalFs::new(), env.root()).is_success());
    let mut edited = env.read_json("package.json");
    edited["author"] = serde_json::json!("Ada");
    edited["keywords"] = serde_json::json!(["widgets"]);
    env.write("package.json", &edited.to_string());

    let second = build("name = \"widgets\"\neslint = false\njest = false\n");
    assert!(second.synth(&LocalFs::new(), env.root()).is_success());
    let manifest = env.read_json("package.json");

    let scripts = &manifest["scripts"];
    assert!(scripts.get("eslint").is_none());
    assert!(scripts.get("pretest").is_none());
    assert!(scripts.get("test").is_none());
    assert_eq!(scripts["build"], "npm run compile && npm run package");
    let dev = &manifest["devDependencies"];
    for gone in ["jest", "ts-jest", "eslint", "left-pad"] {
        assert!(dev.get(gone).is_none(), "{} still pinned", gone);
    }
    assert!(dev.get("typescript").is_some());
    assert!(manifest.get("jest").is_none());
    assert_eq!(manifest["author"], "Ada");
    assert_eq!(manifest["keywords"], serde_json::json!(["widgets"]));
}

/// CONTRACT: replace and create-only files need not hold UTF-8 text
#[test]
fn contract_non_utf8_files_do_not_fail_synthesis() {
    let env = TestEnv::new();
    std::fs::write(env.project_path(".gitignore"), [0xff, 0xfe, b'\n']).unwrap();
    std::fs::create_dir_all(env.project_path("src")).unwrap();
    std::fs::write(env.project_path("src/index.ts"), b"//\xe9\n").unwrap();

    let report = build(LIBRARY_CONFIG).synth(&LocalFs::new(), env.root());

    assert!(report.errors.is_empty(), "{:?}", report.errors);
    assert!(report.written.contains(&".gitignore".to_string()));
    assert!(report.skipped.contains(&"src/index.ts".to_string()));
    assert!(env.read(".gitignore").contains("/lib"));
    assert_eq!(
        std::fs::read(env.project_path("src/index.ts")).unwrap(),
        b"//\xe9\n"
    );
}

/// CONTRACT: create-only files are never touched once present
#[test]
fn contract_sample_files_written_once() {
    let env = TestEnv::new();
    env.write("src/index.ts", "export const mine = 1;\n");

    let report = build(LIBRARY_CONFIG).synth(&LocalFs::new(), env.root());

    assert!(report.skipped.contains(&"src/index.ts".to_string()));
    assert!(report.written.contains(&"test/hello.test.ts".to_string()));
    assert_eq!(env.read("src/index.ts"), "export const mine = 1;\n");
}

/// CONTRACT: one failing file does not roll back or block the others
#[test]
fn contract_failure_is_isolated() {
    let fs = MemoryFs::new();
    let out = Path::new("out");
    fs.deny_writes(out.join("tsconfig.json"));

    let report = build(LIBRARY_CONFIG).synth(&fs, out);

    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].path, "tsconfig.json");
    assert!(fs.get(&out.join("package.json")).is_some());
    assert!(fs.get(&out.join("tsconfig.jest.json")).is_some());
    assert!(matches!(
        report.into_result().unwrap_err(),
        ProjgenError::SynthFailed { failed: 1, .. }
    ));
}

/// CONTRACT: synthesis does not mutate project state
#[test]
fn contract_synth_leaves_state_alone() {
    let project = build(LIBRARY_CONFIG);
    let before = project.manifest();
    let emitters = project.emitters();

    project.synth(&MemoryFs::new(), Path::new("out"));

    assert_eq!(project.manifest(), before);
    assert_eq!(project.emitters(), emitters);
}
