//! Property tests for synthesis over generated option sets.

use std::path::Path;

use proptest::prelude::*;

use projgen::presets::library;
use projgen::MemoryFs;

use crate::common::build_options;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: any toggle combination synthesizes cleanly and idempotently.
    #[test]
    fn property_synth_is_idempotent(
        jest in any::<bool>(),
        eslint in any::<bool>(),
        docgen in any::<bool>(),
        package in any::<bool>(),
        npmignore in any::<bool>(),
        disable_tsconfig in any::<bool>(),
        compile_before_test in any::<bool>(),
    ) {
        let mut options = library("generated");
        options.jest = jest;
        options.eslint = eslint;
        options.docgen = docgen;
        options.package = package;
        options.npmignore = npmignore;
        options.disable_tsconfig = disable_tsconfig;
        options.compile_before_test = compile_before_test;

        let project = build_options(&options);
        let fs = MemoryFs::new();
        let out = Path::new("out");

        let first = project.synth(&fs, out);
        prop_assert!(first.is_success(), "{:?}", first.errors);
        let snapshot = fs.snapshot();

        let second = project.synth(&fs, out);
        prop_assert!(second.written.is_empty());
        prop_assert_eq!(fs.snapshot(), snapshot);
    }

    /// PROPERTY: the build script always compiles exactly once.
    #[test]
    fn property_build_compiles_once(
        jest in any::<bool>(),
        package in any::<bool>(),
        compile_before_test in any::<bool>(),
    ) {
        let mut options = library("generated");
        options.jest = jest;
        options.package = package;
        options.compile_before_test = compile_before_test;

        let project = build_options(&options);
        let steps = project.scripts().commands("build").unwrap();
        prop_assert_eq!(steps.iter().filter(|s| *s == "npm run compile").count(), 1);
        prop_assert_eq!(steps.contains(&"npm run test".to_string()), jest);
    }
}
