//! Property tests for script concatenation.

use proptest::prelude::*;

use projgen::domain::entities::{ScriptRegistry, STEP_SEPARATOR};

fn step() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9 \\-]{0,20}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a script's steps are every contribution, in call order.
    #[test]
    fn property_steps_concatenate_in_order(
        batches in proptest::collection::vec(proptest::collection::vec(step(), 1..4), 1..6)
    ) {
        let mut registry = ScriptRegistry::new();
        for batch in &batches {
            registry.add_script("build", batch.clone());
        }

        let expected: Vec<String> = batches.iter().flatten().cloned().collect();
        prop_assert_eq!(registry.commands("build").unwrap(), expected.as_slice());

        let rendered = registry.render();
        prop_assert_eq!(rendered["build"].as_str().unwrap(), expected.join(STEP_SEPARATOR));
    }

    /// PROPERTY: contributions to one script never touch another.
    #[test]
    fn property_scripts_are_independent(
        a in proptest::collection::vec(step(), 1..5),
        b in proptest::collection::vec(step(), 1..5),
    ) {
        let mut registry = ScriptRegistry::new();
        for (x, y) in a.iter().zip(b.iter()) {
            registry.add_script("a", [x.clone()]);
            registry.add_script("b", [y.clone()]);
        }

        let n = a.len().min(b.len());
        prop_assert_eq!(registry.commands("a").unwrap(), &a[..n]);
        prop_assert_eq!(registry.commands("b").unwrap(), &b[..n]);
    }
}
