//! Property tests for dependency declarations.

use proptest::prelude::*;

use projgen::domain::entities::{DependencyKind, DependencySet};
use projgen::VersionConstraint;

fn constraint() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just(""), Just("^"), Just("~"), Just(">="), Just("=")],
        0u32..30,
        0u32..30,
        0u32..30,
    )
        .prop_map(|(op, major, minor, patch)| format!("{}{}.{}.{}", op, major, minor, patch))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the last declaration of a package wins.
    #[test]
    fn property_last_write_wins(
        versions in proptest::collection::vec(constraint(), 1..8)
    ) {
        let mut set = DependencySet::new(DependencyKind::Dev);
        for version in &versions {
            set.add_dependencies([("typescript", version.as_str())]).unwrap();
        }

        prop_assert_eq!(set.len(), 1);
        prop_assert_eq!(set.get("typescript").unwrap().as_str(), versions.last().unwrap().as_str());
    }

    /// PROPERTY: well-formed ranges are accepted verbatim.
    #[test]
    fn property_well_formed_ranges_accepted(
        low in constraint(),
        high in constraint(),
    ) {
        let joined = format!("{} || {}", low, high);
        let parsed = VersionConstraint::parse(&joined).unwrap();
        prop_assert_eq!(parsed.as_str(), joined.as_str());
    }

    /// PROPERTY: parsing never panics.
    #[test]
    fn property_parse_never_panics(input in "(?s).{0,64}") {
        let _ = VersionConstraint::parse(&input);
    }

    /// PROPERTY: rendering lists packages sorted by name.
    #[test]
    fn property_render_is_sorted(
        names in proptest::collection::vec("[a-z]{1,8}", 1..10)
    ) {
        let mut set = DependencySet::new(DependencyKind::Runtime);
        for name in &names {
            set.add_dependencies([(name.as_str(), "^1.0.0")]).unwrap();
        }

        let rendered: Vec<String> = set.render().keys().cloned().collect();
        let mut sorted = rendered.clone();
        sorted.sort();
        prop_assert_eq!(rendered, sorted);
    }
}
