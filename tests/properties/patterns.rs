//! Property tests for ignore pattern lists.

use std::path::Path;

use proptest::prelude::*;

use projgen::domain::value_objects::{PatternKind, PatternList, GENERATED_MARKER};

fn dir() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,6}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: rendering keeps every entry, in contribution order.
    #[test]
    fn property_render_preserves_order(
        ops in proptest::collection::vec((any::<bool>(), dir()), 0..12)
    ) {
        let mut list = PatternList::new();
        let mut expected = Vec::new();
        for (include, name) in &ops {
            let pattern = format!("/{}", name);
            if *include {
                list.include([pattern.clone()]);
                expected.push(format!("!{}", pattern));
            } else {
                list.exclude([pattern.clone()]);
                expected.push(pattern);
            }
        }

        prop_assert_eq!(list.render(), expected.clone());
        let file = list.render_file();
        prop_assert_eq!(file[0].as_str(), GENERATED_MARKER);
        prop_assert_eq!(&file[1..], expected.as_slice());
    }

    /// PROPERTY: the last entry matching a path decides whether it is ignored.
    #[test]
    fn property_last_match_wins(
        target in dir(),
        kinds in proptest::collection::vec(any::<bool>(), 1..6),
    ) {
        let mut list = PatternList::new();
        for include in &kinds {
            if *include {
                list.include([format!("/{}", target)]);
            } else {
                list.exclude([format!("/{}", target)]);
            }
        }

        let last_is_exclude = list.entries().last().unwrap().kind == PatternKind::Exclude;
        prop_assert_eq!(list.is_ignored(Path::new(&target), true), last_is_exclude);
    }
}
