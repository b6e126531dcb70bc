#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(constraint) = projgen::VersionConstraint::parse(content) {
            // Accepted constraints render back as the trimmed input
            assert_eq!(constraint.as_str(), content.trim());
        }
    }
});
