#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Project definitions come from disk; parsing must never panic
        let _ = projgen::config::from_toml_str(content, std::path::Path::new("projgen.toml"));
    }
});
