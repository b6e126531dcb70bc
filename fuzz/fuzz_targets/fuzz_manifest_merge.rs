#![no_main]

use libfuzzer_sys::fuzz_target;
use projgen::FileEmitter;

fuzz_target!(|data: &[u8]| {
    // Whatever sits in package.json, merging must not panic
    let emitter = FileEmitter::json_merged(
        "package.json",
        serde_json::json!({ "name": "fuzz", "scripts": { "build": "tsc" } }),
    )
    .with_managed_keys(["scripts", "jest"]);
    let _ = emitter.render(Some(data));
});
