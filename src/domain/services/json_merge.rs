//! JSON merge rules
//!
//! Two flavours are used by the synthesizer:
//! - `overlay_shallow`: layered option objects. Keys of the later layer replace
//!   keys of the earlier one wholesale; nested arrays and objects are not merged.
//! - `merge_preserving`: rendering into a hand-edited file. Top-level keys the
//!   synthesizer does not emit survive; every key it does emit is replaced
//!   wholesale, so a section it owns (`scripts`, `devDependencies`, ...) always
//!   reflects current state.

use serde_json::{Map, Value};

/// Key-by-key overlay of `layer` onto `base`. Non-object inputs: `layer` wins.
pub fn overlay_shallow(base: Value, layer: Value) -> Value {
    match (base, layer) {
        (Value::Object(mut base_map), Value::Object(layer_map)) => {
            for (key, value) in layer_map {
                base_map.insert(key, value);
            }
            Value::Object(base_map)
        }
        (_, layer) => layer,
    }
}

/// Fold layers left to right with `overlay_shallow`
pub fn overlay_layers<I>(layers: I) -> Value
where
    I: IntoIterator<Item = Value>,
{
    layers
        .into_iter()
        .fold(Value::Object(Map::new()), overlay_shallow)
}

/// Merge `held` into `existing`, keeping every top-level key only `existing` has.
///
/// Values are never merged below the top level: a held key owns its whole
/// subtree, so entries dropped from held state disappear from the file.
pub fn merge_preserving(existing: Value, held: Value) -> Value {
    overlay_shallow(existing, held)
}
