//! Token injection over untyped document trees.
//!
//! Rewrites string scalars and mapping keys, substituting `{name}`
//! placeholders with values captured by a path match. Unknown placeholders
//! are left verbatim, braces included.

use serde_yaml::Value;

use crate::pattern::TokenBindings;

/// Substitute every bound `{name}` placeholder throughout `value` in place.
///
/// Mapping values are rewritten before keys; a key whose rewritten form
/// differs from the original is moved to the new key. Two original keys
/// rewriting to the same string resolve last-write-wins. Sequences keep
/// their order and length; non-string scalars pass through unchanged.
pub fn inject_tokens(value: &mut Value, bindings: &TokenBindings) {
    if bindings.is_empty() {
        return;
    }
    match value {
        Value::String(s) => inject_str(s, bindings),
        Value::Sequence(seq) => {
            for item in seq.iter_mut() {
                inject_tokens(item, bindings);
            }
        }
        Value::Mapping(map) => {
            for (_, v) in map.iter_mut() {
                inject_tokens(v, bindings);
            }
            let rewrites: Vec<(Value, Value)> = map
                .keys()
                .filter_map(|key| {
                    let mut rewritten = key.clone();
                    inject_tokens(&mut rewritten, bindings);
                    (rewritten != *key).then(|| (key.clone(), rewritten))
                })
                .collect();
            for (original, rewritten) in rewrites {
                if let Some(v) = map.remove(&original) {
                    map.insert(rewritten, v);
                }
            }
        }
        _ => {}
    }
}

fn inject_str(s: &mut String, bindings: &TokenBindings) {
    for (name, value) in bindings {
        let placeholder = format!("{{{name}}}");
        if s.contains(&placeholder) {
            *s = s.replace(&placeholder, value);
        }
    }
}
