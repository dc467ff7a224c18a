//! Input/output snapshots attached to use case outcomes.

use crate::outcome::ContextMap;
use serde::Serialize;
use serde_json::Value;

/// Keys reserved for the snapshot's own members; never shadowed by copied
/// input or output properties.
const RESERVED_KEYS: [&str; 2] = ["input", "output"];

/// An immutable snapshot pairing a use case's input and output.
///
/// On construction, every top-level property of the serialized input and then
/// of the serialized output is copied into a merged property map, with output
/// properties winning on key collision. Inputs and outputs that do not
/// serialize to JSON objects (plain strings, numbers, sequences) contribute no
/// properties. The originals remain available by identity through
/// [`Context::input`] and [`Context::output`].
///
/// Created once per use case invocation and stored, serialized, inside the
/// resulting outcome's context map under the invoking use case's label.
#[derive(Debug, Clone, Serialize)]
pub struct Context<I, O> {
    input: I,
    output: O,
    #[serde(flatten)]
    properties: ContextMap,
}

impl<I: Serialize, O: Serialize> Context<I, O> {
    /// Creates a snapshot of the given input and output.
    #[must_use]
    pub fn new(input: I, output: O) -> Self {
        let mut properties = ContextMap::new();
        copy_object_properties(&input, &mut properties);
        copy_object_properties(&output, &mut properties);
        Self {
            input,
            output,
            properties,
        }
    }
}

impl<I, O> Context<I, O> {
    /// Returns the original input.
    #[must_use]
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Returns the original output.
    #[must_use]
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Looks up a merged property by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Returns the merged property map.
    #[must_use]
    pub fn properties(&self) -> &ContextMap {
        &self.properties
    }
}

/// Copies the top-level properties of `value` into `target`, skipping keys
/// reserved for the snapshot's own members.
fn copy_object_properties<T: Serialize>(value: &T, target: &mut ContextMap) {
    if let Ok(Value::Object(map)) = serde_json::to_value(value) {
        for (key, val) in map {
            if RESERVED_KEYS.contains(&key.as_str()) {
                continue;
            }
            target.insert(key, val);
        }
    }
}
