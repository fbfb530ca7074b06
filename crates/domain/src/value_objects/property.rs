//! Free-form named properties (the entity's extension slot)

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A caller-defined named value not covered by the fixed schema
///
/// Properties are purely additive: the owning entity keeps them in insertion
/// order and several entries may share the same name (multi-valued).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    name: String,
    value: Value,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}
