//! Conversion into `serde_json` values.

use serde_json::{Map, Value};

use crate::{Document, Node, Object};

impl From<&Node> for Value {
    fn from(node: &Node) -> Self {
        match node {
            Node::String(text) => Value::String(text.clone()),
            Node::Object(obj) => obj.into(),
        }
    }
}

impl From<&Object> for Value {
    fn from(obj: &Object) -> Self {
        let map: Map<String, Value> = obj
            .iter()
            .map(|(key, value)| (key.to_string(), Value::from(value)))
            .collect();
        Value::Object(map)
    }
}

impl Node {
    /// Convert to a JSON value. Strings stay strings; no numeric interpretation.
    pub fn to_json(&self) -> Value {
        self.into()
    }
}

impl Document {
    /// Convert the root object to a JSON object, keeping entry order.
    pub fn to_json(&self) -> Value {
        (&self.root).into()
    }
}
