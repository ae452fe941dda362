//! Shared [`GraphsonValue`] type used by both encoder and decoder.
//!
//! This is the native side of the codec: the value tree a driver hands to
//! `encode` when binding query parameters, and the tree it gets back from
//! `decode` when consuming a server response.

use crate::error::GraphsonError;

/// A native value that the GraphSON 3.0 codec knows how to convert.
///
/// Maps are ordered key-value pair lists rather than hash maps: the wire
/// format flattens entries in iteration order, so insertion order is part of
/// the data. Map keys are full values because the wire format allows tagged
/// integers (and doubles) as keys; the decoder rejects anything else.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphsonValue {
    /// JSON null. Only ever produced by the decoder; encoding it fails.
    Null,
    /// Boolean, passed through the wire untagged.
    Bool(bool),
    /// Integer. Carried as `i64`, the native integer width of this
    /// implementation (see [`crate::registry::INT_TAG`]).
    Integer(i64),
    /// Floating-point number, tagged `g:Double` on the wire.
    Double(f64),
    /// String, passed through the wire untagged.
    Str(String),
    /// Ordered sequence, tagged `g:List` on the wire.
    List(Vec<GraphsonValue>),
    /// Associative map (ordered key-value pairs), tagged `g:Map` on the
    /// wire unless its keys classify it as a list (see the encoder).
    Map(Vec<(GraphsonValue, GraphsonValue)>),
    /// An opaque value the codec cannot represent. Carries a descriptor of
    /// the concrete type for error reporting; encoding it always fails.
    Unsupported(String),
}

impl GraphsonValue {
    /// Runtime category name, used in error messages.
    pub fn type_name(&self) -> &str {
        match self {
            GraphsonValue::Null => "null",
            GraphsonValue::Bool(_) => "boolean",
            GraphsonValue::Integer(_) => "integer",
            GraphsonValue::Double(_) => "double",
            GraphsonValue::Str(_) => "string",
            GraphsonValue::List(_) => "list",
            GraphsonValue::Map(_) => "map",
            GraphsonValue::Unsupported(name) => name,
        }
    }

    /// Convert to a plain (untagged) JSON tree.
    ///
    /// This is the lossy passthrough used by the [`crate::serializer::Json`]
    /// serializer: no type tags are emitted, and map keys are stringified
    /// the way a JSON object requires.
    ///
    /// # Errors
    ///
    /// Fails with [`GraphsonError::UnsupportedNativeType`] on
    /// [`GraphsonValue::Unsupported`] and with
    /// [`GraphsonError::UnsupportedKeyType`] on map keys that are neither
    /// strings nor numbers.
    pub fn to_plain_json(&self) -> Result<serde_json::Value, GraphsonError> {
        match self {
            GraphsonValue::Null => Ok(serde_json::Value::Null),
            GraphsonValue::Bool(b) => Ok(serde_json::Value::Bool(*b)),
            GraphsonValue::Integer(i) => Ok(serde_json::Value::from(*i)),
            GraphsonValue::Double(f) => Ok(serde_json::Value::from(*f)),
            GraphsonValue::Str(s) => Ok(serde_json::Value::String(s.clone())),
            GraphsonValue::List(items) => {
                let mut arr = Vec::with_capacity(items.len());
                for item in items {
                    arr.push(item.to_plain_json()?);
                }
                Ok(serde_json::Value::Array(arr))
            }
            GraphsonValue::Map(entries) => {
                let mut obj = serde_json::Map::new();
                for (key, value) in entries {
                    let key = match key {
                        GraphsonValue::Str(s) => s.clone(),
                        GraphsonValue::Integer(i) => i.to_string(),
                        GraphsonValue::Double(f) => f.to_string(),
                        other => {
                            return Err(GraphsonError::UnsupportedKeyType(
                                other.type_name().to_owned(),
                            ))
                        }
                    };
                    obj.insert(key, value.to_plain_json()?);
                }
                Ok(serde_json::Value::Object(obj))
            }
            GraphsonValue::Unsupported(name) => {
                Err(GraphsonError::UnsupportedNativeType(name.clone()))
            }
        }
    }
}

impl From<serde_json::Value> for GraphsonValue {
    /// Plain (tag-blind) conversion from a JSON tree. `@type` wrappers are
    /// not interpreted here; that is the decoder's job.
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => GraphsonValue::Null,
            serde_json::Value::Bool(b) => GraphsonValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    GraphsonValue::Integer(i)
                } else {
                    // Out-of-range u64 or fractional: carried as a double.
                    GraphsonValue::Double(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => GraphsonValue::Str(s),
            serde_json::Value::Array(arr) => {
                GraphsonValue::List(arr.into_iter().map(GraphsonValue::from).collect())
            }
            serde_json::Value::Object(obj) => GraphsonValue::Map(
                obj.into_iter()
                    .map(|(k, v)| (GraphsonValue::Str(k), GraphsonValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for GraphsonValue {
    fn from(b: bool) -> Self {
        GraphsonValue::Bool(b)
    }
}

impl From<i64> for GraphsonValue {
    fn from(i: i64) -> Self {
        GraphsonValue::Integer(i)
    }
}

impl From<f64> for GraphsonValue {
    fn from(f: f64) -> Self {
        GraphsonValue::Double(f)
    }
}

impl From<&str> for GraphsonValue {
    fn from(s: &str) -> Self {
        GraphsonValue::Str(s.to_owned())
    }
}

impl From<String> for GraphsonValue {
    fn from(s: String) -> Self {
        GraphsonValue::Str(s)
    }
}

impl From<Vec<GraphsonValue>> for GraphsonValue {
    fn from(items: Vec<GraphsonValue>) -> Self {
        GraphsonValue::List(items)
    }
}
