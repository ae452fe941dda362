//! GraphSON 3.0 encoder.
//!
//! Converts a [`GraphsonValue`] into its tagged wire-tree form. Strings and
//! booleans pass through untagged; numbers and containers are wrapped in
//! `{"@type": ..., "@value": ...}` objects. The encoder only ever emits the
//! Int32/Int64, Double, List and Map tags; everything else in the registry
//! is server-side vocabulary the decoder alone handles.

use crate::error::GraphsonError;
use crate::registry::{DOUBLE_TAG, INT_TAG, LIST_TAG, MAP_TAG, TYPE_KEY, VALUE_KEY};
use crate::value::GraphsonValue;

/// GraphSON 3.0 encoder. Stateless; one instance may be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphsonEncoder;

impl GraphsonEncoder {
    pub fn new() -> Self {
        GraphsonEncoder
    }

    /// Encode a native value into a wire tree.
    ///
    /// Recursion is unbounded; a pathologically deep value tree can
    /// overflow the stack. There is no cycle concern since the owned value
    /// tree cannot be cyclic.
    ///
    /// # Errors
    ///
    /// Fails with [`GraphsonError::UnsupportedNativeType`] when the value's
    /// runtime category (or a nested one) is outside the supported set,
    /// naming the concrete type encountered.
    pub fn encode(&self, value: &GraphsonValue) -> Result<serde_json::Value, GraphsonError> {
        match value {
            GraphsonValue::Str(s) => Ok(serde_json::Value::String(s.clone())),
            GraphsonValue::Bool(b) => Ok(serde_json::Value::Bool(*b)),
            GraphsonValue::Integer(i) => Ok(tagged(INT_TAG, serde_json::Value::from(*i))),
            GraphsonValue::Double(f) => Ok(tagged(DOUBLE_TAG, serde_json::Value::from(*f))),
            GraphsonValue::List(items) => self.encode_list(items),
            GraphsonValue::Map(entries) => {
                if classifies_as_list(entries) {
                    self.encode_list(entries.iter().map(|(_, v)| v))
                } else {
                    self.encode_map(entries)
                }
            }
            other => Err(GraphsonError::UnsupportedNativeType(
                other.type_name().to_owned(),
            )),
        }
    }

    /// `g:List`: recursively encoded elements in source order. Keys, if the
    /// source was a map that classified as a list, are dropped.
    fn encode_list<'a, I>(&self, items: I) -> Result<serde_json::Value, GraphsonError>
    where
        I: IntoIterator<Item = &'a GraphsonValue>,
    {
        let mut payload = Vec::new();
        for item in items {
            payload.push(self.encode(item)?);
        }
        Ok(tagged(LIST_TAG, serde_json::Value::Array(payload)))
    }

    /// `g:Map`: a flat payload alternating encoded key, encoded value, in
    /// source iteration order. Keys go through the same dispatch as any
    /// other value, so a string key stays bare and an integer key comes
    /// out tagged.
    fn encode_map(
        &self,
        entries: &[(GraphsonValue, GraphsonValue)],
    ) -> Result<serde_json::Value, GraphsonError> {
        let mut payload = Vec::with_capacity(entries.len() * 2);
        for (key, value) in entries {
            payload.push(self.encode(key)?);
            payload.push(self.encode(value)?);
        }
        Ok(tagged(MAP_TAG, serde_json::Value::Array(payload)))
    }
}

/// List-or-map classification for a native map.
///
/// A map is a list iff it is empty, or its key set sorted ascending is
/// exactly the contiguous range `0..n-1`. Key order does not matter;
/// `{1: "b", 0: "a", 2: "c"}` is a list. Any non-integer key, duplicate
/// key, or gap makes it a map. The reverse ambiguity (a decoded list never
/// turns back into a map) is inherent to the wire format and intentionally
/// left alone.
fn classifies_as_list(entries: &[(GraphsonValue, GraphsonValue)]) -> bool {
    let mut keys = Vec::with_capacity(entries.len());
    for (key, _) in entries {
        match key {
            GraphsonValue::Integer(i) => keys.push(*i),
            _ => return false,
        }
    }
    keys.sort_unstable();
    keys.iter().enumerate().all(|(i, &k)| k == i as i64)
}

/// Wrap a payload in a `{"@type": tag, "@value": payload}` object.
fn tagged(tag: &str, payload: serde_json::Value) -> serde_json::Value {
    let mut obj = serde_json::Map::with_capacity(2);
    obj.insert(TYPE_KEY.to_owned(), serde_json::Value::String(tag.to_owned()));
    obj.insert(VALUE_KEY.to_owned(), payload);
    serde_json::Value::Object(obj)
}
