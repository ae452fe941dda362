//! GraphSON 3.0 decoder.
//!
//! Converts a parsed wire tree back into a [`GraphsonValue`]. Dispatch is
//! driven by the `@type` tag: recognized tags go through their per-tag
//! handler, unrecognized tags are an error, and untagged aggregates and
//! scalars pass through with their elements decoded recursively.

use crate::error::GraphsonError;
use crate::registry::{WireTag, TYPE_KEY, VALUE_KEY};
use crate::value::GraphsonValue;

/// GraphSON 3.0 decoder. Stateless; one instance may be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphsonDecoder;

impl GraphsonDecoder {
    pub fn new() -> Self {
        GraphsonDecoder
    }

    /// Decode a wire tree into a native value.
    ///
    /// # Errors
    ///
    /// - [`GraphsonError::UnsupportedWireType`] for a tag outside the
    ///   registry, or for `g:Class` (never representable natively).
    /// - [`GraphsonError::MalformedMap`] / [`GraphsonError::UnsupportedKeyType`]
    ///   for invalid `g:Map` payloads.
    /// - [`GraphsonError::PlatformLimitation`] for a `g:Int64` payload the
    ///   native integer cannot hold.
    /// - [`GraphsonError::MalformedPayload`] when a payload has the wrong
    ///   JSON shape for its tag.
    pub fn decode(&self, item: &serde_json::Value) -> Result<GraphsonValue, GraphsonError> {
        match item {
            serde_json::Value::Object(obj) => {
                if let Some(tag_value) = obj.get(TYPE_KEY) {
                    let payload = obj.get(VALUE_KEY).unwrap_or(&serde_json::Value::Null);
                    return match tag_value.as_str() {
                        Some(tag) => match WireTag::from_tag(tag) {
                            Some(wire) => self.decode_tagged(wire, payload),
                            None => Err(GraphsonError::UnsupportedWireType(tag.to_owned())),
                        },
                        // A non-string discriminator can never be in the
                        // registry.
                        None => Err(GraphsonError::UnsupportedWireType(tag_value.to_string())),
                    };
                }
                // Untagged object: pass-through aggregate, keys preserved.
                let mut entries = Vec::with_capacity(obj.len());
                for (key, value) in obj {
                    entries.push((GraphsonValue::Str(key.clone()), self.decode(value)?));
                }
                Ok(GraphsonValue::Map(entries))
            }
            serde_json::Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(self.decode(item)?);
                }
                Ok(GraphsonValue::List(out))
            }
            // Bare scalar: returned unchanged.
            scalar => Ok(GraphsonValue::from(scalar.clone())),
        }
    }

    fn decode_tagged(
        &self,
        tag: WireTag,
        payload: &serde_json::Value,
    ) -> Result<GraphsonValue, GraphsonError> {
        match tag {
            WireTag::Int32 | WireTag::Date | WireTag::Timestamp => match payload.as_i64() {
                Some(i) => Ok(GraphsonValue::Integer(i)),
                None => Ok(GraphsonValue::from(payload.clone())),
            },
            WireTag::Int64 => self.decode_int64(payload),
            WireTag::Double | WireTag::Float => match payload.as_f64() {
                Some(f) => Ok(GraphsonValue::Double(f)),
                None => Ok(GraphsonValue::from(payload.clone())),
            },
            WireTag::Uuid => Ok(GraphsonValue::from(payload.clone())),
            WireTag::List | WireTag::Set => self.decode_list(tag, payload),
            WireTag::Map => self.decode_map(payload),
            // Pure pass-through wrappers: the payload decodes with no shape
            // change.
            WireTag::Path | WireTag::Tree | WireTag::Property | WireTag::VertexProperty
            | WireTag::TinkerGraph => self.decode(payload),
            WireTag::Vertex => self.decode_element(tag, payload, "vertex"),
            WireTag::Edge => self.decode_element(tag, payload, "edge"),
            WireTag::Class => Err(GraphsonError::UnsupportedWireType(
                WireTag::Class.as_str().to_owned(),
            )),
        }
    }

    /// `g:Int64` is an identity decode, but only if the native integer can
    /// hold the payload faithfully. A JSON number above `i64::MAX` (or a
    /// fractional one smuggled under the tag) cannot be.
    fn decode_int64(&self, payload: &serde_json::Value) -> Result<GraphsonValue, GraphsonError> {
        if payload.is_number() {
            match payload.as_i64() {
                Some(i) => Ok(GraphsonValue::Integer(i)),
                None => Err(GraphsonError::PlatformLimitation),
            }
        } else {
            Ok(GraphsonValue::from(payload.clone()))
        }
    }

    /// `g:List` and `g:Set` decode identically; no deduplication is applied
    /// to a Set.
    fn decode_list(
        &self,
        tag: WireTag,
        payload: &serde_json::Value,
    ) -> Result<GraphsonValue, GraphsonError> {
        let items = payload
            .as_array()
            .ok_or_else(|| GraphsonError::MalformedPayload(tag.as_str().to_owned()))?;
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            out.push(self.decode(item)?);
        }
        Ok(GraphsonValue::List(out))
    }

    /// `g:Map`: a flat alternating sequence `[k0, v0, k1, v1, ...]`,
    /// consumed front to back. Parity and key-type are validated
    /// explicitly; the key check runs on the *decoded* key, so a tagged
    /// integer key is fine while a boolean or nested container is not.
    fn decode_map(&self, payload: &serde_json::Value) -> Result<GraphsonValue, GraphsonError> {
        let items = payload
            .as_array()
            .ok_or_else(|| GraphsonError::MalformedPayload(WireTag::Map.as_str().to_owned()))?;
        if items.len() % 2 != 0 {
            return Err(GraphsonError::MalformedMap);
        }
        let mut entries = Vec::with_capacity(items.len() / 2);
        for pair in items.chunks_exact(2) {
            let key = self.decode(&pair[0])?;
            let value = self.decode(&pair[1])?;
            match key {
                GraphsonValue::Str(_) | GraphsonValue::Integer(_) | GraphsonValue::Double(_) => {}
                other => {
                    return Err(GraphsonError::UnsupportedKeyType(
                        other.type_name().to_owned(),
                    ))
                }
            }
            entries.push((key, value));
        }
        Ok(GraphsonValue::Map(entries))
    }

    /// `g:Vertex` / `g:Edge`: inject a `type` entry naming the element kind
    /// into the payload object, then decode it like any other aggregate.
    fn decode_element(
        &self,
        tag: WireTag,
        payload: &serde_json::Value,
        kind: &str,
    ) -> Result<GraphsonValue, GraphsonError> {
        let obj = payload
            .as_object()
            .ok_or_else(|| GraphsonError::MalformedPayload(tag.as_str().to_owned()))?;
        let mut obj = obj.clone();
        obj.insert("type".to_owned(), serde_json::Value::String(kind.to_owned()));
        self.decode(&serde_json::Value::Object(obj))
    }
}
