//! Serializer facade: the driver-facing entry points that pair the codec
//! with the JSON text transcoder.
//!
//! The message layer picks a serializer by name when negotiating with the
//! server and hands it whole request/response bodies. [`GraphSon3`] is the
//! GraphSON 3.0 serializer; [`Json`] is the plain untagged serializer it
//! composes with for the text step.

use crate::decoder::GraphsonDecoder;
use crate::encoder::GraphsonEncoder;
use crate::error::GraphsonError;
use crate::value::GraphsonValue;

/// A body serializer the message layer can negotiate and invoke.
pub trait Serializer {
    /// Serializer name, as used in protocol negotiation.
    fn name(&self) -> &'static str;

    /// MIME type of the produced text.
    fn mime_type(&self) -> &'static str;

    /// Native value to wire text.
    fn serialize(&self, value: &GraphsonValue) -> Result<String, GraphsonError>;

    /// Wire text to native value.
    fn deserialize(&self, text: &str) -> Result<GraphsonValue, GraphsonError>;
}

/// GraphSON 3.0 serializer: tagged wire trees over JSON text.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphSon3 {
    encoder: GraphsonEncoder,
    decoder: GraphsonDecoder,
}

impl GraphSon3 {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Serializer for GraphSon3 {
    fn name(&self) -> &'static str {
        "GRAPHSON3"
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn serialize(&self, value: &GraphsonValue) -> Result<String, GraphsonError> {
        let wire = self.encoder.encode(value)?;
        Ok(serde_json::to_string(&wire)?)
    }

    fn deserialize(&self, text: &str) -> Result<GraphsonValue, GraphsonError> {
        let wire: serde_json::Value = serde_json::from_str(text)?;
        self.decoder.decode(&wire)
    }
}

/// Plain JSON serializer: no type tags in either direction.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl Json {
    pub fn new() -> Self {
        Json
    }
}

impl Serializer for Json {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn serialize(&self, value: &GraphsonValue) -> Result<String, GraphsonError> {
        let plain = value.to_plain_json()?;
        Ok(serde_json::to_string(&plain)?)
    }

    fn deserialize(&self, text: &str) -> Result<GraphsonValue, GraphsonError> {
        let plain: serde_json::Value = serde_json::from_str(text)?;
        Ok(GraphsonValue::from(plain))
    }
}
