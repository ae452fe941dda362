//! Error type for GraphSON 3.0 encoding and decoding.

use thiserror::Error;

/// Errors raised by the GraphSON 3.0 codec and serializer facade.
///
/// Every conversion error aborts the in-progress call; no partial or
/// degraded result is ever returned.
#[derive(Debug, Error)]
pub enum GraphsonError {
    /// Encode-time: the native value's category is outside the supported
    /// set. Carries the concrete type name encountered.
    #[error("native type '{0}' is not supported by the GraphSON 3.0 serializer")]
    UnsupportedNativeType(String),

    /// Decode-time: the `@type` tag is not in the wire registry, or is
    /// `g:Class` (never representable natively). Carries the raw tag.
    #[error("wire type '{0}' is not supported by the GraphSON 3.0 serializer")]
    UnsupportedWireType(String),

    /// Decode-time: a flattened `g:Map` payload has an odd number of
    /// elements.
    #[error("failed to decode Map: odd number of elements found (should be even)")]
    MalformedMap,

    /// Decode-time: a decoded map key is neither a string nor a number.
    /// Carries the key's category name.
    #[error("failed to decode Map: key of type '{0}' found, only integers, doubles and strings are supported")]
    UnsupportedKeyType(String),

    /// Decode-time: a `g:Int64` payload cannot be represented in the native
    /// integer on this platform.
    #[error("cannot represent the 64bit integer from the wire payload in the native integer type")]
    PlatformLimitation,

    /// Decode-time: a payload has the wrong JSON shape for its tag
    /// (e.g. a non-array under `g:List`, a non-object under `g:Vertex`).
    #[error("payload for wire type '{0}' has an unexpected shape")]
    MalformedPayload(String),

    /// JSON text could not be produced or parsed by the transcoder.
    #[error("JSON transcoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
