//! GraphSON 3.0 value codec for Gremlin Server.
//!
//! GraphSON 3.0 is the JSON-based wire encoding a Gremlin server uses for
//! query parameters and results. Typed values travel as
//! `{"@type": <tag>, "@value": <payload>}` wrappers; strings and booleans
//! travel bare.
//!
//! The codec is bidirectional and asymmetric: encoding dispatches on the
//! native runtime category of a [`GraphsonValue`] and only ever produces
//! the Int32/Int64, Double, List and Map tags, while decoding dispatches on
//! the wire tag and recognizes the full server-side registry (Vertex, Edge,
//! Path, Tree, Set, and friends). Both directions are recursive, pure and
//! stateless.
//!
//! ```
//! use gremlin_graphson::{GraphSon3, GraphsonValue, Serializer};
//!
//! let body = GraphsonValue::Map(vec![
//!     (GraphsonValue::from("gremlin"), GraphsonValue::from("g.V().count()")),
//! ]);
//! let serializer = GraphSon3::new();
//! let text = serializer.serialize(&body).unwrap();
//! let back = serializer.deserialize(&text).unwrap();
//! assert_eq!(back, body);
//! ```

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod registry;
pub mod serializer;
pub mod value;

pub use decoder::GraphsonDecoder;
pub use encoder::GraphsonEncoder;
pub use error::GraphsonError;
pub use registry::{WireTag, INT_TAG, SUPPORTED_WIRE_TAGS};
pub use serializer::{GraphSon3, Json, Serializer};
pub use value::GraphsonValue;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_every_supported_tag() {
        for tag in SUPPORTED_WIRE_TAGS {
            let wire = WireTag::from_tag(tag).expect("registered tag must parse");
            assert_eq!(wire.as_str(), tag);
        }
        assert_eq!(WireTag::from_tag("g:Foo"), None);
        assert_eq!(WireTag::from_tag("Int32"), None, "namespace is part of the tag");
    }

    #[test]
    fn native_integer_width_selects_int64() {
        assert_eq!(INT_TAG, "g:Int64");
    }

    #[test]
    fn serializer_identity() {
        let s = GraphSon3::new();
        assert_eq!(s.name(), "GRAPHSON3");
        assert_eq!(s.mime_type(), "application/json");
        let j = Json::new();
        assert_eq!(j.name(), "JSON");
        assert_eq!(j.mime_type(), "application/json");
    }
}
