//! The fixed wire type registry.
//!
//! Two read-only registries with process lifetime: the wire tags the
//! decoder recognizes ([`WireTag`] / [`SUPPORTED_WIRE_TAGS`]) and the
//! constants the encoder stamps onto tagged values. Neither is ever
//! mutated after initialization.

/// Key of the type discriminator in a tagged wire object.
pub const TYPE_KEY: &str = "@type";

/// Key of the payload in a tagged wire object.
pub const VALUE_KEY: &str = "@value";

/// The native integer type of this implementation.
///
/// GraphSON distinguishes 32 and 64 bit integers; which tag the encoder
/// emits is a platform property fixed once here, not chosen per value.
pub type NativeInt = i64;

/// Wire tag for encoded integers, selected by the width of [`NativeInt`].
pub const INT_TAG: &str = if std::mem::size_of::<NativeInt>() == 4 {
    "g:Int32"
} else {
    "g:Int64"
};

/// Wire tag for encoded floating-point numbers.
pub const DOUBLE_TAG: &str = "g:Double";

/// Wire tag for encoded ordered sequences.
pub const LIST_TAG: &str = "g:List";

/// Wire tag for encoded associative maps.
pub const MAP_TAG: &str = "g:Map";

/// Every `@type` string the decoder recognizes, exactly as it appears on
/// the wire.
pub const SUPPORTED_WIRE_TAGS: [&str; 18] = [
    "g:Int32",
    "g:Int64",
    "g:Date",
    "g:Timestamp",
    "g:UUID",
    "g:Float",
    "g:Double",
    "g:List",
    "g:Map",
    "g:Set",
    "g:Class",
    "g:Path",
    "g:Tree",
    "g:Vertex",
    "g:VertexProperty",
    "tinker:graph",
    "g:Edge",
    "g:Property",
];

/// A recognized wire type tag.
///
/// Decoding dispatches on this closed enum; a tag string that does not
/// parse into it is exactly "not in the registry".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireTag {
    Int32,
    Int64,
    Date,
    Timestamp,
    Uuid,
    Float,
    Double,
    List,
    Map,
    Set,
    Class,
    Path,
    Tree,
    Vertex,
    VertexProperty,
    TinkerGraph,
    Edge,
    Property,
}

impl WireTag {
    /// Registry lookup over the exact wire strings.
    pub fn from_tag(tag: &str) -> Option<WireTag> {
        match tag {
            "g:Int32" => Some(WireTag::Int32),
            "g:Int64" => Some(WireTag::Int64),
            "g:Date" => Some(WireTag::Date),
            "g:Timestamp" => Some(WireTag::Timestamp),
            "g:UUID" => Some(WireTag::Uuid),
            "g:Float" => Some(WireTag::Float),
            "g:Double" => Some(WireTag::Double),
            "g:List" => Some(WireTag::List),
            "g:Map" => Some(WireTag::Map),
            "g:Set" => Some(WireTag::Set),
            "g:Class" => Some(WireTag::Class),
            "g:Path" => Some(WireTag::Path),
            "g:Tree" => Some(WireTag::Tree),
            "g:Vertex" => Some(WireTag::Vertex),
            "g:VertexProperty" => Some(WireTag::VertexProperty),
            "tinker:graph" => Some(WireTag::TinkerGraph),
            "g:Edge" => Some(WireTag::Edge),
            "g:Property" => Some(WireTag::Property),
            _ => None,
        }
    }

    /// The tag exactly as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            WireTag::Int32 => "g:Int32",
            WireTag::Int64 => "g:Int64",
            WireTag::Date => "g:Date",
            WireTag::Timestamp => "g:Timestamp",
            WireTag::Uuid => "g:UUID",
            WireTag::Float => "g:Float",
            WireTag::Double => "g:Double",
            WireTag::List => "g:List",
            WireTag::Map => "g:Map",
            WireTag::Set => "g:Set",
            WireTag::Class => "g:Class",
            WireTag::Path => "g:Path",
            WireTag::Tree => "g:Tree",
            WireTag::Vertex => "g:Vertex",
            WireTag::VertexProperty => "g:VertexProperty",
            WireTag::TinkerGraph => "tinker:graph",
            WireTag::Edge => "g:Edge",
            WireTag::Property => "g:Property",
        }
    }
}
