use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Color, Quantity};

/// Point in time, always normalised to UTC
pub type Timestamp = DateTime<Utc>;

/// One key/value entry of a map annotation or an instrument settings map
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MapPair {
    /// Entry key
    pub name: String,
    /// Entry value
    pub value: String,
}

impl MapPair {
    /// Create a new key/value entry
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The value held by one property slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum MetadataValue {
    /// Free text, identifiers, references and enumeration literals
    Text(String),
    /// Boolean flag
    Bool(bool),
    /// Any integral value; range constraints live in the schema
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Magnitude with unit
    Quantity(Quantity),
    /// RGBA color
    Color(Color),
    /// Point in time
    Timestamp(Timestamp),
    /// Ordered key/value list
    MapPairs(Vec<MapPair>),
    /// Raw bytes
    Bytes(Vec<u8>),
}

impl MetadataValue {
    /// Short name of the variant, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            MetadataValue::Text(_) => "text",
            MetadataValue::Bool(_) => "boolean",
            MetadataValue::Integer(_) => "integer",
            MetadataValue::Float(_) => "float",
            MetadataValue::Quantity(_) => "quantity",
            MetadataValue::Color(_) => "color",
            MetadataValue::Timestamp(_) => "timestamp",
            MetadataValue::MapPairs(_) => "map",
            MetadataValue::Bytes(_) => "bytes",
        }
    }

    /// Borrow the text payload, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetadataValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Formats values the way [`crate::schema::ValueType::parse`] reads them back.
impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Text(s) => f.write_str(s),
            MetadataValue::Bool(b) => write!(f, "{b}"),
            MetadataValue::Integer(i) => write!(f, "{i}"),
            MetadataValue::Float(x) => write!(f, "{x}"),
            MetadataValue::Quantity(q) => write!(f, "{q}"),
            MetadataValue::Color(c) => write!(f, "{c}"),
            MetadataValue::Timestamp(t) => f.write_str(&t.to_rfc3339()),
            MetadataValue::MapPairs(pairs) => {
                for (i, pair) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(";")?;
                    }
                    write_escaped(f, &pair.name)?;
                    f.write_str("=")?;
                    write_escaped(f, &pair.value)?;
                }
                Ok(())
            }
            MetadataValue::Bytes(bytes) => {
                for byte in bytes {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
        }
    }
}

/// Map entries escape backslash, `;` and `=` with a backslash
fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for c in text.chars() {
        if matches!(c, '\\' | ';' | '=') {
            f.write_str("\\")?;
        }
        write!(f, "{c}")?;
    }
    Ok(())
}

/// Conversion from a stored slot value into a typed accessor result.
///
/// Returns `None` when the stored variant does not match the requested type,
/// which typed getters report the same way as an unset property.
pub trait FromMetadataValue: Sized {
    /// Convert the stored value
    fn from_value(value: MetadataValue) -> Option<Self>;
}

macro_rules! value_conversions {
    ($( $ty:ty => $variant:ident ),* $(,)?) => {
        $(
            impl From<$ty> for MetadataValue {
                fn from(value: $ty) -> Self {
                    MetadataValue::$variant(value)
                }
            }

            impl FromMetadataValue for $ty {
                fn from_value(value: MetadataValue) -> Option<Self> {
                    match value {
                        MetadataValue::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

value_conversions! {
    String => Text,
    bool => Bool,
    i64 => Integer,
    f64 => Float,
    Quantity => Quantity,
    Color => Color,
    Timestamp => Timestamp,
    Vec<MapPair> => MapPairs,
    Vec<u8> => Bytes,
}

macro_rules! integer_conversions {
    ($( $ty:ty ),*) => {
        $(
            impl From<$ty> for MetadataValue {
                fn from(value: $ty) -> Self {
                    MetadataValue::Integer(i64::from(value))
                }
            }

            impl FromMetadataValue for $ty {
                fn from_value(value: MetadataValue) -> Option<Self> {
                    match value {
                        MetadataValue::Integer(v) => <$ty>::try_from(v).ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

integer_conversions!(i32, u32);

impl From<u64> for MetadataValue {
    fn from(value: u64) -> Self {
        MetadataValue::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl FromMetadataValue for u64 {
    fn from_value(value: MetadataValue) -> Option<Self> {
        match value {
            MetadataValue::Integer(v) => u64::try_from(v).ok(),
            _ => None,
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::Text(value.to_string())
    }
}
