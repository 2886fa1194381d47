use chrono::{DateTime, NaiveDateTime, Utc};

use crate::model::{Color, Dimension, MapPair, MetadataValue, Quantity, Timestamp, Unit};

/// Schema type of a property, governing which [`MetadataValue`]s it accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueType {
    /// Free text
    Text,
    /// Identifier of the owning instance
    Id,
    /// Identifier of another instance
    Reference,
    /// Boolean flag
    Boolean,
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer
    Long,
    /// Integer in `1..=i32::MAX`
    PositiveInteger,
    /// Integer in `0..=i32::MAX`
    NonNegativeInteger,
    /// Integer in `0..=i64::MAX`
    NonNegativeLong,
    /// Floating point number
    Float,
    /// Floating point number in `0.0..=1.0`
    PercentFraction,
    /// Quantity whose unit measures the given dimension
    Quantity(Dimension),
    /// RGBA color
    Color,
    /// Point in time
    Timestamp,
    /// One of the listed schema literals
    Enumeration(&'static [&'static str]),
    /// Ordered key/value list
    MapPairs,
    /// Raw bytes
    Bytes,
}

impl ValueType {
    /// True for types stored as [`MetadataValue::Text`]
    pub fn is_textual(&self) -> bool {
        matches!(
            self,
            ValueType::Text | ValueType::Id | ValueType::Reference | ValueType::Enumeration(_)
        )
    }

    /// Check that `value` is acceptable for this type.
    ///
    /// The error is a human-readable reason, wrapped by the caller into a
    /// [`crate::metadata::MetadataError::InvalidValue`].
    pub fn check(&self, value: &MetadataValue) -> Result<(), String> {
        match (self, value) {
            (ValueType::Text | ValueType::Id | ValueType::Reference, MetadataValue::Text(_)) => {
                Ok(())
            }
            (ValueType::Boolean, MetadataValue::Bool(_)) => Ok(()),
            (ValueType::Integer, MetadataValue::Integer(i)) => {
                check_range(*i, i64::from(i32::MIN), i64::from(i32::MAX))
            }
            (ValueType::Long, MetadataValue::Integer(_)) => Ok(()),
            (ValueType::PositiveInteger, MetadataValue::Integer(i)) => {
                check_range(*i, 1, i64::from(i32::MAX))
            }
            (ValueType::NonNegativeInteger, MetadataValue::Integer(i)) => {
                check_range(*i, 0, i64::from(i32::MAX))
            }
            (ValueType::NonNegativeLong, MetadataValue::Integer(i)) => check_range(*i, 0, i64::MAX),
            (ValueType::Float, MetadataValue::Float(_)) => Ok(()),
            (ValueType::PercentFraction, MetadataValue::Float(x)) => {
                if (0.0..=1.0).contains(x) {
                    Ok(())
                } else {
                    Err(format!("{x} is not a fraction between 0 and 1"))
                }
            }
            (ValueType::Quantity(dimension), MetadataValue::Quantity(q)) => {
                if q.dimension() == *dimension {
                    Ok(())
                } else {
                    Err(format!(
                        "unit '{}' measures {:?}, expected {:?}",
                        q.unit,
                        q.dimension(),
                        dimension
                    ))
                }
            }
            (ValueType::Color, MetadataValue::Color(_)) => Ok(()),
            (ValueType::Timestamp, MetadataValue::Timestamp(_)) => Ok(()),
            (ValueType::Enumeration(values), MetadataValue::Text(s)) => {
                if values.contains(&s.as_str()) {
                    Ok(())
                } else {
                    Err(format!("'{s}' is not one of {}", values.join(", ")))
                }
            }
            (ValueType::MapPairs, MetadataValue::MapPairs(_)) => Ok(()),
            (ValueType::Bytes, MetadataValue::Bytes(_)) => Ok(()),
            (expected, found) => Err(format!(
                "expected {}, found {}",
                expected.describe(),
                found.type_name()
            )),
        }
    }

    /// Parse the textual form written by `MetadataValue`'s `Display`.
    pub fn parse(&self, input: &str) -> Result<MetadataValue, String> {
        let value = match self {
            ValueType::Text | ValueType::Id | ValueType::Reference => {
                MetadataValue::Text(input.to_string())
            }
            ValueType::Boolean => match input.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => MetadataValue::Bool(true),
                "false" | "0" | "no" => MetadataValue::Bool(false),
                other => return Err(format!("'{other}' is not a boolean")),
            },
            ValueType::Integer
            | ValueType::Long
            | ValueType::PositiveInteger
            | ValueType::NonNegativeInteger
            | ValueType::NonNegativeLong => MetadataValue::Integer(
                input
                    .trim()
                    .parse::<i64>()
                    .map_err(|e| format!("'{input}' is not an integer: {e}"))?,
            ),
            ValueType::Float | ValueType::PercentFraction => MetadataValue::Float(
                input
                    .trim()
                    .parse::<f64>()
                    .map_err(|e| format!("'{input}' is not a number: {e}"))?,
            ),
            ValueType::Quantity(_) => MetadataValue::Quantity(input.parse::<Quantity>()?),
            ValueType::Color => MetadataValue::Color(input.parse::<Color>()?),
            ValueType::Timestamp => MetadataValue::Timestamp(parse_timestamp(input)?),
            ValueType::Enumeration(values) => {
                let trimmed = input.trim();
                let literal = values
                    .iter()
                    .find(|v| v.eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| format!("'{trimmed}' is not one of {}", values.join(", ")))?;
                MetadataValue::Text((*literal).to_string())
            }
            ValueType::MapPairs => MetadataValue::MapPairs(parse_map_pairs(input)?),
            ValueType::Bytes => MetadataValue::Bytes(parse_hex(input)?),
        };
        self.check(&value)?;
        Ok(value)
    }

    /// A minimal value accepted by this type
    pub fn sample(&self) -> MetadataValue {
        match self {
            ValueType::Text => MetadataValue::Text("sample".to_string()),
            ValueType::Id => MetadataValue::Text("Sample:0".to_string()),
            ValueType::Reference => MetadataValue::Text("Sample:0".to_string()),
            ValueType::Boolean => MetadataValue::Bool(true),
            ValueType::Integer | ValueType::Long => MetadataValue::Integer(-1),
            ValueType::PositiveInteger => MetadataValue::Integer(1),
            ValueType::NonNegativeInteger | ValueType::NonNegativeLong => MetadataValue::Integer(0),
            ValueType::Float => MetadataValue::Float(1.5),
            ValueType::PercentFraction => MetadataValue::Float(0.5),
            ValueType::Quantity(dimension) => {
                let unit = Unit::ALL
                    .iter()
                    .copied()
                    .find(|u| u.dimension() == *dimension)
                    .unwrap_or(Unit::Micrometer);
                MetadataValue::Quantity(Quantity::new(1.0, unit))
            }
            ValueType::Color => MetadataValue::Color(Color::default()),
            ValueType::Timestamp => MetadataValue::Timestamp(DateTime::<Utc>::UNIX_EPOCH),
            ValueType::Enumeration(values) => {
                MetadataValue::Text(values.first().copied().unwrap_or_default().to_string())
            }
            ValueType::MapPairs => MetadataValue::MapPairs(vec![MapPair::new("key", "value")]),
            ValueType::Bytes => MetadataValue::Bytes(vec![0]),
        }
    }

    fn describe(&self) -> String {
        match self {
            ValueType::Text => "text".to_string(),
            ValueType::Id => "identifier".to_string(),
            ValueType::Reference => "reference".to_string(),
            ValueType::Boolean => "boolean".to_string(),
            ValueType::Integer => "integer".to_string(),
            ValueType::Long => "long integer".to_string(),
            ValueType::PositiveInteger => "positive integer".to_string(),
            ValueType::NonNegativeInteger => "non-negative integer".to_string(),
            ValueType::NonNegativeLong => "non-negative long integer".to_string(),
            ValueType::Float => "float".to_string(),
            ValueType::PercentFraction => "percent fraction".to_string(),
            ValueType::Quantity(dimension) => format!("{dimension:?} quantity"),
            ValueType::Color => "color".to_string(),
            ValueType::Timestamp => "timestamp".to_string(),
            ValueType::Enumeration(_) => "enumeration literal".to_string(),
            ValueType::MapPairs => "map".to_string(),
            ValueType::Bytes => "bytes".to_string(),
        }
    }
}

fn check_range(value: i64, min: i64, max: i64) -> Result<(), String> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(format!("{value} is outside {min}..={max}"))
    }
}

/// RFC 3339, or a naive `YYYY-MM-DDTHH:MM:SS` taken as UTC.
fn parse_timestamp(input: &str) -> Result<Timestamp, String> {
    let input = input.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| format!("'{input}' is not a timestamp: {e}"))
}

/// `key=value` entries separated by `;`; a backslash escapes the next character.
fn parse_map_pairs(input: &str) -> Result<Vec<MapPair>, String> {
    let mut pairs = Vec::new();
    let mut name = None;
    let mut current = String::new();
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped) => current.push(escaped),
                None => return Err("map entry ends with a dangling '\\'".to_string()),
            },
            '=' if name.is_none() => name = Some(std::mem::take(&mut current)),
            ';' => push_map_entry(&mut pairs, name.take(), std::mem::take(&mut current))?,
            _ => current.push(c),
        }
    }
    push_map_entry(&mut pairs, name, current)?;
    Ok(pairs)
}

fn push_map_entry(
    pairs: &mut Vec<MapPair>,
    name: Option<String>,
    rest: String,
) -> Result<(), String> {
    match name {
        Some(name) => {
            pairs.push(MapPair::new(name, rest));
            Ok(())
        }
        None if rest.is_empty() => Ok(()),
        None => Err(format!("map entry '{rest}' is missing '='")),
    }
}

fn parse_hex(input: &str) -> Result<Vec<u8>, String> {
    let input = input.trim();
    if input.len() % 2 != 0 {
        return Err("hex byte string has odd length".to_string());
    }
    (0..input.len())
        .step_by(2)
        .map(|i| {
            input
                .get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| format!("invalid hex byte at offset {i}"))
        })
        .collect()
}
