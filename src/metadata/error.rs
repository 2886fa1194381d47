use crate::model::IndexPath;
use crate::schema::{Entity, Property};

/// Errors that can occur while storing or processing metadata
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// Value does not fit the property's schema type
    #[error("Invalid value for {property}: {reason}")]
    InvalidValue {
        /// Property being set
        property: Property,
        /// Why the value was rejected
        reason: String,
    },

    /// Index path length does not match the property's entity depth
    #[error("{property} takes {expected} indices, got {found}")]
    IndexArity {
        /// Property being set
        property: Property,
        /// Indices the property requires
        expected: usize,
        /// Indices supplied
        found: usize,
    },

    /// Index above the largest a store accepts
    #[error("{property} index {index} at [{path}] exceeds the limit of {max}")]
    IndexOutOfRange {
        /// Property being set
        property: Property,
        /// Offending path
        path: IndexPath,
        /// Offending index
        index: usize,
        /// Largest accepted index
        max: usize,
    },

    /// Property of one concrete kind set on an instance of another kind
    #[error("{entity} at [{path}] is a {existing}, cannot set {requested} properties")]
    KindMismatch {
        /// Polymorphic entity
        entity: Entity,
        /// Instance path
        path: IndexPath,
        /// Kind already recorded for the instance
        existing: &'static str,
        /// Kind of the rejected property
        requested: &'static str,
    },

    /// Required property missing from a populated image
    #[error("Missing required field {field} for image {image}")]
    MissingField {
        /// Schema name of the missing property
        field: &'static str,
        /// Image index
        image: usize,
    },

    /// Plane index outside the Z/C/T extent of an image
    #[error("Plane {plane} is outside the {planes} planes described by the dimensions")]
    PlaneOutOfRange {
        /// Requested plane index
        plane: usize,
        /// Number of planes the dimensions describe
        planes: usize,
    },

    /// Operation not supported by this store
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// Unknown property, entity or instance
    #[error("Not found: {0}")]
    NotFound(String),

    /// Text could not be parsed into a property value
    #[error("Cannot parse '{input}' as {property}: {reason}")]
    Parse {
        /// Target property
        property: Property,
        /// Offending text
        input: String,
        /// Parser message
        reason: String,
    },

    /// I/O error reading or writing metadata
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV/TSV export error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// JSON serialization/deserialization error
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}
