//! # Metadata Value Model
//!
//! Primitive building blocks shared by every metadata store: the index-path
//! that locates an entity instance inside the containment hierarchy, and the
//! typed values a property slot can hold.
//!
//! ## Index Paths
//!
//! An [`IndexPath`] is an ordered tuple of zero to [`MAX_DEPTH`] indices,
//! outermost first. A `WellSample` lives at `(plate, well, well_sample)`, an
//! `Image` at `(image)`, the document-level `BinaryOnly` element at `()`.
//!
//! ## Values
//!
//! [`MetadataValue`] is the dynamically typed payload of a slot. The typed
//! accessor layer converts to and from concrete Rust types through
//! [`FromMetadataValue`] and `From<T> for MetadataValue`.

mod color;
mod index;
mod units;
mod value;

#[cfg(test)]
mod tests;

pub use color::Color;
pub use index::{IndexPath, MAX_DEPTH, MAX_INDEX};
pub use units::{Dimension, Quantity, Unit};
pub use value::{FromMetadataValue, MapPair, MetadataValue, Timestamp};
