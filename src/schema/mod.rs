//! # Schema Tables
//!
//! The OME-XML schema reduced to data: the containment tree of entities,
//! one row per settable property, the value types properties accept and the
//! enumerations the schema defines.
//!
//! ## Containment
//!
//! [`Entity`] is a node of the containment tree. Its depth is the number of
//! indices that address one of its instances; `Channel` sits at
//! `(image, channel)`, `Shape` at `(roi, shape)`. Entities reachable from
//! several parents (`AnnotationRef`, filter references) carry the parent type
//! in their variant, so each path has its own arity.
//!
//! ## Properties
//!
//! [`Property`] enumerates every flattened schema attribute
//! (`ChannelName`, `LaserWavelength`, `ImageAnnotationRef`, ...) together with
//! its owning entity, its [`ValueType`] and whether free text written to it is
//! sanitized.
//!
//! ## Example
//!
//! ```
//! use omemeta::schema::{Entity, Property};
//!
//! let p: Property = "ChannelName".parse().unwrap();
//! assert_eq!(p.entity(), Entity::Channel);
//! assert_eq!(p.arity(), 2);
//! assert!(p.sanitized());
//! ```

mod entity;
mod enums;
mod property;
mod value_type;

#[cfg(test)]
mod tests;

pub use entity::{Annotated, Entity, FilterHolder};
pub use enums::{
    AcquisitionMode, ArcType, Binning, ContrastMethod, Correction, DetectorType, DimensionOrder,
    ExperimentType, FilterType, IlluminationType, Immersion, LaserMedium, LaserType, Medium,
    MicroscopeType, NamingConvention, PixelType, Pulse,
};
pub(crate) use property::property_table;
pub use property::Property;
pub use value_type::ValueType;
