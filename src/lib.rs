//! # omemeta - Typed Accessors for OME-XML Metadata
//!
//! `omemeta` exposes the OME-XML microscopy metadata model through a single
//! typed accessor contract, so format readers can write metadata without
//! knowing where it ends up and writers can read it without knowing where it
//! came from.
//!
//! ## Key Features
//!
//! - **Schema-Driven Surface**: One getter and one setter per schema property
//!   (`channel_name(image, channel)`, `set_channel_name(value, image, channel)`)
//!   and one count per indexed entity, all generated from a single table.
//!
//! - **Object-Safe Core**: The generated surface sits on two small traits,
//!   [`MetadataStore`](metadata::MetadataStore) and
//!   [`MetadataRetrieve`](metadata::MetadataRetrieve), so every store works
//!   behind `&mut dyn MetadataStore` and `Box<dyn Metadata>`.
//!
//! - **Null Object**: [`DummyMetadata`](metadata::DummyMetadata) accepts every
//!   write and returns nothing, for callers that want no metadata at all.
//!
//! - **Sanitizing Decorator**: [`FilterMetadata`](metadata::FilterMetadata)
//!   strips control characters from free text on the way into any store,
//!   leaving references, enumerations and numbers untouched.
//!
//! - **Validated In-Memory Store**: [`OmeMetadata`](metadata::OmeMetadata)
//!   checks index depth, value types and shape/light-source kinds, and
//!   serializes to JSON snapshots.
//!
//! ## Quick Start
//!
//! ```rust
//! use omemeta::prelude::*;
//!
//! let mut meta = FilterMetadata::new(OmeMetadata::new(), true);
//! meta.set_image_id("Image:0", 0)?;
//! meta.set_image_name("Sample\u{0} 1", 0)?;
//! meta.set_pixels_type(PixelType::Uint16, 0)?;
//! meta.set_channel_name("GFP", 0, 1)?;
//!
//! assert_eq!(meta.image_name(0).as_deref(), Some("Sample 1"));
//! assert_eq!(meta.channel_count(0), Some(2));
//! assert_eq!(meta.channel_name(0, 0), None);
//!
//! let json = meta.delegate().to_json()?;
//! let restored = OmeMetadata::from_json(&json)?;
//! assert_eq!(&restored, meta.delegate());
//! # Ok::<(), omemeta::metadata::MetadataError>(())
//! ```
//!
//! ## Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`model`]: Index paths and the typed values a property can hold
//! - [`schema`]: Entities, properties, value types and enumerations
//! - [`metadata`]: The accessor contract and its stores
//! - [`sanitize`]: Control-character stripping for free text
//! - [`tools`]: Identifier generation, store conversion, population and repair
//! - [`export`]: Flat TSV export and import
//! - [`validator`]: Integrity checks for JSON snapshots

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod export;
pub mod metadata;
pub mod model;
pub mod sanitize;
pub mod schema;
pub mod tools;
pub mod validator;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::metadata::{
        DummyMetadata, FilterMetadata, Metadata, MetadataError, MetadataRetrieve, MetadataRoot,
        MetadataStore, OmeMetadata, RetrieveAccessors, StoreAccessors,
    };
    pub use crate::model::{Color, IndexPath, MapPair, MetadataValue, Quantity, Timestamp, Unit};
    pub use crate::sanitize::sanitize;
    pub use crate::schema::{
        AcquisitionMode, ArcType, Binning, ContrastMethod, Correction, DetectorType,
        DimensionOrder, Entity, ExperimentType, FilterType, IlluminationType, Immersion,
        LaserMedium, LaserType, Medium, MicroscopeType, NamingConvention, PixelType, Property,
        Pulse,
    };
}
