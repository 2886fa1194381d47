//! # Metadata Stores
//!
//! The accessor contract for OME-XML metadata and its three implementations.
//!
//! ## Contract
//!
//! [`MetadataStore`] and [`MetadataRetrieve`] are small, object-safe traits
//! keyed by [`Property`](crate::schema::Property) and
//! [`IndexPath`](crate::model::IndexPath). The full typed surface, one getter
//! and one setter per schema property plus a count per indexed entity, lives
//! in [`RetrieveAccessors`] and [`StoreAccessors`], which every store gets for
//! free.
//!
//! ## Implementations
//!
//! 1. **[`OmeMetadata`]**: in-memory document validated against the schema,
//!    serializable to JSON
//! 2. **[`DummyMetadata`]**: the null object; accepts every write, returns
//!    nothing
//! 3. **[`FilterMetadata`]**: decorator that sanitizes free text on the way in
//!
//! ```
//! use omemeta::prelude::*;
//!
//! fn describe(meta: &dyn MetadataRetrieve) -> String {
//!     let images = meta.image_count().unwrap_or(0);
//!     format!("{images} image(s)")
//! }
//!
//! let mut meta = OmeMetadata::new();
//! meta.set_image_id("Image:0", 0).unwrap();
//! assert_eq!(describe(&meta), "1 image(s)");
//! assert_eq!(describe(&DummyMetadata), "0 image(s)");
//! ```

mod accessors;
mod dummy;
mod error;
mod filter;
mod memory;
mod root;
mod traits;


pub use accessors::{RetrieveAccessors, StoreAccessors};
pub use dummy::DummyMetadata;
pub use error::MetadataError;
pub use filter::FilterMetadata;
pub use memory::OmeMetadata;
pub use root::MetadataRoot;
pub use traits::{Metadata, MetadataRetrieve, MetadataStore};
