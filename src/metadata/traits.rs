use crate::model::{IndexPath, MetadataValue};
use crate::schema::{Entity, Property};

use super::{MetadataError, MetadataRoot};

/// Write side of the metadata contract.
///
/// Producers such as format readers populate a store through the typed
/// setters of [`super::StoreAccessors`], which funnel into
/// [`MetadataStore::set_value`]. Indexed collections grow to fit any index
/// written, so instances may be populated in any order, though writing outer
/// indices before inner ones suits streaming stores.
pub trait MetadataStore {
    /// Discard all content and start a new empty document
    fn create_root(&mut self);

    /// The backing document, if this store keeps one
    fn root(&self) -> Option<&MetadataRoot>;

    /// Replace the backing document
    fn set_root(&mut self, root: MetadataRoot) -> Result<(), MetadataError>;

    /// Stamp the document with an identifier
    fn set_uuid(&mut self, uuid: &str) -> Result<(), MetadataError>;

    /// Store `value` for `property` on the instance at `path`
    fn set_value(
        &mut self,
        property: Property,
        path: IndexPath,
        value: MetadataValue,
    ) -> Result<(), MetadataError>;
}

/// Read side of the metadata contract.
///
/// Reads never fail: an unset property and a missing instance both yield
/// `None`. A count of `None` means the store does not track instances at all,
/// which callers must not confuse with `Some(0)`.
pub trait MetadataRetrieve {
    /// Document identifier
    fn uuid(&self) -> Option<String>;

    /// Value of `property` on the instance at `path`
    fn value(&self, property: Property, path: &IndexPath) -> Option<MetadataValue>;

    /// Number of `entity` instances under `parent`
    fn count(&self, entity: Entity, parent: &IndexPath) -> Option<usize>;

    /// Concrete kind of the light source or shape at `path`
    fn kind(&self, entity: Entity, path: &IndexPath) -> Option<&'static str>;
}

/// A store that can also be read back
pub trait Metadata: MetadataStore + MetadataRetrieve {}

impl<T: MetadataStore + MetadataRetrieve + ?Sized> Metadata for T {}

macro_rules! forward_store {
    ($($target:ty),*) => {
        $(
            impl<S: MetadataStore + ?Sized> MetadataStore for $target {
                fn create_root(&mut self) {
                    (**self).create_root()
                }

                fn root(&self) -> Option<&MetadataRoot> {
                    (**self).root()
                }

                fn set_root(&mut self, root: MetadataRoot) -> Result<(), MetadataError> {
                    (**self).set_root(root)
                }

                fn set_uuid(&mut self, uuid: &str) -> Result<(), MetadataError> {
                    (**self).set_uuid(uuid)
                }

                fn set_value(
                    &mut self,
                    property: Property,
                    path: IndexPath,
                    value: MetadataValue,
                ) -> Result<(), MetadataError> {
                    (**self).set_value(property, path, value)
                }
            }
        )*
    };
}

macro_rules! forward_retrieve {
    ($($target:ty),*) => {
        $(
            impl<S: MetadataRetrieve + ?Sized> MetadataRetrieve for $target {
                fn uuid(&self) -> Option<String> {
                    (**self).uuid()
                }

                fn value(&self, property: Property, path: &IndexPath) -> Option<MetadataValue> {
                    (**self).value(property, path)
                }

                fn count(&self, entity: Entity, parent: &IndexPath) -> Option<usize> {
                    (**self).count(entity, parent)
                }

                fn kind(&self, entity: Entity, path: &IndexPath) -> Option<&'static str> {
                    (**self).kind(entity, path)
                }
            }
        )*
    };
}

forward_store!(&mut S, Box<S>);
forward_retrieve!(&S, &mut S, Box<S>);
