use crate::model::{IndexPath, MetadataValue};
use crate::schema::{Entity, Property};

use super::{MetadataError, MetadataRetrieve, MetadataRoot, MetadataStore};

/// A store that keeps nothing.
///
/// Every setter succeeds without effect and every getter returns `None`,
/// including counts, which report that instances are not tracked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DummyMetadata;

impl DummyMetadata {
    /// Create the null store
    pub fn new() -> Self {
        Self
    }
}

impl MetadataStore for DummyMetadata {
    fn create_root(&mut self) {}

    fn root(&self) -> Option<&MetadataRoot> {
        None
    }

    fn set_root(&mut self, _root: MetadataRoot) -> Result<(), MetadataError> {
        Ok(())
    }

    fn set_uuid(&mut self, _uuid: &str) -> Result<(), MetadataError> {
        Ok(())
    }

    fn set_value(
        &mut self,
        _property: Property,
        _path: IndexPath,
        _value: MetadataValue,
    ) -> Result<(), MetadataError> {
        Ok(())
    }
}

impl MetadataRetrieve for DummyMetadata {
    fn uuid(&self) -> Option<String> {
        None
    }

    fn value(&self, _property: Property, _path: &IndexPath) -> Option<MetadataValue> {
        None
    }

    fn count(&self, _entity: Entity, _parent: &IndexPath) -> Option<usize> {
        None
    }

    fn kind(&self, _entity: Entity, _path: &IndexPath) -> Option<&'static str> {
        None
    }
}
