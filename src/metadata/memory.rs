use log::debug;

use crate::model::{IndexPath, MetadataValue};
use crate::schema::{Entity, Property};

use super::{MetadataError, MetadataRetrieve, MetadataRoot, MetadataStore};

/// In-memory metadata store.
///
/// Validates every write against the schema and grows instance counts to fit
/// the highest index written at each level.
///
/// ```
/// use omemeta::prelude::*;
///
/// let mut meta = OmeMetadata::new();
/// meta.set_image_name("Sample", 0).unwrap();
/// meta.set_channel_name("DAPI", 0, 2).unwrap();
///
/// assert_eq!(meta.image_name(0).as_deref(), Some("Sample"));
/// assert_eq!(meta.channel_count(0), Some(3));
/// assert_eq!(meta.channel_name(0, 1), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OmeMetadata {
    root: MetadataRoot,
}

impl OmeMetadata {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing document
    pub fn from_root(root: MetadataRoot) -> Self {
        Self { root }
    }

    /// The backing document
    pub fn metadata_root(&self) -> &MetadataRoot {
        &self.root
    }

    /// Take the backing document
    pub fn into_root(self) -> MetadataRoot {
        self.root
    }

    /// Serialize the document to JSON
    pub fn to_json(&self) -> Result<String, MetadataError> {
        self.root.to_json()
    }

    /// Serialize the document to indented JSON
    pub fn to_json_pretty(&self) -> Result<String, MetadataError> {
        self.root.to_json_pretty()
    }

    /// Load a document from JSON
    pub fn from_json(json: &str) -> Result<Self, MetadataError> {
        MetadataRoot::from_json(json).map(Self::from_root)
    }
}

impl MetadataStore for OmeMetadata {
    fn create_root(&mut self) {
        debug!("Creating empty metadata root");
        self.root = MetadataRoot::new();
    }

    fn root(&self) -> Option<&MetadataRoot> {
        Some(&self.root)
    }

    fn set_root(&mut self, root: MetadataRoot) -> Result<(), MetadataError> {
        debug!("Replacing metadata root ({} slots)", root.len());
        self.root = root;
        Ok(())
    }

    fn set_uuid(&mut self, uuid: &str) -> Result<(), MetadataError> {
        self.root.set_uuid(uuid);
        Ok(())
    }

    fn set_value(
        &mut self,
        property: Property,
        path: IndexPath,
        value: MetadataValue,
    ) -> Result<(), MetadataError> {
        self.root.insert(property, path, value).map(|_| ())
    }
}

impl MetadataRetrieve for OmeMetadata {
    fn uuid(&self) -> Option<String> {
        self.root.uuid().map(str::to_string)
    }

    fn value(&self, property: Property, path: &IndexPath) -> Option<MetadataValue> {
        self.root.get(property, path).cloned()
    }

    fn count(&self, entity: Entity, parent: &IndexPath) -> Option<usize> {
        Some(self.root.count(entity, parent))
    }

    fn kind(&self, entity: Entity, path: &IndexPath) -> Option<&'static str> {
        self.root.kind(entity, path)
    }
}
