use std::collections::BTreeMap;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::model::{IndexPath, MetadataValue, MAX_INDEX};
use crate::schema::{Entity, Property};

use super::MetadataError;

/// The contents of one metadata document.
///
/// Holds the document UUID and every populated property slot, keyed by
/// property and index path. Instance counts and the concrete kinds of
/// light sources and shapes are derived from the slots and kept alongside
/// them, so a root rebuilt from its JSON form answers the same queries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "RootSnapshot", try_from = "RootSnapshot")]
pub struct MetadataRoot {
    uuid: Option<String>,
    slots: BTreeMap<(Property, IndexPath), MetadataValue>,
    /// Instances per (entity, parent path); singletons count as one.
    instances: BTreeMap<(Entity, IndexPath), usize>,
    kinds: BTreeMap<(Entity, IndexPath), &'static str>,
}

impl MetadataRoot {
    /// Create an empty root
    pub fn new() -> Self {
        Self::default()
    }

    /// Document UUID, if one was set
    pub fn uuid(&self) -> Option<&str> {
        self.uuid.as_deref()
    }

    /// Stamp the document with a UUID
    pub fn set_uuid(&mut self, uuid: impl Into<String>) {
        self.uuid = Some(uuid.into());
    }

    /// Stored value of a slot
    pub fn get(&self, property: Property, path: &IndexPath) -> Option<&MetadataValue> {
        self.slots.get(&(property, *path))
    }

    /// Store a value, returning the one it replaced.
    ///
    /// Checks the path against the property's entity depth and [`MAX_INDEX`],
    /// the value against the property's value type and, for light sources and
    /// shapes, the kind already recorded for the instance. Nothing is modified
    /// on error.
    pub fn insert(
        &mut self,
        property: Property,
        path: IndexPath,
        value: MetadataValue,
    ) -> Result<Option<MetadataValue>, MetadataError> {
        let expected = property.arity();
        if path.len() != expected {
            return Err(MetadataError::IndexArity {
                property,
                expected,
                found: path.len(),
            });
        }
        if let Some(&index) = path.as_slice().iter().find(|&&i| i > MAX_INDEX) {
            return Err(MetadataError::IndexOutOfRange {
                property,
                path,
                index,
                max: MAX_INDEX,
            });
        }
        property
            .value_type()
            .check(&value)
            .map_err(|reason| MetadataError::InvalidValue { property, reason })?;
        let kind_slot = self.check_kind(property, &path)?;

        if let Some((key, kind)) = kind_slot {
            self.kinds.insert(key, kind);
        }
        self.register(property.entity(), &path);
        trace!("{property}[{path}] = {value}");
        Ok(self.slots.insert((property, path), value))
    }

    /// Number of `entity` instances under `parent`.
    ///
    /// For singleton entities `parent` is the path of the instance itself and
    /// the result is 0 or 1.
    pub fn count(&self, entity: Entity, parent: &IndexPath) -> usize {
        self.instances.get(&(entity, *parent)).copied().unwrap_or(0)
    }

    /// Concrete kind recorded for a light source or shape instance
    pub fn kind(&self, entity: Entity, path: &IndexPath) -> Option<&'static str> {
        self.kinds.get(&(entity, *path)).copied()
    }

    /// Every populated slot, ordered by property then path
    pub fn slots(&self) -> impl Iterator<Item = (Property, &IndexPath, &MetadataValue)> {
        self.slots
            .iter()
            .map(|((property, path), value)| (*property, path, value))
    }

    /// Number of populated slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when no slot is populated
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, MetadataError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON
    pub fn to_json_pretty(&self) -> Result<String, MetadataError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON, re-validating every slot
    pub fn from_json(json: &str) -> Result<Self, MetadataError> {
        let root: Self = serde_json::from_str(json)?;
        debug!("Loaded metadata root with {} slots", root.len());
        Ok(root)
    }

    fn check_kind(
        &self,
        property: Property,
        path: &IndexPath,
    ) -> Result<Option<((Entity, IndexPath), &'static str)>, MetadataError> {
        let Some(requested) = property.kind() else {
            return Ok(None);
        };
        let Some(entity) = property.entity().polymorphic_ancestor() else {
            return Ok(None);
        };
        let key = (entity, path.prefix(entity.depth()));
        match self.kinds.get(&key) {
            Some(&existing) if existing != requested => Err(MetadataError::KindMismatch {
                entity,
                path: key.1,
                existing,
                requested,
            }),
            _ => Ok(Some((key, requested))),
        }
    }

    /// Record the instance at `path` and every enclosing instance.
    fn register(&mut self, entity: Entity, path: &IndexPath) {
        let mut current = Some(entity);
        while let Some(e) = current {
            let depth = e.depth();
            if e.is_indexed() {
                let parent = path.prefix(depth - 1);
                let index = path.get(depth - 1).unwrap_or(0);
                let count = self.instances.entry((e, parent)).or_insert(0);
                *count = (*count).max(index + 1);
            } else {
                self.instances.insert((e, path.prefix(depth)), 1);
            }
            current = e.parent();
        }
    }
}

/// One slot in the serialized form
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SlotRecord {
    property: Property,
    path: IndexPath,
    value: MetadataValue,
}

/// Serialized form of a [`MetadataRoot`]; registries are rebuilt on load
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RootSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    uuid: Option<String>,
    #[serde(default)]
    slots: Vec<SlotRecord>,
}

impl From<MetadataRoot> for RootSnapshot {
    fn from(root: MetadataRoot) -> Self {
        Self {
            uuid: root.uuid,
            slots: root
                .slots
                .into_iter()
                .map(|((property, path), value)| SlotRecord {
                    property,
                    path,
                    value,
                })
                .collect(),
        }
    }
}

impl TryFrom<RootSnapshot> for MetadataRoot {
    type Error = MetadataError;

    fn try_from(snapshot: RootSnapshot) -> Result<Self, Self::Error> {
        let mut root = MetadataRoot {
            uuid: snapshot.uuid,
            ..Default::default()
        };
        for slot in snapshot.slots {
            root.insert(slot.property, slot.path, slot.value)?;
        }
        Ok(root)
    }
}
