use std::borrow::Cow;
use std::fmt;

use log::debug;

use crate::model::{IndexPath, MetadataValue};
use crate::sanitize::{sanitize, Sanitizer};
use crate::schema::{Entity, Property};

use super::{MetadataError, MetadataRetrieve, MetadataRoot, MetadataStore};

/// Store decorator that sanitizes free text before it reaches the wrapped store.
///
/// Only text written to properties the schema marks as sanitized is rewritten;
/// references, enumerations, numbers and the document UUID pass through
/// verbatim. With filtering off the decorator forwards everything unchanged.
/// Errors from the wrapped store are returned as-is.
///
/// ```
/// use omemeta::prelude::*;
///
/// let mut store = FilterMetadata::new(OmeMetadata::new(), true);
/// store.set_image_name("Sample\u{7}1", 0).unwrap();
/// store.set_image_annotation_ref("Annotation:\u{7}0", 0, 0).unwrap();
///
/// let meta = store.into_inner();
/// assert_eq!(meta.image_name(0).as_deref(), Some("Sample1"));
/// assert_eq!(meta.image_annotation_ref(0, 0).as_deref(), Some("Annotation:\u{7}0"));
/// ```
#[derive(Clone)]
pub struct FilterMetadata<S> {
    store: S,
    filter: bool,
    sanitizer: Sanitizer,
}

impl<S> FilterMetadata<S> {
    /// Wrap `store`, sanitizing text when `filter` is set
    pub fn new(store: S, filter: bool) -> Self {
        Self {
            store,
            filter,
            sanitizer: sanitize,
        }
    }

    /// Replace the sanitizer function
    pub fn with_sanitizer(mut self, sanitizer: Sanitizer) -> Self {
        self.sanitizer = sanitizer;
        self
    }

    /// Whether text is being sanitized
    pub fn is_filtering(&self) -> bool {
        self.filter
    }

    /// The wrapped store
    pub fn delegate(&self) -> &S {
        &self.store
    }

    /// The wrapped store, mutably
    pub fn delegate_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Unwrap the decorator
    pub fn into_inner(self) -> S {
        self.store
    }

    fn filter_value(&self, property: Property, value: MetadataValue) -> MetadataValue {
        if !self.filter || !property.sanitized() {
            return value;
        }
        let MetadataValue::Text(text) = value else {
            return value;
        };
        let cleaned = match (self.sanitizer)(&text) {
            Cow::Borrowed(_) => None,
            Cow::Owned(clean) => Some(clean),
        };
        match cleaned {
            Some(clean) => {
                debug!("Sanitized {property}: {text:?} -> {clean:?}");
                MetadataValue::Text(clean)
            }
            None => MetadataValue::Text(text),
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for FilterMetadata<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterMetadata")
            .field("store", &self.store)
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}

impl<S: MetadataStore> MetadataStore for FilterMetadata<S> {
    fn create_root(&mut self) {
        self.store.create_root()
    }

    fn root(&self) -> Option<&MetadataRoot> {
        self.store.root()
    }

    fn set_root(&mut self, root: MetadataRoot) -> Result<(), MetadataError> {
        self.store.set_root(root)
    }

    fn set_uuid(&mut self, uuid: &str) -> Result<(), MetadataError> {
        self.store.set_uuid(uuid)
    }

    fn set_value(
        &mut self,
        property: Property,
        path: IndexPath,
        value: MetadataValue,
    ) -> Result<(), MetadataError> {
        let value = self.filter_value(property, value);
        self.store.set_value(property, path, value)
    }
}

impl<S: MetadataRetrieve> MetadataRetrieve for FilterMetadata<S> {
    fn uuid(&self) -> Option<String> {
        self.store.uuid()
    }

    fn value(&self, property: Property, path: &IndexPath) -> Option<MetadataValue> {
        self.store.value(property, path)
    }

    fn count(&self, entity: Entity, parent: &IndexPath) -> Option<usize> {
        self.store.count(entity, parent)
    }

    fn kind(&self, entity: Entity, path: &IndexPath) -> Option<&'static str> {
        self.store.kind(entity, path)
    }
}
