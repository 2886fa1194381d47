//! Property-based tests for the accessor contract
//!
//! Round trips through the in-memory store, the null object and the
//! sanitizing decorator, over arbitrary text and index paths.

use omemeta::prelude::*;
use omemeta::sanitize::is_allowed;
use proptest::prelude::*;

fn text_property() -> impl Strategy<Value = Property> {
    prop::sample::select(
        Property::ALL
            .iter()
            .copied()
            .filter(|p| matches!(p.value_type(), omemeta::schema::ValueType::Text))
            .collect::<Vec<_>>(),
    )
}

fn path_for(property: Property, indices: &[usize]) -> IndexPath {
    IndexPath::from_slice(&indices[..property.arity()]).unwrap_or(IndexPath::ROOT)
}

proptest! {
    /// Setting then getting through the in-memory store returns the value unchanged
    #[test]
    fn test_store_round_trip(
        property in text_property(),
        indices in prop::collection::vec(0usize..8, 4),
        text in any::<String>(),
    ) {
        let path = path_for(property, &indices);
        let mut meta = OmeMetadata::new();
        meta.set_value(property, path, MetadataValue::Text(text.clone())).unwrap();
        prop_assert_eq!(meta.value(property, &path), Some(MetadataValue::Text(text)));

        // Every ancestor level counts at least up to the index written.
        if let Some(last) = path.last() {
            let parent = path.parent().unwrap_or(IndexPath::ROOT);
            let entity = property.entity().indexed_ancestor().unwrap();
            prop_assert!(meta.count(entity, &parent).unwrap() > last);
        }
    }

    /// The null object accepts everything and returns nothing
    #[test]
    fn test_null_object(
        property in text_property(),
        indices in prop::collection::vec(0usize..8, 4),
        text in any::<String>(),
    ) {
        let path = path_for(property, &indices);
        let mut dummy = DummyMetadata;
        prop_assert!(dummy.set_value(property, path, MetadataValue::Text(text)).is_ok());
        prop_assert_eq!(dummy.value(property, &path), None);
        prop_assert_eq!(dummy.count(property.entity(), &path), None);
        prop_assert_eq!(dummy.uuid(), None);
    }

    /// With filtering on, stored free text never holds a disallowed character
    /// and equals the input with those characters removed
    #[test]
    fn test_filter_on(property in text_property(), text in any::<String>()) {
        let path = path_for(property, &[0, 0, 0, 0]);
        let mut meta = FilterMetadata::new(OmeMetadata::new(), true);
        meta.set_value(property, path, MetadataValue::Text(text.clone())).unwrap();

        let expected: String = text.chars().filter(|&c| is_allowed(c)).collect();
        let stored = meta.value(property, &path);
        prop_assert_eq!(stored.as_ref().and_then(|v| v.as_text()), Some(expected.as_str()));
        prop_assert!(expected.chars().all(is_allowed));
    }

    /// With filtering off, the decorator is transparent
    #[test]
    fn test_filter_off(property in text_property(), text in any::<String>()) {
        let path = path_for(property, &[1, 2, 0, 0]);
        let mut meta = FilterMetadata::new(OmeMetadata::new(), false);
        meta.set_value(property, path, MetadataValue::Text(text.clone())).unwrap();
        prop_assert_eq!(meta.value(property, &path), Some(MetadataValue::Text(text)));
    }

    /// Sanitizing is idempotent
    #[test]
    fn test_sanitize_idempotent(text in any::<String>()) {
        let once = sanitize(&text).into_owned();
        let twice = sanitize(&once).into_owned();
        prop_assert_eq!(once, twice);
    }

    /// References and the document UUID pass through the filter verbatim
    #[test]
    fn test_verbatim_references(text in any::<String>()) {
        let mut meta = FilterMetadata::new(OmeMetadata::new(), true);
        meta.set_uuid(&text).unwrap();
        meta.set_image_instrument_ref(text.clone(), 0).unwrap();
        meta.set_image_annotation_ref(text.clone(), 0, 3).unwrap();

        prop_assert_eq!(meta.uuid(), Some(text.clone()));
        prop_assert_eq!(meta.image_instrument_ref(0), Some(text.clone()));
        prop_assert_eq!(meta.image_annotation_ref(0, 3), Some(text));
        prop_assert_eq!(meta.image_annotation_ref_count(0), Some(4));
    }

    /// Numbers pass through the filter unchanged
    #[test]
    fn test_verbatim_numbers(
        size in 1i32..=i32::MAX,
        na in any::<f64>().prop_filter("finite", |v| v.is_finite()),
        value in any::<i64>(),
    ) {
        let mut meta = FilterMetadata::new(OmeMetadata::new(), true);
        meta.set_pixels_size_x(size, 0).unwrap();
        meta.set_objective_lens_na(na, 0, 0).unwrap();
        meta.set_long_annotation_value(value, 0).unwrap();

        prop_assert_eq!(meta.pixels_size_x(0), Some(size));
        prop_assert_eq!(meta.objective_lens_na(0, 0), Some(na));
        prop_assert_eq!(meta.long_annotation_value(0), Some(value));
    }
}
