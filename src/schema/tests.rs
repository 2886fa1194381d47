use std::collections::HashSet;

use super::*;
use crate::model::{Dimension, MapPair, MetadataValue, Quantity, Unit};

#[test]
fn test_entity_depths() {
    assert_eq!(Entity::BinaryOnly.depth(), 0);
    assert_eq!(Entity::Image.depth(), 1);
    assert_eq!(Entity::Pixels.depth(), 1);
    assert_eq!(Entity::Channel.depth(), 2);
    assert_eq!(Entity::LightPath.depth(), 2);
    assert_eq!(Entity::EmissionFilterRef(FilterHolder::LightPath).depth(), 3);
    assert_eq!(Entity::EmissionFilterRef(FilterHolder::FilterSet).depth(), 3);
    assert_eq!(Entity::Uuid.depth(), 2);
    assert_eq!(Entity::WellSample.depth(), 3);
    assert_eq!(Entity::Shape.depth(), 2);
    assert_eq!(Entity::AnnotationRef(Annotated::Image).depth(), 2);
    assert_eq!(Entity::AnnotationRef(Annotated::Shape).depth(), 3);
    assert_eq!(Entity::BinaryFile.depth(), 1);
}

#[test]
fn test_entity_tree_is_consistent() {
    for entity in Entity::all() {
        assert!(entity.depth() <= crate::model::MAX_DEPTH, "{entity} too deep");
        if let Some(parent) = entity.parent() {
            assert!(
                parent.children().any(|child| child == entity),
                "{entity} missing from children of {parent}"
            );
        }
        if entity.is_reference_list() {
            assert!(entity.is_indexed(), "{entity} reference list must be indexed");
        }
    }
    assert!(Entity::roots().any(|e| e == Entity::Image));
    assert!(!Entity::roots().any(|e| e == Entity::Channel));
}

#[test]
fn test_indexed_ancestor() {
    assert_eq!(Entity::Pixels.indexed_ancestor(), Some(Entity::Image));
    assert_eq!(Entity::DetectorSettings.indexed_ancestor(), Some(Entity::Channel));
    assert_eq!(Entity::Channel.indexed_ancestor(), Some(Entity::Channel));
    assert_eq!(Entity::BinaryOnly.indexed_ancestor(), None);
    assert_eq!(Entity::Union.indexed_ancestor(), Some(Entity::Roi));
}

#[test]
fn test_polymorphic_ancestor() {
    assert_eq!(Entity::LightSource.polymorphic_ancestor(), Some(Entity::LightSource));
    assert_eq!(
        Entity::AnnotationRef(Annotated::Shape).polymorphic_ancestor(),
        Some(Entity::Shape)
    );
    assert_eq!(Entity::Detector.polymorphic_ancestor(), None);
}

#[test]
fn test_entity_names() {
    assert_eq!(Entity::Roi.name(), "ROI");
    assert_eq!(Entity::Uuid.name(), "UUID");
    assert_eq!(Entity::AnnotationRef(Annotated::Channel).accessor_name(), "ChannelAnnotationRef");
    assert_eq!(Entity::RoiRef.accessor_name(), "ImageROIRef");
    assert_eq!(
        Entity::ExcitationFilterRef(FilterHolder::LightPath).to_string(),
        "ExcitationFilterRef(LightPath)"
    );
}

#[test]
fn test_property_names_are_unique() {
    let mut names = HashSet::new();
    let mut accessors = HashSet::new();
    for property in Property::ALL {
        assert!(names.insert(property.name()), "duplicate name {property}");
        assert!(accessors.insert(property.accessor()), "duplicate accessor {property}");
    }
}

#[test]
fn test_property_lookup() {
    assert_eq!("ImageName".parse::<Property>(), Ok(Property::ImageName));
    assert_eq!("imagename".parse::<Property>(), Ok(Property::ImageName));
    assert_eq!("XMLAnnotationValue".parse::<Property>(), Ok(Property::XmlAnnotationValue));
    assert!("ImageColour".parse::<Property>().is_err());

    for property in Property::ALL {
        assert_eq!(property.name().parse::<Property>(), Ok(*property));
    }
}

#[test]
fn test_property_json_uses_schema_name() {
    let json = serde_json::to_string(&Property::ChannelLightSourceSettingsId).unwrap();
    assert_eq!(json, "\"ChannelLightSourceSettingsID\"");
    let restored: Property = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, Property::ChannelLightSourceSettingsId);
}

#[test]
fn test_sanitize_policy() {
    // free text and identifiers
    assert!(Property::ImageName.sanitized());
    assert!(Property::ImageId.sanitized());
    assert!(Property::DetectorSettingsId.sanitized());
    assert!(Property::BinaryOnlyUuid.sanitized());
    assert!(Property::CommentAnnotationAnnotator.sanitized());
    assert!(Property::UuidFileName.sanitized());

    // links, enumerations and numbers
    assert!(!Property::ImageAnnotationRef.sanitized());
    assert!(!Property::ImageInstrumentRef.sanitized());
    assert!(!Property::LightPathDichroicRef.sanitized());
    assert!(!Property::ExperimenterGroupLeader.sanitized());
    assert!(!Property::LaserPump.sanitized());
    assert!(!Property::PixelsType.sanitized());
    assert!(!Property::ChannelColor.sanitized());
    assert!(!Property::MapAnnotationValue.sanitized());
}

#[test]
fn test_only_text_properties_are_sanitized() {
    for property in Property::ALL {
        if property.sanitized() {
            assert!(property.value_type().is_textual(), "{property} sanitized but not text");
            assert!(!matches!(property.value_type(), ValueType::Enumeration(_)));
        }
        if property.entity().is_reference_list() {
            assert!(property.is_reference(), "{property} lists references");
            assert!(!property.sanitized());
        }
    }
}

#[test]
fn test_kinds_belong_to_polymorphic_entities() {
    for property in Property::ALL {
        match property.kind() {
            Some(_) => assert!(property.entity().polymorphic_ancestor().is_some()),
            None => assert!(!property.entity().is_polymorphic(), "{property} has no kind"),
        }
    }
    assert_eq!(Property::LaserWavelength.kind(), Some("Laser"));
    assert_eq!(Property::PolygonAnnotationRef.kind(), Some("Polygon"));
    assert_eq!(Property::ImageName.kind(), None);
}

#[test]
fn test_every_indexed_entity_is_reachable() {
    for entity in Entity::all() {
        let has_property = Property::ALL.iter().any(|p| {
            let mut e = Some(p.entity());
            while let Some(current) = e {
                if current == entity {
                    return true;
                }
                e = current.parent();
            }
            false
        });
        assert!(has_property, "{entity} has no property below it");
    }
}

#[test]
fn test_samples_are_accepted() {
    for property in Property::ALL {
        let vt = property.value_type();
        assert_eq!(vt.check(&vt.sample()), Ok(()), "{property}");
    }
}

#[test]
fn test_value_type_check() {
    assert!(ValueType::PositiveInteger.check(&MetadataValue::Integer(0)).is_err());
    assert!(ValueType::NonNegativeInteger.check(&MetadataValue::Integer(0)).is_ok());
    assert!(ValueType::Integer.check(&MetadataValue::Integer(i64::MAX)).is_err());
    assert!(ValueType::PercentFraction.check(&MetadataValue::Float(1.5)).is_err());
    assert!(ValueType::Text.check(&MetadataValue::Bool(true)).is_err());

    let length = ValueType::Quantity(Dimension::Length);
    assert!(length.check(&MetadataValue::Quantity(Quantity::nanometers(500.0))).is_ok());
    assert!(length.check(&MetadataValue::Quantity(Quantity::seconds(1.0))).is_err());

    let pixel_type = Property::PixelsType.value_type();
    assert!(pixel_type.check(&"uint16".into()).is_ok());
    assert!(pixel_type.check(&"uint12".into()).is_err());
}

#[test]
fn test_value_type_parse() {
    assert_eq!(
        ValueType::Boolean.parse("Yes"),
        Ok(MetadataValue::Bool(true))
    );
    assert_eq!(
        ValueType::Quantity(Dimension::Length).parse("0.5 um"),
        Ok(MetadataValue::Quantity(Quantity::new(0.5, Unit::Micrometer)))
    );
    assert_eq!(
        Property::PixelsDimensionOrder.value_type().parse("xyczt"),
        Ok(MetadataValue::Text("XYCZT".to_string()))
    );
    assert!(ValueType::PositiveInteger.parse("0").is_err());
    assert!(ValueType::Timestamp.parse("2024-03-01T10:00:00Z").is_ok());
    assert!(ValueType::Timestamp.parse("2024-03-01T10:00:00").is_ok());
    assert!(ValueType::Timestamp.parse("yesterday").is_err());
    assert_eq!(
        ValueType::Bytes.parse("00ff"),
        Ok(MetadataValue::Bytes(vec![0, 255]))
    );
    assert!(ValueType::MapPairs.parse("a=1;broken").is_err());
    assert!(ValueType::MapPairs.parse("a=1\\").is_err());
}

#[test]
fn test_map_pairs_keep_separators_and_padding() {
    let pairs = vec![
        MapPair::new("notes", "a;b"),
        MapPair::new("k=1", " v "),
        MapPair::new("path", "C:\\data"),
        MapPair::new("", ""),
    ];
    let text = MetadataValue::MapPairs(pairs.clone()).to_string();
    assert_eq!(ValueType::MapPairs.parse(&text), Ok(MetadataValue::MapPairs(pairs)));
    assert_eq!(
        ValueType::MapPairs.parse(" a = b ;"),
        Ok(MetadataValue::MapPairs(vec![MapPair::new(" a ", " b ")]))
    );
    assert_eq!(ValueType::MapPairs.parse(""), Ok(MetadataValue::MapPairs(Vec::new())));
}

#[test]
fn test_display_parses_back() {
    for property in Property::ALL {
        let vt = property.value_type();
        let sample = vt.sample();
        assert_eq!(vt.parse(&sample.to_string()), Ok(sample), "{property}");
    }
}

#[test]
fn test_enum_literals() {
    assert_eq!(PixelType::Uint16.as_str(), "uint16");
    assert_eq!("DOUBLE-complex".parse::<PixelType>(), Ok(PixelType::DoubleComplex));
    assert_eq!(PixelType::Uint16.bytes_per_pixel(), 2);
    assert_eq!(DimensionOrder::Xyzct.to_string(), "XYZCT");
    assert!("XYZ".parse::<DimensionOrder>().is_err());
    assert_eq!(Binning::VALUES.first(), Some(&"1x1"));
}
