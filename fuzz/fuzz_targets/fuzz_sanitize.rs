#![no_main]

use libfuzzer_sys::fuzz_target;
use omemeta::metadata::{FilterMetadata, MetadataRetrieve, OmeMetadata, StoreAccessors};
use omemeta::model::IndexPath;
use omemeta::sanitize::{is_allowed, sanitize};
use omemeta::schema::Property;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    // Output only ever holds allowed characters and is stable
    let clean = sanitize(&text);
    assert!(clean.chars().all(is_allowed));
    assert_eq!(sanitize(&clean), clean);

    // The decorator stores exactly what the sanitizer produces
    let mut meta = FilterMetadata::new(OmeMetadata::new(), true);
    meta.set_image_name(&*text, 0).unwrap();
    let stored = meta
        .value(Property::ImageName, &IndexPath::new([0]))
        .and_then(|v| v.as_text().map(str::to_string));
    assert_eq!(stored, Some(clean.into_owned()));
});
