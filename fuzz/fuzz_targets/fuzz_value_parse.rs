#![no_main]

use libfuzzer_sys::fuzz_target;
use omemeta::schema::Property;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Parsing arbitrary text must never panic, and anything accepted
    // must satisfy the property's own type check
    for property in Property::ALL {
        let value_type = property.value_type();
        if let Ok(value) = value_type.parse(text) {
            assert!(value_type.check(&value).is_ok(), "{property} accepted {value:?}");
        }
    }
});
