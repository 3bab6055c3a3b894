#![no_main]

use libfuzzer_sys::fuzz_target;
use tinymap::{decoder::decode, tiny, NamespacePair};

fuzz_target!(|data: &[u8]| {
    let namespaces = NamespacePair::new("srg", "named");

    // Whole archives
    let _ = decode(Some(data), "mappings/mappings.tiny", &namespaces);

    // Raw tables, skipping the zip layer
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = tiny::parse(text, &namespaces);
    }
});
