//! Fuzz target for the markup importer.
//!
//! Arbitrary input must either fail with an error or produce a document
//! whose serialization imports back to the same document.

#![no_main]

use coursetext::{CharFormat, Document};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let defaults = CharFormat::default();
    if let Ok(doc) = Document::from_markup(data, &defaults) {
        let markup = doc.serialize();
        let again = Document::from_markup(&markup, &defaults)
            .expect("serialized markup must import");
        assert_eq!(again.serialize(), markup);
    }
});
