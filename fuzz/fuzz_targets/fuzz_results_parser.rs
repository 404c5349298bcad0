//! Fuzz target for results document parsing.
//!
//! Goal: loading and extraction should **never panic** on any input.
//! Malformed documents must come back as diagnostics.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_results_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = extresults_loader::fuzz::parse_document(text);

        let (model, diagnostics) = extresults_loader::fuzz::parse_results(text);
        if extresults_loader::parse_xml_str(text).is_err() {
            assert!(model.is_empty());
            assert_eq!(diagnostics.len(), 1);
        }
    }
});
