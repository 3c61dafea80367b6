#![no_main]

use libfuzzer_sys::fuzz_target;

use fisco::documents::{AccessKeyValidator, DocumentKind};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — `false` is fine, panics are bugs.
        let keys = AccessKeyValidator::default();
        for &kind in DocumentKind::all() {
            let _ = keys.is_valid(s, kind);
        }
        let _ = keys.format(s);
    }
});
