#![no_main]

use libfuzzer_sys::fuzz_target;

use fisco::core::mask::{apply_mask, strip_mask};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Masking arbitrary text must not panic, and stripping what was
        // inserted must recover a prefix of the payload.
        let masked = apply_mask(s, "###.###.###-##", ".-");
        let stripped = strip_mask(&masked, ".-");
        assert!(strip_mask(s, ".-").starts_with(&stripped));
    }
});
