#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic on arbitrary input.
        let isr = referenz::is_valid_reference_isr(s);
        let qrr = referenz::is_valid_reference_qrr(s);
        // Every QR-reference is also a well-formed ISR reference.
        if qrr {
            assert!(isr);
        }
    }
});
