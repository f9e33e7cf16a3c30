#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — rejection is fine, panics are bugs.
        let verdicts = [
            referenz::is_valid_structured_reference_iso(s),
            referenz::is_valid_structured_reference_be(s),
            referenz::is_valid_structured_reference_fi(s),
            referenz::is_valid_structured_reference_no_se(s),
            referenz::is_valid_structured_reference_nl(s),
        ];
        // The dispatcher is the disjunction of the five validators.
        assert_eq!(
            referenz::is_valid_structured_reference(s),
            verdicts.into_iter().any(|v| v)
        );
    }
});
