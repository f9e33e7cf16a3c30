#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Parsing accepts exactly the dispatcher's language, and a parsed
        // reference must classify back to its own format.
        match referenz::StructuredReference::parse(s) {
            Ok(parsed) => {
                assert!(referenz::is_valid_structured_reference(s));
                assert_eq!(
                    referenz::detect_reference_format(parsed.as_str()),
                    Some(parsed.format())
                );
            }
            Err(_) => assert!(!referenz::is_valid_structured_reference(s)),
        }
    }
});
