//! ISO 11649 creditor reference validation.

use super::checksum::mod97_expanded;
use super::error::ReferenceError;
use super::format::ReferenceFormat;
use super::sanitize::sanitize_structured_reference;

/// Check whether `reference` is a valid ISO 11649 creditor reference.
///
/// Accepts `RF` (case-insensitive) followed by two check digits and 1 to
/// 21 characters from `[0-9A-Z]`; grouping spaces are ignored. The check
/// digits satisfy mod-97 == 1 over the rotated, letter-expanded string,
/// the same scheme IBANs use.
pub fn is_valid_structured_reference_iso(reference: &str) -> bool {
    check_iso(reference).is_ok()
}

/// Checked form of [`is_valid_structured_reference_iso`], returning the
/// normalized (uppercased, space-free) reference.
pub(crate) fn check_iso(raw: &str) -> Result<String, ReferenceError> {
    let reference = sanitize_structured_reference(raw).to_ascii_uppercase();

    if !reference.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(ReferenceError::Lexical { value: reference });
    }
    // RF + two check digits + 1..=21 payload characters
    if !reference.starts_with("RF")
        || !(5..=25).contains(&reference.len())
        || !reference[2..4].bytes().all(|b| b.is_ascii_digit())
    {
        return Err(ReferenceError::Shape {
            value: reference,
            format: ReferenceFormat::Iso11649,
        });
    }

    let (head, payload) = reference.split_at(4);
    let rotated = format!("{payload}{head}");
    match mod97_expanded(&rotated) {
        Some(1) => Ok(reference),
        _ => Err(ReferenceError::Checksum {
            value: reference,
            format: ReferenceFormat::Iso11649,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_reference() {
        assert!(is_valid_structured_reference_iso("RF18539007547034"));
        assert!(is_valid_structured_reference_iso("RF18 5390 0754 7034"));
        assert!(is_valid_structured_reference_iso(" RF18 5390 0754 7034 "));
    }

    #[test]
    fn zero_padded_to_maximum_length() {
        // 25 characters, leading zeros in the payload are significant
        assert!(is_valid_structured_reference_iso(
            "RF18000000000539007547034"
        ));
    }

    #[test]
    fn lowercase_prefix_is_folded() {
        assert!(is_valid_structured_reference_iso("rf18539007547034"));
        assert!(is_valid_structured_reference_iso("Rf18 5390 0754 7034"));
    }

    #[test]
    fn letters_in_payload() {
        // payload "ABC" expands to 10 11 12; check digits 45 close the loop
        assert!(is_valid_structured_reference_iso("RF45ABC"));
        assert!(is_valid_structured_reference_iso("rf45abc"));
        assert!(!is_valid_structured_reference_iso("RF44ABC"));
    }

    #[test]
    fn wrong_check_digits() {
        assert!(!is_valid_structured_reference_iso("RF17539007547034"));
        assert!(!is_valid_structured_reference_iso("RF19539007547034"));
    }

    #[test]
    fn shape_violations() {
        // missing payload
        assert!(!is_valid_structured_reference_iso("RF18"));
        // 22-character payload exceeds the limit
        assert!(!is_valid_structured_reference_iso(
            "RF180000000000539007547034"
        ));
        // check digits must be digits
        assert!(!is_valid_structured_reference_iso("RFAB539007547034"));
        // wrong prefix
        assert!(!is_valid_structured_reference_iso("RX18539007547034"));
    }

    #[test]
    fn foreign_characters_reject() {
        assert!(!is_valid_structured_reference_iso(
            "RF18539007547034-OTHER-RANDOM-STUFF"
        ));
        assert!(!is_valid_structured_reference_iso("RF18 5390/0754 7034"));
        assert!(!is_valid_structured_reference_iso("RF18€539007547034"));
    }

    #[test]
    fn checked_form_normalizes() {
        assert_eq!(
            check_iso(" rf18 5390 0754 7034 ").unwrap(),
            "RF18539007547034"
        );
    }
}
