//! Dutch betalingskenmerk validation.

use super::error::ReferenceError;
use super::format::ReferenceFormat;
use super::sanitize::sanitize_structured_reference;

/// Weight cycle 2^(i+1) mod 11, applied right to left over the body.
const WEIGHTS: [u32; 10] = [2, 4, 8, 5, 10, 9, 7, 3, 6, 1];

/// Check whether `reference` is a valid Dutch payment reference
/// (betalingskenmerk).
///
/// Accepts 7, 9 to 14, or 16 digits. The first digit is the weighted
/// mod-11 check digit of the rest: a remainder of 0 keeps check digit 0,
/// a remainder of 1 keeps 1, anything else expects `11 - remainder`.
pub fn is_valid_structured_reference_nl(reference: &str) -> bool {
    check_nl(reference).is_ok()
}

/// Checked form of [`is_valid_structured_reference_nl`].
pub(crate) fn check_nl(raw: &str) -> Result<String, ReferenceError> {
    let reference = sanitize_structured_reference(raw);

    if reference.bytes().any(|b| !b.is_ascii_digit()) {
        return Err(ReferenceError::Lexical { value: reference });
    }
    if !matches!(reference.len(), 7 | 9..=14 | 16) {
        return Err(ReferenceError::Shape {
            value: reference,
            format: ReferenceFormat::Netherlands,
        });
    }

    let bytes = reference.as_bytes();
    let check = u32::from(bytes[0] - b'0');
    let mut sum: u32 = 0;
    for (i, b) in bytes[1..].iter().rev().enumerate() {
        sum += u32::from(b - b'0') * WEIGHTS[i % WEIGHTS.len()];
    }
    let expected = match sum % 11 {
        0 => 0,
        1 => 1,
        rem => 11 - rem,
    };

    if expected == check {
        Ok(reference)
    } else {
        Err(ReferenceError::Checksum {
            value: reference,
            format: ReferenceFormat::Netherlands,
        })
    }
}
