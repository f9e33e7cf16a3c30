//! Finnish viitenumero validation.

use super::error::ReferenceError;
use super::format::ReferenceFormat;
use super::sanitize::sanitize_structured_reference;

/// Repeating weight cycle, applied right to left over the body.
const WEIGHTS: [u32; 3] = [7, 3, 1];

/// Check whether `reference` is a valid Finnish bank reference
/// (viitenumero).
///
/// 4 to 20 digits; the last digit is the 7-3-1 weighted mod-10 check
/// digit of the preceding ones. Grouping spaces are ignored, any other
/// punctuation rejects.
pub fn is_valid_structured_reference_fi(reference: &str) -> bool {
    check_fi(reference).is_ok()
}

/// Checked form of [`is_valid_structured_reference_fi`].
pub(crate) fn check_fi(raw: &str) -> Result<String, ReferenceError> {
    let reference = sanitize_structured_reference(raw);

    if reference.bytes().any(|b| !b.is_ascii_digit()) {
        return Err(ReferenceError::Lexical { value: reference });
    }
    if !(4..=20).contains(&reference.len()) {
        return Err(ReferenceError::Shape {
            value: reference,
            format: ReferenceFormat::Finland,
        });
    }

    let bytes = reference.as_bytes();
    let check = u32::from(bytes[bytes.len() - 1] - b'0');
    let mut sum: u32 = 0;
    for (i, b) in bytes[..bytes.len() - 1].iter().rev().enumerate() {
        sum += u32::from(b - b'0') * WEIGHTS[i % WEIGHTS.len()];
    }

    if (10 - sum % 10) % 10 == check {
        Ok(reference)
    } else {
        Err(ReferenceError::Checksum {
            value: reference,
            format: ReferenceFormat::Finland,
        })
    }
}
