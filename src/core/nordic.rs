//! Norwegian KID / Swedish OCR reference validation.

use super::error::ReferenceError;
use super::format::ReferenceFormat;
use super::sanitize::sanitize_structured_reference;

/// Check whether `reference` is a valid Norwegian or Swedish payment
/// reference (KID / OCR).
///
/// 1 to 25 digits; the last digit is a Luhn (mod-10) check digit.
pub fn is_valid_structured_reference_no_se(reference: &str) -> bool {
    check_no_se(reference).is_ok()
}

/// Checked form of [`is_valid_structured_reference_no_se`].
pub(crate) fn check_no_se(raw: &str) -> Result<String, ReferenceError> {
    let reference = sanitize_structured_reference(raw);

    if reference.bytes().any(|b| !b.is_ascii_digit()) {
        return Err(ReferenceError::Lexical { value: reference });
    }
    if !(1..=25).contains(&reference.len()) {
        return Err(ReferenceError::Shape {
            value: reference,
            format: ReferenceFormat::NorwaySweden,
        });
    }

    let bytes = reference.as_bytes();
    let check = u32::from(bytes[bytes.len() - 1] - b'0');
    let mut sum: u32 = 0;
    for (i, b) in bytes[..bytes.len() - 1].iter().rev().enumerate() {
        let digit = u32::from(b - b'0');
        sum += if i % 2 == 0 {
            // doubled digits fold back to one digit (9*2 = 18 -> 9)
            let doubled = digit * 2;
            if doubled > 9 { doubled - 9 } else { doubled }
        } else {
            digit
        };
    }

    if (10 - sum % 10) % 10 == check {
        Ok(reference)
    } else {
        Err(ReferenceError::Checksum {
            value: reference,
            format: ReferenceFormat::NorwaySweden,
        })
    }
}
