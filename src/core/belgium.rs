//! Belgian structured communication (OGM-VCS) validation.

use super::checksum::mod97;
use super::error::ReferenceError;
use super::format::ReferenceFormat;
use super::sanitize::sanitize_structured_reference;

/// Check whether `reference` is a valid Belgian structured communication.
///
/// Accepts the bare 12-digit form as well as the printed form with `+++`
/// or `***` wrappers and `/` group separators (`+++020/3430/57642+++`).
/// The last two digits are the mod-97 remainder of the first ten; a
/// remainder of 0 is written as 97.
pub fn is_valid_structured_reference_be(reference: &str) -> bool {
    check_be(reference).is_ok()
}

/// Checked form of [`is_valid_structured_reference_be`], returning the
/// bare 12 digits.
pub(crate) fn check_be(raw: &str) -> Result<String, ReferenceError> {
    let reference = sanitize_structured_reference(raw);

    let Some(digits) = extract_digits(&reference) else {
        return Err(ReferenceError::Shape {
            value: reference,
            format: ReferenceFormat::Belgium,
        });
    };

    let bytes = digits.as_bytes();
    let check = u32::from(bytes[10] - b'0') * 10 + u32::from(bytes[11] - b'0');
    let valid = match mod97(&digits[..10]) {
        0 => check == 97,
        rem => check == rem,
    };
    if valid {
        Ok(digits)
    } else {
        Err(ReferenceError::Checksum {
            value: digits,
            format: ReferenceFormat::Belgium,
        })
    }
}

/// Extract the 12 digits from either accepted layout, or `None` when the
/// candidate matches neither.
fn extract_digits(reference: &str) -> Option<String> {
    if reference.len() == 12 && reference.bytes().all(|b| b.is_ascii_digit()) {
        return Some(reference.to_string());
    }

    // +++ddd/dddd/ddddd+++ (or *** on either end): 20 characters total
    if reference.len() != 20 || !reference.is_ascii() {
        return None;
    }
    let (prefix, rest) = reference.split_at(3);
    let (body, suffix) = rest.split_at(14);
    if !matches!(prefix, "+++" | "***") || !matches!(suffix, "+++" | "***") {
        return None;
    }
    let bytes = body.as_bytes();
    if bytes[3] != b'/' || bytes[8] != b'/' {
        return None;
    }
    let digits: String = body.chars().filter(|c| *c != '/').collect();
    if digits.len() == 12 && digits.bytes().all(|b| b.is_ascii_digit()) {
        Some(digits)
    } else {
        None
    }
}
