//! Format dispatch and the validated reference type.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::belgium::check_be;
use super::error::ReferenceError;
use super::finland::check_fi;
use super::format::ReferenceFormat;
use super::iso11649::check_iso;
use super::netherlands::check_nl;
use super::nordic::check_no_se;
use super::sanitize::sanitize_structured_reference;

/// Check whether `reference` is valid in any of the supported formats.
///
/// Equivalent to the disjunction of the five per-format validators.
pub fn is_valid_structured_reference(reference: &str) -> bool {
    detect_reference_format(reference).is_some()
}

/// Detect which format family accepts `reference`, if any.
///
/// The `RF` prefix and the `+++`/`***` wrappers identify their formats
/// outright; pure-digit candidates can satisfy several families at once,
/// so those are tried in a fixed order (Belgian, Finnish,
/// Norwegian/Swedish, Dutch) and the first accepting one wins.
pub fn detect_reference_format(reference: &str) -> Option<ReferenceFormat> {
    if check_iso(reference).is_ok() {
        Some(ReferenceFormat::Iso11649)
    } else if check_be(reference).is_ok() {
        Some(ReferenceFormat::Belgium)
    } else if check_fi(reference).is_ok() {
        Some(ReferenceFormat::Finland)
    } else if check_no_se(reference).is_ok() {
        Some(ReferenceFormat::NorwaySweden)
    } else if check_nl(reference).is_ok() {
        Some(ReferenceFormat::Netherlands)
    } else {
        None
    }
}

/// A successfully validated structured reference.
///
/// Holds the normalized text (whitespace stripped, letters uppercased,
/// Belgian wrappers removed) together with the detected format. Built
/// only through [`StructuredReference::parse`], so a value of this type
/// always carries a checksum-verified reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StructuredReference {
    format: ReferenceFormat,
    reference: String,
}

impl StructuredReference {
    /// Validate and classify `reference`.
    ///
    /// Accepts exactly the candidates [`is_valid_structured_reference`]
    /// accepts. On failure the error names the closest format family:
    /// an `RF` prefix or Belgian wrapper pins the family outright, a
    /// pure-digit candidate reports the most specific failure among the
    /// digit families, and anything else is [`ReferenceError::Unrecognized`].
    pub fn parse(reference: &str) -> Result<Self, ReferenceError> {
        let cleaned = sanitize_structured_reference(reference);

        // probe the prefix bytewise, the first character may be multi-byte
        let has_rf_prefix = matches!(
            cleaned.as_bytes(),
            [a, b, ..] if a.eq_ignore_ascii_case(&b'R') && b.eq_ignore_ascii_case(&b'F')
        );
        if has_rf_prefix {
            return check_iso(reference).map(|normalized| Self {
                format: ReferenceFormat::Iso11649,
                reference: normalized,
            });
        }
        if cleaned.starts_with("+++") || cleaned.starts_with("***") {
            return check_be(reference).map(|normalized| Self {
                format: ReferenceFormat::Belgium,
                reference: normalized,
            });
        }

        if !cleaned.is_empty() && cleaned.bytes().all(|b| b.is_ascii_digit()) {
            type Check = fn(&str) -> Result<String, ReferenceError>;
            let attempts: [(ReferenceFormat, Check); 4] = [
                (ReferenceFormat::Belgium, check_be),
                (ReferenceFormat::Finland, check_fi),
                (ReferenceFormat::NorwaySweden, check_no_se),
                (ReferenceFormat::Netherlands, check_nl),
            ];

            let mut checksum_err = None;
            let mut shape_err = None;
            for (format, check) in attempts {
                match check(reference) {
                    Ok(normalized) => {
                        return Ok(Self {
                            format,
                            reference: normalized,
                        });
                    }
                    Err(err @ ReferenceError::Checksum { .. }) => {
                        checksum_err.get_or_insert(err);
                    }
                    Err(err) => {
                        shape_err.get_or_insert(err);
                    }
                }
            }
            // a failed checksum is a better diagnosis than a length complaint
            if let Some(err) = checksum_err.or(shape_err) {
                return Err(err);
            }
        }

        Err(ReferenceError::Unrecognized { value: cleaned })
    }

    /// The detected format family.
    pub fn format(&self) -> ReferenceFormat {
        self.format
    }

    /// The normalized reference text.
    pub fn as_str(&self) -> &str {
        &self.reference
    }
}

impl fmt::Display for StructuredReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reference)
    }
}
