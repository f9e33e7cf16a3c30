use thiserror::Error;

use super::format::ReferenceFormat;

/// Why a candidate failed structured reference validation.
///
/// The boolean `is_valid_*` functions collapse all of these to `false`;
/// the typed API ([`super::StructuredReference::parse`]) surfaces them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ReferenceError {
    /// A character outside the alphabet accepted by the format.
    #[error("invalid character in reference '{value}'")]
    Lexical {
        /// The sanitized candidate.
        value: String,
    },

    /// Length or framing does not match the format's layout.
    #[error("reference '{value}' does not match the {format} layout")]
    Shape {
        /// The sanitized candidate.
        value: String,
        /// The format whose layout was expected.
        format: ReferenceFormat,
    },

    /// The embedded check digits disagree with the computed ones.
    #[error("check digit mismatch in {format} reference '{value}'")]
    Checksum {
        /// The sanitized candidate.
        value: String,
        /// The format whose checksum failed.
        format: ReferenceFormat,
    },

    /// No supported format family accepts the candidate.
    #[error("unrecognized structured reference '{value}'")]
    Unrecognized {
        /// The sanitized candidate.
        value: String,
    },
}
