use std::fmt;

use serde::{Deserialize, Serialize};

/// The structured reference families understood by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceFormat {
    /// ISO 11649 creditor reference (`RF…`).
    Iso11649,
    /// Belgian structured communication (OGM-VCS).
    Belgium,
    /// Finnish viitenumero.
    Finland,
    /// Norwegian KID / Swedish OCR reference.
    NorwaySweden,
    /// Dutch betalingskenmerk.
    Netherlands,
}

impl fmt::Display for ReferenceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReferenceFormat::Iso11649 => "ISO 11649",
            ReferenceFormat::Belgium => "Belgian OGM-VCS",
            ReferenceFormat::Finland => "Finnish viitenumero",
            ReferenceFormat::NorwaySweden => "Norwegian/Swedish KID/OCR",
            ReferenceFormat::Netherlands => "Dutch betalingskenmerk",
        };
        f.write_str(name)
    }
}
