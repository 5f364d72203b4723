use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which of the two compared texts something refers to.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The human-verified reference text.
    Original,

    /// The text extracted by OCR.
    Ocr,
}

impl Side {
    /// Field name used by the ingestion service for this side's text.
    #[must_use]
    pub fn field_name(self) -> &'static str {
        match self {
            Side::Original => "original_text",
            Side::Ocr => "ocr_text",
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Original => write!(f, "original"),
            Side::Ocr => write!(f, "OCR"),
        }
    }
}
