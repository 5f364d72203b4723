use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use cache::ComparisonCache;
#[cfg(feature = "serde")]
pub use service_response::ServiceResponse;

use crate::{
    accuracy::{AccuracyMetric, AccuracyScore, levenshtein_accuracy, score_stats},
    alignment::{EditScript, ScriptStats, align_with_limit},
    config::ComparisonConfig,
    errors::ComparisonError,
    highlight::{HighlightResult, Segment, build_views},
    utils::{decode_text::decode_text, side::Side},
};

mod cache;
#[cfg(feature = "serde")]
mod service_response;

/// Everything a presentation layer needs to show how an OCR result differs
/// from the verified text.
///
/// When serialised, the edit script itself is omitted; the views, the score
/// and the operation counts are kept.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Comparison {
    #[cfg_attr(feature = "serde", serde(skip))]
    script: EditScript,

    #[cfg_attr(feature = "serde", serde(flatten))]
    highlight: HighlightResult,

    accuracy: AccuracyScore,

    stats: ScriptStats,

    /// The accuracy figure an external service reported for the same pair,
    /// kept for display next to the locally computed one.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    reported_accuracy: Option<f64>,
}

impl Comparison {
    #[must_use]
    pub fn script(&self) -> &EditScript { &self.script }

    #[must_use]
    pub fn highlight(&self) -> &HighlightResult { &self.highlight }

    #[must_use]
    pub fn original_view(&self) -> &[Segment] { &self.highlight.original_view }

    #[must_use]
    pub fn modified_view(&self) -> &[Segment] { &self.highlight.modified_view }

    #[must_use]
    pub fn accuracy(&self) -> AccuracyScore { self.accuracy }

    #[must_use]
    pub fn stats(&self) -> ScriptStats { self.stats }

    #[must_use]
    pub fn reported_accuracy(&self) -> Option<f64> { self.reported_accuracy }

    #[must_use]
    pub fn with_reported_accuracy(mut self, reported_accuracy: Option<f64>) -> Self {
        self.reported_accuracy = reported_accuracy;
        self
    }
}

/// Compare a verified `original` text with its `ocr` counterpart using the
/// default configuration.
///
/// ```
/// use ocr_accuracy::{Role, compare};
///
/// let comparison = compare("the quick fox", "the quick brown fox");
///
/// let added: Vec<&str> = comparison
///     .modified_view()
///     .iter()
///     .filter(|segment| segment.role() == Role::Added)
///     .map(|segment| segment.text())
///     .collect();
/// assert_eq!(added, ["brown "]);
/// assert_eq!(comparison.accuracy().to_string(), "83.33%");
/// ```
#[must_use]
pub fn compare(original: &str, ocr: &str) -> Comparison {
    compare_with_config(original, ocr, &ComparisonConfig::default())
}

#[must_use]
pub fn compare_with_config(original: &str, ocr: &str, config: &ComparisonConfig) -> Comparison {
    let original_tokens = config.tokenizer.tokenize(original);
    let ocr_tokens = config.tokenizer.tokenize(ocr);
    debug!(
        "Comparing {} original tokens with {} OCR tokens ({:?} tokenizer)",
        original_tokens.len(),
        ocr_tokens.len(),
        config.tokenizer
    );

    let script = align_with_limit(&original_tokens, &ocr_tokens, config.max_search_depth);
    let highlight = build_views(&script);
    let stats = script.stats();

    let accuracy = match config.metric {
        AccuracyMetric::TokenOverlap => score_stats(stats),
        AccuracyMetric::CharacterLevenshtein => levenshtein_accuracy(original, ocr),
    };
    debug!(
        "Accuracy {accuracy} ({:?}): {} equal, {} deleted, {} inserted tokens",
        config.metric, stats.equal, stats.deleted, stats.inserted
    );

    Comparison {
        script,
        highlight,
        accuracy,
        stats,
        reported_accuracy: None,
    }
}

/// Compare texts that may be absent; a missing text is treated as empty.
#[must_use]
pub fn compare_optional(
    original: Option<&str>,
    ocr: Option<&str>,
    config: &ComparisonConfig,
) -> Comparison {
    compare_with_config(original.unwrap_or_default(), ocr.unwrap_or_default(), config)
}

/// Compare raw bytes, e.g. file contents.
///
/// # Errors
///
/// `ComparisonError::InvalidInput` if either input is not UTF-8 text. The
/// original side is checked first.
pub fn compare_bytes(
    original: &[u8],
    ocr: &[u8],
    config: &ComparisonConfig,
) -> Result<Comparison, ComparisonError> {
    let original = decode_text(Side::Original, original)?;
    let ocr = decode_text(Side::Ocr, ocr)?;

    Ok(compare_with_config(original, ocr, config))
}
