use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::alignment::{EditScript, ScriptStats};

/// A similarity percentage in `[0, 100]`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct AccuracyScore(f64);

impl AccuracyScore {
    pub const PERFECT: AccuracyScore = AccuracyScore(100.0);

    /// Create a score, clamping `percentage` into `[0, 100]`. `NaN` is
    /// treated as `0`.
    #[must_use]
    pub fn new(percentage: f64) -> Self {
        if percentage.is_nan() {
            return AccuracyScore(0.0);
        }
        AccuracyScore(percentage.clamp(0.0, 100.0))
    }

    #[must_use]
    pub fn value(self) -> f64 { self.0 }
}

impl From<AccuracyScore> for f64 {
    fn from(score: AccuracyScore) -> Self { score.0 }
}

/// Formats with two decimals, e.g. `66.67%`.
impl Display for AccuracyScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

/// The formula used to turn a comparison into an `AccuracyScore`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccuracyMetric {
    /// Dice coefficient over the aligned tokens, see `score`.
    #[default]
    TokenOverlap,

    /// `1 - levenshtein / max_length` over characters, the formula used by
    /// the ingestion service.
    CharacterLevenshtein,
}

/// Score an edit script by token overlap:
/// `2 * equal / (original_tokens + modified_tokens) * 100`.
///
/// Missing and spurious tokens are penalised symmetrically. Two empty texts
/// score `100`.
///
/// ```
/// use ocr_accuracy::{align, score, tokenize};
///
/// let script = align(&tokenize("the quick fox"), &tokenize("the quick brown fox"));
/// assert_eq!(format!("{}", score(&script)), "83.33%");
/// ```
#[must_use]
pub fn score(script: &EditScript) -> AccuracyScore { score_stats(script.stats()) }

/// `score` computed from pre-counted operations.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn score_stats(stats: ScriptStats) -> AccuracyScore {
    let total = stats.original_token_count() + stats.modified_token_count();
    if total == 0 {
        return AccuracyScore::PERFECT;
    }

    AccuracyScore::new(2.0 * stats.equal as f64 / total as f64 * 100.0)
}

/// Character-level accuracy: one minus the Levenshtein distance divided by the
/// length of the longer text. Lengths count Unicode scalar values. Two empty
/// texts score `100`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn levenshtein_accuracy(original: &str, ocr: &str) -> AccuracyScore {
    let max_len = original.chars().count().max(ocr.chars().count());
    if max_len == 0 {
        return AccuracyScore::PERFECT;
    }

    let distance = strsim::levenshtein(original, ocr);
    AccuracyScore::new((1.0 - distance as f64 / max_len as f64) * 100.0)
}
