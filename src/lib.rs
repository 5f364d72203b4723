//! Word-level comparison of OCR output against a verified original text.
//!
//! The texts are split into tokens, aligned with a minimal edit script, and
//! the script is turned into two highlighted views and an accuracy score.

mod accuracy;
mod alignment;
mod comparison;
mod config;
mod consts;
mod errors;
mod highlight;
mod tokenizer;
mod utils;

pub use accuracy::{AccuracyMetric, AccuracyScore, levenshtein_accuracy, score, score_stats};
pub use alignment::{EditOp, EditScript, ScriptStats, align, align_with_limit};
#[cfg(feature = "serde")]
pub use comparison::ServiceResponse;
pub use comparison::{
    Comparison, ComparisonCache, compare, compare_bytes, compare_optional, compare_with_config,
};
pub use config::ComparisonConfig;
pub use consts::DEFAULT_CACHE_CAPACITY;
pub use errors::ComparisonError;
pub use highlight::{HighlightResult, Role, Segment, build_views};
pub use tokenizer::{
    BuiltinTokenizer, Tokenizer,
    token::{Token, TokenKind},
    tokenize,
};
pub use utils::side::Side;

#[cfg(feature = "wasm")]
pub mod wasm;
