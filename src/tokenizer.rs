use std::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use token::Token;

pub mod character_tokenizer;
pub mod line_tokenizer;
pub mod token;
pub mod word_tokenizer;

/// A function that takes a string and splits it into tokens which
/// concatenate back to the same string.
pub type Tokenizer = dyn Fn(&str) -> Vec<Token> + Send + Sync;

/// The tokenizers shipped with the crate. Dereferences to a `Tokenizer` so it
/// can be passed wherever a tokenizer function is expected.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuiltinTokenizer {
    /// One token per grapheme cluster.
    Character,

    /// Words, whitespace runs and individual punctuation marks.
    #[default]
    Word,

    /// Line contents and line endings.
    Line,
}

impl BuiltinTokenizer {
    #[must_use]
    pub fn tokenize(self, text: &str) -> Vec<Token> { self.deref()(text) }
}

impl Deref for BuiltinTokenizer {
    type Target = Tokenizer;

    fn deref(&self) -> &Self::Target {
        match self {
            BuiltinTokenizer::Character => &character_tokenizer::character_tokenizer,
            BuiltinTokenizer::Word => &word_tokenizer::word_tokenizer,
            BuiltinTokenizer::Line => &line_tokenizer::line_tokenizer,
        }
    }
}

/// Split `text` into word, whitespace and punctuation tokens.
///
/// ```
/// use ocr_accuracy::tokenize;
///
/// let tokens = tokenize("the quick fox");
/// let texts: Vec<&str> = tokens.iter().map(|token| token.text()).collect();
/// assert_eq!(texts, ["the", " ", "quick", " ", "fox"]);
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token> { word_tokenizer::word_tokenizer(text) }
