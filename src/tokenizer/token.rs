use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The class of text a token covers.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Letters, digits and underscores of any script.
    Word,

    /// A run of whitespace, including line breaks.
    Whitespace,

    /// A punctuation mark or symbol that is neither part of a word nor
    /// whitespace.
    Punctuation,
}

impl TokenKind {
    /// Classify a single grapheme cluster by its characters. Combining marks
    /// belong to the cluster of their base character so they never decide
    /// the class on their own.
    #[must_use]
    pub fn of_grapheme(grapheme: &str) -> Self {
        match grapheme.chars().next() {
            Some(first) if first.is_whitespace() => TokenKind::Whitespace,
            _ if grapheme.chars().any(is_word_char) => TokenKind::Word,
            _ => TokenKind::Punctuation,
        }
    }

    /// Classify an arbitrary span of text, used by tokenizers whose tokens
    /// may mix classes (e.g. whole lines).
    #[must_use]
    pub fn of_text(text: &str) -> Self {
        if !text.is_empty() && text.chars().all(char::is_whitespace) {
            TokenKind::Whitespace
        } else if text.chars().any(is_word_char) {
            TokenKind::Word
        } else {
            TokenKind::Punctuation
        }
    }
}

fn is_word_char(c: char) -> bool { c.is_alphanumeric() || c == '_' }

/// An immutable piece of text produced by a tokenizer.
///
/// Tokens compare equal when their texts are identical: no case folding or
/// whitespace normalisation happens. It's UTF-8 compatible.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    text: String,
    kind: TokenKind,
}

/// Classifies the text as a whole, see `TokenKind::of_text`.
impl From<&str> for Token {
    fn from(text: &str) -> Self { Token::new(text, TokenKind::of_text(text)) }
}

impl Token {
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Token {
            text: text.into(),
            kind,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    #[must_use]
    pub fn kind(&self) -> TokenKind { self.kind }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(&self.text) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("a", TokenKind::Word; "latin letter")]
    #[test_case("7", TokenKind::Word; "digit")]
    #[test_case("_", TokenKind::Word; "underscore")]
    #[test_case("한", TokenKind::Word; "hangul syllable")]
    #[test_case("स्", TokenKind::Word; "devanagari with virama")]
    #[test_case(" ", TokenKind::Whitespace; "space")]
    #[test_case("\r\n", TokenKind::Whitespace; "crlf")]
    #[test_case(",", TokenKind::Punctuation; "comma")]
    #[test_case("👍🏽", TokenKind::Punctuation; "emoji with skin tone")]
    fn test_grapheme_kinds(grapheme: &str, expected: TokenKind) {
        assert_eq!(TokenKind::of_grapheme(grapheme), expected);
    }

    #[test]
    fn test_text_kinds() {
        assert_eq!(TokenKind::of_text("Hello, world"), TokenKind::Word);
        assert_eq!(TokenKind::of_text(" \t\n"), TokenKind::Whitespace);
        assert_eq!(TokenKind::of_text("..."), TokenKind::Punctuation);
        assert_eq!(TokenKind::of_text(""), TokenKind::Punctuation);
    }

    #[test]
    fn test_equality_is_exact() {
        assert_eq!(Token::from("Fox"), Token::from("Fox"));
        assert_ne!(Token::from("Fox"), Token::from("fox"));
        assert_ne!(Token::from(" "), Token::from("  "));
    }
}
