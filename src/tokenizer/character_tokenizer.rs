use unicode_segmentation::UnicodeSegmentation;

use super::token::{Token, TokenKind};

/// Splits text into user-perceived characters (extended grapheme clusters).
///
/// ```not_rust
/// "Hey!" -> ["H", "e", "y", "!"]
/// ```
pub fn character_tokenizer(text: &str) -> Vec<Token> {
    text.graphemes(true)
        .map(|grapheme| Token::new(grapheme, TokenKind::of_grapheme(grapheme)))
        .collect()
}
