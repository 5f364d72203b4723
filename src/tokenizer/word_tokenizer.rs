use unicode_segmentation::UnicodeSegmentation;

use super::token::{Token, TokenKind};

/// Splits text into maximal runs of word characters, maximal runs of
/// whitespace, and single punctuation marks.
///
/// Text is walked by extended grapheme cluster, so a combining mark always
/// stays in the same token as its base character.
///
/// ## Example
///
/// ```not_rust
/// "Hi, there!" -> ["Hi", ",", " ", "there", "!"]
/// ```
pub fn word_tokenizer(text: &str) -> Vec<Token> {
    let mut result = Vec::new();

    let mut run_start = 0;
    let mut run_kind: Option<TokenKind> = None;

    for (i, grapheme) in text.grapheme_indices(true) {
        let kind = TokenKind::of_grapheme(grapheme);

        // punctuation never forms runs
        let extends_run = run_kind == Some(kind) && kind != TokenKind::Punctuation;
        if extends_run {
            continue;
        }

        if let Some(previous_kind) = run_kind {
            result.push(Token::new(&text[run_start..i], previous_kind));
        }

        run_start = i;
        run_kind = Some(kind);
    }

    if let Some(kind) = run_kind {
        result.push(Token::new(&text[run_start..], kind));
    }

    result
}
