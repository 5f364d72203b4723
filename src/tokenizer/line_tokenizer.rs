use super::token::{Token, TokenKind};

/// Splits text into lines, keeping line endings as separate tokens.
///
/// ## Example
///
/// ```not_rust
/// "Hello\nWorld!" -> ["Hello", "\n", "World!"]
/// "Line 1\r\nLine 2" -> ["Line 1", "\r\n", "Line 2"]
/// ```
pub fn line_tokenizer(text: &str) -> Vec<Token> {
    let mut result = Vec::new();
    let mut line_start = 0;

    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        let line_ending_length = match c {
            '\n' => 1,
            '\r' if chars.peek().is_some_and(|&(_, next)| next == '\n') => {
                chars.next();
                2
            }
            _ => continue,
        };

        if i > line_start {
            let line = &text[line_start..i];
            result.push(Token::new(line, TokenKind::of_text(line)));
        }
        result.push(Token::new(
            &text[i..i + line_ending_length],
            TokenKind::Whitespace,
        ));
        line_start = i + line_ending_length;
    }

    if line_start < text.len() {
        let line = &text[line_start..];
        result.push(Token::new(line, TokenKind::of_text(line)));
    }

    result
}
