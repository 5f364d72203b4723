#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tokenizer::token::Token;

/// A single step of an edit script over tokens.
///
/// `Equal` keeps both tokens even though their texts are identical so that
/// either side can be rebuilt from the script alone.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    /// The token is present in both texts.
    Equal(Token, Token),

    /// The token is only present in the original text.
    Delete(Token),

    /// The token is only present in the modified (OCR) text.
    Insert(Token),
}

impl EditOp {
    /// The token this operation contributes to the original text, if any.
    #[must_use]
    pub fn original_token(&self) -> Option<&Token> {
        match self {
            EditOp::Equal(original, _) | EditOp::Delete(original) => Some(original),
            EditOp::Insert(_) => None,
        }
    }

    /// The token this operation contributes to the modified text, if any.
    #[must_use]
    pub fn modified_token(&self) -> Option<&Token> {
        match self {
            EditOp::Equal(_, modified) | EditOp::Insert(modified) => Some(modified),
            EditOp::Delete(_) => None,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            EditOp::Equal(token, _) | EditOp::Delete(token) | EditOp::Insert(token) => {
                token.text()
            }
        }
    }

    #[must_use]
    pub fn is_equal(&self) -> bool { matches!(self, EditOp::Equal(..)) }
}
