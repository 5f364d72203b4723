use log::warn;

pub use edit_operation::EditOp;
pub use edit_script::{EditScript, ScriptStats};

use crate::{
    alignment::{group_changes::group_changes, myers_diff::myers_diff},
    tokenizer::token::Token,
};

pub mod edit_operation;
pub mod edit_script;
mod group_changes;
mod myers_diff;

/// Compute the minimal edit script turning `original` into `modified`.
///
/// Tokens are matched on exact text equality. When several scripts of the
/// same length exist, unchanged runs are kept as early as possible and
/// deletions are placed before insertions at the same position.
///
/// ```
/// use ocr_accuracy::{EditOp, align, tokenize};
///
/// let script = align(&tokenize("hello"), &tokenize("hullo"));
/// assert_eq!(
///     script.operations(),
///     [EditOp::Delete("hello".into()), EditOp::Insert("hullo".into())]
/// );
/// ```
#[must_use]
pub fn align(original: &[Token], modified: &[Token]) -> EditScript {
    align_with_limit(original, modified, None)
}

/// Like `align`, but gives up on finding common tokens in a region once the
/// search needs more than `max_search_depth` steps; such a region is emitted
/// as a block of deletions followed by a block of insertions. The script
/// still rebuilds both texts but may no longer be minimal.
#[must_use]
pub fn align_with_limit(
    original: &[Token],
    modified: &[Token],
    max_search_depth: Option<usize>,
) -> EditScript {
    let diff = myers_diff(original, modified, max_search_depth);
    if diff.is_truncated {
        warn!(
            "Alignment of {} and {} tokens exceeded the search depth of {max_search_depth:?}, the \
             result may not be minimal",
            original.len(),
            modified.len()
        );
    }

    let script = EditScript::new(group_changes(diff.operations));

    debug_assert_eq!(
        script.original_text(),
        original.iter().map(Token::text).collect::<String>(),
        "The edit script must rebuild the original text"
    );
    debug_assert_eq!(
        script.modified_text(),
        modified.iter().map(Token::text).collect::<String>(),
        "The edit script must rebuild the modified text"
    );

    script
}
