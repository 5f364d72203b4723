use std::collections::VecDeque;

use crate::{alignment::edit_operation::EditOp, tokenizer::token::Token};

/// Normalise a raw diff so that equivalent inputs always produce the same
/// script:
///
/// - within a change region (the operations between two `Equal`-s) every
///   deletion comes before every insertion, so `IDID` becomes `DDII`;
/// - an `Equal` token directly after a change region is matched against the
///   first occurrence of the same token inside the region instead, on every
///   side of the region that has changes. Both reconstructed texts stay
///   intact and unchanged tokens end up as early as possible.
///
/// Neither step changes the number of insertions or deletions.
pub fn group_changes<I>(operations: I) -> Vec<EditOp>
where
    I: IntoIterator<Item = EditOp>,
{
    let mut result = Vec::new();

    let mut deleted: VecDeque<Token> = VecDeque::new();
    let mut inserted: VecDeque<Token> = VecDeque::new();

    for operation in operations {
        match operation {
            EditOp::Delete(token) => deleted.push_back(token),
            EditOp::Insert(token) => inserted.push_back(token),
            EditOp::Equal(original, modified) => {
                let Some((deleted_at, inserted_at)) = slide_target(&deleted, &inserted, &original)
                else {
                    flush(&mut result, &mut deleted, &mut inserted);
                    result.push(EditOp::Equal(original, modified));
                    continue;
                };

                // `R x` spells the same text as `R[..i] x R[i + 1..] x`
                let (original, deleted_after) = split_at_match(&mut deleted, deleted_at, original);
                let (modified, inserted_after) =
                    split_at_match(&mut inserted, inserted_at, modified);

                flush(&mut result, &mut deleted, &mut inserted);
                result.push(EditOp::Equal(original, modified));

                deleted = deleted_after;
                inserted = inserted_after;
            }
        }
    }

    flush(&mut result, &mut deleted, &mut inserted);

    result
}

/// Where `token` first occurs on each side of the pending region. `None` if
/// there is nothing to slide past or a side with changes lacks the token; a
/// side without changes yields `Some(None)`.
fn slide_target(
    deleted: &VecDeque<Token>,
    inserted: &VecDeque<Token>,
    token: &Token,
) -> Option<(Option<usize>, Option<usize>)> {
    if deleted.is_empty() && inserted.is_empty() {
        return None;
    }

    Some((first_match(deleted, token)?, first_match(inserted, token)?))
}

fn first_match(pending: &VecDeque<Token>, token: &Token) -> Option<Option<usize>> {
    if pending.is_empty() {
        return Some(None);
    }

    pending.iter().position(|other| other == token).map(Some)
}

/// Cut `pending` before the token at `at`, returning that token and the rest
/// of the region with `moved` appended in its original place.
fn split_at_match(
    pending: &mut VecDeque<Token>,
    at: Option<usize>,
    moved: Token,
) -> (Token, VecDeque<Token>) {
    let Some(at) = at else {
        return (moved, VecDeque::new());
    };

    let mut after = pending.split_off(at);
    match after.pop_front() {
        Some(matched) => {
            after.push_back(moved);
            (matched, after)
        }
        None => (moved, after),
    }
}

fn flush(result: &mut Vec<EditOp>, deleted: &mut VecDeque<Token>, inserted: &mut VecDeque<Token>) {
    result.extend(deleted.drain(..).map(EditOp::Delete));
    result.extend(inserted.drain(..).map(EditOp::Insert));
}
