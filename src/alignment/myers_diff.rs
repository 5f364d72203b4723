//! Myers' diff algorithm over token slices.
//!
//! * time: `O((N+M)D)`
//! * space `O(N+M)`
//!
//! Follows [the article by Eugene W. Myers](http://www.xmailserver.org/diff2.pdf)
//! including its linear space refinement, as implemented in
//! <https://github.com/mitsuhiko/similar/blob/7e15c44de11a1cd61e1149189929e189ef977fd8/src/algorithms/myers.rs>.
//!
//! Two texts with little in common make the search spin for a long time
//! without finding a common token. An optional bound on the search depth
//! turns such regions into a plain delete-then-insert block instead.

use std::ops::{Index, IndexMut, Range};

use crate::{
    alignment::edit_operation::EditOp,
    tokenizer::token::Token,
    utils::{common_prefix_len::common_prefix_len, common_suffix_len::common_suffix_len},
};

/// Result of `myers_diff`. Each operation wraps a single token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MyersDiff {
    pub operations: Vec<EditOp>,

    /// Set when `max_search_depth` was reached at least once, in which case
    /// the operations are not guaranteed to be minimal.
    pub is_truncated: bool,
}

/// Diff `old` against `new` on token equality.
///
/// With `max_search_depth` set to `None`, the returned script has the fewest
/// possible insertions and deletions.
pub fn myers_diff(old: &[Token], new: &[Token], max_search_depth: Option<usize>) -> MyersDiff {
    let max_d = (old.len() + new.len()).div_ceil(2) + 1;

    let mut search = Search {
        old,
        new,
        forward: V::new(max_d),
        backward: V::new(max_d),
        max_search_depth,
        operations: Vec::with_capacity(old.len().max(new.len())),
        is_truncated: false,
    };
    search.conquer(0..old.len(), 0..new.len());

    MyersDiff {
        operations: search.operations,
        is_truncated: search.is_truncated,
    }
}

// A D-path starts at (0,0) and has exactly D non-diagonal edges. Every D-path
// is a (D - 1)-path followed by a non-diagonal edge and then a possibly empty
// run of diagonal edges, a "snake".

/// Endpoints of the furthest reaching D-paths, indexed by diagonal `k`
/// (which may be negative). Only `x` is stored since `y = x - k`.
#[derive(Debug)]
struct V {
    offset: isize,
    v: Vec<usize>,
}

impl V {
    fn new(max_d: usize) -> Self {
        Self {
            offset: max_d as isize,
            v: vec![0; 2 * max_d],
        }
    }
}

impl Index<isize> for V {
    type Output = usize;

    fn index(&self, k: isize) -> &Self::Output { &self.v[(k + self.offset) as usize] }
}

impl IndexMut<isize> for V {
    fn index_mut(&mut self, k: isize) -> &mut Self::Output {
        &mut self.v[(k + self.offset) as usize]
    }
}

struct Search<'a> {
    old: &'a [Token],
    new: &'a [Token],
    forward: V,
    backward: V,
    max_search_depth: Option<usize>,
    operations: Vec<EditOp>,
    is_truncated: bool,
}

impl Search<'_> {
    fn conquer(&mut self, mut old_range: Range<usize>, mut new_range: Range<usize>) {
        let prefix_len = common_prefix_len(self.old, old_range.clone(), self.new, new_range.clone());
        self.push_equal(old_range.start, new_range.start, prefix_len);
        old_range.start += prefix_len;
        new_range.start += prefix_len;

        let suffix_len = common_suffix_len(self.old, old_range.clone(), self.new, new_range.clone());
        old_range.end -= suffix_len;
        new_range.end -= suffix_len;
        let suffix_start = (old_range.end, new_range.end);

        match (old_range.is_empty(), new_range.is_empty()) {
            (true, true) => {}
            (false, true) => self.push_deleted(old_range),
            (true, false) => self.push_inserted(new_range),
            (false, false) => {
                if let Some((x, y)) = self.find_middle_snake(old_range.clone(), new_range.clone()) {
                    self.conquer(old_range.start..x, new_range.start..y);
                    self.conquer(x..old_range.end, y..new_range.end);
                } else {
                    self.is_truncated = true;
                    self.push_deleted(old_range);
                    self.push_inserted(new_range);
                }
            }
        }

        self.push_equal(suffix_start.0, suffix_start.1, suffix_len);
    }

    /// Find the start of the middle snake of an optimal path through the
    /// given sub-problem by running the greedy search from both corners at
    /// once until the forward and backward paths overlap.
    ///
    /// Returns `None` only when `max_search_depth` is exceeded.
    fn find_middle_snake(
        &mut self,
        old_range: Range<usize>,
        new_range: Range<usize>,
    ) -> Option<(usize, usize)> {
        let n = old_range.len();
        let m = new_range.len();

        // The parity of the optimal script length matches the parity of delta.
        let delta = n as isize - m as isize;
        let odd = delta & 1 == 1;

        self.forward[1] = 0;
        self.backward[1] = 0;

        let d_max = (n + m).div_ceil(2) + 1;
        let d_limit = self
            .max_search_depth
            .map_or(d_max, |depth| depth.min(d_max));

        for d in 0..d_limit as isize {
            for k in (-d..=d).rev().step_by(2) {
                let mut x = if k == -d || (k != d && self.forward[k - 1] < self.forward[k + 1]) {
                    self.forward[k + 1]
                } else {
                    self.forward[k - 1] + 1
                };
                let y = (x as isize - k) as usize;
                let snake_start = (x, y);

                if x < n && y < m {
                    x += common_prefix_len(
                        self.old,
                        old_range.start + x..old_range.end,
                        self.new,
                        new_range.start + y..new_range.end,
                    );
                }
                self.forward[k] = x;

                // overlap is only possible from the forward side when delta is odd
                if odd
                    && (k - delta).abs() < d
                    && self.forward[k] + self.backward[-(k - delta)] >= n
                {
                    return Some((
                        old_range.start + snake_start.0,
                        new_range.start + snake_start.1,
                    ));
                }
            }

            for k in (-d..=d).rev().step_by(2) {
                let mut x = if k == -d || (k != d && self.backward[k - 1] < self.backward[k + 1])
                {
                    self.backward[k + 1]
                } else {
                    self.backward[k - 1] + 1
                };
                let mut y = (x as isize - k) as usize;

                if x < n && y < m {
                    let advance = common_suffix_len(
                        self.old,
                        old_range.start..old_range.start + n - x,
                        self.new,
                        new_range.start..new_range.start + m - y,
                    );
                    x += advance;
                    y += advance;
                }
                self.backward[k] = x;

                if !odd
                    && (k - delta).abs() <= d
                    && self.backward[k] + self.forward[-(k - delta)] >= n
                {
                    return Some((old_range.start + n - x, new_range.start + m - y));
                }
            }
        }

        None
    }

    fn push_equal(&mut self, old_start: usize, new_start: usize, len: usize) {
        self.operations.extend(
            self.old[old_start..old_start + len]
                .iter()
                .zip(&self.new[new_start..new_start + len])
                .map(|(original, modified)| EditOp::Equal(original.clone(), modified.clone())),
        );
    }

    fn push_deleted(&mut self, range: Range<usize>) {
        self.operations
            .extend(self.old[range].iter().cloned().map(EditOp::Delete));
    }

    fn push_inserted(&mut self, range: Range<usize>) {
        self.operations
            .extend(self.new[range].iter().cloned().map(EditOp::Insert));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tokenizer::tokenize;

    fn tokens(texts: &[&str]) -> Vec<Token> { texts.iter().map(|&text| text.into()).collect() }

    fn lcs_len(old: &[Token], new: &[Token]) -> usize {
        let mut table = vec![vec![0; new.len() + 1]; old.len() + 1];
        for i in (0..old.len()).rev() {
            for j in (0..new.len()).rev() {
                table[i][j] = if old[i] == new[j] {
                    table[i + 1][j + 1] + 1
                } else {
                    table[i + 1][j].max(table[i][j + 1])
                };
            }
        }
        table[0][0]
    }

    #[test]
    fn test_empty_diff() {
        let result = myers_diff(&[], &[], None);
        assert!(result.operations.is_empty());
        assert!(!result.is_truncated);
    }

    #[test]
    fn test_identical_content() {
        let content = tokens(&["a", "b", "c"]);
        let result = myers_diff(&content, &content, None);
        assert!(result.operations.iter().all(EditOp::is_equal));
        assert_eq!(result.operations.len(), 3);
    }

    #[test]
    fn test_insert_only() {
        let result = myers_diff(&[], &tokens(&["a", "b"]), None);
        assert_eq!(
            result.operations,
            [EditOp::Insert("a".into()), EditOp::Insert("b".into())]
        );
    }

    #[test]
    fn test_delete_only() {
        let result = myers_diff(&tokens(&["a", "b"]), &[], None);
        assert_eq!(
            result.operations,
            [EditOp::Delete("a".into()), EditOp::Delete("b".into())]
        );
    }

    #[test]
    fn test_prefix_and_suffix() {
        let old = tokens(&["a", "b", "c", "d"]);
        let new = tokens(&["a", "x", "d"]);
        assert_eq!(
            myers_diff(&old, &new, None).operations,
            [
                EditOp::Equal("a".into(), "a".into()),
                EditOp::Delete("b".into()),
                EditOp::Delete("c".into()),
                EditOp::Insert("x".into()),
                EditOp::Equal("d".into(), "d".into()),
            ]
        );
    }

    #[test]
    fn test_minimal_on_scrambled_inputs() {
        let pairs = [
            ("a b c a b b a", "c b a b a c"),
            ("the cat sat on the mat", "the mat sat on the cat"),
            ("one two three four five", "five four three two one"),
            ("x y z", "a b c"),
            ("OCR engines confuse l and 1 or O and 0", "0CR engines confuse 1 and l or 0 and O"),
        ];

        for (old, new) in pairs {
            let old = tokenize(old);
            let new = tokenize(new);
            let result = myers_diff(&old, &new, None);
            let equal = result.operations.iter().filter(|op| op.is_equal()).count();
            assert_eq!(equal, lcs_len(&old, &new));
            assert_eq!(
                result.operations.len(),
                old.len() + new.len() - equal,
                "every token must be covered exactly once"
            );
        }
    }

    #[test]
    fn test_search_depth_limit_falls_back_to_replacement() {
        let old = tokenize("alpha beta gamma delta");
        let new = tokenize("one beta two delta");

        let limited = myers_diff(&old, &new, Some(0));
        assert!(limited.is_truncated);

        let rebuilt_old: String = limited
            .operations
            .iter()
            .filter_map(EditOp::original_token)
            .map(Token::text)
            .collect();
        let rebuilt_new: String = limited
            .operations
            .iter()
            .filter_map(EditOp::modified_token)
            .map(Token::text)
            .collect();
        assert_eq!(rebuilt_old, "alpha beta gamma delta");
        assert_eq!(rebuilt_new, "one beta two delta");

        assert!(!myers_diff(&old, &new, None).is_truncated);
    }
}
