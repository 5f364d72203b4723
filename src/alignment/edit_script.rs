#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::alignment::edit_operation::EditOp;

/// An ordered sequence of `EditOp`-s turning the original token sequence
/// into the modified one.
///
/// Concatenating the `Equal` and `Delete` tokens rebuilds the original text,
/// while concatenating the `Equal` and `Insert` tokens rebuilds the modified
/// text.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditScript {
    operations: Vec<EditOp>,
}

/// Operation counts of an `EditScript`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScriptStats {
    pub equal: usize,
    pub deleted: usize,
    pub inserted: usize,
}

impl ScriptStats {
    /// Number of tokens in the original text.
    #[must_use]
    pub fn original_token_count(&self) -> usize { self.equal + self.deleted }

    /// Number of tokens in the modified text.
    #[must_use]
    pub fn modified_token_count(&self) -> usize { self.equal + self.inserted }

    /// Number of insertions and deletions, the quantity a minimal script
    /// minimises.
    #[must_use]
    pub fn edit_distance(&self) -> usize { self.deleted + self.inserted }
}

impl EditScript {
    #[must_use]
    pub fn new(operations: Vec<EditOp>) -> Self { Self { operations } }

    #[must_use]
    pub fn operations(&self) -> &[EditOp] { &self.operations }

    pub fn iter(&self) -> std::slice::Iter<'_, EditOp> { self.operations.iter() }

    #[must_use]
    pub fn len(&self) -> usize { self.operations.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.operations.is_empty() }

    #[must_use]
    pub fn equal_count(&self) -> usize { self.stats().equal }

    #[must_use]
    pub fn delete_count(&self) -> usize { self.stats().deleted }

    #[must_use]
    pub fn insert_count(&self) -> usize { self.stats().inserted }

    #[must_use]
    pub fn stats(&self) -> ScriptStats {
        self.operations
            .iter()
            .fold(ScriptStats::default(), |mut stats, operation| {
                match operation {
                    EditOp::Equal(..) => stats.equal += 1,
                    EditOp::Delete(..) => stats.deleted += 1,
                    EditOp::Insert(..) => stats.inserted += 1,
                }
                stats
            })
    }

    /// Rebuild the original text from the script.
    #[must_use]
    pub fn original_text(&self) -> String {
        self.operations
            .iter()
            .filter_map(EditOp::original_token)
            .map(|token| token.text())
            .collect()
    }

    /// Rebuild the modified text from the script.
    #[must_use]
    pub fn modified_text(&self) -> String {
        self.operations
            .iter()
            .filter_map(EditOp::modified_token)
            .map(|token| token.text())
            .collect()
    }
}

impl IntoIterator for EditScript {
    type Item = EditOp;
    type IntoIter = std::vec::IntoIter<EditOp>;

    fn into_iter(self) -> Self::IntoIter { self.operations.into_iter() }
}

impl<'a> IntoIterator for &'a EditScript {
    type Item = &'a EditOp;
    type IntoIter = std::slice::Iter<'a, EditOp>;

    fn into_iter(self) -> Self::IntoIter { self.operations.iter() }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn example() -> EditScript {
        EditScript::new(vec![
            EditOp::Equal("the".into(), "the".into()),
            EditOp::Equal(" ".into(), " ".into()),
            EditOp::Delete("cat".into()),
            EditOp::Insert("dog".into()),
            EditOp::Insert("s".into()),
        ])
    }

    #[test]
    fn test_stats() {
        let stats = example().stats();
        assert_eq!(
            stats,
            ScriptStats {
                equal: 2,
                deleted: 1,
                inserted: 2
            }
        );
        assert_eq!(stats.original_token_count(), 3);
        assert_eq!(stats.modified_token_count(), 4);
        assert_eq!(stats.edit_distance(), 3);
    }

    #[test]
    fn test_reconstruction() {
        let script = example();
        assert_eq!(script.original_text(), "the cat");
        assert_eq!(script.modified_text(), "the dogs");
    }

    #[test]
    fn test_empty() {
        let script = EditScript::default();
        assert!(script.is_empty());
        assert_eq!(script.original_text(), "");
        assert_eq!(script.stats(), ScriptStats::default());
    }
}
