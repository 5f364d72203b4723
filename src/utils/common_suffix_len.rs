use core::ops::{Index, Range};

/// Length of the run of equal items at the end of the two ranges.
/// Based on <https://github.com/mitsuhiko/similar/blob/7e15c44de11a1cd61e1149189929e189ef977fd8/src/algorithms/utils.rs>
pub fn common_suffix_len<Old, New>(
    old: &Old,
    old_range: Range<usize>,
    new: &New,
    new_range: Range<usize>,
) -> usize
where
    Old: Index<usize> + ?Sized,
    New: Index<usize> + ?Sized,
    New::Output: PartialEq<Old::Output>,
{
    new_range
        .rev()
        .zip(old_range.rev())
        .take_while(|&(new_index, old_index)| new[new_index] == old[old_index])
        .count()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tokenizer::tokenize;

    #[test]
    fn test_common_suffix_len() {
        assert_eq!(common_suffix_len("".as_bytes(), 0..0, "".as_bytes(), 0..0), 0);
        assert_eq!(
            common_suffix_len("1234".as_bytes(), 0..4, "X0001234".as_bytes(), 0..8),
            4
        );
        assert_eq!(
            common_suffix_len("1234".as_bytes(), 0..4, "Xxxx".as_bytes(), 0..4),
            0
        );
        assert_eq!(
            common_suffix_len("1234".as_bytes(), 2..4, "01234".as_bytes(), 2..5),
            2
        );
    }

    #[test]
    fn test_on_tokens() {
        let old = tokenize("the quick fox");
        let new = tokenize("a brown fox");
        assert_eq!(
            common_suffix_len(old.as_slice(), 0..old.len(), new.as_slice(), 0..new.len()),
            2
        );
    }
}
