use crate::cursor::Cursor;
use crate::error::LazicombError;
use crate::sequence::Sequence;

/// Sequence combinator comparing two sources positionally
///
/// Emits one `bool` per aligned pair and stops at the shorter source, the
/// same truncation rule as `zip`. Trailing elements of a longer source are
/// never inspected.
pub struct Equate<A, B, F> {
    left: A,
    right: B,
    comparator: F,
}

impl<A, B, F> Equate<A, B, F> {
    pub fn new(left: A, right: B, comparator: F) -> Self {
        Equate {
            left,
            right,
            comparator,
        }
    }
}

impl<A, B, F> Sequence for Equate<A, B, F>
where
    A: Sequence,
    B: Sequence,
    F: Fn(&A::Item, &B::Item) -> bool,
{
    type Item = bool;
    type Cursor<'a>
        = EquateCursor<'a, A, B, F>
    where
        Self: 'a;

    fn cursor(&self) -> EquateCursor<'_, A, B, F> {
        EquateCursor {
            left: self.left.cursor(),
            right: self.right.cursor(),
            comparator: &self.comparator,
        }
    }
}

pub struct EquateCursor<'a, A: Sequence + 'a, B: Sequence + 'a, F> {
    left: A::Cursor<'a>,
    right: B::Cursor<'a>,
    comparator: &'a F,
}

impl<'a, A, B, F> Cursor for EquateCursor<'a, A, B, F>
where
    A: Sequence + 'a,
    B: Sequence + 'a,
    F: Fn(&A::Item, &B::Item) -> bool,
{
    type Item = bool;

    fn has_more(&mut self) -> bool {
        self.left.has_more() && self.right.has_more()
    }

    fn take_next(&mut self) -> Result<bool, LazicombError> {
        if !self.has_more() {
            return Err(LazicombError::Exhausted);
        }
        let left = self.left.take_next()?;
        let right = self.right.take_next()?;
        Ok((self.comparator)(&left, &right))
    }
}

/// Compare two sequences pairwise with `comparator`
pub fn equate<A, B, F>(left: A, right: B, comparator: F) -> Equate<A, B, F>
where
    A: Sequence,
    B: Sequence,
    F: Fn(&A::Item, &B::Item) -> bool,
{
    Equate::new(left, right, comparator)
}

/// Extension trait to add .equate() method support for sequences
pub trait EquateExt: Sequence + Sized {
    fn equate<B, F>(self, other: B, comparator: F) -> Equate<Self, B, F>
    where
        B: Sequence,
        F: Fn(&Self::Item, &B::Item) -> bool,
    {
        Equate::new(self, other, comparator)
    }
}

impl<S: Sequence> EquateExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::items;
    use crate::repeat::repeat;

    #[test]
    fn test_pairwise_equality() {
        let seq = equate(items(vec![1, 2, 3]), items(vec![1, 5, 3]), |a, b| a == b);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![true, false, true]);
    }

    #[test]
    fn test_truncates_to_shorter() {
        let seq = equate(items(vec![1, 2, 3, 4]), items(vec![1, 2]), |a, b| a == b);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![true, true]);
    }

    #[test]
    fn test_finite_bounds_infinite() {
        let seq = equate(items(vec![7, 8]), repeat(7), |a, b| a == b);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![true, false]);
    }

    #[test]
    fn test_custom_comparator() {
        let seq = items(vec!["HI", "no"]).equate(items(vec!["hi", "NO "]), |a, b| {
            a.eq_ignore_ascii_case(b)
        });
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![true, false]);
    }

    #[test]
    fn test_exhaustion() {
        let seq = equate(items(Vec::<i32>::new()), items(vec![1]), |a, b| a == b);
        let mut cursor = seq.cursor();
        assert!(!cursor.has_more());
        assert_eq!(cursor.take_next(), Err(LazicombError::Exhausted));
    }

    #[test]
    fn test_is_re_iterable() {
        let seq = equate(items(vec![1, 2]), items(vec![1, 3]), |a, b| a == b);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![true, false]);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![true, false]);
    }
}
