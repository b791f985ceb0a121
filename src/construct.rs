use crate::cursor::Cursor;
use crate::error::LazicombError;
use crate::sequence::Sequence;

/// Sequence combinator that prepends one element in front of a sequence
pub struct Construct<S: Sequence> {
    head: S::Item,
    tail: S,
}

impl<S: Sequence> Construct<S> {
    pub fn new(head: S::Item, tail: S) -> Self {
        Construct { head, tail }
    }
}

impl<S> Sequence for Construct<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;
    type Cursor<'a>
        = ConstructCursor<'a, S>
    where
        Self: 'a;

    fn cursor(&self) -> ConstructCursor<'_, S> {
        ConstructCursor {
            head: Some(self.head.clone()),
            tail: self.tail.cursor(),
        }
    }
}

pub struct ConstructCursor<'a, S: Sequence + 'a> {
    head: Option<S::Item>,
    tail: S::Cursor<'a>,
}

impl<'a, S: Sequence + 'a> Cursor for ConstructCursor<'a, S> {
    type Item = S::Item;

    fn has_more(&mut self) -> bool {
        self.head.is_some() || self.tail.has_more()
    }

    fn take_next(&mut self) -> Result<S::Item, LazicombError> {
        match self.head.take() {
            Some(head) => Ok(head),
            None => self.tail.take_next(),
        }
    }
}

/// Convenience function to prepend an element to a sequence
pub fn construct<S>(head: S::Item, tail: S) -> Construct<S>
where
    S: Sequence,
    S::Item: Clone,
{
    Construct::new(head, tail)
}

/// Extension trait to add .construct() method support for sequences
pub trait ConstructExt: Sequence + Sized {
    fn construct(self, head: Self::Item) -> Construct<Self>
    where
        Self::Item: Clone,
    {
        Construct::new(head, self)
    }
}

impl<S: Sequence> ConstructExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{empty, items};

    #[test]
    fn test_construct_prepends() {
        let seq = construct(0, items(vec![1, 2, 3]));
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_construct_onto_empty() {
        let seq = construct(42, empty());
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![42]);
    }

    #[test]
    fn test_construct_is_re_iterable() {
        let seq = construct(0, items(vec![1]));
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_construct_nested() {
        let seq = construct(1, construct(2, items(vec![3])));
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_exhaustion_after_tail() {
        let seq = construct(1, empty::<i32>());
        let mut cursor = seq.cursor();
        assert_eq!(cursor.take_next().unwrap(), 1);
        assert_eq!(cursor.take_next(), Err(LazicombError::Exhausted));
    }
}
