use crate::cursor::Cursor;
use crate::error::LazicombError;
use crate::sequence::Sequence;

/// Sequence combinator that keeps only elements matching a predicate
///
/// The cursor holds a one-element lookahead: answering `has_more` truthfully
/// may require pulling the upstream until a qualifying element or exhaustion
/// is found. The buffered element is what the next `take_next` returns, so
/// `has_more` stays idempotent.
pub struct Filter<S, P> {
    seq: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub fn new(seq: S, predicate: P) -> Self {
        Filter { seq, predicate }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'a>
        = FilterCursor<'a, S, P>
    where
        Self: 'a;

    fn cursor(&self) -> FilterCursor<'_, S, P> {
        FilterCursor {
            upstream: self.seq.cursor(),
            predicate: &self.predicate,
            pending: None,
        }
    }
}

pub struct FilterCursor<'a, S: Sequence + 'a, P> {
    upstream: S::Cursor<'a>,
    predicate: &'a P,
    pending: Option<S::Item>,
}

impl<'a, S, P> FilterCursor<'a, S, P>
where
    S: Sequence + 'a,
    P: Fn(&S::Item) -> bool,
{
    fn prime(&mut self) {
        while self.pending.is_none() && self.upstream.has_more() {
            match self.upstream.take_next() {
                Ok(value) => {
                    if (self.predicate)(&value) {
                        self.pending = Some(value);
                    }
                }
                Err(_) => break,
            }
        }
    }
}

impl<'a, S, P> Cursor for FilterCursor<'a, S, P>
where
    S: Sequence + 'a,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn has_more(&mut self) -> bool {
        self.prime();
        self.pending.is_some()
    }

    fn take_next(&mut self) -> Result<S::Item, LazicombError> {
        self.prime();
        self.pending.take().ok_or(LazicombError::Exhausted)
    }
}

/// Convenience function to create a Filter sequence
pub fn filter<S, P>(seq: S, predicate: P) -> Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    Filter::new(seq, predicate)
}

/// Extension trait to add .filter() method support for sequences
pub trait FilterExt: Sequence + Sized {
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }
}

impl<S: Sequence> FilterExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::items;

    #[test]
    fn test_filter_keeps_matching() {
        let seq = items(vec![1, 2, 3, 4, 5, 6]).filter(|x| x % 2 == 0);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![2, 4, 6]);
    }

    #[test]
    fn test_filter_none_match() {
        let seq = items(vec![1, 3, 5]).filter(|x| x % 2 == 0);
        let mut cursor = seq.cursor();
        assert!(!cursor.has_more());
        assert_eq!(cursor.take_next(), Err(LazicombError::Exhausted));
    }

    #[test]
    fn test_filter_all_match() {
        let seq = items(vec![2, 4]).filter(|x| x % 2 == 0);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn test_has_more_does_not_advance() {
        let seq = items(vec![1, 2, 3, 4]).filter(|x| x % 2 == 0);
        let mut cursor = seq.cursor();
        assert!(cursor.has_more());
        assert!(cursor.has_more());
        assert!(cursor.has_more());
        assert_eq!(cursor.take_next().unwrap(), 2);
        assert_eq!(cursor.take_next().unwrap(), 4);
    }

    #[test]
    fn test_take_next_without_has_more() {
        let seq = items(vec![1, 2]).filter(|x| *x > 1);
        let mut cursor = seq.cursor();
        assert_eq!(cursor.take_next().unwrap(), 2);
    }

    #[test]
    fn test_filter_cursors_are_independent() {
        let seq = items(vec![1, 2, 3, 4]).filter(|x| x % 2 == 0);
        let mut first = seq.cursor();
        let mut second = seq.cursor();
        assert_eq!(first.take_next().unwrap(), 2);
        assert_eq!(first.take_next().unwrap(), 4);
        assert_eq!(second.take_next().unwrap(), 2);
        assert_eq!(second.take_next().unwrap(), 4);
    }

    #[test]
    fn test_function_syntax() {
        let seq = filter(items(vec![1, 2, 3]), |x| *x < 3);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![1, 2]);
    }
}
