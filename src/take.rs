use crate::cursor::Cursor;
use crate::error::LazicombError;
use crate::sequence::Sequence;

/// Sequence combinator that yields at most the first `count` elements
///
/// Counts are `usize`, so the original contract's rejection of negative
/// counts is enforced by the type rather than a runtime check.
pub struct TakeCount<S> {
    seq: S,
    count: usize,
}

impl<S> TakeCount<S> {
    pub fn new(seq: S, count: usize) -> Self {
        TakeCount { seq, count }
    }
}

impl<S: Sequence> Sequence for TakeCount<S> {
    type Item = S::Item;
    type Cursor<'a>
        = TakeCountCursor<'a, S>
    where
        Self: 'a;

    fn cursor(&self) -> TakeCountCursor<'_, S> {
        TakeCountCursor {
            upstream: self.seq.cursor(),
            remaining: self.count,
        }
    }
}

pub struct TakeCountCursor<'a, S: Sequence + 'a> {
    upstream: S::Cursor<'a>,
    remaining: usize,
}

impl<'a, S: Sequence + 'a> Cursor for TakeCountCursor<'a, S> {
    type Item = S::Item;

    fn has_more(&mut self) -> bool {
        self.remaining > 0 && self.upstream.has_more()
    }

    fn take_next(&mut self) -> Result<S::Item, LazicombError> {
        if self.remaining == 0 {
            return Err(LazicombError::Exhausted);
        }
        let value = self.upstream.take_next()?;
        self.remaining -= 1;
        Ok(value)
    }
}

/// Sequence combinator that yields the longest prefix matching a predicate
pub struct TakeWhile<S, P> {
    seq: S,
    predicate: P,
}

impl<S, P> TakeWhile<S, P> {
    pub fn new(seq: S, predicate: P) -> Self {
        TakeWhile { seq, predicate }
    }
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'a>
        = TakeWhileCursor<'a, S, P>
    where
        Self: 'a;

    fn cursor(&self) -> TakeWhileCursor<'_, S, P> {
        TakeWhileCursor {
            upstream: self.seq.cursor(),
            predicate: &self.predicate,
            negate: false,
            pending: None,
            done: false,
        }
    }
}

/// Sequence combinator that yields the prefix before a predicate first holds
///
/// The logical negation of `take_while`: stops as soon as the predicate
/// becomes true. The stopping element is not yielded.
pub struct TakeUntil<S, P> {
    seq: S,
    predicate: P,
}

impl<S, P> TakeUntil<S, P> {
    pub fn new(seq: S, predicate: P) -> Self {
        TakeUntil { seq, predicate }
    }
}

impl<S, P> Sequence for TakeUntil<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'a>
        = TakeWhileCursor<'a, S, P>
    where
        Self: 'a;

    fn cursor(&self) -> TakeWhileCursor<'_, S, P> {
        TakeWhileCursor {
            upstream: self.seq.cursor(),
            predicate: &self.predicate,
            negate: true,
            pending: None,
            done: false,
        }
    }
}

pub struct TakeWhileCursor<'a, S: Sequence + 'a, P> {
    upstream: S::Cursor<'a>,
    predicate: &'a P,
    negate: bool,
    pending: Option<S::Item>,
    done: bool,
}

impl<'a, S, P> TakeWhileCursor<'a, S, P>
where
    S: Sequence + 'a,
    P: Fn(&S::Item) -> bool,
{
    fn prime(&mut self) {
        if self.done || self.pending.is_some() || !self.upstream.has_more() {
            return;
        }
        match self.upstream.take_next() {
            Ok(value) => {
                if (self.predicate)(&value) != self.negate {
                    self.pending = Some(value);
                } else {
                    self.done = true;
                }
            }
            Err(_) => self.done = true,
        }
    }
}

impl<'a, S, P> Cursor for TakeWhileCursor<'a, S, P>
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

/// Convenience function to take the first `count` elements
pub fn take<S: Sequence>(seq: S, count: usize) -> TakeCount<S> {
    TakeCount::new(seq, count)
}

/// Convenience function to take the prefix matching a predicate
pub fn take_while<S, P>(seq: S, predicate: P) -> TakeWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    TakeWhile::new(seq, predicate)
}

/// Convenience function to take the prefix before a predicate holds
pub fn take_until<S, P>(seq: S, predicate: P) -> TakeUntil<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    TakeUntil::new(seq, predicate)
}

/// Extension trait to add take combinators to sequences
pub trait TakeExt: Sequence + Sized {
    fn take(self, count: usize) -> TakeCount<Self> {
        TakeCount::new(self, count)
    }

    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    fn take_until<P>(self, predicate: P) -> TakeUntil<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        TakeUntil::new(self, predicate)
    }
}

impl<S: Sequence> TakeExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::items;
    use crate::repeat::repeat;

    #[test]
    fn test_take_prefix() {
        let seq = items(vec![1, 2, 3, 4]).take(2);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_take_more_than_available() {
        let seq = items(vec![1, 2]).take(10);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_take_zero() {
        let seq = items(vec![1, 2]).take(0);
        let mut cursor = seq.cursor();
        assert!(!cursor.has_more());
        assert_eq!(cursor.take_next(), Err(LazicombError::Exhausted));
    }

    #[test]
    fn test_take_bounds_infinite_source() {
        let seq = repeat(7).take(3);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![7, 7, 7]);
    }

    #[test]
    fn test_take_while_prefix() {
        let seq = items(vec![1, 2, 3, 1, 2]).take_while(|x| *x < 3);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_take_while_stops_permanently() {
        // Later matching elements are not revisited once the predicate fails
        let seq = items(vec![1, 5, 1, 1]).take_while(|x| *x < 3);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_take_until_stops_at_first_match() {
        let seq = items(vec![1, 2, 3, 4]).take_until(|x| *x == 3);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_take_until_never_matches() {
        let seq = items(vec![1, 2]).take_until(|x| *x == 99);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_take_cursors_are_independent() {
        let seq = items(vec![1, 2, 3]).take(2);
        let mut first = seq.cursor();
        let mut second = seq.cursor();
        assert_eq!(first.take_next().unwrap(), 1);
        assert_eq!(first.take_next().unwrap(), 2);
        assert_eq!(second.take_next().unwrap(), 1);
        assert!(!first.has_more());
        assert!(second.has_more());
    }

    #[test]
    fn test_function_syntax() {
        assert_eq!(
            take(items(vec![1, 2, 3]), 1).iter().collect::<Vec<_>>(),
            vec![1]
        );
        assert_eq!(
            take_while(items(vec![1, 2, 3]), |x| *x < 2)
                .iter()
                .collect::<Vec<_>>(),
            vec![1]
        );
        assert_eq!(
            take_until(items(vec![1, 2, 3]), |x| *x > 2)
                .iter()
                .collect::<Vec<_>>(),
            vec![1, 2]
        );
    }
}
