use crate::cursor::Cursor;
use crate::error::LazicombError;
use crate::sequence::Sequence;

/// Sequence combinator that appends one element after a sequence
///
/// Only meaningful for finite sources; over an infinite source the appended
/// element is simply never reached.
pub struct Conjoin<S: Sequence> {
    seq: S,
    last: S::Item,
}

impl<S: Sequence> Conjoin<S> {
    pub fn new(seq: S, last: S::Item) -> Self {
        Conjoin { seq, last }
    }
}

impl<S> Sequence for Conjoin<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;
    type Cursor<'a>
        = ConjoinCursor<'a, S>
    where
        Self: 'a;

    fn cursor(&self) -> ConjoinCursor<'_, S> {
        ConjoinCursor {
            upstream: self.seq.cursor(),
            last: Some(self.last.clone()),
        }
    }
}

pub struct ConjoinCursor<'a, S: Sequence + 'a> {
    upstream: S::Cursor<'a>,
    last: Option<S::Item>,
}

impl<'a, S: Sequence + 'a> Cursor for ConjoinCursor<'a, S> {
    type Item = S::Item;

    fn has_more(&mut self) -> bool {
        self.upstream.has_more() || self.last.is_some()
    }

    fn take_next(&mut self) -> Result<S::Item, LazicombError> {
        if self.upstream.has_more() {
            return self.upstream.take_next();
        }
        self.last.take().ok_or(LazicombError::Exhausted)
    }
}

/// Convenience function to append an element to a sequence
pub fn conjoin<S>(seq: S, last: S::Item) -> Conjoin<S>
where
    S: Sequence,
    S::Item: Clone,
{
    Conjoin::new(seq, last)
}

/// Extension trait to add .conjoin() method support for sequences
pub trait ConjoinExt: Sequence + Sized {
    fn conjoin(self, last: Self::Item) -> Conjoin<Self>
    where
        Self::Item: Clone,
    {
        Conjoin::new(self, last)
    }
}

impl<S: Sequence> ConjoinExt for S {}
