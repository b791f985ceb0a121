use crate::cursor::Cursor;
use crate::error::LazicombError;
use crate::sequence::Sequence;

/// Sequence combinator that skips the first `count` elements
///
/// The skip happens lazily on the cursor's first `has_more`/`take_next`, so
/// an undriven cursor causes no upstream pulls.
pub struct DropCount<S> {
    seq: S,
    count: usize,
}

impl<S> DropCount<S> {
    pub fn new(seq: S, count: usize) -> Self {
        DropCount { seq, count }
    }
}

impl<S: Sequence> Sequence for DropCount<S> {
    type Item = S::Item;
    type Cursor<'a>
        = DropCountCursor<'a, S>
    where
        Self: 'a;

    fn cursor(&self) -> DropCountCursor<'_, S> {
        DropCountCursor {
            upstream: self.seq.cursor(),
            to_skip: self.count,
        }
    }
}

pub struct DropCountCursor<'a, S: Sequence + 'a> {
    upstream: S::Cursor<'a>,
    to_skip: usize,
}

impl<'a, S: Sequence + 'a> DropCountCursor<'a, S> {
    fn skip(&mut self) {
        while self.to_skip > 0 && self.upstream.has_more() {
            if self.upstream.take_next().is_err() {
                break;
            }
            self.to_skip -= 1;
        }
    }
}

impl<'a, S: Sequence + 'a> Cursor for DropCountCursor<'a, S> {
    type Item = S::Item;

    fn has_more(&mut self) -> bool {
        self.skip();
        self.upstream.has_more()
    }

    fn take_next(&mut self) -> Result<S::Item, LazicombError> {
        self.skip();
        if self.to_skip > 0 {
            return Err(LazicombError::Exhausted);
        }
        self.upstream.take_next()
    }
}

/// Sequence combinator that skips the prefix matching a predicate
///
/// The first element failing the predicate, and everything after it, is
/// yielded; later matching elements are not skipped.
pub struct DropWhile<S, P> {
    seq: S,
    predicate: P,
}

impl<S, P> DropWhile<S, P> {
    pub fn new(seq: S, predicate: P) -> Self {
        DropWhile { seq, predicate }
    }
}

impl<S, P> Sequence for DropWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'a>
        = DropWhileCursor<'a, S, P>
    where
        Self: 'a;

    fn cursor(&self) -> DropWhileCursor<'_, S, P> {
        DropWhileCursor {
            upstream: self.seq.cursor(),
            predicate: &self.predicate,
            negate: false,
            pending: None,
            skipped: false,
        }
    }
}

/// Sequence combinator that skips until a predicate first holds
///
/// The logical negation of `drop_while`: the element that makes the
/// predicate true is the first one yielded.
pub struct DropUntil<S, P> {
    seq: S,
    predicate: P,
}

impl<S, P> DropUntil<S, P> {
    pub fn new(seq: S, predicate: P) -> Self {
        DropUntil { seq, predicate }
    }
}

impl<S, P> Sequence for DropUntil<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'a>
        = DropWhileCursor<'a, S, P>
    where
        Self: 'a;

    fn cursor(&self) -> DropWhileCursor<'_, S, P> {
        DropWhileCursor {
            upstream: self.seq.cursor(),
            predicate: &self.predicate,
            negate: true,
            pending: None,
            skipped: false,
        }
    }
}

pub struct DropWhileCursor<'a, S: Sequence + 'a, P> {
    upstream: S::Cursor<'a>,
    predicate: &'a P,
    negate: bool,
    pending: Option<S::Item>,
    skipped: bool,
}

impl<'a, S, P> DropWhileCursor<'a, S, P>
where
    S: Sequence + 'a,
    P: Fn(&S::Item) -> bool,
{
    fn skip(&mut self) {
        if self.skipped {
            return;
        }
        self.skipped = true;
        while self.upstream.has_more() {
            match self.upstream.take_next() {
                Ok(value) => {
                    if (self.predicate)(&value) != self.negate {
                        continue;
                    }
                    // First element past the skipped prefix
                    self.pending = Some(value);
                    return;
                }
                Err(_) => return,
            }
        }
    }
}

impl<'a, S, P> Cursor for DropWhileCursor<'a, S, P>
where
    S: Sequence + 'a,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn has_more(&mut self) -> bool {
        self.skip();
        self.pending.is_some() || self.upstream.has_more()
    }

    fn take_next(&mut self) -> Result<S::Item, LazicombError> {
        self.skip();
        match self.pending.take() {
            Some(value) => Ok(value),
            None => self.upstream.take_next(),
        }
    }
}

/// Convenience function to drop the first `count` elements
pub fn drop<S: Sequence>(seq: S, count: usize) -> DropCount<S> {
    DropCount::new(seq, count)
}

/// Convenience function to drop the prefix matching a predicate
pub fn drop_while<S, P>(seq: S, predicate: P) -> DropWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    DropWhile::new(seq, predicate)
}

/// Convenience function to drop elements until a predicate holds
pub fn drop_until<S, P>(seq: S, predicate: P) -> DropUntil<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    DropUntil::new(seq, predicate)
}

/// Extension trait to add drop combinators to sequences
pub trait DropExt: Sequence + Sized {
    fn drop(self, count: usize) -> DropCount<Self> {
        DropCount::new(self, count)
    }

    fn drop_while<P>(self, predicate: P) -> DropWhile<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        DropWhile::new(self, predicate)
    }

    fn drop_until<P>(self, predicate: P) -> DropUntil<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        DropUntil::new(self, predicate)
    }
}

impl<S: Sequence> DropExt for S {}
