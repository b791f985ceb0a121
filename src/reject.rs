use crate::cursor::Cursor;
use crate::error::LazicombError;
use crate::sequence::Sequence;

/// Sequence combinator that discards elements matching a predicate
///
/// The mirror image of `filter`: elements for which the predicate holds are
/// skipped. Uses the same one-element lookahead discipline.
pub struct Reject<S, P> {
    seq: S,
    predicate: P,
}

impl<S, P> Reject<S, P> {
    pub fn new(seq: S, predicate: P) -> Self {
        Reject { seq, predicate }
    }
}

impl<S, P> Sequence for Reject<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'a>
        = RejectCursor<'a, S, P>
    where
        Self: 'a;

    fn cursor(&self) -> RejectCursor<'_, S, P> {
        RejectCursor {
            upstream: self.seq.cursor(),
            predicate: &self.predicate,
            pending: None,
        }
    }
}

pub struct RejectCursor<'a, S: Sequence + 'a, P> {
    upstream: S::Cursor<'a>,
    predicate: &'a P,
    pending: Option<S::Item>,
}

impl<'a, S, P> RejectCursor<'a, S, P>
where
    S: Sequence + 'a,
    P: Fn(&S::Item) -> bool,
{
    fn prime(&mut self) {
        while self.pending.is_none() && self.upstream.has_more() {
            match self.upstream.take_next() {
                Ok(value) => {
                    if !(self.predicate)(&value) {
                        self.pending = Some(value);
                    }
                }
                Err(_) => break,
            }
        }
    }
}

impl<'a, S, P> Cursor for RejectCursor<'a, S, P>
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

/// Convenience function to create a Reject sequence
pub fn reject<S, P>(seq: S, predicate: P) -> Reject<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    Reject::new(seq, predicate)
}

/// Extension trait to add .reject() method support for sequences
pub trait RejectExt: Sequence + Sized {
    fn reject<P>(self, predicate: P) -> Reject<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        Reject::new(self, predicate)
    }
}

impl<S: Sequence> RejectExt for S {}
