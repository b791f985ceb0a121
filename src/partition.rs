use crate::cursor::Cursor;
use crate::error::LazicombError;
use crate::sequence::Sequence;
use std::rc::Rc;

/// One half of a partitioned sequence
///
/// `partition` splits a source into a matching and a non-matching view. The
/// halves share the upstream sequence through `Rc` but never share cursors:
/// each `cursor` call on either half re-scans the source with its own fresh
/// upstream cursor, so driving one half cannot starve the other.
pub struct PartitionHalf<S, P> {
    seq: Rc<S>,
    predicate: Rc<P>,
    keep: bool,
}

impl<S, P> Sequence for PartitionHalf<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'a>
        = PartitionCursor<'a, S, P>
    where
        Self: 'a;

    fn cursor(&self) -> PartitionCursor<'_, S, P> {
        PartitionCursor {
            upstream: self.seq.cursor(),
            predicate: &self.predicate,
            keep: self.keep,
            pending: None,
        }
    }
}

pub struct PartitionCursor<'a, S: Sequence + 'a, P> {
    upstream: S::Cursor<'a>,
    predicate: &'a P,
    keep: bool,
    pending: Option<S::Item>,
}

impl<'a, S, P> PartitionCursor<'a, S, P>
where
    S: Sequence + 'a,
    P: Fn(&S::Item) -> bool,
{
    fn prime(&mut self) {
        while self.pending.is_none() && self.upstream.has_more() {
            match self.upstream.take_next() {
                Ok(value) => {
                    if (self.predicate)(&value) == self.keep {
                        self.pending = Some(value);
                    }
                }
                Err(_) => break,
            }
        }
    }
}

impl<'a, S, P> Cursor for PartitionCursor<'a, S, P>
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

/// Split a sequence into (matching, non-matching) views of the predicate
pub fn partition<S, P>(seq: S, predicate: P) -> (PartitionHalf<S, P>, PartitionHalf<S, P>)
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    let seq = Rc::new(seq);
    let predicate = Rc::new(predicate);
    (
        PartitionHalf {
            seq: Rc::clone(&seq),
            predicate: Rc::clone(&predicate),
            keep: true,
        },
        PartitionHalf {
            seq,
            predicate,
            keep: false,
        },
    )
}

/// Extension trait to add .partition() method support for sequences
pub trait PartitionExt: Sequence + Sized {
    fn partition<P>(self, predicate: P) -> (PartitionHalf<Self, P>, PartitionHalf<Self, P>)
    where
        P: Fn(&Self::Item) -> bool,
    {
        partition(self, predicate)
    }
}

impl<S: Sequence> PartitionExt for S {}
