use crate::cursor::Cursor;
use crate::error::LazicombError;
use crate::sequence::Sequence;

/// Sequence combinator that invokes an action on every element pulled
///
/// Content-identical to its source. The action fires exactly when a
/// downstream cursor pulls the element, never on `has_more`, so side effects
/// are observed in proportion to how far a consumer actually iterates.
pub struct Each<S, F> {
    seq: S,
    action: F,
}

impl<S, F> Each<S, F> {
    pub fn new(seq: S, action: F) -> Self {
        Each { seq, action }
    }
}

impl<S, F> Sequence for Each<S, F>
where
    S: Sequence,
    F: Fn(&S::Item),
{
    type Item = S::Item;
    type Cursor<'a>
        = EachCursor<'a, S, F>
    where
        Self: 'a;

    fn cursor(&self) -> EachCursor<'_, S, F> {
        EachCursor {
            upstream: self.seq.cursor(),
            action: &self.action,
        }
    }
}

pub struct EachCursor<'a, S: Sequence + 'a, F> {
    upstream: S::Cursor<'a>,
    action: &'a F,
}

impl<'a, S, F> Cursor for EachCursor<'a, S, F>
where
    S: Sequence + 'a,
    F: Fn(&S::Item),
{
    type Item = S::Item;

    fn has_more(&mut self) -> bool {
        self.upstream.has_more()
    }

    fn take_next(&mut self) -> Result<S::Item, LazicombError> {
        let value = self.upstream.take_next()?;
        (self.action)(&value);
        Ok(value)
    }
}

/// Convenience function to create an Each sequence
pub fn each<S, F>(seq: S, action: F) -> Each<S, F>
where
    S: Sequence,
    F: Fn(&S::Item),
{
    Each::new(seq, action)
}

/// Extension trait to add .each() method support for sequences
pub trait EachExt: Sequence + Sized {
    fn each<F>(self, action: F) -> Each<Self, F>
    where
        F: Fn(&Self::Item),
    {
        Each::new(self, action)
    }
}

impl<S: Sequence> EachExt for S {}
