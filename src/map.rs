use crate::cursor::Cursor;
use crate::error::LazicombError;
use crate::sequence::Sequence;

/// Sequence combinator that transforms each element with a mapping function
///
/// The function is applied lazily, once per element, as a downstream cursor
/// pulls. Errors raised by the function (panics) propagate to the caller
/// driving the cursor at the offending element.
pub struct Map<S, F> {
    seq: S,
    mapper: F,
}

impl<S, F> Map<S, F> {
    pub fn new(seq: S, mapper: F) -> Self {
        Map { seq, mapper }
    }
}

impl<S, F, U> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    type Item = U;
    type Cursor<'a>
        = MapCursor<'a, S, F>
    where
        Self: 'a;

    fn cursor(&self) -> MapCursor<'_, S, F> {
        MapCursor {
            upstream: self.seq.cursor(),
            mapper: &self.mapper,
        }
    }
}

pub struct MapCursor<'a, S: Sequence + 'a, F> {
    upstream: S::Cursor<'a>,
    mapper: &'a F,
}

impl<'a, S, F, U> Cursor for MapCursor<'a, S, F>
where
    S: Sequence + 'a,
    F: Fn(S::Item) -> U,
{
    type Item = U;

    fn has_more(&mut self) -> bool {
        self.upstream.has_more()
    }

    fn take_next(&mut self) -> Result<U, LazicombError> {
        Ok((self.mapper)(self.upstream.take_next()?))
    }
}

/// Convenience function to create a Map sequence
pub fn map<S, F, U>(seq: S, mapper: F) -> Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    Map::new(seq, mapper)
}

/// Extension trait to add .map() method support for sequences
pub trait MapExt: Sequence + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Item) -> U,
    {
        Map::new(self, mapper)
    }
}

impl<S: Sequence> MapExt for S {}
