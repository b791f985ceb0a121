use crate::cursor::Cursor;
use crate::error::LazicombError;
use crate::sequence::Sequence;
use std::iter::Peekable;

/// Sequence combinator that maps each element to a sub-sequence and flattens
///
/// The mapper returns `Option<V>`: elements of a `Some` sub-sequence are
/// emitted in order as `Some(item)`, and an absent sub-sequence is emitted as
/// a single literal `None` element rather than being skipped. An empty `Some`
/// sub-sequence emits nothing. One sub-sequence at a time is held as a
/// peekable iterator; the outer source is still pulled lazily.
pub struct FlatMap<S, F> {
    seq: S,
    mapper: F,
}

impl<S, F> FlatMap<S, F> {
    pub fn new(seq: S, mapper: F) -> Self {
        FlatMap { seq, mapper }
    }
}

impl<S, F, V> Sequence for FlatMap<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> Option<V>,
    V: IntoIterator,
{
    type Item = Option<V::Item>;
    type Cursor<'a>
        = FlatMapCursor<'a, S, F, V>
    where
        Self: 'a;

    fn cursor(&self) -> FlatMapCursor<'_, S, F, V> {
        FlatMapCursor {
            upstream: self.seq.cursor(),
            mapper: &self.mapper,
            current: None,
        }
    }
}

enum Chunk<I: Iterator> {
    /// The mapper returned no sub-sequence; emit a single literal absence
    Absent,
    Sub(Peekable<I>),
}

pub struct FlatMapCursor<'a, S: Sequence + 'a, F, V: IntoIterator> {
    upstream: S::Cursor<'a>,
    mapper: &'a F,
    current: Option<Chunk<V::IntoIter>>,
}

impl<'a, S, F, V> FlatMapCursor<'a, S, F, V>
where
    S: Sequence + 'a,
    F: Fn(S::Item) -> Option<V>,
    V: IntoIterator,
{
    fn prime(&mut self) {
        loop {
            match &mut self.current {
                Some(Chunk::Absent) => return,
                Some(Chunk::Sub(sub)) => {
                    if sub.peek().is_some() {
                        return;
                    }
                    self.current = None;
                }
                None => {
                    if !self.upstream.has_more() {
                        return;
                    }
                    match self.upstream.take_next() {
                        Ok(value) => {
                            self.current = Some(match (self.mapper)(value) {
                                None => Chunk::Absent,
                                Some(sub) => Chunk::Sub(sub.into_iter().peekable()),
                            });
                        }
                        Err(_) => return,
                    }
                }
            }
        }
    }
}

impl<'a, S, F, V> Cursor for FlatMapCursor<'a, S, F, V>
where
    S: Sequence + 'a,
    F: Fn(S::Item) -> Option<V>,
    V: IntoIterator,
{
    type Item = Option<V::Item>;

    fn has_more(&mut self) -> bool {
        self.prime();
        self.current.is_some()
    }

    fn take_next(&mut self) -> Result<Option<V::Item>, LazicombError> {
        self.prime();
        match self.current.take() {
            Some(Chunk::Absent) => Ok(None),
            Some(Chunk::Sub(mut sub)) => {
                let value = sub.next().ok_or(LazicombError::Exhausted)?;
                self.current = Some(Chunk::Sub(sub));
                Ok(Some(value))
            }
            None => Err(LazicombError::Exhausted),
        }
    }
}

/// Convenience function to create a FlatMap sequence
pub fn flat_map<S, F, V>(seq: S, mapper: F) -> FlatMap<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> Option<V>,
    V: IntoIterator,
{
    FlatMap::new(seq, mapper)
}

/// Extension trait to add .flat_map() method support for sequences
pub trait FlatMapExt: Sequence + Sized {
    fn flat_map<F, V>(self, mapper: F) -> FlatMap<Self, F>
    where
        F: Fn(Self::Item) -> Option<V>,
        V: IntoIterator,
    {
        FlatMap::new(self, mapper)
    }
}

impl<S: Sequence> FlatMapExt for S {}
