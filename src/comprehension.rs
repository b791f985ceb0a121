use crate::cursor::Cursor;
use crate::error::LazicombError;
use crate::sequence::Sequence;

/// Sequence combinator filtering through a conjunction of predicates, then mapping
///
/// Each source element must pass every predicate (evaluated in order,
/// short-circuiting on the first failure) before the mapper is applied.
/// Everything happens lazily per pull.
pub struct Comprehension<S: Sequence, M> {
    source: S,
    mapper: M,
    predicates: Vec<Box<dyn Fn(&S::Item) -> bool>>,
}

impl<S: Sequence, M> Comprehension<S, M> {
    pub fn new(mapper: M, source: S, predicates: Vec<Box<dyn Fn(&S::Item) -> bool>>) -> Self {
        Comprehension {
            source,
            mapper,
            predicates,
        }
    }
}

impl<S, M, U> Sequence for Comprehension<S, M>
where
    S: Sequence,
    M: Fn(S::Item) -> U,
{
    type Item = U;
    type Cursor<'a>
        = ComprehensionCursor<'a, S, M>
    where
        Self: 'a;

    fn cursor(&self) -> ComprehensionCursor<'_, S, M> {
        ComprehensionCursor {
            upstream: self.source.cursor(),
            mapper: &self.mapper,
            predicates: &self.predicates,
            pending: None,
        }
    }
}

pub struct ComprehensionCursor<'a, S: Sequence + 'a, M> {
    upstream: S::Cursor<'a>,
    mapper: &'a M,
    predicates: &'a [Box<dyn Fn(&S::Item) -> bool>],
    pending: Option<S::Item>,
}

impl<'a, S, M> ComprehensionCursor<'a, S, M>
where
    S: Sequence + 'a,
{
    fn prime(&mut self) {
        while self.pending.is_none() && self.upstream.has_more() {
            match self.upstream.take_next() {
                Ok(value) => {
                    if self.predicates.iter().all(|predicate| predicate(&value)) {
                        self.pending = Some(value);
                    }
                }
                Err(_) => break,
            }
        }
    }
}

impl<'a, S, M, U> Cursor for ComprehensionCursor<'a, S, M>
where
    S: Sequence + 'a,
    M: Fn(S::Item) -> U,
{
    type Item = U;

    fn has_more(&mut self) -> bool {
        self.prime();
        self.pending.is_some()
    }

    fn take_next(&mut self) -> Result<U, LazicombError> {
        self.prime();
        match self.pending.take() {
            Some(value) => Ok((self.mapper)(value)),
            None => Err(LazicombError::Exhausted),
        }
    }
}

/// Convenience function to create a Comprehension sequence
pub fn comprehension<S, M, U>(
    mapper: M,
    source: S,
    predicates: Vec<Box<dyn Fn(&S::Item) -> bool>>,
) -> Comprehension<S, M>
where
    S: Sequence,
    M: Fn(S::Item) -> U,
{
    Comprehension::new(mapper, source, predicates)
}
