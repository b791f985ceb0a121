use crate::cursor::Cursor;
use crate::error::LazicombError;
use crate::sequence::Sequence;

/// Sequence combinator that pairs each element with a derived index
///
/// Yields `(indexer(&element), element)` tuples, index first.
pub struct Index<S, F> {
    seq: S,
    indexer: F,
}

impl<S, F> Index<S, F> {
    pub fn new(seq: S, indexer: F) -> Self {
        Index { seq, indexer }
    }
}

impl<S, F, I> Sequence for Index<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> I,
{
    type Item = (I, S::Item);
    type Cursor<'a>
        = IndexCursor<'a, S, F>
    where
        Self: 'a;

    fn cursor(&self) -> IndexCursor<'_, S, F> {
        IndexCursor {
            upstream: self.seq.cursor(),
            indexer: &self.indexer,
        }
    }
}

pub struct IndexCursor<'a, S: Sequence + 'a, F> {
    upstream: S::Cursor<'a>,
    indexer: &'a F,
}

impl<'a, S, F, I> Cursor for IndexCursor<'a, S, F>
where
    S: Sequence + 'a,
    F: Fn(&S::Item) -> I,
{
    type Item = (I, S::Item);

    fn has_more(&mut self) -> bool {
        self.upstream.has_more()
    }

    fn take_next(&mut self) -> Result<(I, S::Item), LazicombError> {
        let value = self.upstream.take_next()?;
        Ok(((self.indexer)(&value), value))
    }
}

/// Convenience function to create an Index sequence
pub fn index<S, F, I>(seq: S, indexer: F) -> Index<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> I,
{
    Index::new(seq, indexer)
}

/// Extension trait to add .index() method support for sequences
pub trait IndexExt: Sequence + Sized {
    fn index<F, I>(self, indexer: F) -> Index<Self, F>
    where
        F: Fn(&Self::Item) -> I,
    {
        Index::new(self, indexer)
    }
}

impl<S: Sequence> IndexExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::items;

    #[test]
    fn test_index_comes_first() {
        let seq = items(vec!["a", "bb", "ccc"]).index(|s| s.len());
        assert_eq!(
            seq.iter().collect::<Vec<_>>(),
            vec![(1, "a"), (2, "bb"), (3, "ccc")]
        );
    }

    #[test]
    fn test_index_with_key_extraction() {
        let seq = items(vec![(1, "one"), (2, "two")]).index(|pair| pair.0);
        assert_eq!(
            seq.iter().collect::<Vec<_>>(),
            vec![(1, (1, "one")), (2, (2, "two"))]
        );
    }

    #[test]
    fn test_index_is_re_iterable() {
        let seq = items(vec![10, 20]).index(|x| x / 10);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![(1, 10), (2, 20)]);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![(1, 10), (2, 20)]);
    }

    #[test]
    fn test_function_syntax() {
        let seq = index(items(vec![5]), |x| *x * 2);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![(10, 5)]);
    }
}
