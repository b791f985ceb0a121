use crate::cursor::Cursor;
use crate::error::LazicombError;
use crate::items::Items;
use crate::sequence::Sequence;

/// Sequence combinator that groups elements into fixed-size sub-sequences
///
/// Each emitted batch is an independently re-iterable `Items` holding its
/// own buffered elements; all batches of one cursor share a single
/// forward-only upstream pass, so revisiting an emitted batch replays its
/// buffer rather than pulling fresh upstream elements. The last batch may be
/// shorter than `size`.
pub struct Batch<S> {
    seq: S,
    size: usize,
}

impl<S> Sequence for Batch<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = Items<S::Item>;
    type Cursor<'a>
        = BatchCursor<'a, S>
    where
        Self: 'a;

    fn cursor(&self) -> BatchCursor<'_, S> {
        BatchCursor {
            upstream: self.seq.cursor(),
            size: self.size,
        }
    }
}

pub struct BatchCursor<'a, S: Sequence + 'a> {
    upstream: S::Cursor<'a>,
    size: usize,
}

impl<'a, S> Cursor for BatchCursor<'a, S>
where
    S: Sequence + 'a,
    S::Item: Clone,
{
    type Item = Items<S::Item>;

    fn has_more(&mut self) -> bool {
        self.upstream.has_more()
    }

    fn take_next(&mut self) -> Result<Items<S::Item>, LazicombError> {
        if !self.upstream.has_more() {
            return Err(LazicombError::Exhausted);
        }
        let mut buffer = Vec::with_capacity(self.size);
        while buffer.len() < self.size && self.upstream.has_more() {
            buffer.push(self.upstream.take_next()?);
        }
        Ok(Items::new(buffer))
    }
}

/// Create a Batch sequence; `size == 0` fails with `InvalidArgument`
pub fn batch<S: Sequence>(seq: S, size: usize) -> Result<Batch<S>, LazicombError> {
    if size == 0 {
        return Err(LazicombError::invalid_argument("batch size must be positive"));
    }
    Ok(Batch { seq, size })
}

/// Extension trait to add .batch() method support for sequences
pub trait BatchExt: Sequence + Sized {
    fn batch(self, size: usize) -> Result<Batch<Self>, LazicombError> {
        batch(self, size)
    }
}

impl<S: Sequence> BatchExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::items;

    #[test]
    fn test_batches_of_three() {
        let seq = batch(items(vec![1, 2, 3, 4, 5]), 3).unwrap();
        let batches: Vec<Vec<i32>> = seq.iter().map(|b| b.iter().collect()).collect();
        assert_eq!(batches, vec![vec![1, 2, 3], vec![4, 5]]);
    }

    #[test]
    fn test_exact_division() {
        let seq = batch(items(vec![1, 2, 3, 4]), 2).unwrap();
        let batches: Vec<Vec<i32>> = seq.iter().map(|b| b.iter().collect()).collect();
        assert_eq!(batches, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_zero_size_is_invalid() {
        let result = batch(items(vec![1, 2, 3]), 0);
        assert!(matches!(result, Err(LazicombError::InvalidArgument { .. })));
    }

    #[test]
    fn test_batch_replays_its_own_buffer() {
        let seq = batch(items(vec![1, 2, 3, 4]), 2).unwrap();
        let mut cursor = seq.cursor();
        let first = cursor.take_next().unwrap();
        // Re-iterating an emitted batch replays the buffer, not the upstream
        assert_eq!(first.iter().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(first.iter().collect::<Vec<_>>(), vec![1, 2]);
        let second = cursor.take_next().unwrap();
        assert_eq!(second.iter().collect::<Vec<_>>(), vec![3, 4]);
    }

    #[test]
    fn test_empty_source_has_no_batches() {
        let seq = batch(items(Vec::<i32>::new()), 3).unwrap();
        let mut cursor = seq.cursor();
        assert!(!cursor.has_more());
        assert_eq!(cursor.take_next(), Err(LazicombError::Exhausted));
    }

    #[test]
    fn test_batch_cursors_are_independent() {
        let seq = batch(items(vec![1, 2, 3, 4]), 2).unwrap();
        let mut first = seq.cursor();
        let mut second = seq.cursor();
        assert_eq!(first.take_next().unwrap().iter().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(second.take_next().unwrap().iter().collect::<Vec<_>>(), vec![1, 2]);
    }
}
