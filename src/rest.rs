use crate::drop::DropCount;
use crate::sequence::Sequence;

/// Everything after the first element
pub fn rest<S: Sequence>(seq: S) -> DropCount<S> {
    DropCount::new(seq, 1)
}

/// Everything after the first `count` elements
///
/// `count` may exceed the sequence length, yielding empty; a negative count
/// is unrepresentable.
pub fn nth_rest<S: Sequence>(seq: S, count: usize) -> DropCount<S> {
    DropCount::new(seq, count)
}

/// Extension trait to add .rest()/.nth_rest() method support for sequences
pub trait RestExt: Sequence + Sized {
    fn rest(self) -> DropCount<Self> {
        rest(self)
    }

    fn nth_rest(self, count: usize) -> DropCount<Self> {
        nth_rest(self, count)
    }
}

impl<S: Sequence> RestExt for S {}
