use crate::cursor::Cursor;
use std::rc::Rc;

/// Immutable, reusable description of how to produce elements
///
/// A sequence is a cursor factory: it never stores a traversal position
/// itself, and every `cursor` call constructs fresh per-upstream cursors.
/// Two cursors obtained from the same sequence advance independently; this
/// is what lets combinators like `cycle` and `cartesian_product` restart a
/// traversal from scratch without re-deriving the whole pipeline.
pub trait Sequence {
    /// The type of elements this sequence describes
    type Item;

    /// The cursor type produced for this sequence
    ///
    /// Cursors borrow the sequence so that nested combinators can re-obtain
    /// fresh upstream cursors for as long as their own cursor lives.
    type Cursor<'a>: Cursor<Item = Self::Item>
    where
        Self: 'a;

    /// Obtain a fresh, independent cursor over this sequence
    fn cursor(&self) -> Self::Cursor<'_>;

    /// Bridge into `std::iter::Iterator`, driving a fresh cursor
    ///
    /// Stops at exhaustion; intended for consumers that drive one cursor to
    /// the end and do not need the error channel.
    fn iter(&self) -> SeqIter<'_, Self>
    where
        Self: Sized,
    {
        SeqIter {
            cursor: self.cursor(),
        }
    }
}

impl<S: Sequence> Sequence for &S {
    type Item = S::Item;
    type Cursor<'a>
        = S::Cursor<'a>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        (**self).cursor()
    }
}

impl<S: Sequence> Sequence for Rc<S> {
    type Item = S::Item;
    type Cursor<'a>
        = S::Cursor<'a>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        (**self).cursor()
    }
}

impl<S: Sequence> Sequence for Box<S> {
    type Item = S::Item;
    type Cursor<'a>
        = S::Cursor<'a>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        (**self).cursor()
    }
}

/// Iterator adapter over one cursor of a sequence
pub struct SeqIter<'a, S: Sequence + 'a> {
    cursor: S::Cursor<'a>,
}

impl<'a, S: Sequence + 'a> Iterator for SeqIter<'a, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.cursor.has_more() {
            self.cursor.take_next().ok()
        } else {
            None
        }
    }
}
