use crate::cursor::Cursor;
use crate::error::LazicombError;
use crate::sequence::Sequence;

/// Base in-memory sequence over a vector of elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Items<T> {
    items: Vec<T>,
}

impl<T> Items<T> {
    pub fn new(items: Vec<T>) -> Self {
        Items { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> From<Vec<T>> for Items<T> {
    fn from(items: Vec<T>) -> Self {
        Items::new(items)
    }
}

impl<T> FromIterator<T> for Items<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Items::new(iter.into_iter().collect())
    }
}

impl<T: Clone> Sequence for Items<T> {
    type Item = T;
    type Cursor<'a>
        = ItemsCursor<'a, T>
    where
        Self: 'a;

    fn cursor(&self) -> ItemsCursor<'_, T> {
        ItemsCursor {
            items: &self.items,
            position: 0,
        }
    }
}

/// Cursor over an in-memory slice of elements
#[derive(Debug)]
pub struct ItemsCursor<'a, T> {
    items: &'a [T],
    position: usize,
}

impl<'a, T: Clone> Cursor for ItemsCursor<'a, T> {
    type Item = T;

    fn has_more(&mut self) -> bool {
        self.position < self.items.len()
    }

    fn take_next(&mut self) -> Result<T, LazicombError> {
        match self.items.get(self.position) {
            Some(value) => {
                self.position += 1;
                Ok(value.clone())
            }
            None => Err(LazicombError::Exhausted),
        }
    }
}

/// Convenience function to create an in-memory sequence
pub fn items<T>(items: Vec<T>) -> Items<T> {
    Items::new(items)
}

/// The empty sequence
pub fn empty<T>() -> Items<T> {
    Items::new(Vec::new())
}
