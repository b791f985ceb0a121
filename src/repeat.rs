use crate::cursor::Cursor;
use crate::error::LazicombError;
use crate::sequence::Sequence;

/// Generative sequence emitting clones of one value
///
/// Unbounded unless a count is given. The value may itself be an
/// `Option::None`; absence is an ordinary element, not an error.
pub struct Repeat<T> {
    value: T,
    times: Option<usize>,
}

impl<T> Repeat<T> {
    pub fn new(value: T, times: Option<usize>) -> Self {
        Repeat { value, times }
    }
}

impl<T: Clone> Sequence for Repeat<T> {
    type Item = T;
    type Cursor<'a>
        = RepeatCursor<'a, T>
    where
        Self: 'a;

    fn cursor(&self) -> RepeatCursor<'_, T> {
        RepeatCursor {
            value: &self.value,
            remaining: self.times,
        }
    }
}

pub struct RepeatCursor<'a, T> {
    value: &'a T,
    remaining: Option<usize>,
}

impl<'a, T: Clone> Cursor for RepeatCursor<'a, T> {
    type Item = T;

    fn has_more(&mut self) -> bool {
        self.remaining.is_none_or(|r| r > 0)
    }

    fn take_next(&mut self) -> Result<T, LazicombError> {
        match self.remaining {
            Some(0) => Err(LazicombError::Exhausted),
            Some(r) => {
                self.remaining = Some(r - 1);
                Ok(self.value.clone())
            }
            None => Ok(self.value.clone()),
        }
    }
}

/// Emit the value indefinitely
pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat::new(value, None)
}

/// Emit the value exactly `times` times
pub fn repeat_times<T: Clone>(value: T, times: usize) -> Repeat<T> {
    Repeat::new(value, Some(times))
}
