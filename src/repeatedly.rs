use crate::cursor::Cursor;
use crate::error::LazicombError;
use crate::sequence::Sequence;
use std::cell::RefCell;

/// Generative sequence calling a generator function on every pull
///
/// The generator is the one deliberate exception to cursor independence: it
/// lives in a cell owned by the sequence, so its internal state advances
/// exactly once per `take_next` no matter which cursor triggered the pull.
/// Two cursors over the same `repeatedly` sequence observe a shared stream
/// of generated values. The engine is single-threaded, so a `RefCell` is the
/// right shared-state cell.
pub struct Repeatedly<F> {
    generator: RefCell<F>,
}

impl<F, T> Sequence for Repeatedly<F>
where
    F: FnMut() -> T,
{
    type Item = T;
    type Cursor<'a>
        = RepeatedlyCursor<'a, F>
    where
        Self: 'a;

    fn cursor(&self) -> RepeatedlyCursor<'_, F> {
        RepeatedlyCursor {
            generator: &self.generator,
        }
    }
}

pub struct RepeatedlyCursor<'a, F> {
    generator: &'a RefCell<F>,
}

impl<'a, F, T> Cursor for RepeatedlyCursor<'a, F>
where
    F: FnMut() -> T,
{
    type Item = T;

    fn has_more(&mut self) -> bool {
        true
    }

    fn take_next(&mut self) -> Result<T, LazicombError> {
        let mut generator = self.generator.borrow_mut();
        Ok((*generator)())
    }
}

/// Emit `generator()` on every pull, indefinitely
pub fn repeatedly<F, T>(generator: F) -> Repeatedly<F>
where
    F: FnMut() -> T,
{
    Repeatedly {
        generator: RefCell::new(generator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::take::TakeExt;

    #[test]
    fn test_generator_called_once_per_pull() {
        let mut counter = 0;
        let seq = repeatedly(move || {
            counter += 1;
            counter
        });
        let mut cursor = seq.cursor();
        assert_eq!(cursor.take_next().unwrap(), 1);
        assert_eq!(cursor.take_next().unwrap(), 2);
        assert_eq!(cursor.take_next().unwrap(), 3);
    }

    #[test]
    fn test_has_more_never_invokes_generator() {
        let mut counter = 0;
        let seq = repeatedly(move || {
            counter += 1;
            counter
        });
        let mut cursor = seq.cursor();
        for _ in 0..10 {
            assert!(cursor.has_more());
        }
        assert_eq!(cursor.take_next().unwrap(), 1);
    }

    #[test]
    fn test_cursors_share_generator_state() {
        // The documented exception to cursor independence: the generator's
        // counter advances once per pull system-wide.
        let mut counter = 0;
        let seq = repeatedly(move || {
            counter += 1;
            counter
        });
        let mut first = seq.cursor();
        let mut second = seq.cursor();
        assert_eq!(first.take_next().unwrap(), 1);
        assert_eq!(second.take_next().unwrap(), 2);
        assert_eq!(first.take_next().unwrap(), 3);
        assert_eq!(second.take_next().unwrap(), 4);
    }

    #[test]
    fn test_repeatedly_composes_with_take() {
        let mut n = 0;
        let seq = repeatedly(move || {
            n += 2;
            n
        })
        .take(3);
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![2, 4, 6]);
    }
}
