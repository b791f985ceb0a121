use crate::cursor::Cursor;
use crate::error::LazicombError;
use crate::sequence::Sequence;

/// Sequence combinator for general sub-sequencing with Python-style semantics
///
/// `start`/`stop` default to the natural bounds when `None` and may be
/// negative, in which case they resolve relative to the end of the source;
/// resolution needs the length, so such cursors count the finite source once
/// before streaming. Out-of-range bounds clamp instead of erroring, and a
/// start/stop ordering inconsistent with the sign of `step` yields an empty
/// sequence. A negative `step` walks the resolved window in reverse, which
/// buffers the source. `step == 0` fails at construction.
pub struct Slice<S> {
    seq: S,
    start: Option<i64>,
    stop: Option<i64>,
    step: i64,
}

impl<S: Sequence> Sequence for Slice<S> {
    type Item = S::Item;
    type Cursor<'a>
        = SliceCursor<'a, S>
    where
        Self: 'a;

    fn cursor(&self) -> SliceCursor<'_, S> {
        SliceCursor {
            seq: &self.seq,
            start: self.start,
            stop: self.stop,
            step: self.step,
            plan: None,
        }
    }
}

pub struct SliceCursor<'a, S: Sequence + 'a> {
    seq: &'a S,
    start: Option<i64>,
    stop: Option<i64>,
    step: i64,
    plan: Option<SlicePlan<'a, S>>,
}

enum SlicePlan<'a, S: Sequence + 'a> {
    /// Positive step with resolved non-negative bounds: stream one upstream pass
    Forward {
        upstream: S::Cursor<'a>,
        consumed: usize,
        next_index: usize,
        stop: Option<usize>,
        step: usize,
        pending: Option<S::Item>,
        done: bool,
    },
    /// Negative step: the selected window is buffered and walked by index
    Buffered {
        items: Vec<Option<S::Item>>,
        indices: Vec<usize>,
        position: usize,
    },
}

/// Clamp a bound into `[0, len]` for a forward slice
fn resolve_forward_bound(bound: Option<i64>, default: i64, len: i64) -> usize {
    let resolved = match bound {
        None => default,
        Some(x) if x < 0 => x + len,
        Some(x) => x,
    };
    resolved.clamp(0, len) as usize
}

/// Clamp a bound into `[-1, len - 1]` for a reverse slice
fn resolve_reverse_bound(bound: Option<i64>, default: i64, len: i64) -> i64 {
    let resolved = match bound {
        None => default,
        Some(x) if x < 0 => x + len,
        Some(x) => x,
    };
    resolved.clamp(-1, len - 1)
}

impl<'a, S: Sequence + 'a> SliceCursor<'a, S> {
    fn count_source(&self) -> i64 {
        let mut probe = self.seq.cursor();
        let mut count: i64 = 0;
        while probe.has_more() {
            if probe.take_next().is_err() {
                break;
            }
            count += 1;
        }
        count
    }

    fn resolve(&mut self) {
        if self.plan.is_some() {
            return;
        }
        let negative_bound = matches!(self.start, Some(x) if x < 0)
            || matches!(self.stop, Some(x) if x < 0);
        if self.step > 0 && !negative_bound {
            self.plan = Some(SlicePlan::Forward {
                upstream: self.seq.cursor(),
                consumed: 0,
                next_index: self.start.unwrap_or(0) as usize,
                stop: self.stop.map(|x| x as usize),
                step: self.step as usize,
                pending: None,
                done: false,
            });
        } else if self.step > 0 {
            // Negative bounds: count the source once, then stream a fresh pass
            let len = self.count_source();
            let start = resolve_forward_bound(self.start, 0, len);
            let stop = resolve_forward_bound(self.stop, len, len);
            self.plan = Some(SlicePlan::Forward {
                upstream: self.seq.cursor(),
                consumed: 0,
                next_index: start,
                stop: Some(stop),
                step: self.step as usize,
                pending: None,
                done: false,
            });
        } else {
            // Reverse: materialize, then walk the selected indices backwards
            let mut upstream = self.seq.cursor();
            let mut collected = Vec::new();
            while upstream.has_more() {
                match upstream.take_next() {
                    Ok(value) => collected.push(Some(value)),
                    Err(_) => break,
                }
            }
            let len = collected.len() as i64;
            let start = resolve_reverse_bound(self.start, len - 1, len);
            let stop = resolve_reverse_bound(self.stop, -1, len);
            let mut indices = Vec::new();
            let mut i = start;
            while i > stop {
                indices.push(i as usize);
                i += self.step;
            }
            self.plan = Some(SlicePlan::Buffered {
                items: collected,
                indices,
                position: 0,
            });
        }
    }

    fn prime(&mut self) {
        self.resolve();
        if let Some(SlicePlan::Forward {
            upstream,
            consumed,
            next_index,
            stop,
            step,
            pending,
            done,
        }) = &mut self.plan
        {
            if pending.is_some() || *done {
                return;
            }
            if let Some(stop) = stop {
                if *next_index >= *stop {
                    *done = true;
                    return;
                }
            }
            // Advance the upstream pass to the next selected index
            while *consumed <= *next_index {
                if !upstream.has_more() {
                    *done = true;
                    return;
                }
                match upstream.take_next() {
                    Ok(value) => {
                        *consumed += 1;
                        if *consumed == *next_index + 1 {
                            *pending = Some(value);
                        }
                    }
                    Err(_) => {
                        *done = true;
                        return;
                    }
                }
            }
            *next_index += *step;
        }
    }
}

impl<'a, S: Sequence + 'a> Cursor for SliceCursor<'a, S> {
    type Item = S::Item;

    fn has_more(&mut self) -> bool {
        self.prime();
        match &self.plan {
            Some(SlicePlan::Forward { pending, .. }) => pending.is_some(),
            Some(SlicePlan::Buffered {
                indices, position, ..
            }) => *position < indices.len(),
            None => false,
        }
    }

    fn take_next(&mut self) -> Result<S::Item, LazicombError> {
        self.prime();
        match &mut self.plan {
            Some(SlicePlan::Forward { pending, .. }) => {
                pending.take().ok_or(LazicombError::Exhausted)
            }
            Some(SlicePlan::Buffered {
                items,
                indices,
                position,
            }) => match indices.get(*position) {
                Some(&index) => {
                    *position += 1;
                    items[index].take().ok_or(LazicombError::Exhausted)
                }
                None => Err(LazicombError::Exhausted),
            },
            None => Err(LazicombError::Exhausted),
        }
    }
}

/// Create a Slice sequence; `step == 0` fails with `InvalidArgument`
pub fn slice<S: Sequence>(
    seq: S,
    start: Option<i64>,
    stop: Option<i64>,
    step: i64,
) -> Result<Slice<S>, LazicombError> {
    if step == 0 {
        return Err(LazicombError::invalid_argument("slice step must be non-zero"));
    }
    Ok(Slice {
        seq,
        start,
        stop,
        step,
    })
}

/// Extension trait to add .slice() method support for sequences
pub trait SliceExt: Sequence + Sized {
    fn slice(
        self,
        start: Option<i64>,
        stop: Option<i64>,
        step: i64,
    ) -> Result<Slice<Self>, LazicombError> {
        slice(self, start, stop, step)
    }
}

impl<S: Sequence> SliceExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::items;

    fn letters() -> crate::items::Items<char> {
        items("abcdefghijk".chars().collect())
    }

    #[test]
    fn test_forward_slice_with_step() {
        // [a..k][2:7:2] selects indices 2, 4, 6
        let seq = slice(letters(), Some(2), Some(7), 2).unwrap();
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec!['c', 'e', 'g']);
    }

    #[test]
    fn test_negative_bounds_resolve_from_end() {
        // 11 elements: -7 -> 4, -2 -> 9
        let seq = slice(letters(), Some(-7), Some(-2), 1).unwrap();
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec!['e', 'f', 'g', 'h', 'i']);
    }

    #[test]
    fn test_default_bounds_take_everything() {
        let seq = slice(items(vec![1, 2, 3]), None, None, 1).unwrap();
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_out_of_range_bounds_clamp() {
        let seq = slice(items(vec![1, 2, 3]), Some(-100), Some(100), 1).unwrap();
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_zero_step_is_invalid() {
        let result = slice(items(vec![1, 2, 3]), None, None, 0);
        assert!(matches!(
            result,
            Err(LazicombError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_inconsistent_ordering_is_empty() {
        // start > stop with a positive step is empty, not an error
        let seq = slice(items(vec![1, 2, 3, 4]), Some(3), Some(1), 1).unwrap();
        let mut cursor = seq.cursor();
        assert!(!cursor.has_more());
        assert_eq!(cursor.take_next(), Err(LazicombError::Exhausted));
    }

    #[test]
    fn test_negative_step_reverses() {
        let seq = slice(items(vec![1, 2, 3, 4, 5]), None, None, -1).unwrap();
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_negative_step_with_bounds() {
        // [1,2,3,4,5][4:1:-2] selects indices 4, 2
        let seq = slice(items(vec![1, 2, 3, 4, 5]), Some(4), Some(1), -2).unwrap();
        assert_eq!(seq.iter().collect::<Vec<_>>(), vec![5, 3]);
    }

    #[test]
    fn test_negative_step_inconsistent_ordering_is_empty() {
        let seq = slice(items(vec![1, 2, 3, 4]), Some(1), Some(3), -1).unwrap();
        assert!(seq.iter().next().is_none());
    }

    #[test]
    fn test_slice_is_lazy_for_forward_case() {
        use crate::each::EachExt;
        use std::cell::Cell;
        let pulls = Cell::new(0);
        let source = items(vec![1, 2, 3, 4, 5]).each(|_| pulls.set(pulls.get() + 1));
        let seq = slice(source, Some(0), Some(2), 1).unwrap();
        let mut cursor = seq.cursor();
        assert_eq!(pulls.get(), 0);
        assert_eq!(cursor.take_next().unwrap(), 1);
        assert_eq!(pulls.get(), 1);
    }

    #[test]
    fn test_cursors_are_independent() {
        let seq = slice(items(vec![1, 2, 3, 4]), Some(1), None, 1).unwrap();
        let mut first = seq.cursor();
        let mut second = seq.cursor();
        assert_eq!(first.take_next().unwrap(), 2);
        assert_eq!(first.take_next().unwrap(), 3);
        assert_eq!(second.take_next().unwrap(), 2);
    }

    #[test]
    fn test_empty_source() {
        let seq = slice(items(Vec::<i32>::new()), Some(-3), Some(-1), 1).unwrap();
        assert!(seq.iter().next().is_none());
    }
}
