use crate::cursor::Cursor;
use crate::error::LazicombError;
use crate::sequence::Sequence;

/// Sequence combinator that repeats its source, indefinitely or a fixed count
///
/// Restart works by re-obtaining a fresh upstream cursor whenever the current
/// pass is exhausted; an upstream that is itself infinite is simply never
/// exhausted, so cycle safely wraps infinite inputs. An empty upstream cycles
/// to an empty sequence rather than spinning on restarts.
pub struct Cycle<S> {
    seq: S,
    times: Option<usize>,
}

impl<S> Cycle<S> {
    pub fn new(seq: S, times: Option<usize>) -> Self {
        Cycle { seq, times }
    }
}

impl<S: Sequence> Sequence for Cycle<S> {
    type Item = S::Item;
    type Cursor<'a>
        = CycleCursor<'a, S>
    where
        Self: 'a;

    fn cursor(&self) -> CycleCursor<'_, S> {
        CycleCursor {
            seq: &self.seq,
            upstream: self.seq.cursor(),
            passes_left: self.times.map(|t| t.saturating_sub(1)),
            done: self.times == Some(0),
        }
    }
}

pub struct CycleCursor<'a, S: Sequence + 'a> {
    seq: &'a S,
    upstream: S::Cursor<'a>,
    /// Full passes remaining after the current one; `None` means unbounded
    passes_left: Option<usize>,
    done: bool,
}

impl<'a, S: Sequence + 'a> CycleCursor<'a, S> {
    fn prime(&mut self) {
        while !self.done && !self.upstream.has_more() {
            if self.passes_left == Some(0) {
                self.done = true;
                break;
            }
            let mut fresh = self.seq.cursor();
            if !fresh.has_more() {
                // Empty source: restarting would never produce an element
                self.done = true;
                break;
            }
            self.upstream = fresh;
            self.passes_left = self.passes_left.map(|p| p - 1);
        }
    }
}

impl<'a, S: Sequence + 'a> Cursor for CycleCursor<'a, S> {
    type Item = S::Item;

    fn has_more(&mut self) -> bool {
        self.prime();
        !self.done
    }

    fn take_next(&mut self) -> Result<S::Item, LazicombError> {
        self.prime();
        if self.done {
            return Err(LazicombError::Exhausted);
        }
        self.upstream.take_next()
    }
}

/// Repeat the source indefinitely
pub fn cycle<S: Sequence>(seq: S) -> Cycle<S> {
    Cycle::new(seq, None)
}

/// Repeat the source exactly `times` times
pub fn cycle_times<S: Sequence>(seq: S, times: usize) -> Cycle<S> {
    Cycle::new(seq, Some(times))
}

/// Extension trait to add cycle combinators to sequences
pub trait CycleExt: Sequence + Sized {
    fn cycle(self) -> Cycle<Self> {
        cycle(self)
    }

    fn cycle_times(self, times: usize) -> Cycle<Self> {
        cycle_times(self, times)
    }
}

impl<S: Sequence> CycleExt for S {}
