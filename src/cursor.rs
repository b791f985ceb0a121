use crate::error::LazicombError;

/// Mutable traversal state over one sequence
///
/// A cursor owns exactly the position information needed to resume iteration:
/// an index, a nested cursor, or a small buffered lookahead. Cursors hold no
/// external resources and need no explicit close; dropping one abandons the
/// traversal without affecting any other cursor over the same sequence.
pub trait Cursor {
    /// The type of elements this cursor produces
    type Item;

    /// Check whether another element can be taken
    ///
    /// Idempotent: any number of consecutive calls never advances the
    /// observable position or changes the value the next `take_next` returns.
    /// Combinators that cannot answer without consuming upstream (filter,
    /// slice) buffer a one-element lookahead internally.
    fn has_more(&mut self) -> bool;

    /// Take the next element, advancing the cursor
    ///
    /// Works without a prior `has_more` call; a cursor primes its next
    /// element lazily on first use. Returns `Err(Exhausted)` when driven
    /// past the end of the sequence, never a sentinel value.
    fn take_next(&mut self) -> Result<Self::Item, LazicombError>;

    /// Remove the current element from the underlying sequence
    ///
    /// Sequences are immutable views, so removal always fails with
    /// `UnsupportedMutation`.
    fn remove(&mut self) -> Result<(), LazicombError> {
        Err(LazicombError::UnsupportedMutation)
    }
}
