use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// Error type for all sequence and cursor operations
///
/// Structural errors (`NullInput`, `InvalidArgument`) are returned by
/// combinator constructors before any cursor exists. `Exhausted` and
/// `UnsupportedMutation` are only produced while a cursor is being driven.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LazicombError {
    /// A required dynamic input is absent
    ///
    /// The library's own constructors take sequences and functions by value,
    /// so absence is unrepresentable there; the variant exists for embedders
    /// that feed dynamically-checked inputs into a pipeline.
    NullInput { message: Cow<'static, str> },
    /// A structural argument failed construction-time validation
    InvalidArgument { message: Cow<'static, str> },
    /// `take_next` was called past the end of a sequence
    Exhausted,
    /// `remove` was called on a cursor; no cursor supports mutation
    UnsupportedMutation,
}

impl LazicombError {
    pub fn null_input(message: impl Into<Cow<'static, str>>) -> Self {
        LazicombError::NullInput {
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<Cow<'static, str>>) -> Self {
        LazicombError::InvalidArgument {
            message: message.into(),
        }
    }
}

impl fmt::Display for LazicombError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LazicombError::NullInput { message } => {
                write!(f, "required input is absent: {}", message)
            }
            LazicombError::InvalidArgument { message } => {
                write!(f, "invalid argument: {}", message)
            }
            LazicombError::Exhausted => {
                write!(f, "sequence exhausted: no next element to take")
            }
            LazicombError::UnsupportedMutation => {
                write!(f, "cursors do not support element removal")
            }
        }
    }
}

impl Error for LazicombError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let error = LazicombError::invalid_argument("batch size must be positive");
        let display = format!("{}", error);
        assert!(display.contains("invalid argument"));
        assert!(display.contains("batch size must be positive"));
    }

    #[test]
    fn test_null_input_display() {
        let error = LazicombError::null_input("source sequence");
        let display = format!("{}", error);
        assert!(display.contains("required input is absent"));
        assert!(display.contains("source sequence"));
    }

    #[test]
    fn test_exhausted_display() {
        let display = format!("{}", LazicombError::Exhausted);
        assert!(display.contains("exhausted"));
    }

    #[test]
    fn test_unsupported_mutation_display() {
        let display = format!("{}", LazicombError::UnsupportedMutation);
        assert!(display.contains("removal"));
    }

    #[test]
    fn test_errors_compare_equal() {
        assert_eq!(LazicombError::Exhausted, LazicombError::Exhausted);
        assert_eq!(
            LazicombError::invalid_argument("step"),
            LazicombError::invalid_argument("step")
        );
        assert_ne!(LazicombError::Exhausted, LazicombError::UnsupportedMutation);
    }
}
