//! Error types for the collection operations.
//!
//! Most operations in this crate cannot fail: they iterate whatever they are
//! given and build a fresh result. The few that have a precondition on their
//! input report a violation through [`CollectionError`] instead of reading
//! past the end of an empty sequence.

/// Represents a precondition violation reported by a collection operation.
///
/// # Examples
///
/// ```rust
/// use underscore::CollectionError;
///
/// let error = CollectionError::EmptyCollection { operation: "max" };
/// assert_eq!(format!("{error}"), "max: the collection is empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionError {
    /// The operation needs at least one element and the input had none.
    EmptyCollection {
        /// The name of the operation that was called.
        operation: &'static str,
    },
    /// `range` was called with a step of zero.
    ZeroStep,
}

impl CollectionError {
    pub(crate) fn empty(operation: &'static str) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(operation, "collection operation called on an empty input");
        Self::EmptyCollection { operation }
    }

    pub(crate) fn zero_step() -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(operation = "range", "range called with a zero step");
        Self::ZeroStep
    }
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCollection { operation } => {
                write!(formatter, "{operation}: the collection is empty")
            }
            Self::ZeroStep => write!(formatter, "range: step must not be zero"),
        }
    }
}

impl std::error::Error for CollectionError {}
