//! Error types for the splay tree and the benchmark protocol.

/// Errors returned by [`SplayTree`](crate::SplayTree) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// `remove` was called for a key the tree does not hold.
    #[error("key not found in splay tree")]
    NotFound,
}

/// Errors raised while driving or validating a benchmark instance.
///
/// `SizeMismatch` and `OrderingViolation` mean the tree algorithm itself is
/// broken. Callers must treat them as fatal and never report timings from an
/// instance that produced one.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BenchError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// Teardown found a different number of keys than the configured size.
    #[error("splay tree has wrong size: expected {expected}, found {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Teardown found two adjacent keys that are not strictly increasing.
    #[error("splay tree not sorted at index {index}: {previous} >= {next}")]
    OrderingViolation {
        index: usize,
        previous: String,
        next: String,
    },
}
