//! Error types for heap operations

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// `peek` or `remove` was called on a heap holding no elements
    #[error("the heap is empty")]
    Empty,
}

/// Error returned when a string does not name a [`HeapMode`](crate::HeapMode)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown heap mode `{input}` (expected `min` or `max`)")]
pub struct ParseHeapModeError {
    pub(crate) input: String,
}

impl ParseHeapModeError {
    /// The input that failed to parse
    pub fn input(&self) -> &str {
        &self.input
    }
}
