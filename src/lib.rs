//! Fixed-capacity binary heaps for Rust
//!
//! This crate provides [`BoundedHeap`], an array-backed binary heap whose
//! storage is reserved once, at construction, and never grows. The ordering is
//! chosen at runtime with [`HeapMode`]: a min-heap keeps its smallest element
//! at the root, a max-heap its largest. Both orderings share one
//! implementation; the max-heap simply reverses every comparison.
//!
//! # Features
//!
//! - **Bounded**: `insert` returns `false` instead of reallocating when full
//! - **Runtime polarity**: min or max ordering selected per instance
//! - **Checked access**: `peek`/`remove` on an empty heap return [`HeapError::Empty`]
//!
//! # Example
//!
//! ```rust
//! use bounded_heap::{BoundedHeap, HeapMode};
//!
//! let mut heap = BoundedHeap::new(5, HeapMode::Min);
//! for v in [5, 3, 8, 1, 4] {
//!     assert!(heap.insert(v));
//! }
//! assert!(heap.is_full());
//! assert_eq!(heap.peek(), Ok(&1));
//! assert_eq!(heap.into_sorted_vec(), vec![1, 3, 4, 5, 8]);
//! ```

pub mod bounded;
pub mod error;
pub mod mode;

pub use bounded::BoundedHeap;
pub use error::{HeapError, ParseHeapModeError};
pub use mode::HeapMode;
