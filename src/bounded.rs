//! Fixed-capacity binary heap
//!
//! An array-backed complete binary tree whose storage is allocated once, at
//! construction, and never grows. The ordering is picked at runtime through
//! [`HeapMode`]; both orderings share the same sift routines.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `insert`   | O(log n)   |
//! | `remove`   | O(log n)   |
//! | `peek`     | O(1)       |
//! | `is_empty` | O(1)       |
//! | `is_full`  | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use bounded_heap::{BoundedHeap, HeapError, HeapMode};
//!
//! let mut heap = BoundedHeap::new(3, HeapMode::Max);
//! assert!(heap.insert(2));
//! assert!(heap.insert(9));
//! assert!(heap.insert(5));
//! assert!(!heap.insert(1)); // full
//!
//! assert_eq!(heap.peek(), Ok(&9));
//! assert_eq!(heap.remove(), Ok(9));
//! assert_eq!(heap.peek(), Ok(&5));
//!
//! heap.clear();
//! assert_eq!(heap.remove(), Err(HeapError::Empty));
//! ```

use log::{debug, trace};
use std::cmp::Ordering;

use crate::error::HeapError;
use crate::mode::HeapMode;

/// A binary heap holding at most `capacity` elements
///
/// Elements live in a contiguous buffer laid out as a complete binary tree:
/// the children of index `i` are `2i + 1` and `2i + 2`. The buffer is
/// reserved for exactly `capacity` elements when the heap is built, and
/// `insert` refuses new elements rather than reallocating.
#[derive(Debug, Clone)]
pub struct BoundedHeap<T> {
    /// Valid elements in heap order; `data.len()` is the logical size
    data: Vec<T>,
    capacity: usize,
    mode: HeapMode,
}

impl<T: Ord> BoundedHeap<T> {
    /// Creates an empty heap that can hold `capacity` elements
    ///
    /// A capacity of zero is allowed; such a heap is always both empty and full.
    pub fn new(capacity: usize, mode: HeapMode) -> Self {
        debug!("creating {mode}-heap with capacity {capacity}");
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
            mode,
        }
    }

    /// Creates an empty min-heap
    pub fn min(capacity: usize) -> Self {
        Self::new(capacity, HeapMode::Min)
    }

    /// Creates an empty max-heap
    pub fn max(capacity: usize) -> Self {
        Self::new(capacity, HeapMode::Max)
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns true if the heap holds `capacity` elements
    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the maximum number of elements the heap can hold
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the ordering the heap was built with
    pub fn mode(&self) -> HeapMode {
        self.mode
    }

    /// Returns the stored elements in heap (array) order
    ///
    /// The first element is the root. Beyond the heap property, the order of
    /// the remaining elements is unspecified.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Inserts a value, returning `false` if the heap is already full
    ///
    /// A rejected value is dropped and the heap is left untouched.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn insert(&mut self, value: T) -> bool {
        if self.is_full() {
            trace!("rejecting insert into full heap (capacity {})", self.capacity);
            return false;
        }

        self.data.push(value);
        self.sift_up(self.data.len() - 1);
        true
    }

    /// Returns the root element without removing it
    ///
    /// For a min-heap this is the smallest element, for a max-heap the largest.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap holds no elements.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or_else(|| {
            trace!("peek on empty heap");
            HeapError::Empty
        })
    }

    /// Removes and returns the root element
    ///
    /// The last element in the buffer takes the root's place and is sifted
    /// down until the heap property holds again.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap holds no elements; the heap is
    /// not modified.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn remove(&mut self) -> Result<T, HeapError> {
        self.pop_root().ok_or_else(|| {
            trace!("remove on empty heap");
            HeapError::Empty
        })
    }

    /// Drops every element, keeping the capacity and mode
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the heap, returning its elements in removal order
    ///
    /// Ascending for a min-heap, descending for a max-heap.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(value) = self.pop_root() {
            sorted.push(value);
        }
        sorted
    }

    fn pop_root(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        // swap_remove moves the last element into slot 0
        let root = self.data.swap_remove(0);
        self.sift_down(0);
        Some(root)
    }

    /// Compares the elements at `a` and `b` under the heap's polarity
    ///
    /// `Less` means the element at `a` belongs nearer the root than the one at `b`.
    #[inline]
    fn compare_at(&self, a: usize, b: usize) -> Ordering {
        self.mode.compare(&self.data[a], &self.data[b])
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.compare_at(index, parent) != Ordering::Less {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            let child = if right < len && self.compare_at(right, left) == Ordering::Less {
                right
            } else {
                left
            };

            if self.compare_at(child, index) != Ordering::Less {
                break;
            }
            self.data.swap(index, child);
            index = child;
        }
    }
}
