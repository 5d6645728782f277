//! Heap ordering polarity
//!
//! A [`BoundedHeap`](crate::BoundedHeap) runs a single set of sift routines for
//! both orderings. The only place the ordering differs is [`HeapMode::orient`],
//! which flips the natural comparison for max-heaps so that "comes out first"
//! always means [`Ordering::Less`].

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseHeapModeError;

/// Which element a heap keeps at its root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeapMode {
    /// Smallest element at the root
    #[default]
    Min,
    /// Largest element at the root
    Max,
}

impl HeapMode {
    /// Applies this mode's polarity to a natural comparison result
    ///
    /// `Min` passes the ordering through; `Max` reverses it. `Equal` is
    /// unchanged either way.
    #[inline]
    pub fn orient(self, natural: Ordering) -> Ordering {
        match self {
            HeapMode::Min => natural,
            HeapMode::Max => natural.reverse(),
        }
    }

    /// Compares two values under this mode's polarity
    #[inline]
    pub fn compare<T: Ord + ?Sized>(self, a: &T, b: &T) -> Ordering {
        self.orient(a.cmp(b))
    }
}

impl fmt::Display for HeapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapMode::Min => f.write_str("min"),
            HeapMode::Max => f.write_str("max"),
        }
    }
}

impl FromStr for HeapMode {
    type Err = ParseHeapModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" | "min-heap" | "minheap" => Ok(HeapMode::Min),
            "max" | "max-heap" | "maxheap" => Ok(HeapMode::Max),
            _ => Err(ParseHeapModeError {
                input: s.to_string(),
            }),
        }
    }
}
