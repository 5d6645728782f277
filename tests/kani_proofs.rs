//! Kani verification proofs for bounded heap operations
//!
//! Kani is AWS's model checker for Rust. It can verify properties of Rust code
//! by checking all possible executions up to certain bounds.
//!
//! To run these proofs:
//!   cargo kani --tests

#[cfg(kani)]
use bounded_heap::{BoundedHeap, HeapError, HeapMode};

#[cfg(kani)]
fn any_mode() -> HeapMode {
    if kani::any() {
        HeapMode::Max
    } else {
        HeapMode::Min
    }
}

/// Proof that insert grows the length by one unless the heap is full
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_insert_respects_capacity() {
    let capacity: usize = kani::any();
    kani::assume(capacity <= 3);
    let mut heap: BoundedHeap<u8> = BoundedHeap::new(capacity, any_mode());

    for _ in 0..4 {
        let before = heap.len();
        let accepted = heap.insert(kani::any());
        if before == capacity {
            assert!(!accepted);
            assert!(heap.len() == before);
        } else {
            assert!(accepted);
            assert!(heap.len() == before + 1);
        }
        assert!(heap.len() <= capacity);
    }
}

/// Proof that peek and remove on an empty heap fail without side effects
#[cfg(kani)]
#[kani::proof]
fn verify_empty_access_fails() {
    let mut heap: BoundedHeap<u8> = BoundedHeap::new(kani::any::<u8>() as usize, any_mode());
    assert!(heap.peek() == Err(HeapError::Empty));
    assert!(heap.remove() == Err(HeapError::Empty));
    assert!(heap.is_empty());
}

/// Proof that the root is the extreme element and removal keeps it that way
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_root_is_extreme() {
    let mode = any_mode();
    let mut heap: BoundedHeap<u8> = BoundedHeap::new(4, mode);
    let values: [u8; 4] = kani::any();
    for v in values {
        heap.insert(v);
    }

    let mut previous: Option<u8> = None;
    while let Ok(root) = heap.remove() {
        for x in heap.as_slice() {
            assert!(mode.compare(&root, x) != std::cmp::Ordering::Greater);
        }
        if let Some(p) = previous {
            assert!(mode.compare(&p, &root) != std::cmp::Ordering::Greater);
        }
        previous = Some(root);
    }
}
