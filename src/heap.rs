//! Comparator-driven binary heap
//!
//! An array-backed binary tree priority queue. Unlike
//! `std::collections::BinaryHeap`, which requires `T: Ord` and is always a
//! max-heap over the natural order, this heap takes an arbitrary comparison
//! function at construction and orders elements by the priority it defines.
//! Any type is usable as long as a matching comparator is supplied, and the
//! same type can be heaped in different orders (min-heap over numbers,
//! records ranked by a secondary field, and so on).
//!
//! # Time Complexity
//!
//! | Operation | Complexity           |
//! |-----------|----------------------|
//! | `push`    | O(log n) amortized   |
//! | `pop`     | O(log n)             |
//! | `peek`    | O(1)                 |
//! | `replace` | O(log n)             |
//! | `len`     | O(1)                 |
//!
//! # Example
//!
//! ```rust
//! use ordered_containers::heap::Heap;
//!
//! // Min-heap: the smaller number outranks the larger one.
//! let mut heap = Heap::new(|a: &i32, b: &i32| b.cmp(a));
//! heap.push(5);
//! heap.push(1);
//! heap.push(3);
//!
//! assert_eq!(heap.peek(), Ok(&1));
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Ok(3));
//! assert_eq!(heap.pop(), Ok(5));
//! assert!(heap.pop().is_err());
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::traits::{ContainerError, OrderedContainer};

/// An array-backed binary heap ordered by a caller-supplied comparator
///
/// The comparator returns [`Ordering::Greater`] when its first argument has
/// higher priority than its second, [`Ordering::Equal`] for ties, and
/// [`Ordering::Less`] otherwise. The element reachable through [`peek`] and
/// [`pop`] is the one no other element outranks.
///
/// Heap invariant: for every index `i > 0`, the element at `parent(i)` is
/// not outranked by the element at `i`. Ties between a parent and a child
/// are fine.
///
/// The comparator must be consistent (the same inputs always yield the same
/// ordering) for the lifetime of the heap; an inconsistent comparator can
/// leave elements in an arbitrary order but never causes memory unsafety.
///
/// [`peek`]: Heap::peek
/// [`pop`]: Heap::pop
pub struct Heap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Dense zero-based array encoding of the binary tree
    data: Vec<T>,
    compare: C,
}

impl<T, C> Heap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty heap ordered by `compare`
    pub fn new(compare: C) -> Self {
        Heap {
            data: Vec::new(),
            compare,
        }
    }

    /// Creates an empty heap with space reserved for `capacity` elements
    pub fn with_capacity(compare: C, capacity: usize) -> Self {
        Heap {
            data: Vec::with_capacity(capacity),
            compare,
        }
    }

    /// Returns the number of stored elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the highest-priority element without removing it
    ///
    /// # Errors
    /// Returns [`ContainerError::Empty`] when the heap has no elements.
    pub fn peek(&self) -> Result<&T, ContainerError> {
        self.data
            .first()
            .ok_or(ContainerError::Empty { operation: "peek" })
    }

    /// Adds an element to the heap
    ///
    /// The element is appended to the backing storage and bubbled up until
    /// it no longer outranks its parent. O(log n) amortized.
    pub fn push(&mut self, element: T) {
        self.data.push(element);
        self.bubble_up(self.data.len() - 1);
    }

    /// Removes and returns the highest-priority element
    ///
    /// The last element moves into the root slot and is bubbled down until
    /// neither child outranks it. O(log n).
    ///
    /// # Errors
    /// Returns [`ContainerError::Empty`] when the heap has no elements.
    pub fn pop(&mut self) -> Result<T, ContainerError> {
        if self.data.is_empty() {
            return Err(ContainerError::Empty { operation: "pop" });
        }
        // Moves the last element into index 0 and shrinks by one. For a
        // single-element heap this just drains the storage.
        let top = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.bubble_down(0);
        }
        Ok(top)
    }

    /// Overwrites the current top with `element` and restores the invariant
    ///
    /// On an empty heap this is equivalent to [`push`](Heap::push). The
    /// eviction is unconditional: the incoming element is kept even when it
    /// ranks below the element it displaces. Fixed-capacity top-k selection
    /// relies on this to trade the current top for each candidate; callers
    /// that only want an improvement must compare against
    /// [`peek`](Heap::peek) first.
    pub fn replace(&mut self, element: T) {
        match self.data.first_mut() {
            Some(top) => {
                *top = element;
                self.bubble_down(0);
            }
            None => self.push(element),
        }
    }

    /// Removes all elements
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the backing storage in heap order
    ///
    /// The slice is the dense array encoding of the tree, not the priority
    /// order; only `slice[0]` is meaningful as "the top". Exposed so callers
    /// and tests can observe the invariant directly.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Index of the parent of `i` in the zero-based array encoding
    ///
    /// Only valid for `i > 0`; the root has no parent.
    fn parent(i: usize) -> usize {
        (i - 1) / 2
    }

    /// Index of the left child of `i`
    fn left(i: usize) -> usize {
        2 * i + 1
    }

    /// Index of the right child of `i`
    fn right(i: usize) -> usize {
        2 * i + 2
    }

    /// Compares the elements at two indices
    ///
    /// Out-of-range indices mean the repair logic itself is broken, so this
    /// asserts rather than returning a recoverable error.
    fn compare_at(&self, a: usize, b: usize, operation: &'static str) -> Ordering {
        self.check_index(a, operation);
        self.check_index(b, operation);
        (self.compare)(&self.data[a], &self.data[b])
    }

    fn check_index(&self, index: usize, operation: &'static str) {
        if index >= self.data.len() {
            panic!(
                "{}",
                ContainerError::InvariantViolation {
                    operation,
                    index,
                    len: self.data.len(),
                }
            );
        }
    }

    /// Moves the element at `index` toward the root while it outranks its
    /// parent
    ///
    /// Bounded by tree height, so O(log n) with no call-stack growth.
    fn bubble_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = Self::parent(index);
            if self.compare_at(index, parent, "bubble_up") == Ordering::Greater {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Moves the element at `index` toward the leaves while either child
    /// outranks it
    ///
    /// When both children outrank the parent, the swap goes to the
    /// higher-or-equal-ranked child, so a single pass never has to revisit
    /// a sibling.
    fn bubble_down(&mut self, mut index: usize) {
        loop {
            let left = Self::left(index);
            let right = Self::right(index);
            if left >= self.data.len() {
                // Leaf node.
                break;
            }
            if right >= self.data.len() {
                // The left child is the final node in the tree, necessarily
                // a leaf, so one swap settles it.
                if self.compare_at(index, left, "bubble_down") == Ordering::Less {
                    self.data.swap(index, left);
                }
                break;
            }
            let parent_left = self.compare_at(index, left, "bubble_down");
            let parent_right = self.compare_at(index, right, "bubble_down");
            let left_right = self.compare_at(left, right, "bubble_down");
            if parent_left == Ordering::Less && left_right != Ordering::Less {
                // Left outranks the parent and is at least as high-ranked
                // as right.
                self.data.swap(index, left);
                index = left;
            } else if parent_right == Ordering::Less && left_right != Ordering::Greater {
                self.data.swap(index, right);
                index = right;
            } else {
                // Neither child outranks the parent.
                break;
            }
        }
    }
}

impl<T, C> OrderedContainer<T> for Heap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn len(&self) -> usize {
        Heap::len(self)
    }

    fn push(&mut self, element: T) {
        Heap::push(self, element);
    }

    fn pop(&mut self) -> Result<T, ContainerError> {
        Heap::pop(self)
    }

    fn peek(&mut self) -> Result<&T, ContainerError> {
        Heap::peek(self)
    }

    fn clear(&mut self) {
        Heap::clear(self);
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Heap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl<T: Clone, C: Clone> Clone for Heap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn clone(&self) -> Self {
        Heap {
            data: self.data.clone(),
            compare: self.compare.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn min_heap() -> Heap<i32, fn(&i32, &i32) -> Ordering> {
        Heap::new(|a, b| b.cmp(a))
    }

    fn max_heap() -> Heap<i32, fn(&i32, &i32) -> Ordering> {
        Heap::new(|a, b| a.cmp(b))
    }

    /// Asserts the heap property over the raw array encoding.
    fn assert_invariant<C: Fn(&i32, &i32) -> Ordering>(heap: &Heap<i32, C>) {
        let slice = heap.as_slice();
        for i in 1..slice.len() {
            let parent = (i - 1) / 2;
            assert_ne!(
                (heap.compare)(&slice[parent], &slice[i]),
                Ordering::Less,
                "child at {i} outranks parent at {parent}: {slice:?}"
            );
        }
    }

    #[test]
    fn min_heap_scenario() {
        let mut heap = min_heap();
        for n in [5, 3, 8, 1, 4] {
            heap.push(n);
        }
        assert_eq!(heap.len(), 5);
        assert_eq!(heap.peek(), Ok(&1));
        for expected in [1, 3, 4, 5, 8] {
            assert_eq!(heap.pop(), Ok(expected));
        }
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.peek(), Err(ContainerError::Empty { operation: "peek" }));
        assert_eq!(heap.pop(), Err(ContainerError::Empty { operation: "pop" }));
    }

    #[test]
    fn empty_heap_errors() {
        let mut heap = min_heap();
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), Err(ContainerError::Empty { operation: "peek" }));
        assert_eq!(heap.pop(), Err(ContainerError::Empty { operation: "pop" }));
    }

    #[test]
    fn peek_matches_next_pop() {
        let mut heap = max_heap();
        for n in [2, 9, 4, 7, 7, 1] {
            heap.push(n);
        }
        while !heap.is_empty() {
            let expected = *heap.peek().unwrap();
            assert_eq!(heap.pop(), Ok(expected));
        }
    }

    // Regression guard for the parent-index formula: with parent(i) = i / 2
    // (one-based arithmetic on a zero-based array), index 2 computes parent
    // 1 instead of 0 and bubble-up compares against the wrong node. The
    // invariant at indices 1 and 2 is where that first shows up.
    #[test]
    fn parent_formula_holds_at_first_two_children() {
        let mut heap = min_heap();
        for n in (0..16).rev() {
            heap.push(n);
            let slice = heap.as_slice();
            if slice.len() > 1 {
                assert!(slice[0] <= slice[1], "index 1 outranks root: {slice:?}");
            }
            if slice.len() > 2 {
                assert!(slice[0] <= slice[2], "index 2 outranks root: {slice:?}");
            }
            assert_invariant(&heap);
        }
    }

    #[test]
    fn invariant_survives_mixed_operations() {
        let mut heap = min_heap();
        for n in [12, -3, 7, 7, 0, 25, -3, 4] {
            heap.push(n);
            assert_invariant(&heap);
        }
        heap.pop().unwrap();
        assert_invariant(&heap);
        heap.replace(100);
        assert_invariant(&heap);
        heap.replace(-100);
        assert_invariant(&heap);
        assert_eq!(heap.peek(), Ok(&-100));
    }

    #[test]
    fn ties_pop_after_the_outranking_element() {
        // Three equal elements plus one that outranks them all; the
        // outranking element must come first, the ties in any order.
        let mut heap = min_heap();
        for n in [7, 7, 1, 7] {
            heap.push(n);
        }
        assert_eq!(heap.pop(), Ok(1));
        assert_eq!(heap.pop(), Ok(7));
        assert_eq!(heap.pop(), Ok(7));
        assert_eq!(heap.pop(), Ok(7));
    }

    #[test]
    fn replace_on_empty_heap_pushes() {
        let mut heap = min_heap();
        heap.replace(42);
        assert_eq!(heap.len(), 1);
        assert_eq!(heap.peek(), Ok(&42));
    }

    #[test]
    fn replace_evicts_unconditionally() {
        let mut heap = max_heap();
        heap.push(1);
        heap.push(2);
        // 9 ranks above the evicted top; it must still take its place.
        heap.replace(9);
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.peek(), Ok(&9));
        // The incoming element may also rank below everything already
        // stored; it is kept regardless.
        heap.replace(0);
        assert_eq!(heap.len(), 2);
        assert_invariant(&heap);
        assert_eq!(heap.pop(), Ok(1));
        assert_eq!(heap.pop(), Ok(0));
    }

    #[test]
    fn replace_keeps_size_constant() {
        let mut heap = min_heap();
        for n in 0..10 {
            heap.push(n);
        }
        heap.replace(5);
        assert_eq!(heap.len(), 10);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut heap = min_heap();
        heap.clear();
        assert_eq!(heap.len(), 0);
        for n in 0..8 {
            heap.push(n);
        }
        heap.clear();
        assert_eq!(heap.len(), 0);
        assert!(heap.pop().is_err());
        heap.clear();
        assert_eq!(heap.len(), 0);
    }

    #[test]
    fn size_tracks_pushes_and_pops() {
        let mut heap = min_heap();
        for n in 0..20 {
            heap.push(n);
            assert_eq!(heap.len(), (n + 1) as usize);
        }
        for n in (0..20).rev() {
            heap.pop().unwrap();
            assert_eq!(heap.len(), n as usize);
        }
    }

    #[test]
    fn comparator_over_record_field() {
        struct Task {
            name: &'static str,
            urgency: u32,
        }
        let mut heap = Heap::new(|a: &Task, b: &Task| a.urgency.cmp(&b.urgency));
        heap.push(Task { name: "low", urgency: 1 });
        heap.push(Task { name: "high", urgency: 10 });
        heap.push(Task { name: "mid", urgency: 5 });
        assert_eq!(heap.pop().unwrap().name, "high");
        assert_eq!(heap.pop().unwrap().name, "mid");
        assert_eq!(heap.pop().unwrap().name, "low");
    }

    #[test]
    fn with_capacity_starts_empty() {
        let heap: Heap<i32, _> = Heap::with_capacity(|a: &i32, b: &i32| b.cmp(a), 64);
        assert!(heap.is_empty());
    }
}
