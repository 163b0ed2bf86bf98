//! Ordered in-memory containers
//!
//! This crate provides a small family of generic containers built around a
//! shared push/pop surface:
//!
//! - **[`Heap`]**: array-backed binary priority queue ordered by a
//!   caller-supplied comparator; O(1) peek, O(log n) push and pop
//! - **[`Stack`](stack::Stack)**: Vec-backed LIFO; O(1) push, pop, and peek
//! - **[`Queue`](queue::Queue)**: two-stack FIFO; amortized O(1) push, pop,
//!   and peek
//! - **[`LinkedList`](list::LinkedList)**: owning doubly linked list with
//!   O(1) access at both ends
//!
//! The heap is the centerpiece: it takes a comparison function instead of
//! requiring `T: Ord`, so one element type can be ranked different ways.
//! All four containers implement [`OrderedContainer`] and report failed
//! peeks and pops through the same [`ContainerError`] type.
//!
//! # Example
//!
//! ```rust
//! use ordered_containers::Heap;
//!
//! // Min-heap over numbers: smaller outranks larger.
//! let mut heap = Heap::new(|a: &u32, b: &u32| b.cmp(a));
//! for n in [5, 3, 8, 1, 4] {
//!     heap.push(n);
//! }
//!
//! assert_eq!(heap.peek(), Ok(&1));
//! let drained: Vec<u32> = std::iter::from_fn(|| heap.pop().ok()).collect();
//! assert_eq!(drained, vec![1, 3, 4, 5, 8]);
//! ```
//!
//! The containers are single-threaded; callers sharing one across threads
//! must wrap it in their own lock.

pub mod heap;
pub mod list;
pub mod queue;
pub mod stack;
pub mod traits;

// Re-export the central types for convenience
pub use heap::Heap;
pub use traits::{ContainerError, OrderedContainer};
