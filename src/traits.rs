//! Common trait and error type for the containers in this crate
//!
//! Every container exposes the same push/pop-shaped surface through
//! [`OrderedContainer`], so code that consumes elements in *some* defined
//! order can be written once and handed a heap, a stack, a queue, or a
//! linked list. Which order that is (priority, LIFO, FIFO) belongs to the
//! concrete type.
//!
//! Fallible operations share a single error type, [`ContainerError`].

use std::fmt;

/// Error type for container operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerError {
    /// The container has no elements to peek at or remove
    Empty {
        /// Name of the operation that was attempted
        operation: &'static str,
    },
    /// Internal index arithmetic produced an index outside the backing storage
    ///
    /// This is a programming error, not a recoverable condition: it is only
    /// ever constructed to format the message of an internal assertion.
    InvariantViolation {
        /// Name of the operation whose repair step went out of range
        operation: &'static str,
        /// The offending index
        index: usize,
        /// Number of elements in the backing storage at the time
        len: usize,
    },
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerError::Empty { operation } => {
                write!(f, "cannot {operation}: container is empty")
            }
            ContainerError::InvariantViolation {
                operation,
                index,
                len,
            } => {
                write!(
                    f,
                    "invariant violation during {operation}: index {index} out of range for length {len}"
                )
            }
        }
    }
}

impl std::error::Error for ContainerError {}

/// Push/pop-shaped surface shared by all containers in this crate
///
/// The removal order is defined by the implementing type:
///
/// | Container                                | Order               |
/// |------------------------------------------|---------------------|
/// | [`Heap`](crate::heap::Heap)              | comparator priority |
/// | [`Stack`](crate::stack::Stack)           | LIFO                |
/// | [`Queue`](crate::queue::Queue)           | FIFO                |
/// | [`LinkedList`](crate::list::LinkedList)  | LIFO (head end)     |
///
/// `peek` takes `&mut self` because amortized containers may need to
/// reorganize their storage to locate the next element; see
/// [`Queue`](crate::queue::Queue).
pub trait OrderedContainer<T> {
    /// Returns the number of stored elements
    fn len(&self) -> usize;

    /// Returns true if the container holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds an element to the container
    fn push(&mut self, element: T);

    /// Removes and returns the next element in the container's order
    ///
    /// # Errors
    /// Returns [`ContainerError::Empty`] when the container has no elements.
    fn pop(&mut self) -> Result<T, ContainerError>;

    /// Returns the next element without removing it
    ///
    /// # Errors
    /// Returns [`ContainerError::Empty`] when the container has no elements.
    fn peek(&mut self) -> Result<&T, ContainerError>;

    /// Removes all elements
    fn clear(&mut self);
}
