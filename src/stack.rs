//! Vec-backed LIFO stack
//!
//! Newer elements have higher priority: last in, first out. Push, pop, and
//! peek are all O(1) (push amortized).

use crate::traits::{ContainerError, OrderedContainer};

/// A last-in, first-out stack
#[derive(Debug, Clone, Default)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Returns the number of stored elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the stack holds no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds an element to the top of the stack
    pub fn push(&mut self, element: T) {
        self.items.push(element);
    }

    /// Removes and returns the most recently pushed element
    ///
    /// # Errors
    /// Returns [`ContainerError::Empty`] when the stack has no elements.
    pub fn pop(&mut self) -> Result<T, ContainerError> {
        self.items
            .pop()
            .ok_or(ContainerError::Empty { operation: "pop" })
    }

    /// Returns the most recently pushed element without removing it
    ///
    /// # Errors
    /// Returns [`ContainerError::Empty`] when the stack has no elements.
    pub fn peek(&self) -> Result<&T, ContainerError> {
        self.items
            .last()
            .ok_or(ContainerError::Empty { operation: "peek" })
    }

    /// Removes all elements
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> OrderedContainer<T> for Stack<T> {
    fn len(&self) -> usize {
        Stack::len(self)
    }

    fn push(&mut self, element: T) {
        Stack::push(self, element);
    }

    fn pop(&mut self) -> Result<T, ContainerError> {
        Stack::pop(self)
    }

    fn peek(&mut self) -> Result<&T, ContainerError> {
        Stack::peek(self)
    }

    fn clear(&mut self) {
        Stack::clear(self);
    }
}
