//! Two-stack FIFO queue
//!
//! Older elements have higher priority: first in, first out. Elements enter
//! through a `back` vector and leave through a `front` vector; when `front`
//! drains, `back` is reversed onto it in one O(n) rebalance. Every element
//! is moved at most twice, so `push`, `pop`, and `peek` are amortized O(1).
//!
//! `peek` takes `&mut self` because it may trigger the rebalance.

use crate::traits::{ContainerError, OrderedContainer};

/// A first-in, first-out queue
#[derive(Debug, Clone, Default)]
pub struct Queue<T> {
    /// Exit side, stored oldest-last so the next element pops off the end
    front: Vec<T>,
    /// Entry side, stored in insertion order
    back: Vec<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue
    pub fn new() -> Self {
        Queue {
            front: Vec::new(),
            back: Vec::new(),
        }
    }

    /// Returns the number of stored elements
    pub fn len(&self) -> usize {
        self.front.len() + self.back.len()
    }

    /// Returns true if the queue holds no elements
    pub fn is_empty(&self) -> bool {
        self.front.is_empty() && self.back.is_empty()
    }

    /// Adds an element to the back of the queue
    pub fn push(&mut self, element: T) {
        self.back.push(element);
    }

    /// Removes and returns the oldest element
    ///
    /// # Errors
    /// Returns [`ContainerError::Empty`] when the queue has no elements.
    pub fn pop(&mut self) -> Result<T, ContainerError> {
        self.rebalance();
        self.front
            .pop()
            .ok_or(ContainerError::Empty { operation: "pop" })
    }

    /// Returns the oldest element without removing it
    ///
    /// # Errors
    /// Returns [`ContainerError::Empty`] when the queue has no elements.
    pub fn peek(&mut self) -> Result<&T, ContainerError> {
        self.rebalance();
        self.front
            .last()
            .ok_or(ContainerError::Empty { operation: "peek" })
    }

    /// Removes all elements
    pub fn clear(&mut self) {
        self.front.clear();
        self.back.clear();
    }

    /// Reverses the back onto an empty front
    ///
    /// Puts the oldest elements at the end of `front`, where they pop off
    /// in insertion order.
    fn rebalance(&mut self) {
        if self.front.is_empty() {
            self.back.reverse();
            std::mem::swap(&mut self.front, &mut self.back);
        }
    }
}

impl<T> OrderedContainer<T> for Queue<T> {
    fn len(&self) -> usize {
        Queue::len(self)
    }

    fn push(&mut self, element: T) {
        Queue::push(self, element);
    }

    fn pop(&mut self) -> Result<T, ContainerError> {
        Queue::pop(self)
    }

    fn peek(&mut self) -> Result<&T, ContainerError> {
        Queue::peek(self)
    }

    fn clear(&mut self) {
        Queue::clear(self);
    }
}
