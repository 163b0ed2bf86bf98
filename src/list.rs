//! Owning doubly linked list
//!
//! A linear doubly linked list with O(1) push, pop, and peek at both ends.
//! Nodes are heap-allocated boxes wired together with `NonNull` pointers;
//! the list owns every node it links and frees them on drop.
//!
//! # Pointer invariants
//!
//! - `head` and `tail` are both `None` (empty) or both `Some`.
//! - `head`'s `prev` and `tail`'s `next` are always `None`.
//! - Every interior node's `next.prev` and `prev.next` point back at it.
//! - `len` equals the number of reachable nodes.
//!
//! Each `unsafe` block relies only on these invariants, which every public
//! method restores before returning.
//!
//! # Example
//!
//! ```rust
//! use ordered_containers::list::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.push_tail(1);
//! list.push_tail(2);
//! list.push_head(0);
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
//! assert_eq!(list.pop_head(), Ok(0));
//! assert_eq!(list.pop_tail(), Ok(2));
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::traits::{ContainerError, OrderedContainer};

struct Node<T> {
    value: T,
    prev: Option<NonNull<Node<T>>>,
    next: Option<NonNull<Node<T>>>,
}

impl<T> Node<T> {
    fn boxed(value: T) -> NonNull<Node<T>> {
        let node = Box::new(Node {
            value,
            prev: None,
            next: None,
        });
        NonNull::from(Box::leak(node))
    }
}

/// A doubly linked list with head and tail access
pub struct LinkedList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    /// The list logically owns `Box<Node<T>>` allocations.
    marker: PhantomData<Box<Node<T>>>,
}

impl<T> LinkedList<T> {
    /// Creates an empty list
    pub fn new() -> Self {
        LinkedList {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Returns the number of stored elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list holds no elements
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds an element at the head
    pub fn push_head(&mut self, value: T) {
        let mut node = Node::boxed(value);
        match self.head {
            Some(mut head) => unsafe {
                node.as_mut().next = Some(head);
                head.as_mut().prev = Some(node);
                self.head = Some(node);
            },
            None => {
                self.head = Some(node);
                self.tail = Some(node);
            }
        }
        self.len += 1;
    }

    /// Adds an element at the tail
    pub fn push_tail(&mut self, value: T) {
        let mut node = Node::boxed(value);
        match self.tail {
            Some(mut tail) => unsafe {
                node.as_mut().prev = Some(tail);
                tail.as_mut().next = Some(node);
                self.tail = Some(node);
            },
            None => {
                self.head = Some(node);
                self.tail = Some(node);
            }
        }
        self.len += 1;
    }

    /// Removes and returns the head element
    ///
    /// # Errors
    /// Returns [`ContainerError::Empty`] when the list has no elements.
    pub fn pop_head(&mut self) -> Result<T, ContainerError> {
        let head = self
            .head
            .ok_or(ContainerError::Empty { operation: "pop_head" })?;
        // Reclaim the box; the node came from Node::boxed and is only
        // reachable through this list.
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;
        match self.head {
            Some(mut new_head) => unsafe {
                new_head.as_mut().prev = None;
            },
            None => self.tail = None,
        }
        self.len -= 1;
        Ok(node.value)
    }

    /// Removes and returns the tail element
    ///
    /// # Errors
    /// Returns [`ContainerError::Empty`] when the list has no elements.
    pub fn pop_tail(&mut self) -> Result<T, ContainerError> {
        let tail = self
            .tail
            .ok_or(ContainerError::Empty { operation: "pop_tail" })?;
        let node = unsafe { Box::from_raw(tail.as_ptr()) };
        self.tail = node.prev;
        match self.tail {
            Some(mut new_tail) => unsafe {
                new_tail.as_mut().next = None;
            },
            None => self.head = None,
        }
        self.len -= 1;
        Ok(node.value)
    }

    /// Returns the head element without removing it
    ///
    /// # Errors
    /// Returns [`ContainerError::Empty`] when the list has no elements.
    pub fn peek_head(&self) -> Result<&T, ContainerError> {
        match self.head {
            Some(head) => Ok(unsafe { &head.as_ref().value }),
            None => Err(ContainerError::Empty {
                operation: "peek_head",
            }),
        }
    }

    /// Returns the tail element without removing it
    ///
    /// # Errors
    /// Returns [`ContainerError::Empty`] when the list has no elements.
    pub fn peek_tail(&self) -> Result<&T, ContainerError> {
        match self.tail {
            Some(tail) => Ok(unsafe { &tail.as_ref().value }),
            None => Err(ContainerError::Empty {
                operation: "peek_tail",
            }),
        }
    }

    /// Removes all elements
    pub fn clear(&mut self) {
        while self.pop_head().is_ok() {}
    }

    /// Returns an iterator from head to tail
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            remaining: self.len,
            marker: PhantomData,
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        LinkedList::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Head-to-tail iterator over a [`LinkedList`]
pub struct Iter<'a, T> {
    next: Option<NonNull<Node<T>>>,
    remaining: usize,
    marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        self.next.map(|node| {
            // The node outlives the iterator: it is owned by the list the
            // iterator borrows from.
            let node = unsafe { node.as_ref() };
            self.remaining -= 1;
            self.next = node.next;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> OrderedContainer<T> for LinkedList<T> {
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn push(&mut self, element: T) {
        LinkedList::push_head(self, element);
    }

    fn pop(&mut self) -> Result<T, ContainerError> {
        LinkedList::pop_head(self)
    }

    fn peek(&mut self) -> Result<&T, ContainerError> {
        LinkedList::peek_head(self)
    }

    fn clear(&mut self) {
        LinkedList::clear(self);
    }
}
