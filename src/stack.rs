//! Last-in-first-out stacks
//!
//! Two representations implement the [`Stack`] capability:
//!
//! - [`LinkedStack`]: a singly linked list of boxed nodes, unbounded
//! - [`BoundedStack`]: a contiguous array with a capacity fixed at construction
//!
//! [`LinearStack`] wraps either one behind a single type. The representation
//! is picked by the constructor and never changes afterwards.
//!
//! # Example
//!
//! ```rust
//! use ordered_containers::{ContainerError, Stack};
//! use ordered_containers::stack::LinearStack;
//!
//! let mut unbounded = LinearStack::unbounded();
//! let mut bounded = LinearStack::bounded(1);
//!
//! unbounded.push(1).unwrap();
//! unbounded.push(2).unwrap();
//! assert_eq!(unbounded.pop(), Ok(2));
//!
//! bounded.push(1).unwrap();
//! assert_eq!(bounded.push(2), Err(ContainerError::ContainerFull { capacity: 1 }));
//! ```

use std::fmt;

use tracing::trace;

use crate::traits::{ContainerError, Stack};

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// An unbounded stack backed by a singly linked list
///
/// Push never fails. Each element lives in its own heap allocation, so pushes
/// never move existing elements.
pub struct LinkedStack<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> LinkedStack<T> {
    /// Creates an empty stack
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns an iterator from the top of the stack to the bottom
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Stack<T> for LinkedStack<T> {
    fn push(&mut self, value: T) -> Result<(), ContainerError> {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    fn pop(&mut self) -> Result<T, ContainerError> {
        let node = self.head.take().ok_or(ContainerError::EmptyContainer)?;
        let Node { value, next } = *node;
        self.head = next;
        self.len -= 1;
        Ok(value)
    }

    fn peek(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn is_full(&self) -> bool {
        false
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        // Unlink iteratively; the default recursive drop overflows on long chains
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over a [`LinkedStack`], top first
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

/// A stack backed by a contiguous array of fixed capacity
///
/// The whole array is allocated up front; push on a full stack is rejected
/// with [`ContainerError::ContainerFull`].
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    /// Bottom of the stack at index 0, top at the end
    data: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Creates an empty stack that holds at most `capacity` elements
    pub fn new(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the maximum number of elements the stack can hold
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns an iterator from the top of the stack to the bottom
    pub fn iter(&self) -> std::iter::Rev<std::slice::Iter<'_, T>> {
        self.data.iter().rev()
    }
}

impl<T> Stack<T> for BoundedStack<T> {
    fn push(&mut self, value: T) -> Result<(), ContainerError> {
        if self.data.len() == self.capacity {
            trace!(capacity = self.capacity, "rejected push on full stack");
            return Err(ContainerError::ContainerFull {
                capacity: self.capacity,
            });
        }
        self.data.push(value);
        Ok(())
    }

    fn pop(&mut self) -> Result<T, ContainerError> {
        self.data.pop().ok_or(ContainerError::EmptyContainer)
    }

    fn peek(&self) -> Option<&T> {
        self.data.last()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }
}

/// A stack whose representation is chosen at construction
#[derive(Debug)]
pub enum LinearStack<T> {
    /// Unbounded, linked-list backed
    Linked(LinkedStack<T>),
    /// Fixed-capacity, array backed
    Bounded(BoundedStack<T>),
}

impl<T> LinearStack<T> {
    /// Creates an unbounded stack
    pub fn unbounded() -> Self {
        LinearStack::Linked(LinkedStack::new())
    }

    /// Creates a stack that holds at most `capacity` elements
    pub fn bounded(capacity: usize) -> Self {
        LinearStack::Bounded(BoundedStack::new(capacity))
    }

    /// Returns the capacity bound, or `None` for an unbounded stack
    pub fn capacity(&self) -> Option<usize> {
        match self {
            LinearStack::Linked(_) => None,
            LinearStack::Bounded(stack) => Some(stack.capacity()),
        }
    }
}

impl<T> Stack<T> for LinearStack<T> {
    fn push(&mut self, value: T) -> Result<(), ContainerError> {
        match self {
            LinearStack::Linked(stack) => stack.push(value),
            LinearStack::Bounded(stack) => stack.push(value),
        }
    }

    fn pop(&mut self) -> Result<T, ContainerError> {
        match self {
            LinearStack::Linked(stack) => stack.pop(),
            LinearStack::Bounded(stack) => stack.pop(),
        }
    }

    fn peek(&self) -> Option<&T> {
        match self {
            LinearStack::Linked(stack) => stack.peek(),
            LinearStack::Bounded(stack) => stack.peek(),
        }
    }

    fn len(&self) -> usize {
        match self {
            LinearStack::Linked(stack) => stack.len(),
            LinearStack::Bounded(stack) => stack.len(),
        }
    }

    fn is_full(&self) -> bool {
        match self {
            LinearStack::Linked(stack) => stack.is_full(),
            LinearStack::Bounded(stack) => stack.is_full(),
        }
    }
}

impl<T> Default for LinearStack<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}
