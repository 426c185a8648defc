//! Common traits and errors for the containers in this crate
//!
//! - [`ContainerError`]: the recoverable failures shared by the heap and the stacks
//! - [`Stack`]: the small capability interface every LIFO container implements
//!
//! Failures are always reported explicitly. A container never hands back a
//! default value in place of "nothing there", since default-valued elements
//! are legitimate contents.

use thiserror::Error;

/// Error type for container operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// An element was requested from a container that holds none
    #[error("container is empty")]
    EmptyContainer,
    /// A bounded container already holds `capacity` elements
    #[error("container is full (capacity {capacity})")]
    ContainerFull {
        /// The fixed capacity of the container that rejected the element
        capacity: usize,
    },
}

/// Base trait for last-in-first-out containers
///
/// Both the linked and the array-backed stacks implement this, so callers can
/// be written once against the capability rather than the representation.
///
/// # Example
///
/// ```rust
/// use ordered_containers::{ContainerError, Stack};
/// use ordered_containers::stack::BoundedStack;
///
/// let mut stack = BoundedStack::new(2);
/// stack.push("a").unwrap();
/// stack.push("b").unwrap();
///
/// assert_eq!(stack.push("c"), Err(ContainerError::ContainerFull { capacity: 2 }));
/// assert_eq!(stack.pop(), Ok("b"));
/// assert_eq!(stack.pop(), Ok("a"));
/// assert_eq!(stack.pop(), Err(ContainerError::EmptyContainer));
/// ```
pub trait Stack<T> {
    /// Places `value` on top of the stack
    ///
    /// # Errors
    /// Returns `ContainerError::ContainerFull` if the stack is bounded and
    /// already at capacity. The stack is left unchanged.
    ///
    /// # Time Complexity
    /// O(1)
    fn push(&mut self, value: T) -> Result<(), ContainerError>;

    /// Removes and returns the top element
    ///
    /// # Errors
    /// Returns `ContainerError::EmptyContainer` if there is nothing to pop.
    ///
    /// # Time Complexity
    /// O(1)
    fn pop(&mut self) -> Result<T, ContainerError>;

    /// Returns the top element without removing it
    fn peek(&self) -> Option<&T>;

    /// Returns the number of elements on the stack
    fn len(&self) -> usize;

    /// Returns true if the stack holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if a push would be rejected
    ///
    /// Always false for unbounded stacks.
    fn is_full(&self) -> bool;
}
