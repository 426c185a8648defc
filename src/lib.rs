//! Ordered containers for Rust
//!
//! This crate provides a binary heap with a configurable ordering direction
//! and a pair of last-in-first-out stacks.
//!
//! # Features
//!
//! - **Ordered Heap**: array-backed binary heap, min or max chosen at construction,
//!   O(log n) insert and extract, O(n) construction from a sequence, pluggable comparator
//! - **Linked Stack**: unbounded LIFO stack over a singly linked list
//! - **Bounded Stack**: fixed-capacity LIFO stack over a contiguous array
//!
//! Removing from an empty container is reported as
//! [`ContainerError::EmptyContainer`] rather than a default value.
//!
//! # Example
//!
//! ```rust
//! use ordered_containers::{HeapOrder, OrderedHeap};
//!
//! let mut heap = OrderedHeap::from_vec(vec![2, 9, 4, 7], HeapOrder::Max);
//! assert_eq!(heap.peek(), Some(&9));
//!
//! heap.insert(11);
//! assert_eq!(heap.extract_root(), Ok(11));
//! assert_eq!(heap.into_sorted_vec(), vec![9, 7, 4, 2]);
//! ```

pub mod binary;
pub mod compare;
pub mod stack;
pub mod traits;

// Re-export the main types for convenience
pub use binary::OrderedHeap;
pub use compare::{Comparator, HeapOrder, NaturalOrder};
pub use traits::{ContainerError, Stack};
