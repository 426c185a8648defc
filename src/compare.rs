//! Ordering direction and comparators for [`OrderedHeap`](crate::binary::OrderedHeap)
//!
//! A heap is parameterized by two things: a [`Comparator`] giving a total
//! order over its elements, and a [`HeapOrder`] saying whether the root holds
//! the least or the greatest element under that order.
//!
//! Any `Fn(&T, &T) -> Ordering` is a comparator, so ad hoc orderings need no
//! wrapper type:
//!
//! ```rust
//! use ordered_containers::{HeapOrder, OrderedHeap};
//!
//! // Order by magnitude, largest magnitude at the root
//! let mut heap = OrderedHeap::with_comparator(HeapOrder::Max, |a: &i32, b: &i32| {
//!     a.abs().cmp(&b.abs())
//! });
//! heap.insert(3);
//! heap.insert(-7);
//! heap.insert(5);
//! assert_eq!(heap.peek(), Some(&-7));
//! ```

use std::cmp::Ordering;

/// Which end of the order sits at the root of the heap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeapOrder {
    /// The root is the smallest element; extraction yields ascending order
    #[default]
    Min,
    /// The root is the largest element; extraction yields descending order
    Max,
}

impl HeapOrder {
    /// Returns true if an element comparing as `ordering` against another
    /// must sit strictly closer to the root than that other element.
    ///
    /// Equal elements never outrank each other, so sifting stops on ties.
    #[inline]
    pub fn outranks(self, ordering: Ordering) -> bool {
        match self {
            HeapOrder::Min => ordering == Ordering::Less,
            HeapOrder::Max => ordering == Ordering::Greater,
        }
    }

    /// The opposite direction
    pub fn reverse(self) -> Self {
        match self {
            HeapOrder::Min => HeapOrder::Max,
            HeapOrder::Max => HeapOrder::Min,
        }
    }
}

/// A total order over `T`
///
/// Implementations must be consistent for the lifetime of the heap that uses
/// them: the same pair of elements always compares the same way.
pub trait Comparator<T: ?Sized> {
    /// Compares `a` with `b`
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The comparator given by `T`'s own [`Ord`] implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
