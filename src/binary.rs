//! Array-backed binary heap with configurable min/max ordering
//!
//! [`OrderedHeap`] stores its elements in a `Vec` laid out as a complete
//! binary tree: the children of slot `i` live at `2i + 1` and `2i + 2`.
//! Whether the root holds the least or the greatest element is chosen once,
//! at construction, through [`HeapOrder`].
//!
//! # Time Complexity
//!
//! | Operation      | Complexity         |
//! |----------------|--------------------|
//! | `insert`       | O(log n) amortized |
//! | `extract_root` | O(log n)           |
//! | `peek`         | O(1)               |
//! | `from_vec`     | O(n)               |
//!
//! # Example
//!
//! ```rust
//! use ordered_containers::{ContainerError, HeapOrder, OrderedHeap};
//!
//! let mut heap = OrderedHeap::new(HeapOrder::Min);
//! for value in [5, 3, 8, 1, 4] {
//!     heap.insert(value);
//! }
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.extract_root(), Ok(1));
//! assert_eq!(heap.extract_root(), Ok(3));
//! assert_eq!(heap.len(), 3);
//!
//! let mut empty: OrderedHeap<i32> = OrderedHeap::new(HeapOrder::Max);
//! assert_eq!(empty.extract_root(), Err(ContainerError::EmptyContainer));
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::compare::{Comparator, HeapOrder, NaturalOrder};
use crate::traits::ContainerError;

/// Capacity allocated by [`OrderedHeap::new`]
pub const DEFAULT_CAPACITY: usize = 32;

/// A binary heap whose root is the minimum or maximum under a comparator
///
/// The heap property holds after every public method returns: each parent
/// ranks no worse than its children under `order`. Storage grows by doubling
/// when full and is never shrunk.
#[derive(Clone)]
pub struct OrderedHeap<T, C = NaturalOrder> {
    /// Complete binary tree in level order; `data.len()` is the heap size
    data: Vec<T>,
    order: HeapOrder,
    comparator: C,
}

impl<T: Ord> OrderedHeap<T> {
    /// Creates an empty heap with [`DEFAULT_CAPACITY`] slots
    pub fn new(order: HeapOrder) -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, order)
    }

    /// Creates an empty heap with room for `capacity` elements before growing
    pub fn with_capacity(capacity: usize, order: HeapOrder) -> Self {
        Self::with_capacity_and_comparator(capacity, order, NaturalOrder)
    }

    /// Creates an empty min-heap
    pub fn min_heap() -> Self {
        Self::new(HeapOrder::Min)
    }

    /// Creates an empty max-heap
    pub fn max_heap() -> Self {
        Self::new(HeapOrder::Max)
    }

    /// Takes ownership of `elements` and arranges them into a heap
    ///
    /// # Time Complexity
    /// O(n)
    pub fn from_vec(elements: Vec<T>, order: HeapOrder) -> Self {
        Self::from_vec_with_comparator(elements, order, NaturalOrder)
    }

    /// Copies `elements` into a new heap
    pub fn from_slice(elements: &[T], order: HeapOrder) -> Self
    where
        T: Clone,
    {
        Self::from_vec(elements.to_vec(), order)
    }
}

impl<T, C: Comparator<T>> OrderedHeap<T, C> {
    /// Creates an empty heap ordered by `comparator`
    pub fn with_comparator(order: HeapOrder, comparator: C) -> Self {
        Self::with_capacity_and_comparator(DEFAULT_CAPACITY, order, comparator)
    }

    /// Creates an empty heap ordered by `comparator` with room for `capacity` elements
    pub fn with_capacity_and_comparator(capacity: usize, order: HeapOrder, comparator: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            order,
            comparator,
        }
    }

    /// Takes ownership of `elements` and arranges them into a heap under `comparator`
    pub fn from_vec_with_comparator(elements: Vec<T>, order: HeapOrder, comparator: C) -> Self {
        let mut heap = Self {
            data: elements,
            order,
            comparator,
        };
        heap.build();
        heap
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of elements the heap can hold before it must grow
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the ordering direction fixed at construction
    pub fn order(&self) -> HeapOrder {
        self.order
    }

    /// Returns the root element without removing it
    ///
    /// This is the minimum for a [`HeapOrder::Min`] heap and the maximum for
    /// a [`HeapOrder::Max`] heap.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) amortized. Growth copies the storage once per doubling.
    pub fn insert(&mut self, value: T) {
        if self.data.len() == self.data.capacity() {
            self.grow();
        }
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the root element
    ///
    /// # Errors
    /// Returns `ContainerError::EmptyContainer` if the heap is empty; the
    /// heap is left untouched.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn extract_root(&mut self) -> Result<T, ContainerError> {
        if self.data.is_empty() {
            return Err(ContainerError::EmptyContainer);
        }

        // Moves the last element into the root slot
        let root = self.data.swap_remove(0);

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Ok(root)
    }

    /// Returns an iterator over the elements in storage order
    ///
    /// Storage order is level order of the tree, not sorted order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap, returning its storage in level order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements in extraction order
    ///
    /// Ascending for a min-heap, descending for a max-heap.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(value) = self.extract_root() {
            sorted.push(value);
        }
        sorted
    }

    /// Returns an iterator that extracts the root until the heap is empty
    ///
    /// Elements not consumed by the iterator stay in the heap.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, C> {
        DrainSorted { heap: self }
    }

    /// Checks the heap property over every parent/child pair
    pub fn is_valid_heap(&self) -> bool {
        (1..self.data.len()).all(|child| !self.outranks(child, (child - 1) / 2))
    }

    /// Returns true if the element at `a` must sit strictly above the element at `b`
    #[inline]
    fn outranks(&self, a: usize, b: usize) -> bool {
        self.order
            .outranks(self.comparator.compare(&self.data[a], &self.data[b]))
    }

    /// Doubles the storage capacity ahead of an append
    fn grow(&mut self) {
        let old_capacity = self.data.capacity();
        let additional = old_capacity.max(1);
        self.data.reserve_exact(additional);
        trace!(
            old_capacity,
            new_capacity = self.data.capacity(),
            "grew heap storage"
        );
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.outranks(index, parent) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    ///
    /// Of two equally ranked children the left one is chosen.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            let mut child = left;
            if right < len && self.outranks(right, left) {
                child = right;
            }

            if self.outranks(child, index) {
                self.data.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }

    /// Establishes the heap property over arbitrarily ordered storage
    ///
    /// Internal nodes are visited from the last one back to the root so that
    /// both subtrees of a node are heaps by the time it is sifted.
    fn build(&mut self) {
        let len = self.data.len();
        if len < 2 {
            return;
        }
        debug!(len, order = ?self.order, "building heap from sequence");
        for index in (0..len / 2).rev() {
            self.sift_down(index);
        }
    }
}

impl<T: fmt::Display, C> OrderedHeap<T, C> {
    /// Renders the occupied slots in storage order, separated by spaces
    ///
    /// Intended for debugging; the format is not stable.
    pub fn dump(&self) -> String {
        self.to_string()
    }
}

impl<T: Ord> Default for OrderedHeap<T> {
    fn default() -> Self {
        Self::new(HeapOrder::default())
    }
}

impl<T, C: Comparator<T>> Extend<T> for OrderedHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, C: Comparator<T>> IntoIterator for &'a OrderedHeap<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display, C> fmt::Display for OrderedHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for OrderedHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedHeap")
            .field("order", &self.order)
            .field("data", &self.data)
            .finish()
    }
}

/// Iterator returned by [`OrderedHeap::drain_sorted`]
pub struct DrainSorted<'a, T, C: Comparator<T>> {
    heap: &'a mut OrderedHeap<T, C>,
}

impl<T, C: Comparator<T>> Iterator for DrainSorted<'_, T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.extract_root().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, C: Comparator<T>> ExactSizeIterator for DrainSorted<'_, T, C> {}
