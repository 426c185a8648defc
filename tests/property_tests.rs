//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify
//! that the heap and stack invariants are always maintained.

use proptest::prelude::*;
use ordered_containers::stack::{BoundedStack, LinearStack, LinkedStack};
use ordered_containers::{ContainerError, HeapOrder, OrderedHeap, Stack};

fn order_strategy() -> impl Strategy<Value = HeapOrder> {
    prop_oneof![Just(HeapOrder::Min), Just(HeapOrder::Max)]
}

fn sorted_for(order: HeapOrder, mut values: Vec<i32>) -> Vec<i32> {
    values.sort();
    if order == HeapOrder::Max {
        values.reverse();
    }
    values
}

/// Test that insert and extract keep the heap property and the right root
fn test_insert_extract_invariant(order: HeapOrder, ops: Vec<(bool, i32)>) -> Result<(), TestCaseError> {
    let mut heap = OrderedHeap::new(order);
    let mut inserted: Vec<i32> = Vec::new();

    for (should_extract, value) in ops {
        if should_extract && !heap.is_empty() {
            let root = heap.extract_root();
            prop_assert!(root.is_ok());
            let root = root.unwrap();
            let pos = inserted.iter().position(|&v| v == root);
            prop_assert!(pos.is_some(), "extracted {} which was never inserted", root);
            inserted.remove(pos.unwrap());
        } else {
            heap.insert(value);
            inserted.push(value);
        }

        prop_assert!(heap.is_valid_heap());

        let expected_root = match order {
            HeapOrder::Min => inserted.iter().min(),
            HeapOrder::Max => inserted.iter().max(),
        };
        prop_assert_eq!(heap.peek(), expected_root);
    }

    Ok(())
}

/// Test len() is always inserts minus successful extractions
fn test_len_invariant(order: HeapOrder, ops: Vec<(bool, i32)>) -> Result<(), TestCaseError> {
    let mut heap = OrderedHeap::new(order);
    let mut expected_len = 0usize;

    for (should_extract, value) in ops {
        if should_extract {
            match heap.extract_root() {
                Ok(_) => expected_len -= 1,
                Err(err) => {
                    prop_assert_eq!(err, ContainerError::EmptyContainer);
                    prop_assert_eq!(expected_len, 0);
                }
            }
        } else {
            heap.insert(value);
            expected_len += 1;
        }

        prop_assert_eq!(heap.len(), expected_len);
        prop_assert_eq!(heap.is_empty(), expected_len == 0);
    }

    Ok(())
}

/// Test that extracting everything yields the multiset in sorted order
fn test_extraction_order(order: HeapOrder, values: Vec<i32>) -> Result<(), TestCaseError> {
    let mut heap = OrderedHeap::new(order);
    for &value in &values {
        heap.insert(value);
    }

    let mut extracted = Vec::with_capacity(values.len());
    for _ in 0..heap.len() {
        extracted.push(heap.extract_root().unwrap());
    }

    prop_assert_eq!(extracted, sorted_for(order, values));
    prop_assert_eq!(heap.extract_root(), Err(ContainerError::EmptyContainer));

    Ok(())
}

/// Test that building from a sequence gives the same heap contents as inserting
fn test_build_invariant(order: HeapOrder, values: Vec<i32>) -> Result<(), TestCaseError> {
    let heap = OrderedHeap::from_slice(&values, order);

    prop_assert_eq!(heap.len(), values.len());
    prop_assert!(heap.is_valid_heap());

    let expected_root = match order {
        HeapOrder::Min => values.iter().min(),
        HeapOrder::Max => values.iter().max(),
    };
    prop_assert_eq!(heap.peek(), expected_root);
    prop_assert_eq!(heap.into_sorted_vec(), sorted_for(order, values));

    Ok(())
}

/// Test that opposite orders extract the same multiset in reverse sequence
fn test_reversed_order_invariant(order: HeapOrder, values: Vec<i32>) -> Result<(), TestCaseError> {
    let opposite = order.reverse();
    prop_assert_ne!(opposite, order);
    prop_assert_eq!(opposite.reverse(), order);

    let forward = OrderedHeap::from_slice(&values, order).into_sorted_vec();
    let mut backward = OrderedHeap::from_slice(&values, opposite).into_sorted_vec();
    backward.reverse();

    prop_assert_eq!(forward, backward);

    Ok(())
}

/// Test a stack against a Vec model
fn test_stack_model<S: Stack<i32>>(
    mut stack: S,
    bound: Option<usize>,
    ops: Vec<(bool, i32)>,
) -> Result<(), TestCaseError> {
    let mut model: Vec<i32> = Vec::new();

    for (should_pop, value) in ops {
        if should_pop {
            let expected = model.pop().ok_or(ContainerError::EmptyContainer);
            prop_assert_eq!(stack.pop(), expected);
        } else if bound.map_or(false, |capacity| model.len() == capacity) {
            prop_assert!(stack.is_full());
            prop_assert_eq!(
                stack.push(value),
                Err(ContainerError::ContainerFull { capacity: bound.unwrap() })
            );
        } else {
            prop_assert_eq!(stack.push(value), Ok(()));
            model.push(value);
        }

        prop_assert_eq!(stack.len(), model.len());
        prop_assert_eq!(stack.peek(), model.last());
    }

    Ok(())
}

proptest! {
    #[test]
    fn test_heap_insert_extract_invariant(
        order in order_strategy(),
        ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..200)
    ) {
        test_insert_extract_invariant(order, ops)?;
    }

    #[test]
    fn test_heap_len_invariant(
        order in order_strategy(),
        ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..200)
    ) {
        test_len_invariant(order, ops)?;
    }

    #[test]
    fn test_heap_extraction_order(
        order in order_strategy(),
        values in prop::collection::vec(-50i32..50, 0..200)
    ) {
        test_extraction_order(order, values)?;
    }

    #[test]
    fn test_heap_build_invariant(
        order in order_strategy(),
        values in prop::collection::vec(-50i32..50, 0..200)
    ) {
        test_build_invariant(order, values)?;
    }

    #[test]
    fn test_heap_reversed_order_invariant(
        order in order_strategy(),
        values in prop::collection::vec(-50i32..50, 0..200)
    ) {
        test_reversed_order_invariant(order, values)?;
    }

    #[test]
    fn test_linked_stack_model(ops in prop::collection::vec((any::<bool>(), any::<i32>()), 0..200)) {
        test_stack_model(LinkedStack::new(), None, ops)?;
    }

    #[test]
    fn test_bounded_stack_model(
        capacity in 0usize..16,
        ops in prop::collection::vec((any::<bool>(), any::<i32>()), 0..200)
    ) {
        test_stack_model(BoundedStack::new(capacity), Some(capacity), ops)?;
    }

    #[test]
    fn test_linear_stack_model(
        bound in prop::option::of(0usize..16),
        ops in prop::collection::vec((any::<bool>(), any::<i32>()), 0..200)
    ) {
        let stack = match bound {
            Some(capacity) => LinearStack::bounded(capacity),
            None => LinearStack::unbounded(),
        };
        test_stack_model(stack, bound, ops)?;
    }
}
