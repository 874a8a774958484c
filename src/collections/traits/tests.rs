#![cfg(test)]
#![cfg(all(feature = "linked", feature = "simple"))]

use super::*;
use crate::collections::linked::LinkedList;
use crate::collections::simple::{Queue, SimpleLinkedList, Stack};

fn collect<S: Sequence<u32>>(sequence: &S) -> Vec<u32> {
    sequence.iter().copied().collect()
}

/// Rotates the first element of a list to the back, generically.
fn rotate<L: MutableMiddle<u32>>(list: &mut L) -> bool {
    let Ok(value) = list.try_remove_first() else {
        return false;
    };
    let rotated = list.back().is_some();
    if rotated {
        list.add_last(value);
    } else {
        list.add_first(value);
    }
    rotated
}

#[test]
fn test_sequence_impls() {
    let list = LinkedList::from([1, 2, 3]);
    let simple = SimpleLinkedList::from([1, 2, 3]);
    let stack = Stack::from([3, 2, 1]);
    let queue = Queue::from([1, 2, 3]);

    assert_eq!(collect(&list), [1, 2, 3]);
    assert_eq!(collect(&simple), [1, 2, 3]);
    assert_eq!(collect(&stack), [1, 2, 3], "Stacks iterate from the top.");
    assert_eq!(collect(&queue), [1, 2, 3]);

    assert_eq!(Sequence::len(&stack), 3);
    assert!(!Sequence::is_empty(&queue));
    assert!(Sequence::is_empty(&Stack::<u32>::new()));
    assert!(queue.contains_value(&2));
    assert!(!stack.contains_value(&4));
}

#[test]
fn test_bidirectional() {
    let list = LinkedList::from([1, 2, 3]);
    let forward: Vec<_> = Sequence::iter(&list).collect();
    let mut backward: Vec<_> = list.iter_rev().collect();
    backward.reverse();
    assert_eq!(forward, backward);
    assert_eq!(BidirectionalSequence::iter_rev(&list).next(), Some(&3));
}

#[test]
fn test_mutable_middle() {
    let mut list = LinkedList::from([1, 2, 3]);
    assert!(rotate(&mut list));
    assert_eq!(collect(&list), [2, 3, 1]);

    let first = MutableEnds::add_first(&mut list, 0);
    let after = MutableMiddle::try_add_after(&mut list, first, 5).unwrap();
    assert_eq!(collect(&list), [0, 5, 2, 3, 1]);

    assert_eq!(MutableMiddle::try_move_before(&mut list, after, first), Ok(true));
    assert_eq!(MutableMiddle::try_swap(&mut list, after, first), Ok(()));
    assert_eq!(MutableMiddle::try_remove(&mut list, first), Ok(0));
    assert_eq!(collect(&list), [5, 2, 3, 1]);

    let mut single = LinkedList::from([7]);
    assert!(!rotate(&mut single));
    assert_eq!(collect(&single), [7]);
    assert!(!rotate(&mut LinkedList::new()));
}
