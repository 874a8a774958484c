#![cfg(test)]

use std::iter;

use super::*;
use crate::collections::Direction;
use crate::collections::linked::Enumerator;
use crate::util::alloc::CountedDrop;
use crate::util::error::{EnumerationError, RangeOutOfBounds, WindowError};
use crate::util::panic::assert_panics;

fn values<T: Copy>(list: &LinkedList<T>) -> Vec<T> {
    list.iter().copied().collect()
}

/// Collects every value an enumerator visits, stopping at the first error.
fn drain<T: Copy>(
    enumerator: &mut Enumerator,
    list: &LinkedList<T>,
) -> Result<Vec<T>, EnumerationError> {
    let mut out = Vec::new();
    while enumerator.move_next(list)? {
        out.push(*enumerator.current(list)?);
    }
    Ok(out)
}

#[test]
fn test_add_last_order() {
    let mut list = LinkedList::new();
    list.add_last(1);
    list.add_last(2);
    list.add_last(3);

    assert_eq!(values(&list), [1, 2, 3], "FIFO iteration should follow insertion order.");
    assert_eq!(
        list.iter_rev().copied().collect::<Vec<_>>(),
        [3, 2, 1],
        "LIFO iteration should reverse insertion order."
    );
    assert_eq!(list.len(), 3);
    list.verify_double_links();
}

#[test]
fn test_add_first_and_ends() {
    let mut list = LinkedList::new();
    assert_eq!(list.first(), None);
    assert_eq!(list.front(), None);

    let two = list.add_first(2);
    let one = list.add_first(1);
    list.add_last(3);

    assert_eq!(list.first(), Some(one));
    assert_eq!(list.next(one), Some(two));
    assert_eq!(list.prev(one), None, "The first node shouldn't have a predecessor.");
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));

    *list.front_mut().unwrap() = 10;
    *list.back_mut().unwrap() = 30;
    assert_eq!(values(&list), [10, 2, 30]);
    list.verify_double_links();
}

#[test]
fn test_remove_first() {
    let mut list = LinkedList::from([1, 2, 3]);
    assert_eq!(list.remove_first(), 1);

    assert_eq!(values(&list), [2, 3]);
    assert_eq!(list.len(), 2);
    assert_eq!(list.first().map(|node| list[node]), Some(2));
    list.verify_double_links();
}

#[test]
fn test_remove_ends_until_empty() {
    let mut list = LinkedList::from([1, 2, 3]);
    assert_eq!(list.remove_last(), 3);
    assert_eq!(list.remove_first(), 1);
    assert_eq!(list.remove_last(), 2);

    assert!(list.is_empty());
    assert_eq!(list.first(), None);
    assert_eq!(list.last(), None);
    assert_eq!(list.try_remove_first(), Err(EmptyCollection));
    assert_eq!(list.try_remove_last(), Err(EmptyCollection));

    assert_panics!({
        let mut list = LinkedList::<u8>::new();
        list.remove_first();
    });
    assert_panics!({
        let mut list = LinkedList::<u8>::new();
        list.remove_last();
    });
}

#[test]
fn test_add_after() {
    let mut list = LinkedList::from([1, 2, 3]);
    let two = list.find(&2).unwrap();
    let inserted = list.add_after(two, 99);

    assert_eq!(values(&list), [1, 2, 99, 3]);
    assert_eq!(list[inserted], 99);
    assert_eq!(list.prev(inserted), Some(two));
    list.verify_double_links();

    let last = list.last().unwrap();
    let new_last = list.add_after(last, 4);
    assert_eq!(list.last(), Some(new_last), "Adding after the tail should replace the tail.");
    list.verify_double_links();
}

#[test]
fn test_add_before() {
    let mut list = LinkedList::from([1, 2, 3]);
    let first = list.first().unwrap();
    let new_first = list.add_before(first, 0);
    let three = list.find(&3).unwrap();
    list.add_before(three, 25);

    assert_eq!(values(&list), [0, 1, 2, 25, 3]);
    assert_eq!(list.first(), Some(new_first), "Adding before the head should replace the head.");
    list.verify_double_links();
}

#[test]
fn test_remove_node() {
    let mut list = LinkedList::from(['a', 'b', 'c', 'd']);
    let b = list.find(&'b').unwrap();
    let d = list.find(&'d').unwrap();
    let a = list.first().unwrap();

    assert_eq!(list.remove(b), 'b');
    assert_eq!(values(&list), ['a', 'c', 'd']);
    list.verify_double_links();

    assert_eq!(list.remove(d), 'd');
    assert_eq!(list.back(), Some(&'c'), "Removing the tail should move the tail back.");
    assert_eq!(list.remove(a), 'a');
    assert_eq!(list.front(), Some(&'c'), "Removing the head should move the head forward.");
    list.verify_double_links();

    assert_eq!(list.try_remove(b), Err(NotContained), "Removed handles should be rejected.");
    assert!(!list.contains_node(b));
}

#[test]
fn test_foreign_nodes() {
    let list = LinkedList::from([1, 2, 3]);
    let mut other = LinkedList::from([1, 2, 3]);
    let node = list.first().unwrap();
    let other_node = other.first().unwrap();

    assert_eq!(other.try_get(node), Err(NotContained));
    assert_eq!(other.try_add_after(node, 4), Err(NotContained));
    assert_eq!(other.try_add_before(node, 4), Err(NotContained));
    assert_eq!(other.try_remove(node), Err(NotContained));
    assert_eq!(other.try_next(node), Err(NotContained));
    assert_eq!(
        other.try_move_after(node, other_node),
        Err(NodePairError::NotContained(NotContained))
    );
    assert!(other.try_swap(other_node, node).is_err_and(|e| e.is_not_contained()));
    assert!(
        other.try_enumerator_between(Direction::Fifo, Some(node), None)
            .is_err_and(|e| e.is_not_contained())
    );

    assert_eq!(values(&other), [1, 2, 3], "Failed operations shouldn't modify the list.");
    assert_eq!(list.try_get(node), Ok(&1));

    assert_panics!({
        other.add_after(node, 4);
    });
    assert_panics!({
        let _value = other[node];
    });
}

#[test]
fn test_handles_after_clear_and_clone() {
    let mut list = LinkedList::from([1, 2, 3]);
    let node = list.first().unwrap();

    let cloned = list.clone();
    assert_eq!(cloned, list);
    assert!(!cloned.contains_node(node), "Clones should issue their own handles.");

    list.clear();
    assert!(list.is_empty());
    assert!(!list.contains_node(node), "Clearing should invalidate every handle.");

    let new_node = list.add_last(1);
    assert_eq!(new_node.index, node.index, "The arena should be reused after a clear.");
    assert_ne!(new_node, node);
    assert_eq!(list.try_get(node), Err(NotContained));
}

#[test]
fn test_slot_reuse() {
    let mut list = LinkedList::from([1, 2, 3]);
    let two = list.find(&2).unwrap();
    list.remove(two);

    let four = list.add_last(4);
    assert_eq!(list.capacity(), 3, "Vacated slots should be reused before growing.");
    assert_eq!(four.index, two.index);
    assert_eq!(list.try_get(two), Err(NotContained), "Stale handles shouldn't alias new nodes.");
    assert_eq!(list[four], 4);
    assert_eq!(values(&list), [1, 3, 4]);
}

#[test]
fn test_find() {
    let mut list = LinkedList::from([1, 2, 1, 3]);
    let first = list.find(&1).unwrap();
    let last = list.find_last(&1).unwrap();

    assert_ne!(first, last);
    assert_eq!(list.first(), Some(first));
    assert_eq!(list.prev(last).map(|node| list[node]), Some(2));
    assert_eq!(list.find(&4), None);
    assert!(list.contains(&3));

    assert!(list.remove_value(&1));
    assert_eq!(values(&list), [2, 1, 3], "Only the first match should be removed.");
    assert!(!list.remove_value(&4));

    let options = LinkedList::from([Some(1), None, Some(2), None]);
    assert_eq!(
        options.find(&None).and_then(|node| options.next(node)).map(|node| options[node]),
        Some(Some(2)),
        "Absent values should be found like any other."
    );
    assert_eq!(options.find_last(&None), options.last());
}

#[test]
fn test_swap() {
    // Non-adjacent, including both boundaries.
    let mut list = LinkedList::from([1, 2, 3]);
    let one = list.find(&1).unwrap();
    let three = list.find(&3).unwrap();
    list.swap(one, three);
    assert_eq!(values(&list), [3, 2, 1]);
    assert_eq!(list.first(), Some(three));
    assert_eq!(list.last(), Some(one));
    assert_eq!(list[one], 1, "Handles should keep referring to the same values.");
    list.verify_double_links();

    // Adjacent, x before y.
    let mut list = LinkedList::from([1, 2, 3, 4]);
    let two = list.find(&2).unwrap();
    let three = list.find(&3).unwrap();
    list.swap(two, three);
    assert_eq!(values(&list), [1, 3, 2, 4]);
    list.verify_double_links();

    // Adjacent, y before x.
    list.swap(two, three);
    assert_eq!(values(&list), [1, 2, 3, 4]);
    list.verify_double_links();

    // Adjacent at both boundaries.
    let mut list = LinkedList::from([1, 2]);
    let one = list.first().unwrap();
    let two = list.last().unwrap();
    list.swap(two, one);
    assert_eq!(values(&list), [2, 1]);
    assert_eq!(list.first(), Some(two));
    assert_eq!(list.last(), Some(one));
    list.verify_double_links();

    // Separated by a single node.
    let mut list = LinkedList::from([1, 2, 3, 4, 5]);
    let two = list.find(&2).unwrap();
    let four = list.find(&4).unwrap();
    list.swap(four, two);
    assert_eq!(values(&list), [1, 4, 3, 2, 5]);
    assert_eq!(list.len(), 5);
    list.verify_double_links();

    assert_eq!(list.try_swap(two, two), Err(NodePairError::EqualNodes(EqualNodes)));
    assert_panics!({
        list.swap(four, four);
    });
}

#[test]
fn test_move_after() {
    let mut list = LinkedList::from([1, 2, 3, 4]);
    let one = list.find(&1).unwrap();
    let two = list.find(&2).unwrap();
    let four = list.find(&4).unwrap();

    assert!(!list.move_after(two, one), "Moving into place should be a no-op.");
    assert_eq!(values(&list), [1, 2, 3, 4]);

    assert!(list.move_after(one, four));
    assert_eq!(values(&list), [2, 3, 4, 1]);
    assert_eq!(list.first(), Some(two));
    assert_eq!(list.last(), Some(one));
    list.verify_double_links();

    assert!(list.move_after(four, two));
    assert_eq!(values(&list), [2, 4, 3, 1]);
    list.verify_double_links();

    assert!(list.try_move_after(one, one).is_err_and(|e| e.is_equal_nodes()));
}

#[test]
fn test_move_before() {
    let mut list = LinkedList::from([1, 2, 3, 4]);
    let one = list.find(&1).unwrap();
    let two = list.find(&2).unwrap();
    let four = list.find(&4).unwrap();

    assert!(!list.move_before(one, two), "Moving into place should be a no-op.");

    assert!(list.move_before(four, one));
    assert_eq!(values(&list), [4, 1, 2, 3]);
    assert_eq!(list.first(), Some(four));
    assert_eq!(list.back(), Some(&3));
    list.verify_double_links();

    assert!(list.move_before(one, four));
    assert_eq!(values(&list), [1, 4, 2, 3]);
    list.verify_double_links();

    assert!(list.try_move_before(two, two).is_err_and(|e| e.is_equal_nodes()));
    assert_panics!({
        list.move_before(two, two);
    });
}

#[test]
fn test_append_and_collect() {
    let mut list: LinkedList<_> = (0..3).collect();
    list.append(LinkedList::from([3, 4]));
    list.append(LinkedList::new());

    assert_eq!(values(&list), [0, 1, 2, 3, 4]);
    assert_eq!(list.iter().len(), 5);
    list.verify_double_links();
}

#[test]
fn test_iterators() {
    let mut list = LinkedList::from([1, 2, 3, 4]);
    for value in list.iter_mut() {
        *value *= 10;
    }
    assert_eq!(values(&list), [10, 20, 30, 40]);

    let mut iter = list.iter_mut();
    assert_eq!(iter.next(), Some(&mut 10));
    assert_eq!(iter.next_back(), Some(&mut 40));
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.next(), Some(&mut 20));
    assert_eq!(iter.next_back(), Some(&mut 30));
    assert_eq!(iter.next(), None, "Iterating from both ends shouldn't yield a node twice.");

    let mut iter = list.iter();
    assert_eq!(iter.next_back(), Some(&40));
    assert_eq!(iter.clone().collect::<Vec<_>>(), [&10, &20, &30]);

    let mut into_iter = list.into_iter();
    assert_eq!(into_iter.next_back(), Some(40));
    assert_eq!(into_iter.collect::<Vec<_>>(), [10, 20, 30]);
}

#[test]
fn test_drops() {
    let counter = CountedDrop::new(0);
    let mut list: LinkedList<_> = iter::repeat_with(|| counter.clone()).take(6).collect();

    let node = list.first().unwrap();
    drop(list.remove(node));
    assert_eq!(counter.drops(), 1);

    drop(list.remove_last());
    assert_eq!(counter.drops(), 2);

    list.clear();
    assert_eq!(counter.drops(), 6, "Clearing should drop every remaining value.");

    list.extend(iter::repeat_with(|| counter.clone()).take(3));
    drop(list);
    assert_eq!(counter.drops(), 9, "Dropping the list should drop every value.");
}

#[test]
fn test_formatting() {
    let list = LinkedList::from([1, 2, 3]);
    assert_eq!(format!("{list}"), "(1) -> (2) -> (3)");
    assert_eq!(format!("{list:?}"), "LinkedList { contents: [1, 2, 3], len: 3 }");
    assert_eq!(format!("{}", LinkedList::<u8>::new()), "()");
}

#[test]
fn test_enumerator_directions() {
    let list = LinkedList::from([1, 2, 3]);

    let mut fifo = list.enumerator(Direction::Fifo);
    assert_eq!(drain(&mut fifo, &list), Ok(vec![1, 2, 3]));
    assert_eq!(fifo.move_next(&list), Ok(false), "An exhausted enumerator should stay exhausted.");

    let mut lifo = list.enumerator(Direction::Lifo);
    assert_eq!(drain(&mut lifo, &list), Ok(vec![3, 2, 1]));

    lifo.reset(&list).unwrap();
    assert_eq!(drain(&mut lifo, &list), Ok(vec![3, 2, 1]), "Reset should restart enumeration.");

    let empty = LinkedList::<u8>::new();
    let mut enumerator = empty.enumerator(Direction::Fifo);
    assert_eq!(enumerator.move_next(&empty), Ok(false));
}

#[test]
fn test_enumerator_current() {
    let list = LinkedList::from([1, 2]);
    let mut enumerator = list.enumerator(Direction::Fifo);

    assert!(
        enumerator.current(&list).is_err_and(|e| e.is_not_positioned()),
        "Reading before the first step should fail."
    );
    assert_eq!(enumerator.move_next(&list), Ok(true));
    assert_eq!(enumerator.current(&list), Ok(&1));
    assert_eq!(enumerator.current_node(&list), Ok(list.first().unwrap()));

    while enumerator.move_next(&list).unwrap() {}
    assert!(
        enumerator.current(&list).is_err_and(|e| e.is_not_positioned()),
        "Reading after exhaustion should fail."
    );
}

#[test]
fn test_enumerator_version_changed() {
    let mut list = LinkedList::from([1, 2, 3]);
    let mut enumerator = list.enumerator(Direction::Fifo);

    assert_eq!(enumerator.move_next(&list), Ok(true));
    assert_eq!(enumerator.current(&list), Ok(&1));

    list.add_last(4);
    assert!(enumerator.move_next(&list).is_err_and(|e| e.is_version_changed()));
    assert!(enumerator.reset(&list).is_err_and(|e| e.is_version_changed()));
    assert!(enumerator.current(&list).is_err_and(|e| e.is_version_changed()));

    let mut enumerator = list.enumerator(Direction::Lifo);
    let first = list.first().unwrap();
    list.remove(first);
    assert!(enumerator.move_next(&list).is_err_and(|e| e.is_version_changed()));

    let mut enumerator = list.enumerator(Direction::Fifo);
    list.clear();
    assert!(enumerator.move_next(&list).is_err_and(|e| e.is_version_changed()));
}

#[test]
fn test_enumerator_ignores_value_changes() {
    let mut list = LinkedList::from([1, 2, 3]);
    let mut enumerator = list.enumerator(Direction::Fifo);
    assert_eq!(enumerator.move_next(&list), Ok(true));

    *list.front_mut().unwrap() = 10;
    let node = list.first().unwrap();
    assert!(!list.move_before(node, list.next(node).unwrap()), "No-op moves aren't mutations.");

    assert_eq!(enumerator.current(&list), Ok(&10));
    assert_eq!(drain(&mut enumerator, &list), Ok(vec![2, 3]));
}

#[test]
fn test_enumerator_version_lifecycle() {
    let mut list = LinkedList::from([1, 2, 3]);
    list.add_last(4);
    assert_eq!(list.tracker.version(), 0, "Unobserved mutations shouldn't advance the version.");

    let enumerator = list.enumerator(Direction::Fifo);
    list.add_last(5);
    list.remove_first();
    assert_eq!(list.tracker.version(), 2);

    drop(enumerator);
    assert_eq!(list.tracker.live(), 0);
    assert_eq!(list.tracker.version(), 0, "Dropping the last enumerator should reset the version.");

    let mut enumerator = list.enumerator(Direction::Fifo);
    assert_eq!(drain(&mut enumerator, &list), Ok(vec![2, 3, 4, 5]));
}

#[test]
fn test_enumerator_foreign_list() {
    let list = LinkedList::from([1, 2, 3]);
    let other = LinkedList::from([1, 2, 3]);
    let mut enumerator = list.enumerator(Direction::Fifo);

    assert!(enumerator.move_next(&other).is_err_and(|e| e.is_foreign_enumerator()));
    assert_eq!(enumerator.move_next(&list), Ok(true));
}

#[test]
fn test_enumerator_window() {
    let list = LinkedList::from([1, 2, 3, 4, 5]);
    let two = list.find(&2).unwrap();
    let four = list.find(&4).unwrap();

    let mut enumerator = list.enumerator_between(Direction::Fifo, Some(two), Some(four));
    assert_eq!(drain(&mut enumerator, &list), Ok(vec![2, 3]), "The end should be exclusive.");

    let mut enumerator = list.enumerator_between(Direction::Lifo, Some(four), None);
    assert_eq!(drain(&mut enumerator, &list), Ok(vec![4, 3, 2, 1]));

    let mut enumerator = list.enumerator_between(Direction::Lifo, None, Some(two));
    assert_eq!(drain(&mut enumerator, &list), Ok(vec![5, 4, 3]));

    let mut enumerator = list.enumerator_between(Direction::Fifo, Some(two), Some(two));
    assert_eq!(drain(&mut enumerator, &list), Ok(vec![]), "An empty window yields nothing.");

    assert_eq!(
        list.try_enumerator_between(Direction::Fifo, Some(four), Some(two)).err(),
        Some(WindowError::RangeOutOfBounds(RangeOutOfBounds)),
        "The end has to be reachable from the start."
    );
    assert!(
        list.try_enumerator_between(Direction::Lifo, Some(two), Some(four))
            .is_err_and(|e| e.is_range_out_of_bounds())
    );
    assert_panics!({
        list.enumerator_between(Direction::Fifo, Some(four), Some(two));
    });
}

/// Applies random operations to a list and to a model of (handle, value) pairs kept in list order,
/// checking after each step that both agree.
fn matches_model(ops: Vec<(u8, u8, u8)>) -> bool {
    let mut list = LinkedList::new();
    let mut model: Vec<(NodeHandle, u8)> = Vec::new();

    for (op, a, b) in ops {
        let len = model.len();
        let i = if len == 0 { 0 } else { a as usize % len };
        let j = if len == 0 { 0 } else { b as usize % len };

        match op % 9 {
            0 => model.insert(0, (list.add_first(a), a)),
            1 => model.push((list.add_last(a), a)),
            2 if len > 0 => model.insert(i + 1, (list.add_after(model[i].0, b), b)),
            3 if len > 0 => model.insert(i, (list.add_before(model[i].0, b), b)),
            4 if len > 0 => {
                let (node, value) = model.remove(i);
                if list.remove(node) != value {
                    return false;
                }
            },
            5 if i != j => {
                let (node, after) = (model[i].0, model[j].0);
                if list.move_after(node, after) == (i == j + 1) {
                    return false;
                }
                let item = model.remove(i);
                let pos = model.iter().position(|(h, _)| *h == after).unwrap_or_default();
                model.insert(pos + 1, item);
            },
            6 if i != j => {
                let (node, before) = (model[i].0, model[j].0);
                if list.move_before(node, before) == (i + 1 == j) {
                    return false;
                }
                let item = model.remove(i);
                let pos = model.iter().position(|(h, _)| *h == before).unwrap_or_default();
                model.insert(pos, item);
            },
            7 if i != j => {
                list.swap(model[i].0, model[j].0);
                model.swap(i, j);
            },
            8 if a % 16 == 0 => {
                list.clear();
                model.clear();
            },
            8 if len > 0 => {
                if list.remove_last() != model.pop().map(|(_, value)| value).unwrap_or_default() {
                    return false;
                }
            },
            _ => {},
        }

        list.verify_double_links();
        if !list.iter().copied().eq(model.iter().map(|(_, value)| *value)) {
            return false;
        }
        if !list.iter_rev().copied().eq(model.iter().rev().map(|(_, value)| *value)) {
            return false;
        }
        if !model.iter().all(|(node, value)| list.try_get(*node) == Ok(value)) {
            return false;
        }
    }
    true
}

quickcheck::quickcheck! {
    fn prop_operations_match_model(ops: Vec<(u8, u8, u8)>) -> bool {
        matches_model(ops)
    }

    fn prop_fifo_lifo_duality(values: Vec<i32>) -> bool {
        let list: LinkedList<_> = values.iter().copied().collect();
        let mut reversed: Vec<_> = list.iter_rev().copied().collect();
        reversed.reverse();
        list.len() == values.len() && list.iter().copied().eq(reversed) && reversed_eq(&list)
    }
}

/// Checks that FIFO and LIFO enumerators agree with each other.
fn reversed_eq(list: &LinkedList<i32>) -> bool {
    let mut fifo = list.enumerator(Direction::Fifo);
    let mut lifo = list.enumerator(Direction::Lifo);
    match (drain(&mut fifo, list), drain(&mut lifo, list)) {
        (Ok(forward), Ok(mut backward)) => {
            backward.reverse();
            forward == backward
        },
        _ => false,
    }
}
