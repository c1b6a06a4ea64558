extern crate std;

use std::{format, vec, vec::Vec};

use crate::linked_list::list::LinkedList;
use crate::traits::Container;

#[test]
fn test_list_push_front_pop() {
    let mut list = LinkedList::new();
    assert!(list.is_empty());

    list.push_front(1);
    list.push_front(2);

    assert_eq!(list.count(), 2);
    assert!(!list.is_empty());
    assert_eq!(list.front(), Some(&2));
    assert_eq!(list.back(), Some(&1));

    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.count(), 1);
    assert_eq!(list.front(), list.back());

    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.count(), 0);

    assert!(list.is_empty());
    assert!(list.pop_front().is_none());
    assert!(list.back().is_none());
}

#[test]
fn test_list_push_back() {
    let mut list = LinkedList::new();
    list.push_back(1);
    list.push_back(2);
    list.push_front(0);
    list.push_back(3);

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    assert_eq!(list.back(), Some(&3));

    // Drain, then make sure the tail was reset
    while list.pop_front().is_some() {}
    list.push_back(9);
    assert_eq!(list.front(), Some(&9));
    assert_eq!(list.back(), Some(&9));
    assert_eq!(list.count(), 1);
}

#[test]
fn test_list_push_front_into_empty_sets_tail() {
    let mut list = LinkedList::new();
    list.push_front(1);
    list.push_back(2);

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(list.back(), Some(&2));
}

#[test]
fn test_list_front_back_mut() {
    let mut list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
    *list.front_mut().unwrap() += 10;
    *list.back_mut().unwrap() += 30;

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![11, 2, 33]);
}

#[test]
fn test_list_iter() {
    let list: LinkedList<i32> = [1, 2, 3].into_iter().collect();

    let mut iter = list.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.size_hint(), (2, Some(2)));

    // A clone continues from the same position
    let rest: Vec<_> = iter.clone().copied().collect();
    assert_eq!(rest, vec![2, 3]);

    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next(), Some(&3));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);

    // Restarts from the head
    assert_eq!(list.iter().count(), 3);
}

#[test]
fn test_list_iter_mut() {
    let mut list: LinkedList<i32> = (1..=4).collect();
    for value in &mut list {
        *value *= 2;
    }
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 4, 6, 8]);
    assert_eq!(list.iter_mut().len(), 4);
}

#[test]
fn test_list_into_iter() {
    let list: LinkedList<i32> = (1..=4).collect();
    let mut iter = list.into_iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.collect::<Vec<_>>(), vec![2, 3, 4]);
}

#[test]
fn test_list_clone_eq_debug() {
    let list: LinkedList<i32> = (1..=3).collect();
    let mut cloned = list.clone();
    assert_eq!(cloned, list);
    assert_eq!(format!("{:?}", cloned), "[1, 2, 3]");

    cloned.push_back(4);
    assert_ne!(cloned, list);
    cloned.pop_front();
    assert_ne!(cloned, list);
}

#[test]
fn test_list_clear() {
    let mut list: LinkedList<i32> = (0..10).collect();
    list.clear();
    assert!(list.is_empty());
    assert!(list.front().is_none());
    assert!(list.back().is_none());

    list.push_back(1);
    assert_eq!(list.count(), 1);
}

fn assert_empty_matches_count<C: Container>(container: &C) {
    assert_eq!(container.is_empty(), container.count() == 0);
}

#[test]
fn test_container_trait() {
    use crate::{Bag, Queue, Stack};

    let mut list = LinkedList::new();
    let mut bag = Bag::new();
    let mut stack = Stack::new();
    let mut queue = Queue::new();

    for i in 0..3 {
        assert_empty_matches_count(&list);
        assert_empty_matches_count(&bag);
        assert_empty_matches_count(&stack);
        assert_empty_matches_count(&queue);

        list.push_back(i);
        bag.add(i);
        stack.push(i);
        queue.enqueue(i);
    }

    assert_eq!(Container::count(&list), 3);
    assert_eq!(Container::count(&bag), 3);
    assert_eq!(Container::count(&stack), 3);
    assert_eq!(Container::count(&queue), 3);
    assert!(!Container::is_empty(&queue));
}
