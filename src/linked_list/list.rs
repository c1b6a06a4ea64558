use core::fmt;
use core::marker::PhantomData;

use super::{
    iter::{IntoIter, Iter, IterMut},
    node::{Link, Node, NodePtr},
};
use crate::traits::Container;

/// A singly linked list of owned nodes.
///
/// The list owns every node reachable from its head. A second pointer to the
/// last node makes `push_back` constant time, which is what lets the same list
/// back a LIFO stack (front operations only) and a FIFO queue (push at the
/// back, pop at the front).
pub struct LinkedList<T> {
    head: NodePtr<T>,
    tail: NodePtr<T>,
    count: usize,
    _marker: PhantomData<Node<T>>,
}

impl<T> LinkedList<T> {
    /// Creates a new, empty linked list.
    pub const fn new() -> Self {
        LinkedList {
            head: None,
            tail: None,
            count: 0,
            _marker: PhantomData,
        }
    }

    /// Push a new value to the front of the list
    pub fn push_front(&mut self, value: T) {
        let node = Node::alloc(value);
        // SAFETY: `node` was just allocated and nothing else points to it yet.
        unsafe { (*node.as_ptr()).set_next(self.next()) };
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.set_next(Some(node));
        self.count += 1;
    }

    /// Push a new value to the back of the list
    pub fn push_back(&mut self, value: T) {
        let node = Node::alloc(value);
        match self.tail {
            // SAFETY: the tail is the live last node of this list.
            Some(tail) => unsafe { (*tail.as_ptr()).set_next(Some(node)) },
            None => self.set_next(Some(node)),
        }
        self.tail = Some(node);
        self.count += 1;
    }

    /// Pop the value at the front of the list
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|head| {
            // SAFETY: `head` is owned by this list and is unlinked right here.
            let (value, next) = unsafe { Node::free(head) };
            self.set_next(next);
            if next.is_none() {
                self.tail = None;
            }
            self.count -= 1;
            value
        })
    }

    /// Get the value at the front of the list
    pub fn front(&self) -> Option<&T> {
        // SAFETY: the head is live for as long as `self` is borrowed.
        self.head.map(|head| unsafe { (*head.as_ptr()).value() })
    }

    /// Get a mutable reference to the value at the front of the list
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: the head is live and `self` is borrowed exclusively.
        self.head.map(|head| unsafe { (*head.as_ptr()).value_mut() })
    }

    /// Get the value at the back of the list
    pub fn back(&self) -> Option<&T> {
        // SAFETY: the tail is live for as long as `self` is borrowed.
        self.tail.map(|tail| unsafe { (*tail.as_ptr()).value() })
    }

    /// Get a mutable reference to the value at the back of the list
    pub fn back_mut(&mut self) -> Option<&mut T> {
        // SAFETY: the tail is live and `self` is borrowed exclusively.
        self.tail.map(|tail| unsafe { (*tail.as_ptr()).value_mut() })
    }

    /// Check if the list is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get the number of values in the list
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Drops every value, front to back.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Get an iterator over the list, front to back
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head, self.count)
    }

    /// Get a mutable iterator over the list, front to back
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head, self.count)
    }
}

impl<T> Link for LinkedList<T> {
    type Target = Node<T>;

    #[inline]
    fn next(&self) -> NodePtr<T> {
        self.head
    }

    #[inline]
    fn set_next(&mut self, next: NodePtr<T>) {
        self.head = next;
    }
}

impl<T> Container for LinkedList<T> {
    #[inline]
    fn count(&self) -> usize {
        self.count
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push_back(value));
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

unsafe impl<T: Send> Send for LinkedList<T> {}
unsafe impl<T: Sync> Sync for LinkedList<T> {}
