use core::fmt;

use crate::{
    display,
    error::EmptyError,
    linked_list::{IntoIter, Iter, IterMut, LinkedList},
    traits::Container,
};

/// A first-in-first-out queue.
///
/// Items are enqueued at the back and dequeued from the front. The underlying
/// list tracks its last node, so both ends are constant time.
///
/// ```
/// use linked_collections::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
/// queue.enqueue(3);
///
/// assert_eq!(queue.to_string(), "[1, 2, 3]");
/// assert_eq!(queue.peek(), Some(&1));
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.count(), 2);
/// ```
pub struct Queue<T> {
    list: LinkedList<T>,
}

impl<T> Queue<T> {
    /// Creates a new, empty queue.
    pub const fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// Check if the queue is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Get the number of items in the queue
    #[inline]
    pub fn count(&self) -> usize {
        self.list.count()
    }

    /// Adds an item at the back of the queue.
    #[inline]
    pub fn enqueue(&mut self, item: T) {
        self.list.push_back(item);
    }

    /// Removes and returns the least recently enqueued item.
    #[inline]
    pub fn dequeue(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// Returns the least recently enqueued item without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.list.front()
    }

    /// Get a mutable reference to the front item
    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.list.front_mut()
    }

    /// Returns the most recently enqueued item.
    #[inline]
    pub fn peek_back(&self) -> Option<&T> {
        self.list.back()
    }

    /// Like [`dequeue`](Self::dequeue), but an empty queue is an error.
    pub fn try_dequeue(&mut self) -> Result<T, EmptyError> {
        self.dequeue().ok_or(EmptyError::new("queue", "dequeue"))
    }

    /// Like [`peek`](Self::peek), but an empty queue is an error.
    pub fn try_peek(&self) -> Result<&T, EmptyError> {
        self.peek().ok_or(EmptyError::new("queue", "peek"))
    }

    /// Drops every item in the queue
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Iterates from the front of the queue to the back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }

    /// Iterates over mutable references to the items, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.list.iter_mut()
    }
}

impl<T> Container for Queue<T> {
    #[inline]
    fn count(&self) -> usize {
        self.list.count()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::bracketed(f, self)
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        self.list.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Queue<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
