use core::fmt;

use crate::{
    display,
    error::EmptyError,
    linked_list::{IntoIter, Iter, IterMut, LinkedList},
    traits::Container,
};

/// A last-in-first-out stack.
///
/// `push`, `pop` and `peek` all work on the front of a singly linked list and
/// are constant time. Popping or peeking an empty stack yields `None`.
///
/// ```
/// use linked_collections::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// stack.push(3);
///
/// assert_eq!(stack.to_string(), "[3, 2, 1]");
/// assert_eq!(stack.peek(), Some(&3));
/// assert_eq!(stack.pop(), Some(3));
/// assert_eq!(stack.count(), 2);
/// ```
pub struct Stack<T> {
    list: LinkedList<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty stack.
    pub const fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// Check if the stack is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Get the number of items in the stack
    #[inline]
    pub fn count(&self) -> usize {
        self.list.count()
    }

    /// Pushes an item on top of the stack.
    #[inline]
    pub fn push(&mut self, item: T) {
        self.list.push_front(item);
    }

    /// Removes and returns the most recently pushed item.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// Returns the most recently pushed item without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.list.front()
    }

    /// Get a mutable reference to the top item
    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.list.front_mut()
    }

    /// Like [`pop`](Self::pop), but an empty stack is an error.
    pub fn try_pop(&mut self) -> Result<T, EmptyError> {
        self.pop().ok_or(EmptyError::new("stack", "pop"))
    }

    /// Like [`peek`](Self::peek), but an empty stack is an error.
    pub fn try_peek(&self) -> Result<&T, EmptyError> {
        self.peek().ok_or(EmptyError::new("stack", "peek"))
    }

    /// Drops every item in the stack
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }

    /// Iterates over mutable references to the items, top to bottom.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.list.iter_mut()
    }
}

impl<T> Container for Stack<T> {
    #[inline]
    fn count(&self) -> usize {
        self.list.count()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::bracketed(f, self)
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push(item));
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        self.list.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Stack<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
