use core::fmt;

use crate::{
    display,
    linked_list::{IntoIter, Iter, IterMut, LinkedList},
    traits::Container,
};

/// An unordered collection that supports insertion and iteration, but no
/// removal.
///
/// New items go to the front, so iteration yields the most recently added
/// item first. `add`, `is_empty` and `count` are constant time.
///
/// ```
/// use linked_collections::Bag;
///
/// let mut bag = Bag::new();
/// for item in [10, 1, 8, 7, 6, 5] {
///     bag.add(item);
/// }
/// assert_eq!(bag.count(), 6);
/// assert_eq!(bag.to_string(), "5 -> 6 -> 7 -> 8 -> 1 -> 10 -> ");
/// ```
pub struct Bag<T> {
    list: LinkedList<T>,
}

impl<T> Bag<T> {
    /// Creates a new, empty bag.
    pub const fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// Adds an item to the bag.
    #[inline]
    pub fn add(&mut self, item: T) {
        self.list.push_front(item);
    }

    /// Check if the bag is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Get the number of items in the bag
    #[inline]
    pub fn count(&self) -> usize {
        self.list.count()
    }

    /// Iterates over the items, most recently added first.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }

    /// Iterates over mutable references to the items, most recently added first.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.list.iter_mut()
    }
}

impl<T> Container for Bag<T> {
    #[inline]
    fn count(&self) -> usize {
        self.list.count()
    }
}

impl<T> Default for Bag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Bag<T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Bag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Bag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::arrowed(f, self)
    }
}

impl<T: PartialEq> PartialEq for Bag<T> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<T: Eq> Eq for Bag<T> {}

impl<T> FromIterator<T> for Bag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bag = Self::new();
        bag.extend(iter);
        bag
    }
}

impl<T> Extend<T> for Bag<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.add(item));
    }
}

impl<T> IntoIterator for Bag<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        self.list.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Bag<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Bag<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
