//! A singly linked list of owned nodes.
//!
//! Every node is a separate heap allocation holding one value and a link to
//! the next node. The list is the only owner of its chain: values move in on
//! insertion and move back out on removal, and whatever is left is freed when
//! the list is dropped.
//!
//! [`LinkedList`] keeps both a head link and a pointer to its last node, so
//! pushing at either end and popping at the front are all constant time. The
//! [`Bag`](crate::Bag), [`Stack`](crate::Stack) and [`Queue`](crate::Queue)
//! adapters are built on it.
//!
//! # Examples
//!
//! ```
//! use linked_collections::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.push_back(2);
//! list.push_back(3);
//! list.push_front(1);
//!
//! assert_eq!(list.count(), 3);
//! assert_eq!(list.front(), Some(&1));
//! assert_eq!(list.back(), Some(&3));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//!
//! assert_eq!(list.pop_front(), Some(1));
//! assert_eq!(list.count(), 2);
//! ```
//!
//! ## Safety
//!
//! Links are raw [`NonNull`](core::ptr::NonNull) pointers so that the tail
//! pointer can alias the last node's owning link. All `unsafe` code lives in
//! this module and relies on these invariants:
//!
//! - Every node reachable from the head was produced by one allocation and is
//!   freed exactly once, when it is popped or the list is dropped.
//! - The tail is `None` iff the head is `None`, and otherwise points at the
//!   last reachable node.
//! - Borrowing iterators hold a borrow of the list, so no node they can reach
//!   is freed or relinked while they are alive.

mod node;

pub mod iter;
pub mod list;

pub use iter::{IntoIter, Iter, IterMut};
pub use list::LinkedList;

#[cfg(test)]
mod tests;
