//! Linear containers on top of a singly linked list of owned nodes.
//!
//! - [`Bag`]: insert-only collection, iterated most recently added first.
//! - [`Stack`]: last-in-first-out.
//! - [`Queue`]: first-in-first-out.
//!
//! All three are thin adapters over [`LinkedList`]. Taking from an empty
//! container returns `None`; the `try_` variants return an [`EmptyError`]
//! instead, for callers that propagate with `?`.
#![no_std]

extern crate alloc;

mod display;

pub mod bag;
pub mod error;
pub mod linked_list;
pub mod queue;
pub mod stack;
pub mod traits;

pub use bag::Bag;
pub use error::EmptyError;
pub use linked_list::LinkedList;
pub use queue::Queue;
pub use stack::Stack;
pub use traits::Container;
