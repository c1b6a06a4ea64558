use core::ptr::NonNull;

use alloc::boxed::Box;

/// A pointer to the following node in a chain, `None` at the end.
pub(crate) type NodePtr<T> = Option<NonNull<Node<T>>>;

/// A trait for anything that holds the link to the next node.
///
/// Both a node and the list itself implement it, so that inserting after
/// "the list" (at the head) and after a node (at the tail) are the same
/// operation.
pub(crate) trait Link {
    /// The node type the link points at.
    type Target;

    /// Get the next pointer
    fn next(&self) -> Option<NonNull<Self::Target>>;

    /// Set the next pointer
    fn set_next(&mut self, next: Option<NonNull<Self::Target>>);
}

/// A heap-allocated node of a singly linked chain.
pub(crate) struct Node<T> {
    value: T,
    next: NodePtr<T>,
}

impl<T> Node<T> {
    /// Allocates a detached node holding `value`.
    ///
    /// Ownership of the allocation passes to the caller, which must
    /// eventually hand it back through [`Node::free`].
    pub(crate) fn alloc(value: T) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Node { value, next: None })))
    }

    /// Releases a node, returning its value and the link it held.
    ///
    /// # Safety
    ///
    /// `node` must come from [`Node::alloc`], must not have been freed yet,
    /// and no reference into it may outlive this call.
    pub(crate) unsafe fn free(node: NonNull<Self>) -> (T, NodePtr<T>) {
        // SAFETY: guaranteed by the caller.
        let node = unsafe { Box::from_raw(node.as_ptr()) };
        let Node { value, next } = *node;
        (value, next)
    }

    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T> Link for Node<T> {
    type Target = Self;

    #[inline]
    fn next(&self) -> NodePtr<T> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: NodePtr<T>) {
        self.next = next;
    }
}
