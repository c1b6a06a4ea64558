use thiserror::Error;

/// Returned by the `try_` operations when the container holds no element.
///
/// ```
/// use linked_collections::Stack;
///
/// let mut stack = Stack::<i32>::new();
/// let err = stack.try_pop().unwrap_err();
/// assert_eq!(err.to_string(), "pop on an empty stack");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{operation} on an empty {container}")]
pub struct EmptyError {
    container: &'static str,
    operation: &'static str,
}

impl EmptyError {
    pub(crate) const fn new(container: &'static str, operation: &'static str) -> Self {
        Self {
            container,
            operation,
        }
    }

    /// The kind of container the operation ran on, e.g. `"stack"`.
    pub fn container(&self) -> &'static str {
        self.container
    }

    /// The operation that found the container empty, e.g. `"pop"`.
    pub fn operation(&self) -> &'static str {
        self.operation
    }
}
