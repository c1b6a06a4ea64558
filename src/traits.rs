/// Operations shared by every container in this crate.
pub trait Container {
    /// Get the number of elements in the container
    fn count(&self) -> usize;

    /// Check if the container is empty
    #[inline]
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
