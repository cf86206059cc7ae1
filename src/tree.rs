use crate::error::NotFound;
use crate::path::Direction;

pub trait TreeOps<T> {
    /// Stores `value` at `path`, creating any missing nodes along the way.
    fn insert(&mut self, value: T, path: &[Direction]);
    /// Value at `path`, or `NotFound` if the tree is empty or a step has no child.
    fn lookup(&self, path: &[Direction]) -> Result<&T, NotFound>;
    /// Removes the node at `path` and returns its value; `None` if the path
    /// does not resolve, in which case nothing changes.
    fn delete(&mut self, path: &[Direction]) -> Option<T>;
    /// Number of nodes, as a `usize` like the other collection lengths.
    fn size(&self) -> usize;
}
