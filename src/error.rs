use thiserror::Error;

/// Returned when a path does not resolve to a node.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum NotFound {
    #[error("no root node to start navigation from")]
    EmptyTree,
    #[error("no node at depth {depth} of the path")]
    MissingChild { depth: usize },
}

/// A direction code other than 0 (left) or 1 (right).
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
#[error("invalid direction code {0}, expected 0 or 1")]
pub struct InvalidDirection(pub u8);
