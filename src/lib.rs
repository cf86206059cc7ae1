pub mod binary_tree;
pub mod error;
pub mod path;
mod traversal;
pub mod tree;
pub mod validate;

#[cfg(test)]
mod proptests;

pub use binary_tree::{Iter, NodeRef, Tree};
pub use error::{InvalidDirection, NotFound};
pub use path::Direction;
pub use tree::TreeOps;
