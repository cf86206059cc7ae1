//! Shape and ordering checks over a path-addressed [`Tree`].
//!
//! The tree itself knows nothing about ordering; these functions only read
//! its structure.

use crate::binary_tree::{NodeRef, Tree};
use crate::path::Direction;
use std::cmp::Ordering;
use std::collections::VecDeque;

/// True when the in-order traversal never decreases.
pub fn is_bst_inorder<T: PartialOrd>(tree: &Tree<T>) -> bool {
    let mut visited = Vec::new();
    tree.traverse_inorder(|value| visited.push(value));
    visited.is_sorted()
}

/// True when every node lies strictly between the bounds set by its
/// ancestors, checked breadth-first.
pub fn is_bst_bounded<T: PartialOrd>(tree: &Tree<T>) -> bool {
    let mut queue: VecDeque<(NodeRef<'_, T>, Option<&T>, Option<&T>)> =
        tree.root().map(|root| (root, None, None)).into_iter().collect();

    while let Some((node, lower, upper)) = queue.pop_front() {
        let value = node.value();
        if lower.is_some_and(|lower| lower >= value) || upper.is_some_and(|upper| value >= upper) {
            return false;
        }
        queue.extend(node.left().map(|left| (left, lower, Some(value))));
        queue.extend(node.right().map(|right| (right, Some(value), upper)));
    }
    true
}

/// True when, at every node, the heights of the two subtrees differ by at
/// most one. Recurses once per level.
pub fn is_height_balanced<T>(tree: &Tree<T>) -> bool {
    balanced_height(tree.root()).is_some()
}

/// Height of the subtree at `node` (-1 when empty), computed in a single
/// post-order pass; `None` as soon as some node is out of balance.
fn balanced_height<T>(node: Option<NodeRef<'_, T>>) -> Option<isize> {
    let Some(node) = node else {
        return Some(-1);
    };
    let left = balanced_height(node.left())?;
    let right = balanced_height(node.right())?;
    (left.abs_diff(right) <= 1).then_some(left.max(right) + 1)
}

/// Path at which `key` sits, or would be inserted, if the tree is ordered as
/// a binary search tree. Descent stops at an equal (or incomparable) value.
pub fn bst_path<T: PartialOrd>(tree: &Tree<T>, key: &T) -> Vec<Direction> {
    let mut path = Vec::new();
    let mut cur = tree.root();
    while let Some(node) = cur {
        let dir = match key.partial_cmp(node.value()) {
            Some(Ordering::Less) => Direction::Left,
            Some(Ordering::Greater) => Direction::Right,
            _ => break,
        };
        path.push(dir);
        cur = node.child(dir);
    }
    path
}
