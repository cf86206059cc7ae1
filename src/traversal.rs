use crate::binary_tree::{Link, Node, Tree};
use std::collections::VecDeque;

// The depth-first traversals recurse once per level, so their stack use grows
// with the height of the tree. Use `traverse_bfs` or `iter` on degenerate trees.
impl<T> Tree<T> {
    pub fn traverse_preorder<'a, F: FnMut(&'a T)>(&'a self, mut visit: F) {
        preorder(&self.root, &mut visit);
    }

    pub fn traverse_inorder<'a, F: FnMut(&'a T)>(&'a self, mut visit: F) {
        inorder(&self.root, &mut visit);
    }

    pub fn traverse_postorder<'a, F: FnMut(&'a T)>(&'a self, mut visit: F) {
        postorder(&self.root, &mut visit);
    }

    /// Visits level by level from the root, left to right within a level.
    pub fn traverse_bfs<'a, F: FnMut(&'a T)>(&'a self, mut visit: F) {
        let mut queue: VecDeque<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            visit(&node.value);
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
    }

    /// Values grouped by depth, the root's level first.
    pub fn levels(&self) -> Vec<Vec<&T>> {
        let mut levels = Vec::new();
        let mut current: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while !current.is_empty() {
            levels.push(current.iter().map(|node| &node.value).collect());
            current = current
                .iter()
                .flat_map(|node| node.left.as_deref().into_iter().chain(node.right.as_deref()))
                .collect();
        }
        levels
    }

    /// Number of levels; 0 for an empty tree.
    pub fn height(&self) -> usize {
        self.levels().len()
    }
}

fn preorder<'a, T, F: FnMut(&'a T)>(link: &'a Link<T>, visit: &mut F) {
    let Some(node) = link else {
        return;
    };
    visit(&node.value);
    preorder(&node.left, visit);
    preorder(&node.right, visit);
}

fn inorder<'a, T, F: FnMut(&'a T)>(link: &'a Link<T>, visit: &mut F) {
    let Some(node) = link else {
        return;
    };
    inorder(&node.left, visit);
    visit(&node.value);
    inorder(&node.right, visit);
}

fn postorder<'a, T, F: FnMut(&'a T)>(link: &'a Link<T>, visit: &mut F) {
    let Some(node) = link else {
        return;
    };
    postorder(&node.left, visit);
    postorder(&node.right, visit);
    visit(&node.value);
}
