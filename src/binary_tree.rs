use crate::error::NotFound;
use crate::path::Direction;
use crate::tree::TreeOps;
use log::{debug, trace};
use std::fmt;

/// Binary tree whose nodes are addressed by the left/right path from the root.
///
/// Every node caches the number of nodes in its subtree, so `size` is O(1)
/// and stays correct across insertions and deletions. The tree never
/// rebalances; operations cost O(length of the path).
pub struct Tree<T> {
    pub(crate) root: Link<T>,
}

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) size: usize,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// Read-only handle to a node inside a [`Tree`].
pub struct NodeRef<'a, T> {
    node: &'a Node<T>,
}

/// In-order iterator over the values of a [`Tree`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Tree { root: None }
    }

    pub fn with_root(value: T) -> Self {
        Tree {
            root: Some(Box::new(Node::leaf(value))),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.as_deref().map(|node| NodeRef { node })
    }

    /// Resolves `path` to a node handle, failing the same way `lookup` does.
    pub fn node(&self, path: &[Direction]) -> Result<NodeRef<'_, T>, NotFound> {
        self.node_at(path).map(|node| NodeRef { node })
    }

    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_edge(self.root.as_deref());
        iter
    }

    fn node_at(&self, path: &[Direction]) -> Result<&Node<T>, NotFound> {
        let mut cur = self.root.as_deref().ok_or(NotFound::EmptyTree)?;
        for (step, &dir) in path.iter().enumerate() {
            cur = cur
                .child(dir)
                .ok_or(NotFound::MissingChild { depth: step + 1 })?;
        }
        Ok(cur)
    }

    /// Number of nodes along `path`, root included, that already exist.
    fn existing_on_path(&self, path: &[Direction]) -> usize {
        let mut steps = path.iter();
        let mut link = &self.root;
        let mut existing = 0;
        while let Some(node) = link {
            existing += 1;
            match steps.next() {
                Some(&dir) => link = node.child_link(dir),
                None => break,
            }
        }
        existing
    }

    /// Removes the node at `path`. The path must resolve: every node passed
    /// on the way down loses exactly one descendant and shrinks accordingly.
    fn remove_at(&mut self, path: &[Direction]) -> Option<T> {
        let mut link = &mut self.root;
        for &dir in path {
            let node = link.as_mut()?;
            node.size -= 1;
            link = node.child_mut(dir);
        }

        let target = link.take()?;
        let (value, replacement) = target.detach();
        *link = replacement;
        Some(value)
    }
}

impl<T: Default> TreeOps<T> for Tree<T> {
    fn insert(&mut self, value: T, path: &[Direction]) {
        let created = path.len() + 1 - self.existing_on_path(path);
        if created > 0 {
            trace!(
                "insert at depth {} creates {created} new nodes",
                path.len()
            );
        }

        let mut link = &mut self.root;
        for (depth, &dir) in path.iter().enumerate() {
            let node = Node::enter(link, path.len() - depth + 1, created);
            link = node.child_mut(dir);
        }
        Node::enter(link, 1, created).value = value;
    }

    fn lookup(&self, path: &[Direction]) -> Result<&T, NotFound> {
        self.node_at(path).map(|node| &node.value)
    }

    fn delete(&mut self, path: &[Direction]) -> Option<T> {
        if let Err(err) = self.node_at(path) {
            debug!("nothing to delete at {path:?}: {err}");
            return None;
        }
        self.remove_at(path)
    }

    fn size(&self) -> usize {
        link_size(&self.root)
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Tree::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // unlink iteratively, a degenerate tree can be as deep as it is large
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T> Node<T> {
    fn leaf(value: T) -> Self {
        Node {
            value,
            size: 1,
            left: None,
            right: None,
        }
    }

    fn child(&self, dir: Direction) -> Option<&Node<T>> {
        self.child_link(dir).as_deref()
    }

    fn child_link(&self, dir: Direction) -> &Link<T> {
        match dir {
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }

    fn child_mut(&mut self, dir: Direction) -> &mut Link<T> {
        match dir {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Takes this node out of the tree, returning its value and the subtree
    /// that should occupy its slot instead.
    fn detach(self: Box<Self>) -> (T, Link<T>) {
        let Node {
            value,
            size,
            left,
            right,
        } = *self;

        let replacement = match (left, right) {
            (Some(left), Some(right)) => Some(Self::promote_leftmost_leaf(left, right, size - 1)),
            (Some(child), None) | (None, Some(child)) => Some(child),
            (None, None) => None,
        };
        (value, replacement)
    }

    /// Builds the subtree replacing a node with both children: the leftmost
    /// leaf of `left` is popped and adopts `left` and `right`.
    fn promote_leftmost_leaf(mut left: Box<Self>, right: Box<Self>, size: usize) -> Box<Self> {
        let popped = left.pop_leftmost_leaf();
        let mut heir = match popped {
            Some(mut leaf) => {
                leaf.left = Some(left);
                leaf
            }
            None => {
                // `left` is itself the leaf. Its left slot must stay empty,
                // otherwise it would become its own child.
                debug!("promoting direct left child");
                left
            }
        };
        heir.right = Some(right);
        heir.size = size;
        heir
    }

    /// Detaches the leaf reached by going left whenever possible and right
    /// otherwise, shrinking every node passed on the way. Returns `None` if
    /// this node is already a leaf.
    fn pop_leftmost_leaf(&mut self) -> Option<Box<Self>> {
        let mut cur = self;
        loop {
            let dir = cur.descent()?;
            cur.size -= 1;
            let slot = cur.child_mut(dir);
            if slot.as_ref().is_some_and(|child| child.is_leaf()) {
                return slot.take();
            }
            cur = slot.as_deref_mut()?;
        }
    }

    fn descent(&self) -> Option<Direction> {
        if self.left.is_some() {
            Some(Direction::Left)
        } else if self.right.is_some() {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

impl<T: Default> Node<T> {
    /// Steps into `link` during insertion, creating a placeholder node of
    /// `fresh_size` when the slot is empty and otherwise growing the existing
    /// node by the `created` nodes about to appear below it.
    fn enter(link: &mut Link<T>, fresh_size: usize, created: usize) -> &mut Node<T> {
        let fresh = link.is_none();
        let node = link.get_or_insert_with(|| Box::new(Node::leaf(T::default())));
        if fresh {
            node.size = fresh_size;
        } else {
            node.size += created;
        }
        node
    }
}

fn link_size<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.size)
}

impl<'a, T> NodeRef<'a, T> {
    pub fn value(self) -> &'a T {
        &self.node.value
    }

    /// Number of nodes in the subtree rooted here, this one included.
    pub fn size(self) -> usize {
        self.node.size
    }

    pub fn left(self) -> Option<NodeRef<'a, T>> {
        self.child(Direction::Left)
    }

    pub fn right(self) -> Option<NodeRef<'a, T>> {
        self.child(Direction::Right)
    }

    pub fn child(self, dir: Direction) -> Option<NodeRef<'a, T>> {
        self.node.child(dir).map(|node| NodeRef { node })
    }

    pub fn is_leaf(self) -> bool {
        self.node.is_leaf()
    }

    #[cfg(test)]
    pub(crate) fn as_ptr(self) -> *const () {
        std::ptr::from_ref(self.node).cast()
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<'a, T> Iter<'a, T> {
    fn push_left_edge(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_edge(node.right.as_deref());
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Tree")
            .field("size", &link_size(&self.root))
            .field("root", &self.root)
            .finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Node")
            .field("value", &self.value)
            .field("size", &self.size)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.node.fmt(fmt)
    }
}
