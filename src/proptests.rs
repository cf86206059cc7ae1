use crate::binary_tree::{NodeRef, Tree};
use crate::path::{Direction, position_path};
use crate::tree::TreeOps;
use crate::validate::{bst_path, is_bst_bounded, is_bst_inorder, is_height_balanced};

use proptest::prelude::*;
use std::collections::HashSet;

fn validate_tree(tree: &Tree<u32>) {
    let mut seen = HashSet::new();
    let mut stack: Vec<NodeRef<'_, u32>> = tree.root().into_iter().collect();
    while let Some(node) = stack.pop() {
        assert!(seen.insert(node.as_ptr()), "node reachable from two parents");

        let left = node.left().map_or(0, NodeRef::size);
        let right = node.right().map_or(0, NodeRef::size);
        assert_eq!(
            node.size(),
            1 + left + right,
            "cached size must match children"
        );

        stack.extend(node.left());
        stack.extend(node.right());
    }

    assert_eq!(seen.len(), tree.size(), "reachable node count must match size");
    assert_eq!(tree.is_empty(), tree.size() == 0);
}

fn perfect_tree(size: usize) -> Tree<u32> {
    let mut tree = Tree::new();
    for position in 1..=size {
        tree.insert(position as u32, &position_path(position));
    }
    tree
}

#[derive(Clone, Debug)]
enum Op {
    Insert(Vec<Direction>, u32),
    Delete(Vec<Direction>),
    Lookup(Vec<Direction>),
}

fn path_strategy() -> impl Strategy<Value = Vec<Direction>> {
    prop::collection::vec(any::<bool>().prop_map(Direction::from), 0..=6)
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        50 => (path_strategy(), any::<u32>()).prop_map(|(path, value)| Op::Insert(path, value)),
        35 => path_strategy().prop_map(Op::Delete),
        15 => path_strategy().prop_map(Op::Lookup),
    ];
    prop::collection::vec(op, 0..=200)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_sizes_stay_consistent(ops in ops_strategy()) {
        let mut tree: Tree<u32> = Tree::new();

        for op in ops {
            let before = tree.size();
            match op {
                Op::Insert(path, value) => {
                    let missing = (0..=path.len())
                        .filter(|&len| tree.lookup(&path[..len]).is_err())
                        .count();
                    tree.insert(value, &path);
                    prop_assert_eq!(tree.size(), before + missing);
                    prop_assert_eq!(tree.lookup(&path), Ok(&value));
                }
                Op::Delete(path) => {
                    let expected = tree.lookup(&path).ok().copied();
                    let removed = tree.delete(&path);
                    prop_assert_eq!(removed, expected);
                    prop_assert_eq!(tree.size(), before - usize::from(removed.is_some()));
                }
                Op::Lookup(path) => {
                    let _ = tree.lookup(&path);
                    prop_assert_eq!(tree.size(), before);
                }
            }

            validate_tree(&tree);
        }
    }

    #[test]
    fn prop_reinsert_is_idempotent(
        size in 0usize..=15,
        path in path_strategy(),
        value in any::<u32>()
    ) {
        let mut tree = perfect_tree(size);
        tree.insert(value, &path);
        let grown = tree.size();
        tree.insert(value, &path);
        prop_assert_eq!(tree.size(), grown);
        prop_assert_eq!(tree.lookup(&path), Ok(&value));
        validate_tree(&tree);
    }

    #[test]
    fn prop_inorder_sorted_for_bst_builds(keys in prop::collection::vec(any::<u32>(), 0..64)) {
        let mut tree = Tree::new();
        for key in &keys {
            let path = bst_path(&tree, key);
            tree.insert(*key, &path);
        }

        let mut expected = keys.clone();
        expected.sort_unstable();
        expected.dedup();

        let mut visited = Vec::new();
        tree.traverse_inorder(|value| visited.push(*value));
        prop_assert_eq!(visited, expected);
        prop_assert!(is_bst_inorder(&tree));
        prop_assert!(is_bst_bounded(&tree));
        validate_tree(&tree);
    }

    #[test]
    fn prop_delete_at_root_drains(size in 1usize..=63) {
        let mut tree = perfect_tree(size);
        let mut deleted = 0;
        while tree.delete(&[]).is_some() {
            deleted += 1;
            prop_assert_eq!(tree.size(), size - deleted);
            validate_tree(&tree);
        }
        prop_assert_eq!(deleted, size);
        prop_assert!(tree.is_empty());
    }

    #[test]
    fn prop_delete_at_positions(positions in prop::collection::vec(0usize..=15, 0..=15)) {
        let mut tree = perfect_tree(15);
        let mut deleted = 0;
        for position in positions {
            if tree.delete(&position_path(position)).is_some() {
                deleted += 1;
            }
            validate_tree(&tree);
        }
        prop_assert_eq!(tree.size(), 15 - deleted);
    }

    #[test]
    fn prop_position_built_trees_are_balanced(size in 0usize..=255) {
        let tree = perfect_tree(size);
        prop_assert!(is_height_balanced(&tree));
        prop_assert_eq!(tree.size(), size);
    }
}
