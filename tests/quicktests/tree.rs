use std::collections::BTreeSet;

use bst::{Node, Tree};
use quickcheck_macros::quickcheck;

use crate::{heights_consistent, in_order};

#[quickcheck]
fn set_semantics(xs: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs.clone());
    let distinct: BTreeSet<_> = xs.into_iter().collect();

    tree.len() == distinct.len() && in_order(&tree) == distinct.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn in_order_strictly_increasing(xs: Vec<i8>, inserts: Vec<i8>) -> bool {
    let mut tree = Tree::from_values(xs);
    for x in inserts {
        tree.insert(x);
    }

    in_order(&tree).windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.find(x).map(Node::value) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs.clone());
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none() && tree.depth(x).is_none() && tree.height(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::from_values(xs.clone());
    for delete in &deletes {
        tree.delete(delete);
    }

    let deleted: BTreeSet<_> = deletes.into_iter().collect();
    let still_present: BTreeSet<_> = xs.into_iter().filter(|x| !deleted.contains(x)).collect();

    deleted.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
        && tree.len() == still_present.len()
        && heights_consistent(&tree)
}

#[quickcheck]
fn insert_then_delete_restores(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = Tree::from_values(xs);
    if tree.contains(&x) {
        return true;
    }
    let before = in_order(&tree);

    tree.insert(x);
    let found = tree.find(&x).map(Node::value) == Some(&x);
    tree.delete(&x);

    found && in_order(&tree) == before && heights_consistent(&tree)
}

#[quickcheck]
fn heights_stay_correct(xs: Vec<i8>, inserts: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::from_values(xs);
    for x in inserts {
        tree.insert(x);
        if !heights_consistent(&tree) {
            return false;
        }
    }
    for x in &deletes {
        tree.delete(x);
        if !heights_consistent(&tree) {
            return false;
        }
    }

    true
}

#[quickcheck]
fn rebalance_keeps_values_and_balances(inserts: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in inserts {
        tree.insert(x);
    }
    let before = in_order(&tree);

    tree.rebalance();

    tree.is_balanced() && in_order(&tree) == before && heights_consistent(&tree)
}

#[quickcheck]
fn root_depth_and_height(xs: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs);
    match tree.root().map(|n| *n.value()) {
        None => tree.tree_height().is_none(),
        Some(root) => tree.depth(&root) == Some(0) && tree.height(&root) == tree.tree_height(),
    }
}

#[quickcheck]
fn depth_matches_level_order(xs: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs);
    let Ok(depths) = tree.level_order_for_each(Some(|n: &Node<i8>| tree.depth(n.value()))) else {
        return false;
    };

    // Breadth first never goes back up a level.
    depths.windows(2).all(|w| w[0] <= w[1]) && depths.iter().all(Option::is_some)
}

#[quickcheck]
fn traversals_visit_every_node_once(xs: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs);
    let sorted = in_order(&tree);

    let mut pre = tree.pre_order_for_each(|n| *n.value());
    let mut post = tree.post_order_for_each(|n| *n.value());
    pre.sort_unstable();
    post.sort_unstable();

    pre == sorted && post == sorted
}

#[test]
fn sample_traversals() {
    let tree = Tree::from_values([7, 3, 9, 1, 5, 3, 7, 2, 8]);
    let root = tree.root().map(|n| *n.value());

    assert_eq!(in_order(&tree), [1, 2, 3, 5, 7, 8, 9]);
    assert_eq!(tree.pre_order_for_each(|n| *n.value()).first().copied(), root);

    let levels = tree
        .level_order_for_each(Some(|n: &Node<i32>| *n.value()))
        .unwrap();
    assert_eq!(levels[0], 5);
    let children: BTreeSet<_> = levels[1..3].iter().copied().collect();
    assert_eq!(children, BTreeSet::from([2, 8]));
}

#[test]
fn ascending_inserts_degrade_until_rebalanced() {
    let mut tree = Tree::new();
    for x in 0..100 {
        tree.insert(x);
    }

    assert!(!tree.is_balanced());
    assert_eq!(tree.tree_height(), Some(99));

    tree.rebalance();

    assert!(tree.is_balanced());
    assert_eq!(tree.tree_height(), Some(6));
}
