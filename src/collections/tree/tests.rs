#![cfg(test)]

use std::cmp::Ordering;

use quickcheck::{Arbitrary, Gen, quickcheck};

use super::*;
use crate::util::alloc::DropCounter;

fn in_order<T: Clone, C>(tree: &Tree<T, C>) -> Vec<T> {
    tree.iter().cloned().collect()
}

/// The 14-value textbook tree used by the removal scenarios: 12 at the root with two full-ish
/// subtrees on either side.
fn textbook_tree() -> Tree<i32> {
    Tree::from_iter([12, 5, 15, 3, 7, 13, 17, 1, 9, 14, 20, 8, 11, 18])
}

#[test]
fn test_insert_and_in_order() {
    let tree = textbook_tree();

    assert_eq!(tree.len(), 14);
    assert_eq!(
        in_order(&tree),
        [1, 3, 5, 7, 8, 9, 11, 12, 13, 14, 15, 17, 18, 20],
        "An in-order traversal must yield ascending order regardless of insertion order."
    );
    tree.assert_structure();
}

#[test]
fn test_remove_root_splices_successor() {
    let mut tree = textbook_tree();

    assert_eq!(
        tree.remove(&12),
        Some(12),
        "Removing the root (which has two children) should return its value."
    );
    assert_eq!(
        in_order(&tree),
        [1, 3, 5, 7, 8, 9, 11, 13, 14, 15, 17, 18, 20],
        "The in-order successor 13 should have been spliced into the root's place."
    );
    assert_eq!(tree.len(), 13);
    tree.assert_structure();
}

#[test]
fn test_remove_leaf_and_one_child() {
    let mut tree = textbook_tree();

    assert_eq!(tree.remove(&1), Some(1), "Leaf removal.");
    tree.assert_structure();

    // 9 now has only the left child 8.
    assert_eq!(tree.remove(&9), Some(9), "One-child removal.");
    tree.assert_structure();

    assert_eq!(
        in_order(&tree),
        [3, 5, 7, 8, 11, 12, 13, 14, 15, 17, 18, 20]
    );
    assert_eq!(tree.len(), 12);
}

#[test]
fn test_remove_absent_is_noop() {
    let mut tree = Tree::from_iter([2, 1, 3]);

    assert_eq!(tree.remove(&9), None, "Removing an absent value should be a no-op.");
    assert_eq!(tree.len(), 3);
    assert_eq!(in_order(&tree), [1, 2, 3]);
}

#[test]
fn test_find_hits_and_misses() {
    let tree = Tree::from_iter([1, 3, 5, 7, 9]);

    assert_eq!(tree.find(&5), Some(&5), "A present value must be found.");
    assert_eq!(tree.find(&6), None, "An absent value must not be found.");
    assert!(tree.contains(&1) && tree.contains(&9));
    assert!(!tree.contains(&0));
}

#[test]
fn test_find_by_key() {
    #[derive(Debug, PartialEq)]
    struct User {
        id: u32,
        name: &'static str,
    }

    let mut tree = Tree::with_comparator(|a: &User, b: &User| a.id.cmp(&b.id));
    tree.insert(User { id: 31, name: "ada" });
    tree.insert(User { id: 7, name: "grace" });
    tree.insert(User { id: 52, name: "edsger" });

    let by_id = |id: &u32, user: &User| id.cmp(&user.id);

    assert_eq!(
        tree.find_by(&7, by_id).map(|u| u.name),
        Some("grace"),
        "A key lookup should not require constructing a full value."
    );
    assert_eq!(tree.find_by(&8, by_id), None);
}

#[test]
fn test_custom_comparator_reverses_order() {
    let mut tree = Tree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    tree.extend([1, 2, 3]);

    assert_eq!(
        in_order(&tree),
        [3, 2, 1],
        "In-order traversal follows the injected comparator, not Ord."
    );
}

#[test]
fn test_duplicates_go_right_and_survive() {
    let mut tree = Tree::from_iter([5, 3, 5, 5, 1]);

    assert_eq!(tree.len(), 5);
    assert_eq!(in_order(&tree), [1, 3, 5, 5, 5]);

    assert_eq!(tree.remove(&5), Some(5), "Removal should take one duplicate at a time.");
    assert_eq!(in_order(&tree), [1, 3, 5, 5]);
    tree.assert_structure();
}

#[test]
fn test_insert_remove_round_trip() {
    let mut tree = Tree::from_iter([10, 4, 16, 2, 8, 14, 20]);
    let before = in_order(&tree);

    tree.insert(7);
    assert_eq!(tree.remove(&7), Some(7));

    assert_eq!(
        in_order(&tree),
        before,
        "Inserting then removing a value should leave the in-order sequence unchanged."
    );
    tree.assert_structure();
}

#[test]
fn test_count_matches_traversal() {
    let mut tree = textbook_tree();
    tree.remove(&12);
    tree.remove(&1);
    tree.insert(6);

    assert_eq!(
        tree.len(),
        tree.iter().count(),
        "The stored length should always match a full in-order traversal."
    );
}

#[test]
fn test_iteration_both_directions() {
    let tree = Tree::from_iter([2, 1, 3]);

    assert_eq!(in_order(&tree), [1, 2, 3]);
    assert_eq!(
        tree.iter().rev().copied().collect::<Vec<_>>(),
        [3, 2, 1],
        "Reversed iteration should yield descending order."
    );
    assert_eq!(tree.iter().len(), 3);
}

#[test]
fn test_pop_first_and_last() {
    let mut tree = Tree::from_iter([2, 1, 3]);

    assert_eq!(tree.pop_first(), Some(1));
    assert_eq!(tree.pop_last(), Some(3));
    assert_eq!(tree.pop_first(), Some(2));
    assert_eq!(tree.pop_first(), None, "Popping an empty tree should report absence.");
    assert!(tree.is_empty());
}

#[test]
fn test_into_iter_drains_sorted() {
    let tree = textbook_tree();
    let drained: Vec<_> = tree.into_iter().collect();

    assert_eq!(drained, [1, 3, 5, 7, 8, 9, 11, 12, 13, 14, 15, 17, 18, 20]);
}

#[test]
fn test_clear() {
    let mut tree = textbook_tree();
    tree.clear();

    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.find(&12), None);

    tree.insert(1);
    assert_eq!(in_order(&tree), [1], "A cleared tree should be reusable.");
}

#[test]
fn test_cursor_yields_sorted_order() {
    let mut tree = textbook_tree();

    let mut cursor = tree.cursor_mut();
    let mut seen = Vec::new();
    while let Some(value) = cursor.read() {
        seen.push(*value);
        cursor.move_next();
    }

    assert_eq!(
        seen,
        [1, 3, 5, 7, 8, 9, 11, 12, 13, 14, 15, 17, 18, 20],
        "The marking cursor must produce the same in-order sequence as the plain iterator."
    );
    assert!(cursor.is_finished());
}

#[test]
fn test_cursor_remove_all_while_iterating() {
    let mut tree = textbook_tree();

    let mut cursor = tree.cursor_mut();
    let mut removed = Vec::new();
    while !cursor.is_finished() {
        removed.push(cursor.remove_current().expect("cursor is on a node"));
    }

    assert_eq!(
        removed,
        [1, 3, 5, 7, 8, 9, 11, 12, 13, 14, 15, 17, 18, 20],
        "Draining through the cursor should remove values in traversal order."
    );
    assert!(tree.is_empty());
    tree.assert_structure();
}

#[test]
fn test_cursor_remove_mid_traversal() {
    let mut tree = Tree::from_iter([2, 1, 3]);

    let mut cursor = tree.cursor_mut();
    let mut seen = Vec::new();
    while let Some(value) = cursor.read() {
        if *value == 2 {
            assert_eq!(cursor.remove_current(), Some(2));
            assert_eq!(
                cursor.read(),
                Some(&3),
                "After a removal the cursor should be reading the removed value's successor."
            );
        } else {
            seen.push(*value);
            cursor.move_next();
        }
    }

    assert_eq!(seen, [1, 3], "The traversal should continue over the remaining values.");
    assert_eq!(in_order(&tree), [1, 3]);
    tree.assert_structure();
}

#[test]
fn test_cursor_remove_root_mid_traversal() {
    let mut tree = textbook_tree();

    let mut cursor = tree.cursor_mut();
    let mut seen = Vec::new();
    while let Some(value) = cursor.read() {
        if *value == 12 {
            // The root, with two children: its successor 13 is spliced into its place and the
            // cursor must resume there.
            assert_eq!(cursor.remove_current(), Some(12));
        } else {
            seen.push(*value);
            cursor.move_next();
        }
    }

    assert_eq!(
        seen,
        [1, 3, 5, 7, 8, 9, 11, 13, 14, 15, 17, 18, 20],
        "Root removal mid-traversal should not skip or repeat any remaining value."
    );
    assert_eq!(tree.len(), 13);
    tree.assert_structure();
}

#[test]
fn test_cursor_remove_leaf_and_one_child_mid_traversal() {
    //       4
    //      / \
    //     2   6
    //    /     \
    //   1       7
    let mut tree = Tree::from_iter([4, 2, 6, 1, 7]);

    let mut cursor = tree.cursor_mut();
    assert_eq!(cursor.read(), Some(&1));
    // Remove the leaf 1; its parent 2 is the continuation.
    assert_eq!(cursor.remove_current(), Some(1));
    assert_eq!(cursor.read(), Some(&2));

    cursor.move_next();
    cursor.move_next();
    assert_eq!(cursor.read(), Some(&6));
    // 6 has the single child 7, which gets spliced into its place.
    assert_eq!(cursor.remove_current(), Some(6));
    assert_eq!(cursor.read(), Some(&7));

    cursor.move_next();
    assert!(cursor.is_finished());
    assert_eq!(in_order(&tree), [2, 4, 7]);
    tree.assert_structure();
}

#[test]
fn test_cursor_remove_single_element() {
    let mut tree = Tree::from_iter([5]);

    let mut cursor = tree.cursor_mut();
    assert_eq!(cursor.remove_current(), Some(5));
    assert!(cursor.is_finished());
    assert_eq!(
        cursor.remove_current(),
        None,
        "Removing at a finished cursor should remove nothing."
    );
    assert!(tree.is_empty());
}

#[test]
fn test_stale_marks_do_not_confuse_a_new_cursor() {
    let mut tree = Tree::from_iter([2, 1, 3]);

    // Walk a cursor part-way and abandon it, leaving its marks on the nodes.
    let mut cursor = tree.cursor_mut();
    cursor.move_next();
    drop(cursor);

    let mut cursor = tree.cursor_mut();
    let mut seen = Vec::new();
    while let Some(value) = cursor.read() {
        seen.push(*value);
        cursor.move_next();
    }

    assert_eq!(
        seen,
        [1, 2, 3],
        "A fresh cursor has a fresh identity and must ignore marks left by earlier ones."
    );
}

#[test]
fn test_drops_each_value_exactly_once() {
    let counter = DropCounter::new();

    let mut tree = Tree::with_comparator(|_: &DropCounter, _: &DropCounter| Ordering::Less);
    for _ in 0..8 {
        tree.insert(counter.clone());
    }

    tree.pop_first();
    assert_eq!(counter.total(), 1, "A popped value drops when the caller discards it.");

    let mut cursor = tree.cursor_mut();
    cursor.move_next();
    cursor.remove_current();
    assert_eq!(counter.total(), 2, "Cursor removal drops the returned value once discarded.");

    drop(tree);
    assert_eq!(
        counter.total(),
        8,
        "Dropping the tree should free every remaining node exactly once."
    );
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Insert(i8),
    Remove(i8),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(i8::arbitrary(g))
        } else {
            Op::Remove(i8::arbitrary(g))
        }
    }
}

#[test]
fn test_quickcheck_matches_sorted_model() {
    fn prop(ops: Vec<Op>) -> bool {
        let mut tree = Tree::new();
        let mut model: Vec<i8> = Vec::new();

        for op in ops {
            match op {
                Op::Insert(v) => {
                    tree.insert(v);
                    model.push(v);
                    model.sort_unstable();
                },
                Op::Remove(v) => {
                    let expected = model.iter().position(|i| *i == v);
                    if let Some(index) = expected {
                        model.remove(index);
                    }
                    assert_eq!(tree.remove(&v).is_some(), expected.is_some());
                },
            }
            tree.assert_structure();

            let traversal: Vec<i8> = tree.iter().copied().collect();
            assert!(
                traversal.windows(2).all(|pair| pair[0] <= pair[1]),
                "in-order traversal must be non-decreasing"
            );
            assert_eq!(tree.len(), traversal.len());
        }

        tree.iter().eq(model.iter())
    }

    quickcheck(prop as fn(Vec<Op>) -> bool);
}

#[test]
fn test_quickcheck_cursor_agrees_with_iter() {
    fn prop(values: Vec<i8>) -> bool {
        let mut tree = Tree::from_iter(values);
        let expected: Vec<i8> = tree.iter().copied().collect();

        let mut cursor = tree.cursor_mut();
        let mut seen = Vec::new();
        while let Some(value) = cursor.read() {
            seen.push(*value);
            cursor.move_next();
        }

        seen == expected
    }

    quickcheck(prop as fn(Vec<i8>) -> bool);
}
