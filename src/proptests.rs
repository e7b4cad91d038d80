use crate::tree::{Node, SplayTree};
use crate::TreeError;

use proptest::prelude::*;
use proptest_derive::Arbitrary;
use std::collections::BTreeMap;

/// Walk the whole tree and check the BST property and the cached length.
fn validate_tree<K: Ord + Copy + std::fmt::Debug, V>(t: &SplayTree<K, V>) {
    // (node, exclusive lower bound, exclusive upper bound)
    let mut stack: Vec<(&Node<K, V>, Option<K>, Option<K>)> = Vec::new();
    if let Some(root) = t.root.as_deref() {
        stack.push((root, None, None));
    }

    let mut count = 0usize;
    while let Some((node, lo, hi)) = stack.pop() {
        count += 1;
        if let Some(lo) = lo {
            assert!(node.key > lo, "key {:?} not above bound {:?}", node.key, lo);
        }
        if let Some(hi) = hi {
            assert!(node.key < hi, "key {:?} not below bound {:?}", node.key, hi);
        }
        if let Some(left) = node.left.as_deref() {
            stack.push((left, lo, Some(node.key)));
        }
        if let Some(right) = node.right.as_deref() {
            stack.push((right, Some(node.key), hi));
        }
    }

    assert_eq!(count, t.len(), "reachable node count must match SplayTree::len");
    assert_eq!(t.is_empty(), count == 0);
}

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    Insert(u8, u32),
    Remove(u8),
    Find(u8),
    GreatestLessThan(u8),
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(any::<Op>(), 0..=1000)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 50_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence_with_btreemap(ops in ops_strategy()) {
        let mut t: SplayTree<u8, u32> = SplayTree::new();
        let mut m: BTreeMap<u8, u32> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    let fresh = !m.contains_key(&key);
                    m.entry(key).or_insert(value);
                    prop_assert_eq!(t.insert(key, value), fresh);
                    prop_assert_eq!(t.root_key(), Some(&key));
                }
                Op::Remove(key) => {
                    let got = t.remove(&key);
                    match m.remove(&key) {
                        Some(value) => prop_assert_eq!(got, Ok((key, value))),
                        None => prop_assert_eq!(got, Err(TreeError::NotFound)),
                    }
                }
                Op::Find(key) => {
                    let got = t.find(&key).map(|(_, v)| *v);
                    prop_assert_eq!(got, m.get(&key).copied());
                    if got.is_some() {
                        prop_assert_eq!(t.root_key(), Some(&key));
                    }
                }
                Op::GreatestLessThan(key) => {
                    let got = t.find_greatest_less_than(&key).map(|(k, v)| (*k, *v));
                    let expected = m.range(..key).next_back().map(|(k, v)| (*k, *v));
                    prop_assert_eq!(got, expected);
                }
            }

            prop_assert_eq!(t.len(), m.len());
        }

        validate_tree(&t);
        let expected: Vec<u8> = m.keys().copied().collect();
        prop_assert_eq!(t.export_keys_sorted(), expected);
    }

    #[test]
    fn prop_churn_conserves_size(
        initial in prop::collection::btree_set(any::<u16>(), 1..300),
        fresh in prop::collection::vec(any::<u16>(), 0..300),
    ) {
        let mut t: SplayTree<u16, ()> = SplayTree::new();
        for &k in &initial {
            t.insert(k, ());
        }
        let size = t.len();

        for k in fresh {
            if !t.insert(k, ()) {
                continue;
            }
            let victim = t.find_greatest_less_than(&k).map_or(k, |(g, _)| *g);
            prop_assert!(t.remove(&victim).is_ok());
            prop_assert_eq!(t.len(), size);
        }

        validate_tree(&t);
        let keys = t.export_keys_sorted();
        prop_assert_eq!(keys.len(), size);
        prop_assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }
}

/// Visit every ordering of `items` by swapping each remaining element into
/// position `fixed` in turn.
fn for_each_permutation<T: Clone>(items: &[T], mut f: impl FnMut(Vec<T>)) {
    fn permute<T: Clone>(order: &mut Vec<T>, fixed: usize, f: &mut impl FnMut(Vec<T>)) {
        if fixed == order.len() {
            f(order.clone());
            return;
        }
        for i in fixed..order.len() {
            order.swap(fixed, i);
            permute(order, fixed + 1, f);
            order.swap(fixed, i);
        }
    }

    permute(&mut items.to_vec(), 0, &mut f);
}

#[test]
fn test_for_each_permutation_visits_all_orders() {
    let mut seen = std::collections::BTreeSet::new();
    for_each_permutation(&[1, 2, 3, 4], |perm| {
        assert!(seen.insert(perm));
    });
    assert_eq!(seen.len(), 24);
}

#[test]
fn exhaustive_insert_then_find_every_order() {
    let keys = [1, 2, 3, 4, 5, 6];

    for_each_permutation(&keys, |perm| {
        let mut t: SplayTree<i32, i32> = SplayTree::new();
        for &k in &perm {
            assert!(t.insert(k, k * 10));
            validate_tree(&t);
        }
        for &k in &keys {
            assert_eq!(t.find(&k), Some((&k, &(k * 10))));
            assert_eq!(t.root_key(), Some(&k));
            validate_tree(&t);
        }
        assert_eq!(t.export_keys_sorted(), keys.to_vec());
    });
}

#[test]
fn exhaustive_remove_order_small_set() {
    let keys = [1, 2, 3, 4, 5, 6];

    for_each_permutation(&keys, |perm| {
        let mut t: SplayTree<i32, ()> = SplayTree::new();
        for &k in &[4, 2, 6, 1, 3, 5] {
            t.insert(k, ());
        }

        for (removed, k) in perm.iter().enumerate() {
            assert_eq!(t.remove(k), Ok((*k, ())));
            assert_eq!(t.remove(k), Err(TreeError::NotFound));
            assert_eq!(t.len(), keys.len() - removed - 1);
            validate_tree(&t);
        }
        assert!(t.is_empty());
        assert!(t.root.is_none());
    });
}
