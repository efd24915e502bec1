use balanced_collections::avl_tree::AvlMap;
use balanced_collections::bst::BstMap;
use balanced_collections::red_black_tree::RedBlackMap;
use quickcheck::quickcheck;
use std::collections::BTreeMap;

// Each op is (is_insert, key, value); removals ignore the value. Interpreting
// arbitrary tuples keeps the generator trivial while still fuzzing arbitrary
// interleavings of the two operations.
fn apply_ops(ops: &[(bool, i8, i8)], map: &mut AvlMap<i8, i8>, expected: &mut BTreeMap<i8, i8>) {
    for &(is_insert, key, value) in ops {
        if is_insert {
            map.insert(key, value);
            expected.insert(key, value);
        } else {
            assert_eq!(map.remove(&key).map(|pair| pair.1), expected.remove(&key));
        }
    }
}

#[test]
fn prop_avl_matches_btreemap() {
    fn prop(ops: Vec<(bool, i8, i8)>) -> bool {
        let mut map = AvlMap::new();
        let mut expected = BTreeMap::new();
        apply_ops(&ops, &mut map, &mut expected);

        map.len() == expected.len()
            && map.iter().collect::<Vec<_>>() == expected.iter().collect::<Vec<_>>()
    }
    quickcheck(prop as fn(Vec<(bool, i8, i8)>) -> bool);
}

#[test]
fn prop_avl_invariants_hold_after_every_op() {
    fn prop(ops: Vec<(bool, i8, i8)>) -> bool {
        let mut map = AvlMap::new();
        for &(is_insert, key, value) in &ops {
            if is_insert {
                map.insert(key, value);
            } else {
                map.remove(&key);
            }
            if !map.is_ordered() || !map.is_balanced() {
                return false;
            }
        }
        true
    }
    quickcheck(prop as fn(Vec<(bool, i8, i8)>) -> bool);
}

#[test]
fn prop_avl_upsert_keeps_len_and_latest_value() {
    fn prop(key: i8, first: i8, second: i8) -> bool {
        let mut map = AvlMap::new();
        map.insert(key, first);
        map.insert(key, second);
        map.len() == 1 && map.get(&key) == Some(&second)
    }
    quickcheck(prop as fn(i8, i8, i8) -> bool);
}

#[test]
fn prop_red_black_matches_btreemap() {
    fn prop(pairs: Vec<(i8, i8)>) -> bool {
        let mut map = RedBlackMap::new();
        let mut expected = BTreeMap::new();
        for &(key, value) in &pairs {
            map.insert(key, value);
            expected.insert(key, value);
        }

        map.len() == expected.len()
            && map.iter().collect::<Vec<_>>() == expected.iter().collect::<Vec<_>>()
    }
    quickcheck(prop as fn(Vec<(i8, i8)>) -> bool);
}

#[test]
fn prop_red_black_invariants_hold_after_every_insert() {
    fn prop(keys: Vec<i8>) -> bool {
        let mut map = RedBlackMap::new();
        for &key in &keys {
            map.insert(key, key);
            if !map.is_valid() {
                return false;
            }
        }
        true
    }
    quickcheck(prop as fn(Vec<i8>) -> bool);
}

#[test]
fn prop_bst_matches_btreemap() {
    fn prop(ops: Vec<(bool, i8, i8)>) -> bool {
        let mut map = BstMap::new();
        let mut expected = BTreeMap::new();
        for &(is_insert, key, value) in &ops {
            if is_insert {
                map.insert(key, value);
                expected.insert(key, value);
            } else {
                map.remove(&key);
                expected.remove(&key);
            }
        }

        map.len() == expected.len()
            && map.iter().collect::<Vec<_>>() == expected.iter().collect::<Vec<_>>()
    }
    quickcheck(prop as fn(Vec<(bool, i8, i8)>) -> bool);
}
