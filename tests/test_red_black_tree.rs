use balanced_collections::red_black_tree::RedBlackMap;
use rand::Rng;
use std::collections::BTreeMap;

const NUM_OF_OPERATIONS: usize = 10_000;

#[test]
fn int_test_random_inserts() {
    let mut rng = rand::thread_rng();
    let mut map = RedBlackMap::new();
    let mut expected = BTreeMap::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen::<u32>();
        let val = rng.gen::<u32>();

        map.insert(key, val);
        expected.insert(key, val);
    }

    assert!(map.is_valid());
    assert_eq!(map.len(), expected.len());
    assert_eq!(
        map.iter().collect::<Vec<_>>(),
        expected.iter().collect::<Vec<_>>(),
    );
}

#[test]
fn int_test_invariants_after_every_insert() {
    let mut rng = rand::thread_rng();
    let mut map = RedBlackMap::new();

    for _ in 0..1000 {
        let key = rng.gen_range(0, 500u32);
        map.insert(key, key);
        assert!(map.is_valid());
    }
}

#[test]
fn int_test_sorted_inserts() {
    let mut map = RedBlackMap::new();
    for key in 0..1024u32 {
        map.insert(key, key);
    }

    assert!(map.is_valid());
    assert_eq!(map.len(), 1024);
    assert_eq!(map.min(), Some(&0));
    assert_eq!(map.max(), Some(&1023));
}
