use balanced_collections::bst::BstMap;
use rand::Rng;
use std::collections::BTreeMap;

const NUM_OF_OPERATIONS: usize = 10_000;

#[test]
fn int_test_random_inserts_and_removes() {
    let mut rng = rand::thread_rng();
    let mut map = BstMap::new();
    let mut expected = BTreeMap::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 1000u32);
        let val = rng.gen::<u32>();

        map.insert(key, val);
        expected.insert(key, val);
    }

    assert_eq!(map.len(), expected.len());
    assert_eq!(
        map.iter().collect::<Vec<_>>(),
        expected.iter().collect::<Vec<_>>(),
    );

    let keys = expected.keys().cloned().collect::<Vec<u32>>();
    for key in keys {
        if rng.gen::<bool>() {
            assert_eq!(map.remove(&key).map(|pair| pair.1), expected.remove(&key));
        }
    }

    assert_eq!(map.len(), expected.len());
    assert_eq!(
        map.iter().collect::<Vec<_>>(),
        expected.iter().collect::<Vec<_>>(),
    );
}
