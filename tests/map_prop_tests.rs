//! Property tests for BlobMap
//!
//! Model-checks arbitrary operation sequences against
//! `std::collections::HashMap`, which serves as the reference semantics for
//! insert/overwrite, lookup, existence, and removal.

use std::collections::HashMap;

use proptest::prelude::*;

use blobmap::{BlobMap, MapError, SetOutcome};

#[derive(Debug, Clone)]
enum Op {
    Set(String, Vec<u8>),
    Get(String),
    Has(String),
    Remove(String),
}

fn key_strategy() -> impl Strategy<Value = String> {
    // A small key universe so operations frequently hit the same keys.
    prop::sample::select(vec![
        "a".to_string(),
        "b".to_string(),
        "ab".to_string(),
        "ba".to_string(),
        "key".to_string(),
        "key2".to_string(),
        "longer-key-name".to_string(),
    ])
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (key_strategy(), prop::collection::vec(any::<u8>(), 1..16))
            .prop_map(|(k, v)| Op::Set(k, v)),
        key_strategy().prop_map(Op::Get),
        key_strategy().prop_map(Op::Has),
        key_strategy().prop_map(Op::Remove),
    ]
}

proptest! {
    // Invariants exercised:
    // - `set` reports Inserted vs Overwritten exactly as the model does.
    // - `get` returns byte-for-byte what the model holds, or absent.
    // - `has` agrees with model membership.
    // - `remove` succeeds iff the key is present; absent keys leave the map
    //   unchanged and report NotFound.
    // - `len` tracks the model's size through every step, across resizes.
    #[test]
    fn prop_matches_std_hashmap_model(ops in prop::collection::vec(op_strategy(), 1..200)) {
        let mut map = BlobMap::new().unwrap();
        let mut model: HashMap<String, Vec<u8>> = HashMap::new();

        for op in ops {
            match op {
                Op::Set(k, v) => {
                    let outcome = map.set(&k, &v).unwrap();
                    let expected = if model.insert(k, v).is_some() {
                        SetOutcome::Overwritten
                    } else {
                        SetOutcome::Inserted
                    };
                    prop_assert_eq!(outcome, expected);
                }
                Op::Get(k) => {
                    prop_assert_eq!(map.get(&k).unwrap(), model.get(&k).cloned());
                }
                Op::Has(k) => {
                    prop_assert_eq!(map.has(&k), model.contains_key(&k));
                }
                Op::Remove(k) => {
                    match map.remove(&k) {
                        Ok(()) => prop_assert!(model.remove(&k).is_some()),
                        Err(MapError::NotFound) => prop_assert!(!model.contains_key(&k)),
                        Err(e) => return Err(TestCaseError::fail(format!("unexpected error: {e}"))),
                    }
                }
            }
            prop_assert_eq!(map.len(), model.len());
        }
    }
}
