//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check store behavior over generated keys, values and
//! operation sequences. Time is simulated with `ManualClock`.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use tokio_test::block_on;

use crate::cache::{CacheEntry, CacheStore, Clock, ManualClock};

// == Strategies ==
/// Generates valid cache keys (non-empty)
fn valid_key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,64}".prop_map(|s| s)
}

/// Generates cache values
fn valid_value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,256}".prop_map(|s| s)
}

/// Generates positive TTLs between 1ms and 1h
fn ttl_strategy() -> impl Strategy<Value = Duration> {
    (1u64..3_600_000).prop_map(Duration::from_millis)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: String, value: String },
    Get { key: String },
    Delete { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    // A small key space so operations collide
    let key = "[a-e]{1,2}";
    prop_oneof![
        (key, valid_value_strategy()).prop_map(|(key, value)| CacheOp::Put { key, value }),
        key.prop_map(|key| CacheOp::Get { key }),
        key.prop_map(|key| CacheOp::Delete { key }),
    ]
}

fn new_store() -> (CacheStore, ManualClock) {
    let clock = ManualClock::new();
    (CacheStore::new(Arc::new(clock.clone())), clock)
}

fn put(store: &CacheStore, key: &str, value: &str, ttl: Option<Duration>) -> CacheEntry {
    let entry = CacheEntry::new(key.to_string(), value.to_string(), ttl, store.clock().now());
    block_on(store.put(entry))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Storing a pair and reading it back before expiry returns the same pair.
    #[test]
    fn prop_roundtrip_storage(
        key in valid_key_strategy(),
        value in valid_value_strategy(),
        ttl in ttl_strategy()
    ) {
        let (store, _) = new_store();

        put(&store, &key, &value, Some(ttl));

        let entry = block_on(store.get(&key)).unwrap();
        prop_assert_eq!(entry.key, key);
        prop_assert_eq!(entry.value, value);
    }

    // A second put replaces the value and the expiry together.
    #[test]
    fn prop_overwrite_semantics(
        key in valid_key_strategy(),
        value1 in valid_value_strategy(),
        value2 in valid_value_strategy(),
        ttl1 in ttl_strategy(),
        ttl2 in proptest::option::of(ttl_strategy())
    ) {
        let (store, _) = new_store();

        put(&store, &key, &value1, Some(ttl1));
        let second = put(&store, &key, &value2, ttl2);

        let entry = block_on(store.get(&key)).unwrap();
        prop_assert_eq!(&entry, &second);
        prop_assert_eq!(block_on(store.len()), 1);
    }

    // After the TTL has elapsed a get reports not found, with or without a sweep.
    #[test]
    fn prop_expiry_boundary(
        key in valid_key_strategy(),
        value in valid_value_strategy(),
        ttl in ttl_strategy(),
        extra in 0u64..10_000
    ) {
        let (store, clock) = new_store();

        put(&store, &key, &value, Some(ttl));
        clock.advance(ttl + Duration::from_millis(extra));

        prop_assert!(block_on(store.get(&key)).is_err());
    }

    // Purge leaves exactly the live entries behind.
    #[test]
    fn prop_purge_keeps_only_live(
        entries in prop::collection::hash_map(valid_key_strategy(), 1u64..100, 1..40),
        elapsed in 0u64..120
    ) {
        let (store, clock) = new_store();

        for (key, ttl_secs) in &entries {
            put(&store, key, "v", Some(Duration::from_secs(*ttl_secs)));
        }
        clock.advance(Duration::from_secs(elapsed));

        let removed = block_on(store.purge_expired());
        let expected_live = entries.values().filter(|ttl| **ttl > elapsed).count();

        prop_assert_eq!(block_on(store.len()), expected_live);
        prop_assert_eq!(removed, entries.len() - expected_live);
    }

    // Prefix search returns exactly the live keys starting with the prefix.
    #[test]
    fn prop_prefix_completeness(
        keys in prop::collection::hash_set("[ab]{1,4}", 1..20),
        prefix in "[ab]{0,2}"
    ) {
        let (store, _) = new_store();

        for key in &keys {
            put(&store, key, "v", None);
        }

        let expected: HashSet<String> = keys
            .iter()
            .filter(|key| key.starts_with(prefix.as_str()))
            .cloned()
            .collect();

        match block_on(store.get_by_prefix(&prefix)) {
            Ok(found) => {
                let found: HashSet<String> = found.into_iter().map(|entry| entry.key).collect();
                prop_assert_eq!(found, expected);
            }
            Err(_) => prop_assert!(expected.is_empty(), "NotFound despite matches"),
        }
    }

    // Any sequence of operations agrees with a plain HashMap model, and the
    // hit/miss counters agree with it too.
    #[test]
    fn prop_matches_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let (store, _) = new_store();
        let mut model: HashMap<String, String> = HashMap::new();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    put(&store, &key, &value, None);
                    model.insert(key, value);
                }
                CacheOp::Get { key } => {
                    let got = block_on(store.get(&key)).ok().map(|entry| entry.value);
                    if got.is_some() {
                        expected_hits += 1;
                    } else {
                        expected_misses += 1;
                    }
                    prop_assert_eq!(got.as_ref(), model.get(&key));
                }
                CacheOp::Delete { key } => {
                    let removed = block_on(store.delete(&key));
                    prop_assert_eq!(removed, model.remove(&key).is_some());
                }
            }
        }

        let stats = block_on(store.stats());
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.total_entries, model.len());
        prop_assert_eq!(block_on(store.get_all()).len(), model.len());
    }
}
