#![cfg(test)]

// Property tests for HashTable kept inside the crate so they can call the
// test-only invariant walker on internal structure.

use crate::chained::HashTable;
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, u16),
    Remove(usize),
    Get(usize),
    Resize,
    Iterate,
}

fn value_from(v: u16) -> String {
    format!("v{v}")
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            4 => (idx.clone(), any::<u16>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            2 => idx.clone().prop_map(OpI::Remove),
            3 => idx.clone().prop_map(OpI::Get),
            1 => Just(OpI::Resize),
            1 => Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Runs one scenario against a std::collections::HashMap model.
// Invariants exercised across random operation sequences:
// - Insert is infallible; overwrite keeps exactly one entry for the key.
// - `get` parity with the model for every pool key after every op.
// - `remove` succeeds iff the model holds the key; a miss mutates nothing.
// - `resize` exactly doubles the capacity and loses no pair.
// - `iter` yields each live pair exactly once.
// - `len`/`is_empty` parity and the structural chain invariants after each op.
fn run_scenario(
    initial_capacity: usize,
    pool: Vec<String>,
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let mut sut = HashTable::new(initial_capacity).expect("test capacity is valid");
    let mut model: HashMap<String, String> = HashMap::new();

    for op in ops {
        match op {
            OpI::Insert(i, v) => {
                let k = pool[i].clone();
                let v = value_from(v);
                sut.insert(k.clone(), v.clone());
                model.insert(k, v);
            }
            OpI::Remove(i) => {
                let k = &pool[i];
                let expected = model.remove(k);
                prop_assert_eq!(sut.remove(k).is_ok(), expected.is_some());
            }
            OpI::Get(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.get(k), model.get(k).map(String::as_str));
            }
            OpI::Resize => {
                // Bound the bucket allocation; scenarios with many resize ops
                // would otherwise double past any sensible size.
                if sut.capacity() < 1 << 12 {
                    let before = sut.capacity();
                    sut = sut.resize();
                    prop_assert_eq!(sut.capacity(), before * 2);
                }
            }
            OpI::Iterate => {
                prop_assert_eq!(sut.iter().count(), sut.len(), "iter yielded a pair twice");
                let s_pairs: BTreeMap<_, _> = sut
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect();
                let m_pairs: BTreeMap<_, _> =
                    model.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
                prop_assert_eq!(s_pairs, m_pairs);
            }
        }

        // Post-conditions after each op
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        for k in &pool {
            prop_assert_eq!(sut.get(k), model.get(k).map(String::as_str));
        }
        sut.check_invariants();
    }
    Ok(())
}

// Property: state-machine equivalence against std::collections::HashMap,
// starting from a small but plural bucket count.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        run_scenario(4, pool, ops)?;
    }
}

// Property: same state-machine invariants starting from a single bucket, so
// every key shares one chain until a resize spreads them. This stresses the
// chain walk, splice, and unlink paths rather than bucket dispersal.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_single_bucket((pool, ops) in arb_scenario()) {
        run_scenario(1, pool, ops)?;
    }
}
