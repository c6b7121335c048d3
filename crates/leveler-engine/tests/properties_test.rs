//! Property tests for the stepping loop.

mod common;

use leveler_core::config::{AdjustConfig, ColumnsConfig};
use leveler_core::types::Termination;
use leveler_engine::{FieldMap, RecordAdjuster};
use proptest::prelude::*;
use serde_json::json;

use common::*;

fn run(payable: f64, actual: f64, cap: u64) -> (MemoryStore, leveler_core::types::AdjustmentResult) {
    let store = MemoryStore::new();
    let id = store.add("r", json!(payable), json!(actual), json!(1));
    let fields = FieldMap::resolve(&store, &ColumnsConfig::default()).unwrap();
    let cfg = AdjustConfig {
        hard_cap: Some(cap),
        ..Default::default()
    };
    let result = RecordAdjuster::new(&store, &fields, &cfg).adjust(&id).unwrap();
    (store, result)
}

proptest! {
    #[test]
    fn integer_gaps_match_in_exactly_distance_steps(
        payable in -500i64..500,
        actual in -500i64..500,
    ) {
        let (store, result) = run(payable as f64, actual as f64, 20_000);
        let distance = (actual - payable).unsigned_abs();

        prop_assert_eq!(result.steps, distance);
        prop_assert_eq!(store.total_writes() as u64, distance);
        prop_assert_eq!(result.final_payable, Some(actual as f64));
        if distance > 0 {
            prop_assert_eq!(result.termination, Some(Termination::Matched));
            prop_assert!(result.changed);
        } else {
            prop_assert!(!result.changed);
        }
    }

    #[test]
    fn every_write_moves_one_unit_toward_target(
        payable in -200.0f64..200.0,
        actual in -200.0f64..200.0,
        cap in 1u64..600,
    ) {
        let (store, result) = run(payable, actual, cap);
        let id = leveler_core::types::RecordId::new("r");
        let writes = store.writes_for(&id);
        let step = if actual > payable { 1.0 } else { -1.0 };

        let mut previous = payable;
        for w in &writes {
            prop_assert_eq!(*w, previous + step);
            previous = *w;
        }

        let limit = ((actual - payable).abs() * 2.0 + 10.0).ceil().min(cap as f64) as u64;
        prop_assert!(result.steps <= limit);
        prop_assert_eq!(writes.len() as u64, result.steps);
        if result.termination == Some(Termination::MaxLoop) {
            prop_assert_eq!(result.steps, limit);
        }
    }
}
