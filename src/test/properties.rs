use crate::algo::Algorithm;
use crate::trace::TraceEvent;
use crate::viz::{SnapshotPolicy, VisualState};
use proptest::prelude::*;

fn algorithm_strategy() -> impl Strategy<Value = Algorithm> {
    prop_oneof![
        Just(Algorithm::Bubble),
        Just(Algorithm::Insertion),
        Just(Algorithm::Quick),
    ]
}

fn values_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-50i64..50, 0..32)
}

proptest! {
    #[test]
    fn trace_is_valid_with_single_terminal_done(
        algo in algorithm_strategy(),
        values in values_strategy(),
    ) {
        let trace = algo.generate(&values);
        prop_assert!(trace.validate().is_ok());
        prop_assert_eq!(trace.input_len, values.len());
        prop_assert_eq!(trace.events.iter().filter(|e| e.is_done()).count(), 1);
        prop_assert_eq!(trace.events.last(), Some(&TraceEvent::Done));
    }

    #[test]
    fn replaying_trace_sorts_the_input(
        algo in algorithm_strategy(),
        values in values_strategy(),
        keep in any::<bool>(),
    ) {
        let policy = if keep { SnapshotPolicy::KeepSorted } else { SnapshotPolicy::ClearAll };
        let trace = algo.generate(&values);
        let mut vs = VisualState::new(values.clone(), policy);
        prop_assert_eq!(vs.apply_all(&trace), trace.len());

        let mut expected = values.clone();
        expected.sort();
        prop_assert_eq!(vs.values(), expected.as_slice());
        prop_assert!(vs.highlights().is_empty());
    }

    #[test]
    fn generation_is_deterministic(
        algo in algorithm_strategy(),
        values in values_strategy(),
    ) {
        prop_assert_eq!(algo.generate(&values), algo.generate(&values));
    }

    #[test]
    fn every_swap_is_followed_by_matching_snapshot(
        algo in algorithm_strategy(),
        values in values_strategy(),
    ) {
        let trace = algo.generate(&values);
        let mut vs = VisualState::new(values.clone(), SnapshotPolicy::ClearAll);
        for pair in trace.events.windows(2) {
            vs.apply(&pair[0]);
            if let TraceEvent::Swap { .. } = pair[0] {
                prop_assert_eq!(
                    &pair[1],
                    &TraceEvent::ArraySnapshot { values: vs.values().to_vec() }
                );
            }
        }
    }
}
