#![no_main]

// Harness: merge arbitrary clock pairs and check the accepted results against
// the ordering and validation bounds.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use hlc_core::error::ClockError;
use hlc_core::{HybridLogicalClock, NodeId, Timestamp, MAX_COUNTER};

#[derive(Arbitrary, Debug)]
struct MergeInput {
    local_ts: i64,
    local_counter: u32,
    remote_ts: i64,
    remote_counter: u32,
    same_node: bool,
    now: i64,
    max_drift: u64,
}

fuzz_target!(|input: MergeInput| {
    let local_node: NodeId = "aaaaaaaaaaaaaaaa".parse().unwrap();
    let remote_node = if input.same_node { local_node.clone() } else { "bbbbbbbbbbbbbbbb".parse().unwrap() };

    let local = HybridLogicalClock::new(Timestamp(input.local_ts), local_node, input.local_counter);
    let remote = HybridLogicalClock::new(Timestamp(input.remote_ts), remote_node, input.remote_counter);
    let now = Timestamp(input.now);

    match local.remote_merge(&remote, now, input.max_drift) {
        Ok(merged) => {
            assert!(merged > local && merged > remote);
            assert_eq!(merged.node(), local.node());
            assert!(merged.counter() <= MAX_COUNTER);
            assert!(merged.timestamp().abs_diff(now) <= input.max_drift);
        }
        Err(ClockError::DuplicateNode(_)) => assert!(input.same_node),
        Err(ClockError::ClockDrift { .. }) | Err(ClockError::CausalityOverflow) => {}
    }
});
