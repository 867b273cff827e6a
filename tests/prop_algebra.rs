use proptest::prelude::*;
use hlc_core::error::ClockError;
use hlc_core::{HybridLogicalClock, NodeId, Timestamp, DEFAULT_MAX_CLOCK_DRIFT_MS, MAX_COUNTER};

const NOW: i64 = 1_700_000_000_000;
const DRIFT: u64 = DEFAULT_MAX_CLOCK_DRIFT_MS;

fn node(s: &str) -> NodeId {
    s.parse().unwrap()
}

// Clocks spread around NOW, some inside and some outside the drift window.
fn arb_clock_on(node_strategy: BoxedStrategy<NodeId>) -> impl Strategy<Value = HybridLogicalClock> {
    (-120_000i64..120_000, node_strategy, 0u32..=MAX_COUNTER + 2)
        .prop_map(|(offset, node, counter)| HybridLogicalClock::new(Timestamp(NOW + offset), node, counter))
}

fn local_clock() -> impl Strategy<Value = HybridLogicalClock> {
    arb_clock_on(Just(node("aaaaaaaaaaaaaaaa")).boxed())
}

fn remote_clock() -> impl Strategy<Value = HybridLogicalClock> {
    arb_clock_on("[0-9]{16}".prop_map(|s| node(&s)).boxed())
}

fn arb_now() -> impl Strategy<Value = Timestamp> {
    (-90_000i64..90_000).prop_map(|offset| Timestamp(NOW + offset))
}

proptest! {
    /// A successful tick never moves the clock backwards.
    #[test]
    fn prop_tick_monotonic(local in local_clock(), now in arb_now()) {
        if let Ok(next) = local.local_tick(now, DRIFT) {
            prop_assert!(next >= local);
            prop_assert_eq!(next.node(), local.node());
        }
    }

    /// A successful merge dominates both inputs and keeps the local identity.
    #[test]
    fn prop_merge_dominates(local in local_clock(), remote in remote_clock(), now in arb_now()) {
        if let Ok(merged) = local.remote_merge(&remote, now, DRIFT) {
            prop_assert!(merged > local);
            prop_assert!(merged > remote);
            prop_assert_eq!(merged.node(), local.node());
        }
    }

    /// Any accepted clock satisfies both validation bounds.
    #[test]
    fn prop_results_within_bounds(local in local_clock(), remote in remote_clock(), now in arb_now()) {
        for next in [local.local_tick(now, DRIFT), local.remote_merge(&remote, now, DRIFT)].into_iter().flatten() {
            prop_assert!(next.counter() <= MAX_COUNTER);
            prop_assert!(next.timestamp().abs_diff(now) <= DRIFT);
        }
    }

    #[test]
    fn prop_duplicate_node_always_rejected(
        local in local_clock(),
        offset in -120_000i64..120_000,
        counter in any::<u32>(),
        now in arb_now(),
    ) {
        let twin = HybridLogicalClock::new(Timestamp(NOW + offset), local.node().clone(), counter);
        prop_assert_eq!(
            local.remote_merge(&twin, now, DRIFT),
            Err(ClockError::DuplicateNode(local.node().clone()))
        );
    }

    /// Repeated ticks under a frozen wall clock keep producing strictly
    /// increasing, distinct clocks.
    #[test]
    fn prop_stalled_wall_clock_still_orders(start in 0u32..1000, ticks in 1usize..50) {
        let now = Timestamp(NOW);
        let mut clock = HybridLogicalClock::new(now, node("aaaaaaaaaaaaaaaa"), start);
        for _ in 0..ticks {
            let next = clock.local_tick(now, DRIFT).unwrap();
            prop_assert!(next > clock);
            clock = next;
        }
    }
}
