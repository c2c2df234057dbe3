//! Property tests for weave-crdt: clock monotonicity, total order, merge
//! convergence, and save/load idempotence.

use std::cmp::Ordering;

use proptest::prelude::*;
use serde_json::json;
use weave_crdt::{compare_marks, TimestampFormatting, TimestampMark};

type Formatting = TimestampFormatting<u32>;

fn mark_strategy() -> impl Strategy<Value = TimestampMark<u32>> {
    (0u64..20, prop::sample::select(vec!["A", "B", "C", "a", "AB"]))
        .prop_map(|(ts, creator)| TimestampMark::new(0, 1, "bold", json!(true), creator, ts + 1))
}

/// One step of a replica's history: create locally, or receive a mark
/// created elsewhere.
#[derive(Debug, Clone)]
enum Step {
    Create,
    Receive(u64),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![Just(Step::Create), (1u64..100).prop_map(Step::Receive)]
}

proptest! {
    #[test]
    fn compare_is_antisymmetric(a in mark_strategy(), b in mark_strategy()) {
        prop_assert_eq!(compare_marks(&a, &b), compare_marks(&b, &a).reverse());
        let identical = a.timestamp() == b.timestamp() && a.creator_id() == b.creator_id();
        prop_assert_eq!(compare_marks(&a, &b) == Ordering::Equal, identical);
    }
}

proptest! {
    #[test]
    fn compare_is_transitive(
        a in mark_strategy(),
        b in mark_strategy(),
        c in mark_strategy(),
    ) {
        if compare_marks(&a, &b) == Ordering::Less && compare_marks(&b, &c) == Ordering::Less {
            prop_assert_eq!(compare_marks(&a, &c), Ordering::Less);
        }
    }
}

proptest! {
    #[test]
    fn created_marks_sort_after_everything_seen(steps in prop::collection::vec(step_strategy(), 1..60)) {
        let mut f = Formatting::new("local");
        let mut seen: Vec<TimestampMark<u32>> = Vec::new();
        let mut last_created = 0;

        for step in steps {
            match step {
                Step::Create => {
                    let m = f.create(0, 1, "bold", json!(true)).unwrap();
                    prop_assert!(m.timestamp() > last_created);
                    for prior in &seen {
                        prop_assert_eq!(compare_marks(prior, &m), Ordering::Less);
                    }
                    last_created = m.timestamp();
                    f.add_mark(m.clone());
                    seen.push(m);
                }
                Step::Receive(ts) => {
                    let m = TimestampMark::new(0, 1, "italic", json!(null), "remote", ts);
                    f.add_mark(m.clone());
                    seen.push(m);
                }
            }
        }
    }
}

proptest! {
    #[test]
    fn merge_converges_regardless_of_order(
        marks in prop::collection::vec(mark_strategy(), 0..40),
        seed in any::<u64>(),
    ) {
        let mut shuffled = marks.clone();
        // Deterministic rotation + reversal stands in for arbitrary delivery order.
        if !shuffled.is_empty() {
            let k = (seed as usize) % shuffled.len();
            shuffled.rotate_left(k);
        }
        shuffled.reverse();

        let mut a = Formatting::new("x");
        for m in marks {
            a.add_mark(m);
        }
        let mut b = Formatting::new("y");
        for m in shuffled {
            b.add_mark(m);
        }

        prop_assert_eq!(a.save(), b.save());
        prop_assert_eq!(a.clock_value(), b.clock_value());
    }
}

proptest! {
    #[test]
    fn load_of_save_is_identity(marks in prop::collection::vec(mark_strategy(), 0..40)) {
        let mut f = Formatting::new("x");
        for m in marks {
            f.add_mark(m);
        }
        let saved = f.save();
        prop_assert!(saved.windows(2).all(|w| compare_marks(&w[0], &w[1]) == Ordering::Less));

        let mut g = Formatting::new("y");
        g.load(saved.clone()).unwrap();
        prop_assert_eq!(g.save(), saved.clone());
        prop_assert_eq!(g.clock_value(), saved.last().map_or(0, |m| m.timestamp()));

        let next = g.create(0, 1, "bold", json!(true)).unwrap();
        prop_assert!(saved.iter().all(|m| *m < next));
    }
}
