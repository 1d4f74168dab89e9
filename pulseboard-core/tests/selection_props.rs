//! Property tests for the selection state machine and the scoped guards.

use proptest::prelude::*;
use pulseboard_core::{EscapeRegistry, ScrollLock, Selection};

#[derive(Debug, Clone)]
enum Op {
    Select(u8),
    Dismiss,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..16).prop_map(Op::Select),
        Just(Op::Dismiss),
    ]
}

proptest! {
    /// After any sequence of operations, the selection equals the last
    /// select not followed by a dismiss, and never holds more than one key.
    #[test]
    fn selection_tracks_last_select(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut sel = Selection::new();
        let mut expected: Option<u8> = None;
        for op in &ops {
            match op {
                Op::Select(k) => {
                    sel.select(*k);
                    expected = Some(*k);
                }
                Op::Dismiss => {
                    sel.dismiss();
                    expected = None;
                }
            }
            prop_assert_eq!(sel.selected().copied(), expected);
            prop_assert_eq!(sel.is_open(), expected.is_some());
        }
    }

    /// Guard count equals live guards, for any interleaving of acquires and
    /// releases.
    #[test]
    fn lock_count_matches_live_guards(drops in prop::collection::vec(any::<bool>(), 1..32)) {
        let lock = ScrollLock::new();
        let registry = EscapeRegistry::new();
        let mut held = Vec::new();
        let mut listeners = Vec::new();

        for drop_one in drops {
            if drop_one && !held.is_empty() {
                held.pop();
                listeners.pop();
            } else {
                held.push(lock.acquire());
                listeners.push(registry.register());
            }
            prop_assert_eq!(lock.holder_count(), held.len());
            prop_assert_eq!(registry.listener_count(), listeners.len());
            prop_assert_eq!(lock.is_locked(), !held.is_empty());
        }

        held.clear();
        listeners.clear();
        prop_assert!(!lock.is_locked());
        prop_assert!(!registry.wants_escape());
    }
}
