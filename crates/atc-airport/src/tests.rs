//! Unit tests for atc-airport.

use atc_core::{AirportId, EntityRng, GridPos, LearningParams, RunwayIndex, Tick};

use crate::{AdmissionPolicy, Airport, LearnedGate, RunwayBank};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn plain_airport(id: u32, runways: u16, spacing: u64) -> Airport {
    Airport::new(
        AirportId(id),
        GridPos::new(0, 0),
        RunwayBank::new(runways, spacing),
        AdmissionPolicy::FirstAvailable,
    )
}

fn greedy_gate() -> LearnedGate {
    let params = LearningParams { epsilon: 0.0, ..LearningParams::default() };
    LearnedGate::new(params, EntityRng::new(42, 0))
}

// ── RunwayBank ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod runway_bank {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn fresh_runways_are_eligible_at_tick_zero() {
        let bank = RunwayBank::new(3, 2);
        assert_eq!(bank.eligible_count(Tick(0)), 3);
        assert_eq!(bank.first_eligible(Tick(0)), Some(RunwayIndex(0)));
    }

    #[test]
    fn grants_in_index_order_then_none() {
        let mut bank = RunwayBank::new(2, 2);
        assert_eq!(bank.request(Tick(0)), Some(RunwayIndex(0)));
        assert_eq!(bank.request(Tick(0)), Some(RunwayIndex(1)));
        assert_eq!(bank.request(Tick(0)), None);
        assert_eq!(bank.in_use(), 2);
    }

    #[test]
    fn failed_request_has_no_side_effects() {
        let mut bank = RunwayBank::new(1, 5);
        bank.request(Tick(3));
        bank.release(RunwayIndex(0));
        assert_eq!(bank.request(Tick(4)), None);
        assert_eq!(bank.last_used(RunwayIndex(0)), Some(Tick(3)));
        assert_eq!(bank.in_use(), 0);
    }

    #[test]
    fn spacing_blocks_early_regrant() {
        let mut bank = RunwayBank::new(1, 2);
        assert_eq!(bank.request(Tick(10)), Some(RunwayIndex(0)));
        bank.release(RunwayIndex(0));
        assert_eq!(bank.request(Tick(11)), None);
        assert_eq!(bank.request(Tick(12)), Some(RunwayIndex(0)));
    }

    #[test]
    fn zero_spacing_regrants_same_tick() {
        let mut bank = RunwayBank::new(1, 0);
        assert_eq!(bank.request(Tick(4)), Some(RunwayIndex(0)));
        bank.release(RunwayIndex(0));
        assert_eq!(bank.request(Tick(4)), Some(RunwayIndex(0)));
    }

    #[test]
    fn release_out_of_range_is_ignored() {
        let mut bank = RunwayBank::new(2, 0);
        bank.request(Tick(0));
        bank.release(RunwayIndex(7));
        assert_eq!(bank.in_use(), 1);
        assert!(!bank.is_eligible(RunwayIndex(7), Tick(0)));
    }

    #[test]
    fn skips_spaced_runway_for_next_one() {
        let mut bank = RunwayBank::new(2, 3);
        assert_eq!(bank.request(Tick(0)), Some(RunwayIndex(0)));
        bank.release(RunwayIndex(0));
        assert_eq!(bank.request(Tick(1)), Some(RunwayIndex(1)));
    }

    proptest! {
        #[test]
        fn outstanding_never_exceeds_runways_and_spacing_holds(
            runways in 1u16..5,
            spacing in 0u64..4,
            ops in prop::collection::vec((any::<bool>(), 0u16..6), 1..200),
        ) {
            let mut bank = RunwayBank::new(runways, spacing);
            let mut grants: Vec<Vec<u64>> = vec![Vec::new(); runways as usize];
            for (tick, (is_request, idx)) in ops.into_iter().enumerate() {
                let tick = Tick(tick as u64 / 2);
                if is_request {
                    if let Some(r) = bank.request(tick) {
                        grants[r.index()].push(tick.0);
                    }
                } else {
                    bank.release(RunwayIndex(idx));
                }
                prop_assert!(bank.in_use() <= runways as usize);
            }
            for stamps in grants {
                for pair in stamps.windows(2) {
                    prop_assert!(pair[1] - pair[0] >= spacing, "{:?}", pair);
                }
            }
        }
    }
}

// ── QTable ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod qtable {
    use crate::{Action, QTable, StateKey};

    #[test]
    fn unseen_pairs_read_zero() {
        let table = QTable::new();
        assert_eq!(table.get(StateKey(3), Action::Grant), 0.0);
        assert_eq!(table.max_value(StateKey(3)), 0.0);
        assert!(table.is_empty());
    }

    #[test]
    fn ties_prefer_decline() {
        let mut table = QTable::new();
        assert_eq!(table.best_action(StateKey(1)), Action::Decline);
        table.set(StateKey(1), Action::Grant, 0.5);
        table.set(StateKey(1), Action::Decline, 0.5);
        assert_eq!(table.best_action(StateKey(1)), Action::Decline);
        table.set(StateKey(1), Action::Grant, 0.6);
        assert_eq!(table.best_action(StateKey(1)), Action::Grant);
    }

    #[test]
    fn td_update_matches_formula() {
        let mut table = QTable::new();
        table.set(StateKey(2), Action::Grant, 0.5);
        table.set(StateKey(1), Action::Decline, 2.0);
        // 0.5 + 0.2 * (1 + 0.95 * 2.0 - 0.5) = 0.98
        let q = table.update(StateKey(2), Action::Grant, 1.0, StateKey(1), 0.2, 0.95);
        assert!((q - 0.98).abs() < 1e-12, "got {q}");
        assert_eq!(table.get(StateKey(2), Action::Grant), q);
    }

    #[test]
    fn entries_are_sorted() {
        let mut table = QTable::new();
        table.set(StateKey(2), Action::Grant, 1.0);
        table.set(StateKey(0), Action::Grant, 2.0);
        table.set(StateKey(0), Action::Decline, 3.0);
        let keys: Vec<_> = table.entries().into_iter().map(|(s, a, _)| (s.0, a)).collect();
        assert_eq!(keys, [(0, Action::Decline), (0, Action::Grant), (2, Action::Grant)]);
    }
}

// ── LearnedGate ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod learned_gate {
    use super::*;
    use crate::{Action, GateStats, StateKey};

    #[test]
    fn greedy_walkthrough() {
        let mut gate = greedy_gate();
        let mut bank = RunwayBank::new(1, 0);

        // Fresh table: tie → decline.
        assert_eq!(gate.admit(&mut bank, Tick(0)), None);
        assert!((gate.table().get(StateKey(1), Action::Decline) + 0.2).abs() < 1e-12);

        // Grant now outranks decline.
        assert_eq!(gate.admit(&mut bank, Tick(0)), Some(RunwayIndex(0)));
        assert!((gate.table().get(StateKey(1), Action::Grant) - 0.2).abs() < 1e-12);

        // Nothing eligible: decline on tie, then a grant attempt that comes up empty.
        assert_eq!(gate.admit(&mut bank, Tick(0)), None);
        assert_eq!(gate.admit(&mut bank, Tick(0)), None);
        assert!((gate.table().get(StateKey(0), Action::Grant) + 0.2).abs() < 1e-12);

        assert_eq!(
            gate.stats(),
            GateStats { decisions: 4, explorations: 0, grants: 1, empty_grants: 1, declines: 2 }
        );
    }

    #[test]
    fn next_state_is_pre_grant_observation() {
        let mut gate = greedy_gate();
        let mut bank = RunwayBank::new(1, 0);
        gate.admit(&mut bank, Tick(0)); // decline
        gate.admit(&mut bank, Tick(0)); // grant, bootstraps from state 1 not 0
        // 0 + 0.2 * (1 + 0.95 * max(-0.2, 0) - 0) = 0.2
        let q = gate.table().get(StateKey(1), Action::Grant);
        assert!((q - 0.2).abs() < 1e-12, "got {q}");
        assert!(gate.table().get(StateKey(0), Action::Grant) == 0.0);
    }

    #[test]
    fn grant_estimate_overtakes_decline_with_exploration() {
        let params = LearningParams::default();
        let mut gate = LearnedGate::new(params, EntityRng::new(7, 3));
        let mut bank = RunwayBank::new(1, 0);
        for t in 0..2_000u64 {
            if let Some(r) = gate.admit(&mut bank, Tick(t)) {
                bank.release(r);
            }
        }
        let grant = gate.table().get(StateKey(1), Action::Grant);
        let decline = gate.table().get(StateKey(1), Action::Decline);
        assert!(grant > decline, "grant {grant} vs decline {decline}");
        assert!(gate.stats().explorations > 0);
        assert!(gate.stats().grants > gate.stats().declines);
    }

    #[test]
    fn full_exploration_still_only_grants_eligible() {
        let params = LearningParams { epsilon: 1.0, ..LearningParams::default() };
        let mut gate = LearnedGate::new(params, EntityRng::new(1, 1));
        let mut bank = RunwayBank::new(2, 2);
        for _ in 0..50 {
            gate.admit(&mut bank, Tick(0));
            assert!(bank.in_use() <= 2);
        }
        assert_eq!(gate.stats().explorations, 50);
    }
}

// ── Airport + registry ────────────────────────────────────────────────────────

#[cfg(test)]
mod airport {
    use super::*;
    use crate::{Action, AirportError, AirportRegistry};

    #[test]
    fn two_runways_three_requests_same_tick() {
        let mut ap = plain_airport(1, 2, 2);
        assert_eq!(ap.request_runway(Tick(0)), Some(RunwayIndex(0)));
        assert_eq!(ap.request_runway(Tick(0)), Some(RunwayIndex(1)));
        assert_eq!(ap.request_runway(Tick(0)), None);
    }

    #[test]
    fn release_then_request_after_spacing() {
        let mut ap = plain_airport(1, 1, 2);
        assert_eq!(ap.request_runway(Tick(5)), Some(RunwayIndex(0)));
        ap.release_runway(RunwayIndex(0));
        assert_eq!(ap.request_runway(Tick(6)), None);
        assert_eq!(ap.request_runway(Tick(7)), Some(RunwayIndex(0)));
    }

    #[test]
    fn name_and_learning_flags() {
        let ap = plain_airport(3, 1, 2);
        assert_eq!(ap.name, "Airport ID: 3");
        assert!(!ap.is_learning());
        assert_eq!(ap.q_value(1, Action::Grant), None);

        let learned = Airport::new(
            AirportId(4),
            GridPos::new(1, 1),
            RunwayBank::new(1, 2),
            AdmissionPolicy::Learned(greedy_gate()),
        );
        assert!(learned.is_learning());
        assert_eq!(learned.q_value(1, Action::Grant), Some(0.0));
    }

    #[test]
    fn registry_rejects_duplicates_and_empty_airports() {
        let mut reg = AirportRegistry::new();
        reg.insert(plain_airport(1, 2, 2)).unwrap();
        assert!(matches!(reg.insert(plain_airport(1, 3, 2)), Err(AirportError::Duplicate(_))));
        assert!(matches!(reg.insert(plain_airport(2, 0, 2)), Err(AirportError::NoRunways(_))));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.position(AirportId(1)), Some(GridPos::new(0, 0)));
        assert!(reg.get(AirportId(9)).is_none());
    }

    #[test]
    fn registry_iterates_in_id_order() {
        let reg: AirportRegistry =
            [plain_airport(3, 1, 0), plain_airport(1, 1, 0), plain_airport(2, 1, 0)]
                .into_iter()
                .collect();
        let ids: Vec<u32> = reg.ids().map(|id| id.0).collect();
        assert_eq!(ids, [1, 2, 3]);
    }
}
