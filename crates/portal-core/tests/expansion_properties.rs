//! Property tests for the expansion state controller and visibility latch.

#![allow(clippy::unwrap_used)]

use portal_core::catalog::ACCREDITATIONS_AUTONOMY;
use portal_core::{Activation, ExpansionState, VisibilityLatch};
use proptest::prelude::*;

fn arb_id() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(ACCREDITATIONS_AUTONOMY.entry_ids()).prop_map(str::to_string),
        (0u16..64).prop_map(|n| format!("entry-{n}")),
    ]
}

/// A state reached by an arbitrary sequence of toggles.
fn arb_state() -> impl Strategy<Value = ExpansionState> {
    prop::collection::vec(arb_id(), 0..16).prop_map(|ids| {
        let mut state = ExpansionState::new();
        for id in &ids {
            state.toggle(id);
        }
        state
    })
}

fn arb_activation() -> impl Strategy<Value = Activation> {
    prop_oneof![Just(Activation::Click), Just(Activation::Keyboard)]
}

proptest! {
    /// Toggling an even number of times restores the original value.
    #[test]
    fn even_toggles_restore(state in arb_state(), id in arb_id(), pairs in 0usize..5) {
        let before = state.is_expanded(&id);
        let mut state = state;
        for _ in 0..pairs * 2 {
            state.toggle(&id);
        }
        prop_assert_eq!(state.is_expanded(&id), before);
    }

    /// Toggling one id never changes another.
    #[test]
    fn toggle_is_local(state in arb_state(), x in arb_id(), y in arb_id()) {
        prop_assume!(x != y);
        let before = state.is_expanded(&y);
        let mut state = state;
        state.toggle(&x);
        prop_assert_eq!(state.is_expanded(&y), before);
    }

    /// A single toggle always flips the toggled id.
    #[test]
    fn toggle_flips(state in arb_state(), id in arb_id()) {
        let before = state.is_expanded(&id);
        let mut state = state;
        let after = state.toggle(&id);
        prop_assert_eq!(after, !before);
        prop_assert_eq!(state.is_expanded(&id), after);
    }

    /// Click and keyboard activation reach the same state.
    #[test]
    fn activation_kind_is_irrelevant(
        state in arb_state(),
        id in arb_id(),
        a in arb_activation(),
        b in arb_activation(),
    ) {
        let mut left = state.clone();
        left.activate(&id, a);
        let mut right = state;
        right.activate(&id, b);
        prop_assert_eq!(left, right);
    }

    /// The latch fires at most once over any report sequence.
    #[test]
    fn latch_fires_at_most_once(reports in prop::collection::vec(any::<bool>(), 0..32)) {
        let mut latch = VisibilityLatch::new();
        let fired = reports.iter().filter(|r| latch.observe(**r)).count();
        prop_assert_eq!(fired, usize::from(reports.iter().any(|r| *r)));
        prop_assert_eq!(latch.is_visible(), fired == 1);
    }
}

#[test]
fn every_catalog_entry_starts_collapsed() {
    let state = ExpansionState::new();
    for id in ACCREDITATIONS_AUTONOMY.entry_ids() {
        assert!(!state.is_expanded(id), "{id} should start collapsed");
    }
}

#[test]
fn accreditation_one_round_trip() {
    let mut state = ExpansionState::new();
    assert!(!state.is_expanded("accreditation-1"));
    state.toggle("accreditation-1");
    assert!(state.is_expanded("accreditation-1"));
    state.toggle("accreditation-1");
    assert!(!state.is_expanded("accreditation-1"));
}

#[test]
fn enter_on_autonomy_two_matches_click() {
    let mut clicked = ExpansionState::new();
    clicked.activate("autonomy-2", Activation::Click);

    let mut pressed = ExpansionState::new();
    let activation = Activation::from_key("Enter").unwrap();
    assert!(activation.prevents_default());
    pressed.activate("autonomy-2", activation);

    assert_eq!(clicked, pressed);
    assert!(pressed.is_expanded("autonomy-2"));
}

#[test]
fn independent_instances_do_not_share_state() {
    let mut first = ExpansionState::new();
    let second = ExpansionState::new();
    first.toggle("accreditation-3");
    assert!(first.is_expanded("accreditation-3"));
    assert!(!second.is_expanded("accreditation-3"));
}
