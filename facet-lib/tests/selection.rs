use facet_lib::selection::choice_policy;
use facet_lib::{Choice, ChoiceId, FacetAction, FacetState, SecondaryLink, Selection};
use proptest::prelude::*;

/// Id of the choice at `index` in a state with enough choices.
fn choice_id(index: usize) -> ChoiceId {
    FacetState::new(vec![Choice::new("c", 0); index + 1])
        .iter()
        .last()
        .map(|(id, _)| id)
        .expect("non-empty state")
}

// ============================================================================
// Click policy
// ============================================================================

#[test]
fn test_policy_selected_among_many() {
    let policy = choice_policy(choice_id(3), true, 2);

    assert_eq!(policy.primary, FacetAction::SelectOnly(choice_id(3)));
    assert_eq!(
        policy.secondary,
        Some((SecondaryLink::Remove, FacetAction::Deselect(choice_id(3))))
    );
}

#[test]
fn test_policy_sole_selected() {
    let policy = choice_policy(choice_id(3), true, 1);

    assert_eq!(policy.primary, FacetAction::Deselect(choice_id(3)));
    assert_eq!(
        policy.secondary,
        Some((SecondaryLink::Remove, FacetAction::Deselect(choice_id(3))))
    );
}

#[test]
fn test_policy_unselected_with_others() {
    let policy = choice_policy(choice_id(0), false, 1);

    assert_eq!(policy.primary, FacetAction::SelectOnly(choice_id(0)));
    assert_eq!(
        policy.secondary,
        Some((SecondaryLink::Include, FacetAction::Select(choice_id(0))))
    );
}

#[test]
fn test_policy_nothing_selected() {
    let policy = choice_policy(choice_id(0), false, 0);

    assert_eq!(policy.primary, FacetAction::Select(choice_id(0)));
    assert_eq!(policy.secondary, None);
}

// ============================================================================
// Mutations
// ============================================================================

#[test]
fn test_deselect_absent_is_noop() {
    let mut selection = Selection::new();
    selection.select(choice_id(1), false);

    assert!(!selection.deselect(choice_id(7)));
    assert_eq!(selection.ids(), &[choice_id(1)]);
}

#[test]
fn test_select_on_empty_matches_select_only() {
    let mut plain = Selection::new();
    let mut exclusive = Selection::new();
    plain.select(choice_id(4), false);
    exclusive.select(choice_id(4), true);

    assert_eq!(plain, exclusive);
}

fn state_from_flags(flags: &[bool]) -> FacetState {
    FacetState::new(
        flags
            .iter()
            .enumerate()
            .map(|(i, &s)| Choice::new(format!("c{i}"), i as u64).with_selected(s))
            .collect(),
    )
}

proptest! {
    #[test]
    fn prop_from_state_is_flagged_subsequence(flags in proptest::collection::vec(any::<bool>(), 0..40)) {
        let state = state_from_flags(&flags);
        let selection = Selection::from_state(&state);

        let expected: Vec<ChoiceId> = flags
            .iter()
            .enumerate()
            .filter(|(_, s)| **s)
            .map(|(i, _)| choice_id(i))
            .collect();
        prop_assert_eq!(selection.ids(), expected.as_slice());
    }

    #[test]
    fn prop_reset_always_empties(ids in proptest::collection::vec(0usize..10, 0..20)) {
        let mut selection = Selection::new();
        for id in ids {
            selection.select(choice_id(id), false);
        }
        selection.reset();
        prop_assert!(selection.is_empty());
    }
}
