//! End-to-end keypad scenarios.
//!
//! Each test drives the state machine with raw button labels, the way a
//! host shell would, and checks the display text (and its font scale)
//! that a user would see.

use tallypad::core::{CalculatorState, Operator, ERROR_MARKER};
use tallypad::display::{format_number, FontScale};
use tallypad::keypad::standard_layout;

fn press(labels: &[&str]) -> CalculatorState {
    labels
        .iter()
        .fold(CalculatorState::default(), |state, label| {
            state.apply_label(label)
        })
}

fn display(state: &CalculatorState) -> String {
    format_number(&state.second_operand)
}

#[test]
fn two_plus_three_displays_five() {
    let state = press(&["2", "+", "3", "="]);
    assert_eq!(display(&state), "5");
}

#[test]
fn entering_a_fraction_and_multiplying() {
    let state = press(&["2", ".", "5", "×", "4", "="]);
    assert_eq!(display(&state), "10");
}

#[test]
fn division_keeps_fractional_results() {
    let state = press(&["7", "÷", "2", "="]);
    assert_eq!(display(&state), "3.5");
}

#[test]
fn division_by_zero_shows_the_marker_until_cleared() {
    let state = press(&["9", "÷", "0", "="]);
    assert!(state.is_error());
    assert_eq!(display(&state), ERROR_MARKER);

    // Digits do not recover the display; only AC does.
    let state = state.apply_label("AC");
    assert!(!state.is_error());
    assert_eq!(display(&state), "0");
    assert_eq!(state, CalculatorState::default());
}

#[test]
fn percent_then_equals_adds_the_percentage() {
    let state = press(&["2", "0", "0", "+", "5", "0", "%", "="]);
    assert_eq!(display(&state), "300");
}

#[test]
fn negative_entry_via_toggle_sign() {
    let state = press(&["+/-", "8", "+", "3", "="]);
    assert_eq!(display(&state), "-5");
}

#[test]
fn replacing_the_operator_discards_the_first_operation() {
    let state = press(&["6", "+", "2", "÷", "4", "="]);
    assert_eq!(display(&state), "0.5");
    assert_eq!(state.pending_operator, Some(Operator::Div));
}

#[test]
fn long_results_step_the_font_down() {
    let state = press(&["1", "÷", "3", "="]);
    let text = display(&state);
    assert_eq!(text, "0.33333334");
    assert_eq!(FontScale::for_text(&text), FontScale::ExtraSmall);

    let short = press(&["1", "2", "3"]);
    assert_eq!(FontScale::for_text(&display(&short)), FontScale::Large);
}

#[test]
fn every_keypad_label_is_accepted_by_the_machine() {
    // Walking the whole layout must never leave the symbol set.
    let mut state = CalculatorState::default();
    for key in standard_layout().into_iter().flatten() {
        state = state.apply_label(key.label());
    }
    assert_eq!(state.validate(), Ok(()));
}

#[test]
fn state_round_trips_through_json() {
    let state = press(&["4", "2", "×"]);
    let json = serde_json::to_string(&state).unwrap();
    let restored: CalculatorState = serde_json::from_str(&json).unwrap();
    assert_eq!(state, restored);

    // A restored state keeps transitioning identically.
    assert_eq!(
        restored.apply_label("2").apply_label("="),
        state.apply_label("2").apply_label("=")
    );
}
