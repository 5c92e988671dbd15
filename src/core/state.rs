//! The immutable calculator display state.
//!
//! `CalculatorState` is a plain value: every keypad press produces a new
//! state rather than mutating the old one, so the host shell can hold,
//! compare, and replace states freely.

use super::error::StateError;
use super::symbol::Operator;
use serde::{Deserialize, Serialize};

/// Display marker substituted for a division-by-zero result.
///
/// The marker is an ordinary display string, not a fault; it is only
/// cleared by `AC`.
pub const ERROR_MARKER: &str = "错误";

/// The calculator's complete state between keypad presses.
///
/// Operands are held as text because the display *is* the state: digits
/// are appended as typed, and numeric parsing only happens at the moment
/// an operation is evaluated.
///
/// # Example
///
/// ```rust
/// use tallypad::core::CalculatorState;
///
/// let state = CalculatorState::default();
/// assert_eq!(state.first_operand, "");
/// assert_eq!(state.second_operand, "0");
/// assert!(state.pending_operator.is_none());
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CalculatorState {
    /// First number of a pending binary operation; empty when none is
    /// pending.
    pub first_operand: String,
    /// The number currently being entered, or the latest result.
    pub second_operand: String,
    /// The operator selected but not yet evaluated.
    pub pending_operator: Option<Operator>,
}

impl Default for CalculatorState {
    /// The reset state: empty first operand, `"0"` on the display, no
    /// pending operator.
    fn default() -> Self {
        Self {
            first_operand: String::new(),
            second_operand: "0".to_string(),
            pending_operator: None,
        }
    }
}

impl CalculatorState {
    /// Check if the display holds the division-by-zero marker.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tallypad::core::{CalculatorState, ERROR_MARKER};
    ///
    /// let state = CalculatorState {
    ///     second_operand: ERROR_MARKER.to_string(),
    ///     ..CalculatorState::default()
    /// };
    /// assert!(state.is_error());
    /// ```
    pub fn is_error(&self) -> bool {
        self.second_operand == ERROR_MARKER
    }

    /// Check if an operator press is awaiting `=`.
    pub fn is_pending(&self) -> bool {
        self.pending_operator.is_some()
    }

    /// Validate the state invariants, reporting the first violation.
    ///
    /// Both operands must be decimal numerals (optional leading `-`, at
    /// most one `.`), the second alternatively the error marker, and a
    /// non-empty first operand requires a pending operator. States built
    /// by hand may violate these; keypad-driven states only do so
    /// through the documented decimal-point quirk.
    pub fn validate(&self) -> Result<(), StateError> {
        if !self.first_operand.is_empty() && !is_numeral(&self.first_operand) {
            return Err(StateError::InvalidOperand {
                slot: "first",
                text: self.first_operand.clone(),
            });
        }
        if !self.is_error() && !is_numeral(&self.second_operand) {
            return Err(StateError::InvalidOperand {
                slot: "second",
                text: self.second_operand.clone(),
            });
        }
        if self.pending_operator.is_none() && !self.first_operand.is_empty() {
            return Err(StateError::OperandWithoutOperator {
                text: self.first_operand.clone(),
            });
        }
        Ok(())
    }
}

/// Check for a decimal numeral: optional leading minus, digits, at most
/// one decimal point, at least one digit.
fn is_numeral(text: &str) -> bool {
    let body = text.strip_prefix('-').unwrap_or(text);
    let mut seen_digit = false;
    let mut seen_point = false;
    for c in body.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    seen_digit
}
