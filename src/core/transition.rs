//! The pure keypad transition function.
//!
//! `apply` is total: every recognized symbol maps the current state to a
//! new one, and anything else (unknown labels, unparseable operands) is
//! the identity. All arithmetic is single-precision floating point,
//! formatted back to text with the default conversion.

use super::state::{CalculatorState, ERROR_MARKER};
use super::symbol::{Operator, Symbol};

impl CalculatorState {
    /// Apply one keypad press, returning the new state.
    ///
    /// This is a pure function - the current state is never mutated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tallypad::core::{CalculatorState, Symbol};
    ///
    /// let state = CalculatorState::default();
    /// let state = state.apply(Symbol::Digit(1));
    /// let state = state.apply(Symbol::Digit(2));
    ///
    /// assert_eq!(state.second_operand, "12");
    /// ```
    pub fn apply(&self, symbol: Symbol) -> Self {
        match symbol {
            Symbol::Clear => Self::default(),
            // The point is appended unconditionally; repeated presses
            // produce multi-point text (kept for display parity).
            Symbol::Point => self.with_second(format!("{}.", self.second_operand)),
            Symbol::Percent => match (parse(&self.first_operand), parse(&self.second_operand)) {
                (Some(first), Some(second)) => {
                    self.with_second(format_value(first * second / 100.0))
                }
                _ => self.clone(),
            },
            Symbol::ToggleSign => {
                if self.second_operand == "0" {
                    self.with_second("-0".to_string())
                } else {
                    match parse(&self.second_operand) {
                        Some(value) => self.with_second(format_value(-value)),
                        None => self.clone(),
                    }
                }
            }
            Symbol::Digit(digit) => {
                if self.second_operand == "0" {
                    self.with_second(digit.to_string())
                } else if self.second_operand == "-0" {
                    self.with_second(format!("-{digit}"))
                } else {
                    self.with_second(format!("{}{}", self.second_operand, digit))
                }
            }
            // A second operator press discards the pending operation
            // unevaluated; only the operator closest to `=` counts.
            Symbol::Op(operator) => Self {
                first_operand: self.second_operand.clone(),
                second_operand: "0".to_string(),
                pending_operator: Some(operator),
            },
            Symbol::Equals => match self.pending_operator {
                None => self.clone(),
                Some(operator) => self.evaluate(operator),
            },
        }
    }

    /// Apply a raw keypad label, with identity fallback.
    ///
    /// Labels that do not name a symbol leave the state unchanged, so a
    /// host shell can forward button text without pre-validating it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tallypad::core::CalculatorState;
    ///
    /// let state = CalculatorState::default();
    /// assert_eq!(state.apply_label("not a key"), state);
    /// ```
    pub fn apply_label(&self, label: &str) -> Self {
        match label.parse::<Symbol>() {
            Ok(symbol) => self.apply(symbol),
            Err(_) => self.clone(),
        }
    }

    /// Evaluate the pending operation into the second operand.
    ///
    /// The divide-by-zero guard is textual: it fires on an entered `"0"`,
    /// not on values that merely equal zero.
    fn evaluate(&self, operator: Operator) -> Self {
        if operator == Operator::Div && self.second_operand == "0" {
            return self.with_second(ERROR_MARKER.to_string());
        }
        match (parse(&self.first_operand), parse(&self.second_operand)) {
            (Some(first), Some(second)) => {
                self.with_second(format_value(operator.evaluate(first, second)))
            }
            _ => self.clone(),
        }
    }

    fn with_second(&self, second_operand: String) -> Self {
        Self {
            second_operand,
            ..self.clone()
        }
    }
}

fn parse(text: &str) -> Option<f32> {
    text.parse().ok()
}

fn format_value(value: f32) -> String {
    value.to_string()
}
