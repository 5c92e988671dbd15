//! Error types for symbol parsing and state validation.

use thiserror::Error;

/// Error returned when a keypad label does not name a known symbol.
///
/// The transition layer treats unknown labels as identity inputs; this
/// error only surfaces through `Symbol::from_str` for callers that want
/// to reject bad labels up front.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognized keypad symbol {0:?}")]
pub struct UnknownSymbol(pub String);

/// Violations reported by `CalculatorState::validate`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("{slot} operand is not a decimal numeral: {text:?}")]
    InvalidOperand {
        /// Which operand slot failed (`"first"` or `"second"`)
        slot: &'static str,
        text: String,
    },

    #[error("first operand {text:?} held without a pending operator")]
    OperandWithoutOperator { text: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_symbol_message_names_the_label() {
        let err = UnknownSymbol("@".to_string());
        assert_eq!(err.to_string(), "unrecognized keypad symbol \"@\"");
    }

    #[test]
    fn invalid_operand_message_names_slot_and_text() {
        let err = StateError::InvalidOperand {
            slot: "second",
            text: "1..5".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "second operand is not a decimal numeral: \"1..5\""
        );
    }

    #[test]
    fn errors_are_comparable() {
        let a = UnknownSymbol("?".to_string());
        let b = UnknownSymbol("?".to_string());
        assert_eq!(a, b);
    }
}
