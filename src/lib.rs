//! Tallypad: a pure functional calculator state machine
//!
//! Tallypad follows the "pure core, imperative shell" philosophy. The
//! calculator logic is a single pure transition function over immutable
//! state values; the host UI (the shell) owns the current state, feeds
//! each keypad press into the core, and re-renders from the value it
//! gets back. The core performs no I/O and holds no shared state.
//!
//! # Core Concepts
//!
//! - **State**: `CalculatorState`, an immutable display-state value
//! - **Symbols**: typed keypad inputs via the `Symbol` enum
//! - **Transitions**: `apply`, a total pure function `(state, symbol) -> state`
//!
//! # Example
//!
//! ```rust
//! use tallypad::{format_number, CalculatorState, Symbol};
//!
//! let state = CalculatorState::default();
//! let state = state.apply(Symbol::Digit(2));
//! let state = state.apply_label("+");
//! let state = state.apply(Symbol::Digit(3));
//! let state = state.apply(Symbol::Equals);
//!
//! assert_eq!(format_number(&state.second_operand), "5");
//! ```

pub mod core;
pub mod display;
pub mod keypad;

// Re-export commonly used types
pub use self::core::{CalculatorState, Operator, StateError, Symbol, UnknownSymbol, ERROR_MARKER};
pub use self::display::{format_number, FontScale};
