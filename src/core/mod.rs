//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - The immutable `CalculatorState` display-state value
//! - Typed keypad symbols and operators
//! - The total `apply` transition function
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod error;
mod state;
mod symbol;
mod transition;

pub use error::{StateError, UnknownSymbol};
pub use state::{CalculatorState, ERROR_MARKER};
pub use symbol::{Operator, Symbol};
