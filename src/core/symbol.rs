//! Typed keypad symbols.
//!
//! Every button on the keypad maps to one `Symbol`. Parsing from the
//! button label and rendering back are both provided, so a host shell
//! can dispatch raw label strings without knowing the enum.

use super::error::UnknownSymbol;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A binary arithmetic operator awaiting its second operand.
///
/// # Example
///
/// ```rust
/// use tallypad::core::Operator;
///
/// assert_eq!(Operator::Mul.label(), "×");
/// assert_eq!(Operator::Add.evaluate(2.0, 3.0), 5.0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Get the operator's keypad label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "×",
            Self::Div => "÷",
        }
    }

    /// Evaluate the operator over single-precision floats.
    ///
    /// This is a pure function. Division by a zero *value* follows IEEE
    /// semantics; the textual divide-by-zero guard lives in the
    /// transition function, not here.
    pub fn evaluate(&self, lhs: f32, rhs: f32) -> f32 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One keypad press.
///
/// The symbol set is fixed: `AC`, `+/-`, `%`, the four operators, the
/// ten digits, the decimal point, and `=`.
///
/// # Example
///
/// ```rust
/// use tallypad::core::{Operator, Symbol};
///
/// let symbol: Symbol = "÷".parse().unwrap();
/// assert_eq!(symbol, Symbol::Op(Operator::Div));
/// assert_eq!(symbol.label(), "÷");
///
/// assert!("@".parse::<Symbol>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Symbol {
    /// `AC` — reset to the initial state
    Clear,
    /// `+/-` — negate the operand being entered
    ToggleSign,
    /// `%` — percentage of the first operand
    Percent,
    /// A digit key, `0` through `9`
    Digit(u8),
    /// `.` — decimal point
    Point,
    /// One of the four binary operator keys
    Op(Operator),
    /// `=` — evaluate the pending operation
    Equals,
}

impl Symbol {
    /// Get the symbol's keypad label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Clear => "AC",
            Self::ToggleSign => "+/-",
            Self::Percent => "%",
            Self::Point => ".",
            Self::Equals => "=",
            Self::Op(op) => op.label(),
            Self::Digit(d) => match d {
                0 => "0",
                1 => "1",
                2 => "2",
                3 => "3",
                4 => "4",
                5 => "5",
                6 => "6",
                7 => "7",
                8 => "8",
                9 => "9",
                _ => unreachable!("digit symbols only hold 0-9"),
            },
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Symbol {
    type Err = UnknownSymbol;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let symbol = match label {
            "AC" => Self::Clear,
            "+/-" => Self::ToggleSign,
            "%" => Self::Percent,
            "." => Self::Point,
            "=" => Self::Equals,
            "+" => Self::Op(Operator::Add),
            "-" => Self::Op(Operator::Sub),
            "×" => Self::Op(Operator::Mul),
            "÷" => Self::Op(Operator::Div),
            "0" => Self::Digit(0),
            "1" => Self::Digit(1),
            "2" => Self::Digit(2),
            "3" => Self::Digit(3),
            "4" => Self::Digit(4),
            "5" => Self::Digit(5),
            "6" => Self::Digit(6),
            "7" => Self::Digit(7),
            "8" => Self::Digit(8),
            "9" => Self::Digit(9),
            other => return Err(UnknownSymbol(other.to_string())),
        };
        Ok(symbol)
    }
}
