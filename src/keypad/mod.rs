//! The standard keypad layout.
//!
//! Layout is plain data: five rows of keys, each carrying its symbol, a
//! color role, and a column span. The host shell walks the rows to build
//! its button grid and feeds each press back through `apply`.

use crate::core::{Operator, Symbol};
use serde::{Deserialize, Serialize};

/// Color role for a key, named after the standard theme.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum KeyColor {
    /// Function keys across the top row (`AC`, `+/-`, `%`)
    LightGray,
    /// Digit and decimal-point keys
    DarkGray,
    /// Operator column and `=`
    Orange,
}

/// One keypad button.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Key {
    pub symbol: Symbol,
    pub color: KeyColor,
    /// Columns occupied; every key is 1 except the double-width `0`.
    pub span: u8,
}

impl Key {
    fn new(symbol: Symbol, color: KeyColor) -> Self {
        Self {
            symbol,
            color,
            span: 1,
        }
    }

    fn wide(symbol: Symbol, color: KeyColor) -> Self {
        Self {
            symbol,
            color,
            span: 2,
        }
    }

    /// The key's display label.
    pub fn label(&self) -> &'static str {
        self.symbol.label()
    }
}

/// The standard five-row layout.
///
/// ```rust
/// use tallypad::keypad::standard_layout;
///
/// let rows = standard_layout();
/// assert_eq!(rows.len(), 5);
/// assert_eq!(rows[0][0].label(), "AC");
/// assert_eq!(rows[4][0].span, 2); // the wide zero key
/// ```
pub fn standard_layout() -> Vec<Vec<Key>> {
    use KeyColor::{DarkGray, LightGray, Orange};

    vec![
        vec![
            Key::new(Symbol::Clear, LightGray),
            Key::new(Symbol::ToggleSign, LightGray),
            Key::new(Symbol::Percent, LightGray),
            Key::new(Symbol::Op(Operator::Div), Orange),
        ],
        vec![
            Key::new(Symbol::Digit(7), DarkGray),
            Key::new(Symbol::Digit(8), DarkGray),
            Key::new(Symbol::Digit(9), DarkGray),
            Key::new(Symbol::Op(Operator::Mul), Orange),
        ],
        vec![
            Key::new(Symbol::Digit(4), DarkGray),
            Key::new(Symbol::Digit(5), DarkGray),
            Key::new(Symbol::Digit(6), DarkGray),
            Key::new(Symbol::Op(Operator::Sub), Orange),
        ],
        vec![
            Key::new(Symbol::Digit(1), DarkGray),
            Key::new(Symbol::Digit(2), DarkGray),
            Key::new(Symbol::Digit(3), DarkGray),
            Key::new(Symbol::Op(Operator::Add), Orange),
        ],
        vec![
            Key::wide(Symbol::Digit(0), DarkGray),
            Key::new(Symbol::Point, DarkGray),
            Key::new(Symbol::Equals, Orange),
        ],
    ]
}
