//! Display text formatting and font sizing.

use serde::{Deserialize, Serialize};

/// Format an operand for display.
///
/// Strips a trailing `".0"` so integral results read as whole numbers;
/// everything else (fractional results, mid-entry text, the error
/// marker) passes through unchanged.
///
/// # Example
///
/// ```rust
/// use tallypad::display::format_number;
///
/// assert_eq!(format_number("5.0"), "5");
/// assert_eq!(format_number("5.5"), "5.5");
/// ```
pub fn format_number(number: &str) -> String {
    match number.strip_suffix(".0") {
        Some(stripped) => stripped.to_string(),
        None => number.to_string(),
    }
}

/// Display font size, stepped down as the text grows.
///
/// Four discrete steps keyed on character count: fewer than seven
/// characters render at the largest size, then one step down at exactly
/// seven and eight, and the smallest size from nine on.
///
/// # Example
///
/// ```rust
/// use tallypad::display::FontScale;
///
/// assert_eq!(FontScale::for_text("123456"), FontScale::Large);
/// assert_eq!(FontScale::for_text("123456789"), FontScale::ExtraSmall);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum FontScale {
    Large,
    Medium,
    Small,
    ExtraSmall,
}

impl FontScale {
    /// Pick the scale for a formatted display string.
    pub fn for_text(text: &str) -> Self {
        match text.chars().count() {
            0..=6 => Self::Large,
            7 => Self::Medium,
            8 => Self::Small,
            _ => Self::ExtraSmall,
        }
    }

    /// The font size in scaled pixels.
    pub fn size_sp(&self) -> u32 {
        match self {
            Self::Large => 100,
            Self::Medium => 90,
            Self::Small => 80,
            Self::ExtraSmall => 70,
        }
    }
}
