//! Presentation helpers for the display surface.
//!
//! The host shell renders exactly one text value. These helpers decide
//! what that text looks like and how large it is drawn; they carry no
//! state of their own.

mod format;

pub use format::{format_number, FontScale};
