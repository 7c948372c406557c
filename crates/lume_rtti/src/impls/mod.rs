//! [`VarType`](crate::ty::VarType) implementations for the built-in value
//! types.
//!
//! ## Implemented Menu
//!
//! - `bool`
//! - `i8`-`i64`, `u8`-`u64`, `usize`
//! - `f32`, `f64`
//! - `String`
//!
//! Every implementation is total: conversions wrap, saturate, or fall back
//! to the type's zero value, but never fail. The text forms produced here
//! are the canonical interchange format — parsing a value's own text always
//! reproduces the value exactly.

// -----------------------------------------------------------------------------
// Modules

mod boolean;
mod float;
mod int;
mod string;

// -----------------------------------------------------------------------------
// Shared parse helpers

/// Recognizes the canonical boolean literals, ignoring case and surrounding
/// whitespace.
pub(crate) fn parse_bool(text: &str) -> Option<bool> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Numeric fallback stage of the text parse chain.
pub(crate) fn parse_f64(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

/// Text-to-integer chain: native radix-10 parse first, then the `f64`
/// fallback truncated into range, then zero.
macro_rules! int_from_text {
    ($text:expr, $ty:ty) => {{
        let text = $text.trim();
        if let Ok(value) = text.parse::<$ty>() {
            value
        } else if let Some(value) = $crate::impls::parse_f64(text) {
            value as $ty
        } else {
            0
        }
    }};
}

pub(crate) use int_from_text;
