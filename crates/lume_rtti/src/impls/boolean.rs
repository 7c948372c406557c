use alloc::string::String;

use crate::impls::{parse_bool, parse_f64};
use crate::registry::VarTypeDesc;
use crate::ty::{VarType, VarTypeId};
use crate::var::DynVar;

/// Booleans map to `1`/`0` numerically and to the lowercase literals
/// `"true"`/`"false"` textually. Any nonzero numeric value reads as `true`;
/// unrecognized text falls back through the numeric parse chain and finally
/// to `false`.
impl VarType for bool {
    const TYPE_ID: VarTypeId = VarTypeId::BOOL;
    const TYPE_NAME: &'static str = "bool";

    fn descriptor() -> &'static VarTypeDesc {
        static DESC: VarTypeDesc = VarTypeDesc::of::<bool>();
        &DESC
    }

    fn default_value() -> Self {
        false
    }

    fn to_bool(&self) -> bool {
        *self
    }

    fn from_bool(value: bool) -> Self {
        value
    }

    fn to_i8(&self) -> i8 {
        *self as i8
    }

    fn from_i8(value: i8) -> Self {
        value != 0
    }

    fn to_i16(&self) -> i16 {
        *self as i16
    }

    fn from_i16(value: i16) -> Self {
        value != 0
    }

    fn to_i32(&self) -> i32 {
        *self as i32
    }

    fn from_i32(value: i32) -> Self {
        value != 0
    }

    fn to_i64(&self) -> i64 {
        *self as i64
    }

    fn from_i64(value: i64) -> Self {
        value != 0
    }

    fn to_u8(&self) -> u8 {
        *self as u8
    }

    fn from_u8(value: u8) -> Self {
        value != 0
    }

    fn to_u16(&self) -> u16 {
        *self as u16
    }

    fn from_u16(value: u16) -> Self {
        value != 0
    }

    fn to_u32(&self) -> u32 {
        *self as u32
    }

    fn from_u32(value: u32) -> Self {
        value != 0
    }

    fn to_u64(&self) -> u64 {
        *self as u64
    }

    fn from_u64(value: u64) -> Self {
        value != 0
    }

    fn to_usize(&self) -> usize {
        *self as usize
    }

    fn from_usize(value: usize) -> Self {
        value != 0
    }

    fn to_f32(&self) -> f32 {
        if *self { 1.0 } else { 0.0 }
    }

    fn from_f32(value: f32) -> Self {
        value != 0.0
    }

    fn to_f64(&self) -> f64 {
        if *self { 1.0 } else { 0.0 }
    }

    fn from_f64(value: f64) -> Self {
        value != 0.0
    }

    fn to_text(&self) -> String {
        String::from(if *self { "true" } else { "false" })
    }

    fn from_text(text: &str) -> Self {
        match parse_bool(text) {
            Some(value) => value,
            None => parse_f64(text).is_some_and(|value| value != 0.0),
        }
    }

    fn from_var(var: &dyn DynVar) -> Self {
        var.get_bool()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::ty::VarType;

    #[test]
    fn canonical_text_is_lowercase() {
        assert_eq!(true.to_text(), "true");
        assert_eq!(false.to_text(), "false");
    }

    #[test]
    fn parse_accepts_any_case_and_whitespace() {
        assert!(bool::from_text("true"));
        assert!(bool::from_text("TRUE"));
        assert!(bool::from_text("  True  "));
        assert!(!bool::from_text("false"));
        assert!(!bool::from_text("False"));
    }

    #[test]
    fn parse_falls_back_through_numbers_to_false() {
        assert!(bool::from_text("1"));
        assert!(bool::from_text("-0.5"));
        assert!(!bool::from_text("0"));
        assert!(!bool::from_text("0.0"));
        assert!(!bool::from_text("maybe"));
        assert!(!bool::from_text(""));
    }

    #[test]
    fn numeric_bridge_is_one_and_zero() {
        assert_eq!(true.to_i32(), 1);
        assert_eq!(false.to_u64(), 0);
        assert_eq!(true.to_f64(), 1.0);
        assert!(bool::from_i32(-7));
        assert!(!bool::from_f32(0.0));
    }
}
