use alloc::string::{String, ToString};

use crate::impls::int_from_text;
use crate::registry::VarTypeDesc;
use crate::ty::{VarType, VarTypeId};
use crate::var::DynVar;

/// Integer conversion rules, shared across the whole family:
///
/// - integer-to-integer casts wrap (two's-complement truncation)
/// - float-to-integer casts truncate toward zero and saturate at the bounds
/// - booleans bridge through `1`/`0`
/// - text parses radix-10 first, then through `f64`, then falls back to `0`
macro_rules! impl_int_type {
    ($ty:ty, $id:ident, $name:literal, $getter:ident) => {
        impl VarType for $ty {
            const TYPE_ID: VarTypeId = VarTypeId::$id;
            const TYPE_NAME: &'static str = $name;

            fn descriptor() -> &'static VarTypeDesc {
                static DESC: VarTypeDesc = VarTypeDesc::of::<$ty>();
                &DESC
            }

            fn default_value() -> Self {
                0
            }

            fn to_bool(&self) -> bool {
                *self != 0
            }

            fn from_bool(value: bool) -> Self {
                if value { 1 } else { 0 }
            }

            fn to_i8(&self) -> i8 {
                *self as i8
            }

            fn from_i8(value: i8) -> Self {
                value as $ty
            }

            fn to_i16(&self) -> i16 {
                *self as i16
            }

            fn from_i16(value: i16) -> Self {
                value as $ty
            }

            fn to_i32(&self) -> i32 {
                *self as i32
            }

            fn from_i32(value: i32) -> Self {
                value as $ty
            }

            fn to_i64(&self) -> i64 {
                *self as i64
            }

            fn from_i64(value: i64) -> Self {
                value as $ty
            }

            fn to_u8(&self) -> u8 {
                *self as u8
            }

            fn from_u8(value: u8) -> Self {
                value as $ty
            }

            fn to_u16(&self) -> u16 {
                *self as u16
            }

            fn from_u16(value: u16) -> Self {
                value as $ty
            }

            fn to_u32(&self) -> u32 {
                *self as u32
            }

            fn from_u32(value: u32) -> Self {
                value as $ty
            }

            fn to_u64(&self) -> u64 {
                *self as u64
            }

            fn from_u64(value: u64) -> Self {
                value as $ty
            }

            fn to_usize(&self) -> usize {
                *self as usize
            }

            fn from_usize(value: usize) -> Self {
                value as $ty
            }

            fn to_f32(&self) -> f32 {
                *self as f32
            }

            fn from_f32(value: f32) -> Self {
                value as $ty
            }

            fn to_f64(&self) -> f64 {
                *self as f64
            }

            fn from_f64(value: f64) -> Self {
                value as $ty
            }

            fn to_text(&self) -> String {
                self.to_string()
            }

            fn from_text(text: &str) -> Self {
                int_from_text!(text, $ty)
            }

            fn from_var(var: &dyn DynVar) -> Self {
                var.$getter()
            }
        }
    };
}

impl_int_type!(i8, INT8, "int8", get_i8);
impl_int_type!(i16, INT16, "int16", get_i16);
impl_int_type!(i32, INT32, "int32", get_i32);
impl_int_type!(i64, INT64, "int64", get_i64);
impl_int_type!(u8, UINT8, "uint8", get_u8);
impl_int_type!(u16, UINT16, "uint16", get_u16);
impl_int_type!(u32, UINT32, "uint32", get_u32);
impl_int_type!(u64, UINT64, "uint64", get_u64);
impl_int_type!(usize, UINT_PTR, "uint_ptr", get_usize);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::ty::VarType;

    #[test]
    fn narrowing_casts_wrap() {
        assert_eq!(300_i32.to_u8(), 44);
        assert_eq!((-1_i32).to_u32(), u32::MAX);
        assert_eq!(u64::MAX.to_i8(), -1);
    }

    #[test]
    fn float_casts_truncate_and_saturate() {
        assert_eq!(i32::from_f64(57.9), 57);
        assert_eq!(i32::from_f64(-57.9), -57);
        assert_eq!(u8::from_f32(1000.0), 255);
        assert_eq!(u8::from_f32(-3.0), 0);
        assert_eq!(i16::from_f64(f64::NAN), 0);
    }

    #[test]
    fn text_round_trips_and_falls_back() {
        assert_eq!(42_i64.to_text(), "42");
        assert_eq!(i64::from_text("42"), 42);
        assert_eq!(i32::from_text("  -17 "), -17);
        assert_eq!(u32::from_text("3.9"), 3);
        assert_eq!(u16::from_text("not a number"), 0);
        assert_eq!(i8::from_text(""), 0);
    }

    #[test]
    fn bool_bridge() {
        assert!(5_u8.to_bool());
        assert!(!0_i64.to_bool());
        assert_eq!(i32::from_bool(true), 1);
        assert_eq!(usize::from_bool(false), 0);
    }
}
