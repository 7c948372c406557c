use alloc::string::{String, ToString};

use crate::registry::VarTypeDesc;
use crate::ty::{VarType, VarTypeId};
use crate::var::DynVar;

/// Floating-point conversion rules:
///
/// - integer casts use the native rounding-free conversion (`f64` holds any
///   `i32`/`u32` exactly; wider integers may round)
/// - float-to-integer reads truncate toward zero and saturate
/// - any nonzero value (including `NaN`) reads as `true`
/// - the text form is the shortest decimal that round-trips exactly
macro_rules! impl_float_type {
    ($ty:ty, $id:ident, $name:literal, $getter:ident) => {
        impl VarType for $ty {
            const TYPE_ID: VarTypeId = VarTypeId::$id;
            const TYPE_NAME: &'static str = $name;

            fn descriptor() -> &'static VarTypeDesc {
                static DESC: VarTypeDesc = VarTypeDesc::of::<$ty>();
                &DESC
            }

            fn default_value() -> Self {
                0.0
            }

            fn to_bool(&self) -> bool {
                *self != 0.0
            }

            fn from_bool(value: bool) -> Self {
                if value { 1.0 } else { 0.0 }
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
                text.trim().parse::<$ty>().unwrap_or(0.0)
            }

            fn from_var(var: &dyn DynVar) -> Self {
                var.$getter()
            }
        }
    };
}

impl_float_type!(f32, FLOAT32, "float32", get_f32);
impl_float_type!(f64, FLOAT64, "float64", get_f64);

// -----------------------------------------------------------------------------
// Tests
