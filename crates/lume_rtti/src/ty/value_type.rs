use alloc::string::String;

use crate::registry::VarTypeDesc;
use crate::ty::VarTypeId;
use crate::var::DynVar;

// -----------------------------------------------------------------------------
// VarType

/// The per-type conversion entry of the reflection core.
///
/// Implementing `VarType` for a value type supplies everything a
/// [`Var`](crate::Var) needs to expose that type through the type-erased
/// [`DynVar`] interface: a stable [numeric identifier](VarTypeId), a
/// declared name, a canonical default, and a **total** set of conversions
/// to and from every supported representation.
///
/// # Totality
///
/// Every conversion function is total: any representable input produces a
/// value of the destination representation, never an error.
///
/// - Integer narrowing wraps (`as`-cast behavior).
/// - Float to integer saturates at the destination bounds (`as`-cast
///   behavior).
/// - Numeric to `bool` is `!= 0`; `bool` to numeric is `1`/`0`.
/// - Text that fails to parse falls back to a secondary `f64` parse and
///   finally to the type's default value.
///
/// Precision loss is permitted and silent. The text form is guaranteed to
/// round-trip for every value the type's formatter emits (Rust's `Display`
/// output for numeric types is shortest-round-trip).
///
/// # Implemented types
///
/// This crate implements `VarType` for `bool`, `i8`-`i64`, `u8`-`u64`,
/// `usize`, `f32`, `f64` and `String` (see [`crate::impls`]), and for any
/// enum or flag table declared through [`enum_values!`](crate::enum_values)
/// / [`flag_values!`](crate::flag_values).
///
/// New value types are added at build time; there is no runtime-extensible
/// category set.
///
/// # Example
///
/// ```
/// use lume_rtti::ty::VarType;
///
/// assert_eq!(<i32 as VarType>::TYPE_NAME, "int32");
/// assert_eq!(300i32.to_u8(), 44); // silent wrap
/// assert_eq!(i32::from_text("57"), 57);
/// assert_eq!(i32::from_text("3.7"), 3);
/// assert_eq!(i32::from_text("not a number"), 0);
/// ```
pub trait VarType: Clone + PartialEq + Sized + 'static {
    /// Stable numeric identifier of this value category.
    const TYPE_ID: VarTypeId;

    /// Declared, human-readable type name.
    const TYPE_NAME: &'static str;

    /// Returns the process-wide runtime descriptor for this type.
    ///
    /// The descriptor is a `&'static` singleton; registering it into a
    /// [`TypeRegistry`](crate::registry::TypeRegistry) more than once is
    /// harmless.
    fn descriptor() -> &'static VarTypeDesc;

    /// The canonical default value of the type.
    fn default_value() -> Self;

    fn to_bool(&self) -> bool;
    fn from_bool(value: bool) -> Self;

    fn to_i8(&self) -> i8;
    fn from_i8(value: i8) -> Self;

    fn to_i16(&self) -> i16;
    fn from_i16(value: i16) -> Self;

    fn to_i32(&self) -> i32;
    fn from_i32(value: i32) -> Self;

    fn to_i64(&self) -> i64;
    fn from_i64(value: i64) -> Self;

    fn to_u8(&self) -> u8;
    fn from_u8(value: u8) -> Self;

    fn to_u16(&self) -> u16;
    fn from_u16(value: u16) -> Self;

    fn to_u32(&self) -> u32;
    fn from_u32(value: u32) -> Self;

    fn to_u64(&self) -> u64;
    fn from_u64(value: u64) -> Self;

    fn to_usize(&self) -> usize;
    fn from_usize(value: usize) -> Self;

    fn to_f32(&self) -> f32;
    fn from_f32(value: f32) -> Self;

    fn to_f64(&self) -> f64;
    fn from_f64(value: f64) -> Self;

    /// Formats the value in its canonical text form.
    fn to_text(&self) -> String;

    /// Parses the canonical text form, falling back per the totality rules.
    fn from_text(text: &str) -> Self;

    /// Converts another variable's value into this type.
    ///
    /// Each implementation reads the other variable through the accessor
    /// matching its own natural representation (an `i32` type reads
    /// [`DynVar::get_i32`], a `String` type reads [`DynVar::get_text`]),
    /// so the result agrees with `from_text(var.get_text())` whenever the
    /// value is representable.
    fn from_var(var: &dyn DynVar) -> Self;
}
