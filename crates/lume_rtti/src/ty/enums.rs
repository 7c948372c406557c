use alloc::string::String;
use core::marker::PhantomData;

use crate::registry::VarTypeDesc;
use crate::ty::{VarType, VarTypeId};
use crate::var::DynVar;

// -----------------------------------------------------------------------------
// Name tables

/// A build-time name table for an enumerated value type.
///
/// An enumerated type is a restriction of an underlying numeric
/// representation (`Repr`) plus a table mapping names to values. Declare one
/// with [`enum_values!`](crate::enum_values) rather than implementing this
/// trait by hand; the macro also produces the per-type
/// [`descriptor`](EnumValues::descriptor) singleton.
///
/// The table is consulted for text conversion only; numeric conversions go
/// straight through the representation.
pub trait EnumValues: 'static {
    /// The underlying representation the values restrict.
    type Repr: VarType + Copy;

    /// Declared name of the enumerated type.
    const NAME: &'static str;

    /// The `(name, value)` table, in declaration order.
    const VALUES: &'static [(&'static str, Self::Repr)];

    /// Runtime descriptor singleton for [`EnumValue<Self>`].
    fn descriptor() -> &'static VarTypeDesc;
}

/// A build-time name table for a flag (bit set) value type.
///
/// Like [`EnumValues`], but the table entries are combinable bit patterns
/// over an unsigned integer representation. Declare one with
/// [`flag_values!`](crate::flag_values).
pub trait FlagValues: 'static {
    /// The underlying bit representation. Expected to be one of the
    /// unsigned integer value types.
    type Bits: VarType + Copy;

    /// Declared name of the flag type.
    const NAME: &'static str;

    /// The `(name, bits)` table, in declaration order.
    const VALUES: &'static [(&'static str, Self::Bits)];

    /// Runtime descriptor singleton for [`FlagValue<Self>`].
    fn descriptor() -> &'static VarTypeDesc;
}

// -----------------------------------------------------------------------------
// EnumValue

/// The value type produced by an [`EnumValues`] table.
///
/// Holds the underlying representation directly; the table only shapes the
/// text form. An out-of-table value is not an error: it formats as the
/// representation's own text (the documented fallback) and every numeric
/// conversion behaves exactly like the representation's.
///
/// # Example
///
/// ```
/// use lume_rtti::ty::{EnumValue, VarType};
///
/// lume_rtti::enum_values! {
///     /// Shading mode of a scene node.
///     pub enum ShadeMode: u32 {
///         "Flat" => 0,
///         "Gouraud" => 1,
///         "Phong" => 2,
///     }
/// }
///
/// let mode = EnumValue::<ShadeMode>::from_text("Phong");
/// assert_eq!(mode.value(), 2);
/// assert_eq!(mode.to_text(), "Phong");
///
/// // Out-of-table values fall back to the representation's text.
/// assert_eq!(EnumValue::<ShadeMode>::new(9).to_text(), "9");
/// ```
pub struct EnumValue<E: EnumValues>(E::Repr, PhantomData<fn() -> E>);

impl<E: EnumValues> EnumValue<E> {
    /// Wraps a raw representation value. No table check is performed.
    #[inline]
    pub const fn new(repr: E::Repr) -> Self {
        Self(repr, PhantomData)
    }

    /// Returns the underlying representation value.
    #[inline]
    pub fn value(&self) -> E::Repr {
        self.0
    }
}

impl<E: EnumValues> Clone for EnumValue<E> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.0)
    }
}

impl<E: EnumValues> PartialEq for EnumValue<E> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<E: EnumValues> core::fmt::Debug for EnumValue<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}({})", E::NAME, self.to_text())
    }
}

impl<E: EnumValues> VarType for EnumValue<E> {
    const TYPE_ID: VarTypeId = <E::Repr as VarType>::TYPE_ID;
    const TYPE_NAME: &'static str = E::NAME;

    #[inline]
    fn descriptor() -> &'static VarTypeDesc {
        E::descriptor()
    }

    /// The first table entry, or the representation's default for an empty
    /// table.
    fn default_value() -> Self {
        match E::VALUES.first() {
            Some((_, value)) => Self::new(*value),
            None => Self::new(E::Repr::default_value()),
        }
    }

    fn to_bool(&self) -> bool {
        self.0.to_bool()
    }
    fn from_bool(value: bool) -> Self {
        Self::new(E::Repr::from_bool(value))
    }

    fn to_i8(&self) -> i8 {
        self.0.to_i8()
    }
    fn from_i8(value: i8) -> Self {
        Self::new(E::Repr::from_i8(value))
    }

    fn to_i16(&self) -> i16 {
        self.0.to_i16()
    }
    fn from_i16(value: i16) -> Self {
        Self::new(E::Repr::from_i16(value))
    }

    fn to_i32(&self) -> i32 {
        self.0.to_i32()
    }
    fn from_i32(value: i32) -> Self {
        Self::new(E::Repr::from_i32(value))
    }

    fn to_i64(&self) -> i64 {
        self.0.to_i64()
    }
    fn from_i64(value: i64) -> Self {
        Self::new(E::Repr::from_i64(value))
    }

    fn to_u8(&self) -> u8 {
        self.0.to_u8()
    }
    fn from_u8(value: u8) -> Self {
        Self::new(E::Repr::from_u8(value))
    }

    fn to_u16(&self) -> u16 {
        self.0.to_u16()
    }
    fn from_u16(value: u16) -> Self {
        Self::new(E::Repr::from_u16(value))
    }

    fn to_u32(&self) -> u32 {
        self.0.to_u32()
    }
    fn from_u32(value: u32) -> Self {
        Self::new(E::Repr::from_u32(value))
    }

    fn to_u64(&self) -> u64 {
        self.0.to_u64()
    }
    fn from_u64(value: u64) -> Self {
        Self::new(E::Repr::from_u64(value))
    }

    fn to_usize(&self) -> usize {
        self.0.to_usize()
    }
    fn from_usize(value: usize) -> Self {
        Self::new(E::Repr::from_usize(value))
    }

    fn to_f32(&self) -> f32 {
        self.0.to_f32()
    }
    fn from_f32(value: f32) -> Self {
        Self::new(E::Repr::from_f32(value))
    }

    fn to_f64(&self) -> f64 {
        self.0.to_f64()
    }
    fn from_f64(value: f64) -> Self {
        Self::new(E::Repr::from_f64(value))
    }

    fn to_text(&self) -> String {
        match E::VALUES.iter().find(|(_, value)| *value == self.0) {
            Some((name, _)) => String::from(*name),
            None => self.0.to_text(),
        }
    }

    fn from_text(text: &str) -> Self {
        let text = text.trim();
        match E::VALUES.iter().find(|(name, _)| *name == text) {
            Some((_, value)) => Self::new(*value),
            None => Self::new(E::Repr::from_text(text)),
        }
    }

    fn from_var(var: &dyn DynVar) -> Self {
        Self::from_text(&var.get_text())
    }
}

// -----------------------------------------------------------------------------
// FlagValue

/// The value type produced by a [`FlagValues`] table.
///
/// A flag value is a bit set over the underlying unsigned representation.
/// Its text form joins the names of all fully-contained table entries with
/// `|`; bits not covered by any entry are appended as the representation's
/// numeric text (the documented fallback), and the empty set formats as the
/// representation's zero.
///
/// # Example
///
/// ```
/// use lume_rtti::ty::{FlagValue, VarType};
///
/// lume_rtti::flag_values! {
///     /// Per-surface draw switches.
///     pub enum DrawFlags: u32 {
///         "CastShadow" => 0x01,
///         "ReceiveShadow" => 0x02,
///         "Wireframe" => 0x04,
///     }
/// }
///
/// let flags = FlagValue::<DrawFlags>::from_text("CastShadow|Wireframe");
/// assert_eq!(flags.value(), 0x05);
/// assert_eq!(flags.to_text(), "CastShadow|Wireframe");
///
/// // Uncovered bits fall back to numeric text.
/// assert_eq!(FlagValue::<DrawFlags>::new(0x09).to_text(), "CastShadow|8");
/// ```
pub struct FlagValue<F: FlagValues>(F::Bits, PhantomData<fn() -> F>);

impl<F: FlagValues> FlagValue<F> {
    /// Wraps a raw bit pattern. No table check is performed.
    #[inline]
    pub const fn new(bits: F::Bits) -> Self {
        Self(bits, PhantomData)
    }

    /// Returns the underlying bit pattern.
    #[inline]
    pub fn value(&self) -> F::Bits {
        self.0
    }

    /// Whether every bit of `entry` is set in this value.
    pub fn contains(&self, entry: F::Bits) -> bool {
        let bits = entry.to_u64();
        self.0.to_u64() & bits == bits
    }
}

impl<F: FlagValues> Clone for FlagValue<F> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.0)
    }
}

impl<F: FlagValues> PartialEq for FlagValue<F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<F: FlagValues> core::fmt::Debug for FlagValue<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}({})", F::NAME, self.to_text())
    }
}

impl<F: FlagValues> VarType for FlagValue<F> {
    const TYPE_ID: VarTypeId = <F::Bits as VarType>::TYPE_ID;
    const TYPE_NAME: &'static str = F::NAME;

    #[inline]
    fn descriptor() -> &'static VarTypeDesc {
        F::descriptor()
    }

    /// The empty bit set.
    fn default_value() -> Self {
        Self::new(F::Bits::default_value())
    }

    fn to_bool(&self) -> bool {
        self.0.to_bool()
    }
    fn from_bool(value: bool) -> Self {
        Self::new(F::Bits::from_bool(value))
    }

    fn to_i8(&self) -> i8 {
        self.0.to_i8()
    }
    fn from_i8(value: i8) -> Self {
        Self::new(F::Bits::from_i8(value))
    }

    fn to_i16(&self) -> i16 {
        self.0.to_i16()
    }
    fn from_i16(value: i16) -> Self {
        Self::new(F::Bits::from_i16(value))
    }

    fn to_i32(&self) -> i32 {
        self.0.to_i32()
    }
    fn from_i32(value: i32) -> Self {
        Self::new(F::Bits::from_i32(value))
    }

    fn to_i64(&self) -> i64 {
        self.0.to_i64()
    }
    fn from_i64(value: i64) -> Self {
        Self::new(F::Bits::from_i64(value))
    }

    fn to_u8(&self) -> u8 {
        self.0.to_u8()
    }
    fn from_u8(value: u8) -> Self {
        Self::new(F::Bits::from_u8(value))
    }

    fn to_u16(&self) -> u16 {
        self.0.to_u16()
    }
    fn from_u16(value: u16) -> Self {
        Self::new(F::Bits::from_u16(value))
    }

    fn to_u32(&self) -> u32 {
        self.0.to_u32()
    }
    fn from_u32(value: u32) -> Self {
        Self::new(F::Bits::from_u32(value))
    }

    fn to_u64(&self) -> u64 {
        self.0.to_u64()
    }
    fn from_u64(value: u64) -> Self {
        Self::new(F::Bits::from_u64(value))
    }

    fn to_usize(&self) -> usize {
        self.0.to_usize()
    }
    fn from_usize(value: usize) -> Self {
        Self::new(F::Bits::from_usize(value))
    }

    fn to_f32(&self) -> f32 {
        self.0.to_f32()
    }
    fn from_f32(value: f32) -> Self {
        Self::new(F::Bits::from_f32(value))
    }

    fn to_f64(&self) -> f64 {
        self.0.to_f64()
    }
    fn from_f64(value: f64) -> Self {
        Self::new(F::Bits::from_f64(value))
    }

    fn to_text(&self) -> String {
        let value = self.0.to_u64();
        let mut covered = 0u64;
        let mut out = String::new();

        for (name, bits) in F::VALUES {
            let bits = bits.to_u64();
            if bits != 0 && value & bits == bits {
                if !out.is_empty() {
                    out.push('|');
                }
                out.push_str(name);
                covered |= bits;
            }
        }

        let leftover = value & !covered;
        if leftover != 0 || out.is_empty() {
            if !out.is_empty() {
                out.push('|');
            }
            out.push_str(&F::Bits::from_u64(leftover).to_text());
        }
        out
    }

    fn from_text(text: &str) -> Self {
        let mut acc = 0u64;
        for token in text.split('|') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            acc |= match F::VALUES.iter().find(|(name, _)| *name == token) {
                Some((_, bits)) => bits.to_u64(),
                None => F::Bits::from_text(token).to_u64(),
            };
        }
        Self::new(F::Bits::from_u64(acc))
    }

    fn from_var(var: &dyn DynVar) -> Self {
        Self::from_text(&var.get_text())
    }
}

// -----------------------------------------------------------------------------
// Declaration macros

/// Declares an enumerated value type: a marker type, its [`EnumValues`]
/// name table, and the descriptor singleton.
///
/// The declared marker is used through [`EnumValue<T>`](crate::ty::EnumValue),
/// which is the actual [`VarType`](crate::ty::VarType).
///
/// # Example
///
/// ```
/// use lume_rtti::{DynVar, Var, ty::EnumValue};
///
/// lume_rtti::enum_values! {
///     pub enum BlendMode: u32 {
///         "Opaque" => 0,
///         "Alpha" => 1,
///         "Additive" => 2,
///     }
/// }
///
/// let mut blend = Var::<EnumValue<BlendMode>>::default();
/// blend.set_text("Additive");
/// assert_eq!(blend.get().value(), 2);
/// ```
#[macro_export]
macro_rules! enum_values {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ty {
            $($entry:literal => $value:expr),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis struct $name;

        impl $crate::ty::EnumValues for $name {
            type Repr = $repr;

            const NAME: &'static str = ::core::stringify!($name);
            const VALUES: &'static [(&'static str, $repr)] = &[$(($entry, $value)),+];

            fn descriptor() -> &'static $crate::registry::VarTypeDesc {
                static DESC: $crate::registry::VarTypeDesc =
                    $crate::registry::VarTypeDesc::of::<$crate::ty::EnumValue<$name>>();
                &DESC
            }
        }
    };
}

/// Declares a flag value type: a marker type, its [`FlagValues`] name
/// table, and the descriptor singleton.
///
/// The declared marker is used through [`FlagValue<T>`](crate::ty::FlagValue).
/// See [`enum_values!`](crate::enum_values) for the enumerated counterpart.
#[macro_export]
macro_rules! flag_values {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $bits:ty {
            $($entry:literal => $value:expr),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis struct $name;

        impl $crate::ty::FlagValues for $name {
            type Bits = $bits;

            const NAME: &'static str = ::core::stringify!($name);
            const VALUES: &'static [(&'static str, $bits)] = &[$(($entry, $value)),+];

            fn descriptor() -> &'static $crate::registry::VarTypeDesc {
                static DESC: $crate::registry::VarTypeDesc =
                    $crate::registry::VarTypeDesc::of::<$crate::ty::FlagValue<$name>>();
                &DESC
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ty::VarTypeId;

    crate::enum_values! {
        enum FillMode: u32 {
            "Point" => 0,
            "Line" => 1,
            "Solid" => 2,
        }
    }

    crate::flag_values! {
        enum SurfaceFlags: u32 {
            "CastShadow" => 0x01,
            "ReceiveShadow" => 0x02,
            "Wireframe" => 0x04,
        }
    }

    #[test]
    fn enum_name_table() {
        let mode = EnumValue::<FillMode>::from_text("Line");
        assert_eq!(mode.value(), 1);
        assert_eq!(mode.to_text(), "Line");

        // First table entry is the default.
        assert_eq!(EnumValue::<FillMode>::default_value().to_text(), "Point");
    }

    #[test]
    fn enum_shares_repr_identity() {
        assert_eq!(EnumValue::<FillMode>::TYPE_ID, VarTypeId::UINT32);
        assert_eq!(EnumValue::<FillMode>::TYPE_NAME, "FillMode");
        assert_eq!(FillMode::descriptor().name(), "FillMode");
    }

    #[test]
    fn enum_out_of_table_fallback() {
        let mode = EnumValue::<FillMode>::new(42);
        assert_eq!(mode.to_text(), "42");

        // Unknown names parse as the representation (which defaults to 0).
        assert_eq!(EnumValue::<FillMode>::from_text("Dotted").value(), 0);
        assert_eq!(EnumValue::<FillMode>::from_text("2").value(), 2);
    }

    #[test]
    fn enum_numeric_conversions_pass_through() {
        let mode = EnumValue::<FillMode>::from_i32(2);
        assert_eq!(mode.to_text(), "Solid");
        assert_eq!(mode.to_f64(), 2.0);
        assert!(mode.to_bool());
    }

    #[test]
    fn flags_join_and_split() {
        let flags = FlagValue::<SurfaceFlags>::from_text("CastShadow | Wireframe");
        assert_eq!(flags.value(), 0x05);
        assert!(flags.contains(0x01));
        assert!(!flags.contains(0x02));
        assert_eq!(flags.to_text(), "CastShadow|Wireframe");
    }

    #[test]
    fn flags_empty_and_leftover() {
        assert_eq!(FlagValue::<SurfaceFlags>::default_value().to_text(), "0");
        assert_eq!(FlagValue::<SurfaceFlags>::new(0x09).to_text(), "CastShadow|8");
        assert_eq!(FlagValue::<SurfaceFlags>::from_text("8|Wireframe").value(), 0x0c);
    }
}
