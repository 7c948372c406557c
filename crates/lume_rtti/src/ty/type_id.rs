use core::fmt;

// -----------------------------------------------------------------------------
// VarTypeId

/// Stable numeric identifier of a value category.
///
/// Every [`VarType`](crate::ty::VarType) carries exactly one `VarTypeId`.
/// The identifiers are fixed at build time and never change between runs,
/// which makes them usable in tooling that persists attribute metadata.
///
/// Enum and flag value types share the identifier of their underlying
/// representation, see [`EnumValue`](crate::ty::EnumValue) and
/// [`FlagValue`](crate::ty::FlagValue).
///
/// # Example
///
/// ```
/// use lume_rtti::ty::{VarType, VarTypeId};
///
/// assert_eq!(<i32 as VarType>::TYPE_ID, VarTypeId::INT32);
/// assert_eq!(VarTypeId::INT32.get(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarTypeId(i32);

impl VarTypeId {
    /// Reserved identifier for "no valid type".
    ///
    /// Never produced by any [`VarType`](crate::ty::VarType) implementation
    /// in this crate; external tooling may use it as a sentinel.
    pub const INVALID: Self = Self(-1);

    pub const BOOL: Self = Self(1);
    pub const INT8: Self = Self(2);
    pub const INT16: Self = Self(3);
    pub const INT32: Self = Self(4);
    pub const INT64: Self = Self(5);
    pub const UINT8: Self = Self(6);
    pub const UINT16: Self = Self(7);
    pub const UINT32: Self = Self(8);
    pub const UINT64: Self = Self(9);
    pub const UINT_PTR: Self = Self(10);
    pub const FLOAT32: Self = Self(11);
    pub const FLOAT64: Self = Self(12);
    pub const STRING: Self = Self(13);

    /// Returns the raw numeric value.
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for VarTypeId {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
