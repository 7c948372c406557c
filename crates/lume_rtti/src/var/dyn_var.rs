use alloc::string::String;
use core::any::Any;
use core::fmt;

use crate::registry::VarTypeDesc;
use crate::ty::VarTypeId;

// -----------------------------------------------------------------------------
// DynVar

/// The type-erased contract every [`Var`](crate::Var) satisfies.
///
/// Reflective callers — property editors, serializers, scripting bindings —
/// hold attributes as `&dyn DynVar` / `&mut dyn DynVar` and manipulate them
/// without knowing the native value type. The interface is **closed and
/// total**: no operation returns an error, throws, or blocks.
///
/// - Out-of-range conversions wrap, saturate, or fall back as documented on
///   [`VarType`](crate::ty::VarType); they never fail.
/// - Every setter on a variable bound to the
///   [`ReadOnly`](crate::access::ReadOnly) policy is a silent no-op.
///
/// This is a deliberate design goal: reflective code can chain calls
/// without error-checking boilerplate.
///
/// All accessors route through the variable's single storage adapter, so
/// every view of the value stays consistent regardless of which
/// representation was last written.
///
/// # Example
///
/// ```
/// use lume_rtti::{DynVar, Var};
///
/// let mut health = Var::<i32>::new(200);
///
/// let var: &mut dyn DynVar = &mut health;
/// assert!(var.is_default());
///
/// var.set_f64(57.9); // silent truncation
/// assert_eq!(var.get_i32(), 57);
/// assert_eq!(var.get_text(), "57");
/// assert!(!var.is_default());
///
/// var.set_default();
/// assert_eq!(var.get_i32(), 200);
/// ```
pub trait DynVar: Any {
    /// The runtime descriptor of the bound value type.
    fn descriptor(&self) -> &'static VarTypeDesc;

    /// Declared name of the bound value type.
    fn type_name(&self) -> &'static str;

    /// Stable numeric identifier of the bound value type.
    fn var_type_id(&self) -> VarTypeId;

    /// Whether the current value equals the default, by the value type's
    /// native equality. For floating-point types this is exact equality,
    /// not tolerance-based.
    fn is_default(&self) -> bool;

    /// Resets the current value to the default (subject to the access
    /// policy, like any other write).
    fn set_default(&mut self);

    /// The default value in its canonical text form.
    fn default_text(&self) -> String;

    /// Assigns another variable's value, converting across native types
    /// through the bound type's [`from_var`](crate::ty::VarType::from_var)
    /// entry. For representable values this agrees with
    /// `set_text(&other.get_text())`, making the text form the canonical
    /// cross-type bridge.
    fn set_var(&mut self, other: &dyn DynVar);

    fn get_bool(&self) -> bool;
    fn set_bool(&mut self, value: bool);

    fn get_i8(&self) -> i8;
    fn set_i8(&mut self, value: i8);

    fn get_i16(&self) -> i16;
    fn set_i16(&mut self, value: i16);

    fn get_i32(&self) -> i32;
    fn set_i32(&mut self, value: i32);

    fn get_i64(&self) -> i64;
    fn set_i64(&mut self, value: i64);

    fn get_u8(&self) -> u8;
    fn set_u8(&mut self, value: u8);

    fn get_u16(&self) -> u16;
    fn set_u16(&mut self, value: u16);

    fn get_u32(&self) -> u32;
    fn set_u32(&mut self, value: u32);

    fn get_u64(&self) -> u64;
    fn set_u64(&mut self, value: u64);

    fn get_usize(&self) -> usize;
    fn set_usize(&mut self, value: usize);

    fn get_f32(&self) -> f32;
    fn set_f32(&mut self, value: f32);

    fn get_f64(&self) -> f64;
    fn set_f64(&mut self, value: f64);

    /// The current value in its canonical text form. This is the de facto
    /// interchange format of the reflection core and is stable per value
    /// type.
    fn get_text(&self) -> String;

    /// Parses and assigns the text form. Unparsable text falls back per
    /// the bound type's rules; it is never an error.
    fn set_text(&mut self, text: &str);
}

impl dyn DynVar {
    /// Returns `true` if the underlying variable is of concrete type `T`.
    ///
    /// # Example
    ///
    /// ```
    /// use lume_rtti::{DynVar, Var};
    ///
    /// let var = Var::<i32>::new(10);
    /// let var: &dyn DynVar = &var;
    ///
    /// assert!(var.is::<Var<i32>>());
    /// assert!(!var.is::<Var<bool>>());
    /// ```
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        <dyn Any>::type_id(self) == core::any::TypeId::of::<T>()
    }

    /// Downcasts to the concrete variable type by reference.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts to the concrete variable type by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }
}

impl fmt::Debug for dyn DynVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.type_name(), self.get_text())
    }
}
