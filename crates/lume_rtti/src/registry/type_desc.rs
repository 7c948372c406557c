use alloc::boxed::Box;
use core::fmt;

use crate::ty::{VarType, VarTypeId};
use crate::var::{DynVar, Var};

// -----------------------------------------------------------------------------
// VarTypeDesc

/// The runtime descriptor of a value type.
///
/// A descriptor captures everything reflective code needs to work with a
/// type it only knows by name or id: identity, plus factories that build
/// directly-stored variables of the type from nothing or from text.
///
/// Descriptors are `&'static` singletons produced by
/// [`VarType::descriptor`]; construction goes through the `const`
/// [`of`](VarTypeDesc::of) entry.
///
/// # Example
///
/// ```
/// use lume_rtti::registry::TypeRegistry;
///
/// let registry = TypeRegistry::new();
///
/// let desc = registry.get_with_name("int32").unwrap();
/// let var = desc.parse("57");
/// assert_eq!(var.get_i32(), 57);
/// assert_eq!(var.default_text(), "0");
/// ```
pub struct VarTypeDesc {
    id: VarTypeId,
    name: &'static str,
    make_default: fn() -> Box<dyn DynVar>,
    parse: fn(&str) -> Box<dyn DynVar>,
}

impl VarTypeDesc {
    /// Builds the descriptor of `T` in a `const` context.
    pub const fn of<T: VarType>() -> Self {
        Self {
            id: T::TYPE_ID,
            name: T::TYPE_NAME,
            make_default: make_default_boxed::<T>,
            parse: parse_boxed::<T>,
        }
    }

    /// Stable numeric identifier of the described type.
    ///
    /// Declared wrappers over a numeric representation (enumerations and
    /// flag sets) share the id of their representation; the
    /// [`name`](VarTypeDesc::name) is the unique key.
    #[inline]
    pub const fn type_id(&self) -> VarTypeId {
        self.id
    }

    /// Declared name of the described type.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Creates a directly-stored variable holding the type's default value.
    #[inline]
    pub fn make_default(&self) -> Box<dyn DynVar> {
        (self.make_default)()
    }

    /// Creates a directly-stored variable by parsing `text` with the
    /// type's parse chain. The new variable's default stays the type
    /// default, so `is_default` reflects whether the text named it.
    #[inline]
    pub fn parse(&self, text: &str) -> Box<dyn DynVar> {
        (self.parse)(text)
    }
}

impl fmt::Debug for VarTypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VarTypeDesc")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

fn make_default_boxed<T: VarType>() -> Box<dyn DynVar> {
    Box::new(Var::<T>::new(T::default_value()))
}

fn parse_boxed<T: VarType>(text: &str) -> Box<dyn DynVar> {
    let mut var = Var::<T>::new(T::default_value());
    var.set(T::from_text(text));
    Box::new(var)
}

// -----------------------------------------------------------------------------
// Tests
