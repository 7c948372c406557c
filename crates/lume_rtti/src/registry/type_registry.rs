use alloc::string::String;

use foldhash::fast::FixedState;
use hashbrown::HashMap;

use crate::registry::VarTypeDesc;
use crate::ty::{VarType, VarTypeId};

// Fixed seed: lookups hash identically in every process, which keeps
// registry behavior reproducible across runs.
const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0xB2D1_77C6_0A3E_94ED);

type FixedHashMap<K, V> = HashMap<K, V, FixedState>;

// -----------------------------------------------------------------------------
// TypeRegistry

/// A registry of variable type descriptors.
///
/// This is the central store reflective code queries to resolve a type it
/// only knows by declared name or numeric id, typically while
/// deserializing or while binding script values.
///
/// The declared name is the unique key: [`register`](TypeRegistry::register)
/// keeps the first descriptor registered under a name and rejects later
/// ones. Numeric ids are not unique — declared enumeration and flag types
/// share the id of their numeric representation — so the id index also
/// keeps its first entry, which for the built-in ids is the plain type.
///
/// # Example
///
/// ```
/// use lume_rtti::registry::TypeRegistry;
///
/// let registry = TypeRegistry::new();
///
/// let desc = registry.get_with_name("float32").unwrap();
/// let var = desc.parse("12.5");
/// assert_eq!(var.get_f32(), 12.5);
/// ```
pub struct TypeRegistry {
    by_name: FixedHashMap<&'static str, &'static VarTypeDesc>,
    by_id: FixedHashMap<VarTypeId, &'static VarTypeDesc>,
}

impl Default for TypeRegistry {
    /// See [`TypeRegistry::new`] .
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            by_name: FixedHashMap::with_hasher(FIXED_HASH_STATE),
            by_id: FixedHashMap::with_hasher(FIXED_HASH_STATE),
        }
    }

    /// Creates a registry with the built-in value types registered:
    ///
    /// - `bool`
    /// - `i8 - i64`, `u8 - u64`, `usize`
    /// - `f32` `f64`
    /// - `String`
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register::<bool>();
        registry.register::<i8>();
        registry.register::<i16>();
        registry.register::<i32>();
        registry.register::<i64>();
        registry.register::<u8>();
        registry.register::<u16>();
        registry.register::<u32>();
        registry.register::<u64>();
        registry.register::<usize>();
        registry.register::<f32>();
        registry.register::<f64>();
        registry.register::<String>();
        registry
    }

    /// Registers the value type `T` under its declared name.
    ///
    /// Returns `true` if the descriptor was inserted, `false` if the name
    /// was already taken (the existing entry is kept).
    #[inline]
    pub fn register<T: VarType>(&mut self) -> bool {
        self.register_desc(T::descriptor())
    }

    /// Registers an already-built descriptor. See
    /// [`register`](TypeRegistry::register).
    pub fn register_desc(&mut self, desc: &'static VarTypeDesc) -> bool {
        if self.by_name.contains_key(desc.name()) {
            return false;
        }
        self.by_name.insert(desc.name(), desc);
        // First registration wins the id slot; declared wrappers that
        // share a built-in id stay reachable by name.
        self.by_id.entry(desc.type_id()).or_insert(desc);
        log::trace!("registered variable type `{}` (id {})", desc.name(), desc.type_id());
        true
    }

    /// Registers every type submitted for static registration.
    ///
    /// The built-in value types submit themselves, so
    /// `TypeRegistry::empty()` followed by `auto_register()` is equivalent
    /// to [`TypeRegistry::new`]. Repeated calls are cheap and insert no
    /// duplicates.
    ///
    /// Requires the `auto_register` feature (static registration is backed
    /// by the `inventory` crate); without it this does nothing and returns
    /// `false`.
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            for entry in inventory::iter::<AutoRegistered> {
                self.register_desc((entry.descriptor)());
            }
            true
        }
        #[cfg(not(feature = "auto_register"))]
        false
    }

    /// Whether a type is registered under the given declared name.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Looks up the descriptor registered first under the given numeric id.
    #[inline]
    pub fn get(&self, id: VarTypeId) -> Option<&'static VarTypeDesc> {
        self.by_id.get(&id).copied()
    }

    /// Looks up the descriptor registered under the given declared name.
    #[inline]
    pub fn get_with_name(&self, name: &str) -> Option<&'static VarTypeDesc> {
        self.by_name.get(name).copied()
    }

    /// Returns an iterator over the registered descriptors.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'static VarTypeDesc> + '_ {
        self.by_name.values().copied()
    }

    /// Number of registered names.
    #[inline]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

// -----------------------------------------------------------------------------
// Static registration

#[cfg(feature = "auto_register")]
pub(crate) struct AutoRegistered {
    pub(crate) descriptor: fn() -> &'static VarTypeDesc,
}

#[cfg(feature = "auto_register")]
inventory::collect!(AutoRegistered);

#[cfg(feature = "auto_register")]
mod submissions {
    use alloc::string::String;

    use super::AutoRegistered;
    use crate::ty::VarType;

    macro_rules! submit_builtin {
        ($($ty:ty),* $(,)?) => {$(
            inventory::submit!(AutoRegistered {
                descriptor: <$ty as VarType>::descriptor,
            });
        )*};
    }

    submit_builtin!(bool, i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64, String);
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::registry::TypeRegistry;
    use crate::ty::VarTypeId;

    #[test]
    fn new_covers_the_builtin_types() {
        let registry = TypeRegistry::new();
        assert_eq!(registry.len(), 13);
        for name in [
            "bool", "int8", "int16", "int32", "int64", "uint8", "uint16", "uint32", "uint64",
            "uint_ptr", "float32", "float64", "string",
        ] {
            assert!(registry.contains(name), "missing {name}");
        }
    }

    #[test]
    fn lookup_by_name_and_id_agree() {
        let registry = TypeRegistry::new();
        let by_name = registry.get_with_name("int32").unwrap();
        let by_id = registry.get(VarTypeId::INT32).unwrap();
        assert!(core::ptr::eq(by_name, by_id));
    }

    #[test]
    fn duplicate_names_keep_the_first_entry() {
        let mut registry = TypeRegistry::empty();
        assert!(registry.register::<i32>());
        assert!(!registry.register::<i32>());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn register_desc_takes_prebuilt_descriptors() {
        use crate::ty::VarType;

        let mut registry = TypeRegistry::empty();
        assert!(registry.register_desc(bool::descriptor()));
        assert!(!registry.register_desc(bool::descriptor()));
        assert!(core::ptr::eq(
            registry.get_with_name("bool").unwrap(),
            bool::descriptor(),
        ));
    }

    #[test]
    fn unknown_lookups_return_none() {
        let registry = TypeRegistry::new();
        assert!(registry.get_with_name("quaternion").is_none());
        assert!(registry.get(VarTypeId::INVALID).is_none());
    }

    #[cfg(feature = "auto_register")]
    #[test]
    fn auto_register_matches_new() {
        let mut registry = TypeRegistry::empty();
        assert!(registry.auto_register());
        assert_eq!(registry.len(), TypeRegistry::new().len());
        assert!(registry.contains("string"));

        // Idempotent.
        assert!(registry.auto_register());
        assert_eq!(registry.len(), TypeRegistry::new().len());
    }

    #[test]
    fn descriptors_drive_dynamic_construction() {
        let registry = TypeRegistry::new();
        // Out-of-range text saturates through the f64 stage of the parse chain.
        let var = registry.get_with_name("uint8").unwrap().parse("300");
        assert_eq!(var.get_u8(), 255);
        assert_eq!(var.get_text(), "255");
    }
}
