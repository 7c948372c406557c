use alloc::rc::{Rc, Weak};
use core::cell::RefCell;
use core::marker::PhantomData;

use crate::access::AccessMode;
use crate::ty::VarType;

// -----------------------------------------------------------------------------
// VarStorage

/// Where an attribute's value is kept.
///
/// Two strategies exist:
///
/// - [`DirectValue`]: the value is embedded in the variable itself.
/// - [`GetSet`]: the value lives in an owning object and is reached through
///   its [`VarAccessor`] implementation.
///
/// The strategy is a generic parameter of [`Var`](crate::Var), chosen at
/// the declaration site and monomorphized away; no operation of this layer
/// can fail.
pub trait VarStorage<T: VarType>: 'static {
    /// Returns the current value.
    fn get(&self) -> T;

    /// Writes a new value. Permission checks happen one layer up, in
    /// [`VarAccess`].
    fn set(&mut self, value: T);

    /// Returns the default captured at construction.
    fn get_default(&self) -> T;
}

// -----------------------------------------------------------------------------
// DirectValue

/// Direct storage: value and default embedded in the variable.
pub struct DirectValue<T: VarType> {
    value: T,
    default: T,
}

impl<T: VarType> DirectValue<T> {
    /// Creates the storage with `default` as both current and default value.
    #[inline]
    pub fn new(default: T) -> Self {
        Self {
            value: default.clone(),
            default,
        }
    }
}

impl<T: VarType> VarStorage<T> for DirectValue<T> {
    #[inline]
    fn get(&self) -> T {
        self.value.clone()
    }

    #[inline]
    fn set(&mut self, value: T) {
        self.value = value;
    }

    #[inline]
    fn get_default(&self) -> T {
        self.default.clone()
    }
}

// -----------------------------------------------------------------------------
// GetSet

/// The getter/setter contract an owning object supplies for indirect
/// storage.
///
/// The getter must be side-effect-free and idempotent; the setter must
/// accept any value of the declared type without failure (validation, if
/// any, is the owner's business and invisible to this core).
pub trait VarAccessor<T> {
    fn get(&self) -> T;
    fn set(&mut self, value: T);
}

/// Indirect storage: the value lives in the owning object.
///
/// The owner is held through a non-owning [`Weak`] handle; only the default
/// value is embedded. Every `get`/`set` delegates to the owner's
/// [`VarAccessor`] implementation — nothing is cached.
///
/// # Precondition
///
/// The owner must outlive the variable. A `get` or `set` after the owner
/// was dropped is a precondition violation and panics; it is not a
/// recoverable error.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use lume_rtti::access::{GetSet, ReadWrite, VarAccessor};
/// use lume_rtti::Var;
///
/// struct Node { scale: f32 }
///
/// impl VarAccessor<f32> for Node {
///     fn get(&self) -> f32 { self.scale }
///     fn set(&mut self, value: f32) { self.scale = value.max(0.0); }
/// }
///
/// let node = Rc::new(RefCell::new(Node { scale: 1.0 }));
/// let mut scale = Var::<f32, ReadWrite, GetSet<f32, Node>>::with_accessor(1.0, &node);
///
/// scale.set(2.5);
/// assert_eq!(node.borrow().scale, 2.5);
///
/// // The owner's setter is the single point of truth: its clamp is visible.
/// scale.set(-4.0);
/// assert_eq!(scale.get(), 0.0);
/// ```
pub struct GetSet<T: VarType, O: VarAccessor<T>> {
    default: T,
    owner: Weak<RefCell<O>>,
}

impl<T: VarType, O: VarAccessor<T>> GetSet<T, O> {
    /// Creates the storage with a default value and a back-reference to the
    /// owning object. The handle does not keep the owner alive.
    pub fn new(default: T, owner: &Rc<RefCell<O>>) -> Self {
        Self {
            default,
            owner: Rc::downgrade(owner),
        }
    }

    fn owner(&self) -> Rc<RefCell<O>> {
        self.owner
            .upgrade()
            .expect("variable owner dropped before its attribute")
    }
}

impl<T: VarType, O: VarAccessor<T> + 'static> VarStorage<T> for GetSet<T, O> {
    fn get(&self) -> T {
        self.owner().borrow().get()
    }

    fn set(&mut self, value: T) {
        self.owner().borrow_mut().set(value);
    }

    #[inline]
    fn get_default(&self) -> T {
        self.default.clone()
    }
}

// -----------------------------------------------------------------------------
// VarAccess

/// The combined storage/access adapter a [`Var`](crate::Var) wraps.
///
/// Binds one [`VarStorage`] to one [`AccessMode`]; `set` against a
/// read-only mode is a silent no-op (the adapter layer has no observable
/// failures by design).
pub struct VarAccess<T: VarType, A: AccessMode, S: VarStorage<T>> {
    storage: S,
    _marker: PhantomData<(fn() -> T, A)>,
}

impl<T: VarType, A: AccessMode, S: VarStorage<T>> VarAccess<T, A, S> {
    /// Wraps a storage under the access policy `A`.
    #[inline]
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            _marker: PhantomData,
        }
    }

    /// Returns the current value.
    #[inline]
    pub fn get(&self) -> T {
        self.storage.get()
    }

    /// Writes a new value, if the policy permits. Otherwise the value is
    /// dropped and nothing is signaled.
    #[inline]
    pub fn set(&mut self, value: T) {
        if A::WRITABLE {
            self.storage.set(value);
        }
    }

    /// Returns the immutable default captured at construction.
    #[inline]
    pub fn get_default(&self) -> T {
        self.storage.get_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{ReadOnly, ReadWrite};

    #[test]
    fn direct_storage_reads_and_writes() {
        let mut access = VarAccess::<i32, ReadWrite, _>::new(DirectValue::new(200));
        assert_eq!(access.get(), 200);
        assert_eq!(access.get_default(), 200);

        access.set(57);
        assert_eq!(access.get(), 57);
        assert_eq!(access.get_default(), 200);
    }

    #[test]
    fn read_only_ignores_writes() {
        let mut access = VarAccess::<i32, ReadOnly, _>::new(DirectValue::new(10));
        access.set(99);
        assert_eq!(access.get(), 10);
    }

    struct Counter {
        value: i32,
        sets: u32,
    }

    impl VarAccessor<i32> for Counter {
        fn get(&self) -> i32 {
            self.value
        }
        fn set(&mut self, value: i32) {
            self.sets += 1;
            self.value = value;
        }
    }

    #[test]
    fn getset_delegates_without_caching() {
        let owner = Rc::new(RefCell::new(Counter { value: 5, sets: 0 }));
        let mut access = VarAccess::<i32, ReadWrite, _>::new(GetSet::new(5, &owner));

        assert_eq!(access.get(), 5);

        // Changes made behind the variable's back are visible immediately.
        owner.borrow_mut().value = 8;
        assert_eq!(access.get(), 8);

        // One set call, one setter invocation.
        access.set(12);
        assert_eq!(owner.borrow().sets, 1);
        assert_eq!(owner.borrow().value, 12);
        assert_eq!(access.get_default(), 5);
    }

    #[test]
    #[should_panic(expected = "variable owner dropped before its attribute")]
    fn getset_after_owner_dropped_panics() {
        let owner = Rc::new(RefCell::new(Counter { value: 5, sets: 0 }));
        let access = VarAccess::<i32, ReadWrite, _>::new(GetSet::new(5, &owner));

        // The handle is non-owning; dropping the owner violates the
        // lifetime precondition.
        drop(owner);
        let _ = access.get();
    }

    #[test]
    fn read_only_getset_never_touches_owner() {
        let owner = Rc::new(RefCell::new(Counter { value: 5, sets: 0 }));
        let mut access = VarAccess::<i32, ReadOnly, _>::new(GetSet::new(5, &owner));

        access.set(12);
        assert_eq!(owner.borrow().sets, 0);
        assert_eq!(access.get(), 5);
    }
}
