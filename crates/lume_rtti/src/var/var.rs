use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;

use crate::access::{
    AccessMode, DirectValue, GetSet, ReadWrite, VarAccess, VarAccessor, VarStorage,
};
use crate::registry::VarTypeDesc;
use crate::ty::{VarType, VarTypeId};
use crate::var::DynVar;

// -----------------------------------------------------------------------------
// Var

/// A typed variable with a compile-time access policy and storage strategy.
///
/// `Var` is the statically-typed face of the reflection core. Native code
/// reads and writes through [`get`](Var::get) and [`set`](Var::set) with no
/// erasure overhead, while reflective code reaches the same value through
/// the [`DynVar`] interface, converting on the fly.
///
/// The two extra type parameters default to the common case:
///
/// - `A`: the access policy, [`ReadWrite`] by default. With
///   [`ReadOnly`](crate::access::ReadOnly) every write — native or dynamic —
///   is a silent no-op.
/// - `S`: the storage strategy, [`DirectValue`] by default. A
///   [`GetSet`](crate::access::GetSet) storage forwards every access to an
///   owner object instead of holding the value itself.
///
/// # Examples
///
/// ```
/// use lume_rtti::{DynVar, Var};
/// use lume_rtti::access::ReadOnly;
///
/// let mut timeout = Var::<i32>::new(200);
/// timeout.set(57);
/// assert_eq!(timeout.get(), 57);
/// assert_eq!(timeout.get_text(), "57");
///
/// let mut limit = Var::<i32, ReadOnly>::new(10);
/// limit.set_i32(99); // ignored
/// assert_eq!(limit.get(), 10);
/// ```
pub struct Var<T: VarType, A: AccessMode = ReadWrite, S: VarStorage<T> = DirectValue<T>> {
    value: VarAccess<T, A, S>,
}

impl<T: VarType, A: AccessMode> Var<T, A> {
    /// Creates a directly-stored variable whose default and initial value
    /// are both `default`.
    pub fn new(default: T) -> Self {
        Self {
            value: VarAccess::new(DirectValue::new(default)),
        }
    }
}

impl<T: VarType, A: AccessMode, O: VarAccessor<T> + 'static> Var<T, A, GetSet<T, O>> {
    /// Creates an indirect variable forwarding every access to `owner`
    /// through its [`VarAccessor`] implementation.
    pub fn with_accessor(default: T, owner: &Rc<RefCell<O>>) -> Self {
        Self::with_storage(GetSet::new(default, owner))
    }
}

impl<T: VarType, A: AccessMode, S: VarStorage<T>> Var<T, A, S> {
    /// Creates a variable over an explicit storage adapter, typically a
    /// [`GetSet`](crate::access::GetSet) bound to an owner object.
    pub fn with_storage(storage: S) -> Self {
        Self {
            value: VarAccess::new(storage),
        }
    }

    /// Reads the current value through the storage adapter.
    #[inline]
    pub fn get(&self) -> T {
        self.value.get()
    }

    /// Writes a value through the storage adapter, subject to the access
    /// policy.
    #[inline]
    pub fn set(&mut self, value: T) {
        self.value.set(value);
    }

    /// The variable's default value.
    #[inline]
    pub fn default_value(&self) -> T {
        self.value.get_default()
    }
}

impl<T: VarType> Default for Var<T> {
    fn default() -> Self {
        Self::new(T::default_value())
    }
}

impl<T: VarType, A: AccessMode, S: VarStorage<T>> DynVar for Var<T, A, S> {
    fn descriptor(&self) -> &'static VarTypeDesc {
        T::descriptor()
    }

    fn type_name(&self) -> &'static str {
        T::TYPE_NAME
    }

    fn var_type_id(&self) -> VarTypeId {
        T::TYPE_ID
    }

    fn is_default(&self) -> bool {
        self.value.get() == self.value.get_default()
    }

    fn set_default(&mut self) {
        let default = self.value.get_default();
        self.value.set(default);
    }

    fn default_text(&self) -> String {
        self.value.get_default().to_text()
    }

    fn set_var(&mut self, other: &dyn DynVar) {
        self.value.set(T::from_var(other));
    }

    fn get_bool(&self) -> bool {
        self.value.get().to_bool()
    }

    fn set_bool(&mut self, value: bool) {
        self.value.set(T::from_bool(value));
    }

    fn get_i8(&self) -> i8 {
        self.value.get().to_i8()
    }

    fn set_i8(&mut self, value: i8) {
        self.value.set(T::from_i8(value));
    }

    fn get_i16(&self) -> i16 {
        self.value.get().to_i16()
    }

    fn set_i16(&mut self, value: i16) {
        self.value.set(T::from_i16(value));
    }

    fn get_i32(&self) -> i32 {
        self.value.get().to_i32()
    }

    fn set_i32(&mut self, value: i32) {
        self.value.set(T::from_i32(value));
    }

    fn get_i64(&self) -> i64 {
        self.value.get().to_i64()
    }

    fn set_i64(&mut self, value: i64) {
        self.value.set(T::from_i64(value));
    }

    fn get_u8(&self) -> u8 {
        self.value.get().to_u8()
    }

    fn set_u8(&mut self, value: u8) {
        self.value.set(T::from_u8(value));
    }

    fn get_u16(&self) -> u16 {
        self.value.get().to_u16()
    }

    fn set_u16(&mut self, value: u16) {
        self.value.set(T::from_u16(value));
    }

    fn get_u32(&self) -> u32 {
        self.value.get().to_u32()
    }

    fn set_u32(&mut self, value: u32) {
        self.value.set(T::from_u32(value));
    }

    fn get_u64(&self) -> u64 {
        self.value.get().to_u64()
    }

    fn set_u64(&mut self, value: u64) {
        self.value.set(T::from_u64(value));
    }

    fn get_usize(&self) -> usize {
        self.value.get().to_usize()
    }

    fn set_usize(&mut self, value: usize) {
        self.value.set(T::from_usize(value));
    }

    fn get_f32(&self) -> f32 {
        self.value.get().to_f32()
    }

    fn set_f32(&mut self, value: f32) {
        self.value.set(T::from_f32(value));
    }

    fn get_f64(&self) -> f64 {
        self.value.get().to_f64()
    }

    fn set_f64(&mut self, value: f64) {
        self.value.set(T::from_f64(value));
    }

    fn get_text(&self) -> String {
        self.value.get().to_text()
    }

    fn set_text(&mut self, text: &str) {
        self.value.set(T::from_text(text));
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::string::String;
    use core::cell::RefCell;

    use crate::access::{GetSet, ReadOnly, ReadWrite, VarAccessor};
    use crate::ty::VarTypeId;
    use crate::var::{DynVar, Var};

    #[test]
    fn read_write_lifecycle() {
        let mut var = Var::<i32>::new(200);
        assert_eq!(var.get(), 200);
        assert!(var.is_default());

        var.set(57);
        assert_eq!(var.get(), 57);
        assert!(!var.is_default());
        assert_eq!(var.get_text(), "57");

        var.set_default();
        assert_eq!(var.get(), 200);
        assert!(var.is_default());
        assert_eq!(var.default_text(), "200");
    }

    #[test]
    fn read_only_writes_are_silent_no_ops() {
        let mut var = Var::<i32, ReadOnly>::new(10);

        var.set(42);
        var.set_i32(99);
        var.set_f64(3.5);
        var.set_text("1234");
        var.set_bool(true);

        assert_eq!(var.get(), 10);
        assert_eq!(var.get_i32(), 10);
        assert!(var.is_default());
    }

    #[test]
    fn dynamic_conversions_stay_consistent() {
        let mut var = Var::<bool>::new(true);
        assert_eq!(var.get_text(), "true");
        assert_eq!(var.get_i32(), 1);

        var.set_text("false");
        assert!(!var.get());
        assert_eq!(var.get_text(), "false");
        assert_eq!(var.get_f64(), 0.0);

        var.set_i32(7); // any nonzero is true
        assert!(var.get());
    }

    #[test]
    fn float_write_into_int_truncates() {
        let mut var = Var::<i32>::new(0);
        var.set_f64(57.9);
        assert_eq!(var.get(), 57);
        var.set_f32(-3.7);
        assert_eq!(var.get(), -3);
    }

    #[test]
    fn set_var_matches_text_bridge() {
        let mut source = Var::<f32>::new(0.0);
        source.set(12.5);

        let mut a = Var::<String>::new(String::new());
        let mut b = Var::<String>::new(String::new());

        a.set_var(&source);
        b.set_text(&source.get_text());
        assert_eq!(a.get(), b.get());
        assert_eq!(a.get(), "12.5");

        let mut n = Var::<i64>::new(0);
        n.set_var(&source);
        assert_eq!(n.get(), 12);
    }

    #[test]
    fn float_default_check_is_exact() {
        let mut var = Var::<f64>::new(0.1);
        assert!(var.is_default());

        // Nearly-equal is not equal; the comparison has no tolerance.
        var.set(0.1 + 1e-12);
        assert!(!var.is_default());

        var.set(0.1);
        assert!(var.is_default());
    }

    #[test]
    fn metadata_reports_bound_type() {
        let var = Var::<u8>::new(0);
        assert_eq!(var.var_type_id(), VarTypeId::UINT8);
        assert_eq!(var.type_name(), "uint8");
        assert_eq!(var.descriptor().type_id(), VarTypeId::UINT8);
    }

    #[test]
    fn downcast_recovers_concrete_variable() {
        let mut var = Var::<i32>::new(5);
        let dynamic: &mut dyn DynVar = &mut var;

        assert!(dynamic.is::<Var<i32>>());
        assert!(!dynamic.is::<Var<f32>>());

        let concrete = dynamic
            .downcast_mut::<Var<i32>>()
            .unwrap();
        concrete.set(6);
        assert_eq!(dynamic.get_i32(), 6);
    }

    #[test]
    fn debug_renders_type_and_text() {
        let var = Var::<i32>::new(42);
        let dynamic: &dyn DynVar = &var;
        assert_eq!(alloc::format!("{dynamic:?}"), "int32(42)");
    }

    struct Sprite {
        scale: f32,
        sets: u32,
    }

    impl VarAccessor<f32> for Sprite {
        fn get(&self) -> f32 {
            self.scale
        }

        fn set(&mut self, value: f32) {
            self.scale = value;
            self.sets += 1;
        }
    }

    #[test]
    fn indirect_variable_forwards_to_owner() {
        let sprite = Rc::new(RefCell::new(Sprite { scale: 1.0, sets: 0 }));
        let mut var = Var::<f32, ReadWrite, GetSet<f32, Sprite>>::with_storage(
            GetSet::new(1.0, &sprite),
        );

        assert_eq!(var.get(), 1.0);
        var.set_text("2.5");
        assert_eq!(sprite.borrow().scale, 2.5);
        assert_eq!(sprite.borrow().sets, 1);

        // Mutations behind the variable's back are visible; nothing is cached.
        sprite.borrow_mut().scale = 4.0;
        assert_eq!(var.get_f64(), 4.0);
        assert!(!var.is_default());
    }

    #[test]
    fn read_only_indirect_never_calls_setter() {
        let sprite = Rc::new(RefCell::new(Sprite { scale: 3.0, sets: 0 }));
        let mut var = Var::<f32, ReadOnly, GetSet<f32, Sprite>>::with_storage(
            GetSet::new(3.0, &sprite),
        );

        var.set_f32(9.0);
        var.set_text("9");
        assert_eq!(var.get(), 3.0);
        assert_eq!(sprite.borrow().sets, 0);
    }
}
