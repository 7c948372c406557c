// -----------------------------------------------------------------------------
// AccessMode

/// Write permission of an attribute, selected at the type level.
///
/// The policy is a generic parameter of [`Var`](crate::Var) and
/// [`VarAccess`](crate::access::VarAccess), so the check monomorphizes to a
/// constant branch: native-typed access carries no runtime policy cost.
///
/// A read-only variable ignores writes **silently** — no error is signaled.
/// Callers that must know whether a write took effect compare
/// [`DynVar::get_text`](crate::DynVar::get_text) (or the native value)
/// before and after.
pub trait AccessMode: 'static {
    /// Whether `set` calls reach the storage.
    const WRITABLE: bool;
}

/// Attribute may be read and written. The default policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadWrite;

impl AccessMode for ReadWrite {
    const WRITABLE: bool = true;
}

/// Attribute may only be read; every write is a silent no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOnly;

impl AccessMode for ReadOnly {
    const WRITABLE: bool = false;
}
