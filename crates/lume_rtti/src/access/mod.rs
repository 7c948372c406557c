//! Storage and access strategies for typed variables.
//!
//! This layer decouples "where is the value kept" ([`VarStorage`]:
//! [`DirectValue`] or [`GetSet`]) and "who may change it" ([`AccessMode`]:
//! [`ReadWrite`] or [`ReadOnly`]) from how the value is exposed. Both are
//! generic parameters of [`Var`](crate::Var), resolved at compile time.

mod policy;
mod storage;

pub use policy::{AccessMode, ReadOnly, ReadWrite};
pub use storage::{DirectValue, GetSet, VarAccess, VarAccessor, VarStorage};
